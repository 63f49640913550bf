//! Date handling: free-form user input, the API's `YYYYMMDD` query
//! parameter, and the `dd.mm.yyyy` form the API reports dates in.

use chrono::{Datelike, NaiveDate};

use crate::core::NbuError;

const EXCHANGE_DATE_FMT: &str = "%d.%m.%Y";

// Years outside this range cannot be encoded as four query digits.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Parses a day-first date from free-form text.
///
/// Every run of ASCII digits is collected and the first three are read as
/// day, month and year; whatever separates them is ignored, so `07.03.2019`,
/// `7/3/2019` and `07 03 2019` all work. An apostrophe counts as part of a
/// run rather than a separator, so `07'03'2019` is not a date. Returns `None` instead of
/// failing when fewer than three runs are present or they do not form a
/// calendar date in years 1 through 9999.
///
/// ```
/// # use nbu_rates::date::parse_date;
/// # use chrono::NaiveDate;
/// assert_eq!(parse_date("07.03.2019"), NaiveDate::from_ymd_opt(2019, 3, 7));
/// assert_eq!(parse_date("not a date"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let mut groups = digit_runs(text);
    let day = groups.next()?.parse::<u32>().ok()?;
    let month = groups.next()?.parse::<u32>().ok()?;
    let year = groups.next()?.parse::<i32>().ok()?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// [`parse_date`], with failure reported as [`NbuError::InvalidDate`].
///
/// # Errors
///
/// Returns `InvalidDate` carrying the original text when it is not a date.
pub fn require_date(text: &str) -> Result<NaiveDate, NbuError> {
    parse_date(text).ok_or_else(|| NbuError::InvalidDate(text.to_string()))
}

// `'` stays inside a run, which then fails to parse as a number.
fn digit_runs(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_digit() || c == '\''))
        .filter(|run| !run.is_empty())
}

/// Formats a date as the API's `date` query parameter: `YYYYMMDD`, with the
/// year zero-padded to four digits.
///
/// ```
/// # use nbu_rates::date::encode_for_query;
/// # use chrono::NaiveDate;
/// let d = NaiveDate::from_ymd_opt(5, 3, 7).unwrap();
/// assert_eq!(encode_for_query(d), "00050307");
/// ```
pub fn encode_for_query(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Parses the `exchangedate` field of an API record.
pub fn parse_exchange_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), EXCHANGE_DATE_FMT).ok()
}

/// Renders a date the way the API reports it.
pub fn format_display(date: NaiveDate) -> String {
    date.format(EXCHANGE_DATE_FMT).to_string()
}
