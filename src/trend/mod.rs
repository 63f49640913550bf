//! Day-by-day rate trends.
//!
//! A [`Trend`] holds one rate per calendar day of a range and renders as the
//! trend string: a leading `0` followed by the signed change between each
//! pair of consecutive days, e.g. `0 +0.5 -0.3`.

use std::fmt;

use chrono::NaiveDate;
use futures::{StreamExt, stream};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::client::RetryConfig;
use crate::core::models::float_text;
use crate::core::{NbuClient, NbuError};
use crate::rates;

/// Decimal places rates and deltas are rounded to.
const RATE_DP: u32 = 2;

/// Rates for consecutive days, in date order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trend {
    start: NaiveDate,
    end: NaiveDate,
    rates: Vec<Decimal>,
}

impl Trend {
    /// Builds a trend from already-fetched rates, rounding each to two places.
    ///
    /// Rates are rounded as the binary `f64` the API sent, so `27.045` (stored
    /// as `27.04499…`) becomes `27.05`, and `27.125` (an exact tie) becomes
    /// `27.12`.
    ///
    /// # Errors
    ///
    /// Returns [`NbuError::ReversedRange`] if `start > end`, and
    /// [`NbuError::Data`] if `rates` does not hold exactly one rate per day.
    pub fn from_rates(
        start: NaiveDate,
        end: NaiveDate,
        rates: impl IntoIterator<Item = Decimal>,
    ) -> Result<Self, NbuError> {
        if start > end {
            return Err(NbuError::ReversedRange { start, end });
        }
        let rates: Vec<Decimal> = rates.into_iter().map(round_rate).collect();
        let days = (end - start).num_days() + 1;
        if i64::try_from(rates.len()).ok() != Some(days) {
            return Err(NbuError::Data(format!(
                "{} rates for a {days}-day range",
                rates.len()
            )));
        }
        Ok(Self { start, end, rates })
    }

    /// First day of the range.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Rounded rates, one per day.
    pub fn rates(&self) -> &[Decimal] {
        &self.rates
    }

    /// Signed change between each pair of consecutive days.
    pub fn deltas(&self) -> Vec<String> {
        self.rates
            .windows(2)
            .map(|w| compare_rates(w[0], w[1]))
            .collect()
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The leading 0 is a fixed prefix, not a comparison.
        f.write_str("0")?;
        for delta in self.deltas() {
            write!(f, " {delta}")?;
        }
        Ok(())
    }
}

/// Describes the move from `first` to `second`: `-d` for a fall, `+d` for a
/// rise, `0` when unchanged, where `d` is the difference rounded to two places.
///
/// ```
/// # use nbu_rates::trend::compare_rates;
/// # use rust_decimal::Decimal;
/// assert_eq!(compare_rates(Decimal::new(275, 1), Decimal::new(270, 1)), "-0.5");
/// assert_eq!(compare_rates(Decimal::new(270, 1), Decimal::new(275, 1)), "+0.5");
/// assert_eq!(compare_rates(Decimal::new(270, 1), Decimal::new(270, 1)), "0");
/// ```
pub fn compare_rates(first: Decimal, second: Decimal) -> String {
    match first.cmp(&second) {
        std::cmp::Ordering::Greater => format!("-{}", format_delta(first - second)),
        std::cmp::Ordering::Less => format!("+{}", format_delta(second - first)),
        std::cmp::Ordering::Equal => "0".to_string(),
    }
}

fn format_delta(d: Decimal) -> String {
    float_text(d.round_dp(RATE_DP))
}

// Rates arrive as the shortest text of an f64, which parses back to the same
// f64. Rounding that value's exact expansion matches float rounding; rounding
// the short text does not when it ends in a half cent.
fn round_rate(rate: Decimal) -> Decimal {
    rate.to_string()
        .parse::<f64>()
        .ok()
        .and_then(Decimal::from_f64_retain)
        .unwrap_or(rate)
        .round_dp(RATE_DP)
}

/// Fetches a trend for `token` over `start..=end`, one day at a time.
///
/// # Errors
///
/// See [`TrendBuilder::fetch`].
pub async fn build_sequence(
    client: &NbuClient,
    token: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Trend, NbuError> {
    TrendBuilder::new(client, token, start, end).fetch().await
}

/// A builder for fetching a currency's rate over a range of days.
pub struct TrendBuilder<'a> {
    client: &'a NbuClient,
    token: String,
    start: NaiveDate,
    end: NaiveDate,
    concurrency: usize,
    retry_override: Option<RetryConfig>,
}

impl<'a> TrendBuilder<'a> {
    /// Creates a builder for `token` over `start..=end` (both inclusive).
    pub fn new(
        client: &'a NbuClient,
        token: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            client,
            token: token.into(),
            start,
            end,
            concurrency: 1,
            retry_override: None,
        }
    }

    /// Number of days fetched at once. Default: 1 (strictly serial).
    ///
    /// Results are assembled in date order regardless of completion order.
    #[must_use]
    pub fn concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }

    /// Overrides the client's retry policy for these requests.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches every day of the range.
    ///
    /// # Errors
    ///
    /// - [`NbuError::ReversedRange`] if `start > end`; no request is made.
    /// - [`NbuError::CurrencyNotFound`] naming the earliest day with no
    ///   matching record; no partial trend is returned.
    /// - Any transport, status or decoding error from a daily request.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(token = %self.token, start = %self.start, end = %self.end)))]
    pub async fn fetch(self) -> Result<Trend, NbuError> {
        let (start, end) = (self.start, self.end);
        if start > end {
            return Err(NbuError::ReversedRange { start, end });
        }

        let client = self.client;
        let token = self.token.as_str();
        let retry = self.retry_override.as_ref();

        let days = start.iter_days().take_while(move |d| *d <= end);
        let mut fetches = stream::iter(days)
            .map(|day| async move { (day, rates::by_date_with(client, token, day, retry).await) })
            .buffered(self.concurrency);

        let mut collected = Vec::new();
        while let Some((day, result)) = fetches.next().await {
            match result? {
                Some(record) => collected.push(record.rate),
                None => {
                    return Err(NbuError::CurrencyNotFound {
                        token: token.to_string(),
                        date: Some(day),
                    });
                }
            }
        }

        Trend::from_rates(start, end, collected)
    }
}
