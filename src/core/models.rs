use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::date::format_display;

/// One currency's official NBU rate on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyRecord {
    /// ISO 4217 alphabetic code (e.g. `USD`).
    pub code: String,
    /// ISO 4217 numeric code (e.g. `840`).
    pub numeric_code: u32,
    /// Hryvnias per unit of the currency.
    pub rate: Decimal,
    /// The day the rate applies to.
    pub date: NaiveDate,
    /// Ukrainian name of the currency.
    pub name: String,
}

/// Four-line report: code, rate, date and native name.
impl fmt::Display for CurrencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Currency: {};", self.code)?;
        writeln!(f, "Rate: {};", float_text(self.rate))?;
        writeln!(f, "Date: {};", format_display(self.date))?;
        write!(f, "Ukrainian name: {}.", self.name)
    }
}

/// Trailing zeros trimmed, but always one fractional digit (`27.0`, not `27`).
pub(crate) fn float_text(d: Decimal) -> String {
    let d = d.normalize();
    if d.scale() == 0 {
        format!("{d}.0")
    } else {
        d.to_string()
    }
}
