use rust_decimal::Decimal;
use std::str::FromStr;
use serde::Deserialize;

use crate::core::{CurrencyRecord, NbuError};
use crate::date::parse_exchange_date;

/// One element of the `exchange` endpoint's JSON array.
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct ExchangeNode {
    pub(crate) r030: u32,
    pub(crate) txt: String,
    pub(crate) rate: f64,
    pub(crate) cc: String,
    pub(crate) exchangedate: String,
}

impl TryFrom<ExchangeNode> for CurrencyRecord {
    type Error = NbuError;

    fn try_from(n: ExchangeNode) -> Result<Self, Self::Error> {
        // f64 Display is the shortest round-tripping form, so 26.9952 stays 26.9952.
        let rate = Decimal::from_str(&n.rate.to_string())
            .map_err(|e| NbuError::Data(format!("rate {} for {}: {e}", n.rate, n.cc)))?;
        let date = parse_exchange_date(&n.exchangedate).ok_or_else(|| {
            NbuError::Data(format!("exchangedate {:?} for {} is not dd.mm.yyyy", n.exchangedate, n.cc))
        })?;

        Ok(Self {
            code: n.cc,
            numeric_code: n.r030,
            rate,
            date,
            name: n.txt,
        })
    }
}

/// Decodes a whole `exchange` response body into records, keeping API order.
pub(crate) fn decode_exchange(body: &str) -> Result<Vec<CurrencyRecord>, NbuError> {
    let nodes: Vec<ExchangeNode> = serde_json::from_str(body)?;
    nodes.into_iter().map(CurrencyRecord::try_from).collect()
}
