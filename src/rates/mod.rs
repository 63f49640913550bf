//! Rate lookups against the `exchange` endpoint.
//!
//! Every call fetches fresh data; nothing is cached between calls.

mod api;

use api::{ExchangeQuery, fetch_exchange};

use chrono::NaiveDate;

use crate::core::client::RetryConfig;
use crate::core::{CurrencyRecord, NbuClient, NbuError};
use crate::resolve::{self, Lookup};

/// Fetches the full list of official rates, for today or for `date`.
///
/// # Errors
///
/// Returns an error if the request fails, the API answers with a non-success
/// status, or the body is not a list of exchange records.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_list(
    client: &NbuClient,
    date: Option<NaiveDate>,
) -> Result<Vec<CurrencyRecord>, NbuError> {
    let query = date.map_or(ExchangeQuery::Current, ExchangeQuery::OnDate);
    fetch_exchange(client, &query, None).await
}

/// Today's record for `token`, or `None` if nothing matches.
///
/// # Errors
///
/// Fails only on transport, status or decoding errors; an unknown currency is `Ok(None)`.
pub async fn fetch_current(
    client: &NbuClient,
    token: &str,
) -> Result<Option<CurrencyRecord>, NbuError> {
    current_with(client, token, None).await
}

/// The record for `token` on `date`, or `None` if nothing matches.
///
/// Three-letter codes are asked for directly; numeric codes and names are
/// resolved against that day's full list.
///
/// # Errors
///
/// Fails only on transport, status or decoding errors; an unknown currency is `Ok(None)`.
pub async fn fetch_by_date(
    client: &NbuClient,
    token: &str,
    date: NaiveDate,
) -> Result<Option<CurrencyRecord>, NbuError> {
    by_date_with(client, token, date, None).await
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, retry_override), err))]
pub(crate) async fn current_with(
    client: &NbuClient,
    token: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<Option<CurrencyRecord>, NbuError> {
    let records = fetch_exchange(client, &ExchangeQuery::Current, retry_override).await?;
    Ok(resolve::resolve(token, &records).cloned())
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, retry_override), err))]
pub(crate) async fn by_date_with(
    client: &NbuClient,
    token: &str,
    date: NaiveDate,
    retry_override: Option<&RetryConfig>,
) -> Result<Option<CurrencyRecord>, NbuError> {
    if let Lookup::Code(code) = Lookup::classify(token) {
        let query = ExchangeQuery::CodeOnDate(code, date);
        let records = fetch_exchange(client, &query, retry_override).await?;
        return Ok(records.into_iter().next());
    }

    let records = fetch_exchange(client, &ExchangeQuery::OnDate(date), retry_override).await?;
    Ok(resolve::resolve_without_code(token, &records).cloned())
}
