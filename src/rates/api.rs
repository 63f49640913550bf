use chrono::NaiveDate;
use url::Url;

use crate::core::client::RetryConfig;
use crate::core::{CurrencyRecord, NbuClient, NbuError, net, wire};
use crate::date::encode_for_query;

/// The three shapes of `exchange` request the API supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ExchangeQuery {
    /// Today's full list.
    Current,
    /// Full list for one day.
    OnDate(NaiveDate),
    /// Zero or one record: one code on one day.
    CodeOnDate(String, NaiveDate),
}

impl ExchangeQuery {
    fn url(&self, client: &NbuClient) -> Result<Url, NbuError> {
        let mut url = client.exchange_url()?;
        {
            let mut qp = url.query_pairs_mut();
            match self {
                Self::Current => {}
                Self::OnDate(date) => {
                    qp.append_pair("date", &encode_for_query(*date));
                }
                Self::CodeOnDate(code, date) => {
                    qp.append_pair("valcode", code);
                    qp.append_pair("date", &encode_for_query(*date));
                }
            }
            qp.append_key_only("json");
        }
        Ok(url)
    }

    /// Fixture file key for `NBU_RECORD`.
    fn fixture_key(&self) -> String {
        match self {
            Self::Current => "current".to_string(),
            Self::OnDate(date) => encode_for_query(*date),
            Self::CodeOnDate(code, date) => format!("{code}_{}", encode_for_query(*date)),
        }
    }
}

pub(super) async fn fetch_exchange(
    client: &NbuClient,
    query: &ExchangeQuery,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<CurrencyRecord>, NbuError> {
    let url = query.url(client)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(url = %url, "GET exchange");

    let resp = client
        .send_with_retry(
            client
                .http()
                .get(url.clone())
                .header("accept", "application/json"),
            retry_override,
        )
        .await?;

    if !resp.status().is_success() {
        return Err(NbuError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = net::get_text(resp, "exchange", &query.fixture_key(), "json").await?;
    wire::decode_exchange(&body)
}
