use std::fmt;

use chrono::NaiveDate;

use crate::core::client::RetryConfig;
use crate::core::{CurrencyRecord, NbuClient, NbuError};
use crate::rates;
use crate::trend::{Trend, TrendBuilder};

/// A high-level handle for one currency token.
///
/// The token is whatever the user typed: an alphabetic code (`usd`), a
/// numeric code (`840`) or a Ukrainian name, possibly misspelled
/// (`доллар сша`). It is resolved anew on every call.
///
/// # Example
///
/// ```no_run
/// # use nbu_rates::{Currency, NbuClient};
/// # use chrono::NaiveDate;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NbuClient::default();
/// let usd = Currency::new(&client, "usd");
///
/// if let Some(record) = usd.current().await? {
///     println!("{record}");
/// }
///
/// let start = NaiveDate::from_ymd_opt(2019, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2019, 3, 7).unwrap();
/// println!("{}", usd.trend(start, end).await?);
/// # Ok(())
/// # }
/// ```
pub struct Currency {
    client: NbuClient,
    token: String,
    retry_override: Option<RetryConfig>,
}

impl Currency {
    /// Creates a handle for `token`.
    pub fn new(client: &NbuClient, token: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            token: token.into(),
            retry_override: None,
        }
    }

    /// The token as supplied.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Overrides the client's retry policy for all calls made through this handle.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Today's rate, or `None` if the token matches no currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(token = %self.token)))]
    pub async fn current(&self) -> Result<Option<CurrencyRecord>, NbuError> {
        rates::current_with(&self.client, &self.token, self.retry_override.as_ref()).await
    }

    /// The rate on `date`, or `None` if the token matches no currency that day.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(token = %self.token)))]
    pub async fn on(&self, date: NaiveDate) -> Result<Option<CurrencyRecord>, NbuError> {
        rates::by_date_with(&self.client, &self.token, date, self.retry_override.as_ref()).await
    }

    /// Day-by-day trend over `start..=end`, fetched serially.
    ///
    /// Use [`TrendBuilder`] directly to fetch several days at once.
    ///
    /// # Errors
    ///
    /// See [`TrendBuilder::fetch`].
    pub async fn trend(&self, start: NaiveDate, end: NaiveDate) -> Result<Trend, NbuError> {
        TrendBuilder::new(&self.client, self.token.as_str(), start, end)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// Runs one [`Operation`], turning a missing currency into
    /// [`NbuError::CurrencyNotFound`].
    ///
    /// # Errors
    ///
    /// Any error of the underlying call, plus `CurrencyNotFound` when a
    /// single-record lookup matches nothing.
    pub async fn run(&self, op: Operation) -> Result<Report, NbuError> {
        let not_found = |date| NbuError::CurrencyNotFound {
            token: self.token.clone(),
            date,
        };
        match op {
            Operation::Current => self
                .current()
                .await?
                .map(Report::Record)
                .ok_or_else(|| not_found(None)),
            Operation::OnDate(date) => self
                .on(date)
                .await?
                .map(Report::Record)
                .ok_or_else(|| not_found(Some(date))),
            Operation::Trend { start, end } => self.trend(start, end).await.map(Report::Trend),
        }
    }
}

/// One query against a currency, with its dates already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Today's rate.
    Current,
    /// The rate on one day.
    OnDate(NaiveDate),
    /// The day-by-day trend over an inclusive range.
    Trend {
        /// First day.
        start: NaiveDate,
        /// Last day.
        end: NaiveDate,
    },
}

/// What an [`Operation`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A single day's record.
    Record(CurrencyRecord),
    /// A trend over a range.
    Trend(Trend),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(r) => fmt::Display::fmt(r, f),
            Self::Trend(t) => fmt::Display::fmt(t, f),
        }
    }
}
