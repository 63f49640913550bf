//! Centralized constants for default endpoints and UA.

/// Identifies the crate to the API; overridable via the builder.
pub(crate) const USER_AGENT: &str = concat!("nbu-rates/", env!("CARGO_PKG_VERSION"));

/// NBU statistics directory base (endpoint names such as `exchange` are appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://bank.gov.ua/NBUStatService/v1/statdirectory/";

/// Endpoint that serves both the current list and date-bound lookups.
pub(crate) const EXCHANGE_ENDPOINT: &str = "exchange";
