//! nbu-rates: official hryvnia exchange rates from the National Bank of Ukraine.
//!
//! Look a currency up by alphabetic code, numeric code or (fuzzy) Ukrainian
//! name, then read its rate for today, for a given day, or as a day-by-day
//! trend.
//!
//! ```no_run
//! # use nbu_rates::{Currency, NbuClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), nbu_rates::NbuError> {
//! let client = NbuClient::default();
//! match Currency::new(&client, "євро").current().await? {
//!     Some(record) => println!("{record}"),
//!     None => println!("No currency found"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
mod currency;
pub mod date;
pub mod rates;
pub mod resolve;
pub mod trend;

pub use crate::core::{Backoff, CurrencyRecord, NbuClient, NbuClientBuilder, NbuError, RetryConfig};
pub use currency::{Currency, Operation, Report};
pub use resolve::Lookup;
pub use trend::{Trend, TrendBuilder, compare_rates};
