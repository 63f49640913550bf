//! Matching a user-supplied currency token against API records.
//!
//! A token is classified by shape: a three-letter code, a numeric code, or a
//! (possibly misspelled) Ukrainian name. Names are matched fuzzily and the
//! first record at or above [`NAME_MATCH_THRESHOLD`] wins, in API order.

pub mod similarity;

use crate::core::CurrencyRecord;

/// Minimum [`similarity::ratio`] for a name token to match a record.
pub const NAME_MATCH_THRESHOLD: f64 = 0.75;

/// How a raw token will be matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Alphabetic ISO code, uppercased.
    Code(String),
    /// Numeric ISO code.
    Numeric(u32),
    /// Native name, lowercased.
    Name(String),
    /// Too short to be a name and not a code; matches nothing.
    Unsupported,
}

impl Lookup {
    /// Classifies a token. Lengths are counted in characters.
    pub fn classify(token: &str) -> Self {
        let len = token.chars().count();
        let numeric = !token.is_empty() && token.chars().all(|c| c.is_ascii_digit());

        if len == 3 && !numeric {
            Self::Code(token.to_uppercase())
        } else if numeric {
            token.parse().map_or(Self::Unsupported, Self::Numeric)
        } else if len > 3 {
            Self::Name(token.to_lowercase())
        } else {
            Self::Unsupported
        }
    }

    /// True if `record` satisfies this lookup.
    pub fn matches(&self, record: &CurrencyRecord) -> bool {
        match self {
            Self::Code(code) => record.code.eq_ignore_ascii_case(code),
            Self::Numeric(n) => record.numeric_code == *n,
            Self::Name(name) => {
                similarity::ratio(name, &record.name.to_lowercase()) >= NAME_MATCH_THRESHOLD
            }
            Self::Unsupported => false,
        }
    }

    /// First record in `records` that satisfies this lookup.
    pub fn find<'r>(&self, records: &'r [CurrencyRecord]) -> Option<&'r CurrencyRecord> {
        records.iter().find(|r| self.matches(r))
    }
}

/// Resolves `token` against `records` using every rule.
pub fn resolve<'r>(token: &str, records: &'r [CurrencyRecord]) -> Option<&'r CurrencyRecord> {
    Lookup::classify(token).find(records)
}

/// Like [`resolve`], but a three-letter code matches nothing.
///
/// Used on date-bound lists, where codes are looked up by a dedicated query.
pub fn resolve_without_code<'r>(
    token: &str,
    records: &'r [CurrencyRecord],
) -> Option<&'r CurrencyRecord> {
    match Lookup::classify(token) {
        Lookup::Code(_) => None,
        lookup => lookup.find(records),
    }
}
