//! Domain value objects: RecordType and Ttl.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! `Endpoint` stores the record type as the raw string it was given, so an
//! unsupported value can be reported back verbatim. `RecordType` is the
//! closed set that string is checked against.
//!
//! # Adding New Record Types
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and append it to `RecordType::ALL`
//! 3. Done. `FromStr` and the "supported values" detail follow `ALL`

use crate::domain::error::{BadValue, FieldError, field};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

// ── RecordType ───────────────────────────────────────────────────────────────

/// A DNS record type the downstream DNS publisher knows how to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "CNAME")]
    Cname,
    #[serde(rename = "TXT")]
    Txt,
    #[serde(rename = "SRV")]
    Srv,
    #[serde(rename = "NS")]
    Ns,
    #[serde(rename = "PTR")]
    Ptr,
}

/// `"supported values: A, CNAME, ..."`, built once from `RecordType::ALL`.
static SUPPORTED_VALUES: LazyLock<String> = LazyLock::new(|| {
    let names: Vec<&str> = RecordType::ALL.iter().map(RecordType::as_str).collect();
    format!("supported values: {}", names.join(", "))
});

impl RecordType {
    /// Every supported record type, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::A,
        Self::Cname,
        Self::Txt,
        Self::Srv,
        Self::Ns,
        Self::Ptr,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
        }
    }

    /// Detail attached to a not-supported record type error.
    pub fn supported_values() -> &'static str {
        SUPPORTED_VALUES.as_str()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RecordType> for String {
    fn from(record: RecordType) -> Self {
        record.as_str().to_owned()
    }
}

impl FromStr for RecordType {
    type Err = FieldError;

    /// Exact, case-sensitive match: `"cname"` is not a record type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|record| record.as_str() == s)
            .ok_or_else(|| {
                FieldError::not_supported(
                    field::RECORD_TYPE,
                    BadValue::String(s.to_owned()),
                    Self::supported_values(),
                )
            })
    }
}

// ── Ttl ──────────────────────────────────────────────────────────────────────

/// Record time-to-live in seconds.
///
/// Signed because manifests can carry any integer; only positive values
/// pass validation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ttl(pub i64);

impl Ttl {
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    pub const fn seconds(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Ttl {
    fn from(seconds: i64) -> Self {
        Self(seconds)
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
