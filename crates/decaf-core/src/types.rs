//! Core types for decaf-core.
//!
//! Drinks stay as raw [`serde_json::Value`] objects so that fields this crate
//! does not know about survive the rewrite untouched. This module only names
//! the fields the normalizer reads and defines [`BrandId`], the reporting
//! form of `brand_id`.

use serde_json::Value;

/// Top-level key holding the list of drink records.
pub const DRINKS: &str = "drinks";
/// Numeric caffeine content in mg, or [`CAFFEINE_UNKNOWN`].
pub const CAFFEINE_CONTENT: &str = "caffeine_content";
/// Tri-state caffeine flag: `true`, `false` or `null` (unknown).
pub const HAS_CAFFEINE: &str = "has_caffeine";
/// Brand identifier, used for reporting only.
pub const BRAND_ID: &str = "brand_id";
/// Drink identifier, used for log context only.
pub const DRINK_ID: &str = "drink_id";

/// Sentinel stored in `caffeine_content` when the amount was never measured.
pub const CAFFEINE_UNKNOWN: f64 = -1.0;

/// A brand affected by the normalizer, as shown in the report.
///
/// The JSON kind is part of the key, so `"42"` and `42` are different
/// brands. A missing and a `null` `brand_id` collapse into one
/// [`BrandId::Unset`], shown as `None`. Brands order by their displayed
/// text, ties broken by kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BrandId {
    /// A string `brand_id`.
    Named(String),
    /// Any other non-null value, as compact JSON text.
    Other(String),
    /// `brand_id` absent or `null`.
    Unset,
}

const UNSET_LABEL: &str = "None";

impl BrandId {
    /// Build from the raw `brand_id` field of a drink, if any.
    pub fn from_field(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => BrandId::Unset,
            Some(Value::String(s)) => BrandId::Named(s.clone()),
            Some(other) => BrandId::Other(other.to_string()),
        }
    }

    fn label(&self) -> &str {
        match self {
            BrandId::Named(text) | BrandId::Other(text) => text.as_str(),
            BrandId::Unset => UNSET_LABEL,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            BrandId::Named(_) => 0,
            BrandId::Other(_) => 1,
            BrandId::Unset => 2,
        }
    }
}

impl Ord for BrandId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.label()
            .cmp(other.label())
            .then_with(|| self.kind_rank().cmp(&other.kind_rank()))
    }
}

impl PartialOrd for BrandId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for BrandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// `true` when `value` is a number equal to the unknown-caffeine sentinel.
/// Integer `-1` and float `-1.0` both qualify.
pub fn is_unknown_caffeine(value: Option<&Value>) -> bool {
    value.and_then(Value::as_f64) == Some(CAFFEINE_UNKNOWN)
}
