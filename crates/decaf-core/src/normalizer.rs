//! Normalizer — clears `has_caffeine` on drinks with unknown caffeine content.
//!
//! [`normalize_document`] is the whole algorithm: one in-order walk over
//! `drinks`, mutating the document in place. It never touches the
//! filesystem; see [`patch`](crate::patch) for the load/save wrapper.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::{PatchError, ProcessingError};
use crate::types::{self, BrandId};

/// Outcome of one normalizer pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Number of drinks whose `has_caffeine` was cleared.
    pub updated: usize,
    /// Distinct brands of the cleared drinks, in ascending order.
    pub affected_brands: BTreeSet<BrandId>,
}

impl NormalizeReport {
    pub fn brand_count(&self) -> usize {
        self.affected_brands.len()
    }

    /// Affected brands joined with `", "` in sorted order.
    pub fn brand_list(&self) -> String {
        self.affected_brands
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn record(&mut self, brand: BrandId) {
        self.updated += 1;
        self.affected_brands.insert(brand);
    }
}

impl std::fmt::Display for NormalizeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Successfully updated {} drinks.", self.updated)?;
        write!(
            f,
            "Affected brands ({}): {}",
            self.brand_count(),
            self.brand_list()
        )
    }
}

/// Clear `has_caffeine` on every drink whose `caffeine_content` is `-1`.
///
/// A document without a `drinks` key (or that is not an object at all) is
/// left alone and yields an empty report. `drinks` that is not an array, or
/// an entry that is not an object, is a [`ProcessingError::Shape`]; drinks
/// before the offending entry may already have been mutated in memory.
pub fn normalize_document(doc: &mut Value) -> Result<NormalizeReport, PatchError> {
    let mut report = NormalizeReport::default();

    let Some(drinks) = doc.as_object_mut().and_then(|o| o.get_mut(types::DRINKS)) else {
        tracing::debug!("document has no `drinks` key; nothing to normalize");
        return Ok(report);
    };

    let Value::Array(drinks) = drinks else {
        tracing::warn!(kind = json_kind(drinks), "`drinks` is not a list");
        return Err(ProcessingError::shape(format!(
            "`drinks` must be a list, found {}",
            json_kind(drinks)
        ))
        .into());
    };

    for (index, drink) in drinks.iter_mut().enumerate() {
        let Value::Object(drink) = drink else {
            tracing::warn!(index, kind = json_kind(drink), "drink is not an object");
            return Err(ProcessingError::shape(format!(
                "drink at index {index} must be an object, found {}",
                json_kind(drink)
            ))
            .into());
        };

        if let Some(brand) = clear_unknown_caffeine(drink) {
            let drink_id = drink.get(types::DRINK_ID).unwrap_or(&Value::Null);
            tracing::debug!(
                index,
                drink_id = %drink_id,
                brand = %brand,
                "cleared has_caffeine"
            );
            report.record(brand);
        }
    }

    Ok(report)
}

/// Clear `has_caffeine` if the drink carries the sentinel and a known flag.
/// Returns the drink's brand when it was changed.
fn clear_unknown_caffeine(drink: &mut Map<String, Value>) -> Option<BrandId> {
    if !types::is_unknown_caffeine(drink.get(types::CAFFEINE_CONTENT)) {
        return None;
    }
    // Absent counts as unknown already.
    let flag = drink.get_mut(types::HAS_CAFFEINE)?;
    if flag.is_null() {
        return None;
    }
    *flag = Value::Null;
    Some(BrandId::from_field(drink.get(types::BRAND_ID)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
