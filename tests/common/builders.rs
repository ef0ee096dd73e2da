//! Test builders — ergonomic constructors for drinks and documents.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. Fields are inserted in call order, so the rendered JSON
//! keeps the order the test wrote them in.

use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// DrinkBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a single drink record.
///
/// # Example
///
/// ```rust
/// let drink = DrinkBuilder::new("d-1")
///     .brand("acme")
///     .caffeine(-1)
///     .has_caffeine(true)
///     .build();
/// ```
pub struct DrinkBuilder {
    fields: Map<String, Value>,
}

impl DrinkBuilder {
    pub fn new(drink_id: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("drink_id".to_string(), Value::String(drink_id.into()));
        Self { fields }
    }

    pub fn brand(self, brand_id: impl Into<Value>) -> Self {
        self.field("brand_id", brand_id)
    }

    pub fn caffeine(self, content: impl Into<Value>) -> Self {
        self.field("caffeine_content", content)
    }

    pub fn has_caffeine(self, flag: impl Into<Value>) -> Self {
        self.field("has_caffeine", flag)
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Wrap drinks in a `{"drinks": [...]}` document.
pub fn document(drinks: impl IntoIterator<Item = Value>) -> Value {
    serde_json::json!({ "drinks": drinks.into_iter().collect::<Vec<_>>() })
}

/// A drink that the normalizer must clear.
pub fn sentinel_drink(id: &str, brand: &str, flag: bool) -> Value {
    DrinkBuilder::new(id)
        .brand(brand)
        .caffeine(-1)
        .has_caffeine(flag)
        .build()
}

/// A drink with a measured caffeine content.
pub fn measured_drink(id: &str, brand: &str, mg: i64, flag: bool) -> Value {
    DrinkBuilder::new(id)
        .brand(brand)
        .caffeine(mg)
        .has_caffeine(flag)
        .build()
}

/// Build `n` drinks cycling through sentinel/measured/unknown shapes across
/// `brands` brands. Every third drink is a sentinel drink with a known flag.
pub fn build_drinks(n: usize, brands: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            let brand = format!("brand-{:02}", i % brands.max(1));
            let id = format!("drink-{i}");
            match i % 3 {
                0 => sentinel_drink(&id, &brand, i % 2 == 0),
                1 => measured_drink(&id, &brand, (i * 10) as i64, true),
                _ => DrinkBuilder::new(id)
                    .brand(brand)
                    .caffeine(-1)
                    .has_caffeine(Value::Null)
                    .build(),
            }
        })
        .collect()
}
