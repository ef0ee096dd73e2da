//! Static drinks documents used across harnesses, plus helpers that put them
//! on disk.

use std::path::{Path, PathBuf};

/// The two-drink example: one sentinel drink, one measured drink.
pub const DOC_EXAMPLE: &str = r#"{"drinks": [{"caffeine_content": -1, "has_caffeine": true, "brand_id": "acme"}, {"caffeine_content": 5, "has_caffeine": true, "brand_id": "zen"}]}"#;

/// A realistic slice of the bundled sample data: nested sugar tables,
/// non-ASCII names, top-level metadata around `drinks`.
pub const DOC_SAMPLE: &str = r#"{
  "version": 2,
  "brands": [
    { "brand_id": "50lan", "name": "50嵐" },
    { "brand_id": "kebuke", "name": "可不可熟成紅茶" }
  ],
  "drinks": [
    {
      "drink_id": "50lan-001",
      "brand_id": "50lan",
      "name": "四季春青茶",
      "category": "tea",
      "base_calories": 120,
      "calories_by_sugar": { "full": 120, "half": 60, "none": 0 },
      "has_caffeine": true,
      "caffeine_content": -1,
      "available_sugar_levels": ["full", "half", "none"]
    },
    {
      "drink_id": "50lan-002",
      "brand_id": "50lan",
      "name": "波霸奶茶",
      "category": "milk_tea",
      "base_calories": 450,
      "has_caffeine": true,
      "caffeine_content": 180
    },
    {
      "drink_id": "kebuke-001",
      "brand_id": "kebuke",
      "name": "熟成紅茶",
      "category": "tea",
      "base_calories": 90,
      "has_caffeine": false,
      "caffeine_content": -1
    },
    {
      "drink_id": "kebuke-002",
      "brand_id": "kebuke",
      "name": "白玉歐蕾",
      "category": "milk_tea",
      "base_calories": 380,
      "has_caffeine": null,
      "caffeine_content": -1
    },
    {
      "drink_id": "50lan-003",
      "brand_id": "50lan",
      "name": "檸檬綠",
      "category": "fruit_tea",
      "base_calories": 200,
      "has_caffeine": true,
      "caffeine_content": -1
    }
  ]
}"#;

/// Valid JSON with no `drinks` key.
pub const DOC_NO_DRINKS: &str = r#"{"brands": [{"brand_id": "acme"}], "version": 1}"#;

/// Truncated mid-array.
pub const DOC_MALFORMED: &str = r#"{"drinks": [{"caffeine_content": -1, "has_caffeine": true"#;

/// `drinks` present but not a list.
pub const DOC_DRINKS_NOT_LIST: &str = r#"{"drinks": {"caffeine_content": -1, "has_caffeine": true}}"#;

/// File name used for every document written by [`write_doc`].
pub const DOC_FILE_NAME: &str = "SampleData.json";

/// Write `contents` to `<dir>/SampleData.json` and return the path.
pub fn write_doc(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(DOC_FILE_NAME);
    std::fs::write(&path, contents).expect("write fixture document");
    path
}

/// Read a document back as text.
pub fn read_doc(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read document")
}

/// Read a document back as parsed JSON.
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&read_doc(path)).expect("document is valid JSON")
}
