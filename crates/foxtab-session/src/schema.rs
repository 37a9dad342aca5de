//! Session document schema
//!
//! Mirrors the parts of `sessionstore` JSON the extractor reads. Every field
//! except `windows` may be missing, `null` or of an unexpected scalar type;
//! such values read as absent. `null` array elements read as empty records.
//! Unknown fields are ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionDocument {
    #[serde(deserialize_with = "nulls_as_default")]
    pub windows: Vec<WindowEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowEntry {
    #[serde(default, deserialize_with = "optional_seq")]
    pub tabs: Vec<TabEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabEntry {
    /// Written by Firefox but not reliable across versions; never used for positions
    #[serde(default, deserialize_with = "lenient_int")]
    pub index: Option<i64>,
    #[serde(default, deserialize_with = "optional_seq")]
    pub entries: Vec<NavigationEntry>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub last_accessed: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub pinned: Option<bool>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NavigationEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
}

impl TabEntry {
    /// The navigation entry the tab is currently showing
    pub fn current_entry(&self) -> Option<&NavigationEntry> {
        self.entries.last()
    }
}

/// A required array whose `null` elements become default records.
fn nulls_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Vec::<Option<T>>::deserialize(deserializer)?;
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// Like [`nulls_as_default`], but the array itself may also be `null`.
fn optional_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// Accept integers, floats (truncated) and null; anything else reads as absent.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        _ => None,
    })
}
