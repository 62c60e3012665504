use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single internship posting as supplied by the catalog.
///
/// Records are read-only to the engine: scoring never mutates them, it only
/// copies them into `ScoredInternship` wrappers. Field names follow the
/// catalog's camelCase JSON documents, and every field is defaulted so a
/// sparse document degrades to empty values instead of a deserialization
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipRecord {
    /// Opaque identifier assigned by the catalog. Never interpreted beyond
    /// equality; an empty id only degrades the by-id lookup.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    /// Free-text location, matched by case-insensitive substring.
    #[serde(default)]
    pub location: String,
    /// Required skills. An empty list means the posting states no
    /// requirements, which scores as a guaranteed partial match.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub is_paid: bool,
    /// Expected values "full-time" / "part-time"; anything else is free text
    /// and only the hard type filter ever looks at it.
    #[serde(default)]
    pub commitment: String,
    /// Display-only; passed through untouched (catalogs store numbers or
    /// strings here interchangeably).
    #[serde(default)]
    pub stipend: Value,
    /// Display-only; passed through untouched.
    #[serde(default)]
    pub duration: Value,
    #[serde(default)]
    pub url: String,
}

/// An internship that qualified for the result list, carrying its blended
/// match percentage. Serializes flattened so the renderer sees the original
/// record fields plus `skillMatchPercentage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredInternship {
    #[serde(flatten)]
    pub record: InternshipRecord,
    /// Blended 0-100 score; drives the descending result order.
    pub skill_match_percentage: u8,
}
