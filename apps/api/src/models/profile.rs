use serde::{Deserialize, Serialize};

/// Self-reported preferences driving a recommendation pass. Supplied by the
/// caller per request (the UI joins its selected filter tags into the
/// `skills` string); the engine never reads profile state from anywhere
/// else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Comma-separated free-text skills, possibly empty.
    pub skills: String,
    /// Free-text location filter, possibly empty.
    pub location: String,
    /// One of "paid", "unpaid", "full-time", "part-time", "all", or empty.
    pub internship_type: String,
}
