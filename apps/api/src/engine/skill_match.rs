//! Skill matching: 0-100 compatibility between a user's skills and an
//! internship's required skills.
//!
//! Both sides are normalized into sets (trimmed, lowercased, blanks
//! dropped, duplicates collapsed) before intersecting, so `"Python, sql"`
//! and `["python", "SQL"]` are a perfect match.

use std::collections::HashSet;

/// Score for an internship that lists no required skills. Such postings
/// count as a guaranteed partial match: never excluded for skill reasons,
/// never ranked as perfect.
pub const NO_REQUIREMENTS_SCORE: u8 = 50;

/// Computes the percentage of an internship's required skills the user
/// possesses.
///
/// - No (usable) required skills → [`NO_REQUIREMENTS_SCORE`].
/// - No (usable) user skills → 0.
/// - Otherwise `round(|U ∩ R| / |R| * 100)`, rounding half up
///   (1/3 → 33, 2/3 → 67, 1/8 → 13).
pub fn skill_match_percentage(required_skills: &[String], user_skills_raw: &str) -> u8 {
    let required = normalize_skill_set(required_skills.iter().map(String::as_str));
    if required.is_empty() {
        return NO_REQUIREMENTS_SCORE;
    }

    let user = normalize_skill_set(user_skills_raw.split(','));
    if user.is_empty() {
        return 0;
    }

    let matched = user.intersection(&required).count();
    ((matched as f64 / required.len() as f64) * 100.0).round() as u8
}

/// Trims, lowercases, and dedupes skill tokens, dropping blanks.
fn normalize_skill_set<'a, I>(tokens: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
