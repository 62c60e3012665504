//! Ranks a catalog of internships against a user profile.
//!
//! One synchronous pass over the catalog per call: apply the hard type
//! gate, blend skill and location signals into a 0-100 score, sort
//! descending with stable ties, and fall back to a human-readable reason
//! when nothing qualifies. Inputs are borrowed immutably and never
//! modified; identical inputs always produce identical output.

use crate::engine::duration_filter;
use crate::engine::skill_match::skill_match_percentage;
use crate::models::internship::{InternshipRecord, ScoredInternship};
use crate::models::profile::UserProfile;

/// Score for a record matched on location alone, with no skill signal to
/// rank on.
pub const LOCATION_ONLY_SCORE: u8 = 50;

/// Score for a record whose location matches but whose skills don't, when
/// both criteria were given. Ranks below any positive skill match.
pub const LOCATION_FALLBACK_SCORE: u8 = 15;

/// Why a recommendation pass produced no list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The profile carried neither skills nor a location; the catalog was
    /// never examined.
    MissingCriteria,
    /// Every record was excluded by the active filters.
    NoMatches,
}

impl EmptyReason {
    /// The user-facing message the renderer shows in place of the list.
    pub fn message(&self) -> &'static str {
        match self {
            EmptyReason::MissingCriteria => {
                "Please enter your skills and location for the best recommendations."
            }
            EmptyReason::NoMatches => {
                "No internships match your current filters. Try removing some filters."
            }
        }
    }
}

/// Outcome of a recommendation pass. The two cases are mutually exclusive:
/// a ranked list or a reason there is none, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Records that qualified, sorted descending by match percentage with
    /// ties in catalog order.
    Matches(Vec<ScoredInternship>),
    Empty(EmptyReason),
}

/// Scores and ranks `catalog` against `profile`.
///
/// Classification happens once up front: a criterion counts as given when
/// non-blank after trimming, and the type filter only engages for values
/// other than "all". Records are then visited in catalog order, the hard
/// type gate first, then the blended skill/location inclusion decision.
pub fn recommend(catalog: &[InternshipRecord], profile: &UserProfile) -> Recommendation {
    let skills = profile.skills.trim();
    let location = profile.location.trim();
    let internship_type = profile.internship_type.trim();

    let has_skills = !skills.is_empty();
    let has_location = !location.is_empty();
    let has_type = !internship_type.is_empty() && !internship_type.eq_ignore_ascii_case("all");

    if !has_skills && !has_location {
        return Recommendation::Empty(EmptyReason::MissingCriteria);
    }

    let location_needle = location.to_lowercase();
    let mut matches: Vec<ScoredInternship> = Vec::new();

    for record in catalog {
        if has_type && !duration_filter::accepts(record, internship_type) {
            continue;
        }

        let skill_score = if has_skills {
            skill_match_percentage(&record.skills, skills)
        } else {
            0
        };
        let location_match =
            has_location && record.location.to_lowercase().contains(&location_needle);

        if let Some(score) = blended_score(has_skills, has_location, skill_score, location_match) {
            matches.push(ScoredInternship {
                record: record.clone(),
                skill_match_percentage: score,
            });
        }
    }

    // Stable sort: equal scores keep their catalog order.
    matches.sort_by(|a, b| b.skill_match_percentage.cmp(&a.skill_match_percentage));

    if matches.is_empty() {
        return Recommendation::Empty(EmptyReason::NoMatches);
    }
    Recommendation::Matches(matches)
}

/// Inclusion decision and final score for one record, by case on which
/// criteria were given.
///
/// - Both: location must match; the score is the skill score, or
///   [`LOCATION_FALLBACK_SCORE`] when the skills missed entirely.
/// - Skills only: included iff the skill score is positive.
/// - Location only: included iff the location matches, at
///   [`LOCATION_ONLY_SCORE`].
fn blended_score(
    has_skills: bool,
    has_location: bool,
    skill_score: u8,
    location_match: bool,
) -> Option<u8> {
    match (has_skills, has_location) {
        (true, true) if skill_score > 0 && location_match => Some(skill_score),
        (true, true) if skill_score == 0 && location_match => Some(LOCATION_FALLBACK_SCORE),
        (true, true) => None,
        (true, false) if skill_score > 0 => Some(skill_score),
        (true, false) => None,
        (false, true) if location_match => Some(LOCATION_ONLY_SCORE),
        (false, true) => None,
        // Guarded by the early return in `recommend`.
        (false, false) => None,
    }
}
