//! Duration filtering: the hard type/commitment gate applied before scoring.
//!
//! Failing the gate excludes a record unconditionally; no skill or location
//! signal can bring it back.

use crate::models::internship::InternshipRecord;

/// Returns whether an internship passes the given type filter.
///
/// Recognized filter values (matched case-insensitively): `"paid"` requires
/// `is_paid`, `"unpaid"` its negation, `"full-time"` / `"part-time"` an
/// exact match on the lowercased `commitment`. Any other value, including
/// `"all"` and the empty string, gates nothing.
pub fn accepts(internship: &InternshipRecord, filter: &str) -> bool {
    let filter = filter.to_lowercase();
    match filter.as_str() {
        "paid" => internship.is_paid,
        "unpaid" => !internship.is_paid,
        "full-time" | "part-time" => internship.commitment.to_lowercase() == filter,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internship(is_paid: bool, commitment: &str) -> InternshipRecord {
        InternshipRecord {
            is_paid,
            commitment: commitment.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_paid_filter_requires_paid_flag() {
        assert!(accepts(&internship(true, ""), "paid"));
        assert!(!accepts(&internship(false, ""), "paid"));
    }

    #[test]
    fn test_unpaid_filter_accepts_unpaid_only() {
        assert!(accepts(&internship(false, ""), "unpaid"));
        assert!(!accepts(&internship(true, ""), "unpaid"));
    }

    #[test]
    fn test_commitment_match_is_case_insensitive() {
        assert!(accepts(&internship(false, "Full-Time"), "full-time"));
        assert!(accepts(&internship(false, "full-time"), "Full-Time"));
        assert!(accepts(&internship(true, "PART-TIME"), "part-time"));
    }

    #[test]
    fn test_commitment_mismatch_rejects() {
        assert!(!accepts(&internship(true, "part-time"), "full-time"));
        assert!(!accepts(&internship(true, ""), "part-time"));
    }

    #[test]
    fn test_all_and_unknown_values_gate_nothing() {
        let record = internship(false, "part-time");
        assert!(accepts(&record, "all"));
        assert!(accepts(&record, ""));
        assert!(accepts(&record, "remote"));
    }
}
