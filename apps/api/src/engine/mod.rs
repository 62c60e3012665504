// Recommendation Engine
// Implements: skill matching, duration filtering, blended scoring, ranked responses.
// Everything below the handlers is synchronous and pure; no I/O happens here.

pub mod duration_filter;
pub mod handlers;
pub mod recommend;
pub mod skill_match;
