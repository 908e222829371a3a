// Resume screening pipeline: text extraction, skill matching, scoring, ranking.
// The HTTP handler is thin glue; all invariants live in the other modules.

pub mod extract;
pub mod handlers;
pub mod rank;
pub mod score;
pub mod skills;
