//! University directory route handlers and module exports.

mod search_universities;
pub use search_universities::search_universities;

mod suggest_countries;
pub use suggest_countries::suggest_countries;
