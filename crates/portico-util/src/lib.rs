//! PORTICO Utilities
//!
//! Pure helpers shared by the view layers: input formatting, POST body
//! encoding, query-string parsing and table sorting/filtering.
//! No state, no network.

mod format;
mod query;
mod table;

pub use format::{capitalize, format_phone_num, format_zip_code, page_title};
pub use query::{postify, Query};
pub use table::{remove_by_id, search_filter, sort_values, SortOrder};
