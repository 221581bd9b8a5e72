//! Client-side handling of a search response: filtering, sorting and paging
//! over the in-memory result list.

pub mod filter;
pub mod pagination;
pub mod sort;
pub mod view;

pub use filter::PartFilters;
pub use pagination::{Page, clamp_page, paginate};
pub use sort::SortKey;
pub use view::{FavoriteChange, ResultsView};
