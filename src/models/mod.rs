pub mod cart;
pub mod criteria;
pub mod history;
pub mod part;
pub mod vehicle;

pub use cart::{Cart, CartItem};
pub use criteria::{SearchCriteria, SearchForm, SearchRequest, ValidationError};
pub use history::{NewSearchHistory, SearchHistoryEntry};
pub use part::{Availability, Part};
