pub mod datetime;
pub mod pagination;
pub mod query;

pub use pagination::{Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use query::{path_segment, QueryParams};
