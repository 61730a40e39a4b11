pub mod apply;
pub mod letters;
pub mod pagination;

pub use apply::{filter_by_letter, search};
pub use letters::distinct_leading_letters;
pub use pagination::paginate;
