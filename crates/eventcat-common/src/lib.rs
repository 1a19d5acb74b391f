pub mod event;
pub mod sort;

pub use event::Event;
pub use sort::{SortCriteria, sort_events};
