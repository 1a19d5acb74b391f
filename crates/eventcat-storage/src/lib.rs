pub mod entities;
pub mod file;
pub mod sql;
pub mod store;

pub use file::JsonStore;
pub use sql::SqlStore;
pub use store::{EventStore, StoreError, StoreResult};
