use async_trait::async_trait;

use eventcat_common::Event;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("event {0} not found")]
    NotFound(i64),
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),
    #[error("corrupt event data: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("db error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

/// Durable home of the event catalog. Backends are interchangeable: a flat
/// JSON file pair or a relational database behind sea-orm.
///
/// Failures propagate; the one default is that a backend with no data yet
/// starts empty instead of erroring.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// One-time bootstrap: schema sync or data-directory creation.
    async fn sync(&self) -> StoreResult<()>;

    /// Cheap probe that the backing store is reachable.
    async fn health(&self) -> StoreResult<()>;

    /// All events, in no guaranteed order.
    async fn list_events(&self) -> StoreResult<Vec<Event>>;

    async fn get_event(&self, id: i64) -> StoreResult<Option<Event>>;

    /// Ignores any caller-supplied id, assigns the next one, and returns the
    /// stored record.
    async fn create_event(&self, event: Event) -> StoreResult<Event>;

    /// Replaces every field except the id. `NotFound` when the id is absent;
    /// nothing is created as a side effect.
    async fn update_event(&self, id: i64, event: Event) -> StoreResult<Event>;

    /// Returns whether a removal occurred. Deleting a missing id is a no-op.
    async fn delete_event(&self, id: i64) -> StoreResult<bool>;
}
