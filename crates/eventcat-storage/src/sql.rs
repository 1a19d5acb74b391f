use async_trait::async_trait;
use sea_orm::{Database, DatabaseConnection, DbErr, EntityTrait, Schema};

use eventcat_common::Event;

use crate::entities;
use crate::entities::events::active_from_event;
use crate::store::{EventStore, StoreError, StoreResult};

/// Relational backend. Ids come from the autoincrement primary key, which
/// keeps them unique across restarts without a counter file.
#[derive(Clone)]
pub struct SqlStore {
    db: DatabaseConnection,
}

impl SqlStore {
    pub async fn connect(dsn: &str) -> Result<Self, DbErr> {
        let db = Database::connect(dsn).await?;
        Ok(Self { db })
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl EventStore for SqlStore {
    /// Entity-first schema sync, enabled at bootstrap.
    async fn sync(&self) -> StoreResult<()> {
        Schema::new(self.db.get_database_backend())
            .builder()
            .register(entities::Events)
            .sync(&self.db)
            .await
            .map_err(StoreError::from)
    }

    async fn health(&self) -> StoreResult<()> {
        entities::Events::find().one(&self.db).await?;
        Ok(())
    }

    async fn list_events(&self) -> StoreResult<Vec<Event>> {
        let models = entities::Events::find().all(&self.db).await?;
        Ok(models.into_iter().map(Event::from).collect())
    }

    async fn get_event(&self, id: i64) -> StoreResult<Option<Event>> {
        let model = entities::Events::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Event::from))
    }

    async fn create_event(&self, event: Event) -> StoreResult<Event> {
        let result = entities::Events::insert(active_from_event(event, None))
            .exec(&self.db)
            .await?;
        let model = entities::Events::find_by_id(result.last_insert_id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::NotFound(result.last_insert_id))?;
        Ok(model.into())
    }

    async fn update_event(&self, id: i64, event: Event) -> StoreResult<Event> {
        if entities::Events::find_by_id(id)
            .one(&self.db)
            .await?
            .is_none()
        {
            return Err(StoreError::NotFound(id));
        }
        let model = entities::Events::update(active_from_event(event, Some(id)))
            .exec(&self.db)
            .await?;
        Ok(model.into())
    }

    async fn delete_event(&self, id: i64) -> StoreResult<bool> {
        let result = entities::Events::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
