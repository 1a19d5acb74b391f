use sea_orm::ActiveValue;
use sea_orm::entity::prelude::*;
use time::PrimitiveDateTime;

use eventcat_common::Event;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date_time: PrimitiveDateTime,
    pub end_date_time: PrimitiveDateTime,
    pub venue: String,
    pub price: f64,
    pub image_url: String,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Event {
            id: model.id,
            name: model.name,
            description: model.description,
            start_date_time: model.start_date_time,
            end_date_time: model.end_date_time,
            venue: model.venue,
            price: model.price,
            image_url: model.image_url,
        }
    }
}

/// `id` is `NotSet` when `None`, so inserts rely on the autoincrement key.
pub fn active_from_event(event: Event, id: Option<i64>) -> ActiveModel {
    ActiveModel {
        id: match id {
            Some(id) => ActiveValue::Set(id),
            None => ActiveValue::NotSet,
        },
        name: ActiveValue::Set(event.name),
        description: ActiveValue::Set(event.description),
        start_date_time: ActiveValue::Set(event.start_date_time),
        end_date_time: ActiveValue::Set(event.end_date_time),
        venue: ActiveValue::Set(event.venue),
        price: ActiveValue::Set(event.price),
        image_url: ActiveValue::Set(event.image_url),
    }
}
