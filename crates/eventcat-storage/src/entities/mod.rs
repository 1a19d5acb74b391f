pub mod events;

pub use events::Entity as Events;
