//! Pure data structures (DTOs) managed through the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod product;

pub use product::*;
