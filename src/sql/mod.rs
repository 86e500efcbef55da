//! Safe SQL builder: identifiers from entity maps only, values as parameters.

mod builder;
mod entity;
pub use builder::*;
pub use entity::EntityMap;
