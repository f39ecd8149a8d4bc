//! Infrastructure layer.

pub mod database;

pub use self::database::{Database, Find, Sort, Where};
#[cfg(feature = "memory")]
pub use self::database::{memory, Memory};
