//! [`Database`]-related implementations.

pub mod find;
#[cfg(feature = "memory")]
pub mod memory;

use derive_more::{Display, Error as StdError, From};

#[cfg(feature = "memory")]
pub use self::memory::Memory;
pub use self::find::{Find, Order, Sort, Where};

/// Database operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "memory")]
    /// [`Memory`] error.
    Memory(memory::Error),
}
