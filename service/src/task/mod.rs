//! Background [`Task`]s definitions.

mod background;
pub mod reload_content;

pub use common::Handler as Task;

pub use self::{
    background::{Background, TaskError},
    reload_content::ReloadContent,
};
