pub mod entities;
pub mod error;
pub mod list_store;

pub use entities::{Activity, ToDoList};
pub use error::{StoreError, StoreResult};
pub use list_store::ListStore;
