mod data;
mod error;
mod file_store;
mod manager;
mod mem_store;
mod store;

pub use data::{Task, TaskId};
pub use error::{EngineError, StoreError};
pub use file_store::FileStore;
pub use manager::TaskManager;
pub use mem_store::MemStore;
pub use store::Store;
