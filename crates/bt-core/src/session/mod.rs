pub mod error;
pub mod file_store;
pub mod guard;
pub mod identity;
pub mod memory_store;
pub mod navigation;
pub mod session;
pub mod store;
