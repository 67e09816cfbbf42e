pub mod backend;
pub mod file_store;
pub mod memory_store;
