//! The document store and its configuration.

mod builder;
mod config;
mod document_store;
mod symbolic_memory;

pub use builder::*;
pub use config::*;
pub use document_store::*;
pub use symbolic_memory::*;
