//! Manifest source adapters.

mod local;
mod memory;

pub use local::{DEFAULT_EXTENSIONS, LocalManifestSource};
pub use memory::InMemorySource;
