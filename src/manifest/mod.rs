//! Manifest generation broken into focused submodules for easier testing.

mod generation;
mod writer;

pub use generation::generate_records;
pub use writer::{write_manifest, write_records};
