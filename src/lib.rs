#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod manifest;
pub mod models;
pub mod prompt;
pub mod scanning;
pub mod selection;

pub use builder::{ManifestBuilder, ManifestRequest, manifest_file_name};
pub use classify::{classify, classify_and_format, is_valid_map_file, should_skip_file};
pub use config::GeneratorConfig;
pub use error::{GenerateError, GenerateResult};
pub use models::{Classification, ManifestArtifacts, ManifestKind, TypeSummary};
