//! Standalone document assembly and batch conversion.
//!
//! Turns converted components into self-contained HTML documents and drives a
//! whole components directory through the converter.

pub mod assets;
pub mod builder;
pub mod routing;
pub mod templates;

pub use assets::{StyleOptions, StyleResolver};
pub use builder::{
    BatchBuilder, BuildConfig, BuildError, BuildResult, FileFailure, DEFAULT_SCRIPT,
    DEFAULT_STYLESHEET,
};
pub use routing::{classify_folder, output_path, to_file_name, OutputFolder};
pub use templates::{Context, TemplateEngine};
