//! Batch conversion of a components directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use tsxport_jsx::{ComponentConverter, TsxConverter};

use crate::assets::{StyleOptions, StyleResolver};
use crate::routing::output_path;
use crate::templates::{Context, TemplateEngine};

/// Shared stylesheet linked from every document, relative to `pages/<folder>/`.
pub const DEFAULT_STYLESHEET: &str = "../../css/globals.css";

/// Shared script loaded by every document, relative to `pages/<folder>/`.
pub const DEFAULT_SCRIPT: &str = "../../js/utils.js";

/// Configuration for a batch conversion.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source root
    pub source_dir: PathBuf,

    /// Output root
    pub output_dir: PathBuf,

    /// Directory under the source root holding the components
    pub components_dir: PathBuf,

    /// Extension of the files to convert (without the dot)
    pub extension: String,

    /// File names that are never converted
    pub exclude: Vec<String>,

    /// Stylesheet options
    pub styles: StyleOptions,

    /// External stylesheet hrefs added to every document
    pub stylesheets: Vec<String>,

    /// External script srcs added to every document
    pub scripts: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("html"),
            components_dir: PathBuf::from("components"),
            extension: "tsx".to_string(),
            exclude: vec!["App.tsx".to_string()],
            styles: StyleOptions::default(),
            stylesheets: vec![DEFAULT_STYLESHEET.to_string()],
            scripts: vec![DEFAULT_SCRIPT.to_string()],
        }
    }
}

/// A file that could not be converted.
#[derive(Debug)]
pub struct FileFailure {
    /// Source file path
    pub path: PathBuf,

    /// Error message
    pub message: String,
}

/// Result of a batch conversion.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of eligible source files found
    pub discovered: usize,

    /// Number of documents written
    pub converted: usize,

    /// Paths of the written documents
    pub outputs: Vec<PathBuf>,

    /// Files that failed, with their errors
    pub failures: Vec<FileFailure>,

    /// Total time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during a batch conversion.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read source directory: {0}")]
    ReadError(String),

    #[error("Failed to read {path}: {message}")]
    SourceRead { path: String, message: String },

    #[error("Failed to convert component: {0}")]
    TransformError(#[from] tsxport_jsx::TransformError),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("{second} maps to {path}, already written for {first}")]
    PathCollision {
        path: String,
        first: String,
        second: String,
    },
}

/// Converts every component in a directory into a standalone document.
pub struct BatchBuilder {
    config: BuildConfig,
    converter: TsxConverter,
    templates: TemplateEngine,
}

impl BatchBuilder {
    /// Create a new batch builder.
    pub fn new(config: BuildConfig) -> Self {
        let converter = TsxConverter::new();

        if !converter
            .extensions()
            .iter()
            .any(|ext| *ext == config.extension)
        {
            tracing::warn!(
                "The {} converter does not handle .{} files; converting them anyway",
                converter.name(),
                config.extension
            );
        }

        Self {
            config,
            converter,
            templates: TemplateEngine::new(),
        }
    }

    /// Convert every eligible file.
    ///
    /// Only an unreadable components directory fails the batch; per-file
    /// errors are logged and collected in [`BuildResult::failures`].
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let files = self.discover()?;

        tracing::info!("Found {} {} files to convert", files.len(), self.config.extension);

        let mut assigned: HashMap<PathBuf, String> = HashMap::new();
        let mut outputs = Vec::new();
        let mut failures = Vec::new();

        for path in &files {
            tracing::info!("Converting {}...", display_name(path));

            match self.convert_file(path, &mut assigned) {
                Ok(output) => {
                    tracing::info!("  -> Saved to {}", output.display());
                    outputs.push(output);
                }
                Err(e) => {
                    tracing::error!("  ERROR: {}", e);
                    failures.push(FileFailure {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!("Converted {}/{} files", outputs.len(), files.len());

        Ok(BuildResult {
            discovered: files.len(),
            converted: outputs.len(),
            outputs,
            failures,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// List the source files that will be converted, sorted by name.
    ///
    /// Only direct children of the components directory are considered.
    pub fn discover(&self) -> Result<Vec<PathBuf>, BuildError> {
        let dir = self.config.source_dir.join(&self.config.components_dir);

        if !dir.is_dir() {
            return Err(BuildError::ReadError(format!(
                "Components directory not found: {}",
                dir.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| BuildError::ReadError(e.to_string()))?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != self.config.extension {
                continue;
            }

            let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if self.config.exclude.iter().any(|x| x == filename) {
                tracing::debug!("Skipping excluded entry point {}", filename);
                continue;
            }

            files.push(path.to_path_buf());
        }

        Ok(files)
    }

    /// Convert one component's source text into a complete document.
    pub fn convert_source(&self, component_name: &str, source: &str) -> Result<String, BuildError> {
        let converted = self.converter.convert(source, component_name)?;

        let context = Context {
            styles: StyleResolver::resolve(&converted.body, self.config.styles),
            title: converted.title,
            content: converted.body,
            script: converted.script,
            stylesheets: self.config.stylesheets.clone(),
            scripts: self.config.scripts.clone(),
        };

        self.templates
            .render_page(&context)
            .map_err(|e: minijinja::Error| BuildError::TemplateError(e.to_string()))
    }

    /// Convert one file and write its document, refusing to overwrite a
    /// document written earlier in the same run.
    fn convert_file(
        &self,
        path: &Path,
        assigned: &mut HashMap<PathBuf, String>,
    ) -> Result<PathBuf, BuildError> {
        let component_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                BuildError::TransformError(tsxport_jsx::TransformError::InvalidName(
                    path.display().to_string(),
                ))
            })?;

        let output = output_path(&self.config.output_dir, component_name);

        if let Some(first) = assigned.get(&output) {
            return Err(BuildError::PathCollision {
                path: output.display().to_string(),
                first: first.clone(),
                second: component_name.to_string(),
            });
        }

        let source = fs::read_to_string(path).map_err(|e| BuildError::SourceRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let html = self.convert_source(component_name, &source)?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&output, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        assigned.insert(output.clone(), component_name.to_string());

        Ok(output)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
