//! Batch conversion command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use tsxport_static::{BatchBuilder, BuildConfig, StyleOptions, DEFAULT_SCRIPT, DEFAULT_STYLESHEET};

/// Configuration file structure (tsxport.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    convert: ConvertSettings,
    #[serde(default)]
    styles: StyleSettings,
}

#[derive(Debug, Deserialize)]
struct ConvertSettings {
    #[serde(default = "default_source")]
    source: String,
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_components_dir")]
    components_dir: String,
    #[serde(default = "default_extension")]
    extension: String,
    #[serde(default = "default_exclude")]
    exclude: Vec<String>,
    /// External stylesheets linked from every document
    #[serde(default = "default_stylesheets")]
    stylesheets: Vec<String>,
    /// External scripts loaded by every document
    #[serde(default = "default_scripts")]
    scripts: Vec<String>,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            components_dir: default_components_dir(),
            extension: default_extension(),
            exclude: default_exclude(),
            stylesheets: default_stylesheets(),
            scripts: default_scripts(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StyleSettings {
    #[serde(default)]
    minify: bool,
    #[serde(default = "default_utilities")]
    utilities: bool,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            minify: false,
            utilities: default_utilities(),
        }
    }
}

fn default_source() -> String {
    ".".to_string()
}
fn default_output() -> String {
    "html".to_string()
}
fn default_components_dir() -> String {
    "components".to_string()
}
fn default_extension() -> String {
    "tsx".to_string()
}
fn default_exclude() -> Vec<String> {
    vec!["App.tsx".to_string()]
}
fn default_stylesheets() -> Vec<String> {
    vec![DEFAULT_STYLESHEET.to_string()]
}
fn default_scripts() -> Vec<String> {
    vec![DEFAULT_SCRIPT.to_string()]
}
fn default_utilities() -> bool {
    true
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Merge the config file with command line overrides.
fn build_config(
    file_config: ConfigFile,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    minify: Option<bool>,
) -> BuildConfig {
    let settings = file_config.convert;

    BuildConfig {
        source_dir: source.unwrap_or_else(|| PathBuf::from(&settings.source)),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&settings.output)),
        components_dir: PathBuf::from(&settings.components_dir),
        extension: settings.extension.trim_start_matches('.').to_string(),
        exclude: settings.exclude,
        styles: StyleOptions {
            utilities: file_config.styles.utilities,
            minify: minify.unwrap_or(file_config.styles.minify),
        },
        stylesheets: settings.stylesheets,
        scripts: settings.scripts,
    }
}

/// Run the convert command.
pub fn run(
    config_path: &Path,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    minify: Option<bool>,
) -> Result<()> {
    let config = build_config(load_config(config_path)?, source, output, minify);

    tracing::info!(
        "Converting {} into {}",
        config.source_dir.join(&config.components_dir).display(),
        config.output_dir.display()
    );

    let result = BatchBuilder::new(config).build()?;

    if !result.failures.is_empty() {
        tracing::warn!("{} files failed:", result.failures.len());
        for failure in &result.failures {
            tracing::warn!("  {}: {}", failure.path.display(), failure.message);
        }
    }

    tracing::info!(
        "Finished: {}/{} files in {}ms",
        result.converted,
        result.discovered,
        result.duration_ms
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();
        let build = build_config(config, None, None, None);

        assert_eq!(build.source_dir, PathBuf::from("."));
        assert_eq!(build.output_dir, PathBuf::from("html"));
        assert_eq!(build.components_dir, PathBuf::from("components"));
        assert_eq!(build.extension, "tsx");
        assert_eq!(build.exclude, vec!["App.tsx".to_string()]);
        assert!(build.styles.utilities);
        assert!(!build.styles.minify);
        assert_eq!(build.stylesheets, vec!["../../css/globals.css".to_string()]);
        assert_eq!(build.scripts, vec!["../../js/utils.js".to_string()]);
    }

    #[test]
    fn file_values_and_overrides() {
        let config: ConfigFile = toml::from_str(
            r#"
[convert]
source = "frontend"
output = "public"
extension = ".jsx"
exclude = ["App.jsx", "Root.jsx"]
stylesheets = []

[styles]
utilities = false
"#,
        )
        .unwrap();

        let build = build_config(config, None, Some(PathBuf::from("out")), Some(true));

        assert_eq!(build.source_dir, PathBuf::from("frontend"));
        assert_eq!(build.output_dir, PathBuf::from("out"));
        assert_eq!(build.extension, "jsx");
        assert_eq!(build.exclude.len(), 2);
        assert!(build.stylesheets.is_empty());
        assert_eq!(build.scripts.len(), 1);
        assert!(!build.styles.utilities);
        assert!(build.styles.minify);
    }

    #[test]
    fn missing_file_is_default_and_bad_file_errors() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("tsxport.toml");

        let config = load_config(&path).unwrap();
        assert_eq!(config.convert.output, "html");

        fs::write(&path, "[convert\nsource = 1").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn run_converts_source_tree() {
        let temp = tempfile::tempdir().unwrap();
        let components = temp.path().join("components");
        fs::create_dir_all(&components).unwrap();
        fs::write(
            components.join("OrderList.tsx"),
            "export default function OrderList() { return (<ul className=\"list\"></ul>); }",
        )
        .unwrap();

        run(
            &temp.path().join("missing.toml"),
            Some(temp.path().to_path_buf()),
            Some(temp.path().join("html")),
            None,
        )
        .unwrap();

        assert!(temp.path().join("html/pages/order/order-list.html").exists());
    }
}
