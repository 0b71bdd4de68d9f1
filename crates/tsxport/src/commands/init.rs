//! Write a starter configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'tsxport convert' to convert your components.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# tsxport configuration

[convert]
# Source root
source = "."

# Output root for generated documents
output = "html"

# Directory under the source root holding the components
components_dir = "components"

# Extension of the files to convert
extension = "tsx"

# Entry points that are never converted
exclude = ["App.tsx"]

# Shared assets linked from every document
stylesheets = ["../../css/globals.css"]
scripts = ["../../js/utils.js"]

[styles]
# Append rules for known utility classes
utilities = true

# Minify the generated stylesheets
minify = false
"#;
