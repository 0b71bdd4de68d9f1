//! TSX component converter.

use crate::extract::{locate_body, BodySource};
use crate::functions::extract_function_stubs;
use crate::generator::generate_runtime_script;
use crate::markup::translate;
use crate::state::StateTable;
use crate::title::derive_title;
use crate::traits::{ComponentConverter, ConvertedComponent, TransformError};

/// Pattern-based TSX/JSX converter.
#[derive(Debug, Default)]
pub struct TsxConverter;

impl TsxConverter {
    /// Create a new TSX converter.
    pub fn new() -> Self {
        Self
    }
}

impl ComponentConverter for TsxConverter {
    fn name(&self) -> &'static str {
        "tsx"
    }

    fn extensions(&self) -> &[&'static str] {
        &["tsx", "jsx"]
    }

    fn convert(
        &self,
        source: &str,
        component_name: &str,
    ) -> Result<ConvertedComponent, TransformError> {
        if component_name.trim().is_empty() {
            return Err(TransformError::InvalidName(component_name.to_string()));
        }

        let extracted = locate_body(source);
        if extracted.source == BodySource::Fallback {
            tracing::debug!("No returned markup found in {}", component_name);
        }

        let body = translate(&extracted.fragment);
        let state = StateTable::from_source(source);
        let stubs = extract_function_stubs(source);
        let script = generate_runtime_script(&state, &stubs);

        Ok(ConvertedComponent {
            name: component_name.to_string(),
            title: derive_title(component_name),
            body,
            state,
            stubs,
            script,
        })
    }
}
