//! Trait definitions for component converters.

use crate::functions::FunctionStub;
use crate::state::StateTable;

/// Result of converting one component source file.
#[derive(Debug, Clone)]
pub struct ConvertedComponent {
    /// Component name (e.g., "AdminOrderPage")
    pub name: String,

    /// Human-readable page title
    pub title: String,

    /// Translated HTML body
    pub body: String,

    /// Initial values collected from `useState` declarations
    pub state: StateTable,

    /// Standalone handler functions
    pub stubs: Vec<FunctionStub>,

    /// Complete runtime script (JavaScript)
    pub script: String,
}

/// Errors that can occur during conversion.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Invalid component name: {0:?}")]
    InvalidName(String),
}

/// Trait for source-language converters.
pub trait ComponentConverter: Send + Sync {
    /// Converter identifier (e.g., "tsx")
    fn name(&self) -> &'static str;

    /// File extensions this converter handles
    fn extensions(&self) -> &[&'static str];

    /// Convert a component source file into its document parts.
    ///
    /// # Arguments
    /// * `source` - The source code of the component
    /// * `component_name` - The component name, usually the file stem
    fn convert(
        &self,
        source: &str,
        component_name: &str,
    ) -> Result<ConvertedComponent, TransformError>;
}
