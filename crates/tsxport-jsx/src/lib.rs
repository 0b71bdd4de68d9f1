//! Pattern-based TSX component conversion.
//!
//! This crate holds the text-level half of the converter: it pulls the returned
//! markup out of a component source file, rewrites it into plain HTML, collects
//! `useState` initial values and local handler functions, and generates the
//! client-side runtime script that every output document embeds.

pub mod extract;
pub mod functions;
pub mod generator;
pub mod markup;
pub mod state;
pub mod title;
pub mod traits;
pub mod tsx;

pub use extract::{extract_body, locate_body, BodySource, ExtractedBody, FALLBACK_FRAGMENT};
pub use functions::{extract_function_stubs, find_block_end, FunctionStub};
pub use generator::generate_runtime_script;
pub use markup::{map_icons, map_ui_components, translate, ICONS, UI_COMPONENTS};
pub use state::{StateEntry, StateTable};
pub use title::{derive_title, TITLE_SUFFIX};
pub use traits::{ComponentConverter, ConvertedComponent, TransformError};
pub use tsx::TsxConverter;
