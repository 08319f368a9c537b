//! C struct extraction and diagram description generation.
//!
//! [`extract`] turns source text into [`StructDescriptor`]s; [`diagram::build`]
//! turns those into Mermaid `classDiagram` text with composition and
//! reference edges between the structs.

pub mod diagram;
pub mod lexer;
pub mod parser;
mod types;

pub use parser::{extract, extract_with_report};
pub use types::{
	EdgeKind, Extraction, FieldDescriptor, FieldShape, RelationshipEdge, SkipReason, Skipped,
	StructDescriptor,
};
