//! Rendering seam between the diagram description and the engine that turns
//! it into SVG.
//!
//! The engine is external (Mermaid, loaded as a browser global). Failures are
//! converted into a [`DiagramView::Failed`] payload shown in place of the
//! diagram; they are logged and never propagated.

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, error};

use crate::analysis::{StructDescriptor, diagram};
use crate::theme::Theme;

mod mermaid;

pub use mermaid::MermaidEngine;


static NEXT_DIAGRAM_ID: AtomicU64 = AtomicU64::new(0);

/// How much the engine trusts the diagram text (Mermaid `securityLevel`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SecurityLevel {
	Strict,
	#[default]
	Loose,
	Antiscript,
}

impl SecurityLevel {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Strict => "strict",
			Self::Loose => "loose",
			Self::Antiscript => "antiscript",
		}
	}
}

/// Options passed to [`RenderEngine::initialize`] before each render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderConfig {
	pub theme: Theme,
	pub security_level: SecurityLevel,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
	#[error("{0}")]
	Engine(String),
	#[error("renderer returned no svg")]
	MissingSvg,
}

/// A text-in, SVG-out diagram renderer.
#[allow(async_fn_in_trait)]
pub trait RenderEngine {
	fn initialize(&self, config: &RenderConfig);

	/// Render `spec` into an SVG document. `id` names the element the engine
	/// may create while rendering and must be unique per call.
	async fn render(&self, id: &str, spec: &str) -> Result<String, RenderError>;
}

/// What the diagram frame shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DiagramView {
	#[default]
	Empty,
	Svg(String),
	Failed {
		message: String,
	},
}

impl DiagramView {
	pub fn from_render(result: Result<String, RenderError>, spec: &str) -> Self {
		match result {
			Ok(svg) => Self::Svg(svg),
			Err(err) => {
				error!("error rendering diagram: {err}");
				debug!("diagram description:\n{spec}");
				Self::Failed {
					message: format!("Error generating diagram: {err}"),
				}
			}
		}
	}
}

/// Orders overlapping renders so only the most recently started one is shown.
#[derive(Debug, Default)]
pub struct RenderGeneration {
	latest: AtomicU64,
}

impl RenderGeneration {
	/// Start a render; any render begun earlier becomes stale.
	pub fn begin(&self) -> u64 {
		self.latest.fetch_add(1, Ordering::Relaxed) + 1
	}

	pub fn is_current(&self, generation: u64) -> bool {
		self.latest.load(Ordering::Relaxed) == generation
	}

	/// `view` if `generation` is still the latest render, `None` if it went stale.
	pub fn settle(&self, generation: u64, view: DiagramView) -> Option<DiagramView> {
		if self.is_current(generation) {
			Some(view)
		} else {
			debug!("dropping stale render {generation}");
			None
		}
	}
}

/// A fresh element id; differs on every call.
pub fn next_diagram_id() -> String {
	let n = NEXT_DIAGRAM_ID.fetch_add(1, Ordering::Relaxed);
	format!("struct-diagram-{n}")
}

/// Build the description for `structs` and render it with `engine`.
pub async fn render_structs<E: RenderEngine>(
	engine: &E,
	config: &RenderConfig,
	structs: &[StructDescriptor],
) -> DiagramView {
	if structs.is_empty() {
		return DiagramView::Empty;
	}
	let spec = diagram::build(structs);
	engine.initialize(config);
	let id = next_diagram_id();
	debug!("rendering {} structs as #{id}", structs.len());
	DiagramView::from_render(engine.render(&id, &spec).await, &spec)
}
