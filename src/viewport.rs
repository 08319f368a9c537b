//! Zoom and pan state for the frame that shows a rendered diagram.
//!
//! Pure numeric state; the component feeds it DOM measurements and pointer
//! coordinates. Every operation that sets the zoom clamps it to
//! [`MIN_ZOOM`]..=[`MAX_ZOOM`].

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 5.0;
pub const ZOOM_STEP: f64 = 0.25;
/// Zoom change per unit of wheel `deltaY`.
pub const WHEEL_ZOOM_FACTOR: f64 = 0.01;
/// Margin kept on every side by [`ViewportController::fit_to_view`], in pixels.
pub const FIT_MARGIN: f64 = 20.0;
/// Share of the container the initial fit aims to fill.
pub const FILL_RATIO: f64 = 0.9;
/// Smallest initial scale for content much larger than the container.
pub const OVERSIZE_FLOOR: f64 = 0.5;
/// Content below this share of the container on both axes may be scaled up.
pub const UNDERSIZE_RATIO: f64 = 0.8;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
	pub x: f64,
	pub y: f64,
}

/// Width and height of a laid-out element, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// `None` for elements that have not been laid out yet.
	pub fn measured(width: f64, height: f64) -> Option<Self> {
		(width > 0.0 && height > 0.0).then_some(Self { width, height })
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
	pub zoom: f64,
	pub pan: Offset,
}

impl Default for ViewportState {
	fn default() -> Self {
		Self {
			zoom: 1.0,
			pan: Offset::default(),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportController {
	pub state: ViewportState,
	dragging: bool,
	anchor: Offset,
}

fn clamp_zoom(zoom: f64) -> f64 {
	zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Both sizes present and non-degenerate.
fn measurements(container: Option<Size>, content: Option<Size>) -> Option<(Size, Size)> {
	let (container, content) = (container?, content?);
	let valid = |s: Size| s.width > 0.0 && s.height > 0.0;
	(valid(container) && valid(content)).then_some((container, content))
}

impl ViewportController {
	pub fn zoom(&self) -> f64 {
		self.state.zoom
	}

	pub fn pan(&self) -> Offset {
		self.state.pan
	}

	pub fn is_dragging(&self) -> bool {
		self.dragging
	}

	pub fn zoom_in(&mut self) {
		self.state.zoom = clamp_zoom(self.state.zoom + ZOOM_STEP);
	}

	pub fn zoom_out(&mut self) {
		self.state.zoom = clamp_zoom(self.state.zoom - ZOOM_STEP);
	}

	/// Scroll-wheel zoom, active only while Ctrl/Meta is held so plain
	/// scrolling still scrolls. Returns whether the event was consumed.
	pub fn wheel_zoom(&mut self, delta_y: f64, modifier_held: bool) -> bool {
		if !modifier_held {
			return false;
		}
		self.state.zoom = clamp_zoom(self.state.zoom - delta_y * WHEEL_ZOOM_FACTOR);
		true
	}

	/// Largest uniform scale that fits the content inside the container with
	/// [`FIT_MARGIN`] on each side. No-op without both measurements.
	pub fn fit_to_view(&mut self, container: Option<Size>, content: Option<Size>) {
		let Some((container, content)) = measurements(container, content) else {
			return;
		};
		let scale_x = (container.width - FIT_MARGIN * 2.0) / content.width;
		let scale_y = (container.height - FIT_MARGIN * 2.0) / content.height;
		self.state = ViewportState {
			zoom: clamp_zoom(scale_x.min(scale_y)),
			pan: Offset::default(),
		};
	}

	/// Initial scale for a freshly rendered diagram: aim for [`FILL_RATIO`] of
	/// the container, grow small content, and never shrink large content
	/// below [`OVERSIZE_FLOOR`]. No-op without both measurements.
	pub fn optimize_initial_size(&mut self, container: Option<Size>, content: Option<Size>) {
		let Some((container, content)) = measurements(container, content) else {
			return;
		};
		let scale_x = container.width * FILL_RATIO / content.width;
		let scale_y = container.height * FILL_RATIO / content.height;
		let optimal = scale_x.min(scale_y);

		let undersized = content.width < container.width * UNDERSIZE_RATIO
			&& content.height < container.height * UNDERSIZE_RATIO;
		let zoom = if undersized || optimal > 1.0 {
			optimal
		} else {
			optimal.max(OVERSIZE_FLOOR)
		};

		self.state = ViewportState {
			zoom: clamp_zoom(zoom),
			pan: Offset::default(),
		};
	}

	/// Begin panning at pointer `(x, y)`. Only possible while zoomed past 100%.
	pub fn start_drag(&mut self, x: f64, y: f64) {
		if self.state.zoom <= 1.0 {
			return;
		}
		self.dragging = true;
		self.anchor = Offset {
			x: x - self.state.pan.x,
			y: y - self.state.pan.y,
		};
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.dragging {
			return;
		}
		self.state.pan = Offset {
			x: x - self.anchor.x,
			y: y - self.anchor.y,
		};
	}

	pub fn end_drag(&mut self) {
		self.dragging = false;
	}

	/// Zoom as a whole percentage for the readout.
	pub fn zoom_percent(&self) -> u32 {
		(self.state.zoom * 100.0).round() as u32
	}

	/// CSS `transform` for the diagram element. The translation is divided by
	/// the zoom because it is applied after scaling.
	pub fn transform_css(&self) -> String {
		let ViewportState { zoom, pan } = self.state;
		format!(
			"scale({zoom}) translate({}px, {}px)",
			pan.x / zoom,
			pan.y / zoom
		)
	}

	pub fn cursor(&self) -> &'static str {
		match (self.dragging, self.state.zoom > 1.0) {
			(true, _) => "grabbing",
			(false, true) => "grab",
			(false, false) => "default",
		}
	}
}
