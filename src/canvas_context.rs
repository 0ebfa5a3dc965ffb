use crate::gesture::Segment;
use wasm_bindgen::JsCast;

const LINE_WIDTH: f64 = 3.0;
const LINE_CAP: &str = "round";
const STROKE_COLOR: &str = "#000";

#[derive(Clone, Debug, thiserror::Error)]
pub enum CanvasContextError {
	#[error("2d context unsupported")]
	ContextUnsupported,

	#[error("javascript error {0}")]
	JavascriptError(String),
}

static_assertions::assert_impl_all!(CanvasContextError: std::error::Error, Send, Sync);

impl From<wasm_bindgen::JsValue> for CanvasContextError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		CanvasContextError::JavascriptError(format!("{value:?}"))
	}
}

/// The 2d rendering context of one canvas element, with the stroke style defaults applied.
///
/// Acquired once, after the element is in the DOM. Styles are set at acquisition and never
/// touched again; clearing erases pixels but leaves them intact for subsequent gestures.
#[derive(Clone, Debug)]
pub struct CanvasContext {
	canvas: web_sys::HtmlCanvasElement,
	context: web_sys::CanvasRenderingContext2d,
}

impl CanvasContext {
	#[tracing::instrument(err)]
	pub fn new(
		canvas: &web_sys::HtmlCanvasElement,
		width: u32,
		height: u32,
	) -> Result<Self, CanvasContextError> {
		let context = canvas
			.get_context("2d")?
			.ok_or(CanvasContextError::ContextUnsupported)?
			.dyn_into::<web_sys::CanvasRenderingContext2d>()
			.map_err(|value| CanvasContextError::JavascriptError(format!("{value:?}")))?;

		canvas.set_width(width);
		canvas.set_height(height);

		context.set_line_width(LINE_WIDTH);
		context.set_line_cap(LINE_CAP);
		context.set_stroke_style_str(STROKE_COLOR);

		Ok(Self {
			canvas: canvas.clone(),
			context,
		})
	}

	/// Strokes `segment` as its own path, immediately. Segments are never batched; the
	/// visual continuity of a stroke comes solely from the sampling density of move events.
	pub fn stroke_segment(&self, segment: Segment) {
		self.context.begin_path();
		self.context
			.move_to(segment.from.x as f64, segment.from.y as f64);
		self.context.line_to(segment.to.x as f64, segment.to.y as f64);
		self.context.stroke();
	}

	/// Erases the full surface, re-reading the element's current pixel dimensions.
	pub fn clear(&self) {
		self.context.clear_rect(
			0.0,
			0.0,
			self.canvas.width() as f64,
			self.canvas.height() as f64,
		);
	}

	pub fn canvas(&self) -> &web_sys::HtmlCanvasElement {
		&self.canvas
	}
}
