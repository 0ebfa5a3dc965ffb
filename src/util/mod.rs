use glam::Vec2;
use wasm_bindgen::JsCast;

mod result_ext;
pub use result_ext::*;

pub trait CoordinateSource {
	/// Position of the event in surface-local pixels: client coordinates minus the
	/// bounding-box top-left of the element the handler is attached to.
	fn surface_position(&self) -> Option<Vec2>;
}

impl CoordinateSource for web_sys::PointerEvent {
	fn surface_position(&self) -> Option<Vec2> {
		let element = self
			.current_target()
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok_or_log())?;
		let rect = element.get_bounding_client_rect();
		Some(Vec2::new(
			self.client_x() as f32 - rect.left() as f32,
			self.client_y() as f32 - rect.top() as f32,
		))
	}
}
