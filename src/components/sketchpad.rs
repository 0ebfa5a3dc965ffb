use crate::canvas_context::CanvasContext;
use crate::gesture::Tracker;
use crate::util::CoordinateSource;
use leptos::prelude::*;

/// Freehand drawing surface: a canvas that follows pointer drags with stroked line
/// segments, a heading above it, and a clear button below it.
#[component]
pub fn Sketchpad(
	#[prop(default = 500)] width: u32,
	#[prop(default = 500)] height: u32,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context = StoredValue::new_local(None::<CanvasContext>);
	let tracker = StoredValue::new(Tracker::new());

	// The node ref fills in once the canvas is in the DOM. The context must be acquired
	// exactly once, so later re-runs of the effect bail out.
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context.with_value(Option::is_some) {
			return;
		}
		match CanvasContext::new(&canvas, width, height) {
			Ok(acquired) => context.set_value(Some(acquired)),
			// Non-fatal: without a context, drawing and clearing silently do nothing.
			Err(error) => tracing::error!(%error, "failed to acquire 2d context"),
		}
	});

	let pointerdown = move |e: web_sys::PointerEvent| {
		e.prevent_default();
		let Some(point) = e.surface_position() else {
			return;
		};
		tracker.update_value(|tracker| tracker.press(point));
	};

	let pointermove = move |e: web_sys::PointerEvent| {
		let Some(point) = e.surface_position() else {
			return;
		};
		let mut segment = None;
		tracker.update_value(|tracker| segment = tracker.sample(point));
		if let Some(segment) = segment {
			context.with_value(|context| {
				if let Some(context) = context {
					context.stroke_segment(segment);
				}
			});
		}
	};

	// Releasing the pointer or leaving the surface both end the gesture, whichever comes
	// first. No pointer capture: capturing would suppress the leave event.
	let end_gesture = move |_: web_sys::PointerEvent| {
		tracker.update_value(Tracker::finish);
	};

	let clear = move |_| {
		context.with_value(|context| {
			if let Some(context) = context {
				context.clear();
			}
		});
	};

	view! {
		<div class="Sketchpad">
			<h1>"Welcome to Scrawl!"</h1>
			<div class="Sketchpad-surface">
				<canvas
					node_ref=canvas_ref
					on:pointerdown=pointerdown
					on:pointermove=pointermove
					on:pointerup=end_gesture
					on:pointerleave=end_gesture
				></canvas>
			</div>
			<div class="Sketchpad-controls">
				<button on:click=clear>"Clear"</button>
			</div>
		</div>
	}
}
