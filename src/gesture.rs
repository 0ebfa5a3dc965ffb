use glam::Vec2;

/// One stroked straight line between two consecutive samples of a gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
	pub from: Vec2,
	pub to: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
	#[default]
	Idle,
	Dragging,
}

/// Tracks one press-to-release (or leave) pointer interaction.
///
/// The tracker keeps exactly one last-sample slot rather than a history buffer: each new
/// sample is paired with the previous one to form a [`Segment`], then overwrites it. The
/// press position seeds the slot, so the first move already yields a drawable pair and a
/// press with no moves yields none.
#[derive(Debug, Default)]
pub struct Tracker {
	state: State,
	last_sample: Option<Vec2>,
}

impl Tracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a gesture at `point`. A press during an ongoing gesture restarts it.
	pub fn press(&mut self, point: Vec2) {
		self.state = State::Dragging;
		self.last_sample = Some(point);
	}

	/// Records a move sample. Returns the segment connecting it to the previous sample,
	/// or `None` outside a gesture or when no previous sample exists.
	pub fn sample(&mut self, point: Vec2) -> Option<Segment> {
		if self.state != State::Dragging {
			return None;
		}
		let segment = self.last_sample.map(|from| Segment { from, to: point });
		self.last_sample = Some(point);
		segment
	}

	/// Ends the gesture. Wired to both pointer-up and pointer-leave; idempotent.
	pub fn finish(&mut self) {
		self.state = State::Idle;
		self.last_sample = None;
	}

	pub fn is_dragging(&self) -> bool {
		self.state == State::Dragging
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	fn drag(tracker: &mut Tracker, press: Vec2, moves: &[Vec2]) -> Vec<Segment> {
		tracker.press(press);
		let segments = moves.iter().filter_map(|&p| tracker.sample(p)).collect();
		tracker.finish();
		segments
	}

	#[test]
	fn each_sample_pairs_with_its_predecessor() {
		let mut tracker = Tracker::new();
		let segments = drag(
			&mut tracker,
			vec2(10.0, 10.0),
			&[vec2(20.0, 10.0), vec2(20.0, 20.0)],
		);
		assert_eq!(
			segments,
			[
				Segment {
					from: vec2(10.0, 10.0),
					to: vec2(20.0, 10.0),
				},
				Segment {
					from: vec2(20.0, 10.0),
					to: vec2(20.0, 20.0),
				},
			]
		);
	}

	#[test]
	fn n_samples_yield_n_minus_one_segments() {
		let mut tracker = Tracker::new();
		for n in 1..6 {
			let moves: Vec<_> = (1..n).map(|i| vec2(i as f32, 0.0)).collect();
			let segments = drag(&mut tracker, vec2(0.0, 0.0), &moves);
			assert_eq!(segments.len(), n - 1, "{n} samples");
		}
	}

	#[test]
	fn press_then_release_draws_nothing() {
		let mut tracker = Tracker::new();
		assert!(drag(&mut tracker, vec2(1.0, 2.0), &[]).is_empty());
	}

	#[test]
	fn samples_outside_a_gesture_are_ignored() {
		let mut tracker = Tracker::new();
		assert_eq!(tracker.sample(vec2(5.0, 5.0)), None);
		assert!(!tracker.is_dragging());

		tracker.press(vec2(0.0, 0.0));
		tracker.finish();
		assert_eq!(tracker.sample(vec2(5.0, 5.0)), None);
	}

	#[test]
	fn finish_severs_the_next_gesture_from_the_last() {
		let mut tracker = Tracker::new();
		tracker.press(vec2(0.0, 0.0));
		tracker.sample(vec2(1.0, 0.0));
		// Pointer leaves the surface mid-drag.
		tracker.finish();

		tracker.press(vec2(9.0, 9.0));
		let segment = tracker.sample(vec2(10.0, 9.0));
		assert_eq!(
			segment,
			Some(Segment {
				from: vec2(9.0, 9.0),
				to: vec2(10.0, 9.0),
			})
		);
	}

	#[test]
	fn press_restarts_an_ongoing_gesture() {
		let mut tracker = Tracker::new();
		tracker.press(vec2(0.0, 0.0));
		tracker.sample(vec2(1.0, 1.0));
		tracker.press(vec2(8.0, 8.0));
		assert_eq!(
			tracker.sample(vec2(9.0, 8.0)),
			Some(Segment {
				from: vec2(8.0, 8.0),
				to: vec2(9.0, 8.0),
			})
		);
	}
}
