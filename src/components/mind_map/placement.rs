use super::types::Point;

/// Chooses where a freshly added node lands.
pub trait PositionSource {
	/// Returns a point in `[origin, origin + span)` on both axes.
	fn next_position(&mut self, origin: Point, span: Point) -> Point;
}

/// Maps a pair of unit samples in `[0, 1)` into the region.
pub fn within(origin: Point, span: Point, u: f64, v: f64) -> Point {
	Point::new(origin.x + u * span.x, origin.y + v * span.y)
}

/// Uniform placement backed by `Math.random()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRandom;

impl PositionSource for BrowserRandom {
	fn next_position(&mut self, origin: Point, span: Point) -> Point {
		within(origin, span, js_sys::Math::random(), js_sys::Math::random())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unit_samples_span_the_half_open_region() {
		let (origin, span) = (Point::new(100.0, 100.0), Point::new(600.0, 400.0));
		assert_eq!(within(origin, span, 0.0, 0.0), origin);
		let far = within(origin, span, 0.999_999, 0.999_999);
		assert!(far.x < 700.0 && far.y < 500.0);
		assert!(far.x > 699.0 && far.y > 499.0);
	}
}
