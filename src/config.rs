//! Application-wide tunables, provided to every page through Leptos context.

use std::time::Duration;

use log::Level;

use crate::components::mind_map::{ColorTag, Point};

/// Root configuration handed to [`crate::App`].
#[derive(Clone, Debug)]
pub struct AppConfig {
	/// Level passed to the console logger at startup.
	pub log_level: Level,
	/// Mind-map canvas geometry and behaviour.
	pub canvas: CanvasConfig,
	/// Durations of the simulated export.
	pub export: ExportTiming,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			log_level: Level::Debug,
			canvas: CanvasConfig::default(),
			export: ExportTiming::default(),
		}
	}
}

/// Geometry and editing rules of the mind-map canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasConfig {
	/// Top-left corner of the region new nodes are dropped into.
	pub spawn_origin: Point,
	/// Extent of the spawn region; positions fall in `[origin, origin + span)`.
	pub spawn_span: Point,
	/// Size of a node card in canvas pixels.
	pub node_size: Point,
	/// Colour given to nodes added from suggestions.
	pub default_color: ColorTag,
	/// Strip a deleted node's id from every other adjacency list.
	pub repair_adjacency_on_delete: bool,
	/// Background dot grid.
	pub grid: GridConfig,
}

impl CanvasConfig {
	/// Offset from a node's position to its visual centre, where edges attach.
	pub fn node_center_offset(&self) -> Point {
		self.node_size * 0.5
	}
}

impl Default for CanvasConfig {
	fn default() -> Self {
		Self {
			spawn_origin: Point::new(100.0, 100.0),
			spawn_span: Point::new(600.0, 400.0),
			node_size: Point::new(100.0, 50.0),
			default_color: ColorTag::AiPrimary,
			repair_adjacency_on_delete: false,
			grid: GridConfig::default(),
		}
	}
}

/// Dot grid drawn behind the nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
	/// Number of dot columns.
	pub columns: u32,
	/// Number of dot rows.
	pub rows: u32,
	/// Distance between neighbouring dots.
	pub spacing: f64,
	/// Offset of the first dot from the canvas corner.
	pub inset: f64,
}

impl GridConfig {
	/// Dot centres, column by column.
	pub fn dots(&self) -> impl Iterator<Item = Point> + '_ {
		(0..self.columns).flat_map(move |i| {
			(0..self.rows).map(move |j| {
				Point::new(
					i as f64 * self.spacing + self.inset,
					j as f64 * self.spacing + self.inset,
				)
			})
		})
	}
}

impl Default for GridConfig {
	fn default() -> Self {
		Self {
			columns: 20,
			rows: 15,
			spacing: 60.0,
			inset: 30.0,
		}
	}
}

/// Fixed UX delays of the export dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportTiming {
	/// Time spent in `exporting` before reporting completion.
	pub export_duration: Duration,
	/// Time `completed` stays visible before reverting to `idle`.
	pub reset_delay: Duration,
}

impl Default for ExportTiming {
	fn default() -> Self {
		Self {
			export_duration: Duration::from_secs(2),
			reset_delay: Duration::from_secs(3),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edges_attach_at_card_centre() {
		let config = CanvasConfig::default();
		assert_eq!(config.node_center_offset(), Point::new(50.0, 25.0));
	}

	#[test]
	fn grid_covers_every_cell() {
		let grid = GridConfig::default();
		let dots: Vec<_> = grid.dots().collect();
		assert_eq!(dots.len(), 300);
		assert_eq!(dots[0], Point::new(30.0, 30.0));
		assert_eq!(dots[1], Point::new(30.0, 90.0));
		assert_eq!(dots[299], Point::new(19.0 * 60.0 + 30.0, 14.0 * 60.0 + 30.0));
	}

	#[test]
	fn export_delays_default_to_two_and_three_seconds() {
		let timing = ExportTiming::default();
		assert_eq!(timing.export_duration, Duration::from_secs(2));
		assert_eq!(timing.reset_delay, Duration::from_secs(3));
	}
}
