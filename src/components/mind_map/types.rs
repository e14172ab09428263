use std::ops::{Add, Mul, Sub};

use strum::{AsRefStr, Display};

pub type NodeId = String;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}

/// Presentational category of a node. Has no effect on behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ColorTag {
	#[default]
	Primary,
	AiPrimary,
	Accent,
	Success,
}

impl ColorTag {
	pub fn fill(self) -> &'static str {
		match self {
			ColorTag::Primary => "#4f46e5",
			ColorTag::AiPrimary => "#7c3aed",
			ColorTag::Accent => "#f59e0b",
			ColorTag::Success => "#10b981",
		}
	}

	pub fn text(self) -> &'static str {
		match self {
			ColorTag::Accent => "#1f1300",
			_ => "#ffffff",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: NodeId,
	pub label: String,
	pub position: Point,
	pub color: ColorTag,
	/// Declared one-directionally, drawn as undirected.
	pub neighbor_ids: Vec<NodeId>,
}

impl GraphNode {
	pub fn new(id: &str, label: &str, position: Point, color: ColorTag, neighbors: &[&str]) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			position,
			color,
			neighbor_ids: neighbors.iter().map(|&n| n.into()).collect(),
		}
	}

	pub fn contains(&self, point: Point, size: Point) -> bool {
		let rel = point - self.position;
		rel.x >= 0.0 && rel.y >= 0.0 && rel.x < size.x && rel.y < size.y
	}
}

/// One drawable edge, endpoints already at node centres.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
	pub source: NodeId,
	pub target: NodeId,
	pub from: Point,
	pub to: Point,
}
