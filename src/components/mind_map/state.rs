use log::debug;
use uuid::Uuid;

use super::placement::PositionSource;
use super::types::{ColorTag, GraphNode, NodeId, Point, Segment};
use crate::config::CanvasConfig;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
	pub active: bool,
	/// Grab point relative to the node's position, in canvas space.
	pub offset: Point,
}

/// The canvas's node collection together with selection and drag state.
///
/// Every pointer coordinate handed in is in screen space; `origin` is the
/// canvas's own screen-space corner, subtracted to reach canvas space.
#[derive(Clone, Debug, PartialEq)]
pub struct MindMapState {
	nodes: Vec<GraphNode>,
	selected: Option<NodeId>,
	drag: DragState,
	config: CanvasConfig,
}

/// Nodes every canvas starts from.
pub fn seed_nodes() -> Vec<GraphNode> {
	vec![
		GraphNode::new(
			"root",
			"My Project Strategy",
			Point::new(400.0, 300.0),
			ColorTag::Primary,
			&["node1", "node2", "node3"],
		),
		GraphNode::new(
			"node1",
			"Market Research",
			Point::new(200.0, 200.0),
			ColorTag::AiPrimary,
			&["root"],
		),
		GraphNode::new(
			"node2",
			"Product Development",
			Point::new(600.0, 200.0),
			ColorTag::Accent,
			&["root"],
		),
		GraphNode::new(
			"node3",
			"Marketing Strategy",
			Point::new(400.0, 450.0),
			ColorTag::Success,
			&["root"],
		),
	]
}

impl MindMapState {
	/// Node ids must be unique; lookups resolve to the first match.
	pub fn new(nodes: Vec<GraphNode>, config: CanvasConfig) -> Self {
		debug_assert!(
			nodes
				.iter()
				.enumerate()
				.all(|(i, n)| nodes[i + 1..].iter().all(|m| m.id != n.id)),
			"duplicate node id in initial collection"
		);
		Self {
			nodes,
			selected: None,
			drag: DragState::default(),
			config,
		}
	}

	pub fn seeded(config: CanvasConfig) -> Self {
		Self::new(seed_nodes(), config)
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn selected(&self) -> Option<&str> {
		self.selected.as_deref()
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.active
	}

	pub fn config(&self) -> &CanvasConfig {
		&self.config
	}

	/// Selects `id` and starts dragging it, keeping the grab point under the
	/// pointer. Returns `false` without touching anything if `id` is unknown.
	pub fn begin_drag(&mut self, id: &str, pointer: Point, origin: Point) -> bool {
		let Some(position) = self.node(id).map(|n| n.position) else {
			debug!("ignoring drag on unknown node {id}");
			return false;
		};
		self.drag = DragState {
			active: true,
			offset: pointer - origin - position,
		};
		self.selected = Some(id.to_owned());
		debug!("drag started on {id}");
		true
	}

	pub fn continue_drag(&mut self, pointer: Point, origin: Point) {
		if !self.drag.active {
			return;
		}
		let Some(selected) = self.selected.as_deref() else {
			return;
		};
		let target = pointer - origin - self.drag.offset;
		if let Some(node) = self.nodes.iter_mut().find(|n| n.id == selected) {
			node.position = target;
		}
	}

	pub fn end_drag(&mut self) {
		if self.drag.active {
			debug!("drag ended");
		}
		self.drag = DragState::default();
	}

	/// Appends an unconnected node and returns its id.
	pub fn add_suggested_node(&mut self, label: &str, source: &mut impl PositionSource) -> NodeId {
		let mut id = fresh_id();
		while self.node(&id).is_some() {
			id = fresh_id();
		}
		let position = source.next_position(self.config.spawn_origin, self.config.spawn_span);
		self.nodes.push(GraphNode {
			id: id.clone(),
			label: label.to_owned(),
			position,
			color: self.config.default_color,
			neighbor_ids: Vec::new(),
		});
		debug!("added node {id} ({label}) at ({:.0}, {:.0})", position.x, position.y);
		id
	}

	/// Removes the selected node and clears the selection.
	///
	/// Adjacency lists elsewhere keep pointing at the removed id unless
	/// `repair_adjacency_on_delete` is set.
	pub fn delete_selected(&mut self) -> Option<GraphNode> {
		let id = self.selected.take()?;
		let index = self.nodes.iter().position(|n| n.id == id)?;
		let removed = self.nodes.remove(index);
		if self.config.repair_adjacency_on_delete {
			for node in &mut self.nodes {
				node.neighbor_ids.retain(|n| n != &id);
			}
		}
		debug!("deleted node {id}");
		Some(removed)
	}

	/// One segment per resolvable `(node, neighbor)` pair, in node then
	/// adjacency order. Reciprocal declarations yield two segments.
	pub fn render_edges(&self) -> Vec<Segment> {
		let center = self.config.node_center_offset();
		self.nodes
			.iter()
			.flat_map(|node| {
				node.neighbor_ids.iter().filter_map(move |neighbor| {
					let target = self.node(neighbor)?;
					Some(Segment {
						source: node.id.clone(),
						target: target.id.clone(),
						from: node.position + center,
						to: target.position + center,
					})
				})
			})
			.collect()
	}

	/// Topmost node whose card covers `point` (canvas space).
	pub fn node_at(&self, point: Point) -> Option<&GraphNode> {
		self.nodes
			.iter()
			.rev()
			.find(|n| n.contains(point, self.config.node_size))
	}
}

fn fresh_id() -> NodeId {
	format!("node-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	/// Hands out the queued positions in order, then repeats the last one.
	struct Queue(Vec<Point>);

	impl PositionSource for Queue {
		fn next_position(&mut self, _origin: Point, _span: Point) -> Point {
			if self.0.len() > 1 {
				self.0.remove(0)
			} else {
				self.0[0]
			}
		}
	}

	fn seeded() -> MindMapState {
		MindMapState::seeded(CanvasConfig::default())
	}

	fn position(state: &MindMapState, id: &str) -> Point {
		state.node(id).map(|n| n.position).unwrap()
	}

	// ── Domain: Seed ──

	#[test]
	fn seed_renders_both_directions_of_every_link() {
		let state = seeded();
		let edges = state.render_edges();
		assert_eq!(edges.len(), 6);
		let pairs: Vec<_> = edges
			.iter()
			.map(|s| (s.source.as_str(), s.target.as_str()))
			.collect();
		assert_eq!(
			pairs,
			[
				("root", "node1"),
				("root", "node2"),
				("root", "node3"),
				("node1", "root"),
				("node2", "root"),
				("node3", "root"),
			]
		);
	}

	#[test]
	fn edge_endpoints_sit_at_node_centres() {
		let state = seeded();
		let first = &state.render_edges()[0];
		assert_eq!(first.from, Point::new(450.0, 325.0));
		assert_eq!(first.to, Point::new(250.0, 225.0));
	}

	// ── Domain: Drag ──

	#[test]
	fn drag_translates_by_pointer_delta() {
		let mut state = seeded();
		let origin = Point::new(64.0, 80.0);
		let before = position(&state, "node2");

		assert!(state.begin_drag("node2", Point::new(700.0, 300.0), origin));
		state.continue_drag(Point::new(745.0, 260.0), origin);

		assert_eq!(position(&state, "node2"), before + Point::new(45.0, -40.0));
		assert_eq!(position(&state, "root"), Point::new(400.0, 300.0));
		assert_eq!(position(&state, "node1"), Point::new(200.0, 200.0));
		assert_eq!(position(&state, "node3"), Point::new(400.0, 450.0));
	}

	#[test]
	fn successive_moves_accumulate_from_grab_point() {
		let mut state = seeded();
		let origin = Point::default();
		state.begin_drag("root", Point::new(410.0, 310.0), origin);
		state.continue_drag(Point::new(420.0, 310.0), origin);
		state.continue_drag(Point::new(1500.0, -90.0), origin);
		assert_eq!(position(&state, "root"), Point::new(1490.0, -100.0));
	}

	#[test]
	fn begin_drag_selects_the_node() {
		let mut state = seeded();
		state.begin_drag("node3", Point::new(0.0, 0.0), Point::default());
		assert_eq!(state.selected(), Some("node3"));
		assert!(state.is_dragging());
	}

	#[test]
	fn begin_drag_on_unknown_id_changes_nothing() {
		let mut state = seeded();
		let before = state.clone();
		assert!(!state.begin_drag("ghost", Point::new(1.0, 1.0), Point::default()));
		assert_eq!(state, before);
	}

	#[test]
	fn move_without_drag_is_ignored() {
		let mut state = seeded();
		let before = state.clone();
		state.continue_drag(Point::new(999.0, 999.0), Point::default());
		assert_eq!(state, before);
	}

	#[test]
	fn end_drag_keeps_selection_and_stops_moves() {
		let mut state = seeded();
		state.begin_drag("node1", Point::new(210.0, 210.0), Point::default());
		state.end_drag();
		state.end_drag();
		assert!(!state.is_dragging());
		assert_eq!(state.selected(), Some("node1"));

		state.continue_drag(Point::new(0.0, 0.0), Point::default());
		assert_eq!(position(&state, "node1"), Point::new(200.0, 200.0));
	}

	// ── Domain: Suggestions ──

	#[test]
	fn suggested_node_is_appended_unconnected() {
		let mut state = seeded();
		let existing: HashSet<_> = state.nodes().iter().map(|n| n.id.clone()).collect();
		let mut source = Queue(vec![Point::new(321.0, 123.0)]);

		let id = state.add_suggested_node("Budget Planning", &mut source);

		assert_eq!(state.nodes().len(), 5);
		assert!(!existing.contains(&id));
		let added = state.nodes().last().unwrap();
		assert_eq!(added.id, id);
		assert_eq!(added.label, "Budget Planning");
		assert_eq!(added.position, Point::new(321.0, 123.0));
		assert_eq!(added.color, ColorTag::AiPrimary);
		assert!(added.neighbor_ids.is_empty());
		assert_eq!(state.render_edges().len(), 6);
	}

	#[test]
	fn repeated_suggestions_get_distinct_ids() {
		let mut state = seeded();
		let mut source = Queue(vec![Point::new(100.0, 100.0)]);
		let ids: HashSet<_> = (0..50)
			.map(|_| state.add_suggested_node("Launch Timeline", &mut source))
			.collect();
		assert_eq!(ids.len(), 50);
		assert_eq!(state.nodes().len(), 54);
	}

	#[test]
	fn adding_does_not_touch_selection() {
		let mut state = seeded();
		state.begin_drag("root", Point::new(400.0, 300.0), Point::default());
		state.add_suggested_node("Growth Strategies", &mut Queue(vec![Point::default()]));
		assert_eq!(state.selected(), Some("root"));
	}

	// ── Domain: Delete ──

	#[test]
	fn delete_without_selection_is_noop() {
		let mut state = seeded();
		state.add_suggested_node("Budget Planning", &mut Queue(vec![Point::new(150.0, 150.0)]));
		let before = state.clone();

		assert_eq!(state.delete_selected(), None);
		assert_eq!(state, before);
		assert_eq!(state.nodes().len(), 5);
	}

	#[test]
	fn delete_leaves_dangling_references_and_skips_their_edges() {
		let mut state = seeded();
		state.begin_drag("node2", Point::new(600.0, 200.0), Point::default());
		state.end_drag();

		let removed = state.delete_selected().unwrap();

		assert_eq!(removed.id, "node2");
		assert_eq!(state.selected(), None);
		assert_eq!(state.nodes().len(), 3);
		assert_eq!(
			state.node("root").unwrap().neighbor_ids,
			["node1", "node2", "node3"]
		);
		let edges = state.render_edges();
		assert_eq!(edges.len(), 4);
		assert!(edges.iter().all(|s| s.source != "node2" && s.target != "node2"));
	}

	#[test]
	fn repair_policy_strips_deleted_id_from_neighbors() {
		let config = CanvasConfig {
			repair_adjacency_on_delete: true,
			..CanvasConfig::default()
		};
		let mut state = MindMapState::seeded(config);
		state.begin_drag("node1", Point::new(200.0, 200.0), Point::default());
		state.delete_selected();

		assert_eq!(state.node("root").unwrap().neighbor_ids, ["node2", "node3"]);
		assert_eq!(state.render_edges().len(), 4);
	}

	#[test]
	#[cfg(debug_assertions)]
	#[should_panic(expected = "duplicate node id")]
	fn duplicate_initial_ids_are_rejected() {
		let nodes = vec![
			GraphNode::new("twin", "A", Point::new(0.0, 0.0), ColorTag::Primary, &[]),
			GraphNode::new("twin", "B", Point::new(200.0, 0.0), ColorTag::Accent, &[]),
		];
		MindMapState::new(nodes, CanvasConfig::default());
	}

	// ── Domain: Hit testing ──

	#[test]
	fn hit_test_prefers_the_last_drawn_node() {
		let nodes = vec![
			GraphNode::new("under", "A", Point::new(0.0, 0.0), ColorTag::Primary, &[]),
			GraphNode::new("over", "B", Point::new(40.0, 20.0), ColorTag::Accent, &[]),
		];
		let state = MindMapState::new(nodes, CanvasConfig::default());

		assert_eq!(state.node_at(Point::new(60.0, 30.0)).map(|n| n.id.as_str()), Some("over"));
		assert_eq!(state.node_at(Point::new(10.0, 10.0)).map(|n| n.id.as_str()), Some("under"));
		assert!(state.node_at(Point::new(141.0, 71.0)).is_none());
	}
}
