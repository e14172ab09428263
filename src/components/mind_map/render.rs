use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::MindMapState;
use super::types::Segment;
use crate::config::GridConfig;

const BACKGROUND: &str = "#11111f";
const LABEL_PADDING: f64 = 8.0;

pub fn render(state: &MindMapState, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
	draw_grid(&state.config().grid, ctx);
	draw_edges(&state.render_edges(), state.selected(), ctx);
	draw_nodes(state, ctx);
}

fn draw_grid(grid: &GridConfig, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("rgba(148, 163, 184, 0.2)");
	for dot in grid.dots() {
		ctx.begin_path();
		let _ = ctx.arc(dot.x, dot.y, 1.5, 0.0, 2.0 * PI);
		ctx.fill();
	}
}

fn draw_edges(edges: &[Segment], selected: Option<&str>, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(2.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(5.0),
		&JsValue::from_f64(5.0),
	));
	for edge in edges {
		let touches_selection = selected
			.is_some_and(|id| edge.source == id || edge.target == id);
		ctx.set_stroke_style_str(if touches_selection {
			"rgba(165, 180, 252, 0.9)"
		} else {
			"rgba(148, 163, 184, 0.6)"
		});
		ctx.begin_path();
		ctx.move_to(edge.from.x, edge.from.y);
		ctx.line_to(edge.to.x, edge.to.y);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &MindMapState, ctx: &CanvasRenderingContext2d) {
	let size = state.config().node_size;
	let selected = state.selected();

	ctx.set_font("500 13px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for node in state.nodes() {
		let (x, y) = (node.position.x, node.position.y);
		let is_selected = selected == Some(node.id.as_str());

		// Selected cards draw slightly enlarged around their centre
		let (w, h) = if is_selected {
			(size.x * 1.05, size.y * 1.05)
		} else {
			(size.x, size.y)
		};
		let (left, top) = (x - (w - size.x) / 2.0, y - (h - size.y) / 2.0);

		ctx.save();
		ctx.set_shadow_color("rgba(0, 0, 0, 0.35)");
		ctx.set_shadow_blur(if is_selected { 16.0 } else { 6.0 });
		ctx.set_fill_style_str(node.color.fill());
		ctx.fill_rect(left, top, w, h);
		ctx.restore();

		if is_selected {
			ctx.set_stroke_style_str("#a5b4fc");
			ctx.set_line_width(2.0);
			ctx.stroke_rect(left - 2.0, top - 2.0, w + 4.0, h + 4.0);
		}

		ctx.set_fill_style_str(node.color.text());
		let _ = ctx.fill_text_with_max_width(
			&node.label,
			left + w / 2.0,
			top + h / 2.0,
			w - 2.0 * LABEL_PADDING,
		);
	}
}
