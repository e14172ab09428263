use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::render;
use super::state::MindMapState;
use super::types::Point;

const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

#[component]
pub fn MindMapCanvas(state: RwSignal<MindMapState>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let size = RwSignal::new(FALLBACK_SIZE);
	let ctx: Rc<RefCell<Option<CanvasRenderingContext2d>>> = Rc::new(RefCell::new(None));
	let ctx_init = ctx.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let Some(context) = context_2d(&canvas) else {
			error!("canvas 2d context unavailable");
			return;
		};
		*ctx_init.borrow_mut() = Some(context);
		fit_to_parent(&canvas, size);
	});

	// Removed with the component; a route change must not leave it on `window`
	let on_resize = window_event_listener(leptos::ev::resize, move |_| {
		if let Some(canvas) = canvas_ref.get_untracked() {
			fit_to_parent(&canvas, size);
		}
	});
	on_cleanup(move || on_resize.remove());

	let ctx_draw = ctx.clone();
	Effect::new(move |_| {
		let (w, h) = size.get();
		state.with(|s| {
			if let Some(ref c) = *ctx_draw.borrow() {
				render::render(s, c, w, h);
			}
		});
	});

	let on_mousedown = move |ev: MouseEvent| {
		let Some((pointer, origin)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		let hit = state.with_untracked(|s| s.node_at(pointer - origin).map(|n| n.id.clone()));
		if let Some(id) = hit {
			state.update(|s| {
				s.begin_drag(&id, pointer, origin);
			});
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		if !state.with_untracked(|s| s.is_dragging()) {
			return;
		}
		if let Some((pointer, origin)) = pointer_position(canvas_ref, &ev) {
			state.update(|s| s.continue_drag(pointer, origin));
		}
	};

	let end_drag = move |_: MouseEvent| {
		if state.with_untracked(|s| s.is_dragging()) {
			state.update(|s| s.end_drag());
		}
	};

	let on_keydown = move |ev: KeyboardEvent| {
		if !matches!(ev.key().as_str(), "Delete" | "Backspace") {
			return;
		}
		ev.prevent_default();
		state.update(|s| {
			if s.delete_selected().is_none() {
				debug!("nothing selected to delete");
			}
		});
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="mind-map-canvas"
			tabindex="0"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=end_drag
			on:mouseleave=end_drag
			on:keydown=on_keydown
			style="display: block; cursor: grab; outline: none;"
		/>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn fit_to_parent(canvas: &HtmlCanvasElement, size: RwSignal<(f64, f64)>) {
	let (w, h) = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or(FALLBACK_SIZE);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let _ = size.try_set((w, h));
}

/// Screen-space pointer and the canvas's screen-space origin.
fn pointer_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(Point, Point)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		Point::new(ev.client_x() as f64, ev.client_y() as f64),
		Point::new(rect.left(), rect.top()),
	))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use leptos::mount::mount_to;
	use wasm_bindgen_test::*;
	use web_sys::{Element, Event, HtmlElement};

	use super::*;
	use crate::config::CanvasConfig;

	wasm_bindgen_test_configure!(run_in_browser);

	async fn next_task() {
		let promise = js_sys::Promise::new(&mut |resolve, _| {
			let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0);
		});
		let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
	}

	async fn resize_window() {
		let _ = window().dispatch_event(&Event::new("resize").unwrap());
		next_task().await;
	}

	fn host(width: u32) -> Element {
		let host = document().create_element("div").unwrap();
		host.set_attribute("style", &format!("width: {width}px; height: 120px"))
			.unwrap();
		document().body().unwrap().append_child(&host).unwrap();
		host
	}

	#[wasm_bindgen_test]
	async fn resize_tracks_host_while_mounted_and_stops_after_unmount() {
		let host = host(321);
		let state = RwSignal::new(MindMapState::seeded(CanvasConfig::default()));
		let handle = mount_to(host.clone().unchecked_into::<HtmlElement>(), move || {
			view! { <MindMapCanvas state /> }
		});
		next_task().await;

		let canvas: HtmlCanvasElement = host
			.query_selector("canvas")
			.unwrap()
			.unwrap()
			.unchecked_into();
		assert_eq!(canvas.width(), 321);

		host.set_attribute("style", "width: 400px; height: 120px").unwrap();
		resize_window().await;
		assert_eq!(canvas.width(), 400);

		drop(handle);
		host.set_attribute("style", "width: 500px; height: 120px").unwrap();
		resize_window().await;
		resize_window().await;

		// A live listener would refit the detached canvas to the fallback size
		assert_eq!(canvas.width(), 400);
		host.remove();
	}
}
