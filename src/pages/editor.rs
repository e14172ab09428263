use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};
use log::{debug, info};
use web_sys::MouseEvent;

use crate::catalog::{AI_SUGGESTIONS, RECENT_ACTIVITY};
use crate::components::export_dialog::ExportDialog;
use crate::components::mind_map::{BrowserRandom, MindMapCanvas, MindMapState};
use crate::config::AppConfig;
use crate::routes::{EditorTarget, GALLERY_PATH};

/// Editor route. Resolves the target from the path and query, then mounts
/// a fresh workspace for it.
#[component]
pub fn Editor() -> impl IntoView {
	let params = use_params_map();
	let query = use_query_map();
	let target = move || {
		EditorTarget::resolve(
			params.read().get("project_id").as_deref(),
			query.read().get("template").as_deref(),
		)
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="error-page">
					<h1>"Uh oh! Something went wrong!"</h1>

					<p>"Errors: "</p>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
					<A href=GALLERY_PATH>"Back to gallery"</A>
				</div>
			}
		}>{move || target().map(|target| view! { <Workspace target /> })}</ErrorBoundary>
	}
}

#[component]
fn Workspace(target: EditorTarget) -> impl IntoView {
	let config = use_context::<AppConfig>().unwrap_or_default();
	info!("opening editor at {}", target.path());
	if let EditorTarget::Template(id) = target {
		debug!("template {id} requested; starting from the default seed");
	}

	let state = RwSignal::new(MindMapState::seeded(config.canvas));
	let show_export = RwSignal::new(false);

	let node_count = move || state.with(|s| s.nodes().len());
	let has_selection = move || state.with(|s| s.selected().is_some());
	let delete_selected = move |_: MouseEvent| {
		state.update(|s| {
			s.delete_selected();
		})
	};

	let suggestions = AI_SUGGESTIONS
		.iter()
		.map(|&label| {
			let add = move |_: MouseEvent| {
				state.update(|s| {
					s.add_suggested_node(label, &mut BrowserRandom);
				})
			};
			view! {
				<div class="card suggestion" on:click=add>
					<span>{label}</span>
					<span class="accent">"+"</span>
				</div>
			}
		})
		.collect_view();

	let activity = RECENT_ACTIVITY
		.iter()
		.map(|a| {
			view! {
				<li>
					<span class=format!("dot dot-{}", a.tone.as_ref())></span>
					{a.text}
				</li>
			}
		})
		.collect_view();

	view! {
		<div class="editor">
			<nav class="toolbar">
				<button class="tool" title="Move">"✥"</button>
				<button class="tool" title="Add">"+"</button>
				<hr />
				<button class="tool" title="Zoom in">"⊕"</button>
				<button class="tool" title="Zoom out">"⊖"</button>
				<button class="tool" title="Reset view">"↺"</button>
				<hr />
				<button
					class="tool tool-danger"
					title="Delete selected"
					prop:disabled=move || !has_selection()
					on:click=delete_selected
				>
					"🗑"
				</button>
			</nav>

			<div class="editor-main">
				<header class="editor-header">
					<div class="editor-title">
						<A href=GALLERY_PATH attr:class="btn btn-ghost btn-sm">
							"←"
						</A>
						<h1>{target.title()}</h1>
						<span class="muted">
							{target.collaborators()} " collaborators online · " {node_count} " nodes"
						</span>
					</div>
					<div class="editor-actions">
						<button class="btn btn-outline btn-sm">"Save"</button>
						<button class="btn btn-outline btn-sm" on:click=move |_| show_export.set(true)>
							"Export"
						</button>
						<button class="btn btn-hero btn-sm">"Share"</button>
					</div>
				</header>

				<div class="editor-body">
					<div class="canvas-host">
						<MindMapCanvas state />
					</div>

					<aside class="sidebar">
						<h2>"✨ AI Suggestions"</h2>
						<div class="stack">{suggestions}</div>

						<div class="card card-ai">
							<h3>"Smart Connect"</h3>
							<p class="muted small">
								"AI can automatically suggest connections between your ideas."
							</p>
							<button class="btn btn-ai btn-sm" disabled=true>
								"Find Connections"
							</button>
						</div>

						<h3 class="small">"Recent Activity"</h3>
						<ul class="activity muted small">{activity}</ul>
					</aside>
				</div>
			</div>

			<ExportDialog open=show_export />
		</div>
	}
}
