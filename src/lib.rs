//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod catalog;
mod components;
mod config;
mod error;
mod pages;
mod routes;

pub use config::{AppConfig, CanvasConfig, ExportTiming, GridConfig};

// Top-Level pages
use crate::pages::editor::Editor;
use crate::pages::gallery::Gallery;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(level: Level) {
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {level}");
}

/// An app router for the project gallery and the mind-map editor.
#[component]
pub fn App(
	/// Tunables shared with every page through context.
	#[prop(optional)]
	config: AppConfig,
) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="IdeaMap AI" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Gallery />
				<Route path=path!("/editor") view=Editor />
				<Route path=path!("/editor/:project_id") view=Editor />
			</Routes>
		</Router>
	}
}
