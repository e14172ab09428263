use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::GALLERY_PATH;

/// Fallback for unmatched routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="error-page">
			<h1>"404"</h1>
			<p>"This page does not exist."</p>
			<A href=GALLERY_PATH>"Back to gallery"</A>
		</div>
	}
}
