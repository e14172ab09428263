use leptos::prelude::*;
use leptos_router::components::A;
use log::info;

use crate::catalog::{self, AI_RECOMMENDATIONS, ProjectSummary, TEMPLATES, Template};
use crate::routes::EditorTarget;

/// Landing page: recent projects, quick-start templates and recommendations.
#[component]
pub fn Gallery() -> impl IntoView {
	info!("gallery mounted");
	let query = RwSignal::new(String::new());

	let projects = move || {
		let matches: Vec<_> = catalog::search_projects(&query.read()).collect();
		if matches.is_empty() {
			view! { <p class="muted">"No mind maps match your search."</p> }.into_any()
		} else {
			matches.into_iter().map(project_card).collect_view().into_any()
		}
	};

	view! {
		<div class="gallery">
			<header class="topbar">
				<h1 class="brand">"🧠 IdeaMap AI"</h1>
				<div class="topbar-actions">
					<input
						class="search"
						type="search"
						placeholder="Search mind maps..."
						prop:value=move || query.get()
						on:input=move |ev| query.set(event_target_value(&ev))
					/>
					<A href=EditorTarget::Blank.path() attr:class="btn btn-hero">
						"+ New Mind Map"
					</A>
				</div>
			</header>

			<main class="gallery-grid">
				<section class="recent">
					<h2>"Recent Projects"</h2>
					<div class="stack">{projects}</div>
				</section>

				<aside class="templates">
					<h2>"Quick Start Templates"</h2>
					<div class="stack">{TEMPLATES.iter().map(template_card).collect_view()}</div>

					<div class="card card-ai">
						<h3>"AI Recommendations"</h3>
						<p class="muted">
							"Based on your recent activity, we suggest creating a mind map for:"
						</p>
						{AI_RECOMMENDATIONS
							.iter()
							.map(|&idea| {
								view! {
									<A href=EditorTarget::Blank.path() attr:class="btn btn-ai-subtle">
										{idea}
									</A>
								}
							})
							.collect_view()}
					</div>
				</aside>
			</main>
		</div>
	}
}

fn project_card(project: &'static ProjectSummary) -> impl IntoView {
	view! {
		<div class="card project-card">
			<div class="project-info">
				<h3>{project.title}</h3>
				<div class="muted meta">
					<span>"Modified " {project.last_modified}</span>
					<span>{project.collaborators} " collaborators"</span>
					<span>{project.node_count} " nodes"</span>
				</div>
			</div>
			<A href=EditorTarget::Project(project.id).path() attr:class="btn btn-ai btn-sm">
				"Open"
			</A>
		</div>
	}
}

fn template_card(template: &'static Template) -> impl IntoView {
	view! {
		<A href=EditorTarget::Template(template.id).path() attr:class="card template-card">
			<span class="template-icon">{template.icon}</span>
			<div>
				<h3>{template.name}</h3>
				<p class="muted">{template.description}</p>
				<span class="muted small">{template.node_count} " starting nodes"</span>
			</div>
		</A>
	}
}
