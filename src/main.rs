use ideamap::{App, AppConfig, init_logging};
use leptos::prelude::*;

fn main() {
	let config = AppConfig::default();
	init_logging(config.log_level);
	leptos::mount::mount_to_body(move || view! { <App config /> });
}
