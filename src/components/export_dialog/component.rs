use leptos::prelude::*;
use log::{debug, error, info};
use strum::IntoEnumIterator;
use web_sys::MouseEvent;

use super::state::{ExportFormat, ExportMachine, ExportState, Timer};
use crate::config::AppConfig;

type PendingTimer = StoredValue<Option<TimeoutHandle>>;

/// Modal listing the export formats. Closing it, or unmounting it, cancels
/// whatever timer is outstanding.
#[component]
pub fn ExportDialog(open: RwSignal<bool>) -> impl IntoView {
	let timing = use_context::<AppConfig>().unwrap_or_default().export;
	let machine = RwSignal::new(ExportMachine::new(timing));
	let pending: PendingTimer = StoredValue::new(None);

	on_cleanup(move || cancel(pending));

	let close = move || {
		close_export(machine, pending);
		open.set(false);
	};

	let start = move |format: ExportFormat| match machine.try_update(|m| m.start(format)) {
		Some(Ok(timer)) => {
			info!("exporting as {format}");
			schedule(machine, pending, timer);
		}
		Some(Err(err)) => debug!("{err}"),
		None => {}
	};

	let rows = move || {
		ExportFormat::iter()
			.map(|format| {
				let status = move || match machine.with(|m| m.state()) {
					ExportState::Exporting(f) if f == format => {
						view! { <span class="spinner" /> }.into_any()
					}
					ExportState::Completed(f) if f == format => {
						view! { <span class="btn btn-success btn-sm">"Downloaded"</span> }.into_any()
					}
					_ => view! { <span class="btn btn-outline btn-sm">"Export"</span> }.into_any(),
				};
				let is_done = move || machine.with(|m| m.state() == ExportState::Completed(format));
				view! {
					<div class="card export-option" on:click=move |_| start(format)>
						<div class="export-icon" class:done=is_done>
							{move || if is_done() { "✓" } else { "⬇" }}
						</div>
						<div class="export-text">
							<div class="export-title">
								<h3>{format.name()}</h3>
								<span class="badge">{format.badge()}</span>
							</div>
							<p class="muted">{format.description()}</p>
						</div>
						<div class="export-status">{status}</div>
					</div>
				}
			})
			.collect_view()
	};

	view! {
		<Show when=move || open.get()>
			<div class="dialog-backdrop" on:click=move |_| close()>
				<div class="dialog" on:click=|ev: MouseEvent| ev.stop_propagation()>
					<header class="dialog-header">
						<h2>"Export Mind Map"</h2>
						<button class="btn btn-ghost btn-sm" on:click=move |_| close()>
							"✕"
						</button>
					</header>
					<p class="muted">
						"Choose your preferred export format. Your mind map will be optimized for the selected format."
					</p>
					<div class="stack">{rows}</div>
					<footer class="dialog-footer muted">
						"Tip: PDF format preserves all interactive elements and is best for professional presentations."
					</footer>
				</div>
			</div>
		</Show>
	}
}

/// Clears the outstanding timer and returns the machine to `idle`.
fn close_export(machine: RwSignal<ExportMachine>, pending: PendingTimer) {
	cancel(pending);
	if let Some(ticket) = machine.try_update(|m| m.close()).flatten() {
		debug!("export dialog closed, cancelled {ticket:?}");
	}
}

fn schedule(machine: RwSignal<ExportMachine>, pending: PendingTimer, timer: Timer) {
	cancel(pending);
	let Timer { ticket, delay } = timer;
	let fire = move || {
		let _ = pending.try_set_value(None);
		if let Some(next) = machine.try_update(|m| m.fire(ticket)).flatten() {
			schedule(machine, pending, next);
		}
	};
	match set_timeout_with_handle(fire, delay) {
		Ok(handle) => pending.set_value(Some(handle)),
		Err(err) => error!("failed to schedule export timer: {err:?}"),
	}
}

fn cancel(pending: PendingTimer) {
	if let Some(handle) = pending.try_update_value(Option::take).flatten() {
		handle.clear();
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use std::time::Duration;

	use wasm_bindgen_test::*;

	use super::*;
	use crate::config::ExportTiming;

	wasm_bindgen_test_configure!(run_in_browser);

	async fn sleep(ms: i32) {
		let promise = js_sys::Promise::new(&mut |resolve, _| {
			let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
		});
		let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
	}

	fn quick_machine() -> (RwSignal<ExportMachine>, PendingTimer) {
		let machine = RwSignal::new(ExportMachine::new(ExportTiming {
			export_duration: Duration::from_millis(10),
			reset_delay: Duration::from_millis(10),
		}));
		(machine, StoredValue::new(None))
	}

	fn start(machine: RwSignal<ExportMachine>, pending: PendingTimer, format: ExportFormat) {
		let timer = machine.try_update(|m| m.start(format)).unwrap().unwrap();
		schedule(machine, pending, timer);
	}

	#[wasm_bindgen_test]
	async fn scheduled_timers_drive_the_timeline() {
		let owner = Owner::new();
		owner.set();
		let (machine, pending) = quick_machine();

		start(machine, pending, ExportFormat::Png);
		assert!(pending.get_value().is_some());

		sleep(15).await;
		assert_eq!(machine.get_untracked().state(), ExportState::Completed(ExportFormat::Png));

		sleep(30).await;
		assert_eq!(machine.get_untracked().state(), ExportState::Idle);
		assert!(pending.get_value().is_none());
	}

	#[wasm_bindgen_test]
	async fn closing_clears_the_pending_timeout() {
		let owner = Owner::new();
		owner.set();
		let (machine, pending) = quick_machine();

		start(machine, pending, ExportFormat::Pdf);
		close_export(machine, pending);

		assert!(pending.get_value().is_none());
		assert_eq!(machine.get_untracked().state(), ExportState::Idle);

		sleep(40).await;
		assert_eq!(machine.get_untracked().state(), ExportState::Idle);
		assert!(pending.get_value().is_none());
	}
}
