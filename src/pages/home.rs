use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::json_graph::JsonGraphCanvas;
use crate::visualizer::{SAMPLE_INPUT, Theme, Visualizer};

/// JSON input on the left, searchable graph on the right.
#[component]
pub fn Home() -> impl IntoView {
	// Text fields live apart from the visualizer so typing does not re-derive the graph.
	let input = RwSignal::new(SAMPLE_INPUT.to_string());
	let query = RwSignal::new(String::new());
	let visualizer = RwSignal::new(Visualizer::default());
	let graph = Memo::new(move |_| visualizer.with(|v| v.graph.clone()));
	let focus = Memo::new(move |_| visualizer.with(|v| v.focus));
	let dark = Memo::new(move |_| visualizer.with(|v| v.theme == Theme::Dark));

	let message = move || {
		visualizer.with(|v| v.message.clone()).map(|m| {
			let class = if m.is_error() { "message error" } else { "message success" };
			view! { <p class=class>{m.text().to_string()}</p> }
		})
	};

	let on_generate = move |_: MouseEvent| {
		input.with_untracked(|text| {
			visualizer.update(|v| {
				let _ = v.generate(text);
			})
		})
	};
	let on_clear = move |_: MouseEvent| input.update(|text| visualizer.update(|v| v.clear(text)));
	let on_search = move |_: MouseEvent| {
		query.with_untracked(|text| {
			visualizer.update(|v| {
				let _ = v.search(text);
			})
		})
	};
	let on_reset = move |_: MouseEvent| query.update(|text| visualizer.update(|v| v.reset_search(text)));

	view! {
		<div class="visualizer" data-theme=move || visualizer.with(|v| v.theme.as_str())>
			<header class="visualizer-header">
				<h1>"JSON Tree Visualizer"</h1>
				<button class="theme-toggle" on:click=move |_| visualizer.update(Visualizer::toggle_theme)>
					"Dark / Light"
				</button>
			</header>

			<main class="visualizer-panes">
				<section class="input-pane">
					<h2>"JSON Input & Parsing"</h2>
					<textarea
						placeholder="Paste your JSON here..."
						prop:value=move || input.get()
						on:input=move |ev| input.set(event_target_value(&ev))
					/>
					<div class="actions">
						<button on:click=on_generate>"Visualize"</button>
						<button on:click=on_clear>"Clear"</button>
					</div>
				</section>

				<section class="graph-pane">
					<div class="search">
						<input
							placeholder="Search by path (e.g. $.user.name.city)"
							prop:value=move || query.get()
							on:input=move |ev| query.set(event_target_value(&ev))
						/>
						<button on:click=on_search>"Search"</button>
						<button on:click=on_reset>"Reset"</button>
					</div>
					{message}
					<div class="graph-frame" style="height: 520px;">
						<JsonGraphCanvas data=graph focus=focus dark=dark />
					</div>
				</section>
			</main>
		</div>
	}
}
