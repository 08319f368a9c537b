use leptos::ev::{MouseEvent, WheelEvent};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analysis::StructDescriptor;
use crate::render::{DiagramView, MermaidEngine, RenderConfig, RenderGeneration, render_structs};
use crate::theme::Theme;
use crate::viewport::{Size, ViewportController};

const PLACEHOLDER: &str = "Enter C struct code and click \"Analyze Structs\" to generate a diagram";

/// Rendered class diagram of `structs` inside a zoomable, pannable frame.
///
/// With `controls` off the diagram still gets its initial fit, but the zoom
/// buttons are hidden and pointer gestures are ignored.
#[component]
pub fn StructDiagram(
	#[prop(into)] structs: Signal<Vec<StructDescriptor>>,
	#[prop(default = true)] controls: bool,
) -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();
	let container_ref = NodeRef::<Div>::new();
	let content_ref = NodeRef::<Div>::new();
	let shown = RwSignal::new(DiagramView::Empty);
	let viewport = RwSignal::new(ViewportController::default());
	let generation = StoredValue::new(RenderGeneration::default());

	// `None` until the frame and the diagram have been laid out.
	let measure = move || {
		let container = container_ref.get_untracked().and_then(|el| {
			Size::measured(f64::from(el.client_width()), f64::from(el.client_height()))
		});
		let content = content_ref.get_untracked().and_then(|el| {
			Size::measured(f64::from(el.scroll_width()), f64::from(el.scroll_height()))
		});
		(container, content)
	};

	Effect::new(move |_| {
		let structs = structs.get();
		let config = RenderConfig {
			theme: theme.get(),
			..RenderConfig::default()
		};
		let current = generation.with_value(RenderGeneration::begin);

		spawn_local(async move {
			let rendered = render_structs(&MermaidEngine, &config, &structs).await;
			let Some(rendered) = generation.with_value(|g| g.settle(current, rendered)) else {
				return;
			};
			let fresh = matches!(rendered, DiagramView::Svg(_));
			shown.set(rendered);
			if fresh {
				request_animation_frame(move || {
					let (container, content) = measure();
					viewport.update(|vp| vp.optimize_initial_size(container, content));
				});
			}
		});
	});

	let on_mousedown = move |ev: MouseEvent| {
		if controls {
			viewport.update(|vp| vp.start_drag(f64::from(ev.client_x()), f64::from(ev.client_y())));
		}
	};

	let on_mousemove = move |ev: MouseEvent| {
		if viewport.with_untracked(ViewportController::is_dragging) {
			viewport.update(|vp| vp.drag_to(f64::from(ev.client_x()), f64::from(ev.client_y())));
		}
	};

	let on_drag_end = move |_: MouseEvent| {
		if viewport.with_untracked(ViewportController::is_dragging) {
			viewport.update(ViewportController::end_drag);
		}
	};

	let on_wheel = move |ev: WheelEvent| {
		if !controls {
			return;
		}
		let modifier = ev.ctrl_key() || ev.meta_key();
		if viewport.try_update(|vp| vp.wheel_zoom(ev.delta_y(), modifier)) == Some(true) {
			ev.prevent_default();
		}
	};

	let zoom_in = move |_| viewport.update(ViewportController::zoom_in);
	let zoom_out = move |_| viewport.update(ViewportController::zoom_out);
	let fit_to_view = move |_| {
		let (container, content) = measure();
		viewport.update(|vp| vp.fit_to_view(container, content));
	};
	let optimal_view = move |_| {
		let (container, content) = measure();
		viewport.update(|vp| vp.optimize_initial_size(container, content));
	};

	let has_structs = move || structs.with(|s| !s.is_empty());
	let zoom_label = move || format!("{}%", viewport.with(ViewportController::zoom_percent));

	view! {
		<div class="struct-diagram">
			<Show when=move || controls && has_structs()>
				<div class="diagram-controls">
					<button class="btn btn--small" title="Zoom In" aria-label="Zoom In" on:click=zoom_in>
						"+"
					</button>
					<button class="btn btn--small" title="Zoom Out" aria-label="Zoom Out" on:click=zoom_out>
						"\u{2212}"
					</button>
					<button
						class="btn btn--small"
						title="Fit to View"
						aria-label="Fit to View"
						on:click=fit_to_view
					>
						"\u{26F6}"
					</button>
					<button
						class="btn btn--small"
						title="Optimal View"
						aria-label="Optimal View"
						on:click=optimal_view
					>
						"\u{21BA}"
					</button>
					<span class="diagram-controls__zoom">{zoom_label}</span>
				</div>
			</Show>

			<div
				node_ref=container_ref
				class="diagram-frame"
				style:cursor=move || viewport.with(ViewportController::cursor)
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_drag_end
				on:mouseleave=on_drag_end
				on:wheel=on_wheel
			>
				{move || match shown.get() {
					DiagramView::Empty => {
						view! { <div class="diagram-placeholder">{PLACEHOLDER}</div> }.into_any()
					}
					DiagramView::Svg(svg) => {
						view! {
							<div
								node_ref=content_ref
								class="diagram-content"
								style:transform=move || viewport.with(ViewportController::transform_css)
								inner_html=svg
							></div>
						}
							.into_any()
					}
					DiagramView::Failed { message } => {
						view! { <div class="diagram-error">{message}</div> }.into_any()
					}
				}}
			</div>
		</div>
	}
}
