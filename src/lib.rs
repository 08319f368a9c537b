//! Leptos client-side app that draws C struct relationships.
//!
//! Pasted C source is scanned for `typedef struct` declarations, turned into
//! a Mermaid class diagram with composition and reference edges, and shown
//! in a zoomable frame.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
pub mod analysis;
mod components;
mod pages;
pub mod render;
pub mod theme;
pub mod viewport;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the analyzer and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let theme = RwSignal::new(theme::read_preference());
	provide_context(theme);
	Effect::new(move |_| theme::apply(theme.get()));

	view! {
		<Html attr:lang="en" attr:dir="ltr" />

		// sets the document title
		<Title text="C Struct Analyzer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Visualize C struct relationships with interactive diagrams" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
