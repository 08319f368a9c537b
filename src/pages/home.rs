use leptos::prelude::*;
use log::info;

use crate::analysis::{Extraction, StructDescriptor, diagram, extract_with_report};
use crate::components::{CodeEditor, StructDiagram};
use crate::theme::{self, Theme};

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Program shown on first load.
pub const SAMPLE_CODE: &str = "typedef struct {
    char fName[20];
    char lName[20];
    char MI;
} name;

typedef struct {
    name empName;
    int idNum;
    int grossSalary;
    int rate;
    int hrsWorked;
    float takeHomeSalary;
} employeeInfo;

typedef struct {
    employeeInfo* employees;
    int count;
} employeeRecord;

typedef struct {
    employeeRecord employeeList;
    employeeRecord bracket1, bracket2, bracket3;
} companyRecord;";

fn summary(extraction: &Extraction) -> String {
	let edges = diagram::relationships(&extraction.structs).len();
	let mut text = format!(
		"{} structs, {} relationships",
		extraction.structs.len(),
		edges
	);
	if !extraction.skipped.is_empty() {
		text.push_str(&format!(", {} declarations skipped", extraction.skipped.len()));
	}
	text
}

/// Structs of the latest analysis. Notifies on every analysis, including one
/// that reproduces the previous result, so the diagram re-renders and refits.
fn analyzed_structs(extraction: RwSignal<Extraction>) -> Signal<Vec<StructDescriptor>> {
	Signal::derive(move || extraction.with(|e| e.structs.clone()))
}

/// Analyzer page: editor on the left, diagram on the right.
#[component]
pub fn Home() -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();
	let code = RwSignal::new(SAMPLE_CODE.to_owned());
	let extraction = RwSignal::new(extract_with_report(SAMPLE_CODE));
	let structs = analyzed_structs(extraction);

	let on_analyze = move |_| {
		let result = code.with_untracked(|c| extract_with_report(c));
		info!("analyzed {} structs", result.structs.len());
		extraction.set(result);
	};

	let on_toggle_theme = move |_| {
		theme.update(|t| {
			*t = t.toggled();
			theme::persist(*t);
		});
	};
	let toggle_label = move || {
		if theme.get().is_dark() {
			"\u{2600} Light Mode"
		} else {
			"\u{263E} Dark Mode"
		}
	};

	view! {
		<main class="analyzer">
			<header class="analyzer__header">
				<h1>"C Struct Analyzer"</h1>
				<p class="subtitle">"Visualize C struct relationships with interactive diagrams"</p>
				<button class="btn btn--outline" on:click=on_toggle_theme>
					{toggle_label}
				</button>
			</header>

			<div class="analyzer__panels">
				<section class="card">
					<h2>"C Code Input"</h2>
					<CodeEditor code=code />
					<button class="btn btn--primary btn--wide" on:click=on_analyze>
						"Analyze Structs"
					</button>
				</section>

				<section class="card card--diagram">
					<h2>"Structure Diagram"</h2>
					<StructDiagram structs=structs />
				</section>
			</div>

			<footer class="analyzer__footer">{move || extraction.with(summary)}</footer>
		</main>
	}
}
