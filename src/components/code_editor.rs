//! Plain-text C source editor.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use log::debug;
use web_sys::HtmlTextAreaElement;

use crate::theme::Theme;

#[cfg(test)]
#[path = "code_editor_test.rs"]
mod code_editor_test;

const INDENT: &str = "    ";

/// Replace the selection `start..end` of `text` with [`INDENT`]. Offsets are
/// UTF-16 code units, as the DOM reports them. Returns the new text and the
/// caret offset just past the inserted indent.
fn indent_selection(text: &str, start: u32, end: u32) -> (String, u32) {
	let len = text.encode_utf16().count() as u32;
	let (start, end) = (start.min(end).min(len), start.max(end).min(len));
	let byte_offset = |target: u32| {
		let mut units = 0;
		for (i, ch) in text.char_indices() {
			if units >= target {
				return i;
			}
			units += ch.len_utf16() as u32;
		}
		text.len()
	};
	let (from, to) = (byte_offset(start), byte_offset(end));

	let mut out = String::with_capacity(text.len() + INDENT.len());
	out.push_str(&text[..from]);
	out.push_str(INDENT);
	out.push_str(&text[to..]);
	(out, start + INDENT.len() as u32)
}

/// `<textarea>` bound to `code`. Tab indents instead of moving focus.
#[component]
pub fn CodeEditor(code: RwSignal<String>) -> impl IntoView {
	let theme = expect_context::<RwSignal<Theme>>();

	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() != "Tab" || ev.shift_key() {
			return;
		}
		ev.prevent_default();
		let textarea = event_target::<HtmlTextAreaElement>(&ev);
		let (Ok(Some(start)), Ok(Some(end))) = (textarea.selection_start(), textarea.selection_end())
		else {
			return;
		};
		let (text, caret) = indent_selection(&textarea.value(), start, end);
		textarea.set_value(&text);
		if textarea.set_selection_range(caret, caret).is_err() {
			debug!("could not move the caret after indenting");
		}
		code.set(text);
	};

	let class = move || {
		if theme.get().is_dark() {
			"code-editor code-editor--dark"
		} else {
			"code-editor"
		}
	};

	view! {
		<textarea
			class=class
			spellcheck="false"
			autocomplete="off"
			aria-label="C source code"
			prop:value=move || code.get()
			on:input=move |ev| code.set(event_target_value(&ev))
			on:keydown=on_keydown
		></textarea>
	}
}
