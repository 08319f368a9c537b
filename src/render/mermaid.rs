//! Binding to the global `mermaid` object loaded by `index.html`.

use js_sys::{Object, Promise, Reflect};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{RenderConfig, RenderEngine, RenderError};

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(catch, js_namespace = mermaid, js_name = initialize)]
	fn mermaid_initialize(config: &JsValue) -> Result<(), JsValue>;

	#[wasm_bindgen(catch, js_namespace = mermaid, js_name = render)]
	fn mermaid_render(id: &str, text: &str) -> Result<Promise, JsValue>;
}

/// Renders through `window.mermaid`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MermaidEngine;

impl RenderEngine for MermaidEngine {
	fn initialize(&self, config: &RenderConfig) {
		let options = Object::new();
		let entries: [(&str, JsValue); 3] = [
			("startOnLoad", JsValue::FALSE),
			("theme", config.theme.mermaid_name().into()),
			("securityLevel", config.security_level.as_str().into()),
		];
		for (key, value) in entries {
			let _ = Reflect::set(&options, &key.into(), &value);
		}
		if let Err(err) = mermaid_initialize(&options) {
			warn!("mermaid.initialize failed: {}", js_message(&err));
		}
	}

	async fn render(&self, id: &str, spec: &str) -> Result<String, RenderError> {
		let promise = mermaid_render(id, spec).map_err(engine_error)?;
		let result = JsFuture::from(promise).await.map_err(engine_error)?;
		Reflect::get(&result, &"svg".into())
			.ok()
			.and_then(|svg| svg.as_string())
			.ok_or(RenderError::MissingSvg)
	}
}

fn engine_error(value: JsValue) -> RenderError {
	RenderError::Engine(js_message(&value))
}

// Thrown values are usually `Error`s, but Mermaid also rejects with plain strings.
fn js_message(value: &JsValue) -> String {
	Reflect::get(value, &"message".into())
		.ok()
		.and_then(|m| m.as_string())
		.or_else(|| value.as_string())
		.unwrap_or_else(|| format!("{value:?}"))
}
