//! Light/dark theme selection.
//!
//! The preference is read from `localStorage`, falling back to the
//! `prefers-color-scheme` media query. Applying a theme toggles the `dark`
//! class on `<html>`. Outside the browser these degrade to defaults.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "c_struct_analyzer_theme";

/// Color theme shared by the editor and the diagram.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Name of the matching Mermaid theme.
	pub fn mermaid_name(self) -> &'static str {
		match self {
			Self::Light => "default",
			Self::Dark => "dark",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"light" => Some(Self::Light),
			"dark" => Some(Self::Dark),
			_ => None,
		}
	}
}

/// Stored preference, else the system preference, else [`Theme::Light`].
pub fn read_preference() -> Theme {
	#[cfg(target_arch = "wasm32")]
	{
		let Some(window) = web_sys::window() else {
			return Theme::default();
		};

		if let Ok(Some(storage)) = window.local_storage() {
			if let Some(theme) = storage
				.get_item(STORAGE_KEY)
				.ok()
				.flatten()
				.and_then(|v| Theme::parse(&v))
			{
				return theme;
			}
		}

		let prefers_dark = window
			.match_media("(prefers-color-scheme: dark)")
			.ok()
			.flatten()
			.is_some_and(|mq| mq.matches());
		if prefers_dark { Theme::Dark } else { Theme::Light }
	}
	#[cfg(not(target_arch = "wasm32"))]
	{
		Theme::default()
	}
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
	#[cfg(target_arch = "wasm32")]
	{
		let Some(root) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element())
		else {
			return;
		};
		let class_list = root.class_list();
		let result = if theme.is_dark() {
			class_list.add_1("dark")
		} else {
			class_list.remove_1("dark")
		};
		if result.is_err() {
			log::warn!("could not apply {} theme", theme.as_str());
		}
	}
	#[cfg(not(target_arch = "wasm32"))]
	{
		let _ = theme;
	}
}

/// Remember the choice for the next visit.
pub fn persist(theme: Theme) {
	#[cfg(target_arch = "wasm32")]
	{
		if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
			let _ = storage.set_item(STORAGE_KEY, theme.as_str());
		}
	}
	#[cfg(not(target_arch = "wasm32"))]
	{
		let _ = theme;
	}
}
