use super::*;

#[test]
fn default_is_light() {
	assert_eq!(Theme::default(), Theme::Light);
	assert!(!Theme::default().is_dark());
}

#[test]
fn toggling_twice_is_identity() {
	assert_eq!(Theme::Light.toggled(), Theme::Dark);
	assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn mermaid_theme_names() {
	assert_eq!(Theme::Light.mermaid_name(), "default");
	assert_eq!(Theme::Dark.mermaid_name(), "dark");
}

#[test]
fn parse_round_trips_stored_values() {
	for theme in [Theme::Light, Theme::Dark] {
		assert_eq!(Theme::parse(theme.as_str()), Some(theme));
	}
	assert_eq!(Theme::parse("system"), None);
}

#[test]
fn native_preference_falls_back_to_light() {
	assert_eq!(read_preference(), Theme::Light);
	apply(Theme::Dark);
	persist(Theme::Dark);
}
