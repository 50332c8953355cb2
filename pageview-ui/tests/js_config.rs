use pageview_core::{Selectors, UiConfig};
use pageview_ui::JsUiConfig;

fn parse(json: &str) -> UiConfig {
    let cfg: JsUiConfig = serde_json::from_str(json).expect("Config mẫu không hợp lệ");
    UiConfig::from(cfg)
}

#[test]
fn empty_object_keeps_defaults() {
    assert_eq!(parse("{}"), UiConfig::default());
}

#[test]
fn overrides_only_given_fields() {
    let config = parse(r#"{ "value_suffix": "lượt xem", "tooltip_gap_px": 8 }"#);

    assert_eq!(config.value_suffix, "lượt xem");
    assert_eq!(config.tooltip_gap_px, 8.0);
    assert_eq!(config.open_class, "open");
    assert_eq!(config.selectors, Selectors::default());
}

#[test]
fn partial_selectors_fill_in_defaults() {
    let config = parse(r#"{ "selectors": { "bar": ".column" }, "open_class": "is-open" }"#);

    assert_eq!(config.selectors.bar, ".column");
    assert_eq!(config.selectors.tooltip, ".tooltip");
    assert_eq!(config.selectors.dropdown_container, ".dropdown-container");
    assert_eq!(config.open_dropdown_selector(), ".dropdown-container.is-open");
}

#[test]
fn wrong_field_type_is_rejected() {
    let result = serde_json::from_str::<JsUiConfig>(r#"{ "tooltip_gap_px": "8" }"#);
    assert!(result.is_err());
}
