#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-pageview-ui]";

/// Default CSS for the chart, tooltip and dropdown, with design tokens that pages can override.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --pageview-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --pageview-text: #1f2933;
  --pageview-muted: #52606d;
  --pageview-surface: #ffffff;
  --pageview-border: rgba(148, 163, 184, 0.38);
  --pageview-bar: #2563eb;
  --pageview-bar-hover: #1d4ed8;
  --pageview-track: rgba(148, 163, 184, 0.14);
  --pageview-tooltip-bg: #11181c;
  --pageview-tooltip-text: #f8fafc;
  --pageview-radius: 8px;
}

.pageview-chart {
  font-family: var(--pageview-font-family);
  color: var(--pageview-text);
}

.pageview-chart svg {
  display: block;
  width: 100%;
  height: auto;
}

.pageview-chart .bar-track {
  fill: var(--pageview-track);
}

.pageview-chart .bar {
  fill: var(--pageview-bar);
  cursor: pointer;
  transition: fill 120ms ease;
}

.pageview-chart .bar:hover {
  fill: var(--pageview-bar-hover);
}

.tooltip {
  position: absolute;
  display: none;
  flex-direction: column;
  align-items: center;
  gap: 2px;
  padding: 6px 10px;
  border-radius: var(--pageview-radius);
  background: var(--pageview-tooltip-bg);
  color: var(--pageview-tooltip-text);
  font-size: 12px;
  white-space: nowrap;
  pointer-events: none;
  z-index: 20;
}

.tooltip .label {
  opacity: 0.75;
}

.tooltip .value {
  font-weight: 600;
}

.dropdown-container {
  position: relative;
  display: inline-block;
  font-family: var(--pageview-font-family);
}

.dropdown-button {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 6px 12px;
  border: 1px solid var(--pageview-border);
  border-radius: var(--pageview-radius);
  background: var(--pageview-surface);
  color: var(--pageview-text);
  cursor: pointer;
}

.dropdown-menu {
  display: none;
  position: absolute;
  top: calc(100% + 4px);
  left: 0;
  min-width: 100%;
  margin: 0;
  padding: 4px 0;
  list-style: none;
  border: 1px solid var(--pageview-border);
  border-radius: var(--pageview-radius);
  background: var(--pageview-surface);
  box-shadow: 0 12px 24px rgba(15, 23, 42, 0.12);
  z-index: 30;
}

.dropdown-container.open .dropdown-menu {
  display: block;
}

.dropdown-option {
  display: block;
  padding: 6px 12px;
  color: var(--pageview-text);
  text-decoration: none;
  white-space: nowrap;
}

.dropdown-option:hover,
.dropdown-option.is-selected {
  background: var(--pageview-track);
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-pageview-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
