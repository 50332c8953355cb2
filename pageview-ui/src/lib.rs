//! Lớp tương tác của dashboard pageview cho môi trường WebAssembly.
//!
//! Hai cách dùng: gắn controller vào trang render sẵn từ server
//! (`init_interactions`), hoặc render biểu đồ/dropdown bằng component Yew
//! (`mount_bar_chart`, `mount_dropdown`).

use std::cell::Cell;

use pageview_core::UiConfig;
use serde::Deserialize;

#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod dropdown;
#[cfg(target_arch = "wasm32")]
mod styles;
#[cfg(target_arch = "wasm32")]
mod tooltip;

/// Cấu hình từ JavaScript; trường nào bỏ trống thì giữ mặc định.
#[derive(Deserialize)]
pub struct JsUiConfig {
    #[serde(default)]
    selectors: Option<pageview_core::Selectors>,
    #[serde(default)]
    open_class: Option<String>,
    #[serde(default)]
    tooltip_gap_px: Option<f64>,
    #[serde(default)]
    value_suffix: Option<String>,
}

impl From<JsUiConfig> for UiConfig {
    fn from(cfg: JsUiConfig) -> Self {
        let mut base = UiConfig::default();
        if let Some(selectors) = cfg.selectors {
            base.selectors = selectors;
        }
        if let Some(open_class) = cfg.open_class {
            base.open_class = open_class;
        }
        if let Some(gap) = cfg.tooltip_gap_px {
            base.tooltip_gap_px = gap;
        }
        if let Some(suffix) = cfg.value_suffix {
            base.value_suffix = suffix;
        }
        base
    }
}

/// Cờ khởi tạo một lần. Chỉ được bật khi bước chuẩn bị thành công, để lần gọi
/// sau với cấu hình đã sửa vẫn gắn được controller.
#[derive(Debug, Default)]
pub struct InitOnce {
    done: Cell<bool>,
}

impl InitOnce {
    pub const fn new() -> Self {
        Self {
            done: Cell::new(false),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done.get()
    }

    /// Chạy `prepare` nếu chưa khởi tạo. `Ok(None)` nghĩa là đã khởi tạo trước đó.
    pub fn run<T, E>(&self, prepare: impl FnOnce() -> Result<T, E>) -> Result<Option<T>, E> {
        if self.done.get() {
            return Ok(None);
        }
        let value = prepare()?;
        self.done.set(true);
        Ok(Some(value))
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::components::{BarChartView, BarChartViewProps, DropdownView, DropdownViewProps};
    use crate::dom::{self, Listener};
    use crate::{dropdown, tooltip, InitOnce, JsUiConfig};
    use pageview_core::{layout_bar_chart, BarInput, ChartDimensions, Dropdown, UiConfig};
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, Event};

    thread_local! {
        static INITIALIZED: InitOnce = const { InitOnce::new() };
    }

    fn parse_config(config: Option<JsValue>) -> Result<UiConfig, JsValue> {
        match config {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                let cfg: JsUiConfig = from_value(value)
                    .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
                Ok(UiConfig::from(cfg))
            }
            _ => Ok(UiConfig::default()),
        }
    }

    fn attach_all(document: &Document, config: &UiConfig) -> Result<(), JsValue> {
        tooltip::attach(document, config)?;
        dropdown::attach(document, config)?;
        Ok(())
    }

    /// Gắn tooltip và dropdown vào trang khi document sẵn sàng. Sau một lần gọi
    /// thành công, các lần gọi tiếp theo không làm gì.
    #[wasm_bindgen]
    pub fn init_interactions(config: Option<JsValue>) -> Result<(), JsValue> {
        let prepared = INITIALIZED.with(|init| {
            init.run(|| Ok::<_, JsValue>((parse_config(config)?, dom::document()?)))
        })?;
        let Some((config, document)) = prepared else {
            return Ok(());
        };

        if document.ready_state() != "loading" {
            return attach_all(&document, &config);
        }

        let target = document.clone();
        let on_ready = move |_: Event| {
            if let Err(err) = attach_all(&target, &config) {
                dom::report("Không khởi tạo được tương tác", &err);
            }
        };
        Listener::new(&document, "DOMContentLoaded", on_ready)?.forget();
        Ok(())
    }

    fn find_target(selector: &str) -> Result<Element, JsValue> {
        dom::document()?
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))
    }

    #[wasm_bindgen]
    pub fn mount_bar_chart(
        selector: &str,
        points: JsValue,
        config: Option<JsValue>,
    ) -> Result<(), JsValue> {
        let target = find_target(selector)?;
        let points: Vec<BarInput> = from_value(points)?;
        let chart = layout_bar_chart(&points, &ChartDimensions::default())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let config = parse_config(config)?;

        yew::Renderer::<BarChartView>::with_root_and_props(
            target,
            BarChartViewProps { chart, config },
        )
        .render();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn mount_dropdown(
        selector: &str,
        dropdown: JsValue,
        config: Option<JsValue>,
    ) -> Result<(), JsValue> {
        let target = find_target(selector)?;
        let dropdown: Dropdown = from_value(dropdown)?;
        let config = parse_config(config)?;

        yew::Renderer::<DropdownView>::with_root_and_props(
            target,
            DropdownViewProps { dropdown, config },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::{init_interactions, mount_bar_chart, mount_dropdown};

#[cfg(not(target_arch = "wasm32"))]
fn unsupported() -> wasm_bindgen::JsValue {
    wasm_bindgen::JsValue::from_str("pageview-ui chỉ hỗ trợ biên dịch target wasm32")
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_interactions(_: Option<wasm_bindgen::JsValue>) -> Result<(), wasm_bindgen::JsValue> {
    Err(unsupported())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_bar_chart(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(unsupported())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_dropdown(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: Option<wasm_bindgen::JsValue>,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(unsupported())
}
