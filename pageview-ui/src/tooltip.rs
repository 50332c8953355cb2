#![cfg(target_arch = "wasm32")]

//! Tooltip dùng chung cho các cột biểu đồ.

use std::cell::RefCell;
use std::rc::Rc;

use pageview_core::{place_tooltip, TooltipContent, TooltipState, UiConfig};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::dom::{self, Listener};

pub struct TooltipController {
    root: HtmlElement,
    label: Option<Element>,
    value: Option<Element>,
    state: RefCell<TooltipState>,
    gap: f64,
    suffix: String,
}

impl TooltipController {
    pub fn new(
        root: HtmlElement,
        label: Option<Element>,
        value: Option<Element>,
        config: &UiConfig,
    ) -> Self {
        Self {
            root,
            label,
            value,
            state: RefCell::new(TooltipState::new()),
            gap: config.tooltip_gap_px,
            suffix: config.value_suffix.clone(),
        }
    }

    /// Tìm tooltip theo selector cấu hình; `None` khi trang không có tooltip.
    pub fn find(document: &Document, config: &UiConfig) -> Result<Option<Self>, JsValue> {
        let selectors = &config.selectors;
        let Some(root) = dom::query_html(document, &selectors.tooltip)? else {
            return Ok(None);
        };
        let label = document.query_selector(&selectors.tooltip_label)?;
        let value = document.query_selector(&selectors.tooltip_value)?;
        Ok(Some(Self::new(root, label, value, config)))
    }

    /// Điền nội dung từ `data-label` / `data-value` của cột và đặt tooltip phía trên nó.
    pub fn hover(&self, bar: &Element) -> Result<(), JsValue> {
        let content = TooltipContent::from_attributes(
            bar.get_attribute("data-label"),
            bar.get_attribute("data-value"),
        );

        if let Some(label) = &self.label {
            label.set_text_content(Some(content.label_text()));
        }
        if let Some(value) = &self.value {
            value.set_text_content(Some(&content.value_text(&self.suffix)));
        }

        let mut state = self.state.borrow_mut();
        state.show(content);
        self.root.style().set_property("display", state.display())?;

        let window = dom::window()?;
        let placement = place_tooltip(
            &dom::rect_of(bar),
            dom::size_of(&self.root),
            &dom::viewport(&window)?,
            self.gap,
        );
        state.place(placement);

        let style = self.root.style();
        style.set_property("left", &placement.left_css())?;
        style.set_property("top", &placement.top_css())?;
        Ok(())
    }

    pub fn hide(&self) -> Result<(), JsValue> {
        let mut state = self.state.borrow_mut();
        state.hide();
        self.root.style().set_property("display", state.display())
    }

    /// Click ở cấp document; chỉ chạm vào DOM khi tooltip thực sự cần ẩn.
    pub fn on_document_click(&self, on_bar: bool) -> Result<(), JsValue> {
        let mut state = self.state.borrow_mut();
        if state.handle_document_click(on_bar) {
            self.root.style().set_property("display", state.display())?;
        }
        Ok(())
    }
}

/// Gắn tooltip vào mọi cột trên trang tĩnh.
///
/// Click ở ngoài các cột cũng ẩn tooltip, vì thiết bị cảm ứng không phát `mouseleave`.
pub fn attach(document: &Document, config: &UiConfig) -> Result<(), JsValue> {
    let bars = dom::query_all(document, &config.selectors.bar)?;
    if bars.is_empty() {
        return Ok(());
    }

    let Some(controller) = TooltipController::find(document, config)? else {
        dom::warn("Trang có biểu đồ nhưng không có tooltip");
        return Ok(());
    };
    let controller = Rc::new(controller);

    for bar in bars {
        let on_move = {
            let controller = controller.clone();
            let bar = bar.clone();
            move |_: Event| {
                if let Err(err) = controller.hover(&bar) {
                    dom::report("Không hiển thị được tooltip", &err);
                }
            }
        };
        Listener::new(&bar, "mousemove", on_move)?.forget();

        let on_leave = {
            let controller = controller.clone();
            move |_: Event| {
                if let Err(err) = controller.hide() {
                    dom::report("Không ẩn được tooltip", &err);
                }
            }
        };
        Listener::new(&bar, "mouseleave", on_leave)?.forget();
    }

    let bar_selector = config.selectors.bar.clone();
    let on_click = move |event: Event| {
        let on_bar = dom::event_element(&event)
            .and_then(|target| dom::closest(&target, &bar_selector))
            .is_some();
        if let Err(err) = controller.on_document_click(on_bar) {
            dom::report("Không ẩn được tooltip", &err);
        }
    };
    Listener::new(document, "click", on_click)?.forget();

    Ok(())
}
