#![cfg(target_arch = "wasm32")]

//! Các thao tác DOM lặp lại giữa controller và component.

use pageview_core::{Rect, Size, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("Không truy cập được document"))
}

/// Mọi element khớp `selector`, bỏ qua node không phải element.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_html(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

/// Element là đích của sự kiện; `None` khi đích là document hoặc text node.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Tổ tiên gần nhất (kể cả chính nó) khớp `selector`. Selector lỗi coi như không khớp.
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub fn is_inside(container: &Element, target: &Element) -> bool {
    container.contains(Some(target.as_ref()))
}

pub fn rect_of(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

pub fn size_of(element: &Element) -> Size {
    let rect = element.get_bounding_client_rect();
    Size {
        width: rect.width(),
        height: rect.height(),
    }
}

pub fn viewport(window: &Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or_default();
    let scroll_y = window.scroll_y()?;
    Ok(Viewport { width, scroll_y })
}

pub fn report(context: &str, err: &JsValue) {
    console::error_2(&JsValue::from_str(context), err);
}

pub fn warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}

/// Listener gắn vào một `EventTarget`, tự gỡ khi bị drop.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }

    /// Giữ listener suốt vòng đời trang.
    pub fn forget(mut self) {
        if let Some(closure) = self.closure.take() {
            closure.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref())
            {
                report("Không gỡ được listener", &err);
            }
        }
    }
}
