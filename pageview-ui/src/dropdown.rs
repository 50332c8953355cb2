#![cfg(target_arch = "wasm32")]

//! Đóng/mở dropdown bằng class trên `.dropdown-container`.

use std::rc::Rc;

use pageview_core::{resolve_click, ClickTarget, DropdownAction, UiConfig};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event};

use crate::dom::{self, Listener};

pub struct DropdownController {
    document: Document,
    /// Container của từng nút kích hoạt, theo thứ tự trong document.
    containers: Vec<Option<Element>>,
    container_selector: String,
    open_selector: String,
    open_class: String,
}

impl DropdownController {
    pub fn new(document: &Document, buttons: &[Element], config: &UiConfig) -> Self {
        let container_selector = config.selectors.dropdown_container.clone();
        let containers = buttons
            .iter()
            .map(|button| dom::closest(button, &container_selector))
            .collect();
        Self {
            document: document.clone(),
            containers,
            container_selector,
            open_selector: config.open_dropdown_selector(),
            open_class: config.open_class.clone(),
        }
    }

    /// Click vào nút thứ `index`: chỉ đảo dropdown của nút đó, không cho sự kiện
    /// lan tới document.
    pub fn on_trigger(&self, index: usize, event: &Event) -> Result<(), JsValue> {
        event.stop_propagation();
        self.apply(resolve_click(ClickTarget::Trigger(index)))
    }

    pub fn on_document_click(&self, event: &Event) -> Result<(), JsValue> {
        let inside = dom::event_element(event)
            .and_then(|target| dom::closest(&target, &self.container_selector))
            .is_some();
        let target = if inside {
            ClickTarget::InsideContainer
        } else {
            ClickTarget::Outside
        };
        self.apply(resolve_click(target))
    }

    fn apply(&self, action: DropdownAction) -> Result<(), JsValue> {
        match action {
            DropdownAction::Toggle(index) => {
                if let Some(Some(container)) = self.containers.get(index) {
                    container.class_list().toggle(&self.open_class)?;
                }
            }
            DropdownAction::Keep => {}
            DropdownAction::CloseAll => {
                for container in dom::query_all(&self.document, &self.open_selector)? {
                    container.class_list().remove_1(&self.open_class)?;
                }
            }
        }
        Ok(())
    }
}

/// Gắn handler cho mọi nút dropdown và một handler click ở cấp document.
pub fn attach(document: &Document, config: &UiConfig) -> Result<(), JsValue> {
    let buttons = dom::query_all(document, &config.selectors.dropdown_button)?;
    let controller = Rc::new(DropdownController::new(document, &buttons, config));

    for (index, button) in buttons.iter().enumerate() {
        let controller = controller.clone();
        let on_click = move |event: Event| {
            if let Err(err) = controller.on_trigger(index, &event) {
                dom::report("Không đổi được trạng thái dropdown", &err);
            }
        };
        Listener::new(button, "click", on_click)?.forget();
    }

    let on_document_click = move |event: Event| {
        if let Err(err) = controller.on_document_click(&event) {
            dom::report("Không đóng được dropdown", &err);
        }
    };
    Listener::new(document, "click", on_document_click)?.forget();

    Ok(())
}
