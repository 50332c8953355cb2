//! Nội dung và trạng thái của tooltip dùng chung cho mọi cột.

use serde::{Deserialize, Serialize};

use crate::geometry::TooltipPlacement;

/// Nội dung đọc từ `data-label` / `data-value` của một cột.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TooltipContent {
    pub label: Option<String>,
    pub value: Option<String>,
}

impl TooltipContent {
    pub fn from_attributes(label: Option<String>, value: Option<String>) -> Self {
        Self { label, value }
    }

    /// Nhãn hiển thị; thiếu thuộc tính thì trả về chuỗi rỗng.
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    /// Dòng giá trị, ví dụ `"42 views"`. Thiếu `data-value` thì để trống.
    pub fn value_text(&self, suffix: &str) -> String {
        match self.value.as_deref() {
            Some(value) if suffix.is_empty() => value.to_string(),
            Some(value) => format!("{value} {suffix}"),
            None => String::new(),
        }
    }
}

/// Mô hình headless của tooltip: chỉ có một tooltip, hiển thị hoặc ẩn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    visible: bool,
    content: TooltipContent,
    placement: TooltipPlacement,
}

impl TooltipState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer di chuyển trên một cột: thay nội dung và hiện tooltip.
    ///
    /// Tooltip phải hiển thị trước khi đo kích thước, vì vậy vị trí được cập
    /// nhật riêng bằng [`TooltipState::place`].
    pub fn show(&mut self, content: TooltipContent) {
        self.content = content;
        self.visible = true;
    }

    pub fn place(&mut self, placement: TooltipPlacement) {
        self.placement = placement;
    }

    /// Pointer rời cột hoặc click ra ngoài.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Click ở cấp document. Trả về `true` khi click này làm tooltip ẩn đi.
    pub fn handle_document_click(&mut self, on_bar: bool) -> bool {
        if on_bar || !self.visible {
            return false;
        }
        self.hide();
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> &TooltipContent {
        &self.content
    }

    pub fn placement(&self) -> TooltipPlacement {
        self.placement
    }

    /// Giá trị CSS `display` tương ứng.
    pub fn display(&self) -> &'static str {
        if self.visible {
            "flex"
        } else {
            "none"
        }
    }
}
