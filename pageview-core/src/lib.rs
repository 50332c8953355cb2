//! Logic lõi cho các tương tác trên dashboard pageview: tooltip của biểu đồ cột,
//! dropdown, bố cục biểu đồ, nhãn khoảng thời gian và bảng trang xem nhiều.
//!
//! Crate này không phụ thuộc vào DOM; lớp giao diện chỉ đọc thuộc tính từ DOM rồi
//! áp dụng các quyết định tính ở đây.

use serde::{Deserialize, Serialize};

pub mod chart;
pub mod daterange;
pub mod dropdown;
pub mod geometry;
pub mod pages;
pub mod tooltip;

pub use chart::{layout_bar_chart, BarChart, BarInput, ChartDimensions, ChartBar};
pub use daterange::{
    bucket_pageviews, date_range_options, interval_label, parse_timestamp, DateRange,
    DateRangeOption, PageviewBuckets,
};
pub use dropdown::{
    navbar, project_dropdown, resolve_click, ClickTarget, Dropdown, DropdownAction,
    DropdownOption, DropdownSet, Navbar, ProjectEntry,
};
pub use geometry::{place_tooltip, Rect, Size, TooltipPlacement, Viewport};
pub use pages::{
    page_views_table, parse_offset, top_pages, PageRow, PageSlice, PageView, PageViewsTable,
    Pagination, PAGE_LIMIT,
};
pub use tooltip::{TooltipContent, TooltipState};

/// Bộ selector CSS mà các controller dùng để tìm phần tử trên trang.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Selectors {
    pub tooltip: String,
    pub tooltip_label: String,
    pub tooltip_value: String,
    pub bar: String,
    pub dropdown_button: String,
    pub dropdown_container: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            tooltip: ".tooltip".to_string(),
            tooltip_label: ".tooltip > .label".to_string(),
            tooltip_value: ".tooltip > .value".to_string(),
            bar: ".bar".to_string(),
            dropdown_button: ".dropdown-button".to_string(),
            dropdown_container: ".dropdown-container".to_string(),
        }
    }
}

/// Cấu hình chung cho lớp tương tác.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    pub selectors: Selectors,
    /// Class đánh dấu dropdown đang mở.
    pub open_class: String,
    /// Khoảng cách (px) giữa đáy tooltip và đỉnh cột.
    pub tooltip_gap_px: f64,
    /// Hậu tố hiển thị sau giá trị, ví dụ "42 views".
    pub value_suffix: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            open_class: "open".to_string(),
            tooltip_gap_px: 5.0,
            value_suffix: "views".to_string(),
        }
    }
}

impl UiConfig {
    /// Selector của các dropdown đang mở, ví dụ `.dropdown-container.open`.
    pub fn open_dropdown_selector(&self) -> String {
        format!("{}.{}", self.selectors.dropdown_container, self.open_class)
    }
}

/// Lỗi chung của crate.
#[derive(Debug, thiserror::Error)]
pub enum PageviewError {
    #[error("Kích thước biểu đồ không hợp lệ: {0}")]
    InvalidDimensions(String),
    #[error("Khoảng thời gian không hỗ trợ: {0}")]
    UnknownDateRange(String),
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
}
