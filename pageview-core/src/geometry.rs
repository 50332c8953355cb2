//! Hình học cho việc đặt tooltip phía trên cột biểu đồ.

use serde::{Deserialize, Serialize};

/// Hình chữ nhật theo toạ độ viewport (giống `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Trạng thái cửa sổ tại thời điểm đo.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    /// `window.innerWidth`.
    pub width: f64,
    /// `window.scrollY`.
    #[serde(default)]
    pub scroll_y: f64,
}

/// Vị trí tooltip tính theo pixel của trang (giá trị cho `style.left` / `style.top`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

impl TooltipPlacement {
    pub fn left_css(&self) -> String {
        format!("{}px", self.left)
    }

    pub fn top_css(&self) -> String {
        format!("{}px", self.top)
    }
}

/// Đặt tooltip căn giữa phía trên cột, cách đỉnh cột `gap` pixel.
///
/// Nếu căn giữa làm tràn mép phải viewport thì căn phải theo cột, nếu tràn mép
/// trái thì căn trái theo cột. Kết quả cuối cùng luôn nằm trong
/// `[0, viewport.width - tooltip.width]` (hoặc 0 khi tooltip rộng hơn viewport).
pub fn place_tooltip(bar: &Rect, tooltip: Size, viewport: &Viewport, gap: f64) -> TooltipPlacement {
    let mut left = bar.center_x() - tooltip.width / 2.0;
    if left + tooltip.width > viewport.width {
        left = bar.right() - tooltip.width;
    } else if left < 0.0 {
        left = bar.left();
    }

    let max_left = (viewport.width - tooltip.width).max(0.0);
    let left = left.clamp(0.0, max_left);

    let top = bar.top() + viewport.scroll_y - tooltip.height - gap;

    TooltipPlacement { left, top }
}
