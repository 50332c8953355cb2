//! Bố cục SVG cho biểu đồ cột pageview.
//!
//! Hệ toạ độ SVG: gốc ở góc trên bên trái, trục y hướng xuống.

use serde::{Deserialize, Serialize};

use crate::PageviewError;

/// Một điểm dữ liệu đầu vào (nhãn khoảng thời gian + số lượt xem).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BarInput {
    pub label: String,
    pub value: u64,
}

impl BarInput {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Kích thước khung biểu đồ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub top_offset: f64,
    pub left_offset: f64,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 200.0,
            top_offset: 20.0,
            left_offset: 0.0,
        }
    }
}

impl ChartDimensions {
    fn validate(&self) -> Result<(), PageviewError> {
        let all_finite = [self.width, self.height, self.top_offset, self.left_offset]
            .iter()
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(PageviewError::InvalidDimensions(
                "giá trị phải hữu hạn".to_string(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(PageviewError::InvalidDimensions(format!(
                "{}x{} phải dương",
                self.width, self.height
            )));
        }
        if self.top_offset < 0.0 || self.top_offset >= self.height {
            return Err(PageviewError::InvalidDimensions(format!(
                "top_offset {} nằm ngoài chiều cao {}",
                self.top_offset, self.height
            )));
        }
        if self.left_offset < 0.0 || self.left_offset >= self.width {
            return Err(PageviewError::InvalidDimensions(format!(
                "left_offset {} nằm ngoài chiều rộng {}",
                self.left_offset, self.width
            )));
        }
        Ok(())
    }
}

/// Một cột đã tính toạ độ, mang theo nhãn và giá trị cho tooltip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub max_height: f64,
    pub top_offset: f64,
    pub value: u64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarChart {
    pub width: f64,
    pub height: f64,
    pub bars: Vec<ChartBar>,
}

impl BarChart {
    pub fn total(&self) -> u64 {
        self.bars.iter().map(|bar| bar.value).sum()
    }
}

/// Tính toạ độ cho từng cột.
///
/// Mỗi cột chiếm một nửa ô của nó, nửa còn lại chia đều làm khoảng trống hai bên.
pub fn layout_bar_chart(
    input: &[BarInput],
    dimensions: &ChartDimensions,
) -> Result<BarChart, PageviewError> {
    dimensions.validate()?;

    let mut chart = BarChart {
        width: dimensions.width,
        height: dimensions.height,
        bars: Vec::with_capacity(input.len()),
    };
    if input.is_empty() {
        return Ok(chart);
    }

    let available_height = dimensions.height - dimensions.top_offset;
    let slot_width = (dimensions.width - dimensions.left_offset) / input.len() as f64;
    let bar_width = slot_width / 2.0;
    let gutter = bar_width;

    let max_value = input.iter().map(|point| point.value).max().unwrap_or(0);
    let scale = if max_value == 0 {
        0.0
    } else {
        available_height / max_value as f64
    };

    for (index, point) in input.iter().enumerate() {
        let scaled = point.value as f64 * scale;
        chart.bars.push(ChartBar {
            x: dimensions.left_offset + index as f64 * slot_width + gutter / 2.0,
            y: dimensions.top_offset + available_height - scaled,
            width: bar_width,
            height: dimensions.top_offset + scaled,
            max_height: dimensions.top_offset + available_height,
            top_offset: dimensions.top_offset,
            value: point.value,
            label: point.label.clone(),
        });
    }

    Ok(chart)
}
