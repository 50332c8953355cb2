//! Bridge WASM <-> JavaScript trung lập framework cho các hàm tính toán của dashboard.

use chrono::{DateTime, Utc};
use pageview_core::{
    ChartDimensions, DateRange, PageView, PageviewError, ProjectEntry, Rect, Size, UiConfig,
    Viewport,
};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
pub struct JsChartDimensions {
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    top_offset: Option<f64>,
    #[serde(default)]
    left_offset: Option<f64>,
}

impl From<JsChartDimensions> for ChartDimensions {
    fn from(cfg: JsChartDimensions) -> Self {
        let mut base = ChartDimensions::default();
        if let Some(width) = cfg.width {
            base.width = width;
        }
        if let Some(height) = cfg.height {
            base.height = height;
        }
        if let Some(top_offset) = cfg.top_offset {
            base.top_offset = top_offset;
        }
        if let Some(left_offset) = cfg.left_offset {
            base.left_offset = left_offset;
        }
        base
    }
}

/// Lượt xem gửi từ JavaScript, dạng chuỗi RFC 3339.
#[derive(Deserialize)]
#[serde(transparent)]
pub struct JsTimestamps(Vec<DateTime<Utc>>);

impl JsTimestamps {
    pub fn into_inner(self) -> Vec<DateTime<Utc>> {
        self.0
    }
}

fn install_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{context}: {err}"))
}

#[wasm_bindgen]
pub fn layout_bar_chart(points: JsValue, dimensions: Option<JsValue>) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let points = from_value::<Vec<pageview_core::BarInput>>(points)
        .map_err(|err| js_error("Không đọc được dữ liệu biểu đồ", err))?;

    let dimensions = match dimensions {
        Some(js_dimensions) => {
            let cfg: JsChartDimensions = from_value(js_dimensions)
                .map_err(|err| js_error("Không đọc được kích thước", err))?;
            ChartDimensions::from(cfg)
        }
        None => ChartDimensions::default(),
    };

    let chart = pageview_core::layout_bar_chart(&points, &dimensions)
        .map_err(|err| JsValue::from_str(&format_pageview_error(err)))?;

    to_value(&chart).map_err(|err| js_error("Không serialize biểu đồ", err))
}

/// Gom lượt xem theo khoảng thời gian; `now` mặc định là thời điểm hiện tại.
#[wasm_bindgen]
pub fn bucket_pageviews(
    timestamps: JsValue,
    range: &str,
    now: Option<String>,
) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let timestamps: JsTimestamps =
        from_value(timestamps).map_err(|err| js_error("Không đọc được mốc thời gian", err))?;
    let range: DateRange = range
        .parse()
        .map_err(|err| JsValue::from_str(&format_pageview_error(err)))?;
    let now = parse_now(now)?;

    let buckets = pageview_core::bucket_pageviews(&timestamps.into_inner(), range, now);
    to_value(&buckets).map_err(|err| js_error("Không serialize kết quả", err))
}

fn parse_now(now: Option<String>) -> Result<DateTime<Utc>, JsValue> {
    match now {
        Some(value) => pageview_core::parse_timestamp(&value)
            .map_err(|err| JsValue::from_str(&format_pageview_error(err))),
        None => Ok(Utc::now()),
    }
}

/// Dữ liệu navbar: dropdown project và các lựa chọn khoảng thời gian.
#[wasm_bindgen]
pub fn navbar(
    projects: JsValue,
    selected_id: Option<String>,
    range: &str,
) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let projects: Vec<ProjectEntry> =
        from_value(projects).map_err(|err| js_error("Không đọc được danh sách project", err))?;
    let range = DateRange::parse_lenient(range);

    let navbar = pageview_core::navbar(&projects, selected_id.as_deref(), range);
    to_value(&navbar).map_err(|err| js_error("Không serialize navbar", err))
}

/// Bảng trang xem nhiều nhất; `offset` là giá trị thô từ query string.
#[wasm_bindgen]
pub fn page_views_table(
    views: JsValue,
    project_id: &str,
    range: &str,
    offset: Option<String>,
    now: Option<String>,
) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let views: Vec<PageView> =
        from_value(views).map_err(|err| js_error("Không đọc được lượt xem", err))?;
    let range = DateRange::parse_lenient(range);
    let offset = offset
        .as_deref()
        .map(pageview_core::parse_offset)
        .unwrap_or_default();
    let now = parse_now(now)?;

    let table = pageview_core::page_views_table(&views, project_id, range, now, offset);
    to_value(&table).map_err(|err| js_error("Không serialize bảng", err))
}

#[wasm_bindgen]
pub fn place_tooltip(
    bar: JsValue,
    tooltip: JsValue,
    viewport: JsValue,
    gap: Option<f64>,
) -> Result<JsValue, JsValue> {
    install_panic_hook();

    let bar: Rect = from_value(bar).map_err(|err| js_error("Không đọc được toạ độ cột", err))?;
    let tooltip: Size =
        from_value(tooltip).map_err(|err| js_error("Không đọc được kích thước tooltip", err))?;
    let viewport: Viewport =
        from_value(viewport).map_err(|err| js_error("Không đọc được viewport", err))?;
    let gap = gap.unwrap_or_else(|| UiConfig::default().tooltip_gap_px);

    let placement = pageview_core::place_tooltip(&bar, tooltip, &viewport, gap);
    to_value(&placement).map_err(|err| js_error("Không serialize vị trí", err))
}

fn format_pageview_error(err: PageviewError) -> String {
    format!("Pageview error: {err}")
}
