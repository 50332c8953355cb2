//! Bảng các trang được xem nhiều nhất, có phân trang.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::daterange::DateRange;

/// Số dòng mỗi trang của bảng.
pub const PAGE_LIMIT: usize = 10;

/// Một lượt xem thô.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageView {
    pub path: String,
    #[serde(default)]
    pub title: String,
    pub received_at: DateTime<Utc>,
}

/// Một dòng của bảng: một path cùng số lượt xem trong khoảng thời gian.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRow {
    pub title: String,
    pub path: String,
    pub views: u64,
}

/// Một trang kết quả và tổng số path khác nhau trước khi cắt trang.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageSlice {
    pub rows: Vec<PageRow>,
    pub total_rows: usize,
}

/// Gom lượt xem theo path, sắp theo số lượt giảm dần rồi lấy `limit` dòng từ
/// vị trí `offset`.
///
/// Chỉ tính lượt xem nằm trong cửa sổ của `range`. Path bằng lượt xem được xếp
/// theo thứ tự chữ cái; tiêu đề lấy từ lượt xem mới nhất của path đó.
pub fn top_pages(
    views: &[PageView],
    range: DateRange,
    now: DateTime<Utc>,
    limit: usize,
    offset: usize,
) -> PageSlice {
    let start = range.window_start(now);
    let mut grouped: HashMap<&str, (u64, &PageView)> = HashMap::new();

    for view in views
        .iter()
        .filter(|view| view.received_at >= start && view.received_at <= now)
    {
        let entry = grouped.entry(view.path.as_str()).or_insert((0, view));
        entry.0 += 1;
        if view.received_at > entry.1.received_at {
            entry.1 = view;
        }
    }

    let mut rows: Vec<PageRow> = grouped
        .into_iter()
        .map(|(path, (views, latest))| PageRow {
            title: latest.title.clone(),
            path: path.to_string(),
            views,
        })
        .collect();
    rows.sort_by(|a, b| b.views.cmp(&a.views).then_with(|| a.path.cmp(&b.path)));

    let total_rows = rows.len();
    let rows = rows.into_iter().skip(offset).take(limit).collect();
    PageSlice { rows, total_rows }
}

/// Thanh phân trang dưới bảng. Số thứ tự dòng đếm từ 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    pub page_start_record: usize,
    pub page_end_record: usize,
    pub total_records: usize,
    pub prev_link: Option<String>,
    pub next_link: Option<String>,
}

/// Bảng pageview sẵn sàng để render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageViewsTable {
    pub records: Vec<PageRow>,
    pub should_show_pagination: bool,
    pub pagination: Pagination,
}

/// Offset lấy từ query string; giá trị không đọc được coi như `0`.
pub fn parse_offset(value: &str) -> usize {
    value.trim().parse().unwrap_or(0)
}

fn table_link(project_id: &str, range: DateRange, offset: usize) -> String {
    format!("/?project_id={project_id}&daterange={range}&current_pageview_table_offset={offset}")
}

/// Dựng bảng pageview cho project và khoảng thời gian, trang bắt đầu ở `offset`.
pub fn page_views_table(
    views: &[PageView],
    project_id: &str,
    range: DateRange,
    now: DateTime<Utc>,
    offset: usize,
) -> PageViewsTable {
    let slice = top_pages(views, range, now, PAGE_LIMIT, offset);
    let mut table = PageViewsTable {
        pagination: Pagination {
            page_start_record: offset + 1,
            ..Pagination::default()
        },
        ..PageViewsTable::default()
    };

    if slice.rows.is_empty() {
        return table;
    }

    table.pagination.total_records = slice.total_rows;
    table.pagination.page_end_record = offset + slice.rows.len();
    table.should_show_pagination = slice.total_rows > PAGE_LIMIT;
    table.records = slice.rows;

    if table.should_show_pagination && offset != 0 {
        let prev = offset.saturating_sub(PAGE_LIMIT);
        table.pagination.prev_link = Some(table_link(project_id, range, prev));
    }
    if table.should_show_pagination && offset + PAGE_LIMIT < slice.total_rows {
        let next = offset + PAGE_LIMIT;
        table.pagination.next_link = Some(table_link(project_id, range, next));
    }

    table
}
