use chrono::{DateTime, Duration, TimeZone, Utc};
use pageview_core::{
    page_views_table, parse_offset, top_pages, DateRange, PageRow, PageView, PAGE_LIMIT,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0)
        .single()
        .expect("Mốc thời gian không hợp lệ")
}

fn view(path: &str, title: &str, hours_ago: i64) -> PageView {
    PageView {
        path: path.to_string(),
        title: title.to_string(),
        received_at: now() - Duration::hours(hours_ago),
    }
}

/// `count` path khác nhau, path thứ `i` có `count - i` lượt xem.
fn many_paths(count: usize) -> Vec<PageView> {
    (0..count)
        .flat_map(|i| {
            let path = format!("/post-{i:02}");
            (0..count - i).map(move |_| view(&path, "Post", 1))
        })
        .collect()
}

#[test]
fn groups_by_path_and_orders_by_views() {
    let views = vec![
        view("/about", "About", 2),
        view("/", "Home", 1),
        view("/", "Home", 3),
        view("/blog", "Blog", 4),
        view("/", "Home", 30),
    ];

    let slice = top_pages(&views, DateRange::Day, now(), PAGE_LIMIT, 0);

    assert_eq!(slice.total_rows, 3);
    assert_eq!(
        slice.rows,
        vec![
            PageRow {
                title: "Home".to_string(),
                path: "/".to_string(),
                views: 2,
            },
            PageRow {
                title: "About".to_string(),
                path: "/about".to_string(),
                views: 1,
            },
            PageRow {
                title: "Blog".to_string(),
                path: "/blog".to_string(),
                views: 1,
            },
        ]
    );
}

#[test]
fn title_comes_from_latest_view() {
    let views = vec![view("/", "Cũ", 5), view("/", "Mới", 1), view("/", "Giữa", 3)];

    let slice = top_pages(&views, DateRange::Day, now(), PAGE_LIMIT, 0);

    assert_eq!(slice.rows[0].title, "Mới");
    assert_eq!(slice.rows[0].views, 3);
}

#[test]
fn offset_and_limit_cut_one_page() {
    let views = many_paths(15);

    let slice = top_pages(&views, DateRange::Week, now(), 4, 8);

    assert_eq!(slice.total_rows, 15);
    let paths: Vec<&str> = slice.rows.iter().map(|row| row.path.as_str()).collect();
    assert_eq!(paths, vec!["/post-08", "/post-09", "/post-10", "/post-11"]);

    let past_end = top_pages(&views, DateRange::Week, now(), 4, 40);
    assert!(past_end.rows.is_empty());
    assert_eq!(past_end.total_rows, 15);
}

#[test]
fn single_page_hides_pagination() {
    let views = many_paths(3);

    let table = page_views_table(&views, "p1", DateRange::Day, now(), 0);

    assert_eq!(table.records.len(), 3);
    assert!(!table.should_show_pagination);
    assert_eq!(table.pagination.page_start_record, 1);
    assert_eq!(table.pagination.page_end_record, 3);
    assert_eq!(table.pagination.total_records, 3);
    assert_eq!(table.pagination.prev_link, None);
    assert_eq!(table.pagination.next_link, None);
}

#[test]
fn middle_page_links_both_ways() {
    let views = many_paths(25);

    let table = page_views_table(&views, "p1", DateRange::Month, now(), 10);

    assert!(table.should_show_pagination);
    assert_eq!(table.pagination.page_start_record, 11);
    assert_eq!(table.pagination.page_end_record, 20);
    assert_eq!(table.pagination.total_records, 25);
    assert_eq!(
        table.pagination.prev_link.as_deref(),
        Some("/?project_id=p1&daterange=1m&current_pageview_table_offset=0")
    );
    assert_eq!(
        table.pagination.next_link.as_deref(),
        Some("/?project_id=p1&daterange=1m&current_pageview_table_offset=20")
    );
}

#[test]
fn first_and_last_pages_have_one_link() {
    let views = many_paths(12);

    let first = page_views_table(&views, "p1", DateRange::Day, now(), 0);
    assert_eq!(first.pagination.prev_link, None);
    assert!(first.pagination.next_link.is_some());

    let last = page_views_table(&views, "p1", DateRange::Day, now(), 10);
    assert_eq!(last.records.len(), 2);
    assert_eq!(last.pagination.page_end_record, 12);
    assert!(last.pagination.prev_link.is_some());
    assert_eq!(last.pagination.next_link, None);
}

#[test]
fn empty_window_keeps_start_record() {
    let views = vec![view("/", "Home", 48)];

    let table = page_views_table(&views, "p1", DateRange::Day, now(), 20);

    assert!(table.records.is_empty());
    assert!(!table.should_show_pagination);
    assert_eq!(table.pagination.page_start_record, 21);
    assert_eq!(table.pagination.page_end_record, 0);
    assert_eq!(table.pagination.total_records, 0);
}

#[test]
fn unreadable_offset_falls_back_to_zero() {
    assert_eq!(parse_offset("20"), 20);
    assert_eq!(parse_offset(""), 0);
    assert_eq!(parse_offset("-10"), 0);
    assert_eq!(parse_offset("mười"), 0);
}
