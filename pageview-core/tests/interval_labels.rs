use chrono::{DateTime, TimeZone, Utc};
use pageview_core::{
    bucket_pageviews, date_range_options, interval_label, parse_timestamp, BarInput, DateRange,
    PageviewError,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("Mốc thời gian không hợp lệ")
}

#[test]
fn hourly_labels_use_twelve_hour_spans() {
    let cases = [
        (0, "05 Mar, 12 - 01 AM"),
        (9, "05 Mar, 09 - 10 AM"),
        (11, "05 Mar, 11 - 12 PM"),
        (12, "05 Mar, 12 - 01 PM"),
        (13, "05 Mar, 01 - 02 PM"),
        (15, "05 Mar, 03 - 04 PM"),
        (23, "05 Mar, 11 - 12 AM"),
    ];

    for (hour, expected) in cases {
        assert_eq!(interval_label(DateRange::Day, at(2024, 3, 5, hour, 20)), expected);
    }
}

#[test]
fn daily_and_monthly_labels() {
    let moment = at(2024, 3, 5, 15, 20);
    assert_eq!(interval_label(DateRange::Week, moment), "05 Mar");
    assert_eq!(interval_label(DateRange::Quarter, moment), "05 Mar");
    assert_eq!(interval_label(DateRange::Year, moment), "2024 Mar");
}

#[test]
fn parses_known_ranges_and_falls_back() {
    assert_eq!("3m".parse::<DateRange>().unwrap(), DateRange::Quarter);
    assert!(matches!(
        "2d".parse::<DateRange>(),
        Err(PageviewError::UnknownDateRange(_))
    ));
    assert_eq!(DateRange::parse_lenient("2d"), DateRange::Day);
    assert_eq!(DateRange::parse_lenient("1y"), DateRange::Year);
    assert_eq!(DateRange::Month.to_string(), "1m");
}

#[test]
fn month_window_clamps_to_end_of_month() {
    let start = DateRange::Month.window_start(at(2024, 3, 31, 0, 0));
    assert_eq!(start, at(2024, 2, 29, 0, 0));
}

#[test]
fn weekly_buckets_drop_out_of_window_views() {
    let now = at(2024, 3, 5, 12, 0);
    let timestamps = vec![
        at(2024, 3, 4, 9, 0),
        at(2024, 3, 1, 18, 0),
        at(2024, 3, 1, 10, 0),
        at(2024, 2, 20, 10, 0),
        at(2024, 3, 6, 10, 0),
    ];

    let buckets = bucket_pageviews(&timestamps, DateRange::Week, now);

    assert_eq!(
        buckets.bars,
        vec![BarInput::new("01 Mar", 2), BarInput::new("04 Mar", 1)]
    );
    assert_eq!(buckets.total, 3);
}

#[test]
fn hourly_buckets_cover_last_day() {
    let now = at(2024, 3, 5, 12, 0);
    let timestamps = vec![
        at(2024, 3, 5, 0, 15),
        at(2024, 3, 5, 0, 45),
        at(2024, 3, 5, 11, 59),
        at(2024, 3, 4, 11, 0),
    ];

    let buckets = bucket_pageviews(&timestamps, DateRange::Day, now);

    assert_eq!(
        buckets.bars,
        vec![
            BarInput::new("05 Mar, 12 - 01 AM", 2),
            BarInput::new("05 Mar, 11 - 12 PM", 1),
        ]
    );
}

#[test]
fn yearly_buckets_group_by_month() {
    let now = at(2024, 3, 5, 12, 0);
    let timestamps = vec![
        at(2023, 6, 10, 8, 0),
        at(2024, 1, 1, 0, 0),
        at(2023, 6, 20, 8, 0),
    ];

    let buckets = bucket_pageviews(&timestamps, DateRange::Year, now);

    assert_eq!(
        buckets.bars,
        vec![BarInput::new("2023 Jun", 2), BarInput::new("2024 Jan", 1)]
    );
    assert_eq!(buckets.total, 3);
}

#[test]
fn date_range_options_mark_selection() {
    let options = date_range_options("p1", DateRange::Quarter);

    assert_eq!(options.len(), 5);
    assert_eq!(options[0].link, "/?project_id=p1&daterange=24h");
    let selected: Vec<DateRange> = options
        .iter()
        .filter(|option| option.is_selected)
        .map(|option| option.range)
        .collect();
    assert_eq!(selected, vec![DateRange::Quarter]);
}

#[test]
fn parses_rfc3339_timestamps_into_utc() {
    assert_eq!(
        parse_timestamp("2024-03-05T12:30:00+02:00").unwrap(),
        at(2024, 3, 5, 10, 30)
    );
    assert!(matches!(
        parse_timestamp("hôm qua"),
        Err(PageviewError::Parse(_))
    ));
}
