//! Khoảng thời gian của dashboard và nhãn cho từng cột biểu đồ.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::BarInput;
use crate::PageviewError;

/// Khoảng thời gian người dùng chọn trên navbar.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DateRange {
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "1w")]
    Week,
    #[serde(rename = "1m")]
    Month,
    #[serde(rename = "3m")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl DateRange {
    /// Thứ tự hiển thị trên navbar.
    pub const ALL: [DateRange; 5] = [
        DateRange::Day,
        DateRange::Week,
        DateRange::Month,
        DateRange::Quarter,
        DateRange::Year,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DateRange::Day => "24h",
            DateRange::Week => "1w",
            DateRange::Month => "1m",
            DateRange::Quarter => "3m",
            DateRange::Year => "1y",
        }
    }

    /// Giá trị lạ (ví dụ query string sai) quay về `24h`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Mốc bắt đầu của cửa sổ dữ liệu tính từ `now`.
    pub fn window_start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let months = match self {
            DateRange::Day => return now - Duration::hours(24),
            DateRange::Week => return now - Duration::days(6),
            DateRange::Month => 1,
            DateRange::Quarter => 3,
            DateRange::Year => 12,
        };
        now.checked_sub_months(Months::new(months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Khoá nhóm: đầu giờ, đầu ngày hoặc đầu tháng.
    fn bucket_start(self, at: DateTime<Utc>) -> NaiveDateTime {
        let naive = at.naive_utc();
        let date = naive.date();
        match self {
            DateRange::Day => date
                .and_hms_opt(naive.hour(), 0, 0)
                .unwrap_or(naive),
            DateRange::Week | DateRange::Month | DateRange::Quarter => {
                date.and_hms_opt(0, 0, 0).unwrap_or(naive)
            }
            DateRange::Year => date
                .with_day(1)
                .and_then(|first| first.and_hms_opt(0, 0, 0))
                .unwrap_or(naive),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = PageviewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DateRange::ALL
            .into_iter()
            .find(|range| range.as_str() == value)
            .ok_or_else(|| PageviewError::UnknownDateRange(value.to_string()))
    }
}

/// Nhãn của khoảng thời gian chứa `at`.
///
/// - `24h`: `"05 Mar, 03 - 04 PM"` (nửa đêm là `"12 - 01 AM"`, trưa là `"12 - 01 PM"`)
/// - `1w`, `1m`, `3m`: `"05 Mar"`
/// - `1y`: `"2024 Mar"`
pub fn interval_label(range: DateRange, at: DateTime<Utc>) -> String {
    match range {
        DateRange::Day => format!("{}, {}", at.format("%d %b"), hour_span(at.hour())),
        DateRange::Week | DateRange::Month | DateRange::Quarter => at.format("%d %b").to_string(),
        DateRange::Year => at.format("%Y %b").to_string(),
    }
}

fn hour_span(hour: u32) -> String {
    match hour {
        0 => "12 - 01 AM".to_string(),
        12 => "12 - 01 PM".to_string(),
        _ => {
            let meridiem = match hour {
                11 => "PM",
                23 => "AM",
                h if h < 12 => "AM",
                _ => "PM",
            };
            format!(
                "{:02} - {:02} {meridiem}",
                twelve_hour(hour),
                twelve_hour(hour + 1)
            )
        }
    }
}

fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Đọc mốc thời gian RFC 3339 (ví dụ tham số `now`) và quy về UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, PageviewError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|at| at.with_timezone(&Utc))
        .map_err(|err| PageviewError::Parse(format!("mốc `{value}`: {err}")))
}

/// Kết quả gom nhóm lượt xem theo khoảng thời gian.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageviewBuckets {
    pub bars: Vec<BarInput>,
    pub total: u64,
}

/// Gom các mốc thời gian lượt xem thành cột, theo thứ tự thời gian.
///
/// Chỉ tính các mốc nằm trong `[range.window_start(now), now]`.
pub fn bucket_pageviews(
    timestamps: &[DateTime<Utc>],
    range: DateRange,
    now: DateTime<Utc>,
) -> PageviewBuckets {
    let start = range.window_start(now);
    let mut buckets: BTreeMap<NaiveDateTime, u64> = BTreeMap::new();

    for at in timestamps.iter().filter(|at| **at >= start && **at <= now) {
        *buckets.entry(range.bucket_start(*at)).or_default() += 1;
    }

    let bars: Vec<BarInput> = buckets
        .into_iter()
        .map(|(bucket, count)| BarInput::new(interval_label(range, bucket.and_utc()), count))
        .collect();
    let total = bars.iter().map(|bar| bar.value).sum();

    PageviewBuckets { bars, total }
}

/// Một lựa chọn khoảng thời gian trên navbar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRangeOption {
    pub range: DateRange,
    pub link: String,
    pub is_selected: bool,
}

pub fn date_range_options(project_id: &str, selected: DateRange) -> Vec<DateRangeOption> {
    DateRange::ALL
        .into_iter()
        .map(|range| DateRangeOption {
            range,
            link: format!("/?project_id={project_id}&daterange={range}"),
            is_selected: range == selected,
        })
        .collect()
}
