use std::fs;

use pageview_core::{layout_bar_chart, BarChart, BarInput, ChartDimensions, PageviewError};

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn weekly_chart_matches_golden() {
    let points = fs::read_to_string(fixture_path("weekly_points.json"))
        .expect("Không đọc được dữ liệu mẫu");
    let points: Vec<BarInput> = serde_json::from_str(&points).expect("Dữ liệu mẫu không hợp lệ");

    let chart = layout_bar_chart(&points, &ChartDimensions::default())
        .expect("Không dựng được biểu đồ");

    let expected = fs::read_to_string(fixture_path("weekly_chart.json"))
        .expect("Không đọc được golden chart");
    let expected: BarChart = serde_json::from_str(&expected).expect("Golden không hợp lệ");

    assert_eq!(chart, expected);
    assert_eq!(chart.total(), 70);
}

#[test]
fn empty_input_yields_no_bars() {
    let chart = layout_bar_chart(&[], &ChartDimensions::default()).unwrap();
    assert!(chart.bars.is_empty());
    assert_eq!(chart.width, 900.0);
    assert_eq!(chart.height, 200.0);
}

#[test]
fn all_zero_values_sit_on_baseline() {
    let points = vec![BarInput::new("a", 0), BarInput::new("b", 0)];
    let chart = layout_bar_chart(&points, &ChartDimensions::default()).unwrap();

    for bar in &chart.bars {
        assert_eq!(bar.y, 200.0);
        assert_eq!(bar.height, 20.0);
        assert!(bar.x.is_finite());
    }
}

#[test]
fn left_offset_shifts_every_bar() {
    let dimensions = ChartDimensions {
        left_offset: 100.0,
        ..ChartDimensions::default()
    };
    let points = vec![BarInput::new("a", 1), BarInput::new("b", 2)];
    let chart = layout_bar_chart(&points, &dimensions).unwrap();

    // slot 400, bar 200, gutter/2 = 100
    assert_eq!(chart.bars[0].x, 200.0);
    assert_eq!(chart.bars[1].x, 600.0);
    assert_eq!(chart.bars[0].width, 200.0);
}

#[test]
fn rejects_invalid_dimensions() {
    let cases = [
        ChartDimensions {
            width: 0.0,
            ..ChartDimensions::default()
        },
        ChartDimensions {
            height: f64::NAN,
            ..ChartDimensions::default()
        },
        ChartDimensions {
            top_offset: 200.0,
            ..ChartDimensions::default()
        },
    ];

    for dimensions in cases {
        let err = layout_bar_chart(&[BarInput::new("a", 1)], &dimensions).unwrap_err();
        assert!(matches!(err, PageviewError::InvalidDimensions(_)));
    }
}
