use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use pageview_core::{
    bucket_pageviews, layout_bar_chart, navbar, page_views_table, parse_offset, parse_timestamp,
    place_tooltip, BarInput, ChartDimensions, DateRange, PageView, ProjectEntry, Rect, Size,
    UiConfig, Viewport,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pageview-cli",
    about = "Tính bố cục biểu đồ pageview, navbar, bảng trang và vị trí tooltip từ terminal."
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Tính toạ độ các cột từ file JSON `[{ "label": ..., "value": ... }]`.
    Chart {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long, default_value_t = 900.0)]
        width: f64,
        #[arg(long, default_value_t = 200.0)]
        height: f64,
        /// In kết quả dạng JSON.
        #[arg(long)]
        json: bool,
    },
    /// Gom các mốc RFC 3339 trong file JSON thành cột theo khoảng thời gian.
    Bucket {
        #[arg(short, long)]
        input: PathBuf,
        /// Một trong 24h, 1w, 1m, 3m, 1y.
        #[arg(short, long, default_value = "24h")]
        range: String,
        /// Mốc hiện tại (RFC 3339); mặc định là bây giờ.
        #[arg(long)]
        now: Option<String>,
    },
    /// Dựng navbar từ file JSON `[{ "project_id": ..., "name": ... }]`.
    Navbar {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        project_id: Option<String>,
        #[arg(short, long, default_value = "24h")]
        range: String,
    },
    /// Bảng trang xem nhiều nhất từ file JSON `[{ "path", "title", "received_at" }]`.
    Pages {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long)]
        project_id: String,
        #[arg(short, long, default_value = "24h")]
        range: String,
        /// Offset của trang, như `current_pageview_table_offset`.
        #[arg(long, default_value = "0")]
        offset: String,
        #[arg(long)]
        now: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Tính vị trí tooltip cho một cột.
    Tooltip {
        /// Toạ độ cột dạng `x,y,width,height`.
        #[arg(long)]
        bar: String,
        /// Kích thước tooltip dạng `width,height`.
        #[arg(long)]
        tooltip: String,
        #[arg(long)]
        viewport_width: f64,
        #[arg(long, default_value_t = 0.0)]
        scroll_y: f64,
        #[arg(long)]
        gap: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Chart {
            input,
            width,
            height,
            json,
        } => run_chart(&input, width, height, json),
        Command::Bucket { input, range, now } => run_bucket(&input, &range, now.as_deref()),
        Command::Navbar {
            input,
            project_id,
            range,
        } => run_navbar(&input, project_id.as_deref(), &range),
        Command::Pages {
            input,
            project_id,
            range,
            offset,
            now,
            json,
        } => run_pages(&input, &project_id, &range, &offset, now.as_deref(), json),
        Command::Tooltip {
            bar,
            tooltip,
            viewport_width,
            scroll_y,
            gap,
        } => run_tooltip(&bar, &tooltip, viewport_width, scroll_y, gap),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Không đọc được file {path:?}"))?;
    serde_json::from_str(&data).with_context(|| format!("File {path:?} không phải JSON hợp lệ"))
}

fn run_chart(input: &Path, width: f64, height: f64, json: bool) -> anyhow::Result<()> {
    let points: Vec<BarInput> = read_json(input)?;
    let dimensions = ChartDimensions {
        width,
        height,
        ..ChartDimensions::default()
    };
    tracing::debug!(points = points.len(), ?dimensions, "layout chart");

    let chart = layout_bar_chart(&points, &dimensions)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
        return Ok(());
    }

    println!("Chart {}x{}, total views: {}", chart.width, chart.height, chart.total());
    for bar in &chart.bars {
        println!(
            "{:<24} {:>8}  x={:<8.2} y={:<8.2} w={:.2}",
            bar.label, bar.value, bar.x, bar.y, bar.width
        );
    }
    Ok(())
}

fn run_bucket(input: &Path, range: &str, now: Option<&str>) -> anyhow::Result<()> {
    let timestamps: Vec<DateTime<Utc>> = read_json(input)?;
    let range: DateRange = range.parse()?;
    let now = match now {
        Some(value) => parse_timestamp(value)?,
        None => Utc::now(),
    };

    let buckets = bucket_pageviews(&timestamps, range, now);
    let dropped = timestamps.len() as u64 - buckets.total;
    if dropped > 0 {
        tracing::warn!(dropped, %range, "bỏ qua lượt xem nằm ngoài khoảng thời gian");
    }

    println!("{}", serde_json::to_string_pretty(&buckets.bars)?);
    Ok(())
}

fn run_navbar(input: &Path, project_id: Option<&str>, range: &str) -> anyhow::Result<()> {
    let projects: Vec<ProjectEntry> = read_json(input)?;
    if projects.is_empty() {
        tracing::warn!("danh sách project rỗng");
    }
    let navbar = navbar(&projects, project_id, DateRange::parse_lenient(range));

    println!("{}", serde_json::to_string_pretty(&navbar)?);
    Ok(())
}

fn run_pages(
    input: &Path,
    project_id: &str,
    range: &str,
    offset: &str,
    now: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let views: Vec<PageView> = read_json(input)?;
    let range = DateRange::parse_lenient(range);
    let now = match now {
        Some(value) => parse_timestamp(value)?,
        None => Utc::now(),
    };
    tracing::debug!(views = views.len(), %range, offset, "page views table");

    let table = page_views_table(&views, project_id, range, now, parse_offset(offset));

    if json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    for row in &table.records {
        println!("{:<40} {:<32} {:>8}", row.path, row.title, row.views);
    }
    let pagination = &table.pagination;
    println!(
        "{}-{} / {}",
        pagination.page_start_record, pagination.page_end_record, pagination.total_records
    );
    if let Some(link) = &pagination.prev_link {
        println!("prev: {link}");
    }
    if let Some(link) = &pagination.next_link {
        println!("next: {link}");
    }
    Ok(())
}

fn parse_numbers<const N: usize>(value: &str, what: &str) -> anyhow::Result<[f64; N]> {
    let numbers = value
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .with_context(|| format!("{what}: `{part}` không phải số"))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;
    match <[f64; N]>::try_from(numbers) {
        Ok(array) => Ok(array),
        Err(numbers) => bail!("{what}: cần {N} số, nhận {}", numbers.len()),
    }
}

fn run_tooltip(
    bar: &str,
    tooltip: &str,
    viewport_width: f64,
    scroll_y: f64,
    gap: Option<f64>,
) -> anyhow::Result<()> {
    let [x, y, width, height] = parse_numbers::<4>(bar, "--bar")?;
    let [tooltip_width, tooltip_height] = parse_numbers::<2>(tooltip, "--tooltip")?;

    let placement = place_tooltip(
        &Rect::new(x, y, width, height),
        Size {
            width: tooltip_width,
            height: tooltip_height,
        },
        &Viewport {
            width: viewport_width,
            scroll_y,
        },
        gap.unwrap_or_else(|| UiConfig::default().tooltip_gap_px),
    );

    println!("left: {}\ntop: {}", placement.left_css(), placement.top_css());
    Ok(())
}
