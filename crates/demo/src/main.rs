// File: crates/demo/src/main.rs
// Summary: Demo loads a (date, value) CSV or generates a waveform, simulates a drag, and renders PNGs.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trendline_core::labels::format_date;
use trendline_core::{
    theme, LineChart, Offset, Padding, PointerEvent, RenderOptions, Sample, SelectionCursor,
    Series, ThresholdLine,
};

/// Reference value for the dashed threshold line.
const THRESHOLD: i32 = 700;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Args: [csv_path|-] [theme]
    let mut args = std::env::args().skip(1);
    let source = args.next().filter(|a| a != "-");
    let theme = theme::find(&args.next().unwrap_or_else(|| "light".to_string()));

    let (samples, stem) = match source {
        Some(raw) => {
            let path = resolve_path(&raw)?;
            let samples = load_samples_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (samples, stem)
        }
        None => (generate_samples(60), "generated".to_string()),
    };
    info!(count = samples.len(), "loaded samples");

    let series = Series::new(samples).context("series needs at least two rows")?;
    info!(
        low = series.low(),
        high = series.high(),
        last = series.last(),
        from = %format_date(series.start_at(), "%Y/%m/%d"),
        to = %format_date(series.end_at(), "%Y/%m/%d"),
        "series range"
    );
    if THRESHOLD < series.low() || THRESHOLD > series.high() {
        warn!(threshold = THRESHOLD, "threshold lies outside the series range and will be off-surface");
    }

    let mut chart = LineChart::new(series, Padding::horizontal(8.0));
    chart.add_background(ThresholdLine::new(THRESHOLD));
    chart.add_foreground(SelectionCursor::with_listener(|sel| match sel {
        Some(s) => info!(value = s.sample.value, date = %format_date(s.sample.timestamp, "%Y/%m/%d"), x = s.offset.x, "selected"),
        None => info!("selection cleared"),
    }));
    chart.on_last_point(|p| tracing::debug!(x = p.x, y = p.y, "last point"));

    let mut opts = RenderOptions::default();
    opts.theme = theme;

    // 1) Idle chart: start/end dates, pulse at rest.
    let out_idle = out_name_with(&stem, theme.name, "idle");
    chart.render_to_png(&opts, &out_idle)?;
    info!(path = %out_idle.display(), "wrote");

    // 2) Scrub to the middle of the chart and render the selection.
    let middle = chart
        .processor()
        .points()
        .get(chart.series().len() / 2)
        .copied()
        .unwrap_or_default();
    chart.handle_pointer(PointerEvent::Start(Offset::new(middle.x - 3.0, 0.0)));
    chart.handle_pointer(PointerEvent::Move(Offset::new(middle.x + 1.0, 0.0)));
    opts.pulse = 1.0;
    let out_sel = out_name_with(&stem, theme.name, "selected");
    chart.render_to_png(&opts, &out_sel)?;
    info!(path = %out_sel.display(), "wrote");

    // 3) Release: selection clears, the next frame is back to idle.
    chart.handle_pointer(PointerEvent::End);
    if chart.needs_redraw() {
        opts.pulse = 0.5;
        let out_end = out_name_with(&stem, theme.name, "released");
        chart.render_to_png(&opts, &out_end)?;
        info!(path = %out_end.display(), "wrote");
    }

    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            info!(path = %alt.display(), "extension swapped between .csv/.cvs");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => { alt.set_extension("csv"); Some(alt) }
        "csv" => { alt.set_extension("cvs"); Some(alt) }
        _ => None,
    }
}

/// Produce output file name like target/out/trend_<stem>_<theme>_<suffix>.png
fn out_name_with(stem: &str, theme: &str, suffix: &str) -> PathBuf {
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    PathBuf::from("target/out").join(format!("trend_{short}_{theme}_{suffix}.png"))
}

/// Daily samples following a slow wave, in the 100..1000 band.
fn generate_samples(n: usize) -> Vec<Sample> {
    let t0 = Utc::now();
    (0..n)
        .map(|i| {
            let x = i as f64;
            let v = 550.0 + (x * 0.21).sin() * 300.0 + (x * 0.057).cos() * 120.0;
            Sample::new(v.round() as i32, t0 + Duration::days(i as i64 + 1))
        })
        .collect()
}

/// Load a CSV with a date/time column and a value column into samples.
fn load_samples_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_time = idx(&["date", "time", "timestamp", "datetime", "day"]);
    let i_value = idx(&["value", "close", "amount", "balance", "v"])
        .context("no value column (value/close/amount/balance)")?;

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        let ts = match i_time {
            Some(ix) => rec.get(ix).and_then(parse_timestamp),
            None => Some(Utc.timestamp_opt(0, 0).single().unwrap_or_default() + Duration::days(row as i64)),
        };
        match (value, ts) {
            (Some(v), Some(t)) => out.push(Sample::new(v.round() as i32, t)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without a parsable date/value were skipped");
    }
    Ok(out)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        // epoch ms vs epoch sec
        return if n > 10_i64.pow(12) {
            Utc.timestamp_millis_opt(n).single()
        } else {
            Utc.timestamp_opt(n, 0).single()
        };
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}
