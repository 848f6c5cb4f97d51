// File: crates/trendline-core/tests/chart.rs
// Purpose: Frame composition order, decorator output and last-point reporting via a recording canvas.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{approx, example_series, series};
use trendline_core::canvas::StrokeCap;
use trendline_core::{
    DrawCommand, LineChart, Offset, Padding, PointerEvent, RecordingCanvas, SelectionCursor,
    Size, Theme, ThresholdLine,
};

const SIZE: Size = Size::new(300.0, 100.0);

fn chart() -> LineChart {
    let mut chart = LineChart::new(example_series(), Padding::default());
    chart.add_background(ThresholdLine::new(700));
    chart.add_foreground(SelectionCursor::new());
    chart
}

fn kinds(canvas: &RecordingCanvas) -> Vec<&'static str> {
    canvas
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::Line { .. } => "line",
            DrawCommand::Path { .. } => "path",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Text { .. } => "text",
        })
        .collect()
}

#[test]
fn threshold_draws_below_path_without_selection() {
    let mut chart = chart();
    let mut canvas = RecordingCanvas::new();
    assert!(chart.render(&mut canvas, SIZE, 0.0));
    assert_eq!(kinds(&canvas), vec!["line", "path", "circle", "circle", "circle", "circle"]);
}

#[test]
fn threshold_line_sits_at_value_fraction() {
    let mut chart = chart();
    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, SIZE, 0.0);
    let DrawCommand::Line { start, end, stroke } = &canvas.commands()[0] else {
        panic!("first command should be the threshold line");
    };
    // fraction_of(700) = 600 / 900 of the drawable height above the bottom.
    assert!(approx(SIZE.height - start.y, 100.0 * 600.0 / 900.0));
    assert_eq!(start.y, end.y);
    assert_eq!((start.x, end.x), (0.0, 300.0));
    assert!(stroke.dash.is_some());
    assert_eq!(stroke.cap, StrokeCap::Round);
}

#[test]
fn selection_cursor_draws_above_path() {
    let mut chart = chart();
    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, SIZE, 0.0);
    assert!(chart.handle_pointer(PointerEvent::Start(Offset::new(140.0, 50.0))));
    assert!(chart.needs_redraw());

    canvas.clear();
    chart.render(&mut canvas, SIZE, 0.0);
    assert!(!chart.needs_redraw());
    let k = kinds(&canvas);
    assert_eq!(&k[k.len() - 2..], &["rect", "line"]);
    let Some(DrawCommand::Line { start, end, .. }) = canvas.commands().last() else {
        panic!("cursor line expected last");
    };
    assert_eq!(start.x, 150.0);
    assert_eq!(end.x, 150.0);
    assert!(start.y > SIZE.height && end.y < 0.0);
}

#[test]
fn selection_thins_the_path() {
    let mut chart = chart().with_density(2.0);
    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, SIZE, 0.0);
    let width_of_path = |c: &RecordingCanvas| {
        c.commands()
            .iter()
            .find_map(|cmd| match cmd {
                DrawCommand::Path { stroke, .. } => Some(stroke.width),
                _ => None,
            })
            .unwrap()
    };
    assert!(approx(width_of_path(&canvas), 4.0));

    chart.handle_pointer(PointerEvent::Start(Offset::new(0.0, 0.0)));
    canvas.clear();
    chart.render(&mut canvas, SIZE, 0.0);
    assert!(approx(width_of_path(&canvas), 2.8));
    assert_eq!(chart.selection().unwrap().sample.value, 100);

    chart.handle_pointer(PointerEvent::Cancel);
    assert!(chart.selection().is_none());
}

#[test]
fn end_marker_grows_with_pulse() {
    let mut chart = LineChart::new(example_series(), Padding::default());
    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, SIZE, 1.0);
    let radii: Vec<f32> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect();
    assert_eq!(radii, vec![4.0, 2.0, 6.0, 2.5]);
}

#[test]
fn reports_last_point_each_frame() {
    let mut chart = chart();
    let seen = Rc::new(Cell::new(None));
    let sink = seen.clone();
    chart.on_last_point(move |p| sink.set(Some(p)));
    chart.render(&mut RecordingCanvas::new(), SIZE, 0.0);
    assert_eq!(seen.get(), Some(Offset::new(300.0, 0.0)));
}

#[test]
fn unready_surface_draws_nothing() {
    let mut chart = chart();
    let mut canvas = RecordingCanvas::new();
    assert!(!chart.render(&mut canvas, Size::new(0.0, 0.0), 0.0));
    assert!(canvas.commands().is_empty());
    assert!(!chart.handle_pointer(PointerEvent::Start(Offset::new(1.0, 1.0))));
}

#[test]
fn replacing_series_relayouts_and_moves_threshold() {
    let mut chart = chart();
    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, SIZE, 0.0);
    chart.set_series(series(&[0, 1400]));
    assert!(chart.needs_redraw());
    canvas.clear();
    chart.render(&mut canvas, SIZE, 0.0);
    assert_eq!(chart.processor().recompute_count(), 2);
    let DrawCommand::Line { start, .. } = &canvas.commands()[0] else {
        panic!("threshold line expected first");
    };
    assert!(approx(start.y, 50.0));
}

#[test]
fn replacing_series_drops_stale_selection() {
    let cleared = Rc::new(Cell::new(false));
    let sink = cleared.clone();
    let mut chart = LineChart::new(example_series(), Padding::default());
    chart.add_foreground(SelectionCursor::with_listener(move |sel| sink.set(sel.is_none())));
    chart.render(&mut RecordingCanvas::new(), SIZE, 0.0);
    chart.handle_pointer(PointerEvent::Start(Offset::new(300.0, 0.0)));
    assert_eq!(chart.selection().unwrap().sample.value, 1000);

    chart.set_series(series(&[3, 7]));
    assert!(chart.selection().is_none());
    assert!(cleared.get());

    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, SIZE, 0.0);
    assert!(!kinds(&canvas).contains(&"rect"));
}

#[test]
fn theme_colors_reach_the_canvas() {
    let theme = Theme::dark();
    let mut chart = chart().with_theme(theme);
    chart.render(&mut RecordingCanvas::new(), SIZE, 0.0);
    chart.handle_pointer(PointerEvent::Start(Offset::new(10.0, 10.0)));
    let mut canvas = RecordingCanvas::new();
    chart.render(&mut canvas, SIZE, 0.0);
    let scrim = canvas.commands().iter().find_map(|c| match c {
        DrawCommand::Rect { color, .. } => Some(*color),
        _ => None,
    });
    assert_eq!(scrim, Some(theme.scrim));
    let path_color = canvas.commands().iter().find_map(|c| match c {
        DrawCommand::Path { stroke, .. } => Some(stroke.color),
        _ => None,
    });
    assert_eq!(path_color, Some(theme.line_stroke));
}

#[test]
fn padding_change_relayouts_on_next_frame() {
    let mut chart = chart();
    chart.render(&mut RecordingCanvas::new(), SIZE, 0.0);
    assert_eq!(chart.processor().start(), Some(Offset::new(0.0, 100.0)));

    chart.set_padding(Padding::horizontal(20.0));
    assert!(chart.needs_redraw());
    chart.render(&mut RecordingCanvas::new(), SIZE, 0.0);
    assert_eq!(chart.processor().recompute_count(), 2);
    assert_eq!(chart.processor().start().map(|p| p.x), Some(20.0));
    assert_eq!(chart.processor().end().map(|p| p.x), Some(280.0));
}
