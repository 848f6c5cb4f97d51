// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: renders the chart via RGBA blit (CPU) with winit + softbuffer; mouse drag scrubs the selection.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use std::num::NonZeroU32;
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use trendline_core::labels::format_date;
use trendline_core::render::FigureLayout;
use trendline_core::{
    pulse_phase, theme, LineChart, Offset, Padding, PointerEvent, RenderOptions, Sample,
    SelectionCursor, Series, ThresholdLine,
};
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Half-period of the endpoint pulse.
const PULSE_PERIOD: std::time::Duration = std::time::Duration::from_millis(500);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Arg: theme name
    let theme = theme::find(&std::env::args().nth(1).unwrap_or_else(|| "light".to_string()));
    let mut seed = 0u64;
    let mut chart = build_chart(seed)?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Trendline - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(720.0, 330.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let started = Instant::now();
    let mut size = window.inner_size();
    let mut density = window.scale_factor() as f32;
    let mut cursor: Option<(f64, f64)> = None;
    let mut pressed = false;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Poll;
        let opts = RenderOptions {
            width: size.width.max(1) as i32,
            height: size.height.max(1) as i32,
            density,
            theme,
            pulse: pulse_phase(started.elapsed(), PULSE_PERIOD),
            ..RenderOptions::default()
        };
        // Pointer positions are window pixels; the chart lives inside the figure layout.
        let to_chart = |(x, y): (f64, f64)| {
            let area = FigureLayout::compute(&opts).chart;
            Offset::new(x as f32 - area.left, y as f32 - area.top)
        };

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => size = new_size,
                WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                    density = scale_factor as f32;
                    size = *new_inner_size;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    if pressed {
                        chart.handle_pointer(PointerEvent::Move(to_chart((position.x, position.y))));
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if pressed {
                        pressed = false;
                        chart.handle_pointer(PointerEvent::Cancel);
                    }
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => match state {
                    ElementState::Pressed => {
                        pressed = true;
                        if let Some(pos) = cursor {
                            chart.handle_pointer(PointerEvent::Start(to_chart(pos)));
                        }
                    }
                    ElementState::Released => {
                        pressed = false;
                        chart.handle_pointer(PointerEvent::End);
                    }
                },
                WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                    // Any key: reset data, like the original "Reset Data" button.
                    seed += 1;
                    match build_series(seed) {
                        Ok(series) => chart.set_series(series),
                        Err(e) => warn!(error = %e, "could not rebuild series"),
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => window.request_redraw(),
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&mut chart, &mut surface, &opts) {
                    warn!(error = %e, "frame failed");
                }
            }
            _ => {}
        }
    });
}

fn draw(chart: &mut LineChart, surface: &mut softbuffer::Surface, opts: &RenderOptions) -> Result<()> {
    let (w, h) = (opts.width as u32, opts.height as u32);
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize: {e}"))?;

    // Render to RGBA and convert to 0RGB u32 for softbuffer
    let (rgba, _, _, _) = chart.render_to_rgba8(opts)?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    let max_px = frame.len().min(rgba.len() / 4);
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)).take(max_px) {
        *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

fn build_chart(seed: u64) -> Result<LineChart> {
    let mut chart = LineChart::new(build_series(seed)?, Padding::horizontal(8.0));
    chart.add_background(ThresholdLine::new(700));
    chart.add_foreground(SelectionCursor::with_listener(|sel| match sel {
        Some(s) => info!(value = s.sample.value, date = %format_date(s.sample.timestamp, "%Y/%m/%d"), "selected"),
        None => debug!("selection cleared"),
    }));
    Ok(chart)
}

/// 10..100 daily samples in 100..1000, varied by `seed`.
fn build_series(seed: u64) -> Result<Series> {
    let n = 10 + ((seed * 37 + 23) % 90) as usize;
    let t0 = Utc::now();
    let phase = seed as f64 * 1.7;
    let items = (0..n)
        .map(|i| {
            let x = i as f64;
            let v = 550.0 + ((x * 0.35 + phase).sin() * 0.7 + (x * 0.11 - phase).cos() * 0.3) * 450.0;
            Sample::new(v.round() as i32, t0 + Duration::days(i as i64 + 1))
        })
        .collect();
    Ok(Series::new(items)?)
}
