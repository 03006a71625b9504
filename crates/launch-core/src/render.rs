// File: crates/launch-core/src/render.rs
// Summary: Headless PNG rendering of pie and scatter figures using Skia CPU raster surfaces.

use anyhow::{anyhow, Result};
use skia_safe as skia;

use crate::figure::{ChartSpec, PieSpec, ScatterSpec};
use crate::theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 960;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 480;

/// Margins around the plot area, in pixels. The right margin holds the legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Default for Insets {
    fn default() -> Self {
        Self { left: 72, right: 200, top: 56, bottom: 56 }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text (title, ticks, legend). Off in pixel tests to avoid font variance.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Plot area in surface pixels.
#[derive(Clone, Copy, Debug)]
struct Plot {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

impl Plot {
    fn new(opts: &RenderOptions) -> Self {
        let l = opts.insets.left as f32;
        let t = opts.insets.top as f32;
        // Keep at least a 1px plot even for tiny surfaces.
        let r = ((opts.width - opts.insets.right) as f32).max(l + 1.0);
        let b = ((opts.height - opts.insets.bottom) as f32).max(t + 1.0);
        Self { l, t, r, b }
    }
}

/// Render a figure to PNG bytes.
pub fn render_png(spec: &ChartSpec, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    let canvas = surface.canvas();
    canvas.clear(opts.theme.background);

    let plot = Plot::new(opts);
    match spec {
        ChartSpec::Pie(pie) => draw_pie(canvas, plot, pie, opts),
        ChartSpec::Scatter(scatter) => draw_scatter(canvas, plot, scatter, opts),
    }
    if opts.draw_labels {
        draw_title(canvas, spec.title(), opts);
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

// ---- helpers ----------------------------------------------------------------

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

fn font(size: f32) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(size);
    font
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_title(canvas: &skia::Canvas, title: &str, opts: &RenderOptions) {
    let font = font(18.0);
    let paint = fill(opts.theme.title);
    let (w, _) = font.measure_str(title, Some(&paint));
    let x = ((opts.width as f32 - w) * 0.5).max(8.0);
    canvas.draw_str(title, (x, opts.insets.top as f32 * 0.6), &font, &paint);
}

/// Legend entries stacked in the right margin.
fn draw_legend<'a>(
    canvas: &skia::Canvas,
    plot: Plot,
    entries: impl Iterator<Item = (usize, &'a str)>,
    opts: &RenderOptions,
) {
    let font = font(13.0);
    let text = fill(opts.theme.axis_label);
    let x = plot.r + 24.0;
    for (row, (color, label)) in entries.enumerate() {
        let y = plot.t + 8.0 + row as f32 * 22.0;
        let swatch = skia::Rect::from_xywh(x, y - 10.0, 12.0, 12.0);
        canvas.draw_rect(swatch, &fill(opts.theme.series_color(color)));
        if opts.draw_labels {
            canvas.draw_str(label, (x + 18.0, y), &font, &text);
        }
    }
}

fn draw_pie(canvas: &skia::Canvas, plot: Plot, pie: &PieSpec, opts: &RenderOptions) {
    let cx = (plot.l + plot.r) * 0.5;
    let cy = (plot.t + plot.b) * 0.5;
    let radius = ((plot.r - plot.l).min(plot.b - plot.t) * 0.5 - 4.0).max(1.0);
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

    let total = pie.total();
    if pie.slices.is_empty() || total <= 0.0 {
        // Nothing to apportion: outline only.
        canvas.draw_circle((cx, cy), radius, &stroke(opts.theme.grid, 1.5));
        draw_legend(canvas, plot, pie.slices.iter().map(|s| (s.color, s.label.as_str())), opts);
        return;
    }

    let edge = stroke(opts.theme.slice_edge, 1.5);
    let label_font = font(12.0);
    let label_paint = fill(opts.theme.background);
    // Start at 12 o'clock, clockwise.
    let mut start = -90.0f32;
    for slice in &pie.slices {
        let frac = (slice.value / total) as f32;
        let sweep = 360.0 * frac;
        if sweep <= 0.0 {
            continue;
        }
        canvas.draw_arc(oval, start, sweep, true, &fill(opts.theme.series_color(slice.color)));
        canvas.draw_arc(oval, start, sweep, true, &edge);

        if opts.draw_labels && frac >= 0.04 {
            let mid = (start + sweep * 0.5).to_radians();
            let lx = cx + mid.cos() * radius * 0.65;
            let ly = cy + mid.sin() * radius * 0.65;
            let pct = format!("{:.1}%", frac * 100.0);
            let (w, _) = label_font.measure_str(&pct, Some(&label_paint));
            canvas.draw_str(&pct, (lx - w * 0.5, ly + 4.0), &label_font, &label_paint);
        }
        start += sweep;
    }
    draw_legend(canvas, plot, pie.slices.iter().map(|s| (s.color, s.label.as_str())), opts);
}

fn draw_scatter(canvas: &skia::Canvas, plot: Plot, scatter: &ScatterSpec, opts: &RenderOptions) {
    let (x_axis, y_axis) = (&scatter.x_axis, &scatter.y_axis);
    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);
    let sx = |x: f64| -> f32 { plot.l + ((x - x_axis.min) / xspan) as f32 * (plot.r - plot.l) };
    let sy = |y: f64| -> f32 { plot.b - ((y - y_axis.min) / yspan) as f32 * (plot.b - plot.t) };

    // Grid: x ticks evenly spaced, y lines at each outcome class.
    let grid = stroke(opts.theme.grid, 1.0);
    let x_ticks = linspace(x_axis.min, x_axis.max, 6);
    for &x in &x_ticks {
        canvas.draw_line((sx(x), plot.t), (sx(x), plot.b), &grid);
    }
    for y in [0.0, 1.0] {
        canvas.draw_line((plot.l, sy(y)), (plot.r, sy(y)), &grid);
    }

    let axis = stroke(opts.theme.axis_line, 1.5);
    canvas.draw_line((plot.l, plot.b), (plot.r, plot.b), &axis);
    canvas.draw_line((plot.l, plot.t), (plot.l, plot.b), &axis);

    if opts.draw_labels {
        let tick_font = font(12.0);
        let tick_paint = fill(opts.theme.tick);
        for &x in &x_ticks {
            let text = format!("{x:.0}");
            let (w, _) = tick_font.measure_str(&text, Some(&tick_paint));
            canvas.draw_str(&text, (sx(x) - w * 0.5, plot.b + 18.0), &tick_font, &tick_paint);
        }
        for y in [0.0, 1.0] {
            canvas.draw_str(format!("{y:.0}"), (plot.l - 20.0, sy(y) + 4.0), &tick_font, &tick_paint);
        }

        let label_font = font(14.0);
        let label_paint = fill(opts.theme.axis_label);
        let (w, _) = label_font.measure_str(&x_axis.label, Some(&label_paint));
        canvas.draw_str(&x_axis.label, ((plot.l + plot.r - w) * 0.5, plot.b + 42.0), &label_font, &label_paint);
        canvas.draw_str(&y_axis.label, (8.0, plot.t - 8.0), &label_font, &label_paint);
    }

    for p in &scatter.points {
        let color = scatter.category_index(&p.category).unwrap_or(0);
        let mut dot = fill(opts.theme.series_color(color));
        dot.set_alpha(220);
        canvas.draw_circle((sx(p.x), sy(p.y)), 5.0, &dot);
    }

    draw_legend(
        canvas,
        plot,
        scatter.categories.iter().enumerate().map(|(i, c)| (i, c.as_str())),
        opts,
    );
}
