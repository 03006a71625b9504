// File: crates/launch-core/src/theme.rs
// Summary: Figure colors (background, grid, axes, text) and the categorical palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub tick: skia::Color,
    pub slice_edge: skia::Color,
    /// Colors for pie slices and scatter categories, cycled by index.
    pub palette: [skia::Color; 8],
}

const CATEGORICAL: [skia::Color; 8] = [
    skia::Color::from_argb(255, 0x63, 0x6e, 0xfa),
    skia::Color::from_argb(255, 0xef, 0x55, 0x3b),
    skia::Color::from_argb(255, 0x00, 0xcc, 0x96),
    skia::Color::from_argb(255, 0xab, 0x63, 0xfa),
    skia::Color::from_argb(255, 0xff, 0xa1, 0x5a),
    skia::Color::from_argb(255, 0x19, 0xd3, 0xf3),
    skia::Color::from_argb(255, 0xff, 0x66, 0x92),
    skia::Color::from_argb(255, 0xb6, 0xe8, 0x80),
];

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 229, 236, 246),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 42, 63, 95),
            title: skia::Color::from_argb(255, 0x50, 0x3d, 0x36),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            slice_edge: skia::Color::from_argb(255, 255, 255, 255),
            palette: CATEGORICAL,
        }
    }

    /// Palette color for a slice or category index (wraps around).
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}
