// File: crates/chart-core/src/palette.rs
// Summary: Fixed per-device line palette, cycled by series index.

use skia_safe as skia;

/// Line colors assigned to devices in order.
pub const PALETTE: [&str; 12] = [
    "#36bc96",
    "#153764",
    "#730000",
    "#888202",
    "#14d2aa",
    "#215aa4",
    "#bf0000",
    "#e2d903",
    "#49ffd9",
    "#0ab9ff",
    "#d96666",
    "#eee868",
];

/// Parse `#rrggbb` (leading `#` optional) into an opaque color.
pub fn parse_hex_color(hex: &str) -> Option<skia::Color> {
    let h = hex.strip_prefix('#').unwrap_or(hex);
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
    Some(skia::Color::from_argb(255, channel(0)?, channel(2)?, channel(4)?))
}

/// Color for the series at `index`; wraps around the palette.
pub fn color_for(index: usize) -> skia::Color {
    let hex = PALETTE[index % PALETTE.len()];
    // Palette entries are literals above; a parse miss would be a typo there.
    parse_hex_color(hex).unwrap_or(skia::Color::BLACK)
}
