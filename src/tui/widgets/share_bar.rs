//! Proportional share bar
//!
//! Draws one colored segment per party whose width follows the party's share.
//! Hues are spread evenly around the color wheel by party position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::display::segment_widths;
use crate::models::PartyAllocation;

/// Color for the party at `index` out of `count`
pub fn party_color(index: usize, count: usize) -> Color {
    let hue = index as f64 * (360.0 / count.max(1) as f64);
    let (r, g, b) = hsl_to_rgb(hue, 0.7, 0.6);
    Color::Rgb(r, g, b)
}

/// Convert HSL (hue in degrees, saturation and lightness in 0-1) to RGB
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_byte(r), to_byte(g), to_byte(b))
}

/// Widget drawing the allocation as a horizontal bar
pub struct ShareBar<'a> {
    allocation: &'a PartyAllocation,
    show_labels: bool,
}

impl<'a> ShareBar<'a> {
    /// Create a bar for an allocation
    pub fn new(allocation: &'a PartyAllocation) -> Self {
        Self {
            allocation,
            show_labels: true,
        }
    }

    /// Print each party's letter inside its segment when it fits
    pub fn show_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }
}

impl Widget for ShareBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let count = self.allocation.len();
        let widths = segment_widths(self.allocation, area.width as usize);
        let mut x = area.x;

        for (index, (party, width)) in self.allocation.parties().iter().zip(widths).enumerate() {
            let style = Style::default().bg(party_color(index, count)).fg(Color::Black);
            for dx in 0..width as u16 {
                for y in area.top()..area.bottom() {
                    buf[(x + dx, y)].set_symbol(" ").set_style(style);
                }
            }
            if self.show_labels && width >= 1 {
                let label_x = x + (width as u16 - 1) / 2;
                let label_y = area.y + area.height / 2;
                buf[(label_x, label_y)]
                    .set_char(party.id.as_char())
                    .set_style(style);
            }
            x += width as u16;
        }
    }
}
