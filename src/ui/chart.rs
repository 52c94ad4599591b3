use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

use crate::model::sample::Sample;

use super::format::format_compact;

/// Eighth-block glyphs for sub-cell bar heights.
const BAR_GLYPHS: [&str; 8] = [
    "\u{2581}", "\u{2582}", "\u{2583}", "\u{2584}", "\u{2585}", "\u{2586}", "\u{2587}", "\u{2588}",
];

fn chart_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Evenly spread `len` samples over `width` columns, returning the sample index per column.
fn column_indices(len: usize, width: usize) -> Vec<usize> {
    if len == 0 || width == 0 {
        return Vec::new();
    }
    if len <= width {
        return (0..len).collect();
    }
    (0..width).map(|col| col * len / width).collect()
}

pub struct PriceChart<'a> {
    samples: &'a [Sample],
    symbol: &'a str,
    current_price: Option<f64>,
}

impl<'a> PriceChart<'a> {
    pub fn new(samples: &'a [Sample], symbol: &'a str) -> Self {
        Self {
            samples,
            symbol,
            current_price: None,
        }
    }

    pub fn current_price(mut self, price: Option<f64>) -> Self {
        self.current_price = price;
        self
    }
}

impl Widget for PriceChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = chart_block(format!(" Price Chart ({}) ", self.symbol));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.samples.is_empty() || inner.height < 3 || inner.width < 4 {
            return;
        }

        // bottom row holds the first/last time labels
        let chart_height = inner.height.saturating_sub(1) as usize;
        let columns = column_indices(self.samples.len(), inner.width as usize);

        let mut min_price = f64::INFINITY;
        let mut max_price = f64::NEG_INFINITY;
        for &i in &columns {
            min_price = min_price.min(self.samples[i].price);
            max_price = max_price.max(self.samples[i].price);
        }
        let range = max_price - min_price;
        let range = if range < 0.01 { 1.0 } else { range };
        let row_for = |price: f64| -> u16 {
            let normalized = ((price - min_price) / range).clamp(0.0, 1.0);
            let y_pos = chart_height - 1
                - ((normalized * (chart_height - 1) as f64) as usize).min(chart_height - 1);
            inner.y + y_pos as u16
        };

        for (col, &i) in columns.iter().enumerate() {
            let x = inner.x + col as u16;
            let y = row_for(self.samples[i].price);
            buf.set_string(x, y, "\u{25cf}", Style::default().fg(Color::Blue));
            // fill the area under the line
            for fill_y in (y + 1)..(inner.y + chart_height as u16) {
                buf.set_string(x, fill_y, "\u{2591}", Style::default().fg(Color::Blue));
            }
        }

        // live price marker on the last column when it lies within the drawn range
        if let Some(price) = self.current_price {
            if price.is_finite() && price >= min_price && price <= max_price {
                let last_x = inner.x + columns.len() as u16 - 1;
                buf.set_string(
                    last_x,
                    row_for(price),
                    "\u{25c6}",
                    Style::default().fg(Color::Yellow),
                );
            }
        }

        let label_style = Style::default().fg(Color::DarkGray);
        buf.set_string(inner.x, inner.y, format!("{:.2}", max_price), label_style);
        buf.set_string(
            inner.x,
            inner.y + chart_height as u16 - 1,
            format!("{:.2}", min_price),
            label_style,
        );

        let axis_y = inner.y + inner.height - 1;
        let first = &self.samples[columns[0]].time_label;
        let last = &self.samples[columns[columns.len() - 1]].time_label;
        buf.set_string(inner.x, axis_y, first, label_style);
        let last_x = (inner.x + inner.width).saturating_sub(last.len() as u16);
        if last_x > inner.x + first.len() as u16 {
            buf.set_string(last_x, axis_y, last, label_style);
        }
    }
}

pub struct VolumeChart<'a> {
    samples: &'a [Sample],
}

impl<'a> VolumeChart<'a> {
    pub fn new(samples: &'a [Sample]) -> Self {
        Self { samples }
    }
}

impl Widget for VolumeChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = chart_block(" Volume ".to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.samples.is_empty() || inner.height < 2 || inner.width < 4 {
            return;
        }

        let chart_height = inner.height.saturating_sub(1) as usize;
        let columns = column_indices(self.samples.len(), inner.width as usize);
        let max_volume = columns
            .iter()
            .map(|&i| self.samples[i].volume)
            .max()
            .unwrap_or(0)
            .max(1);

        let bar_style = Style::default().fg(Color::Magenta);
        let bottom = inner.y + chart_height as u16 - 1;
        for (col, &i) in columns.iter().enumerate() {
            let x = inner.x + col as u16;
            // height in eighths of a cell
            let ratio = self.samples[i].volume as f64 / max_volume as f64;
            let eighths = (ratio * (chart_height * 8) as f64) as usize;
            let full = eighths / 8;
            let rem = eighths % 8;
            for row in 0..full.min(chart_height) {
                buf.set_string(x, bottom - row as u16, BAR_GLYPHS[7], bar_style);
            }
            if rem > 0 && full < chart_height {
                buf.set_string(x, bottom - full as u16, BAR_GLYPHS[rem - 1], bar_style);
            }
        }

        let label_style = Style::default().fg(Color::DarkGray);
        buf.set_string(inner.x, inner.y + inner.height - 1, "0", label_style);
        let peak = format!("peak {}", format_compact(max_volume));
        let peak_x = (inner.x + inner.width).saturating_sub(peak.len() as u16);
        buf.set_string(peak_x.max(inner.x), inner.y + inner.height - 1, peak, label_style);
    }
}
