use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::model::metrics::DerivedMetrics;

use super::format::{format_brl_amount, format_compact, format_price, format_signed_pct};

pub(crate) fn pnl_color(val: f64) -> Color {
    if val > 0.0 {
        Color::Green
    } else if val < 0.0 {
        Color::Red
    } else {
        Color::White
    }
}

pub(crate) fn trend_arrow(up: bool) -> &'static str {
    if up {
        "\u{25b2}"
    } else {
        "\u{25bc}"
    }
}

pub struct HeaderBar<'a> {
    pub symbol: &'a str,
    pub metrics: DerivedMetrics,
    pub currency_prefix: &'a str,
    pub paused: bool,
    pub tick_count: u64,
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let profitable = self.metrics.is_profitable();
        let pnl_style = Style::default()
            .fg(if profitable { Color::Green } else { Color::Red })
            .add_modifier(Modifier::BOLD);

        let feed_status = if self.paused {
            Span::styled(
                " PAUSED ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" LIVE ", Style::default().fg(Color::Green))
        };

        let line = Line::from(vec![
            Span::styled(
                " Trading Dashboard ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("| ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.symbol, Style::default().fg(Color::White)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled("Total Portfolio ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "{} {}",
                    self.currency_prefix,
                    format_brl_amount(self.metrics.total_value)
                ),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default()),
            Span::styled(
                format!(
                    "{} {}",
                    trend_arrow(profitable),
                    format_signed_pct(self.metrics.pnl_pct)
                ),
                pnl_style,
            ),
            Span::styled(" |", Style::default().fg(Color::DarkGray)),
            feed_status,
            Span::styled("| ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("ticks: {}", self.tick_count),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// The four summary cards under the header.
pub struct StatCards {
    pub current_price: f64,
    pub session_change_pct: Option<f64>,
    pub total_volume: u64,
    pub open_positions: usize,
}

fn card(title: &str, value: String, value_color: Color) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .block(block)
}

impl Widget for StatCards {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        let change_color = match self.session_change_pct {
            Some(v) => pnl_color(v),
            None => Color::White,
        };

        card(
            "Current Price",
            format!("$ {}", format_price(self.current_price)),
            Color::White,
        )
        .render(cells[0], buf);
        card(
            "Session Change",
            format_signed_pct(self.session_change_pct),
            change_color,
        )
        .render(cells[1], buf);
        card(
            "Volume",
            format!("${}", format_compact(self.total_volume)),
            Color::White,
        )
        .render(cells[2], buf);
        card(
            "Open Positions",
            self.open_positions.to_string(),
            Color::White,
        )
        .render(cells[3], buf);
    }
}

pub struct KeybindBar;

impl Widget for KeybindBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = Line::from(vec![
            Span::styled(" [Q]", Style::default().fg(Color::Yellow)),
            Span::styled("uit  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[P]", Style::default().fg(Color::Yellow)),
            Span::styled("ause  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[R]", Style::default().fg(Color::Yellow)),
            Span::styled("esume  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[T]", Style::default().fg(Color::Yellow)),
            Span::styled("oggle symbol  ", Style::default().fg(Color::DarkGray)),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
