use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use crate::model::position::PortfolioPosition;

use super::dashboard::{pnl_color, trend_arrow};
use super::format::{format_price, format_shares};

const HEADERS: [&str; 6] = ["Symbol", "Shares", "Avg Price", "Current Price", "P&L", "Change"];

pub struct PortfolioTable<'a> {
    positions: &'a [PortfolioPosition],
    currency_prefix: &'a str,
}

impl<'a> PortfolioTable<'a> {
    pub fn new(positions: &'a [PortfolioPosition], currency_prefix: &'a str) -> Self {
        Self {
            positions,
            currency_prefix,
        }
    }

    fn row(&self, pos: &PortfolioPosition) -> Row<'static> {
        let pnl = pos.pnl();
        let change_color = if pos.is_gaining() {
            Color::Green
        } else {
            Color::Red
        };
        Row::new(vec![
            Cell::from(pos.symbol.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            right(format_shares(pos.shares)),
            right(format!("{} {}", self.currency_prefix, format_price(pos.avg_price))),
            right(format!(
                "{} {}",
                self.currency_prefix,
                format_price(pos.current_price)
            )),
            right(format!("{} {}", self.currency_prefix, format_price(pnl))).style(
                Style::default()
                    .fg(pnl_color(pnl))
                    .add_modifier(Modifier::BOLD),
            ),
            right(format!(
                "{} {:.2}%",
                trend_arrow(pos.is_gaining()),
                pos.change_pct.abs()
            ))
            .style(Style::default().fg(change_color)),
        ])
    }
}

fn right(s: String) -> Cell<'static> {
    Cell::from(Text::from(s).right_aligned())
}

impl Widget for PortfolioTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(
            HEADERS
                .iter()
                .enumerate()
                .map(|(i, h)| {
                    let text = if i == 0 {
                        Text::from(*h)
                    } else {
                        Text::from(*h).right_aligned()
                    };
                    Cell::from(text)
                })
                .collect::<Vec<_>>(),
        )
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self.positions.iter().map(|p| self.row(p)).collect();
        let widths = [
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Min(14),
            Constraint::Length(10),
        ];

        let block = Block::default()
            .title(" Portfolio ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        Widget::render(
            Table::new(rows, widths).header(header).block(block),
            area,
            buf,
        );
    }
}
