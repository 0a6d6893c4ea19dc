use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        BarChart, Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Sparkline, Table,
        TableState, Wrap,
    },
};
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    app::{dashboard::Dashboard, trade::TradeGate},
    models::{EquitySnapshot, OrderSide, OrderStatus},
    services::CheckoutSession,
};

pub fn render(
    frame: &mut Frame,
    dashboard: &Dashboard,
    trade: &TradeGate,
    checkout: Option<&CheckoutSession>,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
    table_state: &mut TableState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_ticker_strip(frame, dashboard, chunks[1]);
    render_stat_cards(frame, dashboard, chunks[2]);
    render_main(frame, dashboard, table_state, chunks[3]);
    render_footer(frame, dashboard, chunks[4]);

    match trade {
        TradeGate::AmountPrompted { mode, input } => {
            render_amount_popup(frame, &mode.to_string(), input);
        }
        TradeGate::Rejected(reason) => render_reject_popup(frame, &reason.message()),
        TradeGate::WidgetOpened { .. } => {
            if let Some(session) = checkout {
                render_checkout_popup(frame, session);
            }
        }
        _ => {}
    }

    if let Some(message) = popup_message {
        render_message_popup(frame, message);
    }

    if let Some(message) = error_popup {
        render_error_popup(frame, message);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("Barick Gold — Brokerage Dashboard")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, area);
}

fn render_ticker_strip(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    for point in dashboard.ticker_points() {
        if !spans.is_empty() {
            spans.push(Span::styled("  •  ", Style::default().fg(Color::DarkGray)));
        }

        let change = *point.change_percent();
        let change_color = if change >= Decimal::ZERO {
            Color::Green
        } else {
            Color::Red
        };

        spans.push(Span::styled(
            format!("{} ", point.symbol()),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!("{:.2} ", point.price())));
        spans.push(Span::styled(
            format!("{}{:.2}%", if change >= Decimal::ZERO { "+" } else { "" }, change),
            Style::default().fg(change_color),
        ));
    }

    let strip = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Markets"));

    frame.render_widget(strip, area);
}

fn render_stat_cards(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_equity_card(frame, dashboard.equity(), cards[0]);

    let balance = dashboard.balance();
    let pct_change = *balance.pct_change();
    render_stat_card(
        frame,
        "24h P&L",
        format!("${:.2}", balance.total_profit()),
        Some(pct_change),
        cards[1],
    );
    render_stat_card(
        frame,
        "Available Balance",
        format!("${:.2}", balance.balance()),
        None,
        cards[2],
    );
    render_stat_card(
        frame,
        "Positions",
        dashboard.holdings().len().to_string(),
        None,
        cards[3],
    );
}

fn render_equity_card(frame: &mut Frame, equity: Option<&EquitySnapshot>, area: Rect) {
    match equity {
        Some(snapshot) => render_stat_card(
            frame,
            "Total Equity",
            format!("${:.2}", snapshot.total_equity()),
            Some(*snapshot.percent_change()),
            area,
        ),
        None => render_stat_card(frame, "Total Equity", String::from("--"), None, area),
    }
}

fn render_stat_card(
    frame: &mut Frame,
    label: &str,
    value: String,
    diff: Option<Decimal>,
    area: Rect,
) {
    let mut value_spans = vec![Span::styled(
        value,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(pct) = diff {
        let (arrow, color) = if pct >= Decimal::ZERO {
            ("▲", Color::Green)
        } else {
            ("▼", Color::Red)
        };
        value_spans.push(Span::styled(
            format!("  {} {:.2}%", arrow, pct.abs()),
            Style::default().fg(color),
        ));
    }

    let card = Paragraph::new(vec![
        Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        Line::from(value_spans),
    ])
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(card, area);
}

fn render_main(frame: &mut Frame, dashboard: &Dashboard, table_state: &mut TableState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(columns[0]);

    render_price_chart(frame, dashboard, left[0]);
    render_orders_table(frame, dashboard, table_state, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(0)])
        .split(columns[1]);

    render_nav_chart(frame, dashboard, right[0]);
    render_insights(frame, dashboard, right[1]);
}

fn render_price_chart(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let history = dashboard.history();
    let title = match history.latest() {
        Some(price) => format!(
            "{}/USDT {:.2} — {}",
            dashboard.chart_symbol(),
            price,
            dashboard.prices().fetched_at().format("%H:%M:%S")
        ),
        None => format!("{}/USDT", dashboard.chart_symbol()),
    };

    if history.is_empty() {
        let waiting = Paragraph::new("Waiting for the first price tick...")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(waiting, area);
        return;
    }

    let points = history.as_chart_points();
    let chart = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    frame.render_widget(chart, area);
}

fn render_orders_table(
    frame: &mut Frame,
    dashboard: &Dashboard,
    table_state: &mut TableState,
    area: Rect,
) {
    let orders = dashboard.orders();

    if orders.is_empty() {
        let empty_message =
            Paragraph::new("Fund your account, add a wallet, and start trading!")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title("Orders"));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = ["ID", "Pair", "Side", "Qty", "Price", "Amount", "Status", "Date"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).height(1);

    let rows = orders.iter().map(|order| {
        let side_color = match order.side() {
            OrderSide::Buy => Color::Green,
            OrderSide::Sell => Color::Red,
        };
        let status_color = match order.status() {
            OrderStatus::Open => Color::Yellow,
            OrderStatus::Completed => Color::Green,
        };

        let price = order
            .price()
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| String::from("—"));
        let date = order
            .created_at()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| String::from("—"));

        let cells = [
            Cell::from(order.short_id()),
            Cell::from(order.pair().to_string()),
            Cell::from(order.side().to_string()).style(Style::default().fg(side_color)),
            Cell::from(format!("{:.4}", order.quantity())),
            Cell::from(price),
            Cell::from(format!("{:.2}", order.amount_paid())),
            Cell::from(order.status().to_string()).style(Style::default().fg(status_color)),
            Cell::from(date),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(6),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Orders"))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_nav_chart(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let investments = dashboard.investments();

    if investments.is_empty() {
        let empty_message = Paragraph::new("No investments recorded yet.")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("Investment NAV"));
        frame.render_widget(empty_message, area);
        return;
    }

    let data: Vec<(&str, u64)> = investments
        .iter()
        .map(|nav| (nav.label().as_str(), nav.amount().to_u64().unwrap_or(0)))
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title("Investment NAV"))
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Yellow))
        .value_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .data(&data);

    frame.render_widget(chart, area);
}

fn render_insights(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let items: Vec<ListItem> = dashboard
        .insights()
        .iter()
        .map(|insight| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    insight.title().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    insight.summary().to_string(),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Market Insight — Advisory"),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, dashboard: &Dashboard, area: Rect) {
    let mut spans = vec![Span::styled(
        "q quit • r refresh • b buy • s sell • ↑/↓ select order",
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(error) = dashboard.last_error() {
        spans.push(Span::styled(
            format!("   {}", error),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_amount_popup(frame: &mut Frame, mode: &str, input: &str) {
    let area = centered_rect(50, 22, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(vec![
        Line::from("Enter amount in USD:"),
        Line::from(Span::styled(
            format!("{}█", input),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Enter to confirm • Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", mode)),
    );

    frame.render_widget(popup, area);
}

fn render_reject_popup(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 22, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(Span::styled(
            "Enter to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Trade rejected "),
    );

    frame.render_widget(popup, area);
}

fn render_checkout_popup(frame: &mut Frame, session: &CheckoutSession) {
    let area = centered_rect(70, 35, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(vec![
        Line::from("Complete the transaction in your browser:"),
        Line::from(""),
        Line::from(Span::styled(
            session.url().to_string(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Balance and holdings will refresh when you close this.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Enter or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ${:.2} — Checkout ", session.mode(), session.amount())),
    );

    frame.render_widget(popup, area);
}

fn render_message_popup(frame: &mut Frame, message: &str) {
    let area = centered_rect(40, 14, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(" Working "));

    frame.render_widget(popup, area);
}

fn render_error_popup(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 22, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Error "),
        );

    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
