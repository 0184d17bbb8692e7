// SPDX-License-Identifier: MPL-2.0
//! Rendering for the menu slider.
//!
//! The layout mirrors what the slider needs from its state: the drink
//! before and after the selection flank the current one, and a tab row
//! highlights the active selector.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::menu::Drink;
use crate::ui::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Menu name
            Constraint::Length(1), // Tab row
            Constraint::Min(7),    // Drink panels
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    if let [header, tabs, body, footer] = &chunks[..] {
        render_header(frame, app, *header);
        render_tabs(frame, app, *tabs);
        render_panels(frame, app, *body);
        render_footer(frame, app, *footer);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        app.menu().name(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.slider().current();
    let mut spans = Vec::new();
    for (index, drink) in app.menu().drinks().iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if index == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", drink.name), style));
    }

    let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(tabs, area);
}

fn render_panels(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);

    if let [left, center, right] = &columns[..] {
        render_neighbor(frame, app.drink_at(-1), "Previous", *left);
        render_current(frame, app.drink_at(0), *center);
        render_neighbor(frame, app.drink_at(1), "Next", *right);
    }
}

fn render_neighbor(frame: &mut Frame, drink: &Drink, label: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            drink.name.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            drink.title.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(panel, area);
}

fn render_current(frame: &mut Frame, drink: &Drink, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            drink.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::raw(drink.description.clone())),
    ];

    if let Some(price) = &drink.price {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            price.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("art: {}", drink.image.display()),
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                drink.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(panel, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    if let [message_row, hints_row] = &rows[..] {
        let message = match app.status() {
            Some(status) => Line::from(Span::styled(
                status.to_string(),
                Style::default().fg(Color::Yellow),
            )),
            None => Line::from(Span::raw(format!(
                "{} of {}",
                app.slider().current() + 1,
                app.menu().len()
            ))),
        };
        frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), *message_row);

        let hints = Paragraph::new(Line::from(Span::styled(
            "left/right browse   1-9 tabs   Home/End ends   e export   q quit",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hints, *hints_row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityLog;
    use crate::menu::Menu;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|frame| render(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn house_app() -> App {
        App::new(
            Menu::house_menu(),
            0,
            ActivityLog::default(),
            PathBuf::from("unused"),
        )
    }

    #[test]
    fn renders_menu_name_and_panels() {
        let content = rendered(&house_app());

        assert!(content.contains("House Cocktails"));
        assert!(content.contains("Previous"));
        assert!(content.contains("Next"));
        assert!(content.contains("Classic Mojito"));
        assert!(content.contains("1 of 4"));
    }

    #[test]
    fn neighbors_wrap_around_the_menu_edges() {
        let content = rendered(&house_app());

        // At the first drink, the previous panel shows the last one.
        assert!(content.contains("Curacao Mojito"));
        assert!(content.contains("Raspberry Mojito"));
    }

    #[test]
    fn status_replaces_the_position_indicator() {
        let mut app = house_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE));

        let content = rendered(&app);
        assert!(content.contains("No drink on tab 9"));
        assert!(!content.contains("1 of 4"));
    }
}
