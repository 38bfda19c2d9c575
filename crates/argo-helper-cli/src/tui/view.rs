//! Rendering. Pure functions of the [`App`] state.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::app::{App, Screen};
use super::field::Field;
use super::form::Form;
use super::menu::{Menu, MenuItem};
use super::workflows::FormWorkflow;

const MENU_HELP: &str = "↑/↓: Navigate • Enter: Select • q: Quit";

pub fn render(frame: &mut Frame, app: &mut App<'_>) {
    let notice = app.notice().map(str::to_owned);
    match app.screen_mut() {
        Screen::Menu(menu) => render_menu(frame, menu, notice.as_deref()),
        Screen::Init(form) => render_form(frame, form.form()),
        Screen::NewResource(form) => render_form(frame, form.form()),
    }
}

fn render_menu(frame: &mut Frame, menu: &mut Menu, notice: Option<&str>) {
    let notice_height = notice.map_or(0, |n| n.lines().count().min(20) as u16 + 2);
    let [title_area, list_area, notice_area, help_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(MenuItem::ALL.len() as u16 * 2 + 2),
        Constraint::Length(notice_height),
        Constraint::Fill(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new("ArgoCD Helper").style(Style::default().bold().fg(Color::Cyan)),
        title_area,
    );

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(Span::styled(item.title(), Style::default().bold())),
                Line::from(Span::styled(
                    format!("  {}", item.description()),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Choose an option: "))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, list_area, menu.state_mut());

    if let Some(notice) = notice {
        frame.render_widget(
            Paragraph::new(notice)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Result ")),
            notice_area,
        );
    }

    render_help(frame, help_area, MENU_HELP);
}

fn render_form(frame: &mut Frame, form: &Form) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.title()))
        .title_style(Style::default().bold());
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let mut constraints = Vec::new();
    for _ in form.entries() {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(3));
    }
    constraints.extend([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ]);
    let areas = Layout::vertical(constraints).split(inner);

    for (index, (spec, field)) in form.entries().enumerate() {
        let focused = index == form.focus();
        let label_area = areas[index * 2];
        let input_area = areas[index * 2 + 1];

        let label = if spec.required {
            format!("{} (required):", spec.label)
        } else {
            format!("{}:", spec.label)
        };
        frame.render_widget(Paragraph::new(label).bold(), label_area);

        let border = if focused { Color::Yellow } else { Color::DarkGray };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let content = match field {
            Field::Text(input) if input.value().is_empty() => Line::from(Span::styled(
                spec.placeholder_text().to_owned(),
                Style::default().fg(Color::DarkGray),
            )),
            Field::Text(input) => Line::from(input.value().to_owned()),
            Field::Toggle(on) => Line::from(if *on { "[x]" } else { "[ ]" }),
        };
        frame.render_widget(Paragraph::new(content).block(input_block), input_area);

        if let (true, Field::Text(input)) = (focused, field) {
            let max = input_area.width.saturating_sub(2);
            let offset = (input.cursor() as u16).min(max);
            frame.set_cursor_position(Position::new(input_area.x + 1 + offset, input_area.y + 1));
        }
    }

    let tail = form.entries().count() * 2;
    if let Some(error) = form.last_error() {
        frame.render_widget(
            Paragraph::new(format!("Error: {error}")).style(Style::default().fg(Color::Red)),
            areas[tail],
        );
    }
    render_help(frame, areas[tail + 2], form.help());
}

fn render_help(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        area,
    );
}
