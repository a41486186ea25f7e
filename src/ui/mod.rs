mod help;
mod helpers;
mod history;
mod theme;
mod timers;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, AppView, ConfirmPopup, NewTimerField, NewTimerPopup};
use crate::store::views;
use crate::types::PRESET_CATEGORIES;
use helpers::centered_rect;
pub use helpers::format_seconds;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::new(app.theme.is_dark());
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background())),
        area,
    );

    let (title, body_text) = match app.view {
        AppView::Timers => (" Timers ", timers::build_timers_text(app, &theme)),
        AppView::History => (" History ", history::build_history_text(app, &theme)),
        AppView::Help => (" Help ", help::build_help_text(&theme)),
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Tickdown  ",
            Style::default().fg(Color::Black).bg(theme.primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "countdown timers",
            Style::default()
                .fg(theme.secondary())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("theme: {}", app.theme.mode()),
            Style::default().fg(theme.dim()),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.secondary())),
        );
    frame.render_widget(header, layout[0]);

    let mut body_lines = vec![
        Line::from(Span::styled(
            format!("  {title}"),
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    body_lines.extend(body_text.lines);
    body_lines.push(Line::from(""));
    body_lines.push(Line::from(Span::styled(
        "----------------------------------------",
        Style::default().fg(theme.dim()),
    )));
    body_lines.push(keybinds_line(app, &theme));
    let body = Paragraph::new(Text::from(body_lines))
        .style(Style::default().fg(theme.text()))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.secondary())),
        );
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new(Text::from(status_line(app, &theme)))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.secondary())),
        );
    frame.render_widget(footer, layout[2]);

    if let Some(popup) = &app.new_timer_popup {
        render_new_timer_popup(frame, popup, &theme);
    }
    if let Some(popup) = &app.confirm_popup {
        render_confirm_popup(frame, popup, &theme);
    }
}

fn status_line(app: &App, theme: &Theme) -> Line<'static> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            status.clone(),
            Style::default().fg(theme.warn()).add_modifier(Modifier::BOLD),
        ));
    }
    let timers = app.timers.timers();
    let running = timers.iter().filter(|t| t.is_running()).count();
    let active = timers.iter().filter(|t| !t.is_completed()).count();
    let done = views::completed(timers).len();
    Line::from(vec![
        Span::styled(format!("{running}"), Style::default().fg(theme.active()).add_modifier(Modifier::BOLD)),
        Span::styled(" running  ", Style::default().fg(theme.dim())),
        Span::styled(format!("{active}"), Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD)),
        Span::styled(" active  ", Style::default().fg(theme.dim())),
        Span::styled(format!("{done}"), Style::default().fg(theme.ended()).add_modifier(Modifier::BOLD)),
        Span::styled(" completed", Style::default().fg(theme.dim())),
    ])
}

fn keybinds_line(app: &App, theme: &Theme) -> Line<'static> {
    let hint = match app.view {
        AppView::Timers => {
            "Up/Down: Select  Enter: Expand  space: Start/Pause  r: Reset  d: Delete  n: New  h: History  t: Theme  ?: Help  q: Quit"
        }
        AppView::History => "Up/Down: Select  d: Delete  esc: Back  ?: Help  q: Quit",
        AppView::Help => "esc/?: Back  q: Quit",
    };
    Line::from(Span::styled(hint, Style::default().fg(theme.dim())))
}

fn render_new_timer_popup(frame: &mut Frame, popup: &NewTimerPopup, theme: &Theme) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let field_style = |field: NewTimerField| {
        if popup.field == field {
            Style::default()
                .fg(theme.highlight())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim())
        }
    };
    let cursor = |field: NewTimerField| if popup.field == field { "_" } else { "" };

    let mut lines = vec![
        Line::from(Span::styled(
            "New timer",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Name: ", field_style(NewTimerField::Name)),
            Span::styled(popup.name.clone(), Style::default().fg(theme.text())),
            Span::styled(cursor(NewTimerField::Name), field_style(NewTimerField::Name)),
        ]),
        Line::from(vec![
            Span::styled("Duration (seconds): ", field_style(NewTimerField::Duration)),
            Span::styled(popup.duration.clone(), Style::default().fg(theme.text())),
            Span::styled(
                cursor(NewTimerField::Duration),
                field_style(NewTimerField::Duration),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("Category", field_style(NewTimerField::Category))),
    ];

    let mut chips = Vec::new();
    for category in PRESET_CATEGORIES {
        let selected = *category == popup.category();
        let style = if selected {
            Style::default()
                .fg(crate::color::category_color(category))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.text())
        };
        chips.push(Span::styled(format!(" {category} "), style));
        chips.push(Span::raw(" "));
    }
    lines.push(Line::from(chips));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab: next field. Up/Down: category. Enter: add. Esc: cancel.",
        Style::default().fg(theme.dim()),
    )));

    let widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.secondary()))
                .title(" Add Timer "),
        );
    frame.render_widget(widget, area);
}

fn render_confirm_popup(frame: &mut Frame, popup: &ConfirmPopup, theme: &Theme) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Delete Timer",
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            popup.message.clone(),
            Style::default().fg(theme.text()),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.dim())),
            Span::styled("Y", Style::default().fg(theme.highlight()).add_modifier(Modifier::BOLD)),
            Span::styled(" to delete or ", Style::default().fg(theme.dim())),
            Span::styled("N", Style::default().fg(theme.highlight()).add_modifier(Modifier::BOLD)),
            Span::styled("/", Style::default().fg(theme.dim())),
            Span::styled("ESC", Style::default().fg(theme.highlight()).add_modifier(Modifier::BOLD)),
            Span::styled(" to cancel", Style::default().fg(theme.dim())),
        ]),
    ];

    let widget = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(theme.secondary()))
                .title(" Confirm "),
        );
    frame.render_widget(widget, area);
}
