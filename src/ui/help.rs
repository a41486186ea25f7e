use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text(theme: &Theme) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(theme.accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title(theme, "Global"));
    lines.extend(section_lines(theme, &[
        "q: Quit",
        "?: Toggle help",
        "h: History of completed timers",
        "t: Toggle light/dark theme",
        "esc: Back",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Timers"));
    lines.extend(section_lines(theme, &[
        "Up/Down: Move selection",
        "Enter: Expand/collapse category",
        "space: Start/pause timer or whole category",
        "r: Reset timer",
        "d: Delete timer",
        "n: New timer",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Bulk"));
    lines.extend(section_lines(theme, &[
        "S: Start all paused timers",
        "P: Pause all running timers",
        "R: Reset all paused timers",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title(theme, "Popups"));
    lines.extend(section_lines(theme, &[
        "New timer: Tab switch field, Up/Down category, Enter save, Esc cancel",
        "Confirm: y delete, n/Esc cancel",
    ]));

    Text::from(lines)
}

fn section_title(theme: &Theme, title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(theme: &Theme, items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(theme.text()),
            ))
        })
        .collect()
}
