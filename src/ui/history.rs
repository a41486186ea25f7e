use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, format_seconds};
use super::theme::Theme;
use crate::app::App;
use crate::color::category_color;

pub fn build_history_text<'a>(app: &'a App, theme: &Theme) -> Text<'a> {
    let completed = app.completed_timers();
    if completed.is_empty() {
        return Text::from(Span::styled(
            "No completed timers yet",
            Style::default().fg(theme.dim()),
        ));
    }

    let lines = completed
        .into_iter()
        .enumerate()
        .map(|(index, timer)| {
            let selected = index == app.selected_history_index;
            let marker_style = if selected {
                Style::default().fg(theme.selection_marker())
            } else {
                Style::default().fg(theme.dim())
            };
            let name_style = if selected {
                Style::default().fg(theme.highlight()).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text()).add_modifier(Modifier::BOLD)
            };
            Line::from(vec![
                Span::styled(if selected { "> " } else { "  " }, marker_style),
                Span::styled(clamp_name(&timer.name, 24), name_style),
                Span::raw(" "),
                Span::styled(
                    format!("[{}]", timer.category),
                    Style::default().fg(category_color(&timer.category)),
                ),
                Span::raw("  "),
                Span::styled(format_seconds(timer.duration), Style::default().fg(theme.accent())),
            ])
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}
