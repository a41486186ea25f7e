use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::{clamp_name, format_seconds, progress_bar};
use super::theme::Theme;
use crate::app::{App, Row};
use crate::color::category_color;
use crate::store::views;
use crate::types::TimerStatus;

const NAME_WIDTH: usize = 24;
const BAR_WIDTH: usize = 20;

pub fn build_timers_text<'a>(app: &'a App, theme: &Theme) -> Text<'a> {
    let timers = app.timers.timers();
    let rows = app.rows();
    if rows.is_empty() {
        return Text::from(vec![
            Line::from("You don't have any timers yet."),
            Line::from(Span::styled(
                "Press 'n' to add a new timer.",
                Style::default().fg(theme.dim()),
            )),
        ]);
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled("S", Style::default().fg(theme.highlight()).add_modifier(Modifier::BOLD)),
            Span::styled(": Start all   ", Style::default().fg(theme.dim())),
            Span::styled("P", Style::default().fg(theme.highlight()).add_modifier(Modifier::BOLD)),
            Span::styled(": Pause all   ", Style::default().fg(theme.dim())),
            Span::styled("R", Style::default().fg(theme.highlight()).add_modifier(Modifier::BOLD)),
            Span::styled(": Reset all", Style::default().fg(theme.dim())),
        ]),
        Line::from(""),
    ];

    for (index, row) in rows.iter().enumerate() {
        let selected = index == app.selected_row;
        let marker_style = if selected {
            Style::default().fg(theme.selection_marker()).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim())
        };
        let marker = Span::styled(if selected { "> " } else { "  " }, marker_style);

        match row {
            Row::Category(category) => {
                let paused = views::category_is_paused(timers, category);
                let expanded = app.expanded_category.as_deref() == Some(category.as_str());
                let count = views::active_in_category(timers, category).len();
                lines.push(Line::from(vec![
                    marker,
                    Span::styled(
                        if expanded { "v " } else { "> " },
                        Style::default().fg(theme.dim()),
                    ),
                    Span::styled(
                        category.clone(),
                        Style::default()
                            .fg(category_color(category))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" ({count})  "), Style::default().fg(theme.accent())),
                    if paused {
                        Span::styled("[paused]", Style::default().fg(theme.warn()))
                    } else {
                        Span::styled("[running]", Style::default().fg(theme.active()))
                    },
                ]));
            }
            Row::Timer(id) => {
                let Some(timer) = app.timers.find(id) else {
                    continue;
                };
                let name_style = if selected {
                    Style::default().fg(theme.highlight()).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text())
                };
                let (icon, icon_style) = match timer.status {
                    TimerStatus::Running => ("▶ ", Style::default().fg(theme.active())),
                    TimerStatus::Paused => ("⏸ ", Style::default().fg(theme.warn())),
                    TimerStatus::Completed => ("✔ ", Style::default().fg(theme.ended())),
                };
                let mut spans = vec![
                    marker,
                    Span::raw("    "),
                    Span::styled(icon, icon_style),
                    Span::styled(clamp_name(&timer.name, NAME_WIDTH), name_style),
                    Span::raw(" "),
                    Span::styled(
                        format_seconds(timer.remaining_time),
                        Style::default().fg(theme.accent()).add_modifier(Modifier::BOLD),
                    ),
                ];
                if timer.is_running() {
                    let (filled, empty) = progress_bar(views::progress_percent(timer), BAR_WIDTH);
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(filled, Style::default().fg(theme.primary())));
                    spans.push(Span::styled(empty, Style::default().fg(theme.track())));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    Text::from(lines)
}
