use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::RenderState;

/// Renders the one-line status bar and returns the remaining play area
/// above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &RenderState, theme: &Theme) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(state, theme)).alignment(Alignment::Left),
        status_area,
    );

    play_area
}

fn status_line<'a>(state: &RenderState, theme: &'a Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            format!(" Length {}", state.body.len()),
            Style::default().fg(theme.hud_fg),
        ),
        Span::styled(
            format!("  Max {}", state.max_length),
            Style::default().fg(theme.hud_fg),
        ),
        Span::styled(
            format!("  Speed {}", state.speed),
            Style::default().fg(theme.hud_fg),
        ),
    ];

    if state.paused {
        spans.push(Span::styled(
            "  PAUSED (p to resume)",
            Style::default()
                .fg(theme.hud_paused)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            "  +/- speed  p pause  Esc quit",
            Style::default().fg(theme.border_bg),
        ));
    }

    Line::from(spans)
}
