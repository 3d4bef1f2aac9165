use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD};
use crate::game::RenderState;
use crate::snake::Position;
use crate::ui::hud::render_hud;

/// Renders one full frame from an emitted render state.
///
/// This is the render-sink side of the simulation boundary: everything
/// drawn here comes from the `RenderState` snapshot, never from reaching
/// back into the game state.
pub fn render(frame: &mut Frame<'_>, state: &RenderState, bounds: GridSize, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, bounds, state.food, theme);
    render_body(frame, inner, bounds, state, theme);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, food: Position, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_body(
    frame: &mut Frame<'_>,
    inner: Rect,
    bounds: GridSize,
    state: &RenderState,
    theme: &Theme,
) {
    let head = state.body.first().copied();

    let buffer = frame.buffer_mut();
    for segment in &state.body {
        let Some((x, y)) = logical_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        if Some(*segment) == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
