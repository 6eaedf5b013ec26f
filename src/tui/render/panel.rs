use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::surface::ListSurface;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// Render the open panel below the trigger, clipped to `area`, and record
/// where it landed.
pub fn render_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = app.panel_rows();
    let trigger = app.trigger_area;
    let Some(picker) = app.picker.as_ref() else {
        app.panel_area = None;
        return;
    };

    let y = trigger.bottom();
    let height = (rows + 2).min(area.bottom().saturating_sub(y));
    let panel_area = Rect::new(trigger.x, y, trigger.width, height);
    if panel_area.width < 3 || panel_area.height < 3 {
        app.panel_area = None;
        return;
    }

    let inner_w = (panel_area.width - 2) as usize;
    let visible_rows = panel_area.height - 2;
    let lines = panel_lines(picker.surface(), &app.theme, inner_w, visible_rows);

    frame.render_widget(Clear, panel_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_open).bg(app.theme.background))
        .style(Style::default().bg(app.theme.background));
    frame.render_widget(Paragraph::new(lines).block(block), panel_area);

    app.panel_area = Some(panel_area);
}

/// One line per visible row, taken from the surface's scroll position.
fn panel_lines<'a>(
    surface: &ListSurface,
    theme: &Theme,
    inner_w: usize,
    rows: u16,
) -> Vec<Line<'a>> {
    let bg = theme.background;
    let extent = surface.item_extent();
    let selected = surface.selected();

    (0..rows)
        .map(|r| {
            let Some(value) = surface.value_at(r as f64 * extent) else {
                return Line::from(Span::styled(" ".repeat(inner_w), Style::default().bg(bg)));
            };
            let is_selected = selected == Some(value);
            let (indicator, style) = if is_selected {
                (
                    "\u{25B6} ",
                    Style::default()
                        .fg(theme.text_bright)
                        .bg(theme.selection_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(theme.text).bg(bg))
            };
            let text = unicode::truncate_to_width(&format!("{}{}", indicator, value), inner_w);
            let pad = inner_w.saturating_sub(unicode::display_width(&text));
            Line::from(vec![
                Span::styled(text, style),
                Span::styled(" ".repeat(pad), style),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::router::{PickerEvent, PickerKey};
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    fn open_app(start: i64) -> App {
        let mut app = app_with_start(start);
        app.trigger_area = Rect::new(0, 0, 8, 1);
        app.picker
            .as_mut()
            .unwrap()
            .dispatch(PickerEvent::TriggerClick);
        app
    }

    #[test]
    fn end_jump_scrolls_to_low_sentinel() {
        let mut app = open_app(2025);
        app.picker
            .as_mut()
            .unwrap()
            .dispatch(PickerEvent::Key(PickerKey::End));
        let output = render_to_string(8, 13, |frame, area| {
            render_panel(frame, &mut app, area);
        });
        // Row 0 belongs to the trigger
        let output = output.trim_start_matches('\n').to_string();
        // End edge-aligns the top: 1 sits on the first row
        assert_snapshot!(output, @r"
┌──────┐
│▶ 1   │
│  2   │
│  3   │
│  4   │
│  5   │
│  6   │
│  7   │
│  8   │
│  9   │
│  10  │
└──────┘
");
    }

    #[test]
    fn panel_clipped_to_area() {
        let mut app = open_app(2025);
        render_to_string(8, 6, |frame, area| {
            render_panel(frame, &mut app, area);
        });
        assert_eq!(app.panel_area, Some(Rect::new(0, 1, 8, 5)));
    }
}
