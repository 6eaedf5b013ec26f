use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let line = match app.mode {
        Mode::Navigate => {
            let hint = if app.picker.is_none() {
                "year picker unavailable  q quit"
            } else if app.picker_open() {
                "\u{2191}\u{2193} \u{00B1}1  PgUp/PgDn \u{00B1}10  Enter close"
            } else {
                "Enter open  / goto  q quit"
            };
            Line::from(Span::styled(unicode::truncate_to_width(hint, width), dim))
        }
        Mode::Goto => {
            // Goto prompt: Year: 18▌
            let mut spans = vec![
                Span::styled(
                    format!("Year: {}", app.goto_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)), // ▌ cursor
            ];
            let hint = "Enter set  Esc cancel";
            let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
            let hint_width = unicode::display_width(hint);
            if content_width + hint_width < width {
                let padding = width - content_width - hint_width;
                spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
                spans.push(Span::styled(hint, dim));
            }
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn goto_prompt() {
        let mut app = app_with_start(2025);
        app.mode = Mode::Goto;
        app.goto_input = "18".into();
        let output = render_to_string(40, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_snapshot!(output, @"Year: 18▌          Enter set  Esc cancel");
    }

    #[test]
    fn narrow_hint_truncates() {
        let app = app_with_start(2025);
        let output = render_to_string(10, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_snapshot!(output, @"Enter ope…");
    }
}
