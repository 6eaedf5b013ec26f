use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::LABEL_W;
use crate::tui::app::App;
use crate::util::unicode;

/// Width of the trigger field, arrow included
pub const TRIGGER_W: u16 = 12;

/// Render the "Year" label and the clickable trigger showing the current
/// selection. Records the trigger's area on the App for hit testing.
pub fn render_trigger(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let label = Span::styled(
        "Year",
        Style::default().fg(app.theme.dim).bg(bg),
    );
    frame.render_widget(Paragraph::new(Line::from(label)), area);

    let x = area.x + LABEL_W;
    let width = TRIGGER_W.min(area.right().saturating_sub(x));
    let trigger_area = Rect::new(x, area.y, width, area.height.min(1));
    app.trigger_area = trigger_area;
    if width == 0 {
        return;
    }

    let value = match &app.picker {
        Some(_) => app.year.get().to_string(),
        None => "n/a".to_string(),
    };
    // " <value padded> ▾ "
    let value_w = (TRIGGER_W as usize).saturating_sub(3);
    let value = unicode::truncate_to_width(&value, value_w);
    let pad = value_w.saturating_sub(unicode::display_width(&value));

    let open = app.picker_open();
    let style = if open {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg)
    };
    let arrow_style = Style::default()
        .fg(if open {
            app.theme.border_open
        } else {
            app.theme.border
        })
        .bg(app.theme.selection_bg);

    let line = Line::from(vec![
        Span::styled(format!(" {}{}", value, " ".repeat(pad)), style),
        Span::styled("\u{25BE}", arrow_style),
        Span::styled(" ", style),
    ]);
    frame.render_widget(Paragraph::new(line), trigger_area);
}
