pub mod panel;
pub mod status_row;
pub mod trigger;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Label column width; fields start right after it
pub(super) const LABEL_W: u16 = 6;

/// Draw the search form, then the panel on top when open
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | gap | year row | gap | query row | filler | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Span::styled(
        "Case search",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(Line::from(header)), chunks[0]);

    trigger::render_trigger(frame, app, chunks[2]);
    render_query_line(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[6]);

    // Panel drops down over everything below the trigger
    if app.picker_open() {
        panel::render_panel(frame, app, area);
    } else {
        app.panel_area = None;
    }
}

fn render_query_line(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let bg = app.theme.background;
    let label = format!("{:<width$}", "Query", width = LABEL_W as usize);
    let budget = (area.width as usize).saturating_sub(LABEL_W as usize);
    let query = crate::util::unicode::truncate_to_width(&app.query_string(), budget);
    let line = Line::from(vec![
        Span::styled(label, Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(query, Style::default().fg(app.theme.text).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
