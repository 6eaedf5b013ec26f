use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::FileConfig;
use crate::ops::query::SearchQuery;
use crate::tui::app::App;

/// Draw with `f` on a `w` x `h` test terminal and return the text, one line
/// per row, with trailing spaces and trailing empty rows removed.
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
    terminal.draw(|frame| f(frame, frame.area())).unwrap();

    let buf = terminal.backend().buffer();
    let mut rows: Vec<String> = (0..buf.area.height)
        .map(|y| {
            let row: String = (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows.join("\n")
}

/// An App with default picker settings and the given start value.
pub fn app_with_start(start: i64) -> App {
    let mut config = FileConfig::default();
    config.picker.start = start;
    App::new(&config, SearchQuery::new())
}
