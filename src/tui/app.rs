use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::info;

use crate::model::{FileConfig, PickerConfig};
use crate::ops::query::SearchQuery;
use crate::ops::router::YearPicker;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a year to jump to
    Goto,
}

/// Main application state: one picker plus the host search form around it.
pub struct App {
    /// `None` when the picker could not be bound; the form still works.
    pub picker: Option<YearPicker>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Filters other than the year
    pub query: SearchQuery,
    /// Query key for the picker's value
    pub year_key: String,
    /// Last value received from the picker's outbound notification
    pub year: Rc<Cell<i64>>,
    /// Goto prompt contents
    pub goto_input: String,
    /// Trigger field area, set during render for hit testing
    pub trigger_area: Rect,
    /// Panel area (including borders) while open, set during render
    pub panel_area: Option<Rect>,
}

impl App {
    pub fn new(config: &FileConfig, query: SearchQuery) -> Self {
        let picker_config: PickerConfig = config.picker.clone();
        let year = Rc::new(Cell::new(picker_config.start));

        let mut picker = YearPicker::with_list_surface(picker_config);
        if let Some(p) = &mut picker {
            let sink = Rc::clone(&year);
            p.subscribe(Box::new(move |value| sink.set(value)));
        }

        App {
            picker,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            query,
            year_key: config.ui.field.clone(),
            year,
            goto_input: String::new(),
            trigger_area: Rect::default(),
            panel_area: None,
        }
    }

    pub fn picker_open(&self) -> bool {
        self.picker.as_ref().is_some_and(|p| p.is_open())
    }

    /// Number of rows the open panel shows
    pub fn panel_rows(&self) -> u16 {
        self.picker.as_ref().map_or(0, |p| {
            let config = p.config();
            (config.viewport / config.item_extent).round().max(1.0) as u16
        })
    }

    /// The host query with the picker's latest value filled in
    pub fn current_query(&self) -> SearchQuery {
        let mut query = self.query.clone();
        if self.picker.is_some() {
            query.year = Some(self.year.get());
        }
        query
    }

    pub fn query_string(&self) -> String {
        self.current_query().to_query_string_with(&self.year_key)
    }
}

/// Final state handed back to the caller after the TUI exits
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub year: Option<i64>,
    pub query: String,
}

/// Run the TUI application
pub fn run(config: &FileConfig, query: SearchQuery) -> Result<Outcome, Box<dyn std::error::Error>> {
    let mut app = App::new(config, query);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result?;
    let outcome = Outcome {
        year: app.picker.as_ref().map(|_| app.year.get()),
        query: app.query_string(),
    };
    info!(query = %outcome.query, "session finished");
    Ok(outcome)
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
