//! Main TUI application state and logic

use crate::config::Config;
use crate::driver::{DriverState, StepDriver};
use crate::registry::{AlgorithmMeta, Registry};
use crate::snapshot::SnapshotManager;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use super::panes::{
    render_array_pane, render_menu_pane, render_params_pane, render_status_bar, ArrayRenderData,
    MenuRenderData, ParamsRenderData, StatusRenderData,
};

/// Longest wait for input while nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Menu,
    Params,
    Array,
}

impl FocusedPane {
    /// Move focus to the next pane (menu -> params -> array)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Menu => FocusedPane::Params,
            FocusedPane::Params => FocusedPane::Array,
            FocusedPane::Array => FocusedPane::Menu,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Menu => FocusedPane::Array,
            FocusedPane::Params => FocusedPane::Menu,
            FocusedPane::Array => FocusedPane::Params,
        }
    }
}

/// The main application state
pub struct App {
    driver: StepDriver<SnapshotManager>,
    config: Config,

    /// Algorithm ids in menu order (grouped by topic)
    menu: Vec<&'static str>,
    pub menu_cursor: usize,

    /// Algorithm loaded into the parameter pane
    active: &'static str,

    /// Field text by parameter id
    inputs: FxHashMap<String, String>,
    field: usize,
    /// Edit buffer while a field is being edited
    editing: Option<String>,

    pub focused_pane: FocusedPane,
    pub menu_scroll: usize,
    pub array_scroll: usize,

    /// Position in the frame history, `None` while following the live frame
    history_cursor: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,

    pub status_message: String,
    status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create the app with the given algorithms, starting on the configured
    /// initial algorithm
    pub fn new(registry: Registry, config: Config) -> Self {
        let menu: Vec<&'static str> = registry
            .topics()
            .iter()
            .flat_map(|group| group.algorithms.iter().map(|meta| meta.id))
            .collect();
        let menu_cursor = menu
            .iter()
            .position(|id| *id == config.initial_algorithm)
            .unwrap_or(0);

        let history = SnapshotManager::new(config.history_limit_bytes);
        let driver = StepDriver::new(registry, history).with_default_delay(config.default_delay());

        let mut app = App {
            driver,
            config,
            active: menu.get(menu_cursor).copied().unwrap_or_default(),
            menu,
            menu_cursor,
            inputs: FxHashMap::default(),
            field: 0,
            editing: None,
            focused_pane: FocusedPane::Menu,
            menu_scroll: 0,
            array_scroll: 0,
            history_cursor: None,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        };
        app.load_algorithm(app.active);
        app
    }

    pub fn driver(&self) -> &StepDriver<SnapshotManager> {
        &self.driver
    }

    pub fn active_algorithm(&self) -> &'static str {
        self.active
    }

    pub fn inputs(&self) -> &FxHashMap<String, String> {
        &self.inputs
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Sleep until input arrives or the next frame is due
            if event::poll(self.poll_timeout(Instant::now()))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            self.tick(Instant::now());
        }

        Ok(())
    }

    /// How long the event loop may block before the driver needs a tick
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.driver
            .next_due()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now))
            .min(IDLE_POLL)
    }

    /// Let the driver deliver a due frame
    pub fn tick(&mut self, now: Instant) -> bool {
        let delivered = self.driver.tick(now);
        if delivered {
            self.after_pull();
        }
        delivered
    }

    fn meta(&self) -> Option<&AlgorithmMeta> {
        self.driver.registry().get(self.active).ok()
    }

    fn name(&self) -> &'static str {
        self.meta().map_or("algorithm", |meta| meta.name)
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Load `id` into the parameter pane with its configured field values
    fn load_algorithm(&mut self, id: &'static str) {
        self.active = id;
        self.field = 0;
        self.editing = None;
        self.inputs = match self.driver.registry().get(id) {
            Ok(meta) => self.config.inputs_for(id, meta.params),
            Err(_) => FxHashMap::default(),
        };
    }

    /// Switch to the algorithm under the menu cursor. Any run is discarded.
    fn select_at_cursor(&mut self) {
        let Some(&id) = self.menu.get(self.menu_cursor) else {
            return;
        };
        self.stop_run();
        self.load_algorithm(id);
        debug!(algorithm = id, "algorithm selected");
        self.set_status(format!("Selected {}", self.name()));
    }

    fn start(&mut self) {
        self.editing = None;
        match self
            .driver
            .start_from_inputs(self.active, &self.inputs, Instant::now())
        {
            Ok(()) => {
                self.history_cursor = None;
                self.array_scroll = 0;
                self.set_status(format!("Running {}", self.name()));
                self.after_pull();
            }
            Err(e) => {
                warn!(algorithm = self.active, error = %e, "start rejected");
                self.set_error(e.to_string());
            }
        }
    }

    fn pause(&mut self) {
        if self.driver.pause() {
            self.set_status("Paused");
        }
    }

    fn resume(&mut self) {
        if self.driver.resume(Instant::now()) {
            self.history_cursor = None;
            self.set_status(format!("Running {}", self.name()));
            self.after_pull();
        }
    }

    fn toggle(&mut self) {
        match self.driver.state() {
            DriverState::Running => self.pause(),
            DriverState::Paused => self.resume(),
            DriverState::Idle => self.set_status("Press s to start"),
        }
    }

    /// Discard the run and its history
    fn stop_run(&mut self) -> bool {
        let stopped = self.driver.stop();
        self.driver.canvas_mut().clear();
        self.history_cursor = None;
        self.array_scroll = 0;
        stopped
    }

    /// Status update after the driver presented a frame
    fn after_pull(&mut self) {
        if !self.driver.is_finished() {
            return;
        }
        if let Some(completion) = self.driver.completion() {
            let message = format!(
                "{} finished in {} frames, result {}",
                self.name(),
                completion.frames,
                completion.outcome
            );
            self.set_status(message);
        }
    }

    fn history_back(&mut self) {
        if self.driver.state() == DriverState::Running {
            self.driver.pause();
        }
        let len = self.driver.canvas().len();
        if len == 0 {
            return;
        }
        match self.history_cursor.unwrap_or(len - 1) {
            0 => self.set_status("At oldest recorded frame"),
            current => {
                self.history_cursor = Some(current - 1);
                self.set_status("Reviewing history");
            }
        }
    }

    fn history_forward(&mut self) {
        let len = self.driver.canvas().len();
        match self.history_cursor {
            Some(i) if i + 2 < len => self.history_cursor = Some(i + 1),
            Some(_) => {
                self.history_cursor = None;
                self.set_status("At newest frame");
            }
            None if self.driver.state() == DriverState::Paused => {
                if self.driver.step(Instant::now()) {
                    self.set_status("Stepped forward");
                    self.after_pull();
                }
            }
            None => {}
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(main_chunks[0]);

        let param_rows = self.meta().map_or(0, |meta| meta.params.len()) as u16;
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(param_rows + 8), Constraint::Min(0)])
            .split(columns[1]);

        let topics = self.driver.registry().topics();
        render_menu_pane(
            frame,
            columns[0],
            &MenuRenderData {
                topics: &topics,
                cursor: self.menu_cursor,
                active: self.active,
            },
            self.focused_pane == FocusedPane::Menu,
            &mut self.menu_scroll,
        );

        if let Ok(meta) = self.driver.registry().get(self.active) {
            render_params_pane(
                frame,
                right_rows[0],
                &ParamsRenderData {
                    meta,
                    inputs: &self.inputs,
                    field: self.field,
                    editing: self.editing.as_deref(),
                    completion: self.driver.completion(),
                },
                self.focused_pane == FocusedPane::Params,
            );
        }

        // the history entry under the cursor, or the newest
        let history = self.driver.canvas();
        let displayed = match self.history_cursor {
            Some(i) => history.get(i),
            None => history.latest(),
        };
        render_array_pane(
            frame,
            right_rows[1],
            &ArrayRenderData {
                view: displayed.map(|s| &s.view),
                position: displayed.map(|s| (s.frame_index, history.recorded())),
                is_review: self.history_cursor.is_some(),
            },
            self.focused_pane == FocusedPane::Array,
            &mut self.array_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                state: self.driver.state(),
                is_finished: self.driver.is_finished(),
                is_review: self.history_cursor.is_some(),
                is_editing: self.editing.is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Menu => {
                    self.menu_cursor = self.menu_cursor.saturating_sub(1);
                }
                FocusedPane::Params => {
                    self.field = self.field.saturating_sub(1);
                }
                FocusedPane::Array => {
                    self.array_scroll = self.array_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Menu => {
                    if self.menu_cursor + 1 < self.menu.len() {
                        self.menu_cursor += 1;
                    }
                }
                FocusedPane::Params => {
                    let fields = self.meta().map_or(0, |meta| meta.params.len());
                    if self.field + 1 < fields {
                        self.field += 1;
                    }
                }
                FocusedPane::Array => {
                    self.array_scroll = self.array_scroll.saturating_add(1);
                }
            },
            KeyCode::Enter => match self.focused_pane {
                FocusedPane::Menu => self.select_at_cursor(),
                FocusedPane::Params => self.begin_edit(),
                FocusedPane::Array => {}
            },
            KeyCode::Char('s') => self.start(),
            KeyCode::Char('p') => self.pause(),
            KeyCode::Char('r') => self.resume(),
            KeyCode::Char(' ') => {
                // 200ms debounce against key repeat
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle();
                }
            }
            KeyCode::Char('x') => {
                if self.stop_run() {
                    self.set_status("Stopped");
                }
            }
            KeyCode::Left => self.history_back(),
            KeyCode::Right => self.history_forward(),
            _ => {}
        }
    }

    fn begin_edit(&mut self) {
        let Some(spec) = self.meta().and_then(|meta| meta.params.get(self.field)).copied() else {
            return;
        };
        self.editing = Some(self.inputs.get(spec.id).cloned().unwrap_or_default());
        self.set_status(format!("Editing {}", spec.label));
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.editing.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Enter => {
                let value = std::mem::take(buffer);
                self.editing = None;
                let spec = self.meta().and_then(|meta| meta.params.get(self.field)).copied();
                if let Some(spec) = spec {
                    match spec.parse(&value) {
                        Ok(_) => self.set_status(format!("{} updated", spec.label)),
                        Err(e) => {
                            warn!(param = spec.id, error = %e, "invalid field value");
                            self.set_error(e.to_string());
                        }
                    }
                    self.inputs.insert(spec.id.to_string(), value);
                }
            }
            KeyCode::Esc => {
                self.editing = None;
                self.set_status("Edit cancelled");
            }
            _ => {}
        }
    }
}
