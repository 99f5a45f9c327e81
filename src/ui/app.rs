//! Main TUI application state and logic

use crate::interpreter::engine::{StepOutcome, Stepper};
use crate::interpreter::errors::StepError;
use crate::ui::sink::TuiSink;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Fastest and slowest selectable move duration
const MIN_MOVE_MS: u64 = 10;
const MAX_MOVE_MS: u64 = 5_000;

/// Which pane of a lane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Array,
    Pseudocode,
    Stack,
}

impl FocusedPane {
    /// Move focus to the next pane; `None` when moving past the last one
    pub fn next(self) -> Option<Self> {
        match self {
            FocusedPane::Array => Some(FocusedPane::Pseudocode),
            FocusedPane::Pseudocode => Some(FocusedPane::Stack),
            FocusedPane::Stack => None,
        }
    }
}

/// One algorithm running in its own column
pub struct Lane {
    pub stepper: Stepper<TuiSink>,
    pub pseudocode_scroll: usize,
    pub stack_scroll: usize,
}

impl Lane {
    pub fn new(stepper: Stepper<TuiSink>) -> Self {
        Lane {
            stepper,
            pseudocode_scroll: 0,
            stack_scroll: 0,
        }
    }
}

/// The main application state
pub struct App {
    /// One lane per algorithm; two in versus mode
    pub lanes: Vec<Lane>,

    pub focused_lane: usize,
    pub focused_pane: FocusedPane,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub is_error: bool,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Duration of one animated move in milliseconds
    pub move_ms: u64,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app over the given steppers, all using `move_ms`
    pub fn new(steppers: Vec<Stepper<TuiSink>>, move_ms: u64) -> Self {
        let mut app = App {
            lanes: steppers.into_iter().map(Lane::new).collect(),
            focused_lane: 0,
            focused_pane: FocusedPane::Array,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_error: false,
            is_playing: false,
            move_ms,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        app.set_move_ms(move_ms);
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            for lane in &mut self.lanes {
                lane.stepper.sink_mut().tick();
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Auto-play waits for moves in flight before the next step
            if self.is_playing
                && !self.is_moving()
                && self.last_play_time.elapsed() >= Duration::from_millis(self.move_ms)
            {
                match self.step_forward_all() {
                    Ok(true) => self.set_status("Playing..."),
                    Ok(false) => {
                        self.is_playing = false;
                        self.set_status("Playback complete");
                    }
                    Err(e) => {
                        self.is_playing = false;
                        self.set_error(&e);
                    }
                }
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn is_moving(&self) -> bool {
        self.lanes.iter().any(|lane| lane.stepper.sink().is_moving())
    }

    pub fn is_finished(&self) -> bool {
        self.lanes.iter().all(|lane| lane.stepper.is_finished())
    }

    pub fn is_at_start(&self) -> bool {
        self.lanes.iter().all(|lane| lane.stepper.is_at_start())
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = false;
    }

    fn set_error(&mut self, error: &StepError) {
        self.status_message = format!("Error: {}", error);
        self.is_error = true;
    }

    fn set_move_ms(&mut self, move_ms: u64) {
        self.move_ms = move_ms.clamp(MIN_MOVE_MS, MAX_MOVE_MS);
        let duration = Duration::from_millis(self.move_ms);
        for lane in &mut self.lanes {
            lane.stepper.sink_mut().set_move_duration(duration);
        }
    }

    /// Step every lane forward; `Ok(false)` once all of them are finished
    pub fn step_forward_all(&mut self) -> Result<bool, StepError> {
        let mut stepped = false;
        for lane in &mut self.lanes {
            if lane.stepper.step_forward()? == StepOutcome::Stepped {
                stepped = true;
            }
        }
        Ok(stepped)
    }

    /// Step every lane backward; `Ok(false)` once all of them are at the start
    pub fn step_backward_all(&mut self) -> Result<bool, StepError> {
        let mut stepped = false;
        for lane in &mut self.lanes {
            if lane.stepper.step_backward()? == StepOutcome::Stepped {
                stepped = true;
            }
        }
        Ok(stepped)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let lane_count = self.lanes.len().max(1) as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..lane_count).map(|_| Constraint::Ratio(1, lane_count)))
            .split(main_chunks[0]);

        for (index, (lane, area)) in self.lanes.iter_mut().zip(columns.iter()).enumerate() {
            let focus = (index == self.focused_lane).then_some(self.focused_pane);
            render_lane(frame, *area, lane, focus);
        }

        let current_step = self
            .lanes
            .get(self.focused_lane)
            .map_or(0, |lane| lane.stepper.history_len() - 1);
        let is_at_end = self.is_finished();
        let is_at_start = self.is_at_start();
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                current_step,
                move_ms: self.move_ms,
                is_error: self.is_error,
                is_playing: self.is_playing,
                is_at_start,
                is_at_end,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let mut stepped = 0;
                for _ in 0..n {
                    match self.step_forward_all() {
                        Ok(true) => stepped += 1,
                        Ok(false) => break,
                        Err(e) => {
                            self.set_error(&e);
                            return;
                        }
                    }
                }
                self.set_status(format!("Stepped forward {} step(s)", stepped));
            }
            KeyCode::Tab => {
                match self.focused_pane.next() {
                    Some(pane) => self.focused_pane = pane,
                    None => {
                        self.focused_pane = FocusedPane::Array;
                        self.focused_lane = (self.focused_lane + 1) % self.lanes.len().max(1);
                    }
                }
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up | KeyCode::Down => {
                let up = key.code == KeyCode::Up;
                if let Some(lane) = self.lanes.get_mut(self.focused_lane) {
                    let scroll = match self.focused_pane {
                        FocusedPane::Pseudocode => &mut lane.pseudocode_scroll,
                        FocusedPane::Stack => &mut lane.stack_scroll,
                        FocusedPane::Array => return,
                    };
                    *scroll = if up {
                        scroll.saturating_sub(1)
                    } else {
                        scroll.saturating_add(1)
                    };
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_move_ms(self.move_ms / 2);
                self.set_status(format!("Move time {}ms", self.move_ms));
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                self.set_move_ms(self.move_ms.saturating_mul(2));
                self.set_status(format!("Move time {}ms", self.move_ms));
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        self.last_play_time = Instant::now()
                            .checked_sub(Duration::from_millis(self.move_ms))
                            .unwrap_or(Instant::now());
                        self.set_status("Playing...");
                    } else {
                        self.set_status("Paused");
                    }
                }
            }
            KeyCode::Enter => {
                // Jump to end of execution
                self.is_playing = false;
                let result: Result<usize, StepError> = self
                    .lanes
                    .iter_mut()
                    .try_fold(0, |most, lane| Ok(most.max(lane.stepper.run_to_end()?)));
                match result {
                    Ok(_) => self.set_status("Jumped to end"),
                    Err(e) => self.set_error(&e),
                }
            }
            KeyCode::Backspace => {
                // Jump to start of execution
                self.is_playing = false;
                let result: Result<usize, StepError> = self
                    .lanes
                    .iter_mut()
                    .try_fold(0, |most, lane| Ok(most.max(lane.stepper.rewind_to_start()?)));
                match result {
                    Ok(_) => self.set_status("Jumped to start"),
                    Err(e) => self.set_error(&e),
                }
            }
            _ => {}
        }
    }

    /// Step forward in execution
    fn step_forward(&mut self) {
        match self.step_forward_all() {
            Ok(true) => self.set_status("Stepped forward"),
            Ok(false) => self.set_status("Cannot step forward: sorting finished"),
            Err(e) => self.set_error(&e),
        }
    }

    /// Step backward in execution
    fn step_backward(&mut self) {
        match self.step_backward_all() {
            Ok(true) => self.set_status("Stepped backward"),
            Ok(false) => self.set_status("Cannot step backward: already at the start"),
            Err(e) => self.set_error(&e),
        }
    }
}

/// Render one lane: array on top, pseudocode and call stack (plus buckets) below
fn render_lane(frame: &mut Frame, area: Rect, lane: &mut Lane, focus: Option<FocusedPane>) {
    let Lane {
        stepper,
        pseudocode_scroll,
        stack_scroll,
    } = lane;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let algorithm = stepper.algorithm();
    let sink = stepper.sink();
    let title = format!(
        "{} sort │ {} comparisons │ {} swaps",
        algorithm, sink.comparisons, sink.swaps
    );

    super::panes::render_array_pane(
        frame,
        rows[0],
        super::panes::ArrayRenderData {
            title: &title,
            array: stepper.array(),
            sink,
        },
        focus == Some(FocusedPane::Array),
    );

    super::panes::render_pseudocode_pane(
        frame,
        bottom[0],
        super::panes::PseudocodeRenderData {
            pseudocode: algorithm.pseudocode(),
            current: sink.line,
            extra: &sink.extra,
            finished: sink.finished,
        },
        focus == Some(FocusedPane::Pseudocode),
        pseudocode_scroll,
    );

    let stack_area = if sink.show_buckets {
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(12)])
            .split(bottom[1]);
        super::panes::render_buckets_pane(frame, right[1], stepper.array().buckets(), sink, false);
        right[0]
    } else {
        bottom[1]
    };

    super::panes::render_stack_pane(
        frame,
        stack_area,
        super::panes::StackRenderData {
            snapshot: stepper.current(),
            pseudocode: algorithm.pseudocode(),
        },
        focus == Some(FocusedPane::Stack),
        stack_scroll,
    );
}
