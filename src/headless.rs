//! Headless runs: one algorithm to completion, printed line by line
//!
//! Each frame becomes a row of cells followed by its narration. With color on,
//! cells carry their resolved style through crossterm; without it, styled
//! cells are bracketed (`[4]`), excluded cells parenthesized (`(4)`) and the
//! rest padded with spaces.

use crate::driver::{Canvas, Completion, DriverError, StepDriver};
use crate::registry::Registry;
use crate::visual::{ArrayView, Cell, DEFAULT_CELL_STYLE};
use crossterm::style::{Attribute, Color as TermColor, Stylize};
use ratatui::style::Color;
use rustc_hash::FxHashMap;
use std::io::{self, Write};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error("cannot write output: {0}")]
    Io(#[from] io::Error),

    #[error("run ended without a result")]
    NoResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessOptions {
    pub color: bool,
    /// Honor frame delays by sleeping between pulls
    pub delay: bool,
}

impl Default for HeadlessOptions {
    fn default() -> Self {
        HeadlessOptions {
            color: true,
            delay: true,
        }
    }
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
        Color::Black => TermColor::Black,
        Color::White => TermColor::White,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::Red => TermColor::DarkRed,
        Color::LightRed => TermColor::Red,
        Color::Green => TermColor::DarkGreen,
        Color::LightGreen => TermColor::Green,
        Color::Yellow => TermColor::DarkYellow,
        Color::LightYellow => TermColor::Yellow,
        Color::Blue => TermColor::DarkBlue,
        Color::LightBlue => TermColor::Blue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::LightMagenta => TermColor::Magenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::LightCyan => TermColor::Cyan,
        Color::Reset => TermColor::Reset,
    }
}

/// Writes each presented view as text
pub struct PrintCanvas<W: Write> {
    out: W,
    color: bool,
    /// First write failure; later frames are dropped
    error: Option<io::Error>,
}

impl<W: Write> PrintCanvas<W> {
    pub fn new(out: W, color: bool) -> Self {
        PrintCanvas {
            out,
            color,
            error: None,
        }
    }

    /// Surface the first write error, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn cell_text(&self, cell: &Cell, width: usize) -> String {
        let value = format!("{:^width$}", cell.value, width = width);
        if !self.color {
            let (open, close) = if cell.style.is_dimmed() {
                ('(', ')')
            } else if cell.style != DEFAULT_CELL_STYLE {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            return format!("{}{}{}", open, value, close);
        }

        let mut styled = format!(" {} ", value)
            .with(term_color(cell.style.color))
            .on(term_color(cell.style.background));
        if cell.style.bold {
            styled = styled.attribute(Attribute::Bold);
        }
        if cell.style.is_dimmed() {
            styled = styled.attribute(Attribute::Dim);
        }
        styled.to_string()
    }

    fn write_view(&mut self, view: &ArrayView) -> io::Result<()> {
        let width = view
            .cells
            .iter()
            .map(|c| c.value.to_string().len())
            .max()
            .unwrap_or(1);
        let row: Vec<String> = view.cells.iter().map(|c| self.cell_text(c, width)).collect();
        writeln!(self.out, "{}", row.join(" "))?;

        for message in view.message.iter().chain(view.completion.iter()) {
            let prefix = if view.is_terminal && view.completion.as_ref() == Some(message) {
                "=> "
            } else {
                "   "
            };
            match (self.color, message.color) {
                (true, Some(color)) => writeln!(
                    self.out,
                    "{}{}",
                    prefix,
                    message.text.as_str().with(term_color(color))
                )?,
                _ => writeln!(self.out, "{}{}", prefix, message.text)?,
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Canvas for PrintCanvas<W> {
    fn clear(&mut self) {}

    fn present(&mut self, view: ArrayView) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_view(&view) {
            self.error = Some(e);
        }
    }
}

/// Run `algorithm` to completion, printing every frame to `out`
pub fn run_headless<W: Write>(
    registry: Registry,
    algorithm: &str,
    inputs: &FxHashMap<String, String>,
    options: HeadlessOptions,
    out: W,
) -> Result<Completion, HeadlessError> {
    let mut driver = StepDriver::new(registry, PrintCanvas::new(out, options.color));
    driver.start_from_inputs(algorithm, inputs, Instant::now())?;

    while let Some(due) = driver.next_due() {
        if options.delay {
            let wait = due.saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
            driver.tick(Instant::now().max(due));
        } else {
            driver.tick(due);
        }
        if let Some(e) = driver.canvas_mut().take_error() {
            return Err(e.into());
        }
    }
    if let Some(e) = driver.canvas_mut().take_error() {
        return Err(e.into());
    }

    driver.completion().cloned().ok_or(HeadlessError::NoResult)
}
