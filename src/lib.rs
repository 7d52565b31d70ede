//! # Introduction
//!
//! algotty animates classic search and sort algorithms one step at a time.
//! Each algorithm is a lazy sequence of frames; a step driver pulls them on a
//! timer and hands each one to a visualizer, and the result is drawn in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Registry → Params → Runner → Frames → Step Driver → Visualizer → Canvas (TUI / headless)
//! ```
//!
//! 1. [`registry`]: algorithm metadata: id, name, topic, parameter schema,
//!    runner constructor and visualizer.
//! 2. [`params`]: parses raw field text into typed [`params::Params`]; numbers are
//!    [`value::Value`]s, decimals included.
//! 3. [`algorithms`]: the runners: explicit state machines implementing
//!    [`algorithms::FrameSequence`].
//! 4. [`visual`]: the [`visual::Frame`] and [`visual::VisualCommand`] model
//!    and the generic array visualizer.
//! 5. [`driver`]: the Idle/Running/Paused state machine that paces a run.
//! 6. [`snapshot`]: memory-bounded history of presented frames.
//! 7. [`ui`] and [`headless`]: the two canvases; the TUI is not part of the
//!    stable library API.
//!
//! ## Algorithms
//!
//! Searching: linear search, binary search.
//! Sorting: bubble sort (early exit), selection sort, insertion sort,
//! quick sort (last-element pivot, Lomuto partition).

pub mod algorithms;
pub mod config;
pub mod driver;
pub mod headless;
pub mod params;
pub mod registry;
pub mod snapshot;
pub mod ui;
pub mod value;
pub mod visual;
