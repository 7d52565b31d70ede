//! Frame and command model
//!
//! - [`command`]: declarative [`VisualCommand`]s and their constructors
//! - [`style`]: cell styles and the last-write-wins merge over them
//! - [`frame`]: the [`Frame`] emitted by runners and the terminal [`Outcome`]
//! - [`view`]: the generic visualizer turning frames into [`ArrayView`]s
//! - [`palette`]: named colors

pub mod command;
pub mod frame;
pub mod palette;
pub mod style;
pub mod view;

pub use command::{CommandKind, VisualCommand};
pub use frame::{Frame, Message, Outcome};
pub use style::{CellStyle, StylePatch, DEFAULT_CELL_STYLE};
pub use view::{visualize_array, ArrayView, Cell, Visualizer};
