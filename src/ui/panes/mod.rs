//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`menu`]: Algorithm list grouped by topic
//! - [`params`]: Description, editable parameter fields and the return value
//! - [`array`]: The visualized frame: cells, index ruler, narration, legend
//! - [`status`]: Status bar with keybindings and run state
//! - `utils`: Shared block and scroll helpers
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function taking a
//! `*RenderData` borrow of app state. Panes keep no state of their own beyond
//! the scroll offsets the app passes in.

mod utils;

pub mod array;
pub mod menu;
pub mod params;
pub mod status;

// Re-export render functions for convenience
pub use array::{render_array_pane, ArrayRenderData};
pub use menu::{render_menu_pane, MenuRenderData};
pub use params::{render_params_pane, ParamsRenderData};
pub use status::{render_status_bar, StatusRenderData};
