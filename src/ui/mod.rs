//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, the fixed-tick render loop, and the exit key
//! - **[`panes`]** — stateless render functions for each visible panel
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it over the shared
//! [`SimState`] and call [`App::run`] to start the render loop.
//!
//! [`SimState`]: crate::sim::SimState
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
