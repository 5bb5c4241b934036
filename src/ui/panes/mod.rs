//! Stateless render functions for each visible panel.
//!
//! - [`feed`]: the fake terminal log
//! - [`files`]: the fake file scanner with the exfil gauge
//! - [`procs`]: the fake process monitor with the CPU bar
//! - [`rain`]: the matrix rain backdrop
//! - [`popup`]: short-lived dialog overlays, drawn last
//! - [`status`]: the one-line banner at the bottom

pub mod feed;
pub mod files;
pub mod popup;
pub mod procs;
pub mod rain;
pub mod status;

pub use feed::render_feed_pane;
pub use files::render_scan_pane;
pub use popup::render_popups;
pub use procs::render_process_pane;
pub use rain::render_rain_pane;
pub use status::render_banner;
