//! # Introduction
//!
//! hoaxterm fills the terminal with a convincing-looking but entirely fake
//! intrusion: matrix rain, a typing "attacker" terminal, a file scanner,
//! a process monitor, and scare popups.  It never touches files, sockets,
//! or real processes.  Press Esc (or `q`) to end the prank instantly.
//!
//! ## How it runs
//!
//! ```text
//! Director thread ──mutates──► SimState ◄──reads── UI tick loop
//! ```
//!
//! 1. [`sim`] — the shared in-memory display state: a bounded log
//!    [`sim::feed::Feed`], synthetic [`sim::files::FileTable`] entries,
//!    fake [`sim::procs::ProcessTable`] rows, rain drops, and popups.
//! 2. [`script`] — the [`script::Director`] plays a fixed, time-delayed
//!    narrative (scan, exfil, "encryption", countdown) on a background
//!    thread, checking a stop flag between every delay slice.
//! 3. [`ui`] — ratatui-based render loop redrawing four panels plus a
//!    banner on a fixed tick.
//!
//! All content is generated from fixed word lists and a RNG at startup
//! and discarded on exit.

pub mod script;
pub mod sim;
pub mod ui;
