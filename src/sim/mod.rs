//! In-memory display state shared between the director thread and the UI.
//!
//! Everything here is ephemeral display data regenerated on each run:
//! synthetic file paths, made-up processes, a bounded log feed, rain
//! drops, and popup records.

pub mod feed;
pub mod files;
pub mod popup;
pub mod procs;
pub mod rain;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::Rng;

use feed::Feed;
use files::FileTable;
use popup::Popups;
use procs::ProcessTable;
use rain::Rain;

/// All display state mutated by the director and read by the render loop.
pub struct SimState {
    pub feed: Feed,
    pub files: FileTable,
    pub procs: ProcessTable,
    pub rain: Rain,
    pub popups: Popups,
}

impl SimState {
    pub fn new(rng: &mut impl Rng) -> Self {
        SimState {
            feed: Feed::new(),
            files: FileTable::generate(rng),
            procs: ProcessTable::new(rng),
            rain: Rain::new(),
            popups: Popups::new(),
        }
    }
}

/// Handle shared by the two loops.
pub type SharedSim = Arc<Mutex<SimState>>;

/// Lock the shared state, recovering from poisoning.
///
/// If the other thread panicked mid-update the worst case is one garbled
/// frame of a prank animation, so the guard is always usable.
pub fn lock_sim(sim: &SharedSim) -> MutexGuard<'_, SimState> {
    sim.lock().unwrap_or_else(PoisonError::into_inner)
}
