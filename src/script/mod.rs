//! The scripted "intrusion" narrative.
//!
//! A [`Director`] runs once on a background thread and replays a fixed,
//! time-delayed sequence of stages into the shared [`SimState`]: intro
//! lines typed character by character, a file scan, an upload progress
//! counter, a wave of fake encryptions, and a countdown. Every delay goes
//! through [`Director::pause`], which polls the stop flag in short slices
//! so closing the window tears the thread down promptly.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::sim::feed::Tone;
use crate::sim::files::{FileStatus, SCAN_WINDOW};
use crate::sim::popup::PopupKind;
use crate::sim::{lock_sim, SharedSim};

/// Interval at which a pause re-checks the stop flag.
const PAUSE_SLICE: Duration = Duration::from_millis(25);

/// Paths longer than this are clipped in log lines.
const PATH_CLIP: usize = 60;

/// How many files the ransom stage marks encrypted or erased.
const RANSOM_SAMPLE: usize = 18;

const INTRO: &[(&str, u64)] = &[
    ("[INIT] Bootstrapping remote exploit modules...", 20),
    ("[CORE] Establishing covert channel...", 30),
    ("[CORE] Exploit loaded: CVE-FAKE-2025", 20),
    ("[CORE] Gaining privileges: OK", 20),
    ("[SCAN] Enumerating local storage...", 20),
];

/// Global time scale for the script's delays. `instant` collapses every
/// delay to zero so tests can run the whole narrative in one call.
#[derive(Debug, Clone, Copy)]
pub struct Pace {
    scale: f64,
}

impl Pace {
    pub fn realtime() -> Self {
        Pace { scale: 1.0 }
    }

    pub fn instant() -> Self {
        Pace { scale: 0.0 }
    }

    fn scaled(self, base: Duration) -> Duration {
        base.mul_f64(self.scale)
    }
}

/// Plays the narrative into the shared state until it finishes or the
/// stop flag is raised.
pub struct Director {
    sim: SharedSim,
    stop: Arc<AtomicBool>,
    pace: Pace,
    rng: StdRng,
}

impl Director {
    pub fn new(sim: SharedSim, stop: Arc<AtomicBool>, pace: Pace) -> Self {
        Director {
            sim,
            stop,
            pace,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests.
    pub fn seeded(sim: SharedSim, stop: Arc<AtomicBool>, pace: Pace, seed: u64) -> Self {
        Director {
            sim,
            stop,
            pace,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run the whole script. Returns early, between delay slices, once the
    /// stop flag is raised.
    pub fn run(mut self) {
        let _ = self.intro()
            && self.scan()
            && self.exfil()
            && self.ransom()
            && self.countdown();
    }

    /// Sleep for `base` (scaled by the pace), polling the stop flag.
    /// Returns false if the script should abort.
    fn pause(&self, base: Duration) -> bool {
        let mut remaining = self.pace.scaled(base);
        loop {
            if self.stop.load(Ordering::Relaxed) {
                return false;
            }
            if remaining.is_zero() {
                return true;
            }
            let slice = remaining.min(PAUSE_SLICE);
            std::thread::sleep(slice);
            remaining -= slice;
        }
    }

    /// Append `text` one character at a time, showing a trailing `_`
    /// cursor on the provisional line.
    fn type_line(&mut self, text: &str, tone: Tone, char_delay: Duration) -> bool {
        let mut buf = String::with_capacity(text.len() + 1);
        let mut started = false;
        for ch in text.chars() {
            buf.push(ch);
            {
                let mut sim = lock_sim(&self.sim);
                if started {
                    sim.feed.pop();
                }
                sim.feed.push(format!("{}_", buf), tone);
            }
            started = true;
            if !self.pause(char_delay) {
                break;
            }
        }
        let mut sim = lock_sim(&self.sim);
        if started {
            sim.feed.pop();
        }
        sim.feed.push(text, tone);
        drop(sim);
        !self.stop.load(Ordering::Relaxed)
    }

    fn say(&self, text: impl Into<String>, tone: Tone) {
        lock_sim(&self.sim).feed.push(text, tone);
    }

    fn intro(&mut self) -> bool {
        for &(line, delay_ms) in INTRO {
            if !self.type_line(line, Tone::Trace, Duration::from_millis(delay_ms)) {
                return false;
            }
            if !self.pause(Duration::from_millis(350)) {
                return false;
            }
        }
        true
    }

    /// Walk the file table in panel-sized rows, occasionally flagging a
    /// file as sensitive.
    fn scan(&mut self) -> bool {
        let paths = lock_sim(&self.sim).files.paths().to_vec();
        for (row_start, row) in paths.chunks(SCAN_WINDOW).enumerate().map(|(i, c)| (i * SCAN_WINDOW, c)) {
            lock_sim(&self.sim).files.scan_index = row_start;
            for path in row {
                self.say(format!("> scanning {}", clip(path)), Tone::Trace);
                if self.rng.gen_bool(0.07) {
                    let mut sim = lock_sim(&self.sim);
                    sim.files.set_status(path, FileStatus::Sensitive);
                    sim.feed.push(
                        format!("  -> SENSITIVE DATA FOUND: {}", basename(path)),
                        Tone::Warn,
                    );
                }
                let jitter = Duration::from_millis(60 + self.rng.gen_range(0..60));
                if !self.pause(jitter) {
                    return false;
                }
            }
            if !self.pause(Duration::from_millis(300)) {
                return false;
            }
        }
        true
    }

    /// Drive the upload percentage from 0 to 100.
    fn exfil(&mut self) -> bool {
        self.say("[EXFIL] Preparing data transfer stream...", Tone::Trace);
        for pct in 0..=100u8 {
            {
                let mut sim = lock_sim(&self.sim);
                sim.files.set_progress(pct);
                sim.feed
                    .push(format!("[EXFIL] Uploading... {}%", pct), Tone::Bright);
                if pct % 7 == 0 {
                    sim.feed.push("> NET: SYN ACK ...", Tone::Net);
                }
            }
            if !self.pause(Duration::from_millis(50)) {
                return false;
            }
        }
        true
    }

    /// Mark a random sample of files encrypted or erased, then drop the
    /// "payload deployed" line and the big popup.
    fn ransom(&mut self) -> bool {
        let paths = lock_sim(&self.sim).files.paths().to_vec();
        let victims: Vec<String> = paths
            .choose_multiple(&mut self.rng, RANSOM_SAMPLE.min(paths.len()))
            .cloned()
            .collect();
        for path in victims {
            let status = if self.rng.gen_bool(0.5) {
                FileStatus::Encrypted
            } else {
                FileStatus::Erased
            };
            {
                let mut sim = lock_sim(&self.sim);
                sim.files.set_status(&path, status);
                sim.feed
                    .push(format!("[!!!] {} -> {}", path, status.label()), Tone::Alert);
            }
            if self.rng.gen_bool(0.3) {
                bell();
            }
            if !self.pause(Duration::from_millis(80)) {
                return false;
            }
        }
        self.say(
            ">>> PAYLOAD DEPLOYED - CHECK INSTRUCTIONS ON DARKNET",
            Tone::Alert,
        );
        lock_sim(&self.sim).popups.spawn(
            "!!! CRITICAL !!!",
            "All user documents encrypted. Payment required. (FAKE)",
            PopupKind::Alert,
            &mut self.rng,
        );
        true
    }

    fn countdown(&mut self) -> bool {
        for t in (1..=10u32).rev() {
            self.say(
                format!("[ALERT] Self-destruct sequence in {}s", t),
                Tone::Alert,
            );
            if !self.pause(Duration::from_secs(1)) {
                return false;
            }
        }
        self.say(
            "[NOTICE] This was a prank demo. No real harm done.",
            Tone::Notice,
        );
        true
    }
}

fn clip(path: &str) -> &str {
    path.get(..PATH_CLIP).unwrap_or(path)
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Best-effort terminal bell; failures are irrelevant here.
fn bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
