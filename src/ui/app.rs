//! Main TUI application state and logic

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::sim::popup::PopupKind;
use crate::sim::{lock_sim, SharedSim};

/// Redraw interval; matches the original effect's ~16 fps cadence.
const TICK: Duration = Duration::from_millis(60);

/// Per-tick odds of the two ambient scare popups.
const CAMERA_POPUP_CHANCE: f64 = 0.01;
const NETWORK_POPUP_CHANCE: f64 = 0.008;

/// The main application state
pub struct App {
    sim: SharedSim,
    stop: Arc<AtomicBool>,
    frame_count: u64,
    last_tick: Instant,
    should_quit: bool,
}

impl App {
    /// Create a new app over the shared display state. `stop` is the flag
    /// the director thread polls; quitting raises it.
    pub fn new(sim: SharedSim, stop: Arc<AtomicBool>) -> Self {
        App {
            sim,
            stop,
            frame_count: 0,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    /// Run the render loop until the exit key is pressed.
    ///
    /// The stop flag is raised on every exit path, including I/O errors
    /// from the terminal, so the director never outlives the window.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let res = self.run_loop(terminal);
        self.stop.store(true, Ordering::Relaxed);
        res
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.last_tick.elapsed() >= TICK {
                self.tick();
                self.last_tick = Instant::now();
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so the animation keeps moving
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                                self.should_quit = true;
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance one animation frame: process jitter, popup expiry, and the
    /// occasional ambient scare popup.
    fn tick(&mut self) {
        let mut rng = rand::thread_rng();
        let mut sim = lock_sim(&self.sim);

        self.frame_count += 1;
        sim.procs.tick(self.frame_count, &mut rng);
        sim.popups.sweep(Instant::now());

        if rng.gen_bool(CAMERA_POPUP_CHANCE) {
            sim.popups.spawn(
                "SECURITY ALERT",
                "Unauthorized access detected in camera module.",
                PopupKind::Alert,
                &mut rng,
            );
        }
        if rng.gen_bool(NETWORK_POPUP_CHANCE) {
            sim.popups.spawn(
                "NETWORK",
                "Outgoing connection detected to 185.120.45.77:443",
                PopupKind::Info,
                &mut rng,
            );
        }
    }

    /// Render the four panels, the banner, and any popups on top.
    fn render(&mut self, frame: &mut Frame) {
        let mut rng = rand::thread_rng();
        let mut sim = lock_sim(&self.sim);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let pane_area = chunks[0];
        let banner_area = chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(pane_area);

        // Left column: terminal (top) | process monitor (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(columns[0]);

        // Right column: file scanner (top) | rain (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(columns[1]);

        super::panes::render_feed_pane(frame, left_rows[0], &sim.feed);
        super::panes::render_process_pane(frame, left_rows[1], &sim.procs);
        super::panes::render_scan_pane(frame, right_rows[0], &sim.files);
        super::panes::render_rain_pane(frame, right_rows[1], &mut sim.rain, &mut rng);
        super::panes::render_banner(frame, banner_area);
        super::panes::render_popups(frame, pane_area, &sim.popups);
    }
}
