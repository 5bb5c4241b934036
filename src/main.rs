// hoaxterm: a harmless full-screen fake-hacking prank. Esc quits.

mod script;
mod sim;
mod ui;

use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::thread;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use script::{Director, Pace};
use sim::SimState;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // All content is synthetic and generated up front
    let state = SimState::new(&mut rand::thread_rng());
    let sim = Arc::new(Mutex::new(state));
    let stop = Arc::new(AtomicBool::new(false));

    let director = Director::new(Arc::clone(&sim), Arc::clone(&stop), Pace::realtime());
    let script_thread = thread::spawn(move || director.run());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(sim, Arc::clone(&stop));
    let res = app.run(&mut terminal);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // App::run raised the stop flag; the director notices within one
    // pause slice
    if script_thread.join().is_err() {
        eprintln!("Warning: script thread panicked");
    }

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
