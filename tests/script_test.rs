// End-to-end tests for the scripted narrative

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use hoaxterm::script::{Director, Pace};
use hoaxterm::sim::feed::FEED_CAPACITY;
use hoaxterm::sim::files::FileStatus;
use hoaxterm::sim::{lock_sim, SharedSim, SimState};

fn fresh_sim(seed: u64) -> (SharedSim, Arc<AtomicBool>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let sim = Arc::new(Mutex::new(SimState::new(&mut rng)));
    (sim, Arc::new(AtomicBool::new(false)))
}

#[test]
fn test_full_script_reaches_the_finale() {
    let (sim, stop) = fresh_sim(1);
    Director::seeded(Arc::clone(&sim), stop, Pace::instant(), 2).run();

    let sim = lock_sim(&sim);

    // Progress hit 100 before the closing sequence; it never decreases,
    // so Some(100) here means the upload completed.
    assert_eq!(sim.files.progress(), Some(100));

    // The countdown ran to its last second and the prank owned up.
    assert!(sim
        .feed
        .lines()
        .any(|l| l.text == "[ALERT] Self-destruct sequence in 1s"));
    assert_eq!(
        sim.feed.last().unwrap().text,
        "[NOTICE] This was a prank demo. No real harm done."
    );

    assert!(sim.feed.len() <= FEED_CAPACITY);
}

#[test]
fn test_statuses_stay_within_the_label_set() {
    let (sim, stop) = fresh_sim(3);
    Director::seeded(Arc::clone(&sim), stop, Pace::instant(), 4).run();

    let sim = lock_sim(&sim);
    let mut wrecked = 0;
    for path in sim.files.paths() {
        let status = sim.files.status_of(path);
        assert!(matches!(
            status,
            FileStatus::Ok | FileStatus::Sensitive | FileStatus::Encrypted | FileStatus::Erased
        ));
        assert!(["OK", "SENSITIVE", "ENCRYPTED", "ERASED"].contains(&status.label()));
        if matches!(status, FileStatus::Encrypted | FileStatus::Erased) {
            wrecked += 1;
        }
    }
    // The ransom stage samples at most 18 victims
    assert!(wrecked > 0);
    assert!(wrecked <= 18);
}

#[test]
fn test_ransom_stage_spawns_the_critical_popup() {
    let (sim, stop) = fresh_sim(5);
    Director::seeded(Arc::clone(&sim), stop, Pace::instant(), 6).run();

    let sim = lock_sim(&sim);
    assert!(sim.popups.iter().any(|p| p.title == "!!! CRITICAL !!!"));
}

#[test]
fn test_scan_window_advances_through_the_table() {
    let (sim, stop) = fresh_sim(7);
    Director::seeded(Arc::clone(&sim), stop, Pace::instant(), 8).run();

    let sim = lock_sim(&sim);
    // The scanner ended on the last row of the table
    assert!(sim.files.scan_index > 0);
    assert!(sim.files.scan_index < sim.files.len());
}

#[test]
fn test_raising_the_stop_flag_ends_the_script_promptly() {
    let (sim, stop) = fresh_sim(9);
    let director = Director::seeded(Arc::clone(&sim), Arc::clone(&stop), Pace::realtime(), 10);

    let started = Instant::now();
    let handle = thread::spawn(move || director.run());

    // Let it get into the intro typing, then pull the plug
    thread::sleep(Duration::from_millis(200));
    stop.store(true, Ordering::Relaxed);
    handle.join().expect("script thread panicked");

    // Well under the multi-minute runtime of the full script
    assert!(started.elapsed() < Duration::from_secs(2));

    // The script never got anywhere near the finale
    assert_ne!(lock_sim(&sim).files.progress(), Some(100));
}
