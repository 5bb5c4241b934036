//! Fake process monitor data.
//!
//! A fixed roster of plausible process names with simulated CPU numbers.
//! The system-wide figure follows a slow sine wave so the bar visibly
//! "breathes" instead of flickering.

use rand::Rng;

/// Name and baseline CPU percentage for each fake process.
const ROSTER: &[(&str, f64)] = &[
    ("ssh", 2.0),
    ("chrome", 18.0),
    ("discord", 5.0),
    ("dropbox", 1.0),
    ("cameraSvc", 2.0),
    ("walletd", 0.5),
    ("backupd", 0.3),
    ("sysmon", 1.0),
];

#[derive(Debug, Clone)]
pub struct FakeProcess {
    pub name: &'static str,
    pub pid: u32,
    base_cpu: f64,
    pub cpu: f64,
}

pub struct ProcessTable {
    processes: Vec<FakeProcess>,
    /// Simulated whole-system CPU percentage, 0..=100.
    pub system_cpu: f64,
}

impl ProcessTable {
    pub fn new(rng: &mut impl Rng) -> Self {
        let processes = ROSTER
            .iter()
            .map(|&(name, base_cpu)| FakeProcess {
                name,
                pid: 1000 + rng.gen_range(1..=9000),
                base_cpu,
                cpu: base_cpu,
            })
            .collect();
        ProcessTable {
            processes,
            system_cpu: 5.0,
        }
    }

    pub fn processes(&self) -> &[FakeProcess] {
        &self.processes
    }

    /// Advance one animation frame: jitter per-process CPU and move the
    /// system figure along its wave.
    pub fn tick(&mut self, frame: u64, rng: &mut impl Rng) {
        for entry in &mut self.processes {
            entry.cpu = entry.base_cpu + rng.gen::<f64>() * 8.0;
        }
        self.system_cpu =
            10.0 + 30.0 * (frame as f64 * 0.03).sin().abs() + rng.gen::<f64>() * 5.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cpu_values_stay_sane() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut table = ProcessTable::new(&mut rng);

        for frame in 0..1000 {
            table.tick(frame, &mut rng);
            assert!(table.system_cpu.is_finite());
            assert!((10.0..=45.0).contains(&table.system_cpu));
            for entry in table.processes() {
                assert!(entry.cpu.is_finite());
                assert!(entry.cpu >= entry.base_cpu);
                assert!(entry.cpu <= entry.base_cpu + 8.0);
            }
        }
    }

    #[test]
    fn test_pids_are_assigned_once() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut table = ProcessTable::new(&mut rng);
        let pids: Vec<u32> = table.processes().iter().map(|p| p.pid).collect();

        table.tick(1, &mut rng);
        let after: Vec<u32> = table.processes().iter().map(|p| p.pid).collect();
        assert_eq!(pids, after);
        for pid in pids {
            assert!((1001..=10000).contains(&pid));
        }
    }
}
