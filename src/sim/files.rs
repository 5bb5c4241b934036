//! Synthetic file paths and their fake scan status.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;

/// Number of fake paths generated at startup.
pub const FILE_COUNT: usize = 69;

/// Rows of the file panel shown (and scanned) at a time.
pub const SCAN_WINDOW: usize = 12;

const FOLDERS: &[&str] = &[
    "Documents",
    "Pictures",
    "Desktop",
    "Wallets",
    "Backups",
    "Downloads",
    "Secrets",
];

const BASENAMES: &[&str] = &[
    "tax", "invoice", "id", "photo", "wallet", "notes", "pass", "ssn", "backup",
];

const EXTENSIONS: &[&str] = &[
    ".docx", ".pdf", ".jpg", ".png", ".csv", ".xlsx", ".txt", ".db",
];

/// Status label attached to each fake path. This is the complete set;
/// nothing else is ever displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Ok,
    Sensitive,
    Encrypted,
    Erased,
}

impl FileStatus {
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Ok => "OK",
            FileStatus::Sensitive => "SENSITIVE",
            FileStatus::Encrypted => "ENCRYPTED",
            FileStatus::Erased => "ERASED",
        }
    }

    /// Whether the scanner display should flag this entry in red.
    pub fn is_flagged(self) -> bool {
        self != FileStatus::Ok
    }
}

/// The fake scanner's model: generated paths, a status per path, the
/// current scan window, and the exfil progress percentage.
pub struct FileTable {
    paths: Vec<String>,
    status: FxHashMap<String, FileStatus>,
    /// Start of the window currently shown in the scanner panel.
    pub scan_index: usize,
    progress: Option<u8>,
}

impl FileTable {
    /// Generate a believable-looking set of home-directory paths.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut paths = Vec::with_capacity(FILE_COUNT);
        for _ in 0..FILE_COUNT {
            // the word lists are non-empty
            let folder = FOLDERS.choose(rng).unwrap();
            let name = BASENAMES.choose(rng).unwrap();
            let ext = EXTENSIONS.choose(rng).unwrap();
            paths.push(format!(
                "/home/user/{}/{}_{}{}",
                folder,
                name,
                rng.gen_range(1..=9999),
                ext
            ));
        }
        let status = paths
            .iter()
            .map(|p| (p.clone(), FileStatus::Ok))
            .collect();
        FileTable {
            paths,
            status,
            scan_index: 0,
            progress: None,
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn status_of(&self, path: &str) -> FileStatus {
        self.status.get(path).copied().unwrap_or(FileStatus::Ok)
    }

    pub fn set_status(&mut self, path: &str, status: FileStatus) {
        if let Some(entry) = self.status.get_mut(path) {
            *entry = status;
        }
    }

    /// The slice of paths currently visible in the scanner panel.
    pub fn window(&self) -> &[String] {
        let start = self.scan_index.min(self.paths.len());
        let end = (start + SCAN_WINDOW).min(self.paths.len());
        &self.paths[start..end]
    }

    pub fn progress(&self) -> Option<u8> {
        self.progress
    }

    /// Raise the exfil percentage. The counter never goes backwards.
    pub fn set_progress(&mut self, pct: u8) {
        let pct = pct.min(100);
        self.progress = Some(self.progress.map_or(pct, |cur| cur.max(pct)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_paths_look_right() {
        let mut rng = StdRng::seed_from_u64(42);
        let table = FileTable::generate(&mut rng);

        assert_eq!(table.len(), FILE_COUNT);
        for path in table.paths() {
            assert!(path.starts_with("/home/user/"));
            assert!(EXTENSIONS.iter().any(|ext| path.ends_with(ext)));
            assert_eq!(table.status_of(path), FileStatus::Ok);
        }
    }

    #[test]
    fn test_window_never_overruns() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut table = FileTable::generate(&mut rng);

        table.scan_index = 0;
        assert_eq!(table.window().len(), SCAN_WINDOW);

        table.scan_index = FILE_COUNT - 3;
        assert_eq!(table.window().len(), 3);

        table.scan_index = FILE_COUNT + 100;
        assert!(table.window().is_empty());
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut table = FileTable::generate(&mut rng);

        assert_eq!(table.progress(), None);
        table.set_progress(40);
        table.set_progress(10);
        assert_eq!(table.progress(), Some(40));
        table.set_progress(250);
        assert_eq!(table.progress(), Some(100));
    }

    #[test]
    fn test_unknown_path_reads_as_ok() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut table = FileTable::generate(&mut rng);
        table.set_status("/nope", FileStatus::Erased);
        assert_eq!(table.status_of("/nope"), FileStatus::Ok);
    }
}
