use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

use log::{error, info, warn};

/// Persistent storage for a single number
pub trait ScoreStore {
    fn load(&self) -> io::Result<u32>;
    fn save(&mut self, score: u32) -> io::Result<()>;
}

/// Stores the score as decimal text in a file
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> io::Result<u32> {
        let text = fs::read_to_string(&self.path)?;
        text.trim()
            .parse()
            .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        fs::write(&self.path, score.to_string())
    }
}

pub struct HighScore {
    best: u32,
    store: Box<dyn ScoreStore>,
}

impl HighScore {
    /// Never fails, an unreadable store counts as a high score of 0
    pub fn load(store: Box<dyn ScoreStore>) -> Self {
        let best = match store.load() {
            Ok(best) => best,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("no high score saved yet");
                0
            }
            Err(e) => {
                warn!("failed to read high score, starting from 0: {}", e);
                0
            }
        };
        Self { best, store }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Returns true if `score` is a new record, records are saved right away
    pub fn submit(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(e) = self.store.save(score) {
            error!("failed to save high score {}: {}", score, e);
        }
        true
    }
}
