//! Watches the content directory and signals the app when text files change,
//! so edits show up without restarting the viewer.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::Duration;

use anyhow::{Context, Result};
use notify_debouncer_mini::notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{DebounceEventResult, Debouncer, new_debouncer};

const DEBOUNCE: Duration = Duration::from_millis(300);

pub struct ContentWatcher {
    // Held so the underlying watcher stays alive for the app's lifetime.
    _debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<()>,
}

impl ContentWatcher {
    pub fn new(dir: &Path) -> Result<Self> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(DEBOUNCE, move |res: DebounceEventResult| {
            if res.is_ok() {
                let _ = tx.send(());
            }
        })
        .context("failed to create file watcher")?;
        debouncer
            .watcher()
            .watch(dir, RecursiveMode::Recursive)
            .with_context(|| format!("failed to watch {}", dir.display()))?;
        log::info!("watching {} for changes", dir.display());
        Ok(Self {
            _debouncer: debouncer,
            rx,
        })
    }

    /// True when at least one change fired since the last poll. Drains the
    /// channel so a burst of events triggers a single reload.
    pub fn changed(&self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(()) => changed = true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }
}
