//! Source directory watcher for the dev server.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, PollWatcher, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::WatchConfig;

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("watch root does not exist: {0}")]
    MissingRoot(PathBuf),
    #[error("watcher error: {0}")]
    Notify(#[from] notify::Error),
}

/// A batch of paths touched by one filesystem event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceChange {
    pub paths: Vec<PathBuf>,
}

/// Running watcher. Dropping it stops the watch.
pub enum ActiveWatcher {
    Poll(PollWatcher),
    Native(RecommendedWatcher),
}

impl ActiveWatcher {
    pub fn is_polling(&self) -> bool {
        matches!(self, ActiveWatcher::Poll(_))
    }
}

/// Watches a source tree and forwards changes over a channel.
pub struct SourceWatcher {
    root: PathBuf,
    config: WatchConfig,
    change_tx: mpsc::UnboundedSender<SourceChange>,
}

impl SourceWatcher {
    /// Create a new SourceWatcher.
    ///
    /// Returns the watcher and a receiver for change batches.
    pub fn new(root: &Path, config: &WatchConfig) -> (Self, mpsc::UnboundedReceiver<SourceChange>) {
        let (change_tx, change_rx) = mpsc::unbounded_channel();

        (
            Self {
                root: root.to_path_buf(),
                config: config.clone(),
                change_tx,
            },
            change_rx,
        )
    }

    /// Start watching on notify's background thread.
    pub fn run(self) -> Result<ActiveWatcher, WatchError> {
        if !self.root.exists() {
            return Err(WatchError::MissingRoot(self.root));
        }

        let tx = self.change_tx.clone();
        let handler = move |res: notify::Result<Event>| match res {
            Ok(event) => {
                let kind = event.kind;
                if kind.is_modify() || kind.is_create() || kind.is_remove() {
                    tracing::debug!(paths = ?event.paths, kind = ?kind, "Source change detected");
                    let _ = tx.send(SourceChange { paths: event.paths });
                }
            }
            Err(e) => tracing::error!("Watch error: {:?}", e),
        };

        let notify_config = Config::default().with_poll_interval(poll_interval(&self.config));

        let mut watcher = if self.config.use_polling {
            ActiveWatcher::Poll(PollWatcher::new(handler, notify_config)?)
        } else {
            ActiveWatcher::Native(RecommendedWatcher::new(handler, notify_config)?)
        };

        match &mut watcher {
            ActiveWatcher::Poll(w) => w.watch(&self.root, RecursiveMode::Recursive)?,
            ActiveWatcher::Native(w) => w.watch(&self.root, RecursiveMode::Recursive)?,
        }

        tracing::info!(
            root = ?self.root,
            polling = self.config.use_polling,
            interval_ms = self.config.interval_ms,
            "Source watcher started"
        );
        Ok(watcher)
    }
}

/// Poll delay for `config`; never zero, so the poller cannot spin.
pub fn poll_interval(config: &WatchConfig) -> Duration {
    Duration::from_millis(config.interval_ms.max(1))
}
