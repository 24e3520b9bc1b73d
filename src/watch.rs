//! Watch mode: rebuild the output whenever content or the input stylesheet
//! changes.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::compiler::Compiler;
use crate::error::Result;
use crate::usage::ContentSource;

/// Quiet period before a batch of events triggers a rebuild.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// What a batch of file events touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Change {
    pub content: bool,
    pub input: bool,
}

impl Change {
    pub fn is_empty(self) -> bool {
        !self.content && !self.input
    }

    fn merge(&mut self, other: Change) {
        self.content |= other.content;
        self.input |= other.input;
    }
}

/// Classify changed paths against the content globs and the input file.
pub fn classify(paths: &[PathBuf], content: &ContentSource, input: &Path) -> Change {
    let mut change = Change::default();
    for path in paths {
        if path == input {
            change.input = true;
        } else if content.matches(path) {
            change.content = true;
        }
    }
    change
}

fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Build once, then rebuild on every settled batch of changes until ctrl-c.
pub async fn watch(compiler: &Compiler, input: &Path, output: &Path) -> Result<()> {
    rebuild(compiler, input, output).await;

    let config = compiler.config();
    let root = absolute(&config.root);
    let content = ContentSource::new(root.clone(), config.content.clone());
    let input_path = absolute(input);

    let (tx, mut rx) = mpsc::channel::<Change>(64);
    let mut watcher = RecommendedWatcher::new(
        move |result: std::result::Result<Event, notify::Error>| match result {
            Ok(event) => {
                if !matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    return;
                }
                let change = classify(&event.paths, &content, &input_path);
                if !change.is_empty() {
                    let _ = tx.try_send(change);
                }
            }
            Err(e) => error!("file watcher error: {e}"),
        },
        notify::Config::default(),
    )?;
    watcher.watch(&root, RecursiveMode::Recursive)?;
    info!("watching {}", root.display());

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        let first = tokio::select! {
            _ = &mut shutdown => break,
            received = rx.recv() => match received {
                Some(change) => change,
                None => break,
            },
        };

        let change = settle(&mut rx, first, DEBOUNCE).await;
        if change.content {
            debug!("content changed, usage cache cleared");
            compiler.cache().clear();
        }
        rebuild(compiler, input, output).await;
    }

    info!("watch stopped");
    Ok(())
}

/// Merge incoming changes until `quiet` passes with no new event.
async fn settle(rx: &mut mpsc::Receiver<Change>, mut change: Change, quiet: Duration) -> Change {
    let debounce = tokio::time::sleep(quiet);
    tokio::pin!(debounce);
    loop {
        tokio::select! {
            _ = &mut debounce => break,
            more = rx.recv() => match more {
                Some(more) => {
                    change.merge(more);
                    debounce.as_mut().reset(Instant::now() + quiet);
                }
                None => break,
            },
        }
    }
    change
}

async fn rebuild(compiler: &Compiler, input: &Path, output: &Path) {
    match compiler.build(input, output).await {
        Ok(()) => info!("rebuilt {}", output.display()),
        Err(e) => warn!("rebuild failed: {e}"),
    }
}
