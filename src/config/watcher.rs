//! Routes file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::loader::load_routes;
use crate::config::schema::RoutesConfig;
use crate::routing::store::RouteStore;

/// A watcher that monitors the routes file and republishes the table on
/// each relevant change.
///
/// A reload that fails to parse or validate is logged and dropped; the
/// store keeps serving the last good table.
pub struct RouteWatcher {
    path: PathBuf,
    store: Arc<RouteStore>,
}

/// Handle to a running watch task.
///
/// Dropping the handle keeps the watch alive; call [`WatchHandle::stop`]
/// to tear it down. After `stop` the store retains its last snapshot.
pub struct WatchHandle {
    watcher: RecommendedWatcher,
    publisher: JoinHandle<()>,
}

impl WatchHandle {
    /// Stop watching and publishing.
    pub fn stop(self) {
        drop(self.watcher);
        self.publisher.abort();
        tracing::info!("Routes watcher stopped");
    }
}

impl RouteWatcher {
    pub fn new(path: &Path, store: Arc<RouteStore>) -> Self {
        Self {
            path: path.to_path_buf(),
            store,
        }
    }

    /// Start watching the file.
    ///
    /// Reloads run on the notify thread; parsed tables are handed over a
    /// channel to an async task that publishes them to the store.
    pub fn run(self) -> Result<WatchHandle, notify::Error> {
        let Self { path, store } = self;
        let (tx, mut rx) = mpsc::unbounded_channel::<RoutesConfig>();

        let watched = path.clone();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Routes file change detected, reloading...");
                        match load_routes(&watched) {
                            Ok(table) => {
                                let _ = tx.send(table);
                            }
                            Err(e) => {
                                tracing::error!(
                                    "Failed to reload routes: {}. Keeping current table.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&path, RecursiveMode::NonRecursive)?;

        let publisher = tokio::spawn(async move {
            while let Some(table) = rx.recv().await {
                let routes = table.routes.len();
                store.replace(table);
                tracing::info!(routes, "Routes table reloaded");
            }
        });

        tracing::info!(path = ?path, "Routes watcher started");
        Ok(WatchHandle { watcher, publisher })
    }
}
