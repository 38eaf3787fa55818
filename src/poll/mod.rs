//! Snapshot polling.
//!
//! A [`Poller`] owns one background thread that fetches from a
//! [`SnapshotSource`], publishes into a [`SnapshotSlot`], then sleeps for a
//! fixed delay. The delay starts when the previous attempt finished, so
//! requests never overlap. A failed attempt clears the slot.

use crate::error::PollError;
use crate::model::Snapshot;
use parking_lot::{Condvar, Mutex, RwLock};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::HttpSource;

/// Delay between the end of one poll attempt and the start of the next.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(500);

/// Anything that can produce a fresh snapshot on demand.
pub trait SnapshotSource: Send + 'static {
    fn fetch(&mut self) -> Result<Snapshot, PollError>;
}

impl<F> SnapshotSource for F
where
    F: FnMut() -> Result<Snapshot, PollError> + Send + 'static,
{
    fn fetch(&mut self) -> Result<Snapshot, PollError> {
        self()
    }
}

/// Reads a snapshot document from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileSource {
    fn fetch(&mut self) -> Result<Snapshot, PollError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            PollError::Transport(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(Snapshot::from_json(&json)?)
    }
}

/// The single shared reference to the current snapshot.
///
/// Writers replace the snapshot wholesale; readers get an `Arc` they can keep
/// rendering from while newer snapshots arrive.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSlot {
    inner: Arc<RwLock<Option<Arc<Snapshot>>>>,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: Snapshot) {
        *self.inner.write() = Some(Arc::new(snapshot));
    }

    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.inner.read().clone()
    }
}

/// Performs one poll attempt and stores its outcome. Returns `true` on
/// success.
pub fn refresh(source: &mut dyn SnapshotSource, slot: &SnapshotSlot) -> bool {
    store(source.fetch(), slot)
}

/// Publishes a fetched snapshot, or clears the slot if the fetch failed.
fn store(result: Result<Snapshot, PollError>, slot: &SnapshotSlot) -> bool {
    match result {
        Ok(snapshot) => {
            log::debug!("snapshot received with {} lines", snapshot.len());
            slot.publish(snapshot);
            true
        }
        Err(e) => {
            log::warn!("Error fetching snapshot: {}", e);
            slot.clear();
            false
        }
    }
}

#[derive(Default)]
struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

impl StopSignal {
    fn stop(&self) {
        *self.stopped.lock() = true;
        self.wake.notify_all();
    }

    fn is_stopped(&self) -> bool {
        *self.stopped.lock()
    }

    /// Sleeps for `timeout` unless stopped first. Returns `true` if stopped.
    fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut stopped = self.stopped.lock();
        while !*stopped {
            if self.wake.wait_until(&mut stopped, deadline).timed_out() {
                break;
            }
        }
        *stopped
    }
}

/// Handle to a running polling loop.
///
/// Stopping cancels the next scheduled attempt. A fetch already in flight
/// runs to completion but its result is dropped. Dropping the handle stops
/// the loop as well.
pub struct Poller {
    signal: Arc<StopSignal>,
    handle: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn spawn<S: SnapshotSource>(
        mut source: S,
        interval: Duration,
        slot: SnapshotSlot,
    ) -> std::io::Result<Self> {
        let signal = Arc::new(StopSignal::default());
        let thread_signal = Arc::clone(&signal);
        let handle = thread::Builder::new()
            .name("snapshot-poller".to_string())
            .spawn(move || {
                while !thread_signal.is_stopped() {
                    let result = source.fetch();
                    if thread_signal.is_stopped() {
                        log::debug!("poller stopped during fetch, result dropped");
                        break;
                    }
                    store(result, &slot);
                    if thread_signal.wait(interval) {
                        break;
                    }
                }
                log::debug!("poller exited");
            })?;
        Ok(Self {
            signal,
            handle: Some(handle),
        })
    }

    /// Cancels the next scheduled attempt. Does not wait for the thread.
    pub fn stop(&self) {
        self.signal.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.signal.is_stopped()
    }

    /// Stops the loop and waits for an in-flight fetch to finish.
    pub fn join(mut self) {
        self.stop();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("poller thread panicked");
            }
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.signal.stop();
    }
}
