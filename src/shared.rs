//! Thread-safe handle over a `PlotSession`.

use crate::error::Result;
use crate::events::PlotEvent;
use crate::session::PlotSession;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle. Events from any thread are applied one at a time
/// through the inner lock, in the order the lock is acquired.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<PlotSession>>,
}

impl SharedSession {
    pub fn new(session: PlotSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn dispatch(&self, event: PlotEvent) -> Result<()> {
        self.inner.lock().dispatch(event)
    }

    /// Applies a batch under a single lock. Stops at the first error.
    pub fn dispatch_all(&self, events: impl IntoIterator<Item = PlotEvent>) -> Result<()> {
        let mut session = self.inner.lock();
        for event in events {
            session.dispatch(event)?;
        }
        Ok(())
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut PlotSession) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<PlotSession> for SharedSession {
    fn from(session: PlotSession) -> Self {
        Self::new(session)
    }
}
