// SPDX-License-Identifier: MPL-2.0
//! In-memory adapters.
//!
//! These back the selection box when no window system is involved: headless
//! hosts, benches and tests. The preview port keeps a shared ledger so the
//! handle accounting can be inspected after the port has been moved into a
//! [`DragBox`](crate::application::DragBox).

use crate::application::port::{
    DialogRequest, FileDialog, HandleId, PreviewHandle, PreviewKind, PreviewPort,
};
use crate::domain::File;
use futures_util::future::{self, BoxFuture, FutureExt};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

// =============================================================================
// Preview ledger
// =============================================================================

#[derive(Debug, Default)]
struct LedgerState {
    live: HashSet<HandleId>,
    allocated: usize,
    released: usize,
}

/// Shared view of the handles a [`MemoryPreviewPort`] has handed out.
#[derive(Debug, Clone, Default)]
pub struct PreviewLedger(Arc<Mutex<LedgerState>>);

impl PreviewLedger {
    fn state(&self) -> MutexGuard<'_, LedgerState> {
        // A panic while holding the lock cannot leave the counters torn.
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Handles allocated and not yet released.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.state().live.len()
    }

    #[must_use]
    pub fn is_live(&self, id: HandleId) -> bool {
        self.state().live.contains(&id)
    }

    /// Total allocations so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.state().allocated
    }

    /// Total releases so far.
    #[must_use]
    pub fn released(&self) -> usize {
        self.state().released
    }
}

// =============================================================================
// MemoryPreviewPort
// =============================================================================

/// Preview port that only tracks handles. Images get visual handles, every
/// other file a fallback handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreviewPort {
    ledger: PreviewLedger,
}

impl MemoryPreviewPort {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared ledger, still readable after the port is moved.
    #[must_use]
    pub fn ledger(&self) -> PreviewLedger {
        self.ledger.clone()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.ledger.live_count()
    }

    #[must_use]
    pub fn is_live(&self, id: HandleId) -> bool {
        self.ledger.is_live(id)
    }
}

impl PreviewPort for MemoryPreviewPort {
    fn allocate(&mut self, file: &File) -> PreviewHandle {
        let kind = if file.is_image() {
            PreviewKind::Visual
        } else {
            PreviewKind::Fallback
        };
        let handle = PreviewHandle::new(HandleId::next(), kind);

        let mut state = self.ledger.state();
        state.live.insert(handle.id());
        state.allocated += 1;
        handle
    }

    fn release(&mut self, handle: PreviewHandle) {
        let mut state = self.ledger.state();
        if state.live.remove(&handle.id()) {
            state.released += 1;
        } else {
            tracing::warn!(handle = handle.id().value(), "release of unknown preview handle");
        }
    }
}

// =============================================================================
// MemoryFileDialog
// =============================================================================

/// Dialog that "picks" a preset batch, honouring single/multi mode.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileDialog {
    batch: Vec<File>,
    requests: Arc<Mutex<Vec<DialogRequest>>>,
}

impl MemoryFileDialog {
    #[must_use]
    pub fn new(batch: Vec<File>) -> Self {
        Self {
            batch,
            requests: Arc::default(),
        }
    }

    /// Requests presented so far.
    #[must_use]
    pub fn requests(&self) -> Vec<DialogRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl FileDialog for MemoryFileDialog {
    fn present(&self, request: DialogRequest) -> BoxFuture<'static, Vec<File>> {
        let picked = if request.multiple {
            self.batch.clone()
        } else {
            self.batch.iter().take(1).cloned().collect()
        };
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        future::ready(picked).boxed()
    }
}
