// SPDX-License-Identifier: MPL-2.0
//! Preview resource lifecycle.
//!
//! The manager owns exactly one generation of preview handles. Each refresh
//! releases the previous generation before allocating the next, and the last
//! generation is released on teardown or drop.

use super::port::{PreviewHandle, PreviewPort};
use crate::domain::File;

/// Owns the live preview handles for the current render pass.
#[derive(Debug)]
pub struct PreviewResourceManager<P: PreviewPort> {
    port: P,
    live: Vec<PreviewHandle>,
}

impl<P: PreviewPort> PreviewResourceManager<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            live: Vec::new(),
        }
    }

    /// Releases the previous generation, then allocates one handle per file,
    /// in order.
    pub fn refresh<'a>(&mut self, files: impl IntoIterator<Item = &'a File>) -> &[PreviewHandle] {
        self.revoke_all();

        let port = &mut self.port;
        self.live = files.into_iter().map(|file| port.allocate(file)).collect();
        tracing::trace!(live = self.live.len(), "preview generation allocated");
        &self.live
    }

    /// Handles of the current generation.
    #[must_use]
    pub fn live(&self) -> &[PreviewHandle] {
        &self.live
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Releases the current generation.
    pub fn teardown(&mut self) {
        self.revoke_all();
    }

    /// Adapter backing the handles (used by views to resolve images).
    #[must_use]
    pub fn port(&self) -> &P {
        &self.port
    }

    fn revoke_all(&mut self) {
        if self.live.is_empty() {
            return;
        }
        let released = self.live.len();
        for handle in self.live.drain(..) {
            self.port.release(handle);
        }
        tracing::trace!(released, "preview generation released");
    }
}

impl<P: PreviewPort> Drop for PreviewResourceManager<P> {
    fn drop(&mut self) {
        self.revoke_all();
    }
}
