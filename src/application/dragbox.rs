// SPDX-License-Identifier: MPL-2.0
//! The selection box component.
//!
//! `DragBox` owns the selection and drives every operation through the same
//! sequence:
//!
//! ```text
//! Idle -> Validating -> (no-op) -> Idle
//!                    -> Mutating -> Notifying -> Rendering -> Idle
//! ```
//!
//! Adds and removals are symmetric: the selection is mutated first, then the
//! hook runs, then subscribers are notified, then the view-model is
//! re-derived. A failed or empty operation stops at `Validating` and touches
//! nothing. Teardown consumes the component and releases the last preview
//! generation.

use super::collection::FileCollection;
use super::notify::{NotificationHub, NotificationReceiver};
use super::options::{DragBoxOptions, Icons, Texts};
use super::policy;
use super::port::{
    DialogRequest, DropEffect, DropSignal, MountHost, MountTarget, PreviewPort,
};
use super::preview::PreviewResourceManager;
use super::view_model::ViewModel;
use crate::domain::{AcceptFilter, File, FileId, MaxFiles};
use crate::error::{Error, Result};

/// Stage of the operation currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Mutating,
    Notifying,
    Rendering,
}

/// A mounted file-selection box.
#[derive(Debug)]
pub struct DragBox<P: PreviewPort> {
    target: MountTarget,
    accept: AcceptFilter,
    enforce_accept: bool,
    texts: Texts,
    icons: Icons,
    files: FileCollection,
    previews: PreviewResourceManager<P>,
    hub: NotificationHub,
    view: ViewModel,
    generation: u64,
    hovering: bool,
    phase: Phase,
}

impl<P: PreviewPort> DragBox<P> {
    /// Mounts a new, empty selection box into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TargetNotFound`] if `host` has no slot named `target`.
    pub fn mount(
        host: &impl MountHost,
        target: MountTarget,
        options: DragBoxOptions,
        preview_port: P,
    ) -> Result<Self> {
        if !host.has_slot(&target) {
            return Err(Error::TargetNotFound(target.to_string()));
        }

        let DragBoxOptions {
            accept,
            max_files,
            enforce_accept,
            texts,
            icons,
            on_add,
            on_remove,
        } = options;

        tracing::info!(
            slot = %target,
            max_files = %max_files,
            accept = %accept,
            enforce_accept,
            "drag box mounted"
        );

        Ok(Self {
            target,
            accept,
            enforce_accept,
            texts,
            icons,
            files: FileCollection::new(max_files),
            previews: PreviewResourceManager::new(preview_port),
            hub: NotificationHub::new(on_add, on_remove),
            view: ViewModel::initial(max_files),
            generation: 0,
            hovering: false,
            phase: Phase::Idle,
        })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Offers a batch of files. Returns the files actually added.
    ///
    /// Files beyond the limit are discarded. With a limit of one the first
    /// file replaces the current selection. An empty result means nothing
    /// changed and nobody was notified.
    pub fn add_files(&mut self, batch: Vec<File>) -> Vec<File> {
        self.enter(Phase::Validating);
        let offered = batch.len();
        let batch = if self.enforce_accept {
            self.filter_accepted(batch)
        } else {
            batch
        };

        let admission = policy::admit(batch, self.files.len(), self.files.max_files());
        if admission.is_empty() {
            tracing::debug!(offered, "batch rejected, selection unchanged");
            self.enter(Phase::Idle);
            return Vec::new();
        }

        self.enter(Phase::Mutating);
        let added = self.files.add(admission);
        tracing::debug!(offered, added = added.len(), total = self.files.len(), "files added");

        self.enter(Phase::Notifying);
        self.hub.files_added(&added);

        self.render();
        added
    }

    /// Offers a single file. Returns it if it was added.
    pub fn add_file(&mut self, file: File) -> Option<File> {
        self.add_files(vec![file]).into_iter().next()
    }

    /// Removes the file at `index` and returns it.
    ///
    /// Positions shift after every removal; prefer [`DragBox::remove`] for
    /// bindings created at render time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not a current position.
    pub fn remove_file(&mut self, index: usize) -> Result<File> {
        self.enter(Phase::Validating);
        if index >= self.files.len() {
            tracing::debug!(index, len = self.files.len(), "remove index out of range");
            self.enter(Phase::Idle);
            return Err(Error::IndexOutOfRange {
                index,
                len: self.files.len(),
            });
        }

        self.enter(Phase::Mutating);
        let removed = self.files.remove_at(index)?;
        self.after_removal(&removed);
        Ok(removed)
    }

    /// Removes the file bound to `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFile`] if `id` is no longer selected.
    pub fn remove(&mut self, id: FileId) -> Result<File> {
        self.enter(Phase::Validating);
        if self.files.position(id).is_none() {
            tracing::debug!(%id, "remove of unknown file");
            self.enter(Phase::Idle);
            return Err(Error::UnknownFile(id));
        }

        self.enter(Phase::Mutating);
        let removed = self.files.remove(id)?;
        self.after_removal(&removed);
        Ok(removed)
    }

    // =========================================================================
    // Input sources
    // =========================================================================

    /// Dialog parameters, or `None` while the limit is reached.
    #[must_use]
    pub fn dialog_request(&self) -> Option<DialogRequest> {
        if self.view.interaction_locked {
            return None;
        }
        Some(DialogRequest {
            filter: self.accept.clone(),
            multiple: self.files.max_files().allows_multiple(),
        })
    }

    /// Handles one drag-over signal and returns the effect to report.
    ///
    /// Hosts reset the effect on every drag-over event, so this must be called
    /// for each of them rather than once per drag. A full multi-file box
    /// reports [`DropEffect::None`] and does not light up; a single-file box
    /// always accepts because a drop replaces its file.
    pub fn drag_over(&mut self) -> DropEffect {
        if self.view.interaction_locked && self.files.max_files().allows_multiple() {
            return DropEffect::None;
        }
        self.set_hovering(true);
        DropEffect::Copy
    }

    /// The drag left the box.
    pub fn drag_leave(&mut self) {
        self.set_hovering(false);
    }

    /// Handles a dropped batch. Returns the files actually added.
    pub fn drop_files(&mut self, batch: Vec<File>) -> Vec<File> {
        self.set_hovering(false);
        self.add_files(batch)
    }

    /// Dispatches a [`DropSignal`] from a drop source adapter.
    ///
    /// Returns the drop effect for drag-over signals.
    pub fn handle_drop_signal(&mut self, signal: DropSignal) -> Option<DropEffect> {
        match signal {
            DropSignal::DragOver => Some(self.drag_over()),
            DropSignal::DragLeave => {
                self.drag_leave();
                None
            }
            DropSignal::Drop(batch) => {
                self.drop_files(batch);
                None
            }
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// The view-model of the last render pass.
    #[must_use]
    pub fn view_model(&self) -> &ViewModel {
        &self.view
    }

    /// Subscribes to add/remove notifications published from now on.
    pub fn subscribe(&mut self) -> NotificationReceiver {
        self.hub.subscribe()
    }

    /// Currently selected files, in order.
    pub fn files(&self) -> impl ExactSizeIterator<Item = &File> {
        self.files.files()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn max_files(&self) -> MaxFiles {
        self.files.max_files()
    }

    #[must_use]
    pub fn accept(&self) -> &AcceptFilter {
        &self.accept
    }

    #[must_use]
    pub fn texts(&self) -> &Texts {
        &self.texts
    }

    #[must_use]
    pub fn icons(&self) -> &Icons {
        &self.icons
    }

    #[must_use]
    pub fn target(&self) -> &MountTarget {
        &self.target
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Preview adapter, for views that resolve handles into images.
    #[must_use]
    pub fn previews(&self) -> &P {
        self.previews.port()
    }

    /// Number of preview handles alive right now.
    #[must_use]
    pub fn live_previews(&self) -> usize {
        self.previews.live_count()
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Unmounts the box, releasing every preview handle.
    ///
    /// Returns the files that were selected.
    pub fn teardown(mut self) -> Vec<File> {
        self.previews.teardown();
        tracing::info!(slot = %self.target, selected = self.files.len(), "drag box torn down");
        self.files.files().cloned().collect()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn after_removal(&mut self, removed: &File) {
        tracing::debug!(file = removed.name(), total = self.files.len(), "file removed");
        self.enter(Phase::Notifying);
        self.hub.file_removed(removed);
        self.render();
    }

    fn render(&mut self) {
        self.enter(Phase::Rendering);
        let handles = self.previews.refresh(self.files.files());
        self.view = ViewModel::derive(self.files.entries(), handles, self.files.max_files());
        self.generation += 1;
        self.view.generation = self.generation;
        self.view.hovering = self.hovering;
        self.enter(Phase::Idle);
    }

    fn filter_accepted(&self, batch: Vec<File>) -> Vec<File> {
        batch
            .into_iter()
            .filter(|file| {
                let accepted = self.accept.matches(file);
                if !accepted {
                    tracing::debug!(file = file.name(), mime = file.mime_type(), "file filtered by accept");
                }
                accepted
            })
            .collect()
    }

    fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
        self.view.hovering = hovering;
    }

    fn enter(&mut self, phase: Phase) {
        tracing::trace!(from = ?self.phase, to = ?phase, "drag box phase");
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryPreviewPort;
    use crate::ui::layout::Layout;

    fn mount(options: DragBoxOptions) -> DragBox<MemoryPreviewPort> {
        DragBox::mount(
            &Layout::single("files"),
            MountTarget::new("files"),
            options,
            MemoryPreviewPort::new(),
        )
        .expect("mount")
    }

    fn file(name: &str) -> File {
        File::new(name, 100, "text/plain")
    }

    #[test]
    fn mount_into_missing_slot_fails() {
        let result = DragBox::mount(
            &Layout::single("files"),
            MountTarget::new("sidebar"),
            DragBoxOptions::new(),
            MemoryPreviewPort::new(),
        );
        assert_eq!(result.err(), Some(Error::TargetNotFound("sidebar".into())));
    }

    #[test]
    fn fresh_box_is_empty_and_idle() {
        let dragbox = mount(DragBoxOptions::new());
        assert!(dragbox.is_empty());
        assert!(dragbox.view_model().empty);
        assert_eq!(dragbox.view_model().generation, 0);
        assert_eq!(dragbox.phase(), Phase::Idle);
    }

    #[test]
    fn add_renders_and_returns_to_idle() {
        let mut dragbox = mount(DragBoxOptions::new());
        let added = dragbox.add_files(vec![file("a"), file("b")]);
        assert_eq!(added.len(), 2);
        assert_eq!(dragbox.view_model().generation, 1);
        assert_eq!(dragbox.view_model().entries.len(), 2);
        assert_eq!(dragbox.live_previews(), 2);
        assert_eq!(dragbox.phase(), Phase::Idle);
    }

    #[test]
    fn dialog_is_single_mode_for_single_limit() {
        let dragbox = mount(DragBoxOptions::new().max_files(MaxFiles::SINGLE));
        let request = dragbox.dialog_request().expect("request");
        assert!(!request.multiple);
    }

    #[test]
    fn dialog_request_carries_filter_and_is_suppressed_when_locked() {
        let mut dragbox = mount(
            DragBoxOptions::new()
                .accept(AcceptFilter::parse("image/*"))
                .max_files(MaxFiles::limited(2).unwrap()),
        );
        let request = dragbox.dialog_request().expect("request");
        assert!(request.multiple);
        assert_eq!(request.filter, AcceptFilter::parse("image/*"));

        dragbox.add_files(vec![file("a"), file("b")]);
        assert!(dragbox.view_model().interaction_locked);
        assert_eq!(dragbox.dialog_request(), None);
    }

    #[test]
    fn drag_over_reasserts_copy_every_time() {
        let mut dragbox = mount(DragBoxOptions::new());
        assert_eq!(dragbox.drag_over(), DropEffect::Copy);
        assert_eq!(dragbox.drag_over(), DropEffect::Copy);
        assert!(dragbox.view_model().hovering);

        dragbox.drag_leave();
        assert!(!dragbox.view_model().hovering);
    }

    #[test]
    fn full_multi_box_rejects_drag_over() {
        let mut dragbox = mount(DragBoxOptions::new().max_files(MaxFiles::limited(2).unwrap()));
        dragbox.add_files(vec![file("a"), file("b")]);
        assert_eq!(dragbox.drag_over(), DropEffect::None);
        assert!(!dragbox.view_model().hovering);

        dragbox.remove_file(0).expect("remove");
        assert_eq!(dragbox.drag_over(), DropEffect::Copy);
        assert!(dragbox.view_model().hovering);
    }

    #[test]
    fn full_single_box_still_accepts_drag_over() {
        let mut dragbox = mount(DragBoxOptions::new().max_files(MaxFiles::SINGLE));
        dragbox.add_files(vec![file("a")]);
        assert_eq!(dragbox.drag_over(), DropEffect::Copy);
    }

    #[test]
    fn drop_clears_hover_and_adds() {
        let mut dragbox = mount(DragBoxOptions::new());
        dragbox.handle_drop_signal(DropSignal::DragOver);
        dragbox.handle_drop_signal(DropSignal::Drop(vec![file("a")]));
        assert!(!dragbox.view_model().hovering);
        assert_eq!(dragbox.len(), 1);
    }

    #[test]
    fn accept_is_advisory_by_default() {
        let mut dragbox = mount(DragBoxOptions::new().accept(AcceptFilter::parse("image/*")));
        assert_eq!(dragbox.drop_files(vec![file("notes.txt")]).len(), 1);
    }

    #[test]
    fn enforced_accept_filters_before_limit() {
        let mut dragbox = mount(
            DragBoxOptions::new()
                .accept(AcceptFilter::parse("image/*"))
                .enforce_accept(true)
                .max_files(MaxFiles::limited(1).unwrap()),
        );
        let png = File::new("b.png", 1, "image/png");
        let added = dragbox.drop_files(vec![file("a.txt"), png.clone()]);
        assert_eq!(added, vec![png]);
    }

    #[test]
    fn remove_by_stale_index_after_mutation_uses_ids() {
        let mut dragbox = mount(DragBoxOptions::new());
        dragbox.add_files(vec![file("a"), file("b"), file("c")]);
        let c_id = dragbox.view_model().entries[2].id;

        dragbox.remove_file(0).expect("remove a");
        let removed = dragbox.remove(c_id).expect("remove c");
        assert_eq!(removed.name(), "c");
        assert_eq!(dragbox.files().map(File::name).collect::<Vec<_>>(), ["b"]);
    }

    #[test]
    fn failed_removal_does_not_render() {
        let mut dragbox = mount(DragBoxOptions::new());
        dragbox.add_file(file("a"));
        let generation = dragbox.view_model().generation;

        assert!(matches!(
            dragbox.remove_file(5),
            Err(Error::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert_eq!(dragbox.view_model().generation, generation);
        assert_eq!(dragbox.phase(), Phase::Idle);
    }

    #[test]
    fn teardown_releases_previews() {
        let port = MemoryPreviewPort::new();
        let ledger = port.ledger();
        let mut dragbox = DragBox::mount(
            &Layout::single("files"),
            MountTarget::new("files"),
            DragBoxOptions::new(),
            port,
        )
        .expect("mount");
        dragbox.add_files(vec![file("a"), file("b")]);
        assert_eq!(ledger.live_count(), 2);

        let files = dragbox.teardown();
        assert_eq!(files.len(), 2);
        assert_eq!(ledger.live_count(), 0);
    }
}
