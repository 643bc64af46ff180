// SPDX-License-Identifier: MPL-2.0
//! Constraint policy: how much of an incoming batch is admitted.

use crate::domain::{File, MaxFiles};

/// Outcome of running a batch through the policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Admission {
    /// Files to insert, in input order.
    pub accepted: Vec<File>,
    /// Clear the current selection before inserting.
    pub replace: bool,
}

impl Admission {
    /// An empty admission is a no-op: no mutation, notification or render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Decides which files of `batch` are accepted.
///
/// - With a limit of one, the first file wins and replaces the selection.
/// - Otherwise the first `limit - current_count` files are kept.
///
/// Excess files are discarded silently. Mime types are not checked here.
#[must_use]
pub fn admit(batch: Vec<File>, current_count: usize, max_files: MaxFiles) -> Admission {
    if max_files.is_single() {
        return Admission {
            accepted: batch.into_iter().take(1).collect(),
            replace: true,
        };
    }

    let room = max_files.remaining(current_count);
    let mut accepted = batch;
    accepted.truncate(room);
    Admission {
        accepted,
        replace: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(n: usize) -> Vec<File> {
        (0..n)
            .map(|i| File::new(format!("f{i}"), i as u64, "text/plain"))
            .collect()
    }

    fn limit(n: usize) -> MaxFiles {
        MaxFiles::limited(n).unwrap()
    }

    #[test]
    fn single_takes_first_and_replaces() {
        let batch = files(3);
        let first = batch[0].clone();
        let admission = admit(batch, 1, MaxFiles::SINGLE);
        assert_eq!(admission.accepted, vec![first]);
        assert!(admission.replace);
    }

    #[test]
    fn single_with_empty_batch_is_noop() {
        let admission = admit(Vec::new(), 1, MaxFiles::SINGLE);
        assert!(admission.is_empty());
    }

    #[test]
    fn truncates_to_remaining_room_in_order() {
        let batch = files(3);
        let expected = vec![batch[0].clone()];
        let admission = admit(batch, 1, limit(2));
        assert_eq!(admission.accepted, expected);
        assert!(!admission.replace);
    }

    #[test]
    fn full_selection_admits_nothing() {
        assert!(admit(files(1), 2, limit(2)).is_empty());
    }

    #[test]
    fn over_full_selection_admits_nothing() {
        assert!(admit(files(2), 5, limit(2)).is_empty());
    }

    #[test]
    fn unbounded_admits_everything() {
        let batch = files(50);
        let admission = admit(batch.clone(), 1_000, MaxFiles::Unbounded);
        assert_eq!(admission.accepted, batch);
    }
}
