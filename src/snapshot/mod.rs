// Frame history for reviewing a run backward and forward

use crate::driver::Canvas;
use crate::visual::ArrayView;
use std::collections::VecDeque;
use std::mem;
use thiserror::Error;

/// Default history budget
pub const DEFAULT_HISTORY_LIMIT: usize = 64 * 1024 * 1024;

/// A presented frame, as it was drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub view: ArrayView,
    /// 1-based position of the frame within its run
    pub frame_index: usize,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        mem::size_of::<Snapshot>() - mem::size_of::<ArrayView>() + self.view.estimated_size()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot of {size} bytes exceeds the history limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

/// Presented frames of the current run, oldest evicted first once the
/// memory budget is spent
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: VecDeque<Snapshot>,
    max_memory: usize,
    current_memory: usize,
    /// Frames recorded since the last clear, evicted ones included
    recorded: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: VecDeque::new(),
            max_memory,
            current_memory: 0,
            recorded: 0,
        }
    }

    /// Record the next frame of the run. Returns how many old snapshots were
    /// evicted to make room.
    pub fn push(&mut self, view: ArrayView) -> Result<usize, SnapshotError> {
        let snapshot = Snapshot {
            view,
            frame_index: self.recorded + 1,
        };
        let size = snapshot.estimated_size();
        if size > self.max_memory {
            return Err(SnapshotError::TooLarge {
                size,
                limit: self.max_memory,
            });
        }

        let mut evicted = 0;
        while self.current_memory + size > self.max_memory {
            match self.snapshots.pop_front() {
                Some(old) => {
                    self.current_memory -= old.estimated_size();
                    evicted += 1;
                }
                None => break,
            }
        }

        self.current_memory += size;
        self.recorded += 1;
        self.snapshots.push_back(snapshot);
        Ok(evicted)
    }

    /// Get a snapshot by position in the retained history
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.current_memory = 0;
        self.recorded = 0;
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Frames recorded since the last clear
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

impl Default for SnapshotManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl Canvas for SnapshotManager {
    fn clear(&mut self) {
        SnapshotManager::clear(self);
    }

    fn present(&mut self, view: ArrayView) {
        match self.push(view) {
            Ok(0) => {}
            Ok(evicted) => tracing::trace!(evicted, "history trimmed"),
            Err(e) => tracing::warn!(error = %e, "frame not recorded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::values;
    use crate::visual::{visualize_array, Frame};

    fn view(ints: &[i32]) -> ArrayView {
        visualize_array(&Frame::new(&values(ints), None), false)
    }

    #[test]
    fn test_frame_indices_count_from_one() {
        let mut history = SnapshotManager::default();
        history.push(view(&[1])).unwrap();
        history.push(view(&[2])).unwrap();
        assert_eq!(history.get(0).unwrap().frame_index, 1);
        assert_eq!(history.latest().unwrap().frame_index, 2);
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let one = Snapshot {
            view: view(&[1, 2, 3]),
            frame_index: 1,
        }
        .estimated_size();
        let mut history = SnapshotManager::new(one * 2);
        history.push(view(&[1, 2, 3])).unwrap();
        history.push(view(&[4, 5, 6])).unwrap();
        assert_eq!(history.push(view(&[7, 8, 9])).unwrap(), 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.recorded(), 3);
        assert_eq!(history.get(0).unwrap().frame_index, 2);
        assert!(history.memory_usage() <= history.memory_limit());
    }

    #[test]
    fn test_rejects_oversized_snapshot() {
        let mut history = SnapshotManager::new(8);
        assert!(matches!(
            history.push(view(&[1, 2, 3])),
            Err(SnapshotError::TooLarge { limit: 8, .. })
        ));
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear_resets_numbering() {
        let mut history = SnapshotManager::default();
        history.push(view(&[1])).unwrap();
        history.clear();
        history.push(view(&[1])).unwrap();
        assert_eq!(history.latest().unwrap().frame_index, 1);
        assert_eq!(history.memory_usage(), history.latest().unwrap().estimated_size());
    }
}
