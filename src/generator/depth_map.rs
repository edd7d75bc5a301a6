//! Per-level vertex id ranges recorded during generation.

use std::ops::RangeInclusive;

use crate::graph::VertexId;

/// Inclusive range of vertex ids created at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    /// First id at this level
    pub first: VertexId,
    /// Last id at this level
    pub last: VertexId,
}

// A recorded level always holds at least one vertex.
#[allow(clippy::len_without_is_empty)]
impl LevelRange {
    /// Number of vertices on the level.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Returns true if `id` lies on this level.
    pub fn contains(&self, id: VertexId) -> bool {
        (self.first..=self.last).contains(&id)
    }

    /// Iterable id range.
    pub fn ids(&self) -> RangeInclusive<VertexId> {
        self.first..=self.last
    }
}

/// Maps each depth level to the contiguous range of ids created at it.
///
/// Levels are filled in order, and ids within the whole map increase with
/// depth, so the ranges never overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepthMap {
    levels: Vec<LevelRange>,
}

impl DepthMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that vertex `id` was created at `depth`.
    ///
    /// `depth` must be the current deepest level or the one right below it,
    /// and `id` must follow the last recorded id.
    pub(crate) fn record(&mut self, depth: usize, id: VertexId) {
        match self.levels.get_mut(depth) {
            Some(level) => {
                debug_assert_eq!(level.last + 1, id, "depth map ids must be contiguous");
                level.last = id;
            }
            None => {
                debug_assert_eq!(depth, self.levels.len(), "depth map levels must not skip");
                self.levels.push(LevelRange {
                    first: id,
                    last: id,
                });
            }
        }
    }

    /// Returns the range of `depth`, if any vertex was created there.
    pub fn level(&self, depth: usize) -> Option<LevelRange> {
        self.levels.get(depth).copied()
    }

    /// All levels, shallowest first.
    pub fn levels(&self) -> &[LevelRange] {
        &self.levels
    }

    /// Number of populated levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Finds the level holding `id`.
    pub fn depth_of(&self, id: VertexId) -> Option<usize> {
        let depth = self.levels.partition_point(|level| level.last < id);
        self.levels
            .get(depth)
            .filter(|level| level.contains(id))
            .map(|_| depth)
    }
}
