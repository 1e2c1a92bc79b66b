//! Composition Model: the ordered block list of one page plus the selection.
//!
//! # Invariants
//! - The block list is never empty.
//! - Ids come from a per-composition counter and are never handed out twice,
//!   even after the block that held one is removed.
//! - `selected_id` is a lookup key, not a reference; every operation leaves it
//!   pointing at a block that is present.

use serde::{Deserialize, Serialize};

use crate::composition::block::{BlockConfig, BlockId, BlockPatch};
use crate::errors::CompositionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    blocks: Vec<BlockConfig>,
    selected_id: Option<BlockId>,
    #[serde(skip)]
    next_id: u64,
}

impl Default for Composition {
    fn default() -> Self {
        Self::new(&BlockPatch::default())
    }
}

impl Composition {
    /// Starts a composition with one block built from `first` and selects it.
    pub fn new(first: &BlockPatch) -> Self {
        let mut block = BlockConfig::with_id(BlockId(1));
        block.apply(first);
        Self {
            blocks: vec![block],
            selected_id: Some(BlockId(1)),
            next_id: 2,
        }
    }

    /// Rebuilds a composition from already-validated parts.
    pub(crate) fn from_parts(
        blocks: Vec<BlockConfig>,
        selected_id: Option<BlockId>,
        next_id: u64,
    ) -> Self {
        let selected_id = selected_id
            .filter(|id| blocks.iter().any(|b| b.id == *id))
            .or_else(|| blocks.first().map(|b| b.id));
        Self {
            blocks,
            selected_id,
            next_id,
        }
    }

    pub fn blocks(&self) -> &[BlockConfig] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn selected_id(&self) -> Option<BlockId> {
        self.selected_id
    }

    pub(crate) fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockConfig> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn selected(&self) -> Option<&BlockConfig> {
        self.selected_id.and_then(|id| self.get(id))
    }

    fn position(&self, id: BlockId) -> Result<usize, CompositionError> {
        self.blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or(CompositionError::NotFound(id))
    }

    /// Hands out the next id. Fails once the counter cannot advance, so an id
    /// is never issued twice.
    fn allocate_id(&mut self) -> Result<BlockId, CompositionError> {
        let next = self.next_id.checked_add(1).ok_or_else(|| {
            CompositionError::InvalidOperation("block id space exhausted".to_string())
        })?;
        let id = BlockId(self.next_id);
        self.next_id = next;
        Ok(id)
    }

    /// Appends a default block with `defaults` applied, selects it and returns its id.
    pub fn append(&mut self, defaults: &BlockPatch) -> Result<BlockId, CompositionError> {
        let id = self.allocate_id()?;
        let mut block = BlockConfig::with_id(id);
        block.apply(defaults);
        self.blocks.push(block);
        self.selected_id = Some(id);
        Ok(id)
    }

    /// Removes a block. The last remaining block cannot be removed. When the
    /// selected block goes, selection moves to the new first block.
    pub fn remove(&mut self, id: BlockId) -> Result<BlockConfig, CompositionError> {
        let index = self.position(id)?;
        if self.blocks.len() == 1 {
            return Err(CompositionError::InvalidOperation(
                "cannot remove the only block of a composition".to_string(),
            ));
        }
        let removed = self.blocks.remove(index);
        if self.selected_id == Some(id) {
            self.selected_id = self.blocks.first().map(|b| b.id);
        }
        Ok(removed)
    }

    /// Swaps a block with its neighbour. Moving past either end is a no-op.
    pub fn move_block(
        &mut self,
        id: BlockId,
        direction: MoveDirection,
    ) -> Result<(), CompositionError> {
        let index = self.position(id)?;
        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.blocks.len() => index + 1,
            _ => return Ok(()),
        };
        self.blocks.swap(index, target);
        Ok(())
    }

    pub fn move_up(&mut self, id: BlockId) -> Result<(), CompositionError> {
        self.move_block(id, MoveDirection::Up)
    }

    pub fn move_down(&mut self, id: BlockId) -> Result<(), CompositionError> {
        self.move_block(id, MoveDirection::Down)
    }

    pub fn update(&mut self, id: BlockId, patch: &BlockPatch) -> Result<(), CompositionError> {
        let index = self.position(id)?;
        self.blocks[index].apply(patch);
        Ok(())
    }

    pub fn select(&mut self, id: BlockId) -> Result<(), CompositionError> {
        self.position(id)?;
        self.selected_id = Some(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::variants::{Background, Padding};

    fn ids(c: &Composition) -> Vec<u64> {
        c.blocks().iter().map(|b| b.id.0).collect()
    }

    fn three_blocks() -> Composition {
        let mut c = Composition::default();
        c.append(&BlockPatch::default()).unwrap();
        c.append(&BlockPatch::default()).unwrap();
        c
    }

    #[test]
    fn test_new_composition_has_one_selected_block() {
        let c = Composition::default();
        assert_eq!(c.len(), 1);
        assert_eq!(c.selected_id(), Some(c.blocks()[0].id));
    }

    #[test]
    fn test_append_selects_new_block() {
        let mut c = Composition::default();
        let id = c.append(&BlockPatch {
            padding: Some(Padding::Sm),
            background: Some(Background::Muted),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.selected_id(), Some(id));
        let block = c.get(id).unwrap();
        assert_eq!(block.padding, Padding::Sm);
        assert_eq!(block.background, Background::Muted);
    }

    #[test]
    fn test_ids_are_never_reused_after_removal() {
        let mut c = three_blocks();
        assert_eq!(ids(&c), vec![1, 2, 3]);
        c.remove(BlockId(3)).unwrap();
        let fresh = c.append(&BlockPatch::default()).unwrap();
        assert_eq!(fresh, BlockId(4));
    }

    #[test]
    fn test_remove_only_block_fails_and_leaves_composition_unchanged() {
        let mut c = Composition::default();
        let before = c.clone();
        let err = c.remove(BlockId(1)).unwrap_err();
        assert!(matches!(err, CompositionError::InvalidOperation(_)));
        assert_eq!(c, before);
    }

    #[test]
    fn test_remove_selected_moves_selection_to_first() {
        let mut c = three_blocks();
        c.select(BlockId(2)).unwrap();
        c.remove(BlockId(2)).unwrap();
        assert_eq!(c.selected_id(), Some(BlockId(1)));

        c.select(BlockId(1)).unwrap();
        c.remove(BlockId(1)).unwrap();
        assert_eq!(c.selected_id(), Some(BlockId(3)));
    }

    #[test]
    fn test_remove_unselected_keeps_selection() {
        let mut c = three_blocks();
        assert_eq!(c.selected_id(), Some(BlockId(3)));
        c.remove(BlockId(1)).unwrap();
        assert_eq!(c.selected_id(), Some(BlockId(3)));
    }

    #[test]
    fn test_remove_unknown_is_not_found() {
        let mut c = three_blocks();
        assert_eq!(
            c.remove(BlockId(99)).unwrap_err(),
            CompositionError::NotFound(BlockId(99))
        );
    }

    #[test]
    fn test_move_swaps_neighbours() {
        let mut c = three_blocks();
        c.move_up(BlockId(3)).unwrap();
        assert_eq!(ids(&c), vec![1, 3, 2]);
        c.move_down(BlockId(1)).unwrap();
        assert_eq!(ids(&c), vec![3, 1, 2]);
    }

    #[test]
    fn test_move_at_boundary_is_noop() {
        let mut c = three_blocks();
        c.move_up(BlockId(1)).unwrap();
        c.move_down(BlockId(3)).unwrap();
        assert_eq!(ids(&c), vec![1, 2, 3]);
        assert!(c.move_up(BlockId(42)).is_err());
    }

    #[test]
    fn test_update_and_select_reject_unknown_ids() {
        let mut c = Composition::default();
        let err = c.update(BlockId(5), &BlockPatch::default()).unwrap_err();
        assert_eq!(err, CompositionError::NotFound(BlockId(5)));
        assert!(c.select(BlockId(5)).is_err());
        assert_eq!(c.selected_id(), Some(BlockId(1)));
    }

    #[test]
    fn test_update_merges_fields() {
        let mut c = Composition::default();
        c.update(
            BlockId(1),
            &BlockPatch {
                title: Some("Pricing".to_string()),
                show_title: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(c.blocks()[0].visible_title(), Some("Pricing"));
    }

    #[test]
    fn test_rapid_repeated_operations_keep_invariants() {
        let mut c = Composition::default();
        for round in 0..50u64 {
            let id = c.append(&BlockPatch::default()).unwrap();
            c.move_up(id).unwrap();
            if round % 3 == 0 {
                let first = c.blocks()[0].id;
                c.remove(first).unwrap();
            }
            assert!(!c.blocks().is_empty());
            let selected = c.selected_id().unwrap();
            assert!(c.get(selected).is_some());
        }
        let mut seen = ids(&c);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), c.len());
    }

    #[test]
    fn test_append_fails_when_counter_is_exhausted() {
        let mut c = Composition::from_parts(
            vec![BlockConfig::with_id(BlockId(7))],
            None,
            u64::MAX - 1,
        );
        assert_eq!(c.append(&BlockPatch::default()).unwrap(), BlockId(u64::MAX - 1));
        let before = c.clone();
        let err = c.append(&BlockPatch::default()).unwrap_err();
        assert!(matches!(err, CompositionError::InvalidOperation(_)));
        assert_eq!(c, before);
    }

    #[test]
    fn test_from_parts_redirects_stale_selection() {
        let c = three_blocks();
        let rebuilt =
            Composition::from_parts(c.blocks().to_vec(), Some(BlockId(77)), c.next_id());
        assert_eq!(rebuilt.selected_id(), Some(BlockId(1)));
    }
}
