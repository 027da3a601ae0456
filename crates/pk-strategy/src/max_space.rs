//! Max-space allocation.

use pk_core::StrategyKind;
use pk_lot::LotHandle;

use crate::{AllocationStrategy, StrategyResult, ensure_unique_ids};

/// Parks each vehicle in the lot with the strictly greatest free space.
///
/// On a tie the lowest sequence index wins, so `[10, 10, 10]` fills lot 0
/// first.
#[derive(Clone, Debug)]
pub struct MaxSpaceStrategy {
    lots: Vec<LotHandle>,
}

impl MaxSpaceStrategy {
    /// # Errors
    ///
    /// [`StrategyError::DuplicateLot`](crate::StrategyError::DuplicateLot)
    /// if two lots share an id.
    pub fn new(lots: Vec<LotHandle>) -> StrategyResult<Self> {
        ensure_unique_ids(&lots)?;
        Ok(Self { lots })
    }
}

impl AllocationStrategy for MaxSpaceStrategy {
    fn lots(&self) -> &[LotHandle] {
        &self.lots
    }

    fn select_lot(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (i, lot) in self.lots.iter().enumerate() {
            let space = lot.available_space();
            // Strict `>` keeps the first index on ties.
            if space > 0 && best.is_none_or(|(_, top)| space > top) {
                best = Some((i, space));
            }
        }
        best.map(|(i, _)| i)
    }

    fn kind(&self) -> Option<StrategyKind> {
        Some(StrategyKind::MaxSpace)
    }
}
