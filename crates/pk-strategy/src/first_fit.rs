//! First-fit allocation.

use pk_core::StrategyKind;
use pk_lot::LotHandle;

use crate::{AllocationStrategy, StrategyResult, ensure_unique_ids};

/// Parks each vehicle in the first lot, by sequence position, that has space.
#[derive(Clone, Debug)]
pub struct FirstFitStrategy {
    lots: Vec<LotHandle>,
}

impl FirstFitStrategy {
    /// # Errors
    ///
    /// [`StrategyError::DuplicateLot`](crate::StrategyError::DuplicateLot)
    /// if two lots share an id.
    pub fn new(lots: Vec<LotHandle>) -> StrategyResult<Self> {
        ensure_unique_ids(&lots)?;
        Ok(Self { lots })
    }
}

impl AllocationStrategy for FirstFitStrategy {
    fn lots(&self) -> &[LotHandle] {
        &self.lots
    }

    fn select_lot(&self) -> Option<usize> {
        self.lots.iter().position(|lot| lot.available_space() > 0)
    }

    fn kind(&self) -> Option<StrategyKind> {
        Some(StrategyKind::FirstFit)
    }
}
