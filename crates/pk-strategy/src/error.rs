use pk_core::LotId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// Two managed lots share an id, so their tickets would be indistinguishable.
    #[error("lot {0} appears more than once")]
    DuplicateLot(LotId),
}

pub type StrategyResult<T> = Result<T, StrategyError>;
