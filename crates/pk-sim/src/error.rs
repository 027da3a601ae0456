use pk_core::ParkingError;
use pk_strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("supplied {got} lots but configuration lists {expected} capacities")]
    LotCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("cannot build strategy: {0}")]
    Strategy(#[from] StrategyError),

    #[error("parking invariant violated: {0}")]
    Parking(#[from] ParkingError),
}

pub type SimResult<T> = Result<T, SimError>;
