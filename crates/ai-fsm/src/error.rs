use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error("state index {index} out of range (machine has {len} states)")]
    StateOutOfRange { index: usize, len: usize },
}
