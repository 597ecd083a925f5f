use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BtError {
    #[error("{node} node expects exactly {expected} children, got {got}")]
    Arity {
        node: &'static str,
        expected: usize,
        got: usize,
    },
}
