//! Simplification errors.

use qry_ir::{IrError, ValueId};

/// Error from the simplification stage.
///
/// Every well-formed value graph simplifies without error in a single
/// pass; these variants cover corrupted input and the opt-in fixed-point
/// mode.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimplifyError {
    /// The input carried an operator outside the IR's closed operator sets.
    #[error("corrupted value graph: {0}")]
    Ir(#[from] IrError),
    /// The root ID does not refer to a node in the arena.
    #[error("root {id:?} is not a node of this arena")]
    InvalidRoot { id: ValueId },
    /// Fixed-point mode was requested but the graph still changed after
    /// the configured number of passes.
    #[error("no fixed point after {passes} simplification passes")]
    NoFixedPoint { passes: u32 },
}

/// Result type for the simplification stage.
pub type SimplifyResult<T> = Result<T, SimplifyError>;
