//! Errors raised at the boundary where the front end hands raw operator
//! codes to the IR.

/// IR construction error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IrError {
    /// A comparison operator code outside the six relational operators.
    #[error("unknown comparison operator code {code}")]
    UnknownComparisonOperator { code: u8 },
    /// An arithmetic operator code outside the known set.
    #[error("unknown math operator code {code}")]
    UnknownMathOperator { code: u8 },
}
