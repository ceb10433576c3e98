//! Qry Simplify - canonicalizing rewrites on typed symbolic values.
//!
//! Symbolic execution of a function body produces a value graph that
//! mirrors the bytecode: comparisons against the literal zero, three-way
//! compares feeding conditional jumps, calls to `equals`, `before` and
//! `after`. This crate rewrites that graph into a small canonical set of
//! relational comparisons so query emission only has to handle one shape.
//!
//! # Pipeline Position
//!
//! ```text
//! Bytecode → Symbolic Execution → Typed Values → **Simplify** → Query Emission
//! ```
//!
//! # Rules
//!
//! - Integer literals compared with `eq`/`ne` fold to `1` or `0`.
//! - `0 op x` is read as `x op' 0` with the operator mirrored.
//! - `cmp(a, b) op 0` collapses to `a op b`.
//! - A comparison or boolean value compared for equality with zero is
//!   kept or negated.
//! - Recognized `equals`/`before`/`after` methods become `eq`/`lt`/`gt`.
//!
//! # Debugging
//!
//! Set `RUST_LOG=qry_simplify=trace` and call [`init_tracing`] to see each
//! rewrite as it fires.

mod comparison;
mod config;
mod driver;
mod error;
mod methods;
mod rewrite;
mod simplifier;
mod stack;
mod zero;

pub use comparison::canonicalize_comparison;
pub use config::{RuleSet, SimplifyConfig, FIXPOINT_PASS_LIMIT};
pub use driver::{simplify, simplify_with};
pub use error::{SimplifyError, SimplifyResult};
pub use methods::{canonicalize_method_call, comparison_methods, ComparisonMethods};
pub use rewrite::Rewrite;
pub use simplifier::Simplifier;
pub use zero::normalize_zero_comparison;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=qry_simplify=debug` for pass summaries or
/// `RUST_LOG=qry_simplify=trace` for individual rewrites.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
