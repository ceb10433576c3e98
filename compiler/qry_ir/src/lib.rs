//! Qry IR - Typed Symbolic Values
//!
//! This crate contains the data structures the query translation compiler
//! uses to represent the recovered meaning of a function body:
//! - Names for interned class names, method names and descriptors
//! - Static value types
//! - Comparison and arithmetic operators
//! - Method signatures
//! - The value arena (constants, arguments, comparisons, arithmetic,
//!   negation, method calls)
//! - The value visitor
//!
//! # Pipeline Position
//!
//! ```text
//! Bytecode → Symbolic Execution → **Typed Values** → Simplify → Query Emission
//! ```
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: class and method names → Name(u32)
//! - **Flatten Everything**: no `Box<Value>`, children are ValueId(u32) indices
//! - **Append Only**: nodes never change after construction; rewrites push
//!   replacements

mod arena;
mod display;
mod error;
mod ids;
mod interner;
mod kind;
mod name;
mod ops;
mod signature;
mod value_type;
pub mod visitor;

pub use arena::ValueArena;
pub use display::ValueDisplay;
pub use error::IrError;
pub use ids::{ValueId, ValueRange};
pub use interner::{InternError, StringInterner};
pub use kind::{ValueKind, ValueNode};
pub use name::Name;
pub use ops::{ComparisonOp, MathOp};
pub use signature::{MethodSignature, MethodSignatureDisplay};
pub use value_type::{ValueType, ValueTypeDisplay};
pub use visitor::{dispatch, for_each_child, ValueVisitor};
