// ============================================================================
// Tuple Module
// Fixed-size homogeneous numeric tuples with const-generic arity
// ============================================================================
//
// This module provides:
// - FixedTuple<N, T>: contiguous N-element storage with value semantics
// - TupleElement: the bound shared by every usable element type
// - TupleError: error types for the checked access and export paths
// - lex_lt / lex_gt / abs free functions
// - Tuple2i, Tuple3i, ...: aliases for the common arities
//
// Design principles:
// - Plain Copy value semantics, no allocation, no interior mutability
// - Checked access by default, explicit unsafe opt-out for hot loops
// - Cross-size/cross-type conversion is always explicit, never implicit
// - Native-layout binary format for single-platform save/load

mod element;
mod errors;
mod fixed_tuple;

pub use element::TupleElement;
pub use errors::{TupleError, TupleResult};
pub use fixed_tuple::{
    abs, lex_gt, lex_lt, FixedTuple, Tuple2f, Tuple2i, Tuple3d, Tuple3f, Tuple3i, Tuple4d,
    Tuple4f, Tuple4i,
};
