// ============================================================================
// Vox Math Library
// Fixed-size numeric tuple storage for volumetric math types
// ============================================================================

//! # Vox Math
//!
//! Storage foundation for the vector and point types of a volumetric-math
//! stack: a compile-time-sized, contiguous, homogeneous tuple with indexed
//! access, cross-size/cross-type conversion, lexicographic ordering,
//! absolute value, formatting, and raw binary serialization.
//!
//! ## Features
//!
//! - **Const-generic arity** - tuple size is part of the type, storage is
//!   a plain `[T; N]` with `Copy` value semantics and no allocation
//! - **Explicit conversion** - truncating/zero-padding construction from
//!   any other tuple shape, never triggered implicitly
//! - **Checked by default** - indexing panics on misuse, checked accessors
//!   report, and an `unsafe` fast path exists for hot loops
//! - **Native-layout binary I/O** - fast single-platform save/load, with
//!   an optional `serde` feature for portable exchange
//!
//! ## Example
//!
//! ```rust
//! use vox_math::prelude::*;
//!
//! let a = Tuple3i::from_array([1, 2, 3]);
//! let b = Tuple3i::from_array([1, 2, 4]);
//! assert!(lex_lt(&a, &b));
//! assert_eq!(a.to_string(), "[1, 2, 3]");
//!
//! // Widen to four f64 lanes: the prefix is cast, the tail zero-filled.
//! let wide = FixedTuple::<4, f64>::from_tuple(&a);
//! assert_eq!(wide.as_slice(), &[1.0, 2.0, 3.0, 0.0]);
//!
//! assert_eq!(abs(&Tuple3i::from_array([-5, 0, 5])).to_string(), "[5, 0, 5]");
//! ```

pub mod tuple;

// Re-exports for convenience
pub mod prelude {
    pub use crate::tuple::{
        abs, lex_gt, lex_lt, FixedTuple, Tuple2f, Tuple2i, Tuple3d, Tuple3f, Tuple3i, Tuple4d,
        Tuple4f, Tuple4i, TupleElement, TupleError, TupleResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::collections::BTreeMap;
    use std::io::Cursor;

    #[test]
    fn test_tuples_as_sorted_map_keys() {
        let mut voxels = BTreeMap::new();
        voxels.insert(Tuple3i::from_array([1, 2, 4]), "occupied");
        voxels.insert(Tuple3i::from_array([1, 2, 3]), "empty");
        voxels.insert(Tuple3i::from_array([1, 2, 3]), "empty again");

        // Duplicate key collapses; iteration order follows the ordering.
        assert_eq!(voxels.len(), 2);
        let keys: Vec<_> = voxels.keys().copied().collect();
        assert!(lex_lt(&keys[0], &keys[1]));
        assert_eq!(keys[0].to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_convert_then_persist() {
        let coarse = Tuple2i::from_array([7, -3]);
        let lifted = FixedTuple::<4, i64>::from_tuple(&coarse);

        let mut buf = Vec::new();
        lifted.write_to(&mut buf).unwrap();

        let mut restored = FixedTuple::<4, i64>::new();
        restored.read_from(&mut Cursor::new(buf)).unwrap();
        assert_eq!(restored.into_array(), [7, -3, 0, 0]);
    }
}
