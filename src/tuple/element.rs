// ============================================================================
// Tuple Element Contract
// Trait bound shared by every type usable as a tuple element
// ============================================================================

use std::fmt;

use num_traits::Num;

/// Contract for types storable in a `FixedTuple`.
///
/// Covers every primitive numeric type via the blanket impl below; never
/// implement it manually. Operations with extra requirements (absolute
/// value, element casts, binary layout) add their own bounds on top.
pub trait TupleElement: Num + PartialOrd + Copy + fmt::Debug + 'static {}

impl<T> TupleElement for T where T: Num + PartialOrd + Copy + fmt::Debug + 'static {}
