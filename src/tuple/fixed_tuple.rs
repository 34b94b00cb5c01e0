// ============================================================================
// Fixed Tuple
// Compile-time-sized homogeneous numeric storage with value semantics
// ============================================================================

use std::fmt;
use std::io::{self, Read, Write};
use std::ops::{Index, IndexMut};

use bytemuck::Pod;
use num_traits::{AsPrimitive, Signed};

use super::element::TupleElement;
use super::errors::{TupleError, TupleResult};

/// Fixed-size homogeneous numeric tuple with compile-time arity.
///
/// Stores exactly `N` elements of type `T` contiguously, with plain `Copy`
/// value semantics and no allocation. This is the storage layer shared by
/// the vector and point types built on top of it; arithmetic lives in
/// those derived types, not here.
///
/// Unlike a raw array in C, a freshly constructed tuple is never left with
/// unspecified contents: [`new`](Self::new) and `Default` zero-fill.
///
/// # Type Parameters
/// - `N`: Number of elements, fixed at compile time.
/// - `T`: Element type (any primitive numeric type).
///
/// # Example
/// ```ignore
/// use vox_math::tuple::{FixedTuple, Tuple3i, abs, lex_lt};
///
/// let a = Tuple3i::from_array([1, 2, 3]);
/// let b = Tuple3i::from_array([1, 2, 4]);
/// assert!(lex_lt(&a, &b));
/// assert_eq!(a.to_string(), "[1, 2, 3]");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedTuple<const N: usize, T> {
    data: [T; N],
}

impl<const N: usize, T: TupleElement> FixedTuple<N, T> {
    /// Number of elements
    pub const SIZE: usize = N;

    /// Size of the native binary representation in bytes
    pub const BYTE_SIZE: usize = N * std::mem::size_of::<T>();

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a zero-filled tuple.
    #[inline]
    pub fn new() -> Self {
        Self { data: [T::zero(); N] }
    }

    /// Create a tuple from an array of exactly `N` elements.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Convert from a tuple of any size and element type.
    ///
    /// The first `min(N, M)` elements are copied with an `as`-style cast.
    /// Converting from a larger tuple truncates; converting from a smaller
    /// tuple zero-fills the trailing elements. Deliberately a named
    /// constructor rather than a `From` impl, so a shape-changing
    /// conversion is always visible at the call site.
    ///
    /// # Example
    /// ```ignore
    /// let narrow = Tuple2i::from_array([4, 5]);
    /// let wide = FixedTuple::<4, i64>::from_tuple(&narrow);
    /// assert_eq!(wide.into_array(), [4, 5, 0, 0]);
    /// ```
    pub fn from_tuple<const M: usize, U>(src: &FixedTuple<M, U>) -> Self
    where
        U: TupleElement + AsPrimitive<T>,
    {
        let mut data = [T::zero(); N];
        for (dst, value) in data.iter_mut().zip(src.data.iter()) {
            *dst = value.as_();
        }
        Self { data }
    }

    /// Consume the tuple, returning the backing array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.data
    }

    // ========================================================================
    // Indexed Access
    // ========================================================================

    /// Element at `index`, with the failure reported instead of panicking.
    ///
    /// # Errors
    /// Returns `IndexOutOfBounds` if `index >= N`.
    #[inline]
    pub fn checked_get(&self, index: usize) -> TupleResult<T> {
        self.data
            .get(index)
            .copied()
            .ok_or(TupleError::IndexOutOfBounds { index, size: N })
    }

    /// Mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns `IndexOutOfBounds` if `index >= N`.
    #[inline]
    pub fn checked_get_mut(&mut self, index: usize) -> TupleResult<&mut T> {
        self.data
            .get_mut(index)
            .ok_or(TupleError::IndexOutOfBounds { index, size: N })
    }

    /// Element at `index` without a bounds check.
    ///
    /// Fast path for hot numeric loops; the checked `Index` impl is the
    /// default.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> T {
        *self.data.get_unchecked(index)
    }

    /// Mutable reference to the element at `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        self.data.get_unchecked_mut(index)
    }

    // ========================================================================
    // Compatibility Export
    // ========================================================================

    /// Copy all `N` elements into `dest`, casting each to `S`.
    ///
    /// Elements land in order starting at `dest[0]`; slots past `N` are
    /// left untouched. For interop with flat-array APIs.
    ///
    /// # Errors
    /// Returns `BufferTooSmall` if `dest` has fewer than `N` slots.
    pub fn copy_to_slice<S>(&self, dest: &mut [S]) -> TupleResult<()>
    where
        S: Copy + 'static,
        T: AsPrimitive<S>,
    {
        if dest.len() < N {
            return Err(TupleError::BufferTooSmall { required: N, capacity: dest.len() });
        }
        for (dst, value) in dest.iter_mut().zip(self.data.iter()) {
            *dst = value.as_();
        }
        Ok(())
    }

    /// View of the backing storage as a contiguous slice.
    ///
    /// Escape hatch for legacy/interop code that wants the elements as a
    /// flat array; prefer the typed accessors elsewhere.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable view of the backing storage as a contiguous slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    // ========================================================================
    // Binary Serialization
    // ========================================================================

    /// Write the raw bytes of the backing array to `writer`.
    ///
    /// Emits `N * size_of::<T>()` bytes in native memory layout: no header,
    /// no length prefix, no endianness normalization. Data written on one
    /// platform only reads back on a platform with the identical element
    /// layout and endianness; this is a fast single-platform save format,
    /// not a wire format. Enable the `serde` feature when portability is
    /// needed.
    ///
    /// # Errors
    /// Propagates any error from the underlying writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()>
    where
        T: Pod,
    {
        writer.write_all(bytemuck::cast_slice(self.as_slice()))
    }

    /// Overwrite all `N` elements with raw bytes from `reader`.
    ///
    /// Reads exactly `N * size_of::<T>()` bytes in native memory layout.
    ///
    /// # Errors
    /// A source that runs out early reports `UnexpectedEof`; the tuple
    /// contents are unspecified afterwards and must not be relied on.
    pub fn read_from<R: Read>(&mut self, reader: &mut R) -> io::Result<()>
    where
        T: Pod,
    {
        if let Err(err) = reader.read_exact(bytemuck::cast_slice_mut(self.as_mut_slice())) {
            tracing::debug!("tuple read of {} bytes failed: {}", Self::BYTE_SIZE, err);
            return Err(err);
        }
        Ok(())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const N: usize, T: TupleElement> Default for FixedTuple<N, T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, T> From<[T; N]> for FixedTuple<N, T> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<const N: usize, T> From<FixedTuple<N, T>> for [T; N] {
    #[inline]
    fn from(tuple: FixedTuple<N, T>) -> Self {
        tuple.data
    }
}

impl<const N: usize, T> Index<usize> for FixedTuple<N, T> {
    type Output = T;

    /// Panics if `index >= N`; see `checked_get` for the reporting variant
    /// and `get_unchecked` for the unchecked one.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<const N: usize, T> IndexMut<usize> for FixedTuple<N, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const N: usize, T: TupleElement + fmt::Display> fmt::Display for FixedTuple<N, T> {
    /// Formats as `[e0, e1, ..., e(N-1)]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<const N: usize, T: TupleElement + fmt::Display> fmt::Debug for FixedTuple<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedTuple<{}>{}", N, self)
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Returns true if `a` precedes `b`, comparing components in order of
/// significance.
///
/// Positions `0..N-1` decide at the first pair that is not exactly equal;
/// when the whole prefix matches, the result is the comparison of the
/// final components, which is always performed even when they too are
/// equal (yielding `false`, as a strict order requires). Gives a total
/// order for totally ordered element types, so tuples can serve as sorted
/// map keys; the derived `Ord` agrees with it.
pub fn lex_lt<const N: usize, T: TupleElement>(
    a: &FixedTuple<N, T>,
    b: &FixedTuple<N, T>,
) -> bool {
    if N == 0 {
        return false;
    }
    for i in 0..N - 1 {
        if a.data[i] != b.data[i] {
            return a.data[i] < b.data[i];
        }
    }
    a.data[N - 1] < b.data[N - 1]
}

/// Returns true if `a` succeeds `b`, comparing components in order of
/// significance.
pub fn lex_gt<const N: usize, T: TupleElement>(
    a: &FixedTuple<N, T>,
    b: &FixedTuple<N, T>,
) -> bool {
    if N == 0 {
        return false;
    }
    for i in 0..N - 1 {
        if a.data[i] != b.data[i] {
            return a.data[i] > b.data[i];
        }
    }
    a.data[N - 1] > b.data[N - 1]
}

// ============================================================================
// Absolute Value
// ============================================================================

/// Element-wise absolute value.
///
/// Dispatch is resolved at compile time through the `Signed` bound:
/// integer elements use integer `abs`, floating elements use the floating
/// one. The most-negative integer has no positive counterpart; overflow
/// there follows the element type's own semantics.
pub fn abs<const N: usize, T>(tuple: &FixedTuple<N, T>) -> FixedTuple<N, T>
where
    T: TupleElement + Signed,
{
    FixedTuple { data: tuple.data.map(|value| value.abs()) }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;
    use std::marker::PhantomData;

    use serde::de::{self, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{FixedTuple, TupleElement};

    // Hand-written rather than derived: serde's array impls do not cover
    // const-generic lengths. Serialized as a fixed-arity sequence, which
    // is the portable counterpart to the native-layout binary format.

    impl<const N: usize, T: Serialize> Serialize for FixedTuple<N, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tup = serializer.serialize_tuple(N)?;
            for value in &self.data {
                tup.serialize_element(value)?;
            }
            tup.end()
        }
    }

    impl<'de, const N: usize, T> Deserialize<'de> for FixedTuple<N, T>
    where
        T: TupleElement + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct TupleVisitor<const N: usize, T>(PhantomData<T>);

            impl<'de, const N: usize, T> Visitor<'de> for TupleVisitor<N, T>
            where
                T: TupleElement + Deserialize<'de>,
            {
                type Value = FixedTuple<N, T>;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "a sequence of {} numeric elements", N)
                }

                fn visit_seq<A: SeqAccess<'de>>(
                    self,
                    mut seq: A,
                ) -> Result<Self::Value, A::Error> {
                    let mut data = [T::zero(); N];
                    for (i, slot) in data.iter_mut().enumerate() {
                        *slot = seq
                            .next_element()?
                            .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                    }
                    Ok(FixedTuple { data })
                }
            }

            deserializer.deserialize_tuple(N, TupleVisitor(PhantomData))
        }
    }
}

// ============================================================================
// Type Aliases for Common Arities
// ============================================================================

/// Two-component `i32` tuple
pub type Tuple2i = FixedTuple<2, i32>;

/// Three-component `i32` tuple
pub type Tuple3i = FixedTuple<3, i32>;

/// Four-component `i32` tuple
pub type Tuple4i = FixedTuple<4, i32>;

/// Two-component `f32` tuple
pub type Tuple2f = FixedTuple<2, f32>;

/// Three-component `f32` tuple
pub type Tuple3f = FixedTuple<3, f32>;

/// Four-component `f32` tuple
pub type Tuple4f = FixedTuple<4, f32>;

/// Three-component `f64` tuple
pub type Tuple3d = FixedTuple<3, f64>;

/// Four-component `f64` tuple
pub type Tuple4d = FixedTuple<4, f64>;

// ============================================================================
// Tests
// ============================================================================
