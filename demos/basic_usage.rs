// ============================================================================
// Basic Usage Example
// ============================================================================

use std::collections::BTreeMap;
use std::io::Cursor;

use vox_math::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Fixed Tuple Example ===\n");

    // Construction and formatting
    let a = Tuple3i::from_array([1, 2, 3]);
    let b = Tuple3i::from_array([1, 2, 4]);
    println!("a = {}", a);
    println!("b = {}", b);

    // Lexicographic ordering
    println!("\nlex_lt(a, b) = {}", lex_lt(&a, &b));
    println!("lex_gt(b, a) = {}", lex_gt(&b, &a));

    // Widen to four f64 lanes, then narrow back down to two i32 lanes
    let wide = FixedTuple::<4, f64>::from_tuple(&a);
    println!("\nwidened  = {}", wide);
    let narrow = Tuple2i::from_tuple(&wide);
    println!("narrowed = {}", narrow);

    // Absolute value
    let signed = Tuple3i::from_array([-5, 0, 5]);
    println!("\nabs({}) = {}", signed, abs(&signed));

    // Native-layout binary round trip
    let mut buf = Vec::new();
    a.write_to(&mut buf).expect("writing to a Vec cannot fail");
    let mut restored = Tuple3i::new();
    restored
        .read_from(&mut Cursor::new(buf))
        .expect("buffer holds a full tuple");
    println!("\nround-tripped {} bytes -> {}", Tuple3i::BYTE_SIZE, restored);

    // Tuples as ordered map keys
    let mut voxels = BTreeMap::new();
    voxels.insert(b, "occupied");
    voxels.insert(a, "empty");

    println!("\n=== Voxel Map ===");
    for (coord, state) in &voxels {
        println!("  {} -> {}", coord, state);
    }
}
