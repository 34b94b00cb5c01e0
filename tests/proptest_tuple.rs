use proptest::prelude::*;
use std::io::Cursor;
use vox_math::prelude::*;

// Property 1: Writing a tuple's bytes and reading them back reproduces it
proptest! {
    #[test]
    fn prop_binary_round_trip(values in prop::array::uniform4(any::<i32>())) {
        let original = FixedTuple::<4, i32>::from_array(values);

        let mut buf = Vec::new();
        original.write_to(&mut buf).unwrap();
        prop_assert_eq!(buf.len(), FixedTuple::<4, i32>::BYTE_SIZE);

        let mut restored = FixedTuple::<4, i32>::new();
        restored.read_from(&mut Cursor::new(buf)).unwrap();
        prop_assert_eq!(restored, original);
    }
}

// Property 2: lex_lt/lex_gt are asymmetric and mutually consistent
proptest! {
    #[test]
    fn prop_order_asymmetry(
        a in prop::array::uniform3(any::<i32>()),
        b in prop::array::uniform3(any::<i32>())
    ) {
        let a = Tuple3i::from_array(a);
        let b = Tuple3i::from_array(b);

        prop_assert!(!(lex_lt(&a, &b) && lex_lt(&b, &a)));
        prop_assert_eq!(lex_lt(&a, &b), lex_gt(&b, &a));

        // A tuple never precedes itself.
        prop_assert!(!lex_lt(&a, &a));
        prop_assert!(!lex_gt(&a, &a));
    }
}

// Property 3: with equal prefixes, the last position alone decides
proptest! {
    #[test]
    fn prop_last_position_decides(
        prefix in prop::array::uniform2(any::<i32>()),
        x in any::<i32>(),
        y in any::<i32>()
    ) {
        let a = Tuple3i::from_array([prefix[0], prefix[1], x]);
        let b = Tuple3i::from_array([prefix[0], prefix[1], y]);

        prop_assert_eq!(lex_lt(&a, &b), x < y);
        prop_assert_eq!(lex_gt(&a, &b), x > y);
    }
}

// Property 4: the derived total order agrees with the free functions
proptest! {
    #[test]
    fn prop_derived_ord_agrees(
        a in prop::array::uniform3(any::<i32>()),
        b in prop::array::uniform3(any::<i32>())
    ) {
        let a = Tuple3i::from_array(a);
        let b = Tuple3i::from_array(b);

        prop_assert_eq!(a < b, lex_lt(&a, &b));
        prop_assert_eq!(a > b, lex_gt(&a, &b));
    }
}

// Property 5: widening keeps the prefix and zero-fills the tail
proptest! {
    #[test]
    fn prop_widening_conversion(values in prop::array::uniform3(any::<i16>())) {
        let src = FixedTuple::<3, i16>::from_array(values);
        let dst = FixedTuple::<5, i64>::from_tuple(&src);

        for i in 0..3 {
            prop_assert_eq!(dst[i], values[i] as i64);
        }
        prop_assert_eq!(dst[3], 0);
        prop_assert_eq!(dst[4], 0);
    }
}

// Property 6: narrowing discards exactly the trailing elements
proptest! {
    #[test]
    fn prop_narrowing_conversion(values in prop::array::uniform4(any::<i32>())) {
        let src = FixedTuple::<4, i32>::from_array(values);
        let dst = Tuple2i::from_tuple(&src);

        prop_assert_eq!(dst.into_array(), [values[0], values[1]]);
    }
}

// Property 7: abs matches element-wise absolute value
proptest! {
    #[test]
    fn prop_abs_elementwise(values in prop::array::uniform3(-1_000_000i32..1_000_000)) {
        let tuple = Tuple3i::from_array(values);
        let result = abs(&tuple);

        for i in 0..3 {
            prop_assert_eq!(result[i], values[i].abs());
        }
    }
}

// Property 8: an element written through an index reads back unchanged
proptest! {
    #[test]
    fn prop_index_write_read(
        values in prop::array::uniform4(any::<i32>()),
        idx in 0usize..4,
        x in any::<i32>()
    ) {
        let mut tuple = FixedTuple::<4, i32>::from_array(values);
        tuple[idx] = x;

        prop_assert_eq!(tuple[idx], x);
        prop_assert_eq!(tuple.checked_get(idx), Ok(x));
    }
}

// Property 9: copy_to_slice matches indexed reads and never touches the tail
proptest! {
    #[test]
    fn prop_copy_to_slice(values in prop::array::uniform3(any::<i32>())) {
        let tuple = Tuple3i::from_array(values);

        let mut out = [i64::MIN; 5];
        tuple.copy_to_slice(&mut out).unwrap();

        for i in 0..3 {
            prop_assert_eq!(out[i], values[i] as i64);
        }
        prop_assert_eq!(out[3], i64::MIN);
        prop_assert_eq!(out[4], i64::MIN);
    }
}
