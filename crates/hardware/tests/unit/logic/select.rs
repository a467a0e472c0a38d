//! # Selection Tests
//!
//! Multiplexer trees of every depth, the recursive demultiplexer and its fixed
//! 2/4/8-way unrollings.

use crate::common::{arb_bus, b, binary};
use nandsim_core::common::{Bus, CircuitError, lo};
use nandsim_core::logic::select::{dsel, dsel2, dsel4, dsel8, sel, sel2};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

fn buses(literals: &[&str]) -> Vec<Bus> {
    literals.iter().map(|s| b(s)).collect()
}

// ══════════════════════════════════════════════════════════
// 1. Multiplexers
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("0", "1", "0", "0")]
#[case("0", "1", "1", "1")]
#[case("1", "1", "0", "1")]
#[case("1", "1", "1", "1")]
#[case("0", "0", "1", "0")]
#[case("00001000", "10000000", "0", "00001000")]
#[case("00001000", "10000000", "1", "10000000")]
#[case("1111", "1010", "0", "1111")]
#[case("1111", "1010", "1", "1010")]
fn test_sel2(#[case] a: &str, #[case] bb: &str, #[case] s: &str, #[case] expected: &str) {
    assert_eq!(sel2(&b(a), &b(bb), &b(s)), Ok(b(expected)));
    assert_eq!(sel(&buses(&[a, bb]), &b(s)), Ok(b(expected)));
}

#[test]
fn test_sel4_one_hot() {
    for j in 0..4 {
        let mut inputs = vec![lo(4); 4];
        inputs[j] = b("0110");
        assert_eq!(sel(&inputs, &binary(j, 2)), Ok(b("0110")), "select {j}");
    }
}

#[test]
fn test_sel8_one_cold() {
    for j in 0..8 {
        let mut inputs = vec![b("1"); 8];
        inputs[j] = b("0");
        assert_eq!(sel(&inputs, &binary(j, 3)), Ok(b("0")), "select {j}");
    }
}

#[test]
fn test_sel16_three_bit_lanes() {
    let inputs = buses(&[
        "101", "111", "101", "001", "001", "100", "111", "101", "100", "100", "101", "110",
        "010", "000", "010", "101",
    ]);
    assert_eq!(sel(&inputs, &b("1110")), Ok(b("010")));
}

#[test]
fn test_sel_selector_width_mismatch() {
    let inputs = buses(&["0", "1", "0", "1"]);
    assert_eq!(
        sel(&inputs, &b("1")),
        Err(CircuitError::WidthMismatch {
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        sel(&inputs, &b("101")),
        Err(CircuitError::WidthMismatch {
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn test_sel_unequal_input_widths() {
    let inputs = buses(&["00", "01", "1", "11"]);
    assert_eq!(
        sel(&inputs, &b("00")),
        Err(CircuitError::WidthMismatch {
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn test_sel_input_count() {
    assert_eq!(
        sel(&buses(&["0", "1", "1"]), &b("00")),
        Err(CircuitError::InputCount(3))
    );
    assert_eq!(sel(&[], &b("")), Err(CircuitError::InputCount(0)));
}

#[test]
fn test_sel2_control_must_be_one_bit() {
    assert!(sel2(&b("10"), &b("01"), &b("11")).is_err());
    assert!(sel2(&b("10"), &b("0"), &b("1")).is_err());
}

// ══════════════════════════════════════════════════════════
// 2. Demultiplexers
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("0", "0", ["0", "0"])]
#[case("0", "1", ["0", "0"])]
#[case("1", "0", ["1", "0"])]
#[case("1", "1", ["0", "1"])]
#[case("00001010", "0", ["00001010", "00000000"])]
#[case("00001010", "1", ["00000000", "00001010"])]
fn test_dsel2(#[case] data: &str, #[case] s: &str, #[case] expected: [&str; 2]) {
    let want = buses(&expected);
    assert_eq!(dsel2(&b(data), &b(s)).unwrap().to_vec(), want);
    assert_eq!(dsel(&b(data), &b(s)).unwrap(), want);
}

#[test]
fn test_dsel4_routes_each_lane() {
    for j in 0..4 {
        let lanes = dsel4(&b("1"), &binary(j, 2)).unwrap();
        for (m, lane) in lanes.iter().enumerate() {
            let expected = if m == j { "1" } else { "0" };
            assert_eq!(lane, &b(expected), "select {j} lane {m}");
        }
    }
}

#[test]
fn test_dsel8_routes_each_lane() {
    for j in 0..8 {
        let lanes = dsel8(&b("1"), &binary(j, 3)).unwrap();
        for (m, lane) in lanes.iter().enumerate() {
            let expected = if m == j { "1" } else { "0" };
            assert_eq!(lane, &b(expected), "select {j} lane {m}");
        }
    }
}

#[test]
fn test_fixed_forms_match_recursive() {
    let data = b("1101");
    for j in 0..8 {
        let recursive = dsel(&data, &binary(j, 3)).unwrap();
        assert_eq!(dsel8(&data, &binary(j, 3)).unwrap().to_vec(), recursive);
    }
    for j in 0..4 {
        let recursive = dsel(&data, &binary(j, 2)).unwrap();
        assert_eq!(dsel4(&data, &binary(j, 2)).unwrap().to_vec(), recursive);
    }
}

#[test]
fn test_dsel_large_selection() {
    let data = b("110100000100101010101111001");
    let lanes = dsel(&data, &b("11111111")).unwrap();
    assert_eq!(lanes.len(), 256);
    assert_eq!(lanes[255], data);
    assert!(lanes[..255].iter().all(|lane| *lane == lo(data.width())));
}

#[test]
fn test_dsel_empty_selector_is_identity() {
    assert_eq!(dsel(&b("101"), &b("")), Ok(vec![b("101")]));
}

#[test]
fn test_fixed_forms_check_selector_width() {
    assert!(dsel4(&b("1"), &b("1")).is_err());
    assert!(dsel8(&b("1"), &b("11")).is_err());
    assert!(dsel2(&b("1"), &b("10")).is_err());
}

// ══════════════════════════════════════════════════════════
// 3. Properties
// ══════════════════════════════════════════════════════════

fn arb_mux_case() -> impl Strategy<Value = (Vec<Bus>, usize, usize)> {
    (0usize..=4, 1usize..=6).prop_flat_map(|(k, width)| {
        let count = 1usize << k;
        (
            prop::collection::vec(arb_bus(width), count),
            0..count,
            Just(k),
        )
    })
}

proptest! {
    #[test]
    fn prop_sel_picks_indexed_input((inputs, j, k) in arb_mux_case()) {
        prop_assert_eq!(sel(&inputs, &binary(j, k))?, inputs[j].clone());
    }

    #[test]
    fn prop_dsel_routes_to_one_lane(
        data in (1usize..=8).prop_flat_map(arb_bus),
        (k, j) in (1usize..=5).prop_flat_map(|k| (Just(k), 0..(1usize << k))),
    ) {
        let lanes = dsel(&data, &binary(j, k))?;
        prop_assert_eq!(lanes.len(), 1 << k);
        for (m, lane) in lanes.iter().enumerate() {
            if m == j {
                prop_assert_eq!(lane, &data);
            } else {
                prop_assert_eq!(lane, &lo(data.width()));
            }
        }
    }
}
