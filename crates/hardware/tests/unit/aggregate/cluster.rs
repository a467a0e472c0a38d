//! # Cluster Tests
//!
//! Addressed reads and writes, write isolation between registers, address
//! validation, and non-power-of-two register counts.

use crate::common::{TestContext, b, binary};
use nandsim_core::aggregate::Cluster;
use nandsim_core::common::{CircuitError, lo};
use nandsim_core::config::ExecMode;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn run(mode: ExecMode, width: usize, count: usize, script: &[(&str, &str, &str, &str)]) {
    let tc = TestContext::new(mode);
    let mut cluster = Cluster::new(width, count).unwrap();
    for (i, &(data, address, load, expected)) in script.iter().enumerate() {
        assert_eq!(
            cluster.eval(tc.ctx(), &b(data), &b(address), &b(load)),
            Ok(b(expected)),
            "step {i}"
        );
    }
}

#[rstest]
fn test_four_by_four(#[values(ExecMode::Fast, ExecMode::GateAccurate)] mode: ExecMode) {
    run(
        mode,
        4,
        4,
        &[
            ("1011", "00", "1", "1011"),
            ("1111", "00", "0", "1011"),
            ("1111", "00", "0", "1011"),
            ("1111", "00", "1", "1111"),
            ("0000", "00", "1", "0000"),
            ("0110", "00", "1", "0110"),
            ("1001", "11", "1", "1001"),
            ("0000", "00", "0", "0110"),
        ],
    );
}

#[rstest]
fn test_four_by_ten(#[values(ExecMode::Fast, ExecMode::GateAccurate)] mode: ExecMode) {
    run(
        mode,
        10,
        4,
        &[
            ("0000100001", "00", "1", "0000100001"),
            ("1111111000", "01", "1", "1111111000"),
            ("0001111000", "10", "1", "0001111000"),
            ("0101010101", "11", "1", "0101010101"),
            ("0000000000", "00", "0", "0000100001"),
            ("0000000000", "01", "0", "1111111000"),
            ("0000000000", "10", "0", "0001111000"),
            ("0101010101", "11", "0", "0101010101"),
        ],
    );
}

#[rstest]
fn test_two_by_twenty(#[values(ExecMode::Fast, ExecMode::GateAccurate)] mode: ExecMode) {
    let low = "00000101010101110001";
    let high = "11110111111001110001";
    let mut script = vec![(low, "0", "1", low), (high, "1", "1", high)];
    for _ in 0..3 {
        script.push((low, "0", "0", low));
        script.push((high, "1", "0", high));
    }
    run(mode, 20, 2, &script);
}

#[rstest]
fn test_write_isolation(#[values(ExecMode::Fast, ExecMode::GateAccurate)] mode: ExecMode) {
    let tc = TestContext::new(mode);
    let mut cluster = Cluster::new(4, 4).unwrap();
    assert_eq!(cluster.write(tc.ctx(), &b("01"), &b("0101")), Ok(b("0101")));
    assert_eq!(cluster.write(tc.ctx(), &b("00"), &b("1011")), Ok(b("1011")));
    assert_eq!(cluster.write(tc.ctx(), &b("11"), &b("1001")), Ok(b("1001")));

    assert_eq!(cluster.read(tc.ctx(), &b("01")), Ok(b("0101")));
    assert_eq!(cluster.read(tc.ctx(), &b("10")), Ok(b("0000")));
    assert_eq!(cluster.read(tc.ctx(), &b("00")), Ok(b("1011")));
    assert_eq!(cluster.read(tc.ctx(), &b("11")), Ok(b("1001")));
}

#[rstest]
fn test_invalid_address(#[values(ExecMode::Fast, ExecMode::GateAccurate)] mode: ExecMode) {
    let tc = TestContext::new(mode);
    let mut cluster = Cluster::new(4, 3).unwrap();
    assert_eq!(cluster.address_width(), 2);
    assert_eq!(
        cluster.write(tc.ctx(), &b("11"), &b("1111")),
        Err(CircuitError::InvalidAddress {
            address: 3,
            count: 3
        })
    );
    for address in 0..3 {
        assert_eq!(cluster.peek(&binary(address, 2)), Ok(lo(4)));
    }
}

#[rstest]
fn test_non_power_of_two_count(#[values(ExecMode::Fast, ExecMode::GateAccurate)] mode: ExecMode) {
    let tc = TestContext::new(mode);
    let mut cluster = Cluster::new(3, 5).unwrap();
    for address in 0..5 {
        let data = binary(address + 1, 3);
        assert_eq!(cluster.write(tc.ctx(), &binary(address, 3), &data), Ok(data));
    }
    for address in 0..5 {
        assert_eq!(
            cluster.read(tc.ctx(), &binary(address, 3)),
            Ok(binary(address + 1, 3))
        );
    }
}

#[rstest]
fn test_single_register(#[values(ExecMode::Fast, ExecMode::GateAccurate)] mode: ExecMode) {
    let tc = TestContext::new(mode);
    let mut cluster = Cluster::new(2, 1).unwrap();
    assert_eq!(cluster.write(tc.ctx(), &b(""), &b("10")), Ok(b("10")));
    assert_eq!(cluster.read(tc.ctx(), &b("")), Ok(b("10")));
}

#[rstest]
fn test_width_errors_do_not_write(
    #[values(ExecMode::Fast, ExecMode::GateAccurate)] mode: ExecMode,
) {
    let tc = TestContext::new(mode);
    let mut cluster = Cluster::new(4, 4).unwrap();
    assert_eq!(
        cluster.eval(tc.ctx(), &b("111"), &b("00"), &b("1")),
        Err(CircuitError::WidthMismatch {
            expected: 4,
            found: 3
        })
    );
    assert_eq!(
        cluster.eval(tc.ctx(), &b("1111"), &b("000"), &b("1")),
        Err(CircuitError::WidthMismatch {
            expected: 2,
            found: 3
        })
    );
    assert!(cluster.eval(tc.ctx(), &b("1111"), &b("00"), &b("11")).is_err());
    assert_eq!(cluster.peek(&b("00")), Ok(lo(4)));
}

#[test]
fn test_zero_registers_rejected() {
    assert_eq!(Cluster::new(8, 0), Err(CircuitError::InputCount(0)));
}
