//! Whole-context scenarios.

use emu_core::Observable;
use tiny_6502::{CpuContext, Error, Flag};

#[test]
fn zero_flag_round_trip_through_context() {
    let mut ctx = CpuContext::new();
    assert_eq!(ctx.status().word(), 0xFF00);

    ctx.status_mut().set_bit(Flag::Zero.bit()).expect("zero flag");
    assert_eq!(ctx.status().word(), 0xFF02);
    assert_eq!(ctx.status().is_set(Flag::Zero.bit()), Ok(true));

    ctx.status_mut().clear_bit(Flag::Zero.bit()).expect("zero flag");
    assert_eq!(ctx.status().word(), 0xFF00);
    assert_eq!(ctx.status().is_set(Flag::Zero.bit()), Ok(false));
}

#[test]
fn sample_program_dump() {
    let mut ctx = CpuContext::new();
    ctx.memory_mut().load_sample();

    let dump = ctx.memory().dump(32).expect("in range");
    assert_eq!(
        dump,
        "0000: a9 00 20 10 00 4c 02 00 00 00 00 00 00 00 00 40 \
         e8 00 20 10 00 4c 02 00 00 00 00 00 00 00 00 40"
    );
}

#[test]
fn bus_drives_memory_access() {
    let mut ctx = CpuContext::new();
    ctx.memory_mut().load_sample();

    // JSR operand at $0003/$0004 holds $0010 low byte first.
    let lo = ctx.memory().read(0x0003);
    let hi = ctx.memory().read(0x0004);
    let target = u16::from_le_bytes([lo, hi]);
    assert_eq!(target, 0x0010);

    ctx.bus_mut().set_address(target);
    assert_eq!(ctx.read_latched(), 0xE8, "INX at subroutine entry");

    ctx.bus_mut().latch_bytes(target);
    assert_eq!(ctx.bus().latch(), [lo, hi]);
}

#[test]
fn address_lines_build_an_address() {
    let mut ctx = CpuContext::new();
    ctx.bus_mut().clear_bit(12).expect("A12");
    for line in [0, 2, 3, 6, 11, 13, 14] {
        ctx.bus_mut().set_bit(line).expect("valid line");
    }
    assert_eq!(ctx.bus().value(), 0x684D);
    assert_eq!(
        ctx.bus_mut().set_bit(16),
        Err(Error::InvalidBitPosition {
            position: 16,
            width: 16
        })
    );
}

#[test]
fn observable_tracks_mutation() {
    let mut ctx = CpuContext::new();
    ctx.status_mut().set(Flag::Sign);
    ctx.status_mut().set(Flag::Carry);
    ctx.bus_mut().latch_little_endian(0x1000);

    assert_eq!(ctx.query("status").map(|v| v.to_string()), Some("0xFF81".into()));
    assert_eq!(ctx.query("bus").map(|v| v.to_string()), Some("0x0010".into()));
}

#[test]
fn queried_values_survive_json() {
    let mut ctx = CpuContext::new();
    ctx.status_mut().set(Flag::Zero);
    ctx.bus_mut().latch_bytes(0x684A);

    for path in ["status", "flags", "flags.z", "bus.latch"] {
        let value = ctx.query(path).expect("listed path");
        let json = serde_json::to_string(&value).expect("serializable");
        let back: emu_core::Value = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, value, "path {path}");
    }
    assert_eq!(
        serde_json::to_value(ctx.query("flags.z")).expect("serializable"),
        serde_json::json!({ "Bool": true })
    );
}
