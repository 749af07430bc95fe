//! Push/Pop Protocol Tests
//!
//! Tests the body-as-stack contract end to end:
//! - Mixed scalar, bool, float and array payloads
//! - Size bookkeeping after every operation
//! - Hardened failure modes (underflow, invalid bit patterns)

#![allow(clippy::approx_constant)]

use netmsg_types::{Message, MessageError, MessageHeader, Pod, Zeroable};
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
enum CustomMsgTypes {
    FireBullet,
    MovePlayer,
}

impl Default for CustomMsgTypes {
    fn default() -> Self {
        CustomMsgTypes::FireBullet
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct Point {
    x: f32,
    y: f32,
}

const HEADER_SIZE: usize = MessageHeader::<CustomMsgTypes>::SIZE;

fn sample_points() -> [Point; 5] {
    let mut points = [Point::zeroed(); 5];
    for (i, point) in points.iter_mut().enumerate() {
        point.x = i as f32 * 1.5;
        point.y = -(i as f32) * 0.25;
    }
    points
}

#[test]
fn test_mixed_payload_round_trip() {
    let a = 1i32;
    let b = true;
    let c = 3.14159f32;
    let d = sample_points();

    let mut msg = Message::<CustomMsgTypes>::new();
    msg.set_id(CustomMsgTypes::FireBullet);
    msg.push(&a).push(&b).push(&c).push(&d);

    // 4 + 1 + 4 + 40
    assert_eq!(msg.body_len(), 49);
    assert_eq!(msg.header().size() as usize, 49 + HEADER_SIZE);

    let mut out_a = 99i32;
    let mut out_b = false;
    let mut out_c = 100.01f32;
    let mut out_d = [Point::zeroed(); 5];

    msg.pop_into(&mut out_d)
        .and_then(|m| m.pop_into(&mut out_c))
        .and_then(|m| m.pop_into(&mut out_b))
        .and_then(|m| m.pop_into(&mut out_a))
        .expect("pops in reverse push order must succeed");

    assert_eq!(out_a, a);
    assert_eq!(out_b, b);
    assert_eq!(out_c.to_bits(), c.to_bits());
    assert_eq!(out_d, d);

    assert!(msg.is_empty());
    assert_eq!(msg.header().size() as usize, HEADER_SIZE);
}

#[test]
fn test_body_layout_matches_push_order() {
    let mut msg = Message::<CustomMsgTypes>::with_id(CustomMsgTypes::MovePlayer);
    msg.push(&1i32).push(&true).push(&3.14159f32);

    let mut expected = Vec::new();
    expected.extend_from_slice(&1i32.to_ne_bytes());
    expected.push(1u8);
    expected.extend_from_slice(&3.14159f32.to_ne_bytes());

    assert_eq!(msg.body(), expected.as_slice());
}

#[test]
fn test_size_synced_after_every_operation() {
    let mut msg = Message::<CustomMsgTypes>::new();
    assert_eq!(msg.header().size() as usize, HEADER_SIZE);

    for i in 0..16u64 {
        msg.push(&i);
        assert_eq!(msg.header().size() as usize, HEADER_SIZE + msg.body_len());
    }
    for i in (0..16u64).rev() {
        assert_eq!(msg.pop::<u64>(), Ok(i));
        assert_eq!(msg.header().size() as usize, HEADER_SIZE + msg.body_len());
    }
}

#[test]
fn test_forward_order_pop_is_undetected() {
    // Wrong pop order yields values, just not the pushed ones
    let mut msg = Message::<CustomMsgTypes>::new();
    msg.push(&0x11u8).push(&0x2233u16);

    let first: u8 = msg.pop().unwrap();
    assert_ne!(first, 0x11);
    assert_eq!(msg.body_len(), 2);
}

#[test]
fn test_underflow_on_empty_message() {
    let mut msg = Message::<CustomMsgTypes>::new();

    match msg.pop::<i32>() {
        Err(MessageError::BufferUnderflow {
            need, available, ..
        }) => {
            assert_eq!(need, 4);
            assert_eq!(available, 0);
        }
        other => panic!("Expected BufferUnderflow, got {:?}", other),
    }
    assert_eq!(msg.header().size() as usize, HEADER_SIZE);
}

#[test]
fn test_partial_underflow_keeps_body() {
    let mut msg = Message::<CustomMsgTypes>::new();
    msg.push(&[1u8, 2, 3]);

    assert!(msg.pop::<[Point; 5]>().is_err());
    assert_eq!(msg.body(), &[1, 2, 3]);
    assert_eq!(msg.pop::<[u8; 3]>(), Ok([1, 2, 3]));
}

#[test]
fn test_message_is_reusable() {
    let mut msg = Message::<CustomMsgTypes>::new();
    for round in 0..3i32 {
        msg.push(&round).push(&(round * 2));
        assert_eq!(msg.pop::<i32>(), Ok(round * 2));
        assert_eq!(msg.pop::<i32>(), Ok(round));
        assert!(msg.is_empty());
    }
}

#[test]
fn test_display_renders_integer_id_and_size() {
    let mut msg = Message::<CustomMsgTypes>::with_id(CustomMsgTypes::MovePlayer);
    msg.push(&0u64);
    assert_eq!(format!("{}", msg), "ID:1 Size:16");
}
