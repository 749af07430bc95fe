//! Error formatting tests
//!
//! Validates that error messages carry the sizes and diagnosis needed to
//! debug a failed decode from logs alone.

use netmsg_codec::ProtocolError;
use netmsg_types::MessageError;

#[test]
fn test_message_too_small_formatting() {
    let error = ProtocolError::message_too_small(8, 3, "MessageHeader parsing");

    let debug_output = format!("{:?}", error);
    assert!(debug_output.contains("MessageTooSmall"));

    let display_output = format!("{}", error);
    assert!(display_output.contains("need 8 bytes"));
    assert!(display_output.contains("got 3"));
    assert!(display_output.contains("context: MessageHeader parsing"));
}

#[test]
fn test_size_mismatch_diagnosis() {
    let partial = ProtocolError::size_mismatch(64, 20).to_string();
    assert!(partial.contains("header declares 64 bytes, buffer has 20"));
    assert!(partial.contains("partial read"));

    let trailing = ProtocolError::size_mismatch(20, 64).to_string();
    assert!(trailing.contains("trailing bytes"));

    // 0x0000_0010 read on the other endianness
    let swapped = ProtocolError::size_mismatch(0x1000_0000, 0x10).to_string();
    assert!(swapped.contains("endianness"));
}

#[test]
fn test_unknown_id_names_the_type() {
    let error = ProtocolError::unknown_message_id::<u8>(42);
    let display_output = error.to_string();
    assert!(display_output.contains("Unknown message id 42"));
    assert!(display_output.contains("u8"));
}

#[test]
fn test_message_error_is_transparent() {
    let inner = MessageError::BufferUnderflow {
        need: 4,
        available: 1,
        type_name: "i32",
    };
    let error = ProtocolError::from(inner.clone());

    assert_eq!(error.to_string(), inner.to_string());
    assert!(error
        .to_string()
        .contains("need 4 bytes to pop i32, body has 1"));
}

#[test]
fn test_limit_errors() {
    let too_large = ProtocolError::MessageTooLarge { size: 70000, max: 65536 };
    assert_eq!(
        too_large.to_string(),
        "Message too large: 70000 bytes exceeds maximum 65536"
    );

    let buffer = ProtocolError::BufferTooSmall { need: 16, got: 8 };
    assert_eq!(buffer.to_string(), "Buffer too small: need 16 bytes, got 8");
}
