//! Configured codec handle
//!
//! Wraps the free encode/decode functions with a [`CodecConfig`] so services
//! apply the same limits on both directions.

use crate::builder::{encode_into_buffer, encode_message};
use crate::config::CodecConfig;
use crate::error::{ProtocolError, ProtocolResult};
use crate::parser::decode_with_config;
use netmsg_types::{Message, MessageId};
use tracing::warn;

/// Encoder/decoder bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct MessageCodec {
    config: CodecConfig,
}

impl MessageCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a message, refusing anything above the configured limit
    pub fn encode<T: MessageId>(&self, message: &Message<T>) -> ProtocolResult<Vec<u8>> {
        self.check_limit(message)?;
        Ok(encode_message(message))
    }

    /// Encode into a caller-provided buffer, returning the bytes written
    pub fn encode_into<T: MessageId>(
        &self,
        message: &Message<T>,
        buffer: &mut [u8],
    ) -> ProtocolResult<usize> {
        self.check_limit(message)?;
        encode_into_buffer(message, buffer)
    }

    /// Decode one complete message
    pub fn decode<T: MessageId>(&self, data: &[u8]) -> ProtocolResult<Message<T>> {
        decode_with_config(data, &self.config)
    }

    fn check_limit<T: MessageId>(&self, message: &Message<T>) -> ProtocolResult<()> {
        let size = message.size();
        if size > self.config.max_message_size {
            warn!(size, max = self.config.max_message_size, "refusing to encode oversized message");
            return Err(ProtocolError::MessageTooLarge {
                size,
                max: self.config.max_message_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_enum::{IntoPrimitive, TryFromPrimitive};

    #[repr(u16)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
    enum TestMsg {
        Status = 10,
    }

    impl Default for TestMsg {
        fn default() -> Self {
            TestMsg::Status
        }
    }

    #[test]
    fn test_round_trip() {
        let codec = MessageCodec::default();
        let mut msg = Message::<TestMsg>::new();
        msg.push(&[1.0f32, 2.0, 3.0]);

        let bytes = codec.encode(&msg).unwrap();
        let decoded = codec.decode::<TestMsg>(&bytes).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_encode_limit() {
        let codec = MessageCodec::new(CodecConfig {
            max_message_size: 8,
            ..CodecConfig::default()
        });
        let mut msg = Message::<TestMsg>::new();
        msg.push(&0u32);

        assert_eq!(
            codec.encode(&msg),
            Err(ProtocolError::MessageTooLarge { size: 10, max: 8 })
        );
        let mut buffer = [0u8; 32];
        assert!(codec.encode_into(&msg, &mut buffer).is_err());

        msg.clear();
        assert_eq!(codec.encode(&msg).unwrap().len(), 6);
    }
}
