//! `mozLz40` framed container
//!
//! ```text
//! offset 0   8 bytes  magic "mozLz40\0"
//! offset 8   4 bytes  little-endian u32, decompressed length
//! offset 12  rest     one raw LZ4 block
//! ```

use crate::block::decompress_block;
use crate::error::ContainerError;
use crate::Result;

/// Magic tag identifying the container version
pub const MAGIC: &[u8; 8] = b"mozLz40\0";

/// Magic plus the length field
pub const HEADER_LEN: usize = 12;

/// Decode a container into exactly the declared number of bytes.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < HEADER_LEN {
        return Err(ContainerError::Format(format!(
            "container is {} bytes, header needs {}",
            data.len(),
            HEADER_LEN
        )));
    }

    let (magic, rest) = data.split_at(MAGIC.len());
    if magic != MAGIC {
        return Err(ContainerError::Format(format!(
            "bad magic {:02x?}",
            magic
        )));
    }

    let (length, block) = rest.split_at(4);
    let declared = u32::from_le_bytes([length[0], length[1], length[2], length[3]]) as usize;

    tracing::debug!(
        compressed = block.len(),
        declared,
        "Decoding mozLz40 container"
    );

    Ok(decompress_block(block, declared)?)
}

/// Frame `payload` as a container.
#[cfg(any(test, feature = "encode"))]
pub fn encode(payload: &[u8]) -> Vec<u8> {
    let block = crate::compress::compress_block(payload);
    let mut out = Vec::with_capacity(HEADER_LEN + block.len());
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&block);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlockError;
    use proptest::prelude::*;

    #[test]
    fn test_decode_session_json() {
        let json = br#"{"windows":[{"tabs":[{"entries":[{"title":"A","url":"https://a.com"}]}]}]}"#;
        let framed = encode(json);
        assert_eq!(&framed[..8], MAGIC);
        assert_eq!(decode(&framed).unwrap(), json.to_vec());
    }

    #[test]
    fn test_short_buffers_are_format_errors() {
        let header = MAGIC.repeat(2);
        for len in 0..HEADER_LEN {
            assert!(matches!(
                decode(&header[..len]),
                Err(ContainerError::Format(_))
            ));
        }
    }

    #[test]
    fn test_bad_magic() {
        let mut framed = encode(b"hello world");
        framed[3] = b'X';
        assert!(matches!(decode(&framed), Err(ContainerError::Format(_))));
    }

    #[test]
    fn test_header_only_empty_payload() {
        let mut data = MAGIC.to_vec();
        data.extend_from_slice(&0u32.to_le_bytes());
        assert!(decode(&data).unwrap().is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let mut framed = encode(b"some session payload");
        framed[8..12].copy_from_slice(&5u32.to_le_bytes());
        assert!(matches!(
            decode(&framed),
            Err(ContainerError::Decompression(BlockError::OutputOverflow { limit: 5 }))
        ));

        framed[8..12].copy_from_slice(&500u32.to_le_bytes());
        assert!(matches!(
            decode(&framed),
            Err(ContainerError::Decompression(BlockError::LengthMismatch { .. }))
        ));
    }

    #[test]
    fn test_truncated_payload() {
        let payload = b"abcdefghijklmnopqrstuvwxyz".repeat(4);
        let framed = encode(&payload);
        let cut = &framed[..framed.len() - 10];
        assert!(matches!(decode(cut), Err(ContainerError::Decompression(_))));
    }

    proptest! {
        #[test]
        fn prop_roundtrip(payload in proptest::collection::vec(any::<u8>(), 0..4096)) {
            let decoded = decode(&encode(&payload)).unwrap();
            prop_assert_eq!(&decoded, &payload);

            let again = decode(&encode(&decoded)).unwrap();
            prop_assert_eq!(again, payload);
        }

        #[test]
        fn prop_roundtrip_repetitive(unit in "[a-z{}\":,]{1,16}", times in 0usize..300) {
            let payload = unit.repeat(times).into_bytes();
            prop_assert_eq!(decode(&encode(&payload)).unwrap(), payload);
        }

        #[test]
        fn prop_short_input_never_panics(data in proptest::collection::vec(any::<u8>(), 0..HEADER_LEN)) {
            prop_assert!(matches!(decode(&data), Err(ContainerError::Format(_))));
        }

        #[test]
        fn prop_garbage_never_panics(tail in proptest::collection::vec(any::<u8>(), 0..256), declared in 0u32..100_000) {
            let mut data = MAGIC.to_vec();
            data.extend_from_slice(&declared.to_le_bytes());
            data.extend_from_slice(&tail);
            if let Ok(out) = decode(&data) {
                prop_assert_eq!(out.len(), declared as usize);
            }
        }
    }
}
