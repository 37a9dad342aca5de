//! LZ4 block decoder
//!
//! A block is a series of sequences. Each sequence is a token byte (high
//! nibble: literal length, low nibble: match length minus 4), optional
//! length-extension bytes, the literals, a 2-byte little-endian match offset
//! and optional match-length extension bytes. The final sequence carries
//! literals only.

use crate::error::BlockError;

pub(crate) const MIN_MATCH: usize = 4;

/// Largest expansion a single input byte can produce
const MAX_EXPANSION: usize = 255;

/// Decompress a single LZ4 block into exactly `expected_len` bytes.
pub fn decompress_block(input: &[u8], expected_len: usize) -> Result<Vec<u8>, BlockError> {
    let capacity = expected_len.min(input.len().saturating_mul(MAX_EXPANSION));
    let mut output = Vec::with_capacity(capacity);

    if input.is_empty() {
        return finish(output, expected_len);
    }

    let mut pos = 0;
    loop {
        let token = *input
            .get(pos)
            .ok_or(BlockError::UnexpectedEnd { position: pos })?;
        pos += 1;

        let mut literal_len = usize::from(token >> 4);
        if literal_len == 15 {
            literal_len += read_length(input, &mut pos)?;
        }

        let literal_end = pos
            .checked_add(literal_len)
            .filter(|&end| end <= input.len())
            .ok_or(BlockError::TruncatedLiterals {
                position: pos,
                length: literal_len,
            })?;
        reserve_output(&output, literal_len, expected_len)?;
        output.extend_from_slice(&input[pos..literal_end]);
        pos = literal_end;

        if pos == input.len() {
            break;
        }

        let offset_bytes = input
            .get(pos..pos + 2)
            .ok_or(BlockError::UnexpectedEnd { position: pos })?;
        let offset = usize::from(u16::from_le_bytes([offset_bytes[0], offset_bytes[1]]));
        pos += 2;

        if offset == 0 || offset > output.len() {
            return Err(BlockError::InvalidOffset {
                offset,
                available: output.len(),
            });
        }

        let mut match_len = usize::from(token & 0x0f);
        if match_len == 15 {
            match_len += read_length(input, &mut pos)?;
        }
        match_len += MIN_MATCH;
        reserve_output(&output, match_len, expected_len)?;

        let start = output.len() - offset;
        if offset >= match_len {
            output.extend_from_within(start..start + match_len);
        } else {
            // Overlapping copy repeats the last `offset` bytes
            for i in 0..match_len {
                let byte = output[start + i];
                output.push(byte);
            }
        }
    }

    finish(output, expected_len)
}

/// Read a run of length-extension bytes: each 255 continues, anything else ends.
fn read_length(input: &[u8], pos: &mut usize) -> Result<usize, BlockError> {
    let mut total: usize = 0;
    loop {
        let byte = *input
            .get(*pos)
            .ok_or(BlockError::UnexpectedEnd { position: *pos })?;
        *pos += 1;
        total = total
            .checked_add(usize::from(byte))
            .ok_or(BlockError::UnexpectedEnd { position: *pos })?;
        if byte != 255 {
            return Ok(total);
        }
    }
}

fn reserve_output(output: &[u8], additional: usize, limit: usize) -> Result<(), BlockError> {
    match output.len().checked_add(additional) {
        Some(len) if len <= limit => Ok(()),
        _ => Err(BlockError::OutputOverflow { limit }),
    }
}

fn finish(output: Vec<u8>, expected_len: usize) -> Result<Vec<u8>, BlockError> {
    if output.len() != expected_len {
        return Err(BlockError::LengthMismatch {
            declared: expected_len,
            actual: output.len(),
        });
    }
    Ok(output)
}
