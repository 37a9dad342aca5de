//! Greedy LZ4 block compressor
//!
//! Only used to build fixtures. Honours the end-of-block rules every
//! conforming decoder relies on: the last 5 bytes are always literals and the
//! last match starts at least 12 bytes before the end.

use crate::block::MIN_MATCH;

const LAST_LITERALS: usize = 5;
const MF_LIMIT: usize = 12;
const MAX_OFFSET: usize = u16::MAX as usize;
const HASH_LOG: u32 = 12;

/// Compress `input` into a single raw LZ4 block.
pub fn compress_block(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + input.len() / 255 + 16);
    let mut anchor = 0;

    if input.len() > MF_LIMIT {
        // Positions are stored plus one so zero means "empty slot"
        let mut table = vec![0usize; 1 << HASH_LOG];
        let match_limit = input.len() - LAST_LITERALS;
        let mut pos = 0;

        while pos + MF_LIMIT <= input.len() {
            let slot = hash(read_u32(input, pos));
            let candidate = table[slot];
            table[slot] = pos + 1;

            if candidate != 0 {
                let start = candidate - 1;
                if pos - start <= MAX_OFFSET
                    && input[start..start + MIN_MATCH] == input[pos..pos + MIN_MATCH]
                {
                    let mut len = MIN_MATCH;
                    while pos + len < match_limit && input[start + len] == input[pos + len] {
                        len += 1;
                    }

                    write_sequence(&mut out, &input[anchor..pos], pos - start, len);
                    pos += len;
                    anchor = pos;
                    continue;
                }
            }

            pos += 1;
        }
    }

    write_last_literals(&mut out, &input[anchor..]);
    out
}

fn read_u32(input: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes([input[pos], input[pos + 1], input[pos + 2], input[pos + 3]])
}

fn hash(sequence: u32) -> usize {
    (sequence.wrapping_mul(2_654_435_761) >> (32 - HASH_LOG)) as usize
}

fn write_sequence(out: &mut Vec<u8>, literals: &[u8], offset: usize, match_len: usize) {
    let extra_match = match_len - MIN_MATCH;
    let token = (nibble(literals.len()) << 4) | nibble(extra_match);
    out.push(token);
    if literals.len() >= 15 {
        write_length(out, literals.len() - 15);
    }
    out.extend_from_slice(literals);
    out.extend_from_slice(&(offset as u16).to_le_bytes());
    if extra_match >= 15 {
        write_length(out, extra_match - 15);
    }
}

fn write_last_literals(out: &mut Vec<u8>, literals: &[u8]) {
    out.push(nibble(literals.len()) << 4);
    if literals.len() >= 15 {
        write_length(out, literals.len() - 15);
    }
    out.extend_from_slice(literals);
}

fn nibble(len: usize) -> u8 {
    len.min(15) as u8
}

fn write_length(out: &mut Vec<u8>, mut remaining: usize) {
    while remaining >= 255 {
        out.push(255);
        remaining -= 255;
    }
    out.push(remaining as u8);
}
