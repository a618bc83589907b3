//! The 32-bit SHA-2 pipeline shared by SHA-256 and SHA-224.

use super::consts::ROUND_CONSTANTS_32;

/// Bytes consumed per compression-function invocation.
pub(crate) const BLOCK_SIZE: usize = 64;
const STATE_WORDS: usize = 8;
const SCHEDULE_WORDS: usize = 64;
const LENGTH_FIELD: usize = 8;

/// Append the 0x80 terminator, zero fill, and the 8-byte big-endian bit
/// length so the result is a whole number of 64-byte blocks.
///
/// Inputs of 2^61 bytes or more exceed the 64-bit length field; the low 64
/// bits of the bit length are encoded for such inputs.
pub(crate) fn pad(input: &[u8]) -> Vec<u8> {
    let bit_len = (input.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(input.len() + BLOCK_SIZE + LENGTH_FIELD);
    padded.extend_from_slice(input);
    padded.push(0x80);

    let used = (padded.len() + LENGTH_FIELD) % BLOCK_SIZE;
    if used != 0 {
        padded.resize(padded.len() + BLOCK_SIZE - used, 0);
    }

    padded.extend_from_slice(&bit_len.to_be_bytes());
    padded
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn choice(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

fn process_block(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
    let mut schedule = [0u32; SCHEDULE_WORDS];
    for (idx, chunk) in block.chunks_exact(4).enumerate() {
        schedule[idx] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in 16..SCHEDULE_WORDS {
        let s0 = small_sigma0(schedule[t - 15]);
        let s1 = small_sigma1(schedule[t - 2]);
        schedule[t] = schedule[t - 16]
            .wrapping_add(s0)
            .wrapping_add(schedule[t - 7])
            .wrapping_add(s1);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];
    let mut f = state[5];
    let mut g = state[6];
    let mut h = state[7];

    for t in 0..SCHEDULE_WORDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choice(e, f, g))
            .wrapping_add(ROUND_CONSTANTS_32[t])
            .wrapping_add(schedule[t]);
        let t2 = big_sigma0(a).wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

/// Run the pipeline over `input` starting from `iv`, returning the raw
/// 32-byte digest (the final chaining state serialized big-endian, exactly
/// four bytes per word).
pub(crate) fn compute(iv: [u32; STATE_WORDS], input: &[u8]) -> [u8; 32] {
    let mut state = iv;
    let padded = pad(input);

    for block in padded.chunks_exact(BLOCK_SIZE) {
        process_block(&mut state, block.try_into().expect("whole block"));
    }

    let mut digest = [0u8; 32];
    for (chunk, word) in digest.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    digest
}
