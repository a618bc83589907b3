//! The 64-bit SHA-2 pipeline shared by SHA-512, SHA-384, SHA-512/224, and
//! SHA-512/256.

use super::consts::ROUND_CONSTANTS_64;

/// Bytes consumed per compression-function invocation.
pub(crate) const BLOCK_SIZE: usize = 128;
const STATE_WORDS: usize = 8;
const SCHEDULE_WORDS: usize = 80;
const LENGTH_FIELD: usize = 16;

/// Append the 0x80 terminator, zero fill, and the 16-byte big-endian bit
/// length so the result is a whole number of 128-byte blocks.
///
/// The standard permits a 128-bit length, but inputs are capped at
/// 2^64 - 1 bits, so the high 8 bytes of the field are always zero.
pub(crate) fn pad(input: &[u8]) -> Vec<u8> {
    let bit_len = (input.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(input.len() + BLOCK_SIZE + LENGTH_FIELD);
    padded.extend_from_slice(input);
    padded.push(0x80);

    let used = (padded.len() + LENGTH_FIELD) % BLOCK_SIZE;
    if used != 0 {
        padded.resize(padded.len() + BLOCK_SIZE - used, 0);
    }

    padded.extend_from_slice(&[0u8; 8]);
    padded.extend_from_slice(&bit_len.to_be_bytes());
    padded
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn choice(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn majority(x: u64, y: u64, z: u64) -> u64 {
    (x & y) ^ (x & z) ^ (y & z)
}

fn process_block(state: &mut [u64; STATE_WORDS], block: &[u8; BLOCK_SIZE]) {
    let mut schedule = [0u64; SCHEDULE_WORDS];
    for (idx, chunk) in block.chunks_exact(8).enumerate() {
        schedule[idx] = u64::from_be_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
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
            .wrapping_add(ROUND_CONSTANTS_64[t])
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
/// 64-byte digest (the final chaining state serialized big-endian, exactly
/// eight bytes per word).
pub(crate) fn compute(iv: [u64; STATE_WORDS], input: &[u8]) -> [u8; 64] {
    let mut state = iv;
    let padded = pad(input);

    for block in padded.chunks_exact(BLOCK_SIZE) {
        process_block(&mut state, block.try_into().expect("whole block"));
    }

    let mut digest = [0u8; 64];
    for (chunk, word) in digest.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::consts::{SHA384_IV, SHA512_224_IV, SHA512_256_IV, SHA512_IV};

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn digest_empty() {
        let expected = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                        47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";
        assert_eq!(hex(&compute(SHA512_IV, b"")), expected);
    }

    #[test]
    fn digest_abc() {
        let expected = "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                        2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f";
        assert_eq!(hex(&compute(SHA512_IV, b"abc")), expected);
    }

    #[test]
    fn digest_two_block_message() {
        let message = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
                        hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";
        let expected = "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
                        501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909";
        assert_eq!(hex(&compute(SHA512_IV, message)), expected);
    }

    #[test]
    fn truncating_ivs_select_their_variants() {
        assert_eq!(
            &hex(&compute(SHA384_IV, b"abc"))[..96],
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(
            &hex(&compute(SHA512_224_IV, b"abc"))[..56],
            "4634270f707b6a54daae7530460842e20e37ed265ceee9a43e8924aa"
        );
        assert_eq!(
            &hex(&compute(SHA512_256_IV, b"abc"))[..64],
            "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
        );
    }

    #[test]
    fn padding_is_block_aligned() {
        for len in 0..300 {
            let input = vec![0xCD; len];
            let padded = pad(&input);
            assert_eq!(padded.len() % BLOCK_SIZE, 0, "len {len}");
            assert_eq!(padded[len], 0x80, "len {len}");
            let overhead = padded.len() - len;
            assert!(overhead >= 1 + LENGTH_FIELD, "len {len}");
            assert!(overhead <= BLOCK_SIZE + LENGTH_FIELD, "len {len}");
        }
    }

    #[test]
    fn length_field_high_bytes_are_zero() {
        let padded = pad(b"abc");
        assert_eq!(padded.len(), 128);
        assert!(padded[4..112].iter().all(|&byte| byte == 0));
        assert_eq!(&padded[112..120], &[0u8; 8]);
        assert_eq!(&padded[120..], &24u64.to_be_bytes());
    }

    #[test]
    fn padding_boundary_lengths() {
        // 111 bytes + terminator + length field fill one block exactly
        assert_eq!(pad(&[0x61; 111]).len(), 128);
        // one more byte forces a second block
        assert_eq!(pad(&[0x61; 112]).len(), 256);
        assert_eq!(pad(&[0x61; 128]).len(), 256);
    }
}
