//! ChaCha20 stream cipher core (RFC 8439).
//!
//! This module provides a low-level, dependency-free implementation of the
//! ChaCha20 block function and keystream application.
//!
//! It is designed to be used as a cryptographic primitive for AEAD
//! constructions (see [`crate::encryption`]), and therefore:
//! - avoids heap allocations in the block function itself
//! - exposes only minimal, explicit APIs
//!
//! This module **does not** implement authenticated encryption by itself.
//! Higher-level constructions (such as ChaCha20-Poly1305) are built on top
//! of this primitive with strict nonce and key management left to the
//! caller.

/// ChaCha20 constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"`
/// encoded as little-endian `u32` words, as defined in RFC 8439.
///
/// They are public, fixed, and non-secret, and define the ChaCha20
/// permutation domain.
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Errors produced while applying the ChaCha20 keystream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chacha20Error {
    /// The requested input is long enough that the 32-bit block counter
    /// would wrap before the last block is generated.
    InputTooLong,
}

/// Performs one ChaCha20 quarter round.
///
/// A quarter round mixes four 32-bit words of the internal state using
/// addition modulo 2³², XOR, and fixed left rotations. This operation is
/// the fundamental source of diffusion and non-linearity in ChaCha20.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the full ChaCha20 permutation (20 rounds).
///
/// The permutation consists of 10 iterations, each performing:
/// - 4 column quarter rounds
/// - 4 diagonal quarter rounds
pub(crate) fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Generates a single 64-byte ChaCha20 keystream block.
///
/// # Parameters
/// - `key`: 256-bit secret key (32 bytes)
/// - `counter`: 32-bit block counter
/// - `nonce`: 96-bit nonce (IETF variant)
///
/// # Returns
/// A 64-byte keystream block that can be XORed with plaintext or
/// ciphertext.
///
/// # Security notes
/// - This function does **not** perform encryption or authentication.
/// - Reusing the same `(key, nonce, counter)` tuple is catastrophic for
///   security and must be prevented by higher-level protocols.
pub fn chacha20_block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; 64] {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA20_CONSTANTS);

    state[4..12]
        .iter_mut()
        .zip(key.chunks_exact(4))
        .for_each(|(s, k)| {
            *s = u32::from_le_bytes(k.try_into().unwrap());
        });

    state[12] = counter;

    state[13..16]
        .iter_mut()
        .zip(nonce.chunks_exact(4))
        .for_each(|(s, n)| {
            *s = u32::from_le_bytes(n.try_into().unwrap());
        });

    let original = state;

    rounds(&mut state);

    state.iter_mut().zip(&original).for_each(|(s, o)| {
        *s = s.wrapping_add(*o);
    });

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, word)| {
            chunk.copy_from_slice(&word.to_le_bytes());
        });

    out
}

/// Encrypts or decrypts `input` by XORing it with the ChaCha20 keystream,
/// starting at block `counter`.
///
/// Encryption and decryption are the identical transformation. Fails with
/// [`Chacha20Error::InputTooLong`] if applying the keystream would require
/// the 32-bit block counter to wrap past its last value.
///
/// # Parameters
/// - `key`: 256-bit secret key
/// - `counter`: initial 32-bit block counter
/// - `nonce`: 96-bit nonce (IETF variant)
/// - `input`: plaintext or ciphertext to transform
pub fn chacha20_apply(
    key: &[u8; 32],
    counter: u32,
    nonce: &[u8; 12],
    input: &[u8],
) -> Result<Vec<u8>, Chacha20Error> {
    let blocks_needed = input.len().div_ceil(64) as u64;
    if blocks_needed > (u32::MAX as u64 - counter as u64 + 1) {
        return Err(Chacha20Error::InputTooLong);
    }

    let mut output = vec![0u8; input.len()];
    let mut block_counter = counter;
    let mut offset = 0usize;

    while offset < input.len() {
        let keystream = chacha20_block(key, block_counter, nonce);
        block_counter = block_counter.wrapping_add(1);

        let take = (input.len() - offset).min(64);
        for i in 0..take {
            output[offset + i] = input[offset + i] ^ keystream[i];
        }

        offset += take;
    }

    Ok(output)
}
