/*!
    CMAC core per NIST SP 800-38B, generic over the block cipher.

    Subkeys come from encrypting the zero block and left-shifting, with
    the block-size constant `Rb` folded in whenever the shifted-out bit
    was set (`0x87` for 16-byte blocks, `0x1B` for 8-byte ones).
*/

use paycrypt_core::BlockCipher;

pub(crate) fn compute(cipher: &dyn BlockCipher, data: &[u8]) -> Vec<u8> {
    let block = cipher.block_size();
    let (k1, k2) = subkeys(cipher);

    let blocks = data.len().div_ceil(block).max(1);
    let complete = !data.is_empty() && data.len() % block == 0;

    let mut state = vec![0u8; block];
    for chunk in data.chunks(block).take(blocks - 1) {
        xor_in_place(&mut state, chunk);
        cipher.encrypt_block(&mut state);
    }

    let tail = &data[(blocks - 1) * block..];
    let mut last = vec![0u8; block];
    last[..tail.len()].copy_from_slice(tail);
    if complete {
        xor_in_place(&mut last, &k1);
    } else {
        last[tail.len()] = 0x80;
        xor_in_place(&mut last, &k2);
    }

    xor_in_place(&mut state, &last);
    cipher.encrypt_block(&mut state);
    state
}

pub(crate) fn subkeys(cipher: &dyn BlockCipher) -> (Vec<u8>, Vec<u8>) {
    let mut l = vec![0u8; cipher.block_size()];
    cipher.encrypt_block(&mut l);
    let k1 = shifted(&l);
    let k2 = shifted(&k1);
    (k1, k2)
}

/** One-bit left shift, XORing `Rb` into the tail if a bit fell off. */
fn shifted(input: &[u8]) -> Vec<u8> {
    let rb = if input.len() == 16 { 0x87 } else { 0x1B };
    let mut out = vec![0u8; input.len()];
    let mut carry = 0u8;
    for i in (0..input.len()).rev() {
        out[i] = (input[i] << 1) | carry;
        carry = input[i] >> 7;
    }
    if carry != 0 {
        out[input.len() - 1] ^= rb;
    }
    out
}

fn xor_in_place(state: &mut [u8], chunk: &[u8]) {
    for (s, c) in state.iter_mut().zip(chunk) {
        *s ^= c;
    }
}
