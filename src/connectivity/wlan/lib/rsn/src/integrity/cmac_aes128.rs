// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::{Algorithm, MIC_LEN},
    crate::Error,
    aes::{
        cipher::{generic_array::GenericArray, BlockEncrypt, NewBlockCipher},
        Aes128,
    },
    ring::constant_time,
};

const BLOCK_LEN: usize = 16;
const RB: u8 = 0x87;

/// AES-128-CMAC, used by EAPOL-Key descriptor version 3 and BIP.
pub struct CmacAes128;

impl CmacAes128 {
    pub fn new() -> CmacAes128 {
        CmacAes128
    }
}

impl Algorithm for CmacAes128 {
    fn verify(&self, key: &[u8], data: &[u8], expected: &[u8]) -> bool {
        match self.compute(key, data) {
            Ok(mic) => constant_time::verify_slices_are_equal(&mic[..], expected).is_ok(),
            Err(_) => false,
        }
    }

    fn compute(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, Error> {
        let mac = aes_cmac(key, data)?;
        Ok(mac[..MIC_LEN].to_vec())
    }
}

fn dbl(block: &[u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
    let mut out = [0u8; BLOCK_LEN];
    let mut carry = 0u8;
    for i in (0..BLOCK_LEN).rev() {
        out[i] = (block[i] << 1) | carry;
        carry = block[i] >> 7;
    }
    if block[0] & 0x80 != 0 {
        out[BLOCK_LEN - 1] ^= RB;
    }
    out
}

/// RFC 4493.
pub fn aes_cmac(key: &[u8], data: &[u8]) -> Result<[u8; BLOCK_LEN], Error> {
    let cipher = Aes128::new_from_slice(key).map_err(|_| Error::InvalidMacKeyLength(key.len()))?;
    let encrypt = |block: &mut [u8; BLOCK_LEN]| {
        cipher.encrypt_block(GenericArray::from_mut_slice(&mut block[..]));
    };

    let mut l = [0u8; BLOCK_LEN];
    encrypt(&mut l);
    let k1 = dbl(&l);
    let k2 = dbl(&k1);

    let blocks = if data.is_empty() { 1 } else { (data.len() + BLOCK_LEN - 1) / BLOCK_LEN };
    let last_complete = !data.is_empty() && data.len() % BLOCK_LEN == 0;

    let mut x = [0u8; BLOCK_LEN];
    for chunk in data.chunks(BLOCK_LEN).take(blocks - 1) {
        for (xb, b) in x.iter_mut().zip(chunk) {
            *xb ^= b;
        }
        encrypt(&mut x);
    }

    let mut last = [0u8; BLOCK_LEN];
    let tail = &data[(blocks - 1) * BLOCK_LEN..];
    last[..tail.len()].copy_from_slice(tail);
    let subkey = if last_complete {
        &k1
    } else {
        last[tail.len()] = 0x80;
        &k2
    };
    for i in 0..BLOCK_LEN {
        x[i] ^= last[i] ^ subkey[i];
    }
    encrypt(&mut x);
    Ok(x)
}
