// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::Error,
    hmac::{Hmac, Mac, NewMac},
    ring::hmac as ring_hmac,
    sha2::Sha256,
};

const VALID_PRF_BIT_SIZES: [usize; 6] = [128, 192, 256, 384, 512, 704];

type HmacSha256 = Hmac<Sha256>;

/// PRF-SHA1 of IEEE Std 802.11-2016, 12.7.1.2. Produces `bits` bits of keying material from
/// HMAC-SHA1 iterations over `label || 0 || data || i`.
pub fn prf(k: &[u8], a: &str, b: &[u8], bits: usize) -> Result<Vec<u8>, Error> {
    if !VALID_PRF_BIT_SIZES.contains(&bits) {
        return Err(Error::InvalidBitLength(bits));
    }

    let key = ring_hmac::Key::new(ring_hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, k);
    let len = bits / 8;
    let iterations = (bits + 159) / 160;
    let mut result = Vec::with_capacity(iterations * 20);
    for i in 0..iterations {
        let mut ctx = ring_hmac::Context::with_key(&key);
        ctx.update(a.as_bytes());
        ctx.update(&[0u8]);
        ctx.update(b);
        ctx.update(&[i as u8]);
        result.extend_from_slice(ctx.sign().as_ref());
    }
    result.truncate(len);
    Ok(result)
}

/// KDF-Hash-Length of IEEE Std 802.11-2016, 12.7.1.6.2 instantiated with SHA-256.
pub fn kdf_sha256(k: &[u8], label: &str, context: &[u8], bits: usize) -> Result<Vec<u8>, Error> {
    if bits == 0 || bits % 8 != 0 || bits > u16::max_value() as usize {
        return Err(Error::InvalidBitLength(bits));
    }

    let len = bits / 8;
    let iterations = (bits + 255) / 256;
    let mut result = Vec::with_capacity(iterations * 32);
    for i in 1..=iterations {
        let mut mac =
            HmacSha256::new_from_slice(k).map_err(|_| Error::InvalidMacKeyLength(k.len()))?;
        mac.update(&(i as u16).to_le_bytes());
        mac.update(label.as_bytes());
        mac.update(context);
        mac.update(&(bits as u16).to_le_bytes());
        result.extend_from_slice(&mac.finalize().into_bytes());
    }
    result.truncate(len);
    Ok(result)
}
