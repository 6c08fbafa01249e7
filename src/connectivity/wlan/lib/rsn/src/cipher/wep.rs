// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::Error;

pub const IV_LEN: usize = 4;
pub const ICV_LEN: usize = 4;

/// IEEE Std 802.11-2016, 12.3.2.2: three IV octets followed by the key id in the top two bits.
pub fn write_iv(iv: u32, key_id: u8) -> [u8; IV_LEN] {
    let iv = iv.to_le_bytes();
    [iv[0], iv[1], iv[2], (key_id & 0x03) << 6]
}

/// Returns the 24-bit IV and the key id.
pub fn parse_iv(bytes: &[u8]) -> Result<(u32, u8), Error> {
    if bytes.len() < IV_LEN {
        return Err(Error::CipherHeaderTooShort(bytes.len()));
    }
    let iv = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]);
    Ok((iv, bytes[3] >> 6))
}
