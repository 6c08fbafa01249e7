// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::Error;

pub const HDR_LEN: usize = 8;
pub const MIC_LEN: usize = 8;

const EXT_IV: u8 = 0x20;

/// IEEE Std 802.11-2016, 12.5.3.2, Figure 12-18.
pub fn write_header(pn: u64, key_id: u8) -> [u8; HDR_LEN] {
    let p = pn.to_le_bytes();
    [p[0], p[1], 0, ((key_id & 0x03) << 6) | EXT_IV, p[2], p[3], p[4], p[5]]
}

/// Returns the packet number and the key id.
pub fn parse_header(bytes: &[u8]) -> Result<(u64, u8), Error> {
    if bytes.len() < HDR_LEN {
        return Err(Error::CipherHeaderTooShort(bytes.len()));
    }
    if bytes[3] & EXT_IV == 0 {
        return Err(Error::MissingExtendedIv);
    }
    let pn = u64::from_le_bytes([bytes[0], bytes[1], bytes[4], bytes[5], bytes[6], bytes[7], 0, 0]);
    Ok((pn, bytes[3] >> 6))
}
