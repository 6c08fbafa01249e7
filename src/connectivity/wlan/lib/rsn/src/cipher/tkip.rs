// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::Error;

pub const HDR_LEN: usize = 8;
pub const MIC_LEN: usize = 8;
pub const ICV_LEN: usize = 4;

const EXT_IV: u8 = 0x20;

/// Offsets of the temporal key and the Michael keys inside 32 bytes of TKIP key material.
pub const TK_LEN: usize = 16;
pub const TX_MIC_KEY_OFFSET: usize = 16;
pub const RX_MIC_KEY_OFFSET: usize = 24;

/// IEEE Std 802.11-2016, 12.5.2.2. The 48-bit TSC is split around the WEP seed byte.
pub fn write_header(tsc: u64, key_id: u8) -> [u8; HDR_LEN] {
    let t = tsc.to_le_bytes();
    [t[1], (t[1] | EXT_IV) & 0x7f, t[0], ((key_id & 0x03) << 6) | EXT_IV, t[2], t[3], t[4], t[5]]
}

/// Returns the TSC and the key id.
pub fn parse_header(bytes: &[u8]) -> Result<(u64, u8), Error> {
    if bytes.len() < HDR_LEN {
        return Err(Error::CipherHeaderTooShort(bytes.len()));
    }
    if bytes[3] & EXT_IV == 0 {
        return Err(Error::MissingExtendedIv);
    }
    if bytes[1] != (bytes[0] | EXT_IV) & 0x7f {
        return Err(Error::InvalidTkipSeed);
    }
    let tsc = u64::from_le_bytes([bytes[2], bytes[0], bytes[4], bytes[5], bytes[6], bytes[7], 0, 0]);
    Ok((tsc, bytes[3] >> 6))
}
