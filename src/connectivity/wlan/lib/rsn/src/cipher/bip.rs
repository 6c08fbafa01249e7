// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{integrity::cmac_aes128::aes_cmac, Error},
    byteorder::{ByteOrder, LittleEndian},
    wlan_common::mac::MacAddr,
};

pub const MMIE_ID: u8 = 76;
pub const MMIE_BODY_LEN: u8 = 16;
/// Element id and length, key id, IPN and MIC.
pub const MMIE_LEN: usize = 2 + MMIE_BODY_LEN as usize;
pub const MIC_LEN: usize = 8;
const IPN_LEN: usize = 6;
const MIC_OFFSET: usize = MMIE_LEN - MIC_LEN;

// Frame control bits excluded from the BIP AAD.
const FC_RETRY: u16 = 1 << 11;
const FC_PWR_MGMT: u16 = 1 << 12;
const FC_MORE_DATA: u16 = 1 << 13;

/// Management MIC element, IEEE Std 802.11-2016, 9.4.2.55.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mmie {
    pub key_id: u16,
    pub ipn: u64,
    pub mic: [u8; MIC_LEN],
}

impl Mmie {
    pub fn to_bytes(&self) -> [u8; MMIE_LEN] {
        let mut bytes = [0u8; MMIE_LEN];
        bytes[0] = MMIE_ID;
        bytes[1] = MMIE_BODY_LEN;
        LittleEndian::write_u16(&mut bytes[2..4], self.key_id);
        LittleEndian::write_u48(&mut bytes[4..4 + IPN_LEN], self.ipn & 0xffff_ffff_ffff);
        bytes[MIC_OFFSET..].copy_from_slice(&self.mic[..]);
        bytes
    }

    pub fn parse(bytes: &[u8]) -> Result<Mmie, Error> {
        if bytes.len() != MMIE_LEN || bytes[0] != MMIE_ID || bytes[1] != MMIE_BODY_LEN {
            return Err(Error::InvalidMmie);
        }
        let mut mic = [0u8; MIC_LEN];
        mic.copy_from_slice(&bytes[MIC_OFFSET..]);
        Ok(Mmie {
            key_id: LittleEndian::read_u16(&bytes[2..4]),
            ipn: LittleEndian::read_u48(&bytes[4..4 + IPN_LEN]),
            mic,
        })
    }
}

fn aad(frame_ctrl: u16, addr1: &MacAddr, addr2: &MacAddr, addr3: &MacAddr) -> [u8; 20] {
    let mut aad = [0u8; 20];
    let fc = frame_ctrl & !(FC_RETRY | FC_PWR_MGMT | FC_MORE_DATA);
    aad[..2].copy_from_slice(&fc.to_le_bytes());
    aad[2..8].copy_from_slice(&addr1[..]);
    aad[8..14].copy_from_slice(&addr2[..]);
    aad[14..20].copy_from_slice(&addr3[..]);
    aad
}

/// Computes the BIP-CMAC-128 MIC of a group addressed management frame. `body` is the frame
/// body ending in an MMIE whose MIC field is ignored.
pub fn compute_mic(
    key: &[u8],
    frame_ctrl: u16,
    addr1: &MacAddr,
    addr2: &MacAddr,
    addr3: &MacAddr,
    body: &[u8],
) -> Result<[u8; MIC_LEN], Error> {
    if body.len() < MMIE_LEN {
        return Err(Error::InvalidMmie);
    }
    let mut msg = Vec::with_capacity(20 + body.len());
    msg.extend_from_slice(&aad(frame_ctrl, addr1, addr2, addr3)[..]);
    msg.extend_from_slice(body);
    let mic_start = msg.len() - MIC_LEN;
    for b in &mut msg[mic_start..] {
        *b = 0;
    }
    let mac = aes_cmac(key, &msg[..])?;
    let mut mic = [0u8; MIC_LEN];
    mic.copy_from_slice(&mac[..MIC_LEN]);
    Ok(mic)
}

/// Fills in the MIC of the MMIE at the end of `body`.
pub fn protect(
    key: &[u8],
    frame_ctrl: u16,
    addr1: &MacAddr,
    addr2: &MacAddr,
    addr3: &MacAddr,
    body: &mut [u8],
) -> Result<(), Error> {
    let mic = compute_mic(key, frame_ctrl, addr1, addr2, addr3, &body[..])?;
    let mic_start = body.len() - MIC_LEN;
    body[mic_start..].copy_from_slice(&mic[..]);
    Ok(())
}
