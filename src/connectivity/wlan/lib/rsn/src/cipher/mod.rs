// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

pub mod bip;
pub mod ccmp;
pub mod michael;
pub mod tkip;
pub mod wep;

use wlan_common::ie::rsn::cipher;

/// Cipher a key is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherType {
    None,
    Wep40,
    Wep104,
    Tkip,
    Ccmp,
    Bip,
}

impl CipherType {
    /// Length of the temporal key, IEEE Std 802.11-2016, 12.7.2, Table 12-4.
    pub fn key_len(self) -> usize {
        match self {
            CipherType::None => 0,
            CipherType::Wep40 => 5,
            CipherType::Wep104 => 13,
            CipherType::Tkip => 32,
            CipherType::Ccmp | CipherType::Bip => 16,
        }
    }

    /// Bytes inserted between the MAC header and the frame body.
    pub fn header_len(self) -> usize {
        match self {
            CipherType::None | CipherType::Bip => 0,
            CipherType::Wep40 | CipherType::Wep104 => wep::IV_LEN,
            CipherType::Tkip => tkip::HDR_LEN,
            CipherType::Ccmp => ccmp::HDR_LEN,
        }
    }

    /// Bytes appended to the frame body.
    pub fn trailer_len(self) -> usize {
        match self {
            CipherType::None => 0,
            CipherType::Wep40 | CipherType::Wep104 => wep::ICV_LEN,
            CipherType::Tkip => tkip::MIC_LEN + tkip::ICV_LEN,
            CipherType::Ccmp => ccmp::MIC_LEN,
            CipherType::Bip => bip::MMIE_LEN,
        }
    }

    pub fn is_wep(self) -> bool {
        self == CipherType::Wep40 || self == CipherType::Wep104
    }

    pub fn from_suite_type(suite_type: u8) -> Option<CipherType> {
        match suite_type {
            cipher::WEP_40 => Some(CipherType::Wep40),
            cipher::TKIP => Some(CipherType::Tkip),
            cipher::CCMP_128 => Some(CipherType::Ccmp),
            cipher::WEP_104 => Some(CipherType::Wep104),
            cipher::BIP_CMAC_128 => Some(CipherType::Bip),
            _ => None,
        }
    }
}
