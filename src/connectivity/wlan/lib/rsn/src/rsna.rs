// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::cipher::CipherType,
    bitflags::bitflags,
    wlan_common::ie::rsn::{akm, cipher},
};

bitflags! {
    /// Security protocols a peer or interface may negotiate.
    pub struct Protocols: u8 {
        const WPA = 1 << 0;
        const RSN = 1 << 1;
    }
}

bitflags! {
    pub struct PairwiseCiphers: u8 {
        const USE_GROUP = 1 << 0;
        const TKIP = 1 << 1;
        const CCMP = 1 << 2;
    }
}

bitflags! {
    pub struct Akms: u8 {
        const IEEE8021X = 1 << 0;
        const PSK = 1 << 1;
        const SHA256_8021X = 1 << 2;
        const SHA256_PSK = 1 << 3;
    }
}

/// The group data ciphers a BSS can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupDataCipher {
    Wep40,
    Tkip,
    Ccmp,
    Wep104,
}

impl GroupDataCipher {
    pub fn suite_type(self) -> u8 {
        match self {
            GroupDataCipher::Wep40 => cipher::WEP_40,
            GroupDataCipher::Tkip => cipher::TKIP,
            GroupDataCipher::Ccmp => cipher::CCMP_128,
            GroupDataCipher::Wep104 => cipher::WEP_104,
        }
    }

    pub fn cipher_type(self) -> CipherType {
        match self {
            GroupDataCipher::Wep40 => CipherType::Wep40,
            GroupDataCipher::Tkip => CipherType::Tkip,
            GroupDataCipher::Ccmp => CipherType::Ccmp,
            GroupDataCipher::Wep104 => CipherType::Wep104,
        }
    }
}

/// A single authentication and key management suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AkmSuite {
    Ieee8021X,
    Psk,
    Sha256Ieee8021X,
    Sha256Psk,
}

impl AkmSuite {
    pub fn suite_type(self) -> u8 {
        match self {
            AkmSuite::Ieee8021X => akm::EAP,
            AkmSuite::Psk => akm::PSK,
            AkmSuite::Sha256Ieee8021X => akm::EAP_SHA256,
            AkmSuite::Sha256Psk => akm::PSK_SHA256,
        }
    }

    pub fn uses_sha256(self) -> bool {
        match self {
            AkmSuite::Sha256Ieee8021X | AkmSuite::Sha256Psk => true,
            AkmSuite::Ieee8021X | AkmSuite::Psk => false,
        }
    }

    pub fn is_8021x(self) -> bool {
        match self {
            AkmSuite::Ieee8021X | AkmSuite::Sha256Ieee8021X => true,
            AkmSuite::Psk | AkmSuite::Sha256Psk => false,
        }
    }

    pub fn flag(self) -> Akms {
        match self {
            AkmSuite::Ieee8021X => Akms::IEEE8021X,
            AkmSuite::Psk => Akms::PSK,
            AkmSuite::Sha256Ieee8021X => Akms::SHA256_8021X,
            AkmSuite::Sha256Psk => Akms::SHA256_PSK,
        }
    }
}

static AKM_SUITES: [AkmSuite; 4] =
    [AkmSuite::Ieee8021X, AkmSuite::Psk, AkmSuite::Sha256Ieee8021X, AkmSuite::Sha256Psk];

static PAIRWISE_SUITES: [(PairwiseCiphers, u8); 3] = [
    (PairwiseCiphers::USE_GROUP, cipher::GROUP_CIPHER_SUITE),
    (PairwiseCiphers::TKIP, cipher::TKIP),
    (PairwiseCiphers::CCMP, cipher::CCMP_128),
];

impl Akms {
    /// Suites in advertisement order.
    pub fn suites(self) -> impl Iterator<Item = AkmSuite> {
        AKM_SUITES.iter().copied().filter(move |suite| self.contains(suite.flag()))
    }
}

impl PairwiseCiphers {
    /// The wire suite types in advertisement order.
    pub fn suite_types(self) -> impl Iterator<Item = u8> {
        PAIRWISE_SUITES
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, suite_type)| *suite_type)
    }
}
