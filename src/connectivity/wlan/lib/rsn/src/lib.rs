// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Key management primitives for robust security networks: suite negotiation types, key tables,
//! PTK and PMKID derivation, the PMKSA cache, EAPOL-Key integrity algorithms and the framing
//! rules of the WEP, TKIP, CCMP and BIP ciphers.

pub mod cipher;
pub mod integrity;
pub mod key;
pub mod pmkid;
pub mod pmksa;
pub mod prf;
pub mod rsna;

use {crate::cipher::CipherType, thiserror::Error};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid key id: {0}")]
    InvalidKeyId(u8),
    #[error("invalid key length for {0:?}: {1}")]
    InvalidKeyLength(CipherType, usize),
    #[error("no free slot in key table")]
    KeyTableFull,
    #[error("cipher {0:?} cannot be used here")]
    UnsupportedCipher(CipherType),
    #[error("invalid PMK length: {0}")]
    InvalidPmkLength(usize),
    #[error("invalid nonce length: {0}")]
    InvalidNonceLength(usize),
    #[error("invalid bit length for key derivation: {0}")]
    InvalidBitLength(usize),
    #[error("invalid MAC key length: {0}")]
    InvalidMacKeyLength(usize),
    #[error("invalid MIC length: expected {expected}, got {actual}")]
    InvalidMicLength { expected: usize, actual: usize },
    #[error("cipher header too short: {0} bytes")]
    CipherHeaderTooShort(usize),
    #[error("extended IV bit not set in cipher header")]
    MissingExtendedIv,
    #[error("TKIP WEP seed byte mismatch")]
    InvalidTkipSeed,
    #[error("invalid MMIE")]
    InvalidMmie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(format!("{}", Error::InvalidKeyId(7)), "invalid key id: 7");
        assert_eq!(
            format!("{}", Error::InvalidKeyLength(CipherType::Ccmp, 5)),
            "invalid key length for Ccmp: 5"
        );
        assert_eq!(
            format!("{}", Error::InvalidMicLength { expected: 16, actual: 8 }),
            "invalid MIC length: expected 16, got 8"
        );
    }
}
