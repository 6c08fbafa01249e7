// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{
        cipher::CipherType,
        prf::{kdf_sha256, prf},
        rsna::AkmSuite,
        Error,
    },
    std::{cmp, fmt},
    wlan_common::mac::MacAddr,
};

pub const PMK_LEN: usize = 32;
pub const NONCE_LEN: usize = 32;
pub const KCK_LEN: usize = 16;
pub const KEK_LEN: usize = 16;

const LABEL: &str = "Pairwise key expansion";

/// Pairwise Transient Key, IEEE Std 802.11-2016, 12.7.1.3.
#[derive(Clone, PartialEq, Eq)]
pub struct Ptk {
    ptk: Vec<u8>,
    pub cipher: CipherType,
}

impl Ptk {
    /// Derives the PTK of the pairwise cipher `cipher` between authenticator `aa` and supplicant
    /// `spa`.
    pub fn derive(
        akm: AkmSuite,
        pmk: &[u8],
        aa: &MacAddr,
        spa: &MacAddr,
        anonce: &[u8],
        snonce: &[u8],
        cipher: CipherType,
    ) -> Result<Ptk, Error> {
        if pmk.len() != PMK_LEN {
            return Err(Error::InvalidPmkLength(pmk.len()));
        }
        if anonce.len() != NONCE_LEN {
            return Err(Error::InvalidNonceLength(anonce.len()));
        }
        if snonce.len() != NONCE_LEN {
            return Err(Error::InvalidNonceLength(snonce.len()));
        }
        match cipher {
            CipherType::Tkip | CipherType::Ccmp => (),
            other => return Err(Error::UnsupportedCipher(other)),
        }

        let mut data = Vec::with_capacity(2 * 6 + 2 * NONCE_LEN);
        data.extend_from_slice(&cmp::min(aa, spa)[..]);
        data.extend_from_slice(&cmp::max(aa, spa)[..]);
        data.extend_from_slice(cmp::min(anonce, snonce));
        data.extend_from_slice(cmp::max(anonce, snonce));

        let bits = (KCK_LEN + KEK_LEN + cipher.key_len()) * 8;
        let ptk = if akm.uses_sha256() {
            kdf_sha256(pmk, LABEL, &data[..], bits)?
        } else {
            prf(pmk, LABEL, &data[..], bits)?
        };
        Ok(Ptk { ptk, cipher })
    }

    pub fn kck(&self) -> &[u8] {
        &self.ptk[..KCK_LEN]
    }

    pub fn kek(&self) -> &[u8] {
        &self.ptk[KCK_LEN..KCK_LEN + KEK_LEN]
    }

    pub fn tk(&self) -> &[u8] {
        &self.ptk[KCK_LEN + KEK_LEN..]
    }

    pub fn len(&self) -> usize {
        self.ptk.len()
    }
}

impl fmt::Debug for Ptk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ptk").field("cipher", &self.cipher).field("len", &self.ptk.len()).finish()
    }
}
