// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

pub mod cmac_aes128;
pub mod hmac_sha1;

use {
    crate::{rsna::AkmSuite, Error},
    cmac_aes128::CmacAes128,
    hmac_sha1::HmacSha1,
};

/// Length of the MIC in an EAPOL-Key frame for the supported AKMs.
pub const MIC_LEN: usize = 16;

pub trait Algorithm {
    fn verify(&self, key: &[u8], data: &[u8], expected: &[u8]) -> bool;
    fn compute(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, Error>;
}

/// IEEE Std 802.11-2016, 12.7.3, Table 12-8.
pub fn integrity_algorithm(akm: AkmSuite) -> Box<dyn Algorithm> {
    if akm.uses_sha256() {
        Box::new(CmacAes128::new())
    } else {
        Box::new(HmacSha1::new())
    }
}
