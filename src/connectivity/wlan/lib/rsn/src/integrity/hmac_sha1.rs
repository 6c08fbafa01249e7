// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::{Algorithm, MIC_LEN},
    crate::Error,
    ring::{constant_time, hmac},
};

/// HMAC-SHA1 truncated to 128 bits, used by EAPOL-Key descriptor version 2.
pub struct HmacSha1;

impl HmacSha1 {
    pub fn new() -> HmacSha1 {
        HmacSha1
    }
}

impl Algorithm for HmacSha1 {
    fn verify(&self, key: &[u8], data: &[u8], expected: &[u8]) -> bool {
        match self.compute(key, data) {
            Ok(mic) => constant_time::verify_slices_are_equal(&mic[..], expected).is_ok(),
            Err(_) => false,
        }
    }

    fn compute(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>, Error> {
        let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
        let tag = hmac::sign(&key, data);
        Ok(tag.as_ref()[..MIC_LEN].to_vec())
    }
}
