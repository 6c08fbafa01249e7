// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{rsna::AkmSuite, Error},
    hmac::{Hmac, Mac, NewMac},
    ring::hmac as ring_hmac,
    sha2::Sha256,
    wlan_common::{
        ie::rsn::pmkid::{Pmkid, PMKID_LEN},
        mac::MacAddr,
    },
};

const LABEL: &[u8] = b"PMK Name";

/// PMKID = Truncate-128(HMAC-Hash(PMK, "PMK Name" || AA || SPA)), IEEE Std 802.11-2016, 12.7.1.3.
pub fn compute_pmkid(
    akm: AkmSuite,
    pmk: &[u8],
    aa: &MacAddr,
    spa: &MacAddr,
) -> Result<Pmkid, Error> {
    let mut pmkid = [0u8; PMKID_LEN];
    if akm.uses_sha256() {
        let mut mac = Hmac::<Sha256>::new_from_slice(pmk)
            .map_err(|_| Error::InvalidMacKeyLength(pmk.len()))?;
        mac.update(LABEL);
        mac.update(&aa[..]);
        mac.update(&spa[..]);
        pmkid.copy_from_slice(&mac.finalize().into_bytes()[..PMKID_LEN]);
    } else {
        let key = ring_hmac::Key::new(ring_hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, pmk);
        let mut ctx = ring_hmac::Context::with_key(&key);
        ctx.update(LABEL);
        ctx.update(&aa[..]);
        ctx.update(&spa[..]);
        pmkid.copy_from_slice(&ctx.sign().as_ref()[..PMKID_LEN]);
    }
    Ok(pmkid)
}
