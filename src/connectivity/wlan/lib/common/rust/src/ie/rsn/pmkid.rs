// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use super::rsne::Error;

pub const PMKID_LEN: usize = 16;

pub type Pmkid = [u8; PMKID_LEN];

pub fn new(pmkid: &[u8]) -> Result<Pmkid, Error> {
    if pmkid.len() != PMKID_LEN {
        return Err(Error::InvalidPmkidLength(pmkid.len()));
    }
    let mut out = [0u8; PMKID_LEN];
    out.copy_from_slice(pmkid);
    Ok(out)
}
