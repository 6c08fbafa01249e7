// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{appendable::Appendable, appendable::BufferTooSmall, organization::Oui};

pub const SUITE_SELECTOR_LEN: usize = 4;

/// Builds a suite (cipher or AKM) from its wire selector.
pub trait Factory {
    type Suite;

    fn new(oui: Oui, suite_type: u8) -> Self::Suite;
}

/// Wire form shared by every suite selector: OUI followed by the suite type.
pub trait SuiteSelector {
    fn oui(&self) -> Oui;

    fn suite_type(&self) -> u8;

    fn write_into<A: Appendable>(&self, buf: &mut A) -> Result<(), BufferTooSmall> {
        buf.append_bytes(&self.oui().bytes()[..])?;
        buf.append_byte(self.suite_type())
    }
}
