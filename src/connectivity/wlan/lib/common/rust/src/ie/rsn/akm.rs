// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::suite_selector::{Factory, SuiteSelector},
    crate::organization::Oui,
    std::fmt,
};

// IEEE Std 802.11-2016, 9.4.2.25.3, Table 9-133
pub const EAP: u8 = 1;
pub const PSK: u8 = 2;
pub const FT_EAP: u8 = 3;
pub const FT_PSK: u8 = 4;
pub const EAP_SHA256: u8 = 5;
pub const PSK_SHA256: u8 = 6;

#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Akm {
    pub oui: Oui,
    pub suite_type: u8,
}

impl Akm {
    pub fn new_dot11(suite_type: u8) -> Self {
        Akm { oui: Oui::DOT11, suite_type }
    }

    pub fn new_msft(suite_type: u8) -> Self {
        Akm { oui: Oui::MSFT, suite_type }
    }

    /// AKMs whose key hierarchy is derived with SHA-256 rather than SHA-1.
    pub fn uses_sha256(&self) -> bool {
        self.oui == Oui::DOT11 && (self.suite_type == EAP_SHA256 || self.suite_type == PSK_SHA256)
    }
}

impl Factory for Akm {
    type Suite = Akm;

    fn new(oui: Oui, suite_type: u8) -> Self::Suite {
        Akm { oui, suite_type }
    }
}

impl SuiteSelector for Akm {
    fn oui(&self) -> Oui {
        self.oui
    }

    fn suite_type(&self) -> u8 {
        self.suite_type
    }
}

impl fmt::Debug for Akm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:{}", self.oui, self.suite_type)
    }
}
