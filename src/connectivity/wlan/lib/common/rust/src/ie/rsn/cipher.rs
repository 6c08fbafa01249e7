// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::suite_selector::{Factory, SuiteSelector},
    crate::organization::Oui,
    std::fmt,
};

// IEEE Std 802.11-2016, 9.4.2.25.2, Table 9-131
pub const GROUP_CIPHER_SUITE: u8 = 0;
pub const WEP_40: u8 = 1;
pub const TKIP: u8 = 2;
// 3 - Reserved.
pub const CCMP_128: u8 = 4;
pub const WEP_104: u8 = 5;
pub const BIP_CMAC_128: u8 = 6;
pub const GROUP_ADDRESSED_NOT_ALLOWED: u8 = 7;

#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct Cipher {
    pub oui: Oui,
    pub suite_type: u8,
}

impl Cipher {
    pub fn new_dot11(suite_type: u8) -> Self {
        Cipher { oui: Oui::DOT11, suite_type }
    }

    /// Suites as they appear in the WPA1 vendor element.
    pub fn new_msft(suite_type: u8) -> Self {
        Cipher { oui: Oui::MSFT, suite_type }
    }

    pub fn has_known_usage(&self) -> bool {
        (self.oui == Oui::DOT11 || self.oui == Oui::MSFT)
            && match self.suite_type {
                GROUP_CIPHER_SUITE | WEP_40 | TKIP | CCMP_128 | WEP_104 | BIP_CMAC_128 => true,
                _ => false,
            }
    }

    pub fn is_enhanced(&self) -> bool {
        self.has_known_usage() && (self.suite_type == TKIP || self.suite_type == CCMP_128)
    }
}

impl Factory for Cipher {
    type Suite = Cipher;

    fn new(oui: Oui, suite_type: u8) -> Self::Suite {
        Cipher { oui, suite_type }
    }
}

impl SuiteSelector for Cipher {
    fn oui(&self) -> Oui {
        self.oui
    }

    fn suite_type(&self) -> u8 {
        self.suite_type
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}:{}", self.oui, self.suite_type)
    }
}
