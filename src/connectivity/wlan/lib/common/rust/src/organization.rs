// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    std::fmt,
    zerocopy::{AsBytes, FromBytes, Unaligned},
};

/// Organizationally unique identifier, IEEE Std 802-2014, 8.2.
#[repr(C)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Oui([u8; 3]);

impl Oui {
    pub const DOT11: Self = Self([0x00, 0x0F, 0xAC]);
    pub const MSFT: Self = Self([0x00, 0x50, 0xF2]);

    pub const fn new(oui: [u8; 3]) -> Self {
        Self(oui)
    }

    pub fn bytes(&self) -> &[u8; 3] {
        &self.0
    }
}

impl fmt::Debug for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}-{:02X}-{:02X}", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Oui::DOT11), "00-0F-AC");
        assert_eq!(format!("{:?}", Oui::MSFT), "00-50-F2");
    }
}
