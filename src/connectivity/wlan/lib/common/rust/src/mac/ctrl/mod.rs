// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::mac::{FrameControl, MacAddr},
    zerocopy::{AsBytes, FromBytes, Unaligned},
};

// IEEE Std 802.11-2016, 9.3.1.2
#[repr(C, packed)]
#[derive(FromBytes, AsBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct RtsFrame {
    pub frame_ctrl: FrameControl,
    pub duration: u16,
    pub ra: MacAddr,
    pub ta: MacAddr,
}

// IEEE Std 802.11-2016, 9.3.1.3
#[repr(C, packed)]
#[derive(FromBytes, AsBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct CtsFrame {
    pub frame_ctrl: FrameControl,
    pub duration: u16,
    pub ra: MacAddr,
}
