// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use zerocopy::{AsBytes, FromBytes, Unaligned};

mod edca;
mod fields;
mod reader;
pub mod rates_writer;
pub mod rsn;
mod tim;
pub mod wpa;
mod write;

pub use {edca::*, fields::*, reader::*, tim::*, write::*};

#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct Header {
    pub id: Id,
    pub body_len: u8,
}

// IEEE Std 802.11-2016, 9.4.2.1, Table 9-77
#[repr(C)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Id(pub u8);

impl Id {
    pub const SSID: Self = Self(0);
    pub const SUPPORTED_RATES: Self = Self(1);
    pub const DSSS_PARAM_SET: Self = Self(3);
    pub const TIM: Self = Self(5);
    pub const IBSS_PARAM_SET: Self = Self(6);
    pub const EDCA_PARAM_SET: Self = Self(12);
    pub const ERP_INFO: Self = Self(42);
    pub const HT_CAPABILITIES: Self = Self(45);
    pub const QOS_CAPABILITY: Self = Self(46);
    pub const RSNE: Self = Self(48);
    pub const EXT_SUPPORTED_RATES: Self = Self(50);
    pub const TIMEOUT_INTERVAL: Self = Self(56);
    pub const HT_OPERATION: Self = Self(61);
    pub const VENDOR_SPECIFIC: Self = Self(221);
    pub const EXTENSION: Self = Self(255);
}

pub const IE_MAX_LEN: usize = 255;
pub const SSID_MAX_LEN: usize = 32;
pub const SUPPORTED_RATES_MAX_LEN: usize = 8;
