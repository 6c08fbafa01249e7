// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    bitfield::bitfield,
    zerocopy::{AsBytes, FromBytes, Unaligned},
};

bitfield! {
    /// IEEE Std 802.11-2016, 9.4.2.3
    #[repr(C)]
    #[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Hash, Clone, Copy)]
    pub struct SupportedRate(u8);
    impl Debug;
    pub rate, set_rate: 6, 0;
    pub basic, set_basic: 7;
}

// IEEE Std 802.11-2016, 9.4.2.4
#[repr(C)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct DsssParamSet {
    pub current_chan: u8,
}

// IEEE Std 802.11-2016, 9.4.2.7
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct IbssParamSet {
    pub atim_window: u16,
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.4.2.6
    #[repr(C)]
    #[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Hash, Clone, Copy)]
    pub struct BitmapControl(u8);
    impl Debug;
    pub group_traffic, set_group_traffic: 0;
    pub offset, set_offset: 7, 1;
}

// IEEE Std 802.11-2016, 9.4.2.6
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct TimHeader {
    pub dtim_count: u8,
    pub dtim_period: u8,
    pub bmp_ctrl: BitmapControl,
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.4.2.12
    #[repr(C)]
    #[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Hash, Clone, Copy, Default)]
    pub struct ErpInfo(u8);
    impl Debug;
    pub non_erp_present, set_non_erp_present: 0;
    pub use_protection, set_use_protection: 1;
    pub barker_preamble_mode, set_barker_preamble_mode: 2;
}

// IEEE Std 802.11-2016, 9.4.2.56
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct HtCapabilities {
    pub ht_cap_info: u16,
    pub ampdu_params: u8,
    pub mcs_set: [u8; 16],
    pub ht_ext_cap: u16,
    pub txbf_cap: u32,
    pub asel_cap: u8,
}

// IEEE Std 802.11-2016, 9.4.2.57
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct HtOperation {
    pub primary_chan: u8,
    pub ht_op_info: [u8; 5],
    pub basic_mcs_set: [u8; 16],
}

// IEEE Std 802.11-2016, 9.4.2.49, Table 9-185
#[repr(C)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct TimeoutIntervalType(pub u8);

impl TimeoutIntervalType {
    pub const REASSOC_DEADLINE: Self = Self(1);
    pub const KEY_LIFETIME: Self = Self(2);
    pub const ASSOC_COMEBACK: Self = Self(3);
}

// IEEE Std 802.11-2016, 9.4.2.49
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct TimeoutInterval {
    pub ti_type: TimeoutIntervalType,
    pub value: u32,
}
