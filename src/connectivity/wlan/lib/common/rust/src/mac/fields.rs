// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    bitfield::bitfield,
    zerocopy::{AsBytes, FromBytes},
};

// IEEE Std 802.11-2016, 9.2.4.1.3
#[repr(C)]
#[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct FrameType(pub u16);

impl FrameType {
    pub const MGMT: Self = Self(0);
    pub const CTRL: Self = Self(1);
    pub const DATA: Self = Self(2);
    pub const EXT: Self = Self(3);
}

#[repr(C)]
#[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct MgmtSubtype(pub u16);

impl MgmtSubtype {
    pub const ASSOC_REQ: Self = Self(0b0000);
    pub const ASSOC_RESP: Self = Self(0b0001);
    pub const REASSOC_REQ: Self = Self(0b0010);
    pub const REASSOC_RESP: Self = Self(0b0011);
    pub const PROBE_REQ: Self = Self(0b0100);
    pub const PROBE_RESP: Self = Self(0b0101);
    pub const BEACON: Self = Self(0b1000);
    pub const ATIM: Self = Self(0b1001);
    pub const DISASSOC: Self = Self(0b1010);
    pub const AUTH: Self = Self(0b1011);
    pub const DEAUTH: Self = Self(0b1100);
    pub const ACTION: Self = Self(0b1101);
    pub const ACTION_NO_ACK: Self = Self(0b1110);
}

#[repr(C)]
#[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct CtrlSubtype(pub u16);

impl CtrlSubtype {
    pub const BLOCK_ACK_REQ: Self = Self(0b1000);
    pub const BLOCK_ACK: Self = Self(0b1001);
    pub const PS_POLL: Self = Self(0b1010);
    pub const RTS: Self = Self(0b1011);
    pub const CTS: Self = Self(0b1100);
    pub const ACK: Self = Self(0b1101);
}

// IEEE Std 802.11-2016, 9.2.4.1.3, Table 9-1
pub const BITMASK_NULL: u16 = 1 << 2;
pub const BITMASK_QOS: u16 = 1 << 3;

#[repr(C)]
#[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct DataSubtype(pub u16);

impl DataSubtype {
    pub const DATA: Self = Self(0b0000);
    pub const NULL: Self = Self(BITMASK_NULL);
    pub const QOS_DATA: Self = Self(BITMASK_QOS);
    pub const QOS_NULL: Self = Self(BITMASK_QOS | BITMASK_NULL);
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.2.4.1.1
    #[repr(C)]
    #[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Default)]
    pub struct FrameControl(u16);
    impl Debug;
    pub protocol_version, set_protocol_version: 1, 0;
    pub frame_type_raw, set_frame_type_raw: 3, 2;
    pub frame_subtype, set_frame_subtype: 7, 4;
    pub to_ds, set_to_ds: 8;
    pub from_ds, set_from_ds: 9;
    pub more_frags, set_more_frags: 10;
    pub retry, set_retry: 11;
    pub power_mgmt, set_power_mgmt: 12;
    pub more_data, set_more_data: 13;
    pub protected, set_protected: 14;
    pub htc_order, set_htc_order: 15;
}

impl FrameControl {
    pub fn frame_type(&self) -> FrameType {
        FrameType(self.frame_type_raw())
    }

    pub fn set_frame_type(&mut self, frame_type: FrameType) {
        self.set_frame_type_raw(frame_type.0)
    }

    pub fn from_mgmt(subtype: MgmtSubtype) -> Self {
        let mut fc = FrameControl(0);
        fc.set_frame_type(FrameType::MGMT);
        fc.set_frame_subtype(subtype.0);
        fc
    }

    pub fn from_ctrl(subtype: CtrlSubtype) -> Self {
        let mut fc = FrameControl(0);
        fc.set_frame_type(FrameType::CTRL);
        fc.set_frame_subtype(subtype.0);
        fc
    }

    pub fn from_data(subtype: DataSubtype) -> Self {
        let mut fc = FrameControl(0);
        fc.set_frame_type(FrameType::DATA);
        fc.set_frame_subtype(subtype.0);
        fc
    }

    pub fn is_qos_data(&self) -> bool {
        self.frame_type() == FrameType::DATA && self.frame_subtype() & BITMASK_QOS != 0
    }
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.2.4.4
    #[repr(C)]
    #[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Default)]
    pub struct SequenceControl(u16);
    impl Debug;
    pub frag_num, set_frag_num: 3, 0;
    pub seq_num, set_seq_num: 15, 4;
}

impl SequenceControl {
    pub fn from_seq_num(seq_num: u16) -> Self {
        let mut sc = SequenceControl(0);
        sc.set_seq_num(seq_num & MAX_SEQ_NUM);
        sc
    }
}

pub const MAX_SEQ_NUM: u16 = 0x0fff;

// IEEE Std 802.11-2016, 9.2.4.5.4, Table 9-7
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct AckPolicy(pub u16);

impl AckPolicy {
    pub const NORMAL: Self = Self(0);
    pub const NO_ACK: Self = Self(1);
    pub const NO_EXPLICIT_ACK: Self = Self(2);
    pub const BLOCK_ACK: Self = Self(3);
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.2.4.5.1, Table 9-6
    #[repr(C)]
    #[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Default)]
    pub struct QosControl(u16);
    impl Debug;
    pub tid, set_tid: 3, 0;
    pub eosp, set_eosp: 4;
    pub ack_policy_raw, set_ack_policy_raw: 6, 5;
    pub amsdu_present, set_amsdu_present: 7;
    pub high_byte, set_high_byte: 15, 8;
}

impl QosControl {
    pub fn ack_policy(&self) -> AckPolicy {
        AckPolicy(self.ack_policy_raw())
    }

    pub fn set_ack_policy(&mut self, policy: AckPolicy) {
        self.set_ack_policy_raw(policy.0)
    }
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.4.1.4
    #[repr(C)]
    #[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Default)]
    pub struct CapabilityInfo(u16);
    impl Debug;
    pub ess, set_ess: 0;
    pub ibss, set_ibss: 1;
    pub cf_pollable, set_cf_pollable: 2;
    pub cf_poll_req, set_cf_poll_req: 3;
    pub privacy, set_privacy: 4;
    pub short_preamble, set_short_preamble: 5;
    // bit 6-7 reserved
    pub spectrum_mgmt, set_spectrum_mgmt: 8;
    pub qos, set_qos: 9;
    pub short_slot_time, set_short_slot_time: 10;
    pub apsd, set_apsd: 11;
    pub radio_measurement, set_radio_measurement: 12;
    // bit 13 reserved
    pub delayed_block_ack, set_delayed_block_ack: 14;
    pub immediate_block_ack, set_immediate_block_ack: 15;
}
