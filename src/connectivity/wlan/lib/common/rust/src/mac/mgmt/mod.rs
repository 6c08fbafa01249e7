// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::mac::{CapabilityInfo, MacAddr},
    bitfield::bitfield,
    zerocopy::{AsBytes, FromBytes, Unaligned},
};

mod reason;
mod status;

pub use {reason::*, status::*};

// IEEE Std 802.11-2016, 9.4.1.1
#[repr(C)]
#[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct AuthAlgorithmNumber(pub u16);

impl AuthAlgorithmNumber {
    pub const OPEN: Self = Self(0);
    pub const SHARED_KEY: Self = Self(1);
    pub const FAST_BSS_TRANSITION: Self = Self(2);
    pub const SAE: Self = Self(3);
}

// IEEE Std 802.11-2016, 9.3.3.3 and 9.3.3.11
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct BeaconHdr {
    pub timestamp: u64,
    pub beacon_interval: u16,
    pub capabilities: CapabilityInfo,
}

pub type ProbeRespHdr = BeaconHdr;

// IEEE Std 802.11-2016, 9.3.3.12
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct AuthHdr {
    pub auth_alg_num: AuthAlgorithmNumber,
    pub auth_txn_seq_num: u16,
    pub status_code: StatusCode,
}

// IEEE Std 802.11-2016, 9.3.3.13 and 9.3.3.5
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct DeauthHdr {
    pub reason_code: ReasonCode,
}

pub type DisassocHdr = DeauthHdr;

// IEEE Std 802.11-2016, 9.3.3.6
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct AssocReqHdr {
    pub capabilities: CapabilityInfo,
    pub listen_interval: u16,
}

// IEEE Std 802.11-2016, 9.3.3.8
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct ReassocReqHdr {
    pub capabilities: CapabilityInfo,
    pub listen_interval: u16,
    pub current_ap: MacAddr,
}

// IEEE Std 802.11-2016, 9.3.3.7
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct AssocRespHdr {
    pub capabilities: CapabilityInfo,
    pub status_code: StatusCode,
    pub aid: u16,
}

// IEEE Std 802.11-2016, 9.4.1.11, Table 9-47
#[repr(C)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ActionCategory(pub u8);

impl ActionCategory {
    pub const SPECTRUM_MGMT: Self = Self(0);
    pub const QOS: Self = Self(1);
    pub const DLS: Self = Self(2);
    pub const BLOCK_ACK: Self = Self(3);
    pub const PUBLIC: Self = Self(4);
    pub const HT: Self = Self(7);
    pub const SA_QUERY: Self = Self(8);
    pub const VENDOR_SPECIFIC: Self = Self(127);
}

// IEEE Std 802.11-2016, 9.6.5.1
#[repr(C)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct BlockAckAction(pub u8);

impl BlockAckAction {
    pub const ADDBA_REQUEST: Self = Self(0);
    pub const ADDBA_RESPONSE: Self = Self(1);
    pub const DELBA: Self = Self(2);
}

// IEEE Std 802.11-2016, 9.6.10.1
#[repr(C)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct SaQueryAction(pub u8);

impl SaQueryAction {
    pub const REQUEST: Self = Self(0);
    pub const RESPONSE: Self = Self(1);
}

// IEEE Std 802.11-2016, 9.3.3.14
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct ActionHdr {
    pub action: ActionCategory,
}

// IEEE Std 802.11-2016, 9.4.1.14
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct BlockAckPolicy(pub u16);

impl BlockAckPolicy {
    pub const DELAYED: Self = Self(0);
    pub const IMMEDIATE: Self = Self(1);
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.4.1.14, Figure 9-84
    #[repr(C)]
    #[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Default)]
    pub struct BlockAckParameters(u16);
    impl Debug;
    pub amsdu, set_amsdu: 0;
    pub policy_raw, set_policy_raw: 1, 1;
    pub tid, set_tid: 5, 2;
    pub buffer_size, set_buffer_size: 15, 6;
}

impl BlockAckParameters {
    pub fn policy(&self) -> BlockAckPolicy {
        BlockAckPolicy(self.policy_raw())
    }

    pub fn set_policy(&mut self, policy: BlockAckPolicy) {
        self.set_policy_raw(policy.0)
    }
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.4.1.16, Figure 9-86
    #[repr(C)]
    #[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Default)]
    pub struct DelbaParameters(u16);
    impl Debug;
    // bit 0-10 reserved
    pub initiator, set_initiator: 11;
    pub tid, set_tid: 15, 12;
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.4.1.12
    #[repr(C)]
    #[derive(AsBytes, FromBytes, PartialEq, Eq, Clone, Copy, Default)]
    pub struct BlockAckStartingSequenceControl(u16);
    impl Debug;
    pub fragment_number, set_fragment_number: 3, 0;
    pub starting_sequence_number, set_starting_sequence_number: 15, 4;
}

// IEEE Std 802.11-2016, 9.6.5.2 - ADDBA stands for Add BlockAck.
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct AddbaReqHdr {
    pub action: BlockAckAction,
    pub dialog_token: u8,
    pub parameters: BlockAckParameters,
    pub timeout: u16,
    pub starting_sequence_control: BlockAckStartingSequenceControl,
}

// IEEE Std 802.11-2016, 9.6.5.3
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct AddbaRespHdr {
    pub action: BlockAckAction,
    pub dialog_token: u8,
    pub status: StatusCode,
    pub parameters: BlockAckParameters,
    pub timeout: u16,
}

// IEEE Std 802.11-2016, 9.6.5.4 - DELBA stands for Delete BlockAck.
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct DelbaHdr {
    pub action: BlockAckAction,
    pub parameters: DelbaParameters,
    pub reason_code: ReasonCode,
}

// IEEE Std 802.11-2016, 9.6.10.2 and 9.6.10.3
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, Clone, Copy, Debug)]
pub struct SaQueryHdr {
    pub action: SaQueryAction,
    pub transaction_id: u16,
}
