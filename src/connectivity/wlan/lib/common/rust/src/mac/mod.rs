// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    std::mem::size_of,
    zerocopy::{AsBytes, ByteSlice, FromBytes, LayoutVerified, Unaligned},
};

pub mod ctrl;
pub mod eth;
mod fields;
pub mod mgmt;

pub use {ctrl::*, fields::*, mgmt::*};

pub type MacAddr = [u8; 6];
pub const BCAST_ADDR: MacAddr = [0xFF; 6];

#[repr(C)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug, Hash, Default)]
pub struct Bssid(pub MacAddr);

/// Group addresses have the I/G bit of the first octet set.
pub fn is_multicast(addr: &MacAddr) -> bool {
    addr[0] & 0x01 != 0
}

// RFC 1042
pub const LLC_SNAP_EXTENSION: u8 = 0xAA;
pub const LLC_SNAP_UNNUMBERED_INFO: u8 = 0x03;
pub const LLC_SNAP_OUI: [u8; 3] = [0, 0, 0];

// IEEE Std 802.2-1998, 3.2
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct LlcHdr {
    pub dsap: u8,
    pub ssap: u8,
    pub control: u8,
    pub oui: [u8; 3],
    pub protocol_id_be: [u8; 2],
}

impl LlcHdr {
    pub fn protocol_id(&self) -> u16 {
        u16::from_be_bytes(self.protocol_id_be)
    }
}

// IEEE Std 802.11-2016, 9.3.3.2
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct MgmtHdr {
    pub frame_ctrl: FrameControl,
    pub duration: u16,
    pub addr1: MacAddr,
    pub addr2: MacAddr,
    pub addr3: MacAddr,
    pub seq_ctrl: SequenceControl,
}

// IEEE Std 802.11-2016, 9.3.2.1
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct DataHdr {
    pub frame_ctrl: FrameControl,
    pub duration: u16,
    pub addr1: MacAddr,
    pub addr2: MacAddr,
    pub addr3: MacAddr,
    pub seq_ctrl: SequenceControl,
}

impl DataHdr {
    /// Header length including the QoS Control field when present. Four-address frames are not
    /// produced by this stack.
    pub fn len(has_qos_ctrl: bool) -> usize {
        size_of::<DataHdr>() + if has_qos_ctrl { size_of::<QosControl>() } else { 0 }
    }
}

/// The leading fields shared by every frame type that carries a transmitter address.
/// IEEE Std 802.11-2016, 9.3.1.
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug)]
pub struct MinHdr {
    pub frame_ctrl: FrameControl,
    pub duration: u16,
    pub addr1: MacAddr,
    pub addr2: MacAddr,
}

pub const MIN_FRAME_LEN: usize = size_of::<MinHdr>();

/// Generic view over the first three addresses of a data or management frame.
pub struct MacFrameHdr<B> {
    pub hdr: LayoutVerified<B, DataHdr>,
    pub body: B,
}

impl<B: ByteSlice> MacFrameHdr<B> {
    pub fn parse(bytes: B) -> Option<Self> {
        let (hdr, body) = LayoutVerified::new_unaligned_from_prefix(bytes)?;
        Some(Self { hdr, body })
    }
}

// IEEE Std 802.11-2016, Table 9-26 defines DA, SA, RA, TA, BSSID
pub fn data_dst_addr(hdr: &DataHdr) -> MacAddr {
    let fc = hdr.frame_ctrl;
    if fc.to_ds() {
        hdr.addr3
    } else {
        hdr.addr1
    }
}

pub fn data_src_addr(hdr: &DataHdr) -> Option<MacAddr> {
    let fc = hdr.frame_ctrl;
    match (fc.to_ds(), fc.from_ds()) {
        (_, false) => Some(hdr.addr2),
        (false, true) => Some(hdr.addr3),
        // The source lives in the fourth address.
        (true, true) => None,
    }
}

/// BSSID: basic service set ID
pub fn data_bssid(hdr: &DataHdr) -> Option<MacAddr> {
    let fc = hdr.frame_ctrl;
    match (fc.to_ds(), fc.from_ds()) {
        (false, false) => Some(hdr.addr3),
        (false, true) => Some(hdr.addr2),
        (true, false) => Some(hdr.addr1),
        (true, true) => None,
    }
}
