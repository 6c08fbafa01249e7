// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::mac::MacAddr,
    zerocopy::{AsBytes, ByteSlice, FromBytes, LayoutVerified, Unaligned},
};

// RFC 704, Appendix B.2
// https://www.iana.org/assignments/ieee-802-numbers/ieee-802-numbers.xhtml
pub const ETHER_TYPE_EAPOL: u16 = 0x888E;
pub const ETHER_TYPE_IPV4: u16 = 0x0800;
pub const ETHER_TYPE_IPV6: u16 = 0x86DD;
pub const ETHER_TYPE_VLAN: u16 = 0x8100;

pub const MAX_ETH_FRAME_LEN: usize = 2048;

// IEEE Std 802.3-2015, 3.1.1
#[repr(C, packed)]
#[derive(FromBytes, AsBytes, Unaligned, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EthernetIIHdr {
    pub da: MacAddr,
    pub sa: MacAddr,
    pub ether_type_be: [u8; 2],
}

impl EthernetIIHdr {
    pub fn new(da: MacAddr, sa: MacAddr, ether_type: u16) -> Self {
        Self { da, sa, ether_type_be: ether_type.to_be_bytes() }
    }

    pub fn ether_type(&self) -> u16 {
        u16::from_be_bytes(self.ether_type_be)
    }
}

// IEEE Std 802.1Q-2014, 9.6
#[repr(C, packed)]
#[derive(FromBytes, AsBytes, Unaligned, Clone, Copy, Debug)]
pub struct VlanTag {
    pub tci_be: [u8; 2],
    pub ether_type_be: [u8; 2],
}

impl VlanTag {
    /// Priority code point, the top three bits of the tag control information.
    pub fn priority(&self) -> u8 {
        (u16::from_be_bytes(self.tci_be) >> 13) as u8
    }

    pub fn ether_type(&self) -> u16 {
        u16::from_be_bytes(self.ether_type_be)
    }
}

pub struct EthernetFrame<B: ByteSlice> {
    pub hdr: LayoutVerified<B, EthernetIIHdr>,
    pub body: B,
}

impl<B: ByteSlice> EthernetFrame<B> {
    pub fn parse(bytes: B) -> Option<Self> {
        let (hdr, body) = LayoutVerified::new_unaligned_from_prefix(bytes)?;
        Some(Self { hdr, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eth_hdr_big_endian() {
        let bytes: Vec<u8> = vec![
            1, 2, 3, 4, 5, 6, // dst_addr
            7, 8, 9, 10, 11, 12, // src_addr
            0x88, 0x8e, // ether_type
            99, 99, // trailing bytes
        ];
        let frame = EthernetFrame::parse(&bytes[..]).expect("cannot parse ethernet frame");
        assert_eq!(frame.hdr.da, [1u8, 2, 3, 4, 5, 6]);
        assert_eq!(frame.hdr.sa, [7u8, 8, 9, 10, 11, 12]);
        assert_eq!(frame.hdr.ether_type(), ETHER_TYPE_EAPOL);
        assert_eq!(frame.body, &[99, 99][..]);

        let hdr = EthernetIIHdr::new([1; 6], [2; 6], ETHER_TYPE_IPV4);
        assert_eq!(&hdr.as_bytes()[12..], &[0x08, 0x00]);
    }

    #[test]
    fn too_short() {
        assert!(EthernetFrame::parse(&[0u8; 13][..]).is_none());
    }

    #[test]
    fn vlan_priority() {
        let tag = VlanTag { tci_be: [0xa0, 0x05], ether_type_be: [0x08, 0x00] };
        assert_eq!(tag.priority(), 5);
        assert_eq!(tag.ether_type(), ETHER_TYPE_IPV4);
    }
}
