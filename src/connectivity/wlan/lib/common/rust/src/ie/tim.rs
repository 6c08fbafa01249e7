// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::{write_tim, BitmapControl, TimHeader},
    crate::{appendable::Appendable, error::FrameWriteError},
};

/// Association ids range over 1..=2007, IEEE Std 802.11-2016, 9.4.1.8.
pub const MAX_AID: u16 = 2007;

/// The full virtual bitmap of buffered unicast traffic, one bit per association id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficIndicationMap {
    bitmap: Vec<u8>,
}

impl TrafficIndicationMap {
    pub fn new(max_aid: u16) -> Self {
        let max_aid = std::cmp::min(max_aid, MAX_AID) as usize;
        Self { bitmap: vec![0; max_aid / 8 + 1] }
    }

    pub fn set_traffic_buffered(&mut self, aid: u16, buffered: bool) {
        let (octet, bit) = (aid as usize / 8, aid % 8);
        if let Some(byte) = self.bitmap.get_mut(octet) {
            if buffered {
                *byte |= 1 << bit;
            } else {
                *byte &= !(1 << bit);
            }
        }
    }

    pub fn has_traffic(&self, aid: u16) -> bool {
        self.bitmap.get(aid as usize / 8).map_or(false, |byte| byte & (1 << (aid % 8)) != 0)
    }

    /// Returns the offset of the partial virtual bitmap (always even) and the octets it covers:
    /// from the first non-zero octet, rounded down, through the last non-zero octet.
    pub fn partial_virtual_bitmap(&self) -> (usize, &[u8]) {
        let first = self.bitmap.iter().position(|b| *b != 0);
        let offset = first.map_or(0, |i| i & !1);
        let last = self.bitmap.iter().rposition(|b| *b != 0).unwrap_or(0);
        (offset, &self.bitmap[offset..=last])
    }

    /// Writes the TIM element. The group-traffic bit is set only on DTIM beacons.
    pub fn write_element<B: Appendable>(
        &self,
        buf: &mut B,
        dtim_count: u8,
        dtim_period: u8,
        multicast_pending: bool,
    ) -> Result<(), FrameWriteError> {
        let (offset, bitmap) = self.partial_virtual_bitmap();
        let mut bmp_ctrl = BitmapControl(0);
        bmp_ctrl.set_offset((offset / 2) as u8);
        bmp_ctrl.set_group_traffic(dtim_count == 0 && multicast_pending);
        write_tim(buf, &TimHeader { dtim_count, dtim_period, bmp_ctrl }, bitmap)
    }

    /// Element length including its two-byte header.
    pub fn element_len(&self) -> usize {
        2 + 3 + self.partial_virtual_bitmap().1.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bitmap() {
        let tim = TrafficIndicationMap::new(64);
        assert_eq!(tim.partial_virtual_bitmap(), (0, &[0u8][..]));
        let mut buf = vec![];
        tim.write_element(&mut buf, 0, 1, false).expect("TIM fits");
        assert_eq!(&buf[..], &[5, 4, 0, 1, 0, 0]);
        assert_eq!(tim.element_len(), buf.len());
    }

    #[test]
    fn offset_rounds_down_to_even_octet() {
        let mut tim = TrafficIndicationMap::new(64);
        tim.set_traffic_buffered(26, true);
        tim.set_traffic_buffered(41, true);
        assert!(tim.has_traffic(26));
        assert!(!tim.has_traffic(27));
        let (offset, bitmap) = tim.partial_virtual_bitmap();
        assert_eq!(offset, 2);
        assert_eq!(bitmap, &[0x00, 0x04, 0x00, 0x02][..]);

        let mut buf = vec![];
        tim.write_element(&mut buf, 0, 2, true).expect("TIM fits");
        assert_eq!(&buf[..], &[5, 7, 0, 2, 0x03, 0x00, 0x04, 0x00, 0x02]);
    }

    #[test]
    fn group_bit_only_on_dtim() {
        let mut tim = TrafficIndicationMap::new(16);
        tim.set_traffic_buffered(1, true);
        let mut buf = vec![];
        tim.write_element(&mut buf, 1, 2, true).expect("TIM fits");
        assert_eq!(&buf[..], &[5, 4, 1, 2, 0x00, 0x02]);
    }

    #[test]
    fn clear_traffic() {
        let mut tim = TrafficIndicationMap::new(16);
        tim.set_traffic_buffered(9, true);
        tim.set_traffic_buffered(9, false);
        assert!(!tim.has_traffic(9));
        assert_eq!(tim.partial_virtual_bitmap(), (0, &[0u8][..]));
        // Out of range ids are ignored.
        tim.set_traffic_buffered(2000, true);
        assert!(!tim.has_traffic(2000));
    }
}
