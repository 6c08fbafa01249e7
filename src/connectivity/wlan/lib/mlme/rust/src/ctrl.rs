// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{buffer::Chain, error::Error, iface::Interface},
    wlan_common::{
        appendable::Appendable,
        frame_len,
        mac::{CtrlSubtype, CtsFrame, FrameControl, MacAddr, MinHdr, RtsFrame},
    },
    zerocopy::LayoutVerified,
};

/// RTS protecting `frame`, addressed to its receiver. `duration` covers the rest of the exchange
/// in microseconds.
pub fn build_rts(iface: &mut Interface, frame: &[u8], duration: u16) -> Result<Chain, Error> {
    let (hdr, _) = LayoutVerified::<_, MinHdr>::new_unaligned_from_prefix(frame)
        .ok_or(Error::InvalidFrame("frame too short for RTS"))?;
    let (ra, ta): (MacAddr, MacAddr) = (hdr.addr1, hdr.addr2);
    iface.pool.alloc_frame(frame_len!(RtsFrame), |w| {
        w.append_value(&RtsFrame {
            frame_ctrl: FrameControl::from_ctrl(CtrlSubtype::RTS),
            duration,
            ra,
            ta,
        })?;
        Ok(())
    })
}

/// CTS addressed to ourselves, reserving the medium for our own transmission.
pub fn build_cts_to_self(iface: &mut Interface, duration: u16) -> Result<Chain, Error> {
    let ra = iface.addr;
    iface.pool.alloc_frame(frame_len!(CtsFrame), |w| {
        w.append_value(&CtsFrame {
            frame_ctrl: FrameControl::from_ctrl(CtrlSubtype::CTS),
            duration,
            ra,
        })?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use {super::*, crate::iface::test_utils::*, wlan_common::assert_variant};

    #[test]
    fn rts() {
        let (mut iface, _, _) = fake_iface(&station_config());
        #[rustfmt::skip]
        let data = [
            0x08, 0x01, 0, 0,
            0x02, 0, 0, 0, 0, 0xaa,
            0x02, 0, 0, 0, 0, 0x01,
            0x02, 0, 0, 0, 0, 0x77,
            0, 0,
        ];
        let chain = build_rts(&mut iface, &data[..], 0x0123).expect("rts");
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0xb4, 0x00, 0x23, 0x01,
            0x02, 0, 0, 0, 0, 0xaa,
            0x02, 0, 0, 0, 0, 0x01,
        ];
        assert_eq!(&iface.pool.to_vec(&chain)[..], expected);
        iface.pool.release_all(chain);
    }

    #[test]
    fn rts_short_frame() {
        let (mut iface, _, _) = fake_iface(&station_config());
        let free = iface.pool.free_count();
        assert_variant!(build_rts(&mut iface, &[0x08, 0x01][..], 0), Err(Error::InvalidFrame(_)));
        assert_eq!(iface.pool.free_count(), free);
    }

    #[test]
    fn cts_to_self() {
        let (mut iface, _, _) = fake_iface(&station_config());
        let chain = build_cts_to_self(&mut iface, 44).expect("cts");
        assert_eq!(
            &iface.pool.to_vec(&chain)[..],
            &[0xc4, 0x00, 44, 0, 0x02, 0, 0, 0, 0, 0x01][..]
        );
        iface.pool.release_all(chain);
    }
}
