// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{
    appendable::{Appendable, BufferTooSmall},
    mac::{self, Bssid, DataHdr, FrameControl, MacAddr, QosControl, SequenceControl},
};

/// Station to access point: addr1 = BSSID, addr2 = SA, addr3 = DA.
pub fn data_hdr_client_to_ap(
    mut frame_ctrl: FrameControl,
    bssid: Bssid,
    src_addr: MacAddr,
    dst_addr: MacAddr,
    seq_ctrl: SequenceControl,
) -> DataHdr {
    frame_ctrl.set_to_ds(true);
    frame_ctrl.set_from_ds(false);
    DataHdr { frame_ctrl, duration: 0, addr1: bssid.0, addr2: src_addr, addr3: dst_addr, seq_ctrl }
}

/// Access point to station: addr1 = DA, addr2 = BSSID, addr3 = SA.
pub fn data_hdr_ap_to_client(
    mut frame_ctrl: FrameControl,
    dst_addr: MacAddr,
    bssid: Bssid,
    src_addr: MacAddr,
    seq_ctrl: SequenceControl,
) -> DataHdr {
    frame_ctrl.set_to_ds(false);
    frame_ctrl.set_from_ds(true);
    DataHdr { frame_ctrl, duration: 0, addr1: dst_addr, addr2: bssid.0, addr3: src_addr, seq_ctrl }
}

/// Independent BSS, no distribution system: addr1 = DA, addr2 = SA, addr3 = BSSID.
pub fn data_hdr_ibss(
    mut frame_ctrl: FrameControl,
    dst_addr: MacAddr,
    src_addr: MacAddr,
    bssid: Bssid,
    seq_ctrl: SequenceControl,
) -> DataHdr {
    frame_ctrl.set_to_ds(false);
    frame_ctrl.set_from_ds(false);
    DataHdr { frame_ctrl, duration: 0, addr1: dst_addr, addr2: src_addr, addr3: bssid.0, seq_ctrl }
}

pub fn make_snap_llc_hdr(protocol_id: u16) -> mac::LlcHdr {
    mac::LlcHdr {
        dsap: mac::LLC_SNAP_EXTENSION,
        ssap: mac::LLC_SNAP_EXTENSION,
        control: mac::LLC_SNAP_UNNUMBERED_INFO,
        oui: mac::LLC_SNAP_OUI,
        protocol_id_be: protocol_id.to_be_bytes(),
    }
}

/// Writes the MAC header, the QoS Control field when given, and the LLC/SNAP header. The QoS
/// data subtype is set or cleared to match `qos_ctrl`.
pub fn write_data_hdr<B: Appendable>(
    buf: &mut B,
    mut hdr: DataHdr,
    qos_ctrl: Option<QosControl>,
    protocol_id: u16,
) -> Result<(), BufferTooSmall> {
    let len = DataHdr::len(qos_ctrl.is_some()) + std::mem::size_of::<mac::LlcHdr>();
    if !buf.can_append(len) {
        return Err(BufferTooSmall);
    }
    let mut fc = hdr.frame_ctrl;
    let subtype = fc.frame_subtype();
    fc.set_frame_subtype(match qos_ctrl {
        Some(_) => subtype | mac::BITMASK_QOS,
        None => subtype & !mac::BITMASK_QOS,
    });
    hdr.frame_ctrl = fc;
    buf.append_value(&hdr)?;
    if let Some(qos_ctrl) = qos_ctrl {
        buf.append_u16_le(qos_ctrl.0)?;
    }
    buf.append_value(&make_snap_llc_hdr(protocol_id))
}
