// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Turns outgoing frames into 802.11 frames ready for the device: Ethernet frames get a MAC
//! header, QoS control and LLC/SNAP; frames the host already built are passed through.

use {
    crate::{
        buffer::Chain,
        classify::classify,
        device::{TxFlags, TxFrame},
        error::Error,
        iface::{IfaceCaps, Interface, Role},
        node::{NodeFlags, NodeLookup, NodeRef},
        pwrsave::pwrsave,
    },
    log::{debug, warn},
    std::mem::size_of,
    wlan_common::{
        data_writer,
        mac::{
            eth::{EthernetFrame, EthernetIIHdr, ETHER_TYPE_EAPOL},
            is_multicast, AckPolicy, Bssid, DataHdr, DataSubtype, FrameControl, FrameType,
            MacAddr, MacFrameHdr, MinHdr, QosControl, SequenceControl,
        },
    },
    zerocopy::LayoutVerified,
};

#[derive(Debug)]
pub enum Outcome {
    /// Hand the frame to the device.
    Ready(TxFrame),
    /// Held in a power save queue.
    Buffered,
}

/// Encapsulates the frame in `chain`. `tagged` marks frames that already carry an 802.11
/// header. The chain is released on failure.
pub fn encapsulate(
    iface: &mut Interface,
    lookup: &dyn NodeLookup,
    mut chain: Chain,
    tagged: bool,
) -> Result<Outcome, Error> {
    let result = if tagged {
        raw_frame_node(iface, lookup, &chain)
    } else {
        ethernet_to_dot11(iface, lookup, &mut chain)
    };
    match result {
        Ok((node, flags)) => {
            let frame = TxFrame::new(chain, Some(node), flags);
            Ok(pwrsave(iface, frame).map_or(Outcome::Buffered, Outcome::Ready))
        }
        Err(e) => {
            debug!("dropping outgoing frame: {}", e);
            iface.pool.release_all(chain);
            Err(e)
        }
    }
}

/// Stations send everything through their BSS, as does everyone for group addressed frames.
fn find_tx_node(iface: &Interface, lookup: &dyn NodeLookup, dst: &MacAddr) -> Option<NodeRef> {
    if iface.role == Role::Station || is_multicast(dst) {
        return Some(iface.bss.clone());
    }
    lookup.find(dst)
}

fn raw_frame_node(
    iface: &Interface,
    lookup: &dyn NodeLookup,
    chain: &Chain,
) -> Result<(NodeRef, TxFlags), Error> {
    let bytes = iface.pool.to_vec(chain);
    let (hdr, _) = LayoutVerified::<_, MinHdr>::new_unaligned_from_prefix(&bytes[..])
        .ok_or(Error::InvalidFrame("raw frame shorter than a MAC header"))?;
    let fc = hdr.frame_ctrl;
    if fc.protocol_version() != 0 {
        return Err(Error::InvalidFrame("unsupported protocol version"));
    }
    let frame_type = fc.frame_type();
    if frame_type == FrameType::CTRL && !iface.has_caps(IfaceCaps::RAW_CTRL) {
        return Err(Error::Unsupported("raw control frames".to_string()));
    }

    let dst = if fc.to_ds() {
        MacFrameHdr::parse(&bytes[..])
            .map(|frame| frame.hdr.addr3)
            .ok_or(Error::InvalidFrame("to-DS frame without a third address"))?
    } else {
        hdr.addr1
    };
    let node = find_tx_node(iface, lookup, &dst).unwrap_or_else(|| iface.bss.clone());

    let mut flags = TxFlags::empty();
    flags.set(TxFlags::MGMT, frame_type == FrameType::MGMT);
    flags.set(TxFlags::PROTECTED, fc.protected());
    flags.set(TxFlags::QOS, fc.is_qos_data());
    Ok((node, flags))
}

fn ethernet_to_dot11(
    iface: &mut Interface,
    lookup: &dyn NodeLookup,
    chain: &mut Chain,
) -> Result<(NodeRef, TxFlags), Error> {
    let bytes = iface.pool.to_vec(chain);
    let eth = EthernetFrame::parse(&bytes[..])
        .ok_or(Error::InvalidFrame("Ethernet frame too short"))?;
    let da = eth.hdr.da;
    let sa = eth.hdr.sa;
    let ether_type = eth.hdr.ether_type();

    let node_ref = find_tx_node(iface, lookup, &da).ok_or_else(|| {
        warn!("no node for {:02x?}", da);
        Error::NoDestination(da)
    })?;
    let mut node = node_ref.lock();
    node.inactivity = 0;

    if iface.rsn_on && !node.port_authorized && ether_type != ETHER_TYPE_EAPOL {
        return Err(Error::PortNotAuthorized(node.addr));
    }

    let qos = iface.has_caps(IfaceCaps::QOS)
        && node.has_flags(NodeFlags::QOS)
        && ether_type != ETHER_TYPE_EAPOL;
    let qos_ctrl = if qos {
        let tid = classify(&bytes[..]);
        let mut qos_ctrl = QosControl::default();
        qos_ctrl.set_tid(tid as u16);
        if iface.is_no_ack_tid(tid) {
            qos_ctrl.set_ack_policy(AckPolicy::NO_ACK);
        } else if node.has_tx_block_ack(tid) {
            qos_ctrl.set_ack_policy(AckPolicy::BLOCK_ACK);
        }
        Some((tid, qos_ctrl))
    } else {
        None
    };
    let seq = SequenceControl::from_seq_num(node.next_seq(qos_ctrl.map(|(tid, _)| tid)));

    let protected = iface.wep_on || (iface.rsn_on && node.has_flags(NodeFlags::TXPROT));
    let mut fc = FrameControl::from_data(DataSubtype::DATA);
    fc.set_protected(protected);
    let bssid = Bssid(node.bssid);
    let hdr = match iface.role {
        Role::Station => data_writer::data_hdr_client_to_ap(fc, bssid, sa, da, seq),
        Role::Ibss | Role::AdHocDemo => data_writer::data_hdr_ibss(fc, da, sa, bssid, seq),
        Role::AccessPoint => data_writer::data_hdr_ap_to_client(fc, da, bssid, sa, seq),
    };
    drop(node);

    let mut dot11_hdr = Vec::with_capacity(DataHdr::len(qos) + 8);
    data_writer::write_data_hdr(&mut dot11_hdr, hdr, qos_ctrl.map(|(_, q)| q), ether_type)?;
    iface.pool.trim_head(chain, size_of::<EthernetIIHdr>())?;
    iface.pool.prepend_header(chain, &dot11_hdr[..])?;

    let mut flags = TxFlags::empty();
    flags.set(TxFlags::QOS, qos);
    flags.set(TxFlags::PROTECTED, protected);
    flags.set(TxFlags::FAVOR_RELIABILITY, ether_type == ETHER_TYPE_EAPOL);
    Ok((node_ref, flags))
}
