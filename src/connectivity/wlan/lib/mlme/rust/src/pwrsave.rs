// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{
        device::TxFrame,
        iface::{IfaceCaps, Interface},
        node::NodeRef,
    },
    log::debug,
    wlan_common::mac::{is_multicast, FrameType, MinHdr},
    zerocopy::LayoutVerified,
};

/// Decides whether an access point sends `frame` now or holds it for a dozing peer. Returns the
/// frame when it should be transmitted. Held frames lose their node reference.
pub fn pwrsave(iface: &mut Interface, mut frame: TxFrame) -> Option<TxFrame> {
    if !iface.is_ap() || !iface.has_caps(IfaceCaps::AP_PWR_SAVE) {
        return Some(frame);
    }
    let (fc, addr1) = {
        let bytes = iface.pool.to_vec(&frame.chain);
        match LayoutVerified::<_, MinHdr>::new_unaligned_from_prefix(&bytes[..]) {
            Some((hdr, _)) => (hdr.frame_ctrl, hdr.addr1),
            None => return Some(frame),
        }
    };

    if is_multicast(&addr1) {
        if fc.htc_order() || iface.pssta == 0 {
            return Some(frame);
        }
        // Held until the next DTIM beacon.
        iface.mcast_pending = true;
        frame.node = None;
        iface.bss.lock().saved_queue.push_back(frame);
        return None;
    }

    let node_ref = match frame.node.take() {
        Some(node) => node,
        None => return Some(frame),
    };
    let aid = {
        let mut node = node_ref.lock();
        if !node.asleep || fc.frame_type() == FrameType::CTRL {
            drop(node);
            frame.node = Some(node_ref);
            return Some(frame);
        }
        let first = node.saved_queue.is_empty();
        debug!("buffering frame for dozing {:02x?}", node.addr);
        node.saved_queue.push_back(frame);
        if first {
            Some(node.aid)
        } else {
            None
        }
    };
    if let Some(aid) = aid {
        iface.set_tim(aid, true);
    }
    None
}

/// Transmits the frames held for `node` once it is awake again and clears its TIM bit. Returns
/// how many frames the device accepted.
pub fn release_saved(iface: &mut Interface, node: &NodeRef) -> usize {
    iface.wake(node);
    let (frames, aid) = {
        let mut node = node.lock();
        (node.saved_queue.drain(..).collect::<Vec<_>>(), node.aid)
    };
    if frames.is_empty() {
        return 0;
    }
    iface.set_tim(aid, false);
    let mut sent = 0;
    for mut frame in frames {
        frame.node = Some(node.clone());
        if iface.transmit(frame).is_ok() {
            sent += 1;
        }
    }
    sent
}

/// Sends the group addressed frames held for the DTIM beacon.
pub fn release_multicast(iface: &mut Interface) -> usize {
    let frames: Vec<_> = iface.bss.lock().saved_queue.drain(..).collect();
    iface.mcast_pending = false;
    let mut sent = 0;
    for frame in frames {
        if iface.transmit(frame).is_ok() {
            sent += 1;
        }
    }
    sent
}
