// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Management frames: body builders for each subtype, and the output path that adds the MAC
//! header and queues the frame.

mod action;
mod assoc;
mod auth;
mod beacon;
mod probe;

pub use beacon::build_beacon;

use {
    crate::{
        buffer::Chain,
        device::{TxFlags, TxFrame},
        error::Error,
        iface::{IfaceCaps, Interface, Role, TimedEvent, RESPONSE_TIMEOUT},
        node::{NodeFlags, NodeRef},
        pwrsave::pwrsave,
    },
    log::{debug, error},
    std::mem::size_of,
    wlan_common::{
        buffer_writer::BufferWriter,
        ie::{
            rates_writer::RatesWriter, EdcaParamSet, ErpInfo, HtCapabilities, HtOperation,
            PhyMode, TimeoutInterval,
        },
        mac::{
            is_multicast, ActionCategory, CapabilityInfo, FrameControl, MgmtHdr, MgmtSubtype,
            ReasonCode, SequenceControl, StatusCode,
        },
    },
    zerocopy::AsBytes,
};

pub const MGMT_HDR_LEN: usize = size_of::<MgmtHdr>();

// Element lengths, two-byte element header included.
const DS_PARAMS_LEN: usize = 3;
const IBSS_PARAMS_LEN: usize = 4;
const ERP_LEN: usize = 3;
const QOS_CAP_LEN: usize = 3;
const EDCA_LEN: usize = 2 + size_of::<EdcaParamSet>();
const HT_CAPS_LEN: usize = 2 + size_of::<HtCapabilities>();
const HT_OP_LEN: usize = 2 + size_of::<HtOperation>();
const TIMEOUT_INTERVAL_LEN: usize = 2 + size_of::<TimeoutInterval>();

/// A frame body written outside the pool, copied in by `BufferPool::finish_frame`.
type FrameBody = BufferWriter<Vec<u8>>;

/// Association comeback time, in TUs, offered to an MFP peer that is refused temporarily.
const ASSOC_COMEBACK_TU: u32 = 1000;

/// A management frame to send to a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MgmtRequest {
    ProbeReq,
    ProbeResp,
    Auth { seq: u16, status: StatusCode },
    Deauth(ReasonCode),
    AssocReq,
    ReassocReq,
    AssocResp { status: StatusCode },
    ReassocResp { status: StatusCode },
    Disassoc(ReasonCode),
    /// `arg` packs the action specific arguments; see `build_action`.
    Action { category: ActionCategory, action: u8, arg: u32 },
}

impl MgmtRequest {
    pub fn subtype(&self) -> MgmtSubtype {
        match self {
            MgmtRequest::ProbeReq => MgmtSubtype::PROBE_REQ,
            MgmtRequest::ProbeResp => MgmtSubtype::PROBE_RESP,
            MgmtRequest::Auth { .. } => MgmtSubtype::AUTH,
            MgmtRequest::Deauth(_) => MgmtSubtype::DEAUTH,
            MgmtRequest::AssocReq => MgmtSubtype::ASSOC_REQ,
            MgmtRequest::ReassocReq => MgmtSubtype::REASSOC_REQ,
            MgmtRequest::AssocResp { .. } => MgmtSubtype::ASSOC_RESP,
            MgmtRequest::ReassocResp { .. } => MgmtSubtype::REASSOC_RESP,
            MgmtRequest::Disassoc(_) => MgmtSubtype::DISASSOC,
            MgmtRequest::Action { .. } => MgmtSubtype::ACTION,
        }
    }

    /// Requests the peer is expected to answer within `RESPONSE_TIMEOUT`.
    fn awaits_response(&self, role: Role) -> bool {
        match self {
            MgmtRequest::ProbeReq | MgmtRequest::AssocReq | MgmtRequest::ReassocReq => true,
            MgmtRequest::Auth { .. } => role == Role::Station,
            _ => false,
        }
    }
}

/// Capability information this interface advertises.
pub fn capability_info(iface: &Interface) -> CapabilityInfo {
    let mut capinfo = CapabilityInfo::default();
    match iface.role {
        Role::Ibss => capinfo.set_ibss(true),
        Role::Station | Role::AccessPoint => capinfo.set_ess(true),
        Role::AdHocDemo => (),
    }
    capinfo.set_privacy(iface.is_ap() && (iface.wep_on || iface.rsn_on));
    capinfo.set_short_preamble(iface.has_caps(IfaceCaps::SHORT_PREAMBLE) && iface.is_2ghz());
    capinfo.set_short_slot_time(iface.has_caps(IfaceCaps::SHORT_SLOT));
    capinfo
}

fn erp_info(iface: &Interface) -> ErpInfo {
    let mut erp = ErpInfo::default();
    erp.set_non_erp_present(iface.has_caps(IfaceCaps::NON_ERP_PRESENT));
    erp.set_use_protection(iface.has_caps(IfaceCaps::USE_PROTECTION));
    erp.set_barker_preamble_mode(!iface.has_caps(IfaceCaps::SHORT_PREAMBLE));
    erp
}

fn has_erp(iface: &Interface) -> bool {
    iface.phy_mode == PhyMode::Dot11g
}

fn rates(rates: &[u8]) -> Result<RatesWriter<&[u8]>, Error> {
    Ok(RatesWriter::try_new(rates)?)
}

/// Builds `request` for `node` and hands it to `mgmt_output`. Probe, association and station
/// authentication requests arm the response timer once queued.
pub fn send_management(
    iface: &mut Interface,
    node: &NodeRef,
    request: MgmtRequest,
) -> Result<(), Error> {
    let node = node.clone();
    // Beacons and probe responses advertise the security of our own BSS.
    let bss_rsn = match request {
        MgmtRequest::ProbeResp => Some(iface.bss.lock().rsn.clone()),
        _ => None,
    };
    let body = {
        let peer = node.lock();
        match request {
            MgmtRequest::ProbeReq => probe::build_probe_req(iface, &peer),
            MgmtRequest::ProbeResp => {
                probe::build_probe_resp(iface, bss_rsn.as_ref().unwrap_or(&peer.rsn))
            }
            MgmtRequest::Auth { seq, status } => auth::build_auth(iface, seq, status),
            MgmtRequest::Deauth(reason) | MgmtRequest::Disassoc(reason) => {
                auth::build_reason(iface, reason)
            }
            MgmtRequest::AssocReq => assoc::build_assoc_req(iface, &peer, false),
            MgmtRequest::ReassocReq => assoc::build_assoc_req(iface, &peer, true),
            MgmtRequest::AssocResp { status } | MgmtRequest::ReassocResp { status } => {
                assoc::build_assoc_resp(iface, &peer, status)
            }
            MgmtRequest::Action { category, action, arg } => {
                action::build_action(iface, &peer, category, action, arg)
            }
        }
    };
    let body = match body {
        Ok(body) => iface.pool.finish_frame(body)?,
        Err(e) => {
            debug!("cannot build {:?}: {}", request, e);
            return Err(e);
        }
    };

    let peer = node.lock().addr;
    let subtype = request.subtype();
    mgmt_output(iface, node, body, subtype)?;
    if request.awaits_response(iface.role) {
        let event = TimedEvent::ResponseTimeout { peer, subtype };
        iface.timer.schedule_after(RESPONSE_TIMEOUT, event);
    }
    Ok(())
}

/// Adds the management header to `body` and queues the frame for `node`. The chain and the node
/// reference are released on failure.
pub fn mgmt_output(
    iface: &mut Interface,
    node: NodeRef,
    mut body: Chain,
    subtype: MgmtSubtype,
) -> Result<(), Error> {
    let (hdr, protected) = {
        let mut peer = node.lock();
        peer.inactivity = 0;
        let robust = [MgmtSubtype::DISASSOC, MgmtSubtype::DEAUTH, MgmtSubtype::ACTION]
            .contains(&subtype);
        let protected = iface.has_caps(IfaceCaps::MFP)
            && robust
            && (is_multicast(&peer.addr) || peer.has_flags(NodeFlags::TXMGMTPROT));
        let mut frame_ctrl = FrameControl::from_mgmt(subtype);
        frame_ctrl.set_protected(protected);
        let hdr = MgmtHdr {
            frame_ctrl,
            duration: 0,
            addr1: peer.addr,
            addr2: iface.addr,
            addr3: peer.bssid,
            seq_ctrl: SequenceControl::from_seq_num(peer.next_seq(None)),
        };
        (hdr, protected)
    };
    if let Err(e) = iface.pool.prepend_header(&mut body, hdr.as_bytes()) {
        error!("no room for management header: {}", e);
        iface.pool.release_all(body);
        return Err(e);
    }

    let mut flags = TxFlags::MGMT;
    flags.set(TxFlags::PROTECTED, protected);
    if let Some(frame) = pwrsave(iface, TxFrame::new(body, Some(node), flags)) {
        iface.mgmt_queue.push_back(frame);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            config::InterfaceConfig,
            iface::test_utils::*,
            node::{new_node_ref, Node},
        },
        std::sync::Arc,
        wlan_common::{
            assert_variant,
            ie::{Id, Reader},
        },
    };

    const STA: [u8; 6] = [0x02, 0, 0, 0, 0, 0x33];

    fn queued(iface: &Interface) -> Vec<Vec<u8>> {
        iface.mgmt_queue.iter().map(|frame| iface.pool.to_vec(&frame.chain)).collect()
    }

    #[test]
    fn probe_request() {
        let (mut iface, _, scheduler) = fake_iface(&station_config());
        let bss = iface.bss.clone();
        send_management(&mut iface, &bss, MgmtRequest::ProbeReq).expect("probe request");
        send_management(&mut iface, &bss, MgmtRequest::ProbeReq).expect("probe request");

        let frames = queued(&iface);
        assert_eq!(frames.len(), 2);
        #[rustfmt::skip]
        let expected: &[u8] = &[
            // Management header: probe request
            0x40, 0x00, 0, 0,
            0x02, 0, 0, 0, 0, 0xaa,
            0x02, 0, 0, 0, 0, 0x01,
            0x02, 0, 0, 0, 0, 0xaa,
            0x00, 0x00,
            // SSID
            0, 4, b't', b'e', b's', b't',
            // Supported rates
            1, 4, 0x82, 0x84, 0x8b, 0x96,
        ];
        assert_eq!(&frames[0][..], expected);
        // Only the sequence number differs.
        assert_eq!(&frames[1][..22], &expected[..22]);
        assert_eq!(&frames[1][22..24], &[0x10, 0x00][..]);
        assert_eq!(&frames[1][24..], &expected[24..]);

        assert_eq!(iface.timer.pending(), 2);
        assert_eq!(scheduler.state.lock().scheduled.len(), 2);
        assert!(iface.mgmt_queue.iter().all(|frame| frame.flags == TxFlags::MGMT));
    }

    #[test]
    fn probe_request_elements_parse() {
        let config = InterfaceConfig { ht: true, ..station_config() };
        let (mut iface, _, _) = fake_iface(&config);
        iface.rates = vec![0x82, 0x84, 0x8b, 0x96, 0x0c, 0x12, 0x18, 0x24, 0x30, 0x48];
        iface.bss.lock().flags = NodeFlags::HT;
        let bss = iface.bss.clone();
        send_management(&mut iface, &bss, MgmtRequest::ProbeReq).expect("probe request");

        let frame = queued(&iface).remove(0);
        let ids: Vec<Id> = Reader::new(&frame[MGMT_HDR_LEN..]).map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            vec![Id::SSID, Id::SUPPORTED_RATES, Id::EXT_SUPPORTED_RATES, Id::HT_CAPABILITIES]
        );
        let (_, rates) = Reader::new(&frame[MGMT_HDR_LEN..]).nth(1).expect("rates");
        assert_eq!(rates.len(), 8);
    }

    #[test]
    fn auth_frame_arms_timer_for_station_only() {
        let (mut iface, _, _) = fake_iface(&station_config());
        let bss = iface.bss.clone();
        let request = MgmtRequest::Auth { seq: 1, status: StatusCode::SUCCESS };
        send_management(&mut iface, &bss, request).expect("auth");
        assert_eq!(&queued(&iface)[0][24..], &[0, 0, 1, 0, 0, 0][..]);
        assert_eq!(iface.timer.pending(), 1);

        let (mut iface, _, _) = fake_iface(&ap_config());
        let node = new_node_ref(Node::new(STA, iface.addr));
        let request = MgmtRequest::Auth { seq: 2, status: StatusCode::SUCCESS };
        send_management(&mut iface, &node, request).expect("auth");
        assert_eq!(&queued(&iface)[0][24..], &[0, 0, 2, 0, 0, 0][..]);
        assert_eq!(iface.timer.pending(), 0);
    }

    #[test]
    fn deauth_protected_with_mfp() {
        let config = InterfaceConfig { mfp: true, ..station_config() };
        let (mut iface, _, _) = fake_iface(&config);
        let bss = iface.bss.clone();
        let reason = ReasonCode::LEAVING_NETWORK_DEAUTH;
        send_management(&mut iface, &bss, MgmtRequest::Deauth(reason)).expect("deauth");
        bss.lock().flags = NodeFlags::TXMGMTPROT;
        send_management(&mut iface, &bss, MgmtRequest::Deauth(reason)).expect("deauth");
        send_management(&mut iface, &bss, MgmtRequest::ProbeReq).expect("probe");

        let frames = queued(&iface);
        assert_eq!(&frames[0][..2], &[0xc0, 0x00][..]);
        assert_eq!(&frames[0][24..], &[3, 0][..]);
        assert_eq!(&frames[1][..2], &[0xc0, 0x40][..]);
        assert_eq!(iface.mgmt_queue[1].flags, TxFlags::MGMT | TxFlags::PROTECTED);
        // Probe requests are never robust.
        assert_eq!(&frames[2][..2], &[0x40, 0x00][..]);
    }

    #[test]
    fn failed_build_releases_node_and_buffers() {
        let (mut iface, _, _) = fake_iface(&station_config());
        let free = iface.pool.free_count();
        let bss = iface.bss.clone();
        iface.bss.lock().rates.clear();
        assert_variant!(
            send_management(&mut iface, &bss, MgmtRequest::AssocReq),
            Err(Error::WritingFrame(_))
        );
        assert_eq!(Arc::strong_count(&bss), 2);
        assert_eq!(iface.pool.free_count(), free);
        assert!(iface.mgmt_queue.is_empty());
        assert_eq!(iface.timer.pending(), 0);
    }

    #[test]
    fn out_of_buffers() {
        let config = InterfaceConfig { buf_count: 1, buf_size: 16, ..station_config() };
        let (mut iface, _, _) = fake_iface(&config);
        let bss = iface.bss.clone();
        assert_variant!(
            send_management(&mut iface, &bss, MgmtRequest::ProbeReq),
            Err(Error::NoResources(_))
        );
        assert_eq!(iface.pool.free_count(), 1);
        assert_eq!(Arc::strong_count(&bss), 2);
    }

    #[test]
    fn unsupported_action() {
        let (mut iface, _, _) = fake_iface(&station_config());
        let bss = iface.bss.clone();
        let request = MgmtRequest::Action { category: ActionCategory::DLS, action: 0, arg: 0 };
        assert_variant!(
            send_management(&mut iface, &bss, request),
            Err(Error::Unsupported(_))
        );
    }

    #[test]
    fn access_point_capabilities() {
        let config = InterfaceConfig {
            rsn: true,
            short_preamble: true,
            short_slot: true,
            ..ap_config()
        };
        let (iface, _, _) = fake_iface(&config);
        let capinfo = capability_info(&iface);
        assert!(capinfo.ess());
        assert!(!capinfo.ibss());
        assert!(capinfo.privacy());
        assert!(capinfo.short_preamble());
        assert!(capinfo.short_slot_time());

        let config = InterfaceConfig {
            role: Role::Ibss,
            channel: 36,
            short_preamble: true,
            ..ap_config()
        };
        let (iface, _, _) = fake_iface(&config);
        let capinfo = capability_info(&iface);
        assert!(capinfo.ibss());
        assert!(!capinfo.privacy());
        assert!(!capinfo.short_preamble());
    }

    #[test]
    fn erp_bits() {
        let (mut iface, _, _) = fake_iface(&ap_config());
        iface.caps |= IfaceCaps::USE_PROTECTION;
        let erp = erp_info(&iface);
        assert!(erp.use_protection());
        assert!(!erp.non_erp_present());
        assert!(erp.barker_preamble_mode());
    }

    #[test]
    fn access_point_buffers_management_for_dozing_station() {
        let config = InterfaceConfig { ap_power_save: true, ..ap_config() };
        let (mut iface, device, _) = fake_iface(&config);
        let mut sta = Node::new(STA, iface.addr);
        sta.asleep = true;
        sta.aid = 2;
        let node = new_node_ref(sta);
        let reason = ReasonCode::REASON_INACTIVITY;
        send_management(&mut iface, &node, MgmtRequest::Disassoc(reason)).expect("disassoc");
        assert!(iface.mgmt_queue.is_empty());
        assert_eq!(node.lock().saved_queue.len(), 1);
        assert_eq!(device.state.lock().tim, vec![(2, true)]);
    }
}
