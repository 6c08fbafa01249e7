// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::{
        capability_info, rates, FrameBody, ASSOC_COMEBACK_TU, EDCA_LEN, HT_CAPS_LEN, HT_OP_LEN,
        QOS_CAP_LEN, TIMEOUT_INTERVAL_LEN,
    },
    crate::{
        error::Error,
        iface::{IfaceCaps, Interface},
        node::{Node, NodeFlags},
        security::{security_element_len, write_security_element},
    },
    wlan_common::{
        appendable::Appendable,
        frame_len,
        ie::{
            write_edca_param_set, write_ht_capabilities, write_ht_operation,
            write_qos_capability, write_ssid, write_timeout_interval, EdcaParamSet,
            TimeoutInterval, TimeoutIntervalType,
        },
        mac::{AssocReqHdr, AssocRespHdr, CapabilityInfo, ReassocReqHdr, StatusCode},
    },
};

/// The two most significant bits of the AID field are always set. IEEE Std 802.11-2016, 9.4.1.8.
const AID_FIELD_BITS: u16 = 0xc000;

fn wants_ht(iface: &Interface, peer: &Node) -> bool {
    iface.has_caps(IfaceCaps::HT) && peer.has_flags(NodeFlags::HT)
}

fn station_capability_info(iface: &Interface) -> CapabilityInfo {
    let mut capinfo = CapabilityInfo::default();
    capinfo.set_ess(true);
    capinfo.set_privacy(iface.wep_on);
    capinfo.set_short_preamble(iface.has_caps(IfaceCaps::SHORT_PREAMBLE) && iface.is_2ghz());
    capinfo.set_short_slot_time(iface.has_caps(IfaceCaps::SHORT_SLOT));
    capinfo
}

/// (Re)association request to the BSS `peer`, using the security negotiated with it.
pub(super) fn build_assoc_req(
    iface: &Interface,
    peer: &Node,
    reassoc: bool,
) -> Result<FrameBody, Error> {
    let rates = rates(&peer.rates[..])?;
    let qos = peer.has_flags(NodeFlags::QOS);
    let ht = wants_ht(iface, peer);
    let len = (if reassoc { frame_len!(ReassocReqHdr) } else { frame_len!(AssocReqHdr) })
        + 2
        + peer.essid.len()
        + rates.len()
        + security_element_len(iface, &peer.rsn, false)
        + if qos { QOS_CAP_LEN } else { 0 }
        + security_element_len(iface, &peer.rsn, true)
        + if ht { HT_CAPS_LEN } else { 0 };

    let mut w = iface.pool.frame_writer(len)?;
    let capabilities = station_capability_info(iface);
    if reassoc {
        w.append_value(&ReassocReqHdr {
            capabilities,
            listen_interval: iface.listen_interval,
            current_ap: peer.bssid,
        })?;
    } else {
        w.append_value(&AssocReqHdr { capabilities, listen_interval: iface.listen_interval })?;
    }
    write_ssid(&mut w, &peer.essid[..])?;
    rates.write_supported_rates(&mut w)?;
    rates.write_ext_supported_rates(&mut w)?;
    write_security_element(&mut w, iface, &peer.rsn, false)?;
    if qos {
        write_qos_capability(&mut w, 0)?;
    }
    write_security_element(&mut w, iface, &peer.rsn, true)?;
    if ht {
        write_ht_capabilities(&mut w, &iface.ht_cap)?;
    }
    Ok(w)
}

/// (Re)association response. A successful response carries the AID; an MFP station that is
/// refused temporarily is told when to come back.
pub(super) fn build_assoc_resp(
    iface: &Interface,
    peer: &Node,
    status: StatusCode,
) -> Result<FrameBody, Error> {
    // The rate set negotiated with the station, ours if it sent none.
    let negotiated = if peer.rates.is_empty() { &iface.rates } else { &peer.rates };
    let rates = rates(&negotiated[..])?;
    let qos = peer.has_flags(NodeFlags::QOS);
    let comeback =
        peer.has_flags(NodeFlags::MFP) && status == StatusCode::REFUSED_TEMPORARILY;
    let ht = wants_ht(iface, peer);
    let len = frame_len!(AssocRespHdr)
        + rates.len()
        + if qos { EDCA_LEN } else { 0 }
        + if comeback { TIMEOUT_INTERVAL_LEN } else { 0 }
        + if ht { HT_CAPS_LEN + HT_OP_LEN } else { 0 };

    let mut w = iface.pool.frame_writer(len)?;
    let aid = if status == StatusCode::SUCCESS { peer.aid | AID_FIELD_BITS } else { 0 };
    w.append_value(&AssocRespHdr {
        capabilities: capability_info(iface),
        status_code: status,
        aid,
    })?;
    rates.write_supported_rates(&mut w)?;
    rates.write_ext_supported_rates(&mut w)?;
    if qos {
        write_edca_param_set(&mut w, &EdcaParamSet::from_params(&iface.edca))?;
    }
    if comeback {
        write_timeout_interval(
            &mut w,
            &TimeoutInterval {
                ti_type: TimeoutIntervalType::ASSOC_COMEBACK,
                value: ASSOC_COMEBACK_TU,
            },
        )?;
    }
    if ht {
        write_ht_capabilities(&mut w, &iface.ht_cap)?;
        write_ht_operation(&mut w, &iface.ht_op)?;
    }
    Ok(w)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{config::InterfaceConfig, iface::test_utils::*},
        wlan_common::ie::{find, Id, Reader},
    };

    const STA: [u8; 6] = [0x02, 0, 0, 0, 0, 0x33];

    fn ids(bytes: &[u8]) -> Vec<Id> {
        Reader::new(bytes).map(|(id, _)| id).collect()
    }

    #[test]
    fn assoc_request_open() {
        let (iface, _, _) = fake_iface(&station_config());
        let bss = iface.bss.lock();
        let w = build_assoc_req(&iface, &bss, false).expect("assoc request");
        assert_eq!(w.remaining(), 0);
        #[rustfmt::skip]
        let expected: &[u8] = &[
            // capabilities: ESS
            0x01, 0x00,
            // listen interval
            10, 0,
            // SSID
            0, 4, b't', b'e', b's', b't',
            // supported rates
            1, 4, 0x82, 0x84, 0x8b, 0x96,
        ];
        assert_eq!(&w.into_written()[..], expected);
    }

    #[test]
    fn reassoc_request_with_rsn_and_qos() {
        let config = InterfaceConfig { rsn: true, ..station_config() };
        let (iface, _, _) = fake_iface(&config);
        let mut bss = iface.bss.lock();
        bss.flags = NodeFlags::QOS;
        let bytes = build_assoc_req(&iface, &bss, true).expect("reassoc request").into_written();
        assert_eq!(&bytes[4..10], &[0x02, 0, 0, 0, 0, 0xaa][..]);
        assert_eq!(
            ids(&bytes[10..]),
            vec![Id::SSID, Id::SUPPORTED_RATES, Id::RSNE, Id::QOS_CAPABILITY]
        );
        assert_eq!(find(&bytes[10..], Id::QOS_CAPABILITY), Some(&[0u8][..]));
    }

    #[test]
    fn assoc_request_wep_privacy() {
        let config = InterfaceConfig { wep: true, short_slot: true, ..station_config() };
        let (iface, _, _) = fake_iface(&config);
        let bss = iface.bss.lock();
        let bytes = build_assoc_req(&iface, &bss, false).expect("assoc request").into_written();
        assert_eq!(&bytes[..2], &[0x11, 0x04][..]);
    }

    #[test]
    fn assoc_response_success() {
        let config = InterfaceConfig { qos: true, ht: true, ..ap_config() };
        let (iface, _, _) = fake_iface(&config);
        let mut sta = Node::new(STA, iface.addr);
        sta.aid = 5;
        sta.flags = NodeFlags::QOS | NodeFlags::HT;
        sta.rates = vec![0x82, 0x84];
        let w = build_assoc_resp(&iface, &sta, StatusCode::SUCCESS).expect("assoc response");
        assert_eq!(w.remaining(), 0);
        let bytes = w.into_written();
        assert_eq!(&bytes[..6], &[0x01, 0x00, 0, 0, 0x05, 0xc0][..]);
        assert_eq!(find(&bytes[6..], Id::SUPPORTED_RATES), Some(&[0x82, 0x84][..]));
        assert_eq!(
            ids(&bytes[6..]),
            vec![
                Id::SUPPORTED_RATES,
                Id::EDCA_PARAM_SET,
                Id::HT_CAPABILITIES,
                Id::HT_OPERATION,
            ]
        );
    }

    #[test]
    fn assoc_response_comeback() {
        let (iface, _, _) = fake_iface(&ap_config());
        let mut sta = Node::new(STA, iface.addr);
        sta.aid = 5;
        sta.flags = NodeFlags::MFP;
        let status = StatusCode::REFUSED_TEMPORARILY;
        let bytes = build_assoc_resp(&iface, &sta, status).expect("assoc response").into_written();
        assert_eq!(&bytes[2..6], &[30, 0, 0, 0][..]);
        assert_eq!(ids(&bytes[6..]), vec![Id::SUPPORTED_RATES, Id::TIMEOUT_INTERVAL]);
        assert_eq!(
            find(&bytes[6..], Id::TIMEOUT_INTERVAL),
            Some(&[3u8, 0xe8, 0x03, 0, 0][..])
        );
    }

    #[test]
    fn refused_without_mfp_has_no_comeback() {
        let (iface, _, _) = fake_iface(&ap_config());
        let sta = Node::new(STA, iface.addr);
        let status = StatusCode::REFUSED_TEMPORARILY;
        let bytes = build_assoc_resp(&iface, &sta, status).expect("assoc response").into_written();
        assert_eq!(ids(&bytes[6..]), vec![Id::SUPPORTED_RATES]);
        assert_eq!(find(&bytes[6..], Id::SUPPORTED_RATES), Some(&iface.rates[..]));
    }
}
