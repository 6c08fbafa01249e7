// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::{
        capability_info, erp_info, has_erp, rates, DS_PARAMS_LEN, EDCA_LEN, ERP_LEN, HT_CAPS_LEN,
        HT_OP_LEN, IBSS_PARAMS_LEN, MGMT_HDR_LEN,
    },
    crate::{
        buffer::Chain,
        error::Error,
        iface::{IfaceCaps, Interface, Role},
        security::{security_element_len, write_security_element},
    },
    std::mem::size_of,
    wlan_common::{
        appendable::Appendable,
        ie::{
            write_dsss_param_set, write_edca_param_set, write_erp_info, write_ht_capabilities,
            write_ht_operation, write_ibss_param_set, write_ssid, DsssParamSet, EdcaParamSet,
            IbssParamSet,
        },
        mac::{BeaconHdr, FrameControl, MgmtHdr, MgmtSubtype, SequenceControl, BCAST_ADDR},
    },
};

/// Builds a complete beacon for the BSS this interface operates, MAC header included. The SSID
/// is left empty when it is hidden. Access points carry the TIM; IBSS members the ATIM window.
pub fn build_beacon(iface: &mut Interface) -> Result<Chain, Error> {
    let (bssid, rsn) = {
        let bss = iface.bss.lock();
        (bss.bssid, bss.rsn.clone())
    };
    let ssid: &[u8] = if iface.has_caps(IfaceCaps::HIDE_SSID) { &[] } else { &iface.ssid[..] };
    let rates = rates(&iface.rates[..])?;
    let ibss = iface.role == Role::Ibss;
    let tim = iface.is_ap();
    let erp = has_erp(iface);
    let qos = iface.has_caps(IfaceCaps::QOS);
    let ht = iface.has_caps(IfaceCaps::HT);
    let len = MGMT_HDR_LEN
        + size_of::<BeaconHdr>()
        + 2
        + ssid.len()
        + rates.len()
        + DS_PARAMS_LEN
        + if ibss { IBSS_PARAMS_LEN } else { 0 }
        + if tim { iface.tim.element_len() } else { 0 }
        + if erp { ERP_LEN } else { 0 }
        + security_element_len(iface, &rsn, false)
        + if qos { EDCA_LEN } else { 0 }
        + security_element_len(iface, &rsn, true)
        + if ht { HT_CAPS_LEN + HT_OP_LEN } else { 0 };

    let mut w = iface.pool.frame_writer(len)?;
    w.append_value(&MgmtHdr {
        frame_ctrl: FrameControl::from_mgmt(MgmtSubtype::BEACON),
        duration: 0,
        addr1: BCAST_ADDR,
        addr2: iface.addr,
        addr3: bssid,
        seq_ctrl: SequenceControl::from_seq_num(0),
    })?;
    // The timestamp is filled in by the hardware.
    w.append_value(&BeaconHdr {
        timestamp: 0,
        beacon_interval: iface.beacon_interval,
        capabilities: capability_info(iface),
    })?;
    write_ssid(&mut w, ssid)?;
    rates.write_supported_rates(&mut w)?;
    write_dsss_param_set(&mut w, &DsssParamSet { current_chan: iface.channel })?;
    if ibss {
        write_ibss_param_set(&mut w, &IbssParamSet { atim_window: 0 })?;
    }
    if tim {
        let (count, period) = (iface.dtim_count, iface.dtim_period);
        iface.tim.write_element(&mut w, count, period, iface.mcast_pending)?;
    }
    if erp {
        write_erp_info(&mut w, erp_info(iface))?;
    }
    rates.write_ext_supported_rates(&mut w)?;
    write_security_element(&mut w, iface, &rsn, false)?;
    if qos {
        write_edca_param_set(&mut w, &EdcaParamSet::from_params(&iface.edca))?;
    }
    write_security_element(&mut w, iface, &rsn, true)?;
    if ht {
        write_ht_capabilities(&mut w, &iface.ht_cap)?;
        write_ht_operation(&mut w, &iface.ht_op)?;
    }
    iface.pool.finish_frame(w)
}
