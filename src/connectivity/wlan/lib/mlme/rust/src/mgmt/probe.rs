// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::{
        capability_info, erp_info, has_erp, rates, FrameBody, DS_PARAMS_LEN, EDCA_LEN, ERP_LEN,
        HT_CAPS_LEN, HT_OP_LEN, IBSS_PARAMS_LEN,
    },
    crate::{
        error::Error,
        iface::{IfaceCaps, Interface, Role},
        node::{Node, NodeFlags, RsnState},
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
        mac::ProbeRespHdr,
    },
};

fn wants_ht(iface: &Interface, peer: &Node) -> bool {
    iface.has_caps(IfaceCaps::HT) && peer.has_flags(NodeFlags::HT)
}

/// Probe request for our SSID (empty for a wildcard scan) with our rates.
pub(super) fn build_probe_req(iface: &Interface, peer: &Node) -> Result<FrameBody, Error> {
    let rates = rates(&iface.rates[..])?;
    let ht = wants_ht(iface, peer);
    let len = 2 + iface.ssid.len() + rates.len() + if ht { HT_CAPS_LEN } else { 0 };

    let mut w = iface.pool.frame_writer(len)?;
    write_ssid(&mut w, &iface.ssid[..])?;
    rates.write_supported_rates(&mut w)?;
    rates.write_ext_supported_rates(&mut w)?;
    if ht {
        write_ht_capabilities(&mut w, &iface.ht_cap)?;
    }
    Ok(w)
}

/// Probe response describing the BSS we operate. `rsn` is what the BSS advertises.
pub(super) fn build_probe_resp(iface: &Interface, rsn: &RsnState) -> Result<FrameBody, Error> {
    let rates = rates(&iface.rates[..])?;
    let ibss = iface.role == Role::Ibss;
    let erp = has_erp(iface);
    let qos = iface.has_caps(IfaceCaps::QOS);
    let ht = iface.has_caps(IfaceCaps::HT);
    let len = size_of::<ProbeRespHdr>()
        + 2
        + iface.ssid.len()
        + rates.len()
        + DS_PARAMS_LEN
        + if ibss { IBSS_PARAMS_LEN } else { 0 }
        + if erp { ERP_LEN } else { 0 }
        + security_element_len(iface, rsn, false)
        + if qos { EDCA_LEN } else { 0 }
        + security_element_len(iface, rsn, true)
        + if ht { HT_CAPS_LEN + HT_OP_LEN } else { 0 };

    let mut w = iface.pool.frame_writer(len)?;
    w.append_value(&ProbeRespHdr {
        timestamp: 0,
        beacon_interval: iface.beacon_interval,
        capabilities: capability_info(iface),
    })?;
    write_ssid(&mut w, &iface.ssid[..])?;
    rates.write_supported_rates(&mut w)?;
    write_dsss_param_set(&mut w, &DsssParamSet { current_chan: iface.channel })?;
    if ibss {
        write_ibss_param_set(&mut w, &IbssParamSet { atim_window: 0 })?;
    }
    if erp {
        write_erp_info(&mut w, erp_info(iface))?;
    }
    rates.write_ext_supported_rates(&mut w)?;
    write_security_element(&mut w, iface, rsn, false)?;
    if qos {
        write_edca_param_set(&mut w, &EdcaParamSet::from_params(&iface.edca))?;
    }
    write_security_element(&mut w, iface, rsn, true)?;
    if ht {
        write_ht_capabilities(&mut w, &iface.ht_cap)?;
        write_ht_operation(&mut w, &iface.ht_op)?;
    }
    Ok(w)
}
