// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::{
        rsn::rsne::Rsne, wpa::WpaIe, DsssParamSet, EdcaParamSet, ErpInfo, Header, HtCapabilities,
        HtOperation, IbssParamSet, Id, TimHeader, TimeoutInterval, IE_MAX_LEN, SSID_MAX_LEN,
        SUPPORTED_RATES_MAX_LEN,
    },
    crate::{appendable::Appendable, error::FrameWriteError, organization::Oui},
    std::mem::size_of,
    zerocopy::AsBytes,
};

/// Appends the element header once the whole element is known to fit, so a failed write never
/// leaves a dangling header behind.
fn write_header<B: Appendable>(buf: &mut B, id: Id, body_len: usize) -> Result<(), FrameWriteError> {
    if body_len > IE_MAX_LEN {
        return Err(FrameWriteError::new_invalid_data(format!(
            "element {} body too long: {}",
            id.0, body_len
        )));
    }
    if !buf.can_append(size_of::<Header>() + body_len) {
        return Err(FrameWriteError::BufferTooSmall);
    }
    buf.append_value(&Header { id, body_len: body_len as u8 })?;
    Ok(())
}

fn write_value_ie<B: Appendable, T: AsBytes>(
    buf: &mut B,
    id: Id,
    value: &T,
) -> Result<(), FrameWriteError> {
    write_header(buf, id, size_of::<T>())?;
    buf.append_value(value)?;
    Ok(())
}

pub fn write_ssid<B: Appendable>(buf: &mut B, ssid: &[u8]) -> Result<(), FrameWriteError> {
    if ssid.len() > SSID_MAX_LEN {
        return Err(FrameWriteError::new_invalid_data(format!(
            "SSID is too long: {}",
            ssid.len()
        )));
    }
    write_header(buf, Id::SSID, ssid.len())?;
    buf.append_bytes(ssid)?;
    Ok(())
}

pub fn write_supported_rates<B: Appendable>(
    buf: &mut B,
    rates: &[u8],
) -> Result<(), FrameWriteError> {
    if rates.is_empty() {
        return Err(FrameWriteError::new_invalid_data("no supported rates"));
    }
    if rates.len() > SUPPORTED_RATES_MAX_LEN {
        return Err(FrameWriteError::new_invalid_data("too many supported rates"));
    }
    write_header(buf, Id::SUPPORTED_RATES, rates.len())?;
    buf.append_bytes(rates)?;
    Ok(())
}

pub fn write_ext_supported_rates<B: Appendable>(
    buf: &mut B,
    rates: &[u8],
) -> Result<(), FrameWriteError> {
    if rates.is_empty() {
        return Err(FrameWriteError::new_invalid_data("no extended supported rates"));
    }
    write_header(buf, Id::EXT_SUPPORTED_RATES, rates.len())?;
    buf.append_bytes(rates)?;
    Ok(())
}

pub fn write_dsss_param_set<B: Appendable>(
    buf: &mut B,
    dsss: &DsssParamSet,
) -> Result<(), FrameWriteError> {
    write_value_ie(buf, Id::DSSS_PARAM_SET, dsss)
}

pub fn write_ibss_param_set<B: Appendable>(
    buf: &mut B,
    ibss: &IbssParamSet,
) -> Result<(), FrameWriteError> {
    write_value_ie(buf, Id::IBSS_PARAM_SET, ibss)
}

pub fn write_tim<B: Appendable>(
    buf: &mut B,
    header: &TimHeader,
    bitmap: &[u8],
) -> Result<(), FrameWriteError> {
    if bitmap.is_empty() {
        return Err(FrameWriteError::new_invalid_data("partial virtual bitmap is empty"));
    }
    write_header(buf, Id::TIM, size_of::<TimHeader>() + bitmap.len())?;
    buf.append_value(header)?;
    buf.append_bytes(bitmap)?;
    Ok(())
}

pub fn write_edca_param_set<B: Appendable>(
    buf: &mut B,
    edca: &EdcaParamSet,
) -> Result<(), FrameWriteError> {
    write_value_ie(buf, Id::EDCA_PARAM_SET, edca)
}

pub fn write_erp_info<B: Appendable>(buf: &mut B, erp: ErpInfo) -> Result<(), FrameWriteError> {
    write_value_ie(buf, Id::ERP_INFO, &erp)
}

pub fn write_qos_capability<B: Appendable>(
    buf: &mut B,
    qos_info: u8,
) -> Result<(), FrameWriteError> {
    write_value_ie(buf, Id::QOS_CAPABILITY, &qos_info)
}

pub fn write_ht_capabilities<B: Appendable>(
    buf: &mut B,
    ht_cap: &HtCapabilities,
) -> Result<(), FrameWriteError> {
    write_value_ie(buf, Id::HT_CAPABILITIES, ht_cap)
}

pub fn write_ht_operation<B: Appendable>(
    buf: &mut B,
    ht_op: &HtOperation,
) -> Result<(), FrameWriteError> {
    write_value_ie(buf, Id::HT_OPERATION, ht_op)
}

pub fn write_timeout_interval<B: Appendable>(
    buf: &mut B,
    ti: &TimeoutInterval,
) -> Result<(), FrameWriteError> {
    write_value_ie(buf, Id::TIMEOUT_INTERVAL, ti)
}

pub fn write_rsne<B: Appendable>(buf: &mut B, rsne: &Rsne) -> Result<(), FrameWriteError> {
    write_header(buf, Id::RSNE, rsne.len())?;
    rsne.write_into(buf)?;
    Ok(())
}

/// The WPA1 element is vendor specific: Microsoft OUI and type 1 precede the body.
pub fn write_wpa1_ie<B: Appendable>(buf: &mut B, wpa: &WpaIe) -> Result<(), FrameWriteError> {
    write_header(buf, Id::VENDOR_SPECIFIC, Oui::MSFT.bytes().len() + 1 + wpa.len())?;
    buf.append_bytes(&Oui::MSFT.bytes()[..])?;
    buf.append_byte(super::wpa::VENDOR_SPECIFIC_TYPE)?;
    wpa.write_into(buf)?;
    Ok(())
}
