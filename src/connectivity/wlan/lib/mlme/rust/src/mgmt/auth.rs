// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::FrameBody,
    crate::{error::Error, iface::Interface},
    wlan_common::{
        appendable::Appendable,
        frame_len,
        mac::{AuthAlgorithmNumber, AuthHdr, DeauthHdr, ReasonCode, StatusCode},
    },
};

/// Open system authentication, transaction `seq`.
pub(super) fn build_auth(
    iface: &Interface,
    seq: u16,
    status: StatusCode,
) -> Result<FrameBody, Error> {
    let mut w = iface.pool.frame_writer(frame_len!(AuthHdr))?;
    w.append_value(&AuthHdr {
        auth_alg_num: AuthAlgorithmNumber::OPEN,
        auth_txn_seq_num: seq,
        status_code: status,
    })?;
    Ok(w)
}

/// Deauthentication and disassociation bodies carry only the reason code.
pub(super) fn build_reason(iface: &Interface, reason: ReasonCode) -> Result<FrameBody, Error> {
    let mut w = iface.pool.frame_writer(frame_len!(DeauthHdr))?;
    w.append_value(&DeauthHdr { reason_code: reason })?;
    Ok(w)
}

#[cfg(test)]
mod tests {
    use {super::*, crate::iface::test_utils::*};

    #[test]
    fn auth_body() {
        let (iface, _, _) = fake_iface(&station_config());
        let status = StatusCode::REFUSED_REASON_UNSPECIFIED;
        let body = build_auth(&iface, 2, status).expect("auth").into_written();
        assert_eq!(&body[..], &[0, 0, 2, 0, 1, 0][..]);
    }

    #[test]
    fn reason_body() {
        let (iface, _, _) = fake_iface(&station_config());
        let body = build_reason(&iface, ReasonCode::UNSPECIFIED_REASON).expect("deauth");
        assert_eq!(&body.into_written()[..], &[1, 0][..]);
    }
}
