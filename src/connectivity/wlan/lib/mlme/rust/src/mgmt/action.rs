// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::FrameBody,
    crate::{
        block_ack::{
            write_addba_req_body, write_addba_resp_body, write_delba_body, ADDBA_REQ_BODY_LEN,
            ADDBA_RESP_BODY_LEN, DELBA_BODY_LEN,
        },
        error::Error,
        iface::Interface,
        node::Node,
    },
    log::error,
    wlan_common::{
        appendable::Appendable,
        frame_len,
        mac::{
            ActionCategory, ActionHdr, BlockAckAction, ReasonCode, SaQueryAction, SaQueryHdr,
            StatusCode,
        },
    },
    wlan_rsn::key::NUM_TID,
};

/// Writes an action frame body. `arg` packs the per-action arguments:
///
/// * ADDBA request: TID in bits 0..16.
/// * ADDBA response: TID in bits 0..8, dialog token in bits 8..16, status in bits 16..32.
/// * DELBA: TID in bits 0..8, initiator flag in bits 8..16, reason in bits 16..32.
/// * SA Query: unused; the transaction id comes from the peer.
pub(super) fn build_action(
    iface: &Interface,
    peer: &Node,
    category: ActionCategory,
    action: u8,
    arg: u32,
) -> Result<FrameBody, Error> {
    match (category, action) {
        (ActionCategory::BLOCK_ACK, a) if a == BlockAckAction::ADDBA_REQUEST.0 => {
            let tid = (arg & 0xffff) as usize;
            let agreement = match peer.tx_ba.get(tid).copied().flatten() {
                Some(agreement) => agreement,
                None => {
                    error!("no transmit block ack agreement for TID {}", tid);
                    return Err(Error::Internal(format!("no block ack agreement for TID {}", tid)));
                }
            };
            let mut w = iface.pool.frame_writer(ADDBA_REQ_BODY_LEN)?;
            write_addba_req_body(&mut w, agreement.token, tid as u8, &agreement)?;
            Ok(w)
        }
        (ActionCategory::BLOCK_ACK, a) if a == BlockAckAction::ADDBA_RESPONSE.0 => {
            let tid = (arg & 0xff) as u8;
            let token = ((arg >> 8) & 0xff) as u8;
            let status = StatusCode((arg >> 16) as u16);
            let agreement = peer.rx_ba[tid as usize % NUM_TID].unwrap_or_default();
            let mut w = iface.pool.frame_writer(ADDBA_RESP_BODY_LEN)?;
            write_addba_resp_body(&mut w, token, tid, status, &agreement)?;
            Ok(w)
        }
        (ActionCategory::BLOCK_ACK, a) if a == BlockAckAction::DELBA.0 => {
            let tid = (arg & 0xff) as u8;
            let initiator = (arg >> 8) & 0xff != 0;
            let reason = ReasonCode((arg >> 16) as u16);
            let mut w = iface.pool.frame_writer(DELBA_BODY_LEN)?;
            write_delba_body(&mut w, tid, initiator, reason)?;
            Ok(w)
        }
        (ActionCategory::SA_QUERY, a)
            if a == SaQueryAction::REQUEST.0 || a == SaQueryAction::RESPONSE.0 =>
        {
            let mut w = iface.pool.frame_writer(frame_len!(ActionHdr, SaQueryHdr))?;
            w.append_value(&ActionHdr { action: ActionCategory::SA_QUERY })?;
            w.append_value(&SaQueryHdr {
                action: SaQueryAction(action),
                transaction_id: peer.sa_query_trid,
            })?;
            Ok(w)
        }
        _ => Err(Error::Unsupported(format!("action {} of category {}", action, category.0))),
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{iface::test_utils::*, node::BlockAckAgreement},
        wlan_common::assert_variant,
    };

    fn peer() -> Node {
        Node::new([0x02, 0, 0, 0, 0, 0x33], [0x02, 0, 0, 0, 0, 0xaa])
    }

    fn build(peer: &Node, category: ActionCategory, action: u8, arg: u32) -> Vec<u8> {
        let (iface, _, _) = fake_iface(&ap_config());
        build_action(&iface, peer, category, action, arg).expect("action frame").into_written()
    }

    #[test]
    fn addba_request() {
        let mut sta = peer();
        sta.tx_ba[3] = Some(BlockAckAgreement {
            window_size: 64,
            timeout: 0,
            window_start: 1,
            token: 1,
        });
        let body = build(&sta, ActionCategory::BLOCK_ACK, 0, 3);
        assert_eq!(&body[..], &[3, 0, 1, 0x0e, 0x10, 0, 0, 0x10, 0][..]);
    }

    #[test]
    fn addba_request_without_agreement() {
        let (iface, _, _) = fake_iface(&ap_config());
        assert_variant!(
            build_action(&iface, &peer(), ActionCategory::BLOCK_ACK, 0, 3).err(),
            Some(Error::Internal(_))
        );
        assert_variant!(
            build_action(&iface, &peer(), ActionCategory::BLOCK_ACK, 0, 40).err(),
            Some(Error::Internal(_))
        );
    }

    #[test]
    fn addba_response() {
        let mut sta = peer();
        sta.rx_ba[3] =
            Some(BlockAckAgreement { window_size: 32, timeout: 100, ..Default::default() });
        let body = build(&sta, ActionCategory::BLOCK_ACK, 1, 3 | 7 << 8);
        assert_eq!(&body[..], &[3, 1, 7, 0, 0, 0x0e, 0x08, 100, 0][..]);

        // Refused, no agreement recorded.
        let body = build(&peer(), ActionCategory::BLOCK_ACK, 1, 3 | 7 << 8 | 37 << 16);
        assert_eq!(&body[..], &[3, 1, 7, 37, 0, 0x0e, 0, 0, 0][..]);
    }

    #[test]
    fn delba() {
        let arg = 5 | 1 << 8 | (ReasonCode::UNSPECIFIED_REASON.0 as u32) << 16;
        let body = build(&peer(), ActionCategory::BLOCK_ACK, 2, arg);
        assert_eq!(&body[..], &[3, 2, 0, 0x58, 1, 0][..]);
    }

    #[test]
    fn sa_query() {
        let mut sta = peer();
        sta.sa_query_trid = 0x1234;
        let body = build(&sta, ActionCategory::SA_QUERY, 0, 0);
        assert_eq!(&body[..], &[8, 0, 0x34, 0x12][..]);
        let body = build(&sta, ActionCategory::SA_QUERY, 1, 0);
        assert_eq!(&body[..], &[8, 1, 0x34, 0x12][..]);
    }

    #[test]
    fn unsupported() {
        let (iface, _, _) = fake_iface(&ap_config());
        assert_variant!(
            build_action(&iface, &peer(), ActionCategory::BLOCK_ACK, 9, 0).err(),
            Some(Error::Unsupported(_))
        );
        assert_variant!(
            build_action(&iface, &peer(), ActionCategory::SA_QUERY, 2, 0).err(),
            Some(Error::Unsupported(_))
        );
    }
}
