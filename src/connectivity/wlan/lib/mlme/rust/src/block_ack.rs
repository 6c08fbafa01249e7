// Copyright 2020 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Block Ack action frame bodies.
//!
//! The writers below emit the action category followed by the ADDBA or DELBA fields. The
//! management header is written separately. See IEEE Std 802.11-2016, 9.6.5.

use {
    crate::{error::Error, node::BlockAckAgreement},
    wlan_common::{appendable::Appendable, frame_len, mac},
};

pub const ADDBA_REQ_BODY_LEN: usize = frame_len!(mac::ActionHdr, mac::AddbaReqHdr);
pub const ADDBA_RESP_BODY_LEN: usize = frame_len!(mac::ActionHdr, mac::AddbaRespHdr);
pub const DELBA_BODY_LEN: usize = frame_len!(mac::ActionHdr, mac::DelbaHdr);

fn parameters(tid: u8) -> mac::BlockAckParameters {
    let mut parameters = mac::BlockAckParameters::default();
    parameters.set_policy(mac::BlockAckPolicy::IMMEDIATE);
    parameters.set_tid(tid as u16);
    parameters
}

fn write_category<B: Appendable>(buffer: &mut B) -> Result<(), Error> {
    buffer.append_value(&mac::ActionHdr { action: mac::ActionCategory::BLOCK_ACK })?;
    Ok(())
}

/// Writes an ADDBA request for `tid` proposing the window and timeout of `agreement`. The frame
/// format is described by IEEE Std 802.11-2016, 9.6.5.2.
pub fn write_addba_req_body<B: Appendable>(
    buffer: &mut B,
    dialog_token: u8,
    tid: u8,
    agreement: &BlockAckAgreement,
) -> Result<(), Error> {
    let mut parameters = parameters(tid);
    parameters.set_buffer_size(agreement.window_size);
    let mut starting_sequence_control = mac::BlockAckStartingSequenceControl::default();
    // Fragment number is always zero. See IEEE Std 802.11-2016, 9.6.5.2.
    starting_sequence_control.set_starting_sequence_number(agreement.window_start);
    write_category(buffer)?;
    buffer.append_value(&mac::AddbaReqHdr {
        action: mac::BlockAckAction::ADDBA_REQUEST,
        dialog_token,
        parameters,
        timeout: agreement.timeout,
        starting_sequence_control,
    })?;
    Ok(())
}

/// Writes an ADDBA response for `tid`. Window size and timeout are only advertised when the
/// request is accepted. IEEE Std 802.11-2016, 9.6.5.3.
pub fn write_addba_resp_body<B: Appendable>(
    buffer: &mut B,
    dialog_token: u8,
    tid: u8,
    status: mac::StatusCode,
    agreement: &BlockAckAgreement,
) -> Result<(), Error> {
    let mut parameters = parameters(tid);
    let accepted = status == mac::StatusCode::SUCCESS;
    if accepted {
        parameters.set_buffer_size(agreement.window_size);
    }
    write_category(buffer)?;
    buffer.append_value(&mac::AddbaRespHdr {
        action: mac::BlockAckAction::ADDBA_RESPONSE,
        dialog_token,
        status,
        parameters,
        timeout: if accepted { agreement.timeout } else { 0 },
    })?;
    Ok(())
}

pub fn write_delba_body<B: Appendable>(
    buffer: &mut B,
    tid: u8,
    is_initiator: bool,
    reason_code: mac::ReasonCode,
) -> Result<(), Error> {
    let mut parameters = mac::DelbaParameters::default();
    parameters.set_initiator(is_initiator);
    parameters.set_tid(tid as u16);
    write_category(buffer)?;
    buffer.append_value(&mac::DelbaHdr {
        action: mac::BlockAckAction::DELBA,
        parameters,
        reason_code,
    })?;
    Ok(())
}
