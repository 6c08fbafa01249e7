// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::crypto::SecurityEvent,
    thiserror::Error,
    wlan_common::{appendable::BufferTooSmall, error::FrameWriteError, mac::MacAddr},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("out of buffers; requested {0} bytes")]
    NoResources(usize),
    #[error("no destination for {0:02x?}")]
    NoDestination(MacAddr),
    #[error("invalid frame: {0}")]
    InvalidFrame(&'static str),
    #[error("port not authorized for {0:02x?}")]
    PortNotAuthorized(MacAddr),
    #[error("unsupported: {0}")]
    Unsupported(String),
    #[error("provided buffer too small")]
    BufferTooSmall,
    #[error("error writing frame: {0}")]
    WritingFrame(FrameWriteError),
    #[error("security event: {0:?}")]
    Security(SecurityEvent),
    #[error("key management error: {0}")]
    Rsn(wlan_rsn::Error),
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Errors that go away once buffers are released.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::NoResources(_) => true,
            _ => false,
        }
    }
}

impl From<FrameWriteError> for Error {
    fn from(e: FrameWriteError) -> Self {
        Error::WritingFrame(e)
    }
}

impl From<BufferTooSmall> for Error {
    fn from(_: BufferTooSmall) -> Self {
        Error::BufferTooSmall
    }
}

impl From<SecurityEvent> for Error {
    fn from(e: SecurityEvent) -> Self {
        Error::Security(e)
    }
}

impl From<wlan_rsn::Error> for Error {
    fn from(e: wlan_rsn::Error) -> Self {
        Error::Rsn(e)
    }
}
