// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {crate::appendable::BufferTooSmall, thiserror::Error};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameWriteError {
    #[error("buffer is too small")]
    BufferTooSmall,
    #[error("attempted to write an invalid frame: {0}")]
    InvalidData(String),
}

impl FrameWriteError {
    pub fn new_invalid_data<S: Into<String>>(debug_message: S) -> Self {
        FrameWriteError::InvalidData(debug_message.into())
    }
}

impl From<BufferTooSmall> for FrameWriteError {
    fn from(_: BufferTooSmall) -> Self {
        FrameWriteError::BufferTooSmall
    }
}
