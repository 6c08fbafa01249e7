// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    thiserror::Error,
    zerocopy::{AsBytes, FromBytes, LayoutVerified, Unaligned},
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("buffer is too small for the written data")]
pub struct BufferTooSmall;

/// A byte sink that frame and element writers append to.
///
/// Implementations must never grow past their capacity: an append that does not fit fails with
/// `BufferTooSmall` and leaves the sink unchanged.
pub trait Appendable {
    fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferTooSmall>;

    fn append_bytes_zeroed(&mut self, len: usize) -> Result<&mut [u8], BufferTooSmall>;

    fn can_append(&self, bytes: usize) -> bool;

    fn bytes_written(&self) -> usize;

    fn append_value<T>(&mut self, value: &T) -> Result<(), BufferTooSmall>
    where
        T: AsBytes + ?Sized,
    {
        self.append_bytes(value.as_bytes())
    }

    fn append_byte(&mut self, byte: u8) -> Result<(), BufferTooSmall> {
        self.append_bytes(&[byte])
    }

    fn append_u16_le(&mut self, value: u16) -> Result<(), BufferTooSmall> {
        self.append_bytes(&value.to_le_bytes())
    }

    fn append_u32_le(&mut self, value: u32) -> Result<(), BufferTooSmall> {
        self.append_bytes(&value.to_le_bytes())
    }

    fn append_value_zeroed<T>(&mut self) -> Result<LayoutVerified<&mut [u8], T>, BufferTooSmall>
    where
        T: AsBytes + FromBytes + Unaligned,
    {
        let bytes = self.append_bytes_zeroed(std::mem::size_of::<T>())?;
        LayoutVerified::new_unaligned(bytes).ok_or(BufferTooSmall)
    }
}

impl Appendable for Vec<u8> {
    fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferTooSmall> {
        self.extend_from_slice(bytes);
        Ok(())
    }

    fn append_bytes_zeroed(&mut self, len: usize) -> Result<&mut [u8], BufferTooSmall> {
        let old_len = self.len();
        self.resize(old_len + len, 0);
        Ok(&mut self[old_len..])
    }

    fn can_append(&self, _bytes: usize) -> bool {
        true
    }

    fn bytes_written(&self) -> usize {
        self.len()
    }
}
