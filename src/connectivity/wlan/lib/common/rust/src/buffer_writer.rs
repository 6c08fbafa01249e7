// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::appendable::{Appendable, BufferTooSmall};

/// Writes into a fixed-size byte slice, front to back.
pub struct BufferWriter<B> {
    buf: B,
    written: usize,
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> BufferWriter<B> {
    pub fn new(buf: B) -> Self {
        Self { buf, written: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.as_ref().len() - self.written
    }

    pub fn into_written(self) -> B
    where
        B: Truncate,
    {
        let written = self.written;
        self.buf.truncate_to(written)
    }
}

/// Shrinks a buffer to its first `len` bytes.
pub trait Truncate {
    fn truncate_to(self, len: usize) -> Self;
}

impl<'a> Truncate for &'a mut [u8] {
    fn truncate_to(self, len: usize) -> Self {
        &mut self[..len]
    }
}

impl Truncate for Vec<u8> {
    fn truncate_to(mut self, len: usize) -> Self {
        self.truncate(len);
        self
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Appendable for BufferWriter<B> {
    fn append_bytes(&mut self, bytes: &[u8]) -> Result<(), BufferTooSmall> {
        let start = self.written;
        self.append_bytes_zeroed(bytes.len())?;
        self.buf.as_mut()[start..start + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    fn append_bytes_zeroed(&mut self, len: usize) -> Result<&mut [u8], BufferTooSmall> {
        if !self.can_append(len) {
            return Err(BufferTooSmall);
        }
        let start = self.written;
        self.written += len;
        let bytes = &mut self.buf.as_mut()[start..start + len];
        for b in bytes.iter_mut() {
            *b = 0;
        }
        Ok(bytes)
    }

    fn can_append(&self, bytes: usize) -> bool {
        self.remaining() >= bytes
    }

    fn bytes_written(&self) -> usize {
        self.written
    }
}
