// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    std::mem::size_of,
    zerocopy::{ByteSlice, FromBytes, LayoutVerified, Unaligned},
};

/// Reads typed prefixes off a byte slice, front to back.
pub struct BufferReader<B> {
    buffer: Option<B>,
    bytes_read: usize,
}

impl<B: ByteSlice> BufferReader<B> {
    pub fn new(bytes: B) -> Self {
        BufferReader { buffer: Some(bytes), bytes_read: 0 }
    }

    pub fn peek<T: Unaligned + FromBytes>(&self) -> Option<LayoutVerified<&[u8], T>> {
        let bytes = self.buffer.as_ref()?;
        LayoutVerified::new_unaligned_from_prefix(&bytes[..]).map(|(value, _)| value)
    }

    pub fn read<T: Unaligned + FromBytes>(&mut self) -> Option<LayoutVerified<B, T>> {
        if self.bytes_remaining() < size_of::<T>() {
            return None;
        }
        let (value, rest) = LayoutVerified::new_unaligned_from_prefix(self.buffer.take()?)?;
        self.buffer = Some(rest);
        self.bytes_read += size_of::<T>();
        Some(value)
    }

    pub fn read_byte(&mut self) -> Option<u8> {
        self.read_bytes(1).map(|bytes| bytes[0])
    }

    pub fn read_bytes(&mut self, len: usize) -> Option<B> {
        if self.bytes_remaining() < len {
            return None;
        }
        let (head, rest) = self.buffer.take()?.split_at(len);
        self.buffer = Some(rest);
        self.bytes_read += len;
        Some(head)
    }

    pub fn into_remaining(self) -> Option<B> {
        self.buffer
    }

    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }

    pub fn bytes_remaining(&self) -> usize {
        self.buffer.as_ref().map_or(0, |b| b.len())
    }
}
