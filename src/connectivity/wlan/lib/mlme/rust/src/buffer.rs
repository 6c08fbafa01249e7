// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Fixed-size wire buffers.
//!
//! All buffers of an interface live in one `BufferPool` arena and are addressed by index. A frame
//! occupies a `Chain` of one or more segments; free segments form a singly linked list through
//! the same `next` links chains use, so whole chains can be returned to the pool in constant
//! time.

use {
    crate::error::Error,
    log::debug,
    std::cmp::min,
    wlan_common::{appendable::Appendable, buffer_writer::BufferWriter},
};

pub const DEFAULT_BUF_COUNT: usize = 64;
pub const DEFAULT_BUF_SIZE: usize = 512;

struct Segment {
    data: Box<[u8]>,
    len: usize,
    next: Option<usize>,
}

/// An ordered run of pool segments holding one frame.
///
/// A chain always has at least one segment. Chains are neither `Clone` nor `Copy`: every segment
/// belongs to exactly one chain or to the free list, and handing a chain back to the pool consumes
/// it.
#[derive(Debug, PartialEq, Eq)]
pub struct Chain {
    head: usize,
    tail: usize,
    count: usize,
}

impl Chain {
    pub fn segment_count(&self) -> usize {
        self.count
    }
}

pub struct BufferPool {
    segments: Vec<Segment>,
    free_head: Option<usize>,
    free_tail: Option<usize>,
    free_count: usize,
    buf_size: usize,
}

impl BufferPool {
    pub fn new(count: usize, buf_size: usize) -> Self {
        let buf_size = std::cmp::max(buf_size, 1);
        let segments = (0..count)
            .map(|i| Segment {
                data: vec![0u8; buf_size].into_boxed_slice(),
                len: 0,
                next: if i + 1 < count { Some(i + 1) } else { None },
            })
            .collect();
        let (free_head, free_tail) =
            if count > 0 { (Some(0), Some(count - 1)) } else { (None, None) };
        Self { segments, free_head, free_tail, free_count: count, buf_size }
    }

    pub fn buf_size(&self) -> usize {
        self.buf_size
    }

    pub fn free_count(&self) -> usize {
        self.free_count
    }

    fn segments_needed(&self, len: usize) -> usize {
        std::cmp::max(1, (len + self.buf_size - 1) / self.buf_size)
    }

    /// Takes one empty segment off the free list.
    pub fn alloc(&mut self) -> Result<Chain, Error> {
        let idx = self.free_head.ok_or(Error::NoResources(self.buf_size))?;
        let segment = &mut self.segments[idx];
        self.free_head = segment.next.take();
        if self.free_head.is_none() {
            self.free_tail = None;
        }
        segment.len = 0;
        self.free_count -= 1;
        Ok(Chain { head: idx, tail: idx, count: 1 })
    }

    fn push_free(&mut self, idx: usize) {
        let segment = &mut self.segments[idx];
        segment.next = None;
        segment.len = 0;
        match self.free_tail {
            Some(tail) => self.segments[tail].next = Some(idx),
            None => self.free_head = Some(idx),
        }
        self.free_tail = Some(idx);
        self.free_count += 1;
    }

    /// Releases the head segment and returns the remainder of the chain, if any.
    pub fn release(&mut self, chain: Chain) -> Option<Chain> {
        let Chain { head, tail, count } = chain;
        let next = self.segments[head].next;
        self.push_free(head);
        next.map(|head| Chain { head, tail, count: count - 1 })
    }

    /// Splices the whole chain onto the free list.
    pub fn release_all(&mut self, chain: Chain) {
        let Chain { head, tail, count } = chain;
        match self.free_tail {
            Some(free_tail) => self.segments[free_tail].next = Some(head),
            None => self.free_head = Some(head),
        }
        self.free_tail = Some(tail);
        self.free_count += count;
    }

    /// Total number of bytes held by the chain.
    pub fn len(&self, chain: &Chain) -> usize {
        self.segments(chain).map(|s| s.len()).sum()
    }

    /// The filled part of each segment, head first.
    pub fn segments<'a>(&'a self, chain: &Chain) -> impl Iterator<Item = &'a [u8]> + 'a {
        let segments = &self.segments;
        std::iter::successors(Some(chain.head), move |&i| segments[i].next)
            .map(move |i| &segments[i].data[..segments[i].len])
    }

    pub fn to_vec(&self, chain: &Chain) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len(chain));
        for segment in self.segments(chain) {
            bytes.extend_from_slice(segment);
        }
        bytes
    }

    /// Appends `bytes` to the chain, growing it with new segments as needed. Nothing is written
    /// unless enough free segments exist for all of `bytes`.
    pub fn append(&mut self, chain: &mut Chain, mut bytes: &[u8]) -> Result<(), Error> {
        let room = self.buf_size - self.segments[chain.tail].len;
        let overflow = bytes.len().saturating_sub(room);
        if overflow > 0 && self.segments_needed(overflow) > self.free_count {
            return Err(Error::NoResources(bytes.len()));
        }
        loop {
            let tail = chain.tail;
            let segment = &mut self.segments[tail];
            let n = min(bytes.len(), self.buf_size - segment.len);
            segment.data[segment.len..segment.len + n].copy_from_slice(&bytes[..n]);
            segment.len += n;
            bytes = &bytes[n..];
            if bytes.is_empty() {
                return Ok(());
            }
            let next = self.alloc()?;
            self.segments[tail].next = Some(next.head);
            chain.tail = next.head;
            chain.count += 1;
        }
    }

    pub fn from_slice(&mut self, bytes: &[u8]) -> Result<Chain, Error> {
        if self.segments_needed(bytes.len()) > self.free_count {
            return Err(Error::NoResources(bytes.len()));
        }
        let mut chain = self.alloc()?;
        if let Err(e) = self.append(&mut chain, bytes) {
            self.release_all(chain);
            return Err(e);
        }
        Ok(chain)
    }

    fn copy_between(&mut self, src: usize, src_offset: usize, dst: usize, n: usize) {
        let (src_segment, dst_segment) = if src < dst {
            let (lo, hi) = self.segments.split_at_mut(dst);
            (&lo[src], &mut hi[0])
        } else {
            let (lo, hi) = self.segments.split_at_mut(src);
            (&hi[0], &mut lo[dst])
        };
        let start = dst_segment.len;
        dst_segment.data[start..start + n]
            .copy_from_slice(&src_segment.data[src_offset..src_offset + n]);
        dst_segment.len += n;
    }

    /// Moves all bytes of `src` to the end of `dst`.
    ///
    /// Bytes are copied into the free space of the destination tail and drained source segments
    /// return to the pool. Once the destination tail is full the rest of the source is linked in
    /// as is, after shifting a partially consumed source segment down to its start.
    pub fn concatenate(&mut self, dst: &mut Chain, src: Chain) {
        let mut cur = Some(src.head);
        let mut remaining = src.count;
        let mut offset = 0;
        while let Some(s) = cur {
            let tail = dst.tail;
            if self.segments[tail].len >= self.buf_size {
                if offset > 0 {
                    let segment = &mut self.segments[s];
                    segment.data.copy_within(offset..segment.len, 0);
                    segment.len -= offset;
                }
                self.segments[tail].next = Some(s);
                dst.tail = src.tail;
                dst.count += remaining;
                return;
            }
            let avail = self.buf_size - self.segments[tail].len;
            let n = min(self.segments[s].len - offset, avail);
            self.copy_between(s, offset, tail, n);
            offset += n;
            if offset >= self.segments[s].len {
                let next = self.segments[s].next;
                self.push_free(s);
                remaining -= 1;
                cur = next;
                offset = 0;
            }
        }
    }

    /// Drops the first `n` bytes of the chain. The chain keeps at least one, possibly empty,
    /// segment.
    pub fn trim_head(&mut self, chain: &mut Chain, mut n: usize) -> Result<(), Error> {
        if n > self.len(chain) {
            return Err(Error::InvalidFrame("trim past end of chain"));
        }
        while n > 0 {
            let head = chain.head;
            let len = self.segments[head].len;
            match self.segments[head].next {
                Some(next) if n >= len => {
                    self.push_free(head);
                    chain.head = next;
                    chain.count -= 1;
                    n -= len;
                }
                _ => {
                    let segment = &mut self.segments[head];
                    segment.data.copy_within(n..segment.len, 0);
                    segment.len -= n;
                    n = 0;
                }
            }
        }
        Ok(())
    }

    /// Inserts `bytes` in front of the chain, in the head segment when it has room.
    pub fn prepend_header(&mut self, chain: &mut Chain, bytes: &[u8]) -> Result<(), Error> {
        let head = chain.head;
        let head_len = self.segments[head].len;
        if head_len + bytes.len() <= self.buf_size {
            let segment = &mut self.segments[head];
            segment.data.copy_within(0..head_len, bytes.len());
            segment.data[..bytes.len()].copy_from_slice(bytes);
            segment.len += bytes.len();
            return Ok(());
        }
        let front = self.from_slice(bytes)?;
        self.segments[front.tail].next = Some(chain.head);
        chain.head = front.head;
        chain.count += front.count;
        Ok(())
    }

    /// A writer bounded to `len` bytes for a frame that will be copied into the pool. Fails
    /// when the pool cannot hold `len` bytes.
    pub fn frame_writer(&self, len: usize) -> Result<BufferWriter<Vec<u8>>, Error> {
        if self.segments_needed(len) > self.free_count {
            return Err(Error::NoResources(len));
        }
        Ok(BufferWriter::new(vec![0u8; len]))
    }

    /// Copies the bytes written through `writer` into a new chain.
    pub fn finish_frame(&mut self, writer: BufferWriter<Vec<u8>>) -> Result<Chain, Error> {
        if writer.remaining() != 0 {
            debug!("frame used {} bytes, {} unused", writer.bytes_written(), writer.remaining());
        }
        self.from_slice(&writer.into_written()[..])
    }

    /// Builds a frame of at most `len` bytes with `write` and copies it into a new chain. Fails
    /// before writing when the pool cannot hold `len` bytes.
    pub fn alloc_frame<F>(&mut self, len: usize, write: F) -> Result<Chain, Error>
    where
        F: FnOnce(&mut BufferWriter<Vec<u8>>) -> Result<(), Error>,
    {
        let mut writer = self.frame_writer(len)?;
        write(&mut writer)?;
        self.finish_frame(writer)
    }
}
