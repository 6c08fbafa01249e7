// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{
        buffer::{BufferPool, Chain},
        error::Error,
        node::NodeRef,
    },
    bitflags::bitflags,
    std::fmt,
};

#[cfg(test)]
pub use test_utils::*;

bitflags! {
    #[derive(Default)]
    pub struct TxFlags: u32 {
        const PROTECTED = 1 << 0;
        const FAVOR_RELIABILITY = 1 << 1;
        const QOS = 1 << 2;
        const MGMT = 1 << 3;
    }
}

/// A frame on its way to the device. The node reference stays alive until the device accepted
/// the frame.
pub struct TxFrame {
    pub chain: Chain,
    pub node: Option<NodeRef>,
    pub flags: TxFlags,
}

impl TxFrame {
    pub fn new(chain: Chain, node: Option<NodeRef>, flags: TxFlags) -> Self {
        Self { chain, node, flags }
    }
}

impl fmt::Debug for TxFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxFrame")
            .field("chain", &self.chain)
            .field(
                "node",
                &self.node.as_ref().and_then(|node| node.try_lock().map(|node| node.addr)),
            )
            .field("flags", &self.flags)
            .finish()
    }
}

/// The driver side of an interface.
pub trait Device {
    /// Hands a frame to the hardware. The frame's bytes are read out of `pool`; ownership of the
    /// chain stays with the caller.
    fn transmit(&mut self, pool: &BufferPool, frame: &TxFrame) -> Result<(), Error>;
    /// Marks buffered traffic for an association id in the beacon's TIM.
    fn set_tim(&mut self, aid: u16, buffered: bool);
}
