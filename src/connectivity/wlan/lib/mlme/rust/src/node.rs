// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::device::TxFrame,
    bitflags::bitflags,
    parking_lot::Mutex,
    std::{
        collections::{HashMap, VecDeque},
        sync::Arc,
    },
    wlan_common::{
        ie::rsn::pmkid::Pmkid,
        mac::{MacAddr, MAX_SEQ_NUM},
    },
    wlan_rsn::{
        key::{KeyTable, NUM_TID},
        rsna::{Akms, GroupDataCipher, PairwiseCiphers, Protocols},
    },
};

bitflags! {
    pub struct NodeFlags: u16 {
        const QOS = 1 << 0;
        const HT = 1 << 1;
        const MFP = 1 << 2;
        /// Unicast data to this peer is protected.
        const TXPROT = 1 << 3;
        /// Robust management frames to this peer are protected.
        const TXMGMTPROT = 1 << 4;
    }
}

/// Security parameters negotiated with a peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsnState {
    pub protocols: Protocols,
    pub group_cipher: GroupDataCipher,
    pub pairwise_ciphers: PairwiseCiphers,
    pub akms: Akms,
    pub capabilities: u16,
    pub pmkid: Option<Pmkid>,
}

impl Default for RsnState {
    fn default() -> Self {
        Self {
            protocols: Protocols::RSN,
            group_cipher: GroupDataCipher::Ccmp,
            pairwise_ciphers: PairwiseCiphers::CCMP,
            akms: Akms::PSK,
            capabilities: 0,
            pmkid: None,
        }
    }
}

/// Block-ack agreement for one TID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockAckAgreement {
    pub window_size: u16,
    pub timeout: u16,
    pub window_start: u16,
    pub token: u8,
}

/// A peer station, or the BSS itself.
#[derive(Debug)]
pub struct Node {
    pub addr: MacAddr,
    pub bssid: MacAddr,
    pub essid: Vec<u8>,
    pub rates: Vec<u8>,
    pub channel: u8,
    pub beacon_interval: u16,
    pub flags: NodeFlags,
    pub asleep: bool,
    pub saved_queue: VecDeque<TxFrame>,
    pub aid: u16,
    qos_txseq: [u16; NUM_TID],
    txseq: u16,
    pub tx_ba: [Option<BlockAckAgreement>; NUM_TID],
    pub rx_ba: [Option<BlockAckAgreement>; NUM_TID],
    pub sa_query_trid: u16,
    pub rsn: RsnState,
    /// 802.1X controlled port.
    pub port_authorized: bool,
    pub inactivity: u32,
    pub keys: KeyTable,
}

impl Node {
    pub fn new(addr: MacAddr, bssid: MacAddr) -> Self {
        Self {
            addr,
            bssid,
            essid: vec![],
            rates: vec![],
            channel: 0,
            beacon_interval: 100,
            flags: NodeFlags::empty(),
            asleep: false,
            saved_queue: VecDeque::new(),
            aid: 0,
            qos_txseq: [0; NUM_TID],
            txseq: 0,
            tx_ba: [None; NUM_TID],
            rx_ba: [None; NUM_TID],
            sa_query_trid: 0,
            rsn: RsnState::default(),
            port_authorized: false,
            inactivity: 0,
            keys: KeyTable::new(),
        }
    }

    /// Returns the next sequence number of the per-TID counter, or of the general counter when
    /// `tid` is `None`.
    pub fn next_seq(&mut self, tid: Option<u8>) -> u16 {
        let counter = match tid {
            Some(tid) => &mut self.qos_txseq[tid as usize % NUM_TID],
            None => &mut self.txseq,
        };
        let seq = *counter;
        *counter = (seq + 1) & MAX_SEQ_NUM;
        seq
    }

    pub fn has_flags(&self, flags: NodeFlags) -> bool {
        self.flags.contains(flags)
    }

    pub fn has_tx_block_ack(&self, tid: u8) -> bool {
        self.tx_ba.get(tid as usize).map_or(false, |ba| ba.is_some())
    }
}

pub type NodeRef = Arc<Mutex<Node>>;

pub fn new_node_ref(node: Node) -> NodeRef {
    Arc::new(Mutex::new(node))
}

/// Resolves peers by link address.
pub trait NodeLookup {
    fn find(&self, addr: &MacAddr) -> Option<NodeRef>;
}

/// Peers known to an interface, keyed by address.
#[derive(Debug, Default)]
pub struct NodeTable {
    nodes: HashMap<MacAddr, NodeRef>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: Node) -> NodeRef {
        let addr = node.addr;
        let node = new_node_ref(node);
        self.nodes.insert(addr, node.clone());
        node
    }

    pub fn remove(&mut self, addr: &MacAddr) -> Option<NodeRef> {
        self.nodes.remove(addr)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl NodeLookup for NodeTable {
    fn find(&self, addr: &MacAddr) -> Option<NodeRef> {
        self.nodes.get(addr).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_wrap() {
        let mut node = Node::new([1; 6], [2; 6]);
        assert_eq!(node.next_seq(None), 0);
        assert_eq!(node.next_seq(None), 1);
        node.txseq = MAX_SEQ_NUM;
        assert_eq!(node.next_seq(None), MAX_SEQ_NUM);
        assert_eq!(node.next_seq(None), 0);
    }

    #[test]
    fn per_tid_counters_are_independent() {
        let mut node = Node::new([1; 6], [2; 6]);
        assert_eq!(node.next_seq(Some(5)), 0);
        assert_eq!(node.next_seq(Some(5)), 1);
        assert_eq!(node.next_seq(Some(3)), 0);
        assert_eq!(node.next_seq(None), 0);
        assert_eq!(node.next_seq(Some(5)), 2);
    }

    #[test]
    fn table_lookup() {
        let mut table = NodeTable::new();
        let node = table.insert(Node::new([3; 6], [2; 6]));
        assert_eq!(Arc::strong_count(&node), 2);

        let found = table.find(&[3; 6]).expect("node");
        assert!(Arc::ptr_eq(&node, &found));
        assert!(table.find(&[4; 6]).is_none());

        table.remove(&[3; 6]);
        drop(found);
        assert_eq!(Arc::strong_count(&node), 1);
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn block_ack_state() {
        let mut node = Node::new([1; 6], [2; 6]);
        assert!(!node.has_tx_block_ack(2));
        node.tx_ba[2] = Some(BlockAckAgreement { window_size: 64, ..Default::default() });
        assert!(node.has_tx_block_ack(2));
        assert!(!node.has_tx_block_ack(40));
    }
}
