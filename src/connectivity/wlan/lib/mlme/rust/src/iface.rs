// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{
        buffer::BufferPool,
        config::InterfaceConfig,
        crypto::CipherEngine,
        device::{Device, TxFrame},
        error::Error,
        node::{new_node_ref, Node, NodeRef, RsnState},
        timer::{EventId, Scheduler, Timer},
    },
    bitflags::bitflags,
    log::{debug, warn},
    serde::{Deserialize, Serialize},
    std::{collections::VecDeque, time::Duration},
    wlan_common::{
        ie::{
            ap_edca_params, AccessCategory, EdcaAcParams, HtCapabilities, HtOperation, PhyMode,
            TrafficIndicationMap, MAX_AID,
        },
        mac::{MacAddr, MgmtSubtype},
    },
    wlan_rsn::{
        key::KeyTable,
        pmksa::PmksaCache,
        rsna::{Akms, GroupDataCipher, PairwiseCiphers, Protocols},
    },
};

/// How long to wait for the response to a probe, authentication or association request.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Station,
    Ibss,
    AdHocDemo,
    AccessPoint,
}

bitflags! {
    pub struct IfaceCaps: u32 {
        const QOS = 1 << 0;
        const HT = 1 << 1;
        const MFP = 1 << 2;
        const AP_PWR_SAVE = 1 << 3;
        const SHORT_PREAMBLE = 1 << 4;
        const SHORT_SLOT = 1 << 5;
        /// Raw 802.11 control frames may be sent.
        const RAW_CTRL = 1 << 6;
        const USE_PROTECTION = 1 << 7;
        const HIDE_SSID = 1 << 8;
        const NON_ERP_PRESENT = 1 << 9;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedEvent {
    ResponseTimeout { peer: MacAddr, subtype: MgmtSubtype },
}

/// Per-interface state shared by the transmit path, management frame builders and key
/// management.
pub struct Interface {
    pub role: Role,
    pub addr: MacAddr,
    pub phy_mode: PhyMode,
    pub channel: u8,
    pub ssid: Vec<u8>,
    pub rates: Vec<u8>,
    pub caps: IfaceCaps,

    pub wep_on: bool,
    pub rsn_on: bool,
    pub protocols: Protocols,
    pub group_cipher: GroupDataCipher,
    pub pairwise_ciphers: PairwiseCiphers,
    pub akms: Akms,
    /// Group keys and the IGTK.
    pub keys: KeyTable,
    pub def_txkey: Option<u8>,
    pub def_igtk: Option<u8>,
    pub pmksa: PmksaCache,
    pub ciphers: CipherEngine,

    /// The BSS we are associated with, or the one we operate.
    pub bss: NodeRef,
    pub edca: [EdcaAcParams; 4],
    pub no_ack_tids: u16,
    pub listen_interval: u16,
    pub beacon_interval: u16,
    pub ht_cap: HtCapabilities,
    pub ht_op: HtOperation,

    pub tim: TrafficIndicationMap,
    pub mcast_pending: bool,
    pub dtim_count: u8,
    pub dtim_period: u8,
    /// Associated stations currently in power save. Changed only through `doze` and `wake`.
    pub(crate) pssta: usize,

    pub pool: BufferPool,
    pub mgmt_queue: VecDeque<TxFrame>,
    pub timer: Timer<TimedEvent>,
    pub device: Box<dyn Device>,
}

impl Interface {
    pub fn new(
        config: &InterfaceConfig,
        device: Box<dyn Device>,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        let phy_mode = PhyMode::from(config.phy_mode);
        let mut edca = ap_edca_params(phy_mode);
        for (params, acm) in edca.iter_mut().zip(config.acm.iter()) {
            params.acm = *acm;
        }

        let bssid = if config.role == Role::AccessPoint { config.addr } else { config.bssid };
        let mut bss = Node::new(bssid, bssid);
        bss.essid = config.ssid.as_bytes().to_vec();
        bss.rates = config.rates.clone();
        bss.channel = config.channel;
        bss.beacon_interval = config.beacon_interval;
        bss.rsn = RsnState {
            protocols: config.protocols(),
            group_cipher: config.group_cipher(),
            pairwise_ciphers: config.pairwise_ciphers(),
            akms: config.akms(),
            ..Default::default()
        };

        Self {
            role: config.role,
            addr: config.addr,
            phy_mode,
            channel: config.channel,
            ssid: config.ssid.as_bytes().to_vec(),
            rates: config.rates.clone(),
            caps: config.caps(),
            wep_on: config.wep,
            rsn_on: config.rsn,
            protocols: config.protocols(),
            group_cipher: config.group_cipher(),
            pairwise_ciphers: config.pairwise_ciphers(),
            akms: config.akms(),
            keys: KeyTable::new(),
            def_txkey: None,
            def_igtk: None,
            pmksa: PmksaCache::new(),
            ciphers: CipherEngine::new(),
            bss: new_node_ref(bss),
            edca,
            no_ack_tids: config.no_ack_tids,
            listen_interval: config.listen_interval,
            beacon_interval: config.beacon_interval,
            ht_cap: HtCapabilities::default(),
            ht_op: HtOperation { primary_chan: config.channel, ..Default::default() },
            tim: TrafficIndicationMap::new(MAX_AID),
            mcast_pending: false,
            dtim_count: 0,
            dtim_period: config.dtim_period,
            pssta: 0,
            pool: BufferPool::new(config.buf_count, config.buf_size),
            mgmt_queue: VecDeque::new(),
            timer: Timer::new(scheduler),
            device,
        }
    }

    pub fn is_ap(&self) -> bool {
        self.role == Role::AccessPoint
    }

    pub fn has_caps(&self, caps: IfaceCaps) -> bool {
        self.caps.contains(caps)
    }

    pub fn is_2ghz(&self) -> bool {
        self.channel <= 14
    }

    pub fn acm(&self, ac: AccessCategory) -> bool {
        self.edca[ac.aci() as usize].acm
    }

    pub fn is_no_ack_tid(&self, tid: u8) -> bool {
        tid < 16 && self.no_ack_tids & (1 << tid) != 0
    }

    /// Hands a frame to the device. The chain goes back to the pool and the node reference is
    /// dropped whether or not the device accepted it.
    pub fn transmit(&mut self, frame: TxFrame) -> Result<(), Error> {
        let result = self.device.transmit(&self.pool, &frame);
        if let Err(e) = &result {
            warn!("dropping frame of {} bytes: {}", self.pool.len(&frame.chain), e);
        }
        self.pool.release_all(frame.chain);
        result
    }

    /// Frees a frame that will never be sent.
    pub fn discard(&mut self, frame: TxFrame) {
        self.pool.release_all(frame.chain);
    }

    /// Transmits every queued management frame and returns how many the device accepted.
    pub fn flush_mgmt_queue(&mut self) -> usize {
        let mut sent = 0;
        while let Some(frame) = self.mgmt_queue.pop_front() {
            if self.transmit(frame).is_ok() {
                sent += 1;
            }
        }
        sent
    }

    pub fn set_tim(&mut self, aid: u16, buffered: bool) {
        self.tim.set_traffic_buffered(aid, buffered);
        self.device.set_tim(aid, buffered);
    }

    /// Records that `node` entered power save.
    pub fn doze(&mut self, node: &NodeRef) {
        let mut node = node.lock();
        if !node.asleep {
            node.asleep = true;
            self.pssta += 1;
            debug!("{:02x?} dozing, {} stations in power save", node.addr, self.pssta);
        }
    }

    /// Records that `node` left power save.
    pub fn wake(&mut self, node: &NodeRef) {
        let mut node = node.lock();
        if node.asleep {
            node.asleep = false;
            self.pssta = self.pssta.saturating_sub(1);
            debug!("{:02x?} awake, {} stations in power save", node.addr, self.pssta);
        }
    }

    pub fn dozing_stations(&self) -> usize {
        self.pssta
    }

    /// Reports which of our events expired, if it is still pending.
    pub fn handle_timeout(&mut self, event_id: EventId) -> Option<TimedEvent> {
        let event = self.timer.triggered(&event_id);
        if let Some(TimedEvent::ResponseTimeout { peer, subtype }) = &event {
            debug!("no response to subtype {} from {:02x?}", subtype.0, peer);
        }
        event
    }
}

#[cfg(test)]
pub mod test_utils {
    use {
        super::*,
        crate::{device::FakeDevice, timer::FakeScheduler},
    };

    pub fn fake_iface(config: &InterfaceConfig) -> (Interface, FakeDevice, FakeScheduler) {
        let device = FakeDevice::new();
        let scheduler = FakeScheduler::new();
        let iface = Interface::new(config, Box::new(device.clone()), Box::new(scheduler.clone()));
        (iface, device, scheduler)
    }

    pub fn station_config() -> InterfaceConfig {
        InterfaceConfig {
            addr: [0x02, 0, 0, 0, 0, 0x01],
            bssid: [0x02, 0, 0, 0, 0, 0xaa],
            ssid: "test".to_string(),
            rates: vec![0x82, 0x84, 0x8b, 0x96],
            ..Default::default()
        }
    }

    pub fn ap_config() -> InterfaceConfig {
        InterfaceConfig {
            role: Role::AccessPoint,
            addr: [0x02, 0, 0, 0, 0, 0xaa],
            ssid: "test".to_string(),
            rates: vec![0x82, 0x84, 0x8b, 0x96],
            ..Default::default()
        }
    }
}
