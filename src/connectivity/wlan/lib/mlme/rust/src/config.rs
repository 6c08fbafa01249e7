// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{
        buffer::{DEFAULT_BUF_COUNT, DEFAULT_BUF_SIZE},
        iface::{IfaceCaps, Role},
    },
    anyhow::Context,
    serde::{Deserialize, Serialize},
    std::path::Path,
    wlan_common::{ie::PhyMode, mac::MacAddr},
    wlan_rsn::rsna::{Akms, GroupDataCipher, PairwiseCiphers, Protocols},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhyModeConfig {
    Dot11a,
    Dot11b,
    Dot11g,
    Turbo,
    Dot11n,
}

impl From<PhyModeConfig> for PhyMode {
    fn from(mode: PhyModeConfig) -> Self {
        match mode {
            PhyModeConfig::Dot11a => PhyMode::Dot11a,
            PhyModeConfig::Dot11b => PhyMode::Dot11b,
            PhyModeConfig::Dot11g => PhyMode::Dot11g,
            PhyModeConfig::Turbo => PhyMode::Turbo,
            PhyModeConfig::Dot11n => PhyMode::Dot11n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtocolConfig {
    Wpa,
    Rsn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupCipherConfig {
    Wep40,
    Tkip,
    Ccmp,
    Wep104,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairwiseCipherConfig {
    UseGroup,
    Tkip,
    Ccmp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AkmConfig {
    Ieee8021x,
    Psk,
    Sha256Ieee8021x,
    Sha256Psk,
}

/// Everything an interface needs at attach time. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    pub role: Role,
    pub addr: MacAddr,
    pub bssid: MacAddr,
    pub ssid: String,
    pub rates: Vec<u8>,
    pub phy_mode: PhyModeConfig,
    pub channel: u8,
    pub buf_count: usize,
    pub buf_size: usize,

    pub qos: bool,
    pub ht: bool,
    pub mfp: bool,
    pub ap_power_save: bool,
    pub short_preamble: bool,
    pub short_slot: bool,
    pub raw_ctrl: bool,
    pub hide_ssid: bool,

    pub wep: bool,
    pub rsn: bool,
    pub protocols: Vec<ProtocolConfig>,
    pub group_cipher: GroupCipherConfig,
    pub pairwise_ciphers: Vec<PairwiseCipherConfig>,
    pub akms: Vec<AkmConfig>,

    /// Bit n set: TID n is sent without acknowledgement.
    pub no_ack_tids: u16,
    /// Admission control required, indexed by ACI.
    pub acm: [bool; 4],
    pub listen_interval: u16,
    pub beacon_interval: u16,
    pub dtim_period: u8,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            role: Role::Station,
            addr: [0; 6],
            bssid: [0; 6],
            ssid: String::new(),
            rates: vec![0x82, 0x84, 0x8b, 0x96, 0x0c, 0x12, 0x18, 0x24, 0x30, 0x48, 0x60, 0x6c],
            phy_mode: PhyModeConfig::Dot11g,
            channel: 1,
            buf_count: DEFAULT_BUF_COUNT,
            buf_size: DEFAULT_BUF_SIZE,
            qos: false,
            ht: false,
            mfp: false,
            ap_power_save: false,
            short_preamble: false,
            short_slot: false,
            raw_ctrl: false,
            hide_ssid: false,
            wep: false,
            rsn: false,
            protocols: vec![ProtocolConfig::Rsn],
            group_cipher: GroupCipherConfig::Ccmp,
            pairwise_ciphers: vec![PairwiseCipherConfig::Ccmp],
            akms: vec![AkmConfig::Psk],
            no_ack_tids: 0,
            acm: [false; 4],
            listen_interval: 10,
            beacon_interval: 100,
            dtim_period: 1,
        }
    }
}

impl InterfaceConfig {
    pub fn from_json(json: &str) -> Result<Self, anyhow::Error> {
        serde_json::from_str(json).context("invalid interface config")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading interface config {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn caps(&self) -> IfaceCaps {
        let mut caps = IfaceCaps::empty();
        caps.set(IfaceCaps::QOS, self.qos);
        caps.set(IfaceCaps::HT, self.ht);
        caps.set(IfaceCaps::MFP, self.mfp);
        caps.set(IfaceCaps::AP_PWR_SAVE, self.ap_power_save);
        caps.set(IfaceCaps::SHORT_PREAMBLE, self.short_preamble);
        caps.set(IfaceCaps::SHORT_SLOT, self.short_slot);
        caps.set(IfaceCaps::RAW_CTRL, self.raw_ctrl);
        caps.set(IfaceCaps::HIDE_SSID, self.hide_ssid);
        caps
    }

    pub fn protocols(&self) -> Protocols {
        self.protocols.iter().fold(Protocols::empty(), |acc, p| {
            acc | match p {
                ProtocolConfig::Wpa => Protocols::WPA,
                ProtocolConfig::Rsn => Protocols::RSN,
            }
        })
    }

    pub fn group_cipher(&self) -> GroupDataCipher {
        match self.group_cipher {
            GroupCipherConfig::Wep40 => GroupDataCipher::Wep40,
            GroupCipherConfig::Tkip => GroupDataCipher::Tkip,
            GroupCipherConfig::Ccmp => GroupDataCipher::Ccmp,
            GroupCipherConfig::Wep104 => GroupDataCipher::Wep104,
        }
    }

    pub fn pairwise_ciphers(&self) -> PairwiseCiphers {
        self.pairwise_ciphers.iter().fold(PairwiseCiphers::empty(), |acc, c| {
            acc | match c {
                PairwiseCipherConfig::UseGroup => PairwiseCiphers::USE_GROUP,
                PairwiseCipherConfig::Tkip => PairwiseCiphers::TKIP,
                PairwiseCipherConfig::Ccmp => PairwiseCiphers::CCMP,
            }
        })
    }

    pub fn akms(&self) -> Akms {
        self.akms.iter().fold(Akms::empty(), |acc, akm| {
            acc | match akm {
                AkmConfig::Ieee8021x => Akms::IEEE8021X,
                AkmConfig::Psk => Akms::PSK,
                AkmConfig::Sha256Ieee8021x => Akms::SHA256_8021X,
                AkmConfig::Sha256Psk => Akms::SHA256_PSK,
            }
        })
    }
}
