// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    bitfield::bitfield,
    zerocopy::{AsBytes, FromBytes, Unaligned},
};

/// EDCA access categories, discriminants are the ACI values of IEEE Std 802.11-2016, Table 9-136.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessCategory {
    BestEffort = 0,
    Background = 1,
    Video = 2,
    Voice = 3,
}

impl AccessCategory {
    pub const ALL: [AccessCategory; 4] = [
        AccessCategory::BestEffort,
        AccessCategory::Background,
        AccessCategory::Video,
        AccessCategory::Voice,
    ];

    pub fn aci(self) -> u8 {
        self as u8
    }
}

/// PHY the BSS currently operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhyMode {
    Dot11a,
    Dot11b,
    Dot11g,
    Turbo,
    Dot11n,
}

/// Contention parameters for one access category. CW values are exponents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdcaAcParams {
    pub ecw_min: u8,
    pub ecw_max: u8,
    pub aifsn: u8,
    pub txop_limit: u16,
    pub acm: bool,
}

const fn ac(ecw_min: u8, ecw_max: u8, aifsn: u8, txop_limit: u16) -> EdcaAcParams {
    EdcaAcParams { ecw_min, ecw_max, aifsn, txop_limit, acm: false }
}

// Values advertised by an access point, indexed by ACI.
const AP_EDCA_11B: [EdcaAcParams; 4] =
    [ac(5, 7, 3, 0), ac(5, 10, 7, 0), ac(4, 5, 1, 188), ac(3, 4, 1, 102)];
const AP_EDCA_11A: [EdcaAcParams; 4] =
    [ac(4, 6, 3, 0), ac(4, 10, 7, 0), ac(3, 4, 1, 94), ac(2, 3, 1, 47)];
const AP_EDCA_TURBO: [EdcaAcParams; 4] =
    [ac(3, 5, 2, 0), ac(3, 10, 7, 0), ac(2, 3, 1, 94), ac(2, 2, 1, 47)];

/// Parameters an access point advertises for the given PHY, indexed by ACI.
pub fn ap_edca_params(mode: PhyMode) -> [EdcaAcParams; 4] {
    match mode {
        PhyMode::Dot11b => AP_EDCA_11B,
        PhyMode::Dot11a | PhyMode::Dot11g | PhyMode::Dot11n => AP_EDCA_11A,
        PhyMode::Turbo => AP_EDCA_TURBO,
    }
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.4.2.29, Figure 9-268
    #[repr(C)]
    #[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Default)]
    pub struct AciAifsn(u8);
    impl Debug;
    pub aifsn, set_aifsn: 3, 0;
    pub acm, set_acm: 4;
    pub aci, set_aci: 6, 5;
}

bitfield! {
    /// IEEE Std 802.11-2016, 9.4.2.29, Figure 9-269
    #[repr(C)]
    #[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Default)]
    pub struct EcwMinMax(u8);
    impl Debug;
    pub ecw_min, set_ecw_min: 3, 0;
    pub ecw_max, set_ecw_max: 7, 4;
}

// IEEE Std 802.11-2016, 9.4.2.29
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct AcParamRecord {
    pub aci_aifsn: AciAifsn,
    pub ecw_min_max: EcwMinMax,
    pub txop_limit: u16,
}

// IEEE Std 802.11-2016, 9.4.2.29
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, Unaligned, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct EdcaParamSet {
    pub qos_info: u8,
    pub reserved: u8,
    pub ac_params: [AcParamRecord; 4],
}

impl EdcaParamSet {
    pub fn from_params(params: &[EdcaAcParams; 4]) -> Self {
        let mut set = EdcaParamSet::default();
        for (aci, (record, p)) in set.ac_params.iter_mut().zip(params.iter()).enumerate() {
            let mut aci_aifsn = AciAifsn(0);
            aci_aifsn.set_aci(aci as u8);
            aci_aifsn.set_acm(p.acm);
            aci_aifsn.set_aifsn(p.aifsn & 0x0f);
            let mut ecw_min_max = EcwMinMax(0);
            ecw_min_max.set_ecw_min(p.ecw_min & 0x0f);
            ecw_min_max.set_ecw_max(p.ecw_max & 0x0f);
            *record = AcParamRecord { aci_aifsn, ecw_min_max, txop_limit: p.txop_limit };
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::ie::write_edca_param_set, std::mem::size_of};

    #[test]
    fn edca_param_set_size() {
        assert_eq!(size_of::<AcParamRecord>(), 4);
        assert_eq!(size_of::<EdcaParamSet>(), 18);
    }

    #[test]
    fn access_category_aci() {
        assert_eq!(AccessCategory::BestEffort.aci(), 0);
        assert_eq!(AccessCategory::Background.aci(), 1);
        assert_eq!(AccessCategory::Video.aci(), 2);
        assert_eq!(AccessCategory::Voice.aci(), 3);
    }

    #[test]
    fn ap_edca_element_11b() {
        let mut params = ap_edca_params(PhyMode::Dot11b);
        params[AccessCategory::Voice.aci() as usize].acm = true;
        let mut buf = vec![];
        write_edca_param_set(&mut buf, &EdcaParamSet::from_params(&params)).expect("EDCA fits");
        #[rustfmt::skip]
        let expected = [
            12, 18, 0, 0,
            0x03, 0x75, 0, 0,       // BE
            0x27, 0xa5, 0, 0,       // BK
            0x41, 0x54, 188, 0,     // VI
            0x71, 0x43, 102, 0,     // VO, admission control mandatory
        ];
        assert_eq!(&buf[..], &expected[..]);
    }

    #[test]
    fn ofdm_modes_share_table() {
        assert_eq!(ap_edca_params(PhyMode::Dot11a), ap_edca_params(PhyMode::Dot11g));
        assert_eq!(ap_edca_params(PhyMode::Turbo)[0].aifsn, 2);
    }
}
