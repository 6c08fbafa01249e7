// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::iface::{Interface, Role},
    wlan_common::{
        ie::AccessCategory,
        mac::eth::{EthernetFrame, VlanTag, ETHER_TYPE_IPV4, ETHER_TYPE_IPV6, ETHER_TYPE_VLAN},
    },
    zerocopy::LayoutVerified,
};

/// User priority to access category, IEEE Std 802.11-2016, Table 10-1.
const UP_TO_AC: [AccessCategory; 8] = [
    AccessCategory::BestEffort,
    AccessCategory::Background,
    AccessCategory::Background,
    AccessCategory::BestEffort,
    AccessCategory::Video,
    AccessCategory::Video,
    AccessCategory::Voice,
    AccessCategory::Voice,
];

/// Maps the precedence bits of a DS field to a user priority.
fn precedence_to_priority(ds_field: u8) -> u8 {
    match ds_field & 0xe0 {
        0xe0 => 7,
        0xc0 => 6,
        0xa0 => 5,
        0x80 => 4,
        0x60 => 3,
        0x40 => 1,
        0x20 => 2,
        _ => 0,
    }
}

/// Returns the 802.1D user priority (0..=7) of an Ethernet frame: the VLAN priority when tagged,
/// otherwise derived from the IPv4 TOS or IPv6 traffic class. Anything else is best effort.
pub fn classify(frame: &[u8]) -> u8 {
    let eth = match EthernetFrame::parse(frame) {
        Some(eth) => eth,
        None => return 0,
    };
    match eth.hdr.ether_type() {
        ETHER_TYPE_VLAN => LayoutVerified::<_, VlanTag>::new_unaligned_from_prefix(eth.body)
            .map_or(0, |(tag, _)| tag.priority()),
        ETHER_TYPE_IPV4 => match eth.body {
            [vhl, tos, ..] if *vhl >> 4 == 4 => precedence_to_priority(*tos),
            _ => 0,
        },
        ETHER_TYPE_IPV6 => match eth.body {
            [b0, b1, b2, b3, ..] => {
                let flow = u32::from_be_bytes([*b0, *b1, *b2, *b3]);
                if flow >> 28 == 6 {
                    precedence_to_priority((flow >> 20) as u8)
                } else {
                    0
                }
            }
            _ => 0,
        },
        _ => 0,
    }
}

/// Picks the access category for a user priority. Stations step down to the next category while
/// admission control is mandatory for the current one.
pub fn priority_to_access_category(iface: &Interface, priority: u8) -> AccessCategory {
    let mut ac = UP_TO_AC.get(priority as usize).copied().unwrap_or(AccessCategory::BestEffort);
    if iface.role == Role::AccessPoint {
        return ac;
    }
    while ac != AccessCategory::Background && iface.acm(ac) {
        ac = match ac {
            AccessCategory::Voice => AccessCategory::Video,
            AccessCategory::Video => AccessCategory::BestEffort,
            AccessCategory::BestEffort | AccessCategory::Background => AccessCategory::Background,
        };
    }
    ac
}
