// Copyright 2021 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! This crate implements the transmit side of an IEEE Std 802.11-2016 data-link layer for
//! SoftMAC hardware: Ethernet to 802.11 encapsulation, management and control frame
//! construction, per-peer key management and frame protection, and traffic classification. The
//! association state machine that decides when frames are sent lives outside this crate; it
//! drives an [`Interface`] through [`encap::encapsulate`] and [`mgmt::send_management`].
//!
//! [`Interface`]: crate::iface::Interface

pub mod block_ack;
pub mod buffer;
pub mod classify;
pub mod config;
pub mod crypto;
pub mod ctrl;
pub mod device;
pub mod encap;
pub mod error;
pub mod iface;
pub mod mgmt;
pub mod node;
pub mod pwrsave;
pub mod security;
pub mod timer;

pub use wlan_common as common;
