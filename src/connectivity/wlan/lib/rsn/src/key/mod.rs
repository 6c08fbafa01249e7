// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

pub mod ptk;

use {
    crate::{cipher::CipherType, Error},
    bitflags::bitflags,
    std::fmt,
};

/// Key ids 0..=3 address pairwise and group data keys, 4 and 5 the IGTK.
pub const MAX_KEY_ID: u8 = 5;
pub const NUM_KEYS: usize = MAX_KEY_ID as usize + 1;
pub const NUM_TID: usize = 16;
pub const MAX_KEY_LEN: usize = 32;

bitflags! {
    pub struct KeyFlags: u8 {
        const GROUP = 1 << 0;
        const TX = 1 << 1;
        const IGTK = 1 << 2;
    }
}

/// A key installed for a peer or for the whole interface.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    pub id: u8,
    pub cipher: CipherType,
    pub flags: KeyFlags,
    material: [u8; MAX_KEY_LEN],
    material_len: usize,
    /// Receive sequence counters, one per TID.
    pub rsc: [u64; NUM_TID],
    pub mgmt_rsc: u64,
    /// Transmit sequence counter (TKIP TSC, CCMP PN or BIP IPN).
    pub tsc: u64,
    /// Opaque value owned by the cipher backend.
    pub handle: Option<u64>,
}

impl Key {
    pub fn new(id: u8, cipher: CipherType, flags: KeyFlags, material: &[u8]) -> Result<Key, Error> {
        if id > MAX_KEY_ID {
            return Err(Error::InvalidKeyId(id));
        }
        if flags.contains(KeyFlags::IGTK) != (cipher == CipherType::Bip) {
            return Err(Error::UnsupportedCipher(cipher));
        }
        if material.len() != cipher.key_len() {
            return Err(Error::InvalidKeyLength(cipher, material.len()));
        }
        let mut buf = [0u8; MAX_KEY_LEN];
        buf[..material.len()].copy_from_slice(material);
        Ok(Key {
            id,
            cipher,
            flags,
            material: buf,
            material_len: material.len(),
            rsc: [0; NUM_TID],
            mgmt_rsc: 0,
            tsc: 0,
            handle: None,
        })
    }

    pub fn material(&self) -> &[u8] {
        &self.material[..self.material_len]
    }

    pub fn is_group(&self) -> bool {
        self.flags.intersects(KeyFlags::GROUP | KeyFlags::IGTK)
    }

    /// Returns the current transmit sequence counter and advances it.
    pub fn next_tsc(&mut self) -> u64 {
        self.tsc = self.tsc.wrapping_add(1) & 0xffff_ffff_ffff;
        self.tsc
    }
}

// Key material stays out of logs.
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("id", &self.id)
            .field("cipher", &self.cipher)
            .field("flags", &self.flags)
            .field("tsc", &self.tsc)
            .finish()
    }
}

/// Six key slots addressed by key id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyTable {
    slots: [Option<Key>; NUM_KEYS],
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `key` into the slot of its id and returns the key it replaced.
    pub fn install(&mut self, key: Key) -> Option<Key> {
        let slot = key.id as usize;
        self.slots[slot].replace(key)
    }

    pub fn remove(&mut self, id: u8) -> Result<Option<Key>, Error> {
        let slot = self.slots.get_mut(id as usize).ok_or(Error::InvalidKeyId(id))?;
        Ok(slot.take())
    }

    pub fn get(&self, id: u8) -> Option<&Key> {
        self.slots.get(id as usize).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: u8) -> Option<&mut Key> {
        self.slots.get_mut(id as usize).and_then(|slot| slot.as_mut())
    }

    /// The first installed key marked for transmit.
    pub fn tx_key(&self) -> Option<&Key> {
        self.iter().find(|key| key.flags.contains(KeyFlags::TX))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }
}
