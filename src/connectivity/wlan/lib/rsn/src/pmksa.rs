// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{key::ptk::PMK_LEN, rsna::AkmSuite, Error},
    log::debug,
    std::{
        fmt,
        time::{Duration, Instant},
    },
    wlan_common::{ie::rsn::pmkid::Pmkid, mac::MacAddr},
};

/// A cached pairwise master key security association.
#[derive(Clone, PartialEq, Eq)]
pub struct PmksaEntry {
    pub akm: AkmSuite,
    /// `None` never expires.
    pub lifetime: Option<Duration>,
    pub pmkid: Pmkid,
    pub peer: MacAddr,
    pub pmk: [u8; PMK_LEN],
    pub added: Instant,
}

impl PmksaEntry {
    pub fn is_expired(&self, now: Instant) -> bool {
        match (self.lifetime, now.checked_duration_since(self.added)) {
            (Some(lifetime), Some(elapsed)) => elapsed >= lifetime,
            _ => false,
        }
    }
}

impl fmt::Debug for PmksaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PmksaEntry")
            .field("akm", &self.akm)
            .field("lifetime", &self.lifetime)
            .field("pmkid", &self.pmkid)
            .field("peer", &self.peer)
            .finish()
    }
}

/// Insertion-ordered PMKSA cache of one interface. Expired entries are skipped on lookup and
/// dropped on the next insertion.
#[derive(Debug, Default)]
pub struct PmksaCache {
    entries: Vec<PmksaEntry>,
}

impl PmksaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing an existing one for the same peer and AKM. A zero lifetime never
    /// expires.
    pub fn add(
        &mut self,
        akm: AkmSuite,
        pmkid: Pmkid,
        peer: MacAddr,
        pmk: &[u8],
        lifetime: Option<Duration>,
        now: Instant,
    ) -> Result<&PmksaEntry, Error> {
        if pmk.len() != PMK_LEN {
            return Err(Error::InvalidPmkLength(pmk.len()));
        }
        let mut key = [0u8; PMK_LEN];
        key.copy_from_slice(pmk);
        let lifetime = lifetime.filter(|lifetime| *lifetime != Duration::from_secs(0));

        self.entries.retain(|e| !e.is_expired(now));
        let entry = PmksaEntry { akm, lifetime, pmkid, peer, pmk: key, added: now };
        let idx = match self.entries.iter().position(|e| e.peer == peer && e.akm == akm) {
            Some(idx) => {
                debug!("replacing PMKSA for {:02x?} ({:?})", peer, akm);
                self.entries[idx] = entry;
                idx
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        Ok(&self.entries[idx])
    }

    /// Finds a live entry for `peer`, additionally matching `pmkid` when given.
    pub fn find(&self, peer: &MacAddr, pmkid: Option<&Pmkid>, now: Instant) -> Option<&PmksaEntry> {
        self.entries.iter().find(|e| {
            &e.peer == peer && pmkid.map_or(true, |id| &e.pmkid == id) && !e.is_expired(now)
        })
    }

    /// Removes every entry for `peer` and returns how many were removed.
    pub fn invalidate(&mut self, peer: &MacAddr) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| &e.peer != peer);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEER: MacAddr = [2, 2, 2, 2, 2, 2];
    const OTHER: MacAddr = [3, 3, 3, 3, 3, 3];
    const PMK: [u8; 32] = [0x11; 32];

    #[test]
    fn add_then_find() {
        let now = Instant::now();
        let mut cache = PmksaCache::new();
        let added = cache.add(AkmSuite::Psk, [1; 16], PEER, &PMK[..], None, now).expect("add").clone();
        assert_eq!(cache.find(&PEER, Some(&[1; 16]), now), Some(&added));
        assert_eq!(cache.find(&PEER, None, now), Some(&added));
        assert_eq!(cache.find(&PEER, Some(&[2; 16]), now), None);
        assert_eq!(cache.find(&OTHER, None, now), None);
    }

    #[test]
    fn same_peer_and_akm_replaces() {
        let now = Instant::now();
        let mut cache = PmksaCache::new();
        cache.add(AkmSuite::Psk, [1; 16], PEER, &PMK[..], None, now).expect("add");
        cache.add(AkmSuite::Psk, [2; 16], PEER, &PMK[..], None, now).expect("add");
        assert_eq!(cache.len(), 1);
        assert!(cache.find(&PEER, Some(&[1; 16]), now).is_none());
        assert!(cache.find(&PEER, Some(&[2; 16]), now).is_some());

        // A different AKM for the same peer is kept alongside.
        cache.add(AkmSuite::Sha256Psk, [3; 16], PEER, &PMK[..], None, now).expect("add");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn lifetime_expiry() {
        let now = Instant::now();
        let lifetime = Duration::from_secs(30);
        let mut cache = PmksaCache::new();
        cache.add(AkmSuite::Psk, [1; 16], PEER, &PMK[..], Some(lifetime), now).expect("add");
        assert!(cache.find(&PEER, None, now + Duration::from_secs(29)).is_some());
        assert!(cache.find(&PEER, None, now + lifetime).is_none());
        assert!(cache.find(&PEER, None, now + Duration::from_secs(31)).is_none());
    }

    #[test]
    fn zero_lifetime_is_infinite() {
        let now = Instant::now();
        let mut cache = PmksaCache::new();
        let entry = cache
            .add(AkmSuite::Psk, [1; 16], PEER, &PMK[..], Some(Duration::from_secs(0)), now)
            .expect("add");
        assert_eq!(entry.lifetime, None);
        assert!(cache.find(&PEER, None, now + Duration::from_secs(86400)).is_some());
    }

    #[test]
    fn expired_entries_dropped_on_add() {
        let now = Instant::now();
        let mut cache = PmksaCache::new();
        cache
            .add(AkmSuite::Psk, [1; 16], PEER, &PMK[..], Some(Duration::from_secs(1)), now)
            .expect("add");
        cache
            .add(AkmSuite::Psk, [2; 16], OTHER, &PMK[..], None, now + Duration::from_secs(2))
            .expect("add");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalidate_peer() {
        let now = Instant::now();
        let mut cache = PmksaCache::new();
        cache.add(AkmSuite::Psk, [1; 16], PEER, &PMK[..], None, now).expect("add");
        cache.add(AkmSuite::Sha256Psk, [2; 16], PEER, &PMK[..], None, now).expect("add");
        cache.add(AkmSuite::Psk, [3; 16], OTHER, &PMK[..], None, now).expect("add");
        assert_eq!(cache.invalidate(&PEER), 2);
        assert!(cache.find(&PEER, None, now).is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalid_pmk_length() {
        let mut cache = PmksaCache::new();
        assert_eq!(
            cache.add(AkmSuite::Psk, [1; 16], PEER, &[0; 16][..], None, Instant::now()).err(),
            Some(Error::InvalidPmkLength(16))
        );
        assert!(cache.is_empty());
    }
}
