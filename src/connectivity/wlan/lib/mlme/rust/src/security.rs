// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{
        buffer::Chain,
        error::Error,
        iface::{IfaceCaps, Interface},
        node::{Node, NodeRef, RsnState},
    },
    log::{debug, info},
    std::time::{Duration, Instant},
    wlan_common::{
        appendable::Appendable,
        ie::{
            rsn::{
                akm::Akm,
                cipher::{self, Cipher},
                pmkid::Pmkid,
                rsne::Rsne,
            },
            wpa::WpaIe,
            write_rsne, write_wpa1_ie,
        },
        mac::{is_multicast, FrameType, MacFrameHdr},
    },
    wlan_rsn::{
        cipher::{bip::MMIE_LEN, CipherType},
        key::{ptk::Ptk, Key, KeyFlags},
        pmkid::compute_pmkid,
        pmksa::PmksaEntry,
        rsna::{AkmSuite, PairwiseCiphers, Protocols},
    },
};

/// Group and pairwise key ids 0..=3; the IGTK uses 4 or 5.
const MAX_DATA_KEY_ID: u8 = 3;

/// The RSN element body for the negotiated (or, for our own BSS, advertised) parameters `rsn`.
pub fn rsne_for(iface: &Interface, rsn: &RsnState) -> Rsne {
    let mut rsne = Rsne::new();
    rsne.group_data_cipher_suite = Some(Cipher::new_dot11(rsn.group_cipher.suite_type()));
    rsne.pairwise_cipher_suites =
        rsn.pairwise_ciphers.suite_types().map(Cipher::new_dot11).collect();
    rsne.akm_suites = rsn.akms.suites().map(|akm| Akm::new_dot11(akm.suite_type())).collect();
    rsne.rsn_capabilities = Some(rsn.capabilities);
    rsne.pmkids = Some(rsn.pmkid.into_iter().collect());
    if iface.has_caps(IfaceCaps::MFP) {
        rsne.group_mgmt_cipher_suite = Some(Cipher::new_dot11(cipher::BIP_CMAC_128));
    }
    rsne
}

/// The WPA1 element body. WPA predates the SHA256 AKMs and management frame protection.
pub fn wpa_ie_for(rsn: &RsnState) -> WpaIe {
    WpaIe {
        multicast_cipher: Cipher::new_msft(rsn.group_cipher.suite_type()),
        unicast_cipher_list: rsn.pairwise_ciphers.suite_types().map(Cipher::new_msft).collect(),
        akm_list: rsn
            .akms
            .suites()
            .filter(|akm| !akm.uses_sha256())
            .map(|akm| Akm::new_msft(akm.suite_type()))
            .collect(),
    }
}

/// Writes the body of the WPA (`wpa` set) or RSN element, without the element header.
pub fn write_security_body<B: Appendable>(
    buf: &mut B,
    iface: &Interface,
    rsn: &RsnState,
    wpa: bool,
) -> Result<(), Error> {
    if wpa {
        wpa_ie_for(rsn).write_into(buf)?;
    } else {
        rsne_for(iface, rsn).write_into(buf)?;
    }
    Ok(())
}

fn element_wanted(iface: &Interface, rsn: &RsnState, wpa: bool) -> bool {
    let protocol = if wpa { Protocols::WPA } else { Protocols::RSN };
    iface.rsn_on && rsn.protocols.contains(protocol)
}

/// Bytes the RSN or WPA element takes in a frame, zero when it is not sent.
pub fn security_element_len(iface: &Interface, rsn: &RsnState, wpa: bool) -> usize {
    match (element_wanted(iface, rsn, wpa), wpa) {
        (false, _) => 0,
        (true, false) => 2 + rsne_for(iface, rsn).len(),
        (true, true) => 2 + 4 + wpa_ie_for(rsn).len(),
    }
}

/// Writes the complete RSN or WPA element when security is on and the protocol is enabled.
pub fn write_security_element<B: Appendable>(
    buf: &mut B,
    iface: &Interface,
    rsn: &RsnState,
    wpa: bool,
) -> Result<(), Error> {
    if !element_wanted(iface, rsn, wpa) {
        return Ok(());
    }
    if wpa {
        write_wpa1_ie(buf, &wpa_ie_for(rsn))?;
    } else {
        write_rsne(buf, &rsne_for(iface, rsn))?;
    }
    Ok(())
}

/// Where a key lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySlot {
    /// Interface-wide group key or IGTK.
    Group(u8),
    /// Pairwise key of the peer.
    Pairwise(u8),
}

/// Installs `key` on the interface (group keys and the IGTK) or on `node` (pairwise keys),
/// registering it with its cipher backend. A key already in the slot is replaced.
pub fn install_key(iface: &mut Interface, node: &NodeRef, mut key: Key) -> Result<KeySlot, Error> {
    let id = key.id;
    let igtk = key.flags.contains(KeyFlags::IGTK);
    if igtk != (id > MAX_DATA_KEY_ID) {
        return Err(wlan_rsn::Error::InvalidKeyId(id).into());
    }
    iface.ciphers.set_key(&mut key)?;

    let tx = key.flags.contains(KeyFlags::TX);
    let (slot, replaced) = if key.is_group() {
        if igtk {
            iface.def_igtk = Some(id);
        } else if tx {
            iface.def_txkey = Some(id);
        }
        (KeySlot::Group(id), iface.keys.install(key))
    } else {
        let mut node = node.lock();
        debug!("installing pairwise key {} for {:02x?}", id, node.addr);
        (KeySlot::Pairwise(id), node.keys.install(key))
    };
    if let Some(old) = replaced {
        iface.ciphers.delete_key(&old);
    }
    Ok(slot)
}

/// Removes a key. Later lookups never return it.
pub fn remove_key(iface: &mut Interface, node: &NodeRef, slot: KeySlot) -> Result<(), Error> {
    let removed = match slot {
        KeySlot::Group(id) => {
            if iface.def_txkey == Some(id) {
                iface.def_txkey = None;
            }
            if iface.def_igtk == Some(id) {
                iface.def_igtk = None;
            }
            iface.keys.remove(id)?
        }
        KeySlot::Pairwise(id) => node.lock().keys.remove(id)?,
    };
    if let Some(key) = removed {
        iface.ciphers.delete_key(&key);
    }
    Ok(())
}

fn installed(iface: &Interface, node: &Node, slot: KeySlot) -> Option<KeySlot> {
    let present = match slot {
        KeySlot::Group(id) => iface.keys.get(id).is_some(),
        KeySlot::Pairwise(id) => node.keys.get(id).is_some(),
    };
    if present {
        Some(slot)
    } else {
        None
    }
}

/// Picks the key protecting an outgoing frame: the IGTK for group addressed management
/// frames, the default group key for group addressed data or when the peer negotiated
/// use-group, otherwise the peer's pairwise key.
pub fn lookup_transmit_key(iface: &Interface, node: &Node, frame: &[u8]) -> Option<KeySlot> {
    let hdr = MacFrameHdr::parse(frame)?;
    let fc = hdr.hdr.frame_ctrl;
    let group = is_multicast(&hdr.hdr.addr1);
    if fc.frame_type() == FrameType::MGMT && group {
        return installed(iface, node, KeySlot::Group(iface.def_igtk?));
    }
    if group || node.rsn.pairwise_ciphers == PairwiseCiphers::USE_GROUP {
        return installed(iface, node, KeySlot::Group(iface.def_txkey?));
    }
    node.keys.iter().find(|key| !key.is_group()).map(|key| KeySlot::Pairwise(key.id))
}

/// Picks the key for an incoming protected frame from the key id it carries.
pub fn lookup_receive_key(iface: &Interface, node: &Node, frame: &[u8]) -> Option<KeySlot> {
    let hdr = MacFrameHdr::parse(frame)?;
    let fc = hdr.hdr.frame_ctrl;
    let group = is_multicast(&hdr.hdr.addr1);
    if fc.frame_type() == FrameType::MGMT && group {
        // Key id is the first field of the trailing MMIE.
        let mmie = frame.get(frame.len().checked_sub(MMIE_LEN)?..)?;
        let id = u16::from_le_bytes([mmie[2], mmie[3]]);
        if id > u8::MAX as u16 {
            return None;
        }
        return installed(iface, node, KeySlot::Group(id as u8));
    }
    let hdr_len = wlan_common::mac::DataHdr::len(fc.is_qos_data());
    let key_id = frame.get(hdr_len + 3)? >> 6;
    if group {
        installed(iface, node, KeySlot::Group(key_id))
    } else {
        installed(iface, node, KeySlot::Pairwise(key_id))
    }
}

/// Encrypts an outgoing frame with the key `lookup_transmit_key` selects. The chain is consumed.
pub fn protect_frame(iface: &mut Interface, node: &NodeRef, chain: Chain) -> Result<Chain, Error> {
    let frame = iface.pool.to_vec(&chain);
    let mut node = node.lock();
    let slot = match lookup_transmit_key(iface, &node, &frame[..]) {
        Some(slot) => slot,
        None => {
            iface.pool.release_all(chain);
            return Err(Error::Internal(format!("no transmit key for {:02x?}", node.addr)));
        }
    };
    let Interface { pool, ciphers, keys, .. } = iface;
    let key = match slot {
        KeySlot::Group(id) => keys.get_mut(id),
        KeySlot::Pairwise(id) => node.keys.get_mut(id),
    };
    match key {
        Some(key) => ciphers.encrypt(pool, key, chain),
        None => {
            pool.release_all(chain);
            Err(Error::Internal("transmit key vanished".to_string()))
        }
    }
}

/// Decrypts an incoming frame with the key `lookup_receive_key` selects. The chain is consumed.
pub fn unprotect_frame(
    iface: &mut Interface,
    node: &NodeRef,
    chain: Chain,
) -> Result<Chain, Error> {
    let frame = iface.pool.to_vec(&chain);
    let mut node = node.lock();
    let slot = match lookup_receive_key(iface, &node, &frame[..]) {
        Some(slot) => slot,
        None => {
            iface.pool.release_all(chain);
            return Err(Error::InvalidFrame("no key for received frame"));
        }
    };
    let Interface { pool, ciphers, keys, .. } = iface;
    let key = match slot {
        KeySlot::Group(id) => keys.get_mut(id),
        KeySlot::Pairwise(id) => node.keys.get_mut(id),
    };
    match key {
        Some(key) => ciphers.decrypt(pool, key, chain),
        None => {
            pool.release_all(chain);
            Err(Error::InvalidFrame("no key for received frame"))
        }
    }
}

/// Returns (authenticator, supplicant) addresses of the link with `peer`.
fn link_addrs(iface: &Interface, peer: &Node) -> ([u8; 6], [u8; 6]) {
    if iface.is_ap() {
        (iface.addr, peer.addr)
    } else {
        (peer.addr, iface.addr)
    }
}

/// Computes the PMKID of `pmk` and caches it for `peer`. A lifetime of zero never expires.
pub fn pmksa_add(
    iface: &mut Interface,
    peer: &Node,
    akm: AkmSuite,
    pmk: &[u8],
    lifetime: Option<Duration>,
    now: Instant,
) -> Result<Pmkid, Error> {
    let (aa, spa) = link_addrs(iface, peer);
    let pmkid = compute_pmkid(akm, pmk, &aa, &spa)?;
    let entry = iface.pmksa.add(akm, pmkid, peer.addr, pmk, lifetime, now)?;
    info!("cached PMKSA for {:02x?} ({:?})", entry.peer, entry.akm);
    Ok(pmkid)
}

pub fn pmksa_find<'a>(
    iface: &'a Interface,
    peer: &[u8; 6],
    pmkid: Option<&Pmkid>,
    now: Instant,
) -> Option<&'a PmksaEntry> {
    iface.pmksa.find(peer, pmkid, now)
}

pub fn pmksa_invalidate(iface: &mut Interface, peer: &[u8; 6]) -> usize {
    iface.pmksa.invalidate(peer)
}

/// The pairwise cipher used with `node`: CCMP when negotiated, else TKIP, else the group
/// cipher.
pub fn pairwise_cipher(node: &Node) -> CipherType {
    if node.rsn.pairwise_ciphers.contains(PairwiseCiphers::CCMP) {
        CipherType::Ccmp
    } else if node.rsn.pairwise_ciphers.contains(PairwiseCiphers::TKIP) {
        CipherType::Tkip
    } else {
        node.rsn.group_cipher.cipher_type()
    }
}

/// Derives the PTK shared with `peer`.
pub fn derive_pairwise_keys(
    iface: &Interface,
    peer: &Node,
    akm: AkmSuite,
    pmk: &[u8],
    anonce: &[u8],
    snonce: &[u8],
) -> Result<Ptk, Error> {
    let (aa, spa) = link_addrs(iface, peer);
    Ok(Ptk::derive(akm, pmk, &aa, &spa, anonce, snonce, pairwise_cipher(peer))?)
}

/// The pairwise transmit key carried in a PTK.
pub fn pairwise_key(ptk: &Ptk) -> Result<Key, Error> {
    Ok(Key::new(0, ptk.cipher, KeyFlags::TX, ptk.tk())?)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            crypto::test_utils::fake_engine,
            iface::test_utils::*,
            node::{new_node_ref, NodeFlags},
        },
        wlan_common::assert_variant,
        wlan_rsn::{
            key::ptk::{NONCE_LEN, PMK_LEN},
            rsna::{Akms, GroupDataCipher},
        },
    };

    const PEER: [u8; 6] = [0x02, 0, 0, 0, 0, 0x33];

    fn peer() -> NodeRef {
        let mut node = Node::new(PEER, [0x02, 0, 0, 0, 0, 0xaa]);
        node.flags = NodeFlags::QOS;
        new_node_ref(node)
    }

    fn rsn_state() -> RsnState {
        RsnState {
            protocols: Protocols::RSN,
            group_cipher: GroupDataCipher::Tkip,
            pairwise_ciphers: PairwiseCiphers::TKIP | PairwiseCiphers::CCMP,
            akms: Akms::PSK | Akms::SHA256_PSK,
            capabilities: 0x000c,
            pmkid: None,
        }
    }

    #[test]
    fn rsn_element_bytes() {
        let (iface, _, _) = fake_iface(&station_config());
        let mut buf = vec![];
        write_rsne(&mut buf, &rsne_for(&iface, &rsn_state())).expect("write");
        #[rustfmt::skip]
        let expected: &[u8] = &[
            48, 30,
            1, 0,
            0x00, 0x0f, 0xac, 2,
            2, 0, 0x00, 0x0f, 0xac, 2, 0x00, 0x0f, 0xac, 4,
            2, 0, 0x00, 0x0f, 0xac, 2, 0x00, 0x0f, 0xac, 6,
            0x0c, 0x00,
            0, 0,
        ];
        assert_eq!(&buf[..], expected);
        let parsed = Rsne::parse(&buf[2..]).expect("parse");
        assert_eq!(parsed.pairwise_cipher_suites.len(), 2);
        assert_eq!(parsed.akm_suites.len(), 2);
    }

    #[test]
    fn rsn_element_with_pmkid_and_mfp() {
        let config = crate::config::InterfaceConfig { mfp: true, ..station_config() };
        let (iface, _, _) = fake_iface(&config);
        let mut rsn = rsn_state();
        rsn.pmkid = Some([7; 16]);
        let rsne = rsne_for(&iface, &rsn);
        assert_eq!(rsne.pmkids, Some(vec![[7; 16]]));
        assert_eq!(rsne.group_mgmt_cipher_suite, Some(Cipher::new_dot11(cipher::BIP_CMAC_128)));

        let mut buf = vec![];
        write_security_body(&mut buf, &iface, &rsn, false).expect("write");
        assert_eq!(buf.len(), rsne.len());
        assert_eq!(&buf[buf.len() - 4..], &[0x00, 0x0f, 0xac, 6][..]);
    }

    #[test]
    fn wpa_element_skips_sha256_akms() {
        let mut buf = vec![];
        write_wpa1_ie(&mut buf, &wpa_ie_for(&rsn_state())).expect("write");
        #[rustfmt::skip]
        let expected: &[u8] = &[
            221, 26,
            0x00, 0x50, 0xf2, 1,
            1, 0,
            0x00, 0x50, 0xf2, 2,
            2, 0, 0x00, 0x50, 0xf2, 2, 0x00, 0x50, 0xf2, 4,
            1, 0, 0x00, 0x50, 0xf2, 2,
        ];
        assert_eq!(&buf[..], expected);
    }

    #[test]
    fn elements_follow_enabled_protocols() {
        let (mut iface, _, _) = fake_iface(&station_config());
        let rsn = RsnState { protocols: Protocols::RSN, ..rsn_state() };
        assert_eq!(security_element_len(&iface, &rsn, false), 0);

        iface.rsn_on = true;
        let mut buf = vec![];
        write_security_element(&mut buf, &iface, &rsn, true).expect("write");
        assert!(buf.is_empty());
        assert_eq!(security_element_len(&iface, &rsn, true), 0);

        write_security_element(&mut buf, &iface, &rsn, false).expect("write");
        assert_eq!(buf.len(), security_element_len(&iface, &rsn, false));
        assert_eq!(buf[0], 48);

        let rsn = RsnState { protocols: Protocols::WPA | Protocols::RSN, ..rsn_state() };
        let mut buf = vec![];
        write_security_element(&mut buf, &iface, &rsn, true).expect("write");
        assert_eq!(buf.len(), security_element_len(&iface, &rsn, true));
        assert_eq!(&buf[..6], &[221, 26, 0x00, 0x50, 0xf2, 1][..]);
    }

    #[test]
    fn install_and_remove_keys() {
        let (mut iface, _, _) = fake_iface(&station_config());
        iface.ciphers = fake_engine();
        let node = peer();

        let gtk = Key::new(1, CipherType::Ccmp, KeyFlags::GROUP | KeyFlags::TX, &[1; 16][..])
            .expect("key");
        assert_eq!(install_key(&mut iface, &node, gtk), Ok(KeySlot::Group(1)));
        assert_eq!(iface.def_txkey, Some(1));
        assert!(iface.keys.get(1).expect("gtk").handle.is_some());

        let ptk = Key::new(0, CipherType::Ccmp, KeyFlags::TX, &[2; 16][..]).expect("key");
        assert_eq!(install_key(&mut iface, &node, ptk), Ok(KeySlot::Pairwise(0)));
        assert!(node.lock().keys.get(0).is_some());
        assert!(iface.keys.get(0).is_none());

        let igtk = Key::new(4, CipherType::Bip, KeyFlags::IGTK, &[3; 16][..]).expect("key");
        assert_eq!(install_key(&mut iface, &node, igtk), Ok(KeySlot::Group(4)));
        assert_eq!(iface.def_igtk, Some(4));

        remove_key(&mut iface, &node, KeySlot::Group(1)).expect("remove");
        assert_eq!(iface.def_txkey, None);
        assert!(iface.keys.get(1).is_none());
        remove_key(&mut iface, &node, KeySlot::Pairwise(0)).expect("remove");
        assert!(node.lock().keys.get(0).is_none());
    }

    #[test]
    fn igtk_needs_igtk_key_id() {
        let (mut iface, _, _) = fake_iface(&station_config());
        let igtk = Key::new(1, CipherType::Bip, KeyFlags::IGTK, &[3; 16][..]).expect("key");
        assert_eq!(
            install_key(&mut iface, &peer(), igtk),
            Err(Error::Rsn(wlan_rsn::Error::InvalidKeyId(1)))
        );
    }

    fn data_frame(addr1: [u8; 6]) -> Vec<u8> {
        let mut frame = vec![0x08, 0x02, 0, 0];
        frame.extend_from_slice(&addr1[..]);
        frame.extend_from_slice(&[0x02, 0, 0, 0, 0, 0xaa]);
        frame.extend_from_slice(&[0x02, 0, 0, 0, 0, 0x99]);
        frame.extend_from_slice(&[0, 0, 0xaa, 0xaa, 3, 0, 0, 0, 0x08, 0x00]);
        frame
    }

    #[test]
    fn transmit_key_selection() {
        let (mut iface, _, _) = fake_iface(&ap_config());
        iface.ciphers = fake_engine();
        let node = peer();
        let gtk = Key::new(2, CipherType::Ccmp, KeyFlags::GROUP | KeyFlags::TX, &[1; 16][..])
            .expect("key");
        install_key(&mut iface, &node, gtk).expect("install");

        let unicast = data_frame(PEER);
        assert_eq!(lookup_transmit_key(&iface, &node.lock(), &unicast[..]), None);

        let ptk = Key::new(0, CipherType::Ccmp, KeyFlags::TX, &[2; 16][..]).expect("key");
        install_key(&mut iface, &node, ptk).expect("install");
        assert_eq!(
            lookup_transmit_key(&iface, &node.lock(), &unicast[..]),
            Some(KeySlot::Pairwise(0))
        );
        assert_eq!(
            lookup_transmit_key(&iface, &node.lock(), &data_frame([0xff; 6])[..]),
            Some(KeySlot::Group(2))
        );

        node.lock().rsn.pairwise_ciphers = PairwiseCiphers::USE_GROUP;
        assert_eq!(
            lookup_transmit_key(&iface, &node.lock(), &unicast[..]),
            Some(KeySlot::Group(2))
        );
    }

    #[test]
    fn protect_and_unprotect() {
        let (mut iface, _, _) = fake_iface(&ap_config());
        iface.ciphers = fake_engine();
        let free = iface.pool.free_count();
        let node = peer();
        let ptk = Key::new(0, CipherType::Ccmp, KeyFlags::TX, &[2; 16][..]).expect("key");
        install_key(&mut iface, &node, ptk).expect("install");

        let frame = data_frame(PEER);
        let chain = iface.pool.from_slice(&frame[..]).expect("alloc");
        let protected = protect_frame(&mut iface, &node, chain).expect("protect");
        let bytes = iface.pool.to_vec(&protected);
        assert_eq!(
            lookup_receive_key(&iface, &node.lock(), &bytes[..]),
            Some(KeySlot::Pairwise(0))
        );

        let plain = unprotect_frame(&mut iface, &node, protected).expect("unprotect");
        assert_eq!(iface.pool.to_vec(&plain), frame);
        iface.pool.release_all(plain);
        assert_eq!(iface.pool.free_count(), free);
    }

    #[test]
    fn protect_without_key_releases_chain() {
        let (mut iface, _, _) = fake_iface(&station_config());
        let free = iface.pool.free_count();
        let chain = iface.pool.from_slice(&data_frame(PEER)[..]).expect("alloc");
        assert_variant!(protect_frame(&mut iface, &peer(), chain), Err(Error::Internal(_)));
        assert_eq!(iface.pool.free_count(), free);
    }

    #[test]
    fn pmksa_cache() {
        let (mut iface, _, _) = fake_iface(&station_config());
        let node = Node::new(PEER, PEER);
        let now = Instant::now();
        let pmk = [0x11; PMK_LEN];

        let pmkid = pmksa_add(&mut iface, &node, AkmSuite::Psk, &pmk[..], None, now)
            .expect("add");
        let expected = compute_pmkid(AkmSuite::Psk, &pmk[..], &PEER, &iface.addr).expect("pmkid");
        assert_eq!(pmkid, expected);
        assert!(pmksa_find(&iface, &PEER, Some(&pmkid), now).is_some());
        assert!(pmksa_find(&iface, &PEER, Some(&[0; 16]), now).is_none());

        let later = now + Duration::from_secs(10);
        pmksa_add(&mut iface, &node, AkmSuite::Psk, &pmk[..], Some(Duration::from_secs(5)), now)
            .expect("replace");
        assert_eq!(iface.pmksa.len(), 1);
        assert!(pmksa_find(&iface, &PEER, None, later).is_none());

        assert_eq!(pmksa_invalidate(&mut iface, &PEER), 1);
        assert!(pmksa_find(&iface, &PEER, None, now).is_none());
    }

    #[test]
    fn pairwise_keys_from_ptk() {
        let (iface, _, _) = fake_iface(&station_config());
        let mut node = Node::new(PEER, PEER);
        node.rsn = rsn_state();
        let ptk = derive_pairwise_keys(
            &iface,
            &node,
            AkmSuite::Psk,
            &[0x22; PMK_LEN][..],
            &[1; NONCE_LEN][..],
            &[2; NONCE_LEN][..],
        )
        .expect("derive");
        assert_eq!(ptk.cipher, CipherType::Ccmp);
        assert_eq!(ptk.tk().len(), 16);

        let key = pairwise_key(&ptk).expect("key");
        assert_eq!(key.material(), ptk.tk());
        assert!(!key.is_group());

        let bad =
            derive_pairwise_keys(&iface, &node, AkmSuite::Psk, &[0; 8][..], &[1; 32], &[2; 32]);
        assert_eq!(bad.err(), Some(Error::Rsn(wlan_rsn::Error::InvalidPmkLength(8))));
    }
}
