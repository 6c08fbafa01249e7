// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    crate::{
        buffer::{BufferPool, Chain},
        error::Error,
    },
    log::{error, warn},
    std::{collections::HashMap, mem::size_of},
    wlan_common::mac::{
        data_dst_addr, data_src_addr, DataHdr, FrameControl, FrameType, MacAddr, MacFrameHdr,
        MgmtHdr,
    },
    wlan_rsn::{
        cipher::{
            bip::{self, Mmie, MMIE_LEN},
            ccmp, michael, tkip, wep, CipherType,
        },
        key::{Key, NUM_TID},
    },
    zerocopy::AsBytes,
};

/// Receive counter slot used for robust management frames.
pub const MGMT_TID: u8 = NUM_TID as u8;

/// Security failures detected on received frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityEvent {
    /// Michael, CCMP or BIP integrity check failed.
    MicFailure { peer: MacAddr, key_id: u8 },
    /// The packet number did not advance past the receive counter of `tid`.
    Replay { tid: u8 },
}

/// Cipher primitives supplied by the platform, one backend per cipher type.
pub trait CipherBackend {
    /// Called when a key is installed. The backend may store an opaque value in `key.handle`.
    fn set_key(&mut self, key: &mut Key) -> Result<(), Error>;
    fn delete_key(&mut self, key: &Key);
    /// Encrypts `plaintext` and returns the ciphertext followed by the backend's integrity
    /// trailer (WEP and TKIP ICV, CCMP MIC).
    fn seal(&mut self, key: &Key, pn: u64, aad: &[u8], plaintext: &[u8])
        -> Result<Vec<u8>, Error>;
    /// Reverses `seal`. Returns `None` when the integrity trailer does not verify.
    fn open(
        &mut self,
        key: &Key,
        pn: u64,
        aad: &[u8],
        ciphertext: &[u8],
    ) -> Result<Option<Vec<u8>>, Error>;
}

/// Bytes the backend appends.
fn backend_trailer_len(cipher: CipherType) -> usize {
    match cipher {
        CipherType::Wep40 | CipherType::Wep104 => wep::ICV_LEN,
        CipherType::Tkip => tkip::ICV_LEN,
        CipherType::Ccmp => ccmp::MIC_LEN,
        CipherType::None | CipherType::Bip => 0,
    }
}

fn mac_header_len(fc: FrameControl) -> usize {
    if fc.frame_type() == FrameType::DATA {
        DataHdr::len(fc.is_qos_data())
    } else {
        size_of::<MgmtHdr>()
    }
}

fn frame_tid(frame: &[u8], fc: FrameControl) -> u8 {
    if fc.is_qos_data() {
        frame.get(size_of::<DataHdr>()).map_or(0, |qos| qos & 0x0f)
    } else {
        0
    }
}

/// Adds and strips cipher encapsulation, dispatching the primitives to registered backends.
/// Michael and BIP are computed here.
#[derive(Default)]
pub struct CipherEngine {
    backends: HashMap<CipherType, Box<dyn CipherBackend>>,
}

impl CipherEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, cipher: CipherType, backend: Box<dyn CipherBackend>) {
        self.backends.insert(cipher, backend);
    }

    fn backend(&mut self, cipher: CipherType) -> Result<&mut Box<dyn CipherBackend>, Error> {
        self.backends
            .get_mut(&cipher)
            .ok_or_else(|| Error::Unsupported(format!("no backend for {:?}", cipher)))
    }

    pub fn set_key(&mut self, key: &mut Key) -> Result<(), Error> {
        match key.cipher {
            CipherType::None | CipherType::Bip => Ok(()),
            cipher => self.backend(cipher)?.set_key(key),
        }
    }

    pub fn delete_key(&mut self, key: &Key) {
        if let Some(backend) = self.backends.get_mut(&key.cipher) {
            backend.delete_key(key);
        }
    }

    /// Protects the frame in `chain` with `key` and returns the protected frame. The input chain
    /// is always consumed.
    pub fn encrypt(
        &mut self,
        pool: &mut BufferPool,
        key: &mut Key,
        chain: Chain,
    ) -> Result<Chain, Error> {
        let frame = pool.to_vec(&chain);
        pool.release_all(chain);
        let protected = self.seal_frame(key, &frame[..])?;
        pool.from_slice(&protected[..])
    }

    /// Verifies and strips the protection of the frame in `chain`. The input chain is always
    /// consumed.
    pub fn decrypt(
        &mut self,
        pool: &mut BufferPool,
        key: &mut Key,
        chain: Chain,
    ) -> Result<Chain, Error> {
        let frame = pool.to_vec(&chain);
        pool.release_all(chain);
        let plain = self.open_frame(key, &frame[..])?;
        pool.from_slice(&plain[..])
    }

    fn seal_frame(&mut self, key: &mut Key, frame: &[u8]) -> Result<Vec<u8>, Error> {
        let hdr = MacFrameHdr::parse(frame).ok_or(Error::InvalidFrame("frame too short"))?;
        let mut fc = hdr.hdr.frame_ctrl;
        let hdr_len = mac_header_len(fc);
        if frame.len() < hdr_len {
            return Err(Error::InvalidFrame("frame too short"));
        }
        if key.cipher == CipherType::Bip {
            return protect_group_mgmt(key, frame, hdr_len);
        }

        let tid = frame_tid(frame, fc);
        let mut plaintext = frame[hdr_len..].to_vec();
        if key.cipher == CipherType::Tkip {
            let sa = data_src_addr(&hdr.hdr)
                .ok_or(Error::InvalidFrame("four-address frames are not supported"))?;
            let mic = michael::compute(
                &key.material()[tkip::TX_MIC_KEY_OFFSET..tkip::RX_MIC_KEY_OFFSET],
                &data_dst_addr(&hdr.hdr),
                &sa,
                tid,
                &plaintext[..],
            )?;
            plaintext.extend_from_slice(&mic[..]);
        }

        let pn = key.next_tsc();
        let cipher_hdr = match key.cipher {
            CipherType::Wep40 | CipherType::Wep104 => wep::write_iv(pn as u32, key.id).to_vec(),
            CipherType::Tkip => tkip::write_header(pn, key.id).to_vec(),
            CipherType::Ccmp => ccmp::write_header(pn, key.id).to_vec(),
            CipherType::None | CipherType::Bip => {
                return Err(Error::Unsupported(format!("cannot encrypt with {:?}", key.cipher)))
            }
        };

        let mut out = Vec::with_capacity(
            hdr_len + cipher_hdr.len() + plaintext.len() + backend_trailer_len(key.cipher),
        );
        out.extend_from_slice(&frame[..hdr_len]);
        fc.set_protected(true);
        out[..2].copy_from_slice(fc.as_bytes());

        let sealed = self.backend(key.cipher)?.seal(key, pn, &out[..], &plaintext[..])?;
        if sealed.len() != plaintext.len() + backend_trailer_len(key.cipher) {
            error!(
                "{:?} backend returned {} bytes for {}",
                key.cipher,
                sealed.len(),
                plaintext.len()
            );
            return Err(Error::Internal(format!("bad {:?} ciphertext length", key.cipher)));
        }
        out.extend_from_slice(&cipher_hdr[..]);
        out.extend_from_slice(&sealed[..]);
        Ok(out)
    }

    fn open_frame(&mut self, key: &mut Key, frame: &[u8]) -> Result<Vec<u8>, Error> {
        let hdr = MacFrameHdr::parse(frame).ok_or(Error::InvalidFrame("frame too short"))?;
        let mut fc = hdr.hdr.frame_ctrl;
        let peer = hdr.hdr.addr2;
        let hdr_len = mac_header_len(fc);
        if frame.len() < hdr_len {
            return Err(Error::InvalidFrame("frame too short"));
        }
        if key.cipher == CipherType::Bip {
            return verify_group_mgmt(key, frame, hdr_len);
        }
        if !fc.protected() {
            return Err(Error::InvalidFrame("frame is not protected"));
        }

        let cipher_hdr_len = key.cipher.header_len();
        if frame.len() < hdr_len + cipher_hdr_len + backend_trailer_len(key.cipher) {
            return Err(Error::InvalidFrame("protected frame too short"));
        }
        let cipher_hdr = &frame[hdr_len..hdr_len + cipher_hdr_len];
        let (pn, key_id) = match key.cipher {
            CipherType::Wep40 | CipherType::Wep104 => {
                let (iv, key_id) = wep::parse_iv(cipher_hdr)?;
                (iv as u64, key_id)
            }
            CipherType::Tkip => tkip::parse_header(cipher_hdr)?,
            CipherType::Ccmp => ccmp::parse_header(cipher_hdr)?,
            CipherType::None | CipherType::Bip => {
                return Err(Error::Unsupported(format!("cannot decrypt with {:?}", key.cipher)))
            }
        };
        if key_id != key.id {
            return Err(Error::InvalidFrame("key id mismatch"));
        }

        // Robust management frames keep their own receive counter.
        let mgmt = fc.frame_type() == FrameType::MGMT;
        let tid = frame_tid(frame, fc);
        let (replay_tid, rsc) =
            if mgmt { (MGMT_TID, key.mgmt_rsc) } else { (tid, key.rsc[tid as usize]) };
        if !key.cipher.is_wep() && pn <= rsc {
            warn!("replayed frame from {:02x?} on tid {}: pn {}", peer, replay_tid, pn);
            return Err(SecurityEvent::Replay { tid: replay_tid }.into());
        }

        let mic_failure = SecurityEvent::MicFailure { peer, key_id };
        let aad = &frame[..hdr_len];
        let ciphertext = &frame[hdr_len + cipher_hdr_len..];
        let mut plaintext = match self.backend(key.cipher)?.open(key, pn, aad, ciphertext)? {
            Some(plaintext) => plaintext,
            None => {
                warn!("{:?} integrity failure from {:02x?}", key.cipher, peer);
                return Err(mic_failure.into());
            }
        };

        if key.cipher == CipherType::Tkip {
            if plaintext.len() < michael::MIC_LEN {
                return Err(Error::InvalidFrame("TKIP frame too short"));
            }
            let msdu_len = plaintext.len() - michael::MIC_LEN;
            let sa = data_src_addr(&hdr.hdr)
                .ok_or(Error::InvalidFrame("four-address frames are not supported"))?;
            let mic = michael::compute(
                &key.material()[tkip::RX_MIC_KEY_OFFSET..],
                &data_dst_addr(&hdr.hdr),
                &sa,
                tid,
                &plaintext[..msdu_len],
            )?;
            if mic[..] != plaintext[msdu_len..] {
                warn!("Michael MIC failure from {:02x?}", peer);
                return Err(mic_failure.into());
            }
            plaintext.truncate(msdu_len);
        }

        if !key.cipher.is_wep() {
            if mgmt {
                key.mgmt_rsc = pn;
            } else {
                key.rsc[tid as usize] = pn;
            }
        }
        let mut out = Vec::with_capacity(hdr_len + plaintext.len());
        out.extend_from_slice(&frame[..hdr_len]);
        fc.set_protected(false);
        out[..2].copy_from_slice(fc.as_bytes());
        out.extend_from_slice(&plaintext[..]);
        Ok(out)
    }
}

fn frame_ctrl_raw(frame: &[u8]) -> u16 {
    u16::from_le_bytes([frame[0], frame[1]])
}

/// Appends an MMIE to a group addressed management frame.
fn protect_group_mgmt(key: &mut Key, frame: &[u8], hdr_len: usize) -> Result<Vec<u8>, Error> {
    let hdr = MacFrameHdr::parse(frame).ok_or(Error::InvalidFrame("frame too short"))?;
    let (addr1, addr2, addr3) = (hdr.hdr.addr1, hdr.hdr.addr2, hdr.hdr.addr3);
    let ipn = key.next_tsc();
    let mut out = frame.to_vec();
    out.extend_from_slice(&Mmie { key_id: key.id as u16, ipn, mic: [0; bip::MIC_LEN] }.to_bytes());
    bip::protect(
        key.material(),
        frame_ctrl_raw(frame),
        &addr1,
        &addr2,
        &addr3,
        &mut out[hdr_len..],
    )?;
    Ok(out)
}

/// Checks and strips the MMIE of a group addressed management frame.
fn verify_group_mgmt(key: &mut Key, frame: &[u8], hdr_len: usize) -> Result<Vec<u8>, Error> {
    let hdr = MacFrameHdr::parse(frame).ok_or(Error::InvalidFrame("frame too short"))?;
    let (addr1, addr2, addr3) = (hdr.hdr.addr1, hdr.hdr.addr2, hdr.hdr.addr3);
    if frame.len() < hdr_len + MMIE_LEN {
        return Err(Error::InvalidFrame("no MMIE"));
    }
    let mmie_start = frame.len() - MMIE_LEN;
    let mmie = Mmie::parse(&frame[mmie_start..])?;
    if mmie.key_id != key.id as u16 {
        return Err(Error::InvalidFrame("key id mismatch"));
    }
    if mmie.ipn <= key.mgmt_rsc {
        warn!("replayed management frame from {:02x?}: ipn {}", addr2, mmie.ipn);
        return Err(SecurityEvent::Replay { tid: MGMT_TID }.into());
    }
    let mic = bip::compute_mic(
        key.material(),
        frame_ctrl_raw(frame),
        &addr1,
        &addr2,
        &addr3,
        &frame[hdr_len..],
    )?;
    if mic != mmie.mic {
        warn!("BIP MIC failure from {:02x?}", addr2);
        return Err(SecurityEvent::MicFailure { peer: addr2, key_id: key.id }.into());
    }
    key.mgmt_rsc = mmie.ipn;
    Ok(frame[..mmie_start].to_vec())
}
