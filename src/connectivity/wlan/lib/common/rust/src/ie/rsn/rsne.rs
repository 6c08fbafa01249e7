// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::{
        akm::Akm,
        cipher::{self, Cipher},
        pmkid::{Pmkid, PMKID_LEN},
        suite_selector::{self, SuiteSelector, SUITE_SELECTOR_LEN},
    },
    crate::{appendable::Appendable, appendable::BufferTooSmall, organization::Oui},
    byteorder::{LittleEndian, ReadBytesExt},
    std::io::{self, Cursor, Read},
    thiserror::Error,
};

pub const VERSION: u16 = 1;

macro_rules! return_ok_on_empty {
    ( $rdr:expr, $result:expr ) => {{
        if remaining($rdr) == 0 {
            return Ok($result);
        }
    }};
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("unexpected io error while parsing RSNE: {0}")]
    UnexpectedIoError(#[from] io::Error),
    #[error("invalid RSNE; too short")]
    TooShort,
    #[error("invalid RSNE; unsupported version {0}")]
    UnsupportedVersion(u16),
    #[error("invalid RSNE; expected suite selector (pairwise or AKM) but was too short")]
    ExpectedSuiteSelector,
    #[error("invalid RSNE; expected pairwise cipher suite list count but failed with: {0}")]
    ExpectedPairwiseListCount(io::Error),
    #[error("invalid RSNE; expected AKM suite list count but failed with: {0}")]
    ExpectedAkmListCount(io::Error),
    #[error("invalid RSNE; expected RSN capabilities but failed with: {0}")]
    ExpectedCapabilities(io::Error),
    #[error("invalid RSNE; expected PMKID list count but failed with: {0}")]
    ExpectedPmkidListCount(io::Error),
    #[error("invalid RSNE; expected PMKID but was too short")]
    ExpectedPmkid,
    #[error("invalid PMKID length: {0}")]
    InvalidPmkidLength(usize),
    #[error("{0} unexpected trailing bytes")]
    TrailingBytes(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Body of the RSN element, IEEE Std 802.11-2016, 9.4.2.25.1.
///
/// Trailing fields are optional on the wire. A field is written when it, or any field after it,
/// is present; absent suites that must be written fall back to their defaults. `pmkids` of
/// `Some(vec![])` writes an explicit zero PMKID count.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Rsne {
    pub version: u16,
    pub group_data_cipher_suite: Option<Cipher>,
    pub pairwise_cipher_suites: Vec<Cipher>,
    pub akm_suites: Vec<Akm>,
    pub rsn_capabilities: Option<u16>,
    pub pmkids: Option<Vec<Pmkid>>,
    pub group_mgmt_cipher_suite: Option<Cipher>,
}

struct Presence {
    group_data: bool,
    pairwise: bool,
    akms: bool,
    caps: bool,
    pmkids: bool,
    group_mgmt: bool,
}

impl Rsne {
    pub fn new() -> Self {
        Rsne { version: VERSION, ..Default::default() }
    }

    fn presence(&self) -> Presence {
        let group_mgmt = self.group_mgmt_cipher_suite.is_some();
        let pmkids = self.pmkids.is_some() || group_mgmt;
        let caps = self.rsn_capabilities.is_some() || pmkids;
        let akms = !self.akm_suites.is_empty() || caps;
        let pairwise = !self.pairwise_cipher_suites.is_empty() || akms;
        let group_data = self.group_data_cipher_suite.is_some() || pairwise;
        Presence { group_data, pairwise, akms, caps, pmkids, group_mgmt }
    }

    pub fn len(&self) -> usize {
        let p = self.presence();
        let mut len = 2;
        if p.group_data {
            len += SUITE_SELECTOR_LEN;
        }
        if p.pairwise {
            len += 2 + SUITE_SELECTOR_LEN * self.pairwise_cipher_suites.len();
        }
        if p.akms {
            len += 2 + SUITE_SELECTOR_LEN * self.akm_suites.len();
        }
        if p.caps {
            len += 2;
        }
        if p.pmkids {
            len += 2 + PMKID_LEN * self.pmkids.as_ref().map_or(0, |pmkids| pmkids.len());
        }
        if p.group_mgmt {
            len += SUITE_SELECTOR_LEN;
        }
        len
    }

    /// Writes the element body, without the element header.
    pub fn write_into<A: Appendable>(&self, buf: &mut A) -> std::result::Result<(), BufferTooSmall> {
        if !buf.can_append(self.len()) {
            return Err(BufferTooSmall);
        }
        let p = self.presence();

        buf.append_u16_le(self.version)?;
        if p.group_data {
            let group = self.group_data_cipher_suite.unwrap_or(Cipher::new_dot11(cipher::CCMP_128));
            group.write_into(buf)?;
        }
        if p.pairwise {
            buf.append_u16_le(self.pairwise_cipher_suites.len() as u16)?;
            for cipher in &self.pairwise_cipher_suites {
                cipher.write_into(buf)?;
            }
        }
        if p.akms {
            buf.append_u16_le(self.akm_suites.len() as u16)?;
            for akm in &self.akm_suites {
                akm.write_into(buf)?;
            }
        }
        if p.caps {
            buf.append_u16_le(self.rsn_capabilities.unwrap_or(0))?;
        }
        if p.pmkids {
            let pmkids = self.pmkids.as_ref().map_or(&[][..], |pmkids| &pmkids[..]);
            buf.append_u16_le(pmkids.len() as u16)?;
            for pmkid in pmkids {
                buf.append_bytes(&pmkid[..])?;
            }
        }
        if let Some(group_mgmt) = self.group_mgmt_cipher_suite.as_ref() {
            group_mgmt.write_into(buf)?;
        }
        Ok(())
    }

    /// Parses an element body, without the element header.
    pub fn parse(body: &[u8]) -> Result<Rsne> {
        let mut rdr = Cursor::new(body);
        if body.len() < 2 {
            return Err(Error::TooShort);
        }

        let mut rsne = Rsne::default();
        rsne.version = rdr.read_u16::<LittleEndian>()?;
        if rsne.version != VERSION {
            return Err(Error::UnsupportedVersion(rsne.version));
        }

        return_ok_on_empty!(&rdr, rsne);
        rsne.group_data_cipher_suite = Some(read_suite_selector::<Cipher>(&mut rdr)?);

        return_ok_on_empty!(&rdr, rsne);
        let count = rdr.read_u16::<LittleEndian>().map_err(Error::ExpectedPairwiseListCount)?;
        for _ in 0..count {
            rsne.pairwise_cipher_suites.push(read_suite_selector::<Cipher>(&mut rdr)?);
        }

        return_ok_on_empty!(&rdr, rsne);
        let count = rdr.read_u16::<LittleEndian>().map_err(Error::ExpectedAkmListCount)?;
        for _ in 0..count {
            rsne.akm_suites.push(read_suite_selector::<Akm>(&mut rdr)?);
        }

        return_ok_on_empty!(&rdr, rsne);
        rsne.rsn_capabilities =
            Some(rdr.read_u16::<LittleEndian>().map_err(Error::ExpectedCapabilities)?);

        return_ok_on_empty!(&rdr, rsne);
        let count = rdr.read_u16::<LittleEndian>().map_err(Error::ExpectedPmkidListCount)?;
        let mut pmkids = Vec::with_capacity(count as usize);
        for _ in 0..count {
            pmkids.push(read_pmkid(&mut rdr)?);
        }
        rsne.pmkids = Some(pmkids);

        return_ok_on_empty!(&rdr, rsne);
        rsne.group_mgmt_cipher_suite = Some(read_suite_selector::<Cipher>(&mut rdr)?);

        Ok(rsne)
    }
}

fn remaining(rdr: &Cursor<&[u8]>) -> usize {
    rdr.get_ref().len().saturating_sub(rdr.position() as usize)
}

pub(crate) fn read_suite_selector<T>(rdr: &mut Cursor<&[u8]>) -> Result<T>
where
    T: suite_selector::Factory<Suite = T>,
{
    if remaining(rdr) < SUITE_SELECTOR_LEN {
        return Err(Error::ExpectedSuiteSelector);
    }
    let mut oui = [0u8; 3];
    rdr.read_exact(&mut oui)?;
    let suite_type = rdr.read_u8()?;
    Ok(T::new(Oui::new(oui), suite_type))
}

fn read_pmkid(rdr: &mut Cursor<&[u8]>) -> Result<Pmkid> {
    if remaining(rdr) < PMKID_LEN {
        return Err(Error::ExpectedPmkid);
    }
    let mut pmkid = [0u8; PMKID_LEN];
    rdr.read_exact(&mut pmkid)?;
    Ok(pmkid)
}
