// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use {
    super::rsn::{
        akm, cipher,
        rsne::{read_suite_selector, Error, Result},
        suite_selector::{SuiteSelector, SUITE_SELECTOR_LEN},
    },
    crate::{
        appendable::{Appendable, BufferTooSmall},
        organization::Oui,
    },
    byteorder::{LittleEndian, ReadBytesExt},
    std::io::Cursor,
};

// The WPA1 IE is not fully specified by IEEE. This format was derived from pcap.
// Only the fields following the vendor header are modelled here.
// (3B) OUI
pub const OUI: Oui = Oui::MSFT;
// (1B) OUI-specific element type
pub const VENDOR_SPECIFIC_TYPE: u8 = 1;
// (2B) WPA type
pub const WPA_TYPE: u16 = 1;
// (4B) multicast cipher
//     0-2 cipher suite (OUI)
//     3   cipher type
// (2B) unicast cipher count
// (4B x N) unicast cipher list
// (2B) AKM count
// (4B x N) AKM list
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WpaIe {
    pub multicast_cipher: cipher::Cipher,
    pub unicast_cipher_list: Vec<cipher::Cipher>,
    pub akm_list: Vec<akm::Akm>,
}

impl WpaIe {
    const FIXED_FIELDS_LENGTH: usize = 10;

    pub fn len(&self) -> usize {
        Self::FIXED_FIELDS_LENGTH
            + (self.unicast_cipher_list.len() + self.akm_list.len()) * SUITE_SELECTOR_LEN
    }

    pub fn write_into<A: Appendable>(&self, buf: &mut A) -> std::result::Result<(), BufferTooSmall> {
        if !buf.can_append(self.len()) {
            return Err(BufferTooSmall);
        }

        buf.append_u16_le(WPA_TYPE)?;
        self.multicast_cipher.write_into(buf)?;

        buf.append_u16_le(self.unicast_cipher_list.len() as u16)?;
        for cipher in &self.unicast_cipher_list {
            cipher.write_into(buf)?;
        }

        buf.append_u16_le(self.akm_list.len() as u16)?;
        for akm in &self.akm_list {
            akm.write_into(buf)?;
        }
        Ok(())
    }

    /// Parses the bytes following the vendor OUI and type. Trailing zero padding is tolerated.
    pub fn parse(bytes: &[u8]) -> Result<WpaIe> {
        let mut rdr = Cursor::new(bytes);
        let _wpa_type = rdr.read_u16::<LittleEndian>().map_err(|_| Error::TooShort)?;
        let multicast_cipher = read_suite_selector::<cipher::Cipher>(&mut rdr)?;

        let count = rdr.read_u16::<LittleEndian>().map_err(Error::ExpectedPairwiseListCount)?;
        let mut unicast_cipher_list = Vec::with_capacity(count as usize);
        for _ in 0..count {
            unicast_cipher_list.push(read_suite_selector::<cipher::Cipher>(&mut rdr)?);
        }

        let count = rdr.read_u16::<LittleEndian>().map_err(Error::ExpectedAkmListCount)?;
        let mut akm_list = Vec::with_capacity(count as usize);
        for _ in 0..count {
            akm_list.push(read_suite_selector::<akm::Akm>(&mut rdr)?);
        }

        // In practice this IE is sometimes zero-padded.
        let rest = &bytes[rdr.position() as usize..];
        if rest.iter().any(|b| *b != 0) {
            return Err(Error::TrailingBytes(rest.len()));
        }
        Ok(WpaIe { multicast_cipher, unicast_cipher_list, akm_list })
    }
}
