// Copyright 2018 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The Michael message integrity code of IEEE Std 802.11-2016, 12.5.2.3.

use {crate::Error, wlan_common::mac::MacAddr};

pub const KEY_LEN: usize = 8;
pub const MIC_LEN: usize = 8;

fn xswap(x: u32) -> u32 {
    ((x & 0xff00ff00) >> 8) | ((x & 0x00ff00ff) << 8)
}

fn block(l: &mut u32, r: &mut u32) {
    *r ^= l.rotate_left(17);
    *l = l.wrapping_add(*r);
    *r ^= xswap(*l);
    *l = l.wrapping_add(*r);
    *r ^= l.rotate_left(3);
    *l = l.wrapping_add(*r);
    *r ^= l.rotate_right(2);
    *l = l.wrapping_add(*r);
}

/// Computes Michael over `data` with an 8-byte key.
pub fn michael(key: &[u8], data: &[u8]) -> Result<[u8; MIC_LEN], Error> {
    if key.len() != KEY_LEN {
        return Err(Error::InvalidMacKeyLength(key.len()));
    }
    let mut l = u32::from_le_bytes([key[0], key[1], key[2], key[3]]);
    let mut r = u32::from_le_bytes([key[4], key[5], key[6], key[7]]);

    // 0x5a followed by four to seven zero bytes so the length is a multiple of four.
    let zeros = 4 + (4 - (data.len() + 1) % 4) % 4;
    let mut padded = Vec::with_capacity(data.len() + 1 + zeros);
    padded.extend_from_slice(data);
    padded.push(0x5a);
    padded.resize(padded.len() + zeros, 0);

    for word in padded.chunks(4) {
        l ^= u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        block(&mut l, &mut r);
    }

    let mut mic = [0u8; MIC_LEN];
    mic[..4].copy_from_slice(&l.to_le_bytes());
    mic[4..].copy_from_slice(&r.to_le_bytes());
    Ok(mic)
}

/// Computes the MIC of an MSDU: `DA | SA | priority | 0 0 0 | data`.
pub fn compute(
    key: &[u8],
    da: &MacAddr,
    sa: &MacAddr,
    priority: u8,
    data: &[u8],
) -> Result<[u8; MIC_LEN], Error> {
    let mut msg = Vec::with_capacity(16 + data.len());
    msg.extend_from_slice(&da[..]);
    msg.extend_from_slice(&sa[..]);
    msg.extend_from_slice(&[priority, 0, 0, 0]);
    msg.extend_from_slice(data);
    michael(key, &msg[..])
}

#[cfg(test)]
mod tests {
    use {super::*, hex::FromHex, test_case::test_case};

    // IEEE Std 802.11-2016, M.6.3.
    #[test_case("0000000000000000", "", "82925c1ca1d130b8"; "empty")]
    #[test_case("82925c1ca1d130b8", "M", "434721ca40639b3f"; "one byte")]
    #[test_case("434721ca40639b3f", "Mi", "e8f9becae97e5d29"; "two bytes")]
    #[test_case("e8f9becae97e5d29", "Mic", "90038fc6cf13c1db"; "three bytes")]
    #[test_case("90038fc6cf13c1db", "Mich", "d55e100510128986"; "four bytes")]
    #[test_case("d55e100510128986", "Michael", "0a942b124ecaa546"; "seven bytes")]
    fn michael_vectors(key: &str, data: &str, expected: &str) {
        let key = Vec::from_hex(key).unwrap();
        let mic = michael(&key[..], data.as_bytes()).expect("valid key");
        assert_eq!(&mic[..], &Vec::from_hex(expected).unwrap()[..]);
    }

    #[test]
    fn msdu_mic_covers_addresses_and_priority() {
        let key = [0x11u8; 8];
        let da = [1u8; 6];
        let sa = [2u8; 6];
        let a = compute(&key[..], &da, &sa, 0, b"payload").expect("mic");
        let b = compute(&key[..], &da, &sa, 5, b"payload").expect("mic");
        let c = compute(&key[..], &sa, &da, 0, b"payload").expect("mic");
        assert_ne!(a, b);
        assert_ne!(a, c);

        let mut msg = vec![1u8; 6];
        msg.extend_from_slice(&[2u8; 6]);
        msg.extend_from_slice(&[0, 0, 0, 0]);
        msg.extend_from_slice(b"payload");
        assert_eq!(michael(&key[..], &msg[..]).expect("mic"), a);
    }

    #[test]
    fn invalid_key_length() {
        assert_eq!(michael(&[0u8; 16][..], b""), Err(Error::InvalidMacKeyLength(16)));
    }
}
