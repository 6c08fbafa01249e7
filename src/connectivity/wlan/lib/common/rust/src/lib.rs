// Copyright 2019 The Fuchsia Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Crate wlan-common hosts common libraries
//! to be used for WLAN SME, MLME, and binaries written in Rust.

pub mod appendable;
pub mod buffer_reader;
pub mod buffer_writer;
pub mod data_writer;
pub mod error;
pub mod ie;
pub mod mac;
pub mod organization;

/// Asserts that a value matches a pattern, optionally binding and returning the matched content.
///
/// ```ignore
/// let key = assert_variant!(lookup(), Some(key) => key);
/// ```
#[macro_export]
macro_rules! assert_variant {
    // Use custom formatting when panicking.
    ($test:expr, $variant:pat $( | $others:pat)* => $e:expr, $fmt:expr $(, $args:tt)* $(,)?) => {
        match $test {
            $variant $(| $others)* => $e,
            _ => panic!($fmt, $($args,)*),
        }
    };
    // Use default message when panicking.
    ($test:expr, $variant:pat $( | $others:pat)* => $e:expr $(,)?) => {
        match $test {
            $variant $(| $others)* => $e,
            other => panic!("unexpected variant: {:?}", other),
        }
    };
    // Custom error message.
    ($test:expr, $variant:pat $( | $others:pat)* , $fmt:expr $(, $args:tt)* $(,)?) => {
        $crate::assert_variant!($test, $variant $( | $others)* => {}, $fmt $(, $args)*)
    };
    // Default error message.
    ($test:expr, $variant:pat $( | $others:pat)* $(,)?) => {
        $crate::assert_variant!($test, $variant $( | $others)* => {})
    };
}

/// Sums the wire size of a sequence of fixed-size frame components.
#[macro_export]
macro_rules! frame_len {
    () => { 0 };
    ($only:ty) => { std::mem::size_of::<$only>() };
    ($first:ty, $($tail:ty),*) => {
        std::mem::size_of::<$first>() + $crate::frame_len!($($tail),*)
    };
}

#[cfg(test)]
mod tests {
    use crate::mac::{MgmtHdr, QosControl};

    #[derive(Debug)]
    enum Foo {
        A(u8),
        B { named: u8 },
        C,
    }

    #[test]
    fn assert_variant_binds() {
        let value = assert_variant!(Foo::A(8), Foo::A(v) => v);
        assert_eq!(value, 8);
        let value = assert_variant!(Foo::B { named: 7 }, Foo::B { named } => named);
        assert_eq!(value, 7);
        assert_variant!(Foo::C, Foo::C);
    }

    #[test]
    #[should_panic(expected = "unexpected variant")]
    fn assert_variant_mismatch() {
        assert_variant!(Foo::C, Foo::A(_));
    }

    #[test]
    #[should_panic(expected = "wanted A")]
    fn assert_variant_custom_message() {
        assert_variant!(Foo::C, Foo::A(_), "wanted A");
    }

    #[test]
    fn frame_len_sums_components() {
        assert_eq!(frame_len!(), 0);
        assert_eq!(frame_len!(MgmtHdr), 24);
        assert_eq!(frame_len!(MgmtHdr, QosControl, u8), 27);
    }
}
