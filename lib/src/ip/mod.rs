//! Internet Protocol headers.

use core::fmt;

pub mod v4;

/// The protocol carried in the data portion of an IP datagram.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Protocol(u8);

crate::macros::define_values! {
    impl Protocol: 8 {
        /// Internet Control Message
        ICMP = libc::IPPROTO_ICMP as u8;
        /// Transmission Control
        TCP = libc::IPPROTO_TCP as u8;
        /// User Datagram
        UDP = libc::IPPROTO_UDP as u8;
    }
}

/// The importance or priority of a datagram.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Precedence(u8);

crate::macros::define_values! {
    impl Precedence: 3 {
        /// Network Control
        NETWORK_CONTROL = 0b111;
        /// Internetwork Control
        INTERNETWORK_CONTROL = 0b110;
        /// CRITIC/ECP
        CRITIC_ECP = 0b101;
        /// Flash Override
        FLASH_OVERRIDE = 0b100;
        /// Flash
        FLASH = 0b011;
        /// Immediate
        IMMEDIATE = 0b010;
        /// Priority
        PRIORITY = 0b001;
        /// Routine
        ROUTINE = 0b000;
    }
}

/// Requested delay.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Delay(u8);

crate::macros::define_values! {
    impl Delay: 1 {
        /// Normal Delay
        NORMAL = 0;
        /// Low Delay
        LOW = 1;
    }
}

/// Requested throughput.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Throughput(u8);

crate::macros::define_values! {
    impl Throughput: 1 {
        /// Normal Throughput
        NORMAL = 0;
        /// High Throughput
        HIGH = 1;
    }
}

/// Requested reliability.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Reliability(u8);

crate::macros::define_values! {
    impl Reliability: 1 {
        /// Normal Reliability
        NORMAL = 0;
        /// High Reliability
        HIGH = 1;
    }
}

/// Whether a datagram may be fragmented.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Fragment(u8);

crate::macros::define_values! {
    impl Fragment: 1 {
        /// May Fragment
        MAY_FRAGMENT = 0;
        /// Don't Fragment
        DONT_FRAGMENT = 1;
    }
}

/// Whether more fragments of a datagram follow.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct MoreFragments(u8);

crate::macros::define_values! {
    impl MoreFragments: 1 {
        /// Last Fragment
        LAST_FRAGMENT = 0;
        /// More Fragments
        MORE_FRAGMENTS = 1;
    }
}

crate::macros::define_bits! {
    /// Type of Service.
    ///
    /// Bits are numbered from the most significant bit, so precedence occupies
    /// the three high bits of the byte.
    pub struct Tos: 8 {
        /// Precedence.
        PRECEDENCE => view precedence, set_precedence: Precedence = [0, 0, 3];
        /// Delay.
        DELAY => view delay, set_delay: Delay = [0, 3, 1];
        /// Throughput.
        THROUGHPUT => view throughput, set_throughput: Throughput = [0, 4, 1];
        /// Reliability.
        RELIABILITY => view reliability, set_reliability: Reliability = [0, 5, 1];
        /// Reserved for future use.
        RESERVED => raw reserved, set_reserved: u8 = [0, 6, 2];
    }
}

crate::macros::define_bits! {
    /// Various control flags.
    ///
    /// The flags form a three bit word, where bit 0 is reserved, bit 1 is
    /// don't fragment and bit 2 is more fragments.
    pub struct Flags: 3 {
        /// Reserved, must be zero.
        RESERVED => flag reserved, set_reserved: bool = [0, 0, 1];
        /// Don't fragment.
        DF => view df, set_df: Fragment = [0, 1, 1];
        /// More fragments.
        MF => view mf, set_mf: MoreFragments = [0, 2, 1];
    }
}

#[cfg(test)]
mod tests {
    use crate::Packed;

    use super::{
        Delay, Flags, Fragment, MoreFragments, Precedence, Protocol, Reliability, Throughput, Tos,
    };

    #[test]
    fn dont_fragment() {
        let mut flags = Flags::ZEROED;
        flags.set_df(Fragment::DONT_FRAGMENT);

        assert_eq!(flags.raw(), 0b010);
        assert_eq!(flags.get(&Flags::DF), 1);
        assert_eq!(flags.df(), Fragment::DONT_FRAGMENT);
        assert_eq!(flags.mf(), MoreFragments::LAST_FRAGMENT);
        assert!(!flags.reserved());
    }

    #[test]
    fn flags_views_agree_with_raw() {
        for raw in 0..=0b111u8 {
            let flags = Flags::new(raw).unwrap();

            let df = raw & 0b010 != 0;
            let mf = raw & 0b001 != 0;

            assert_eq!(flags.reserved(), raw & 0b100 != 0);
            assert_eq!(flags.df() == Fragment::DONT_FRAGMENT, df);
            assert_eq!(flags.mf() == MoreFragments::MORE_FRAGMENTS, mf);
            assert_eq!(flags.get(&Flags::DF), u32::from(df));
            assert_eq!(flags.get(&Flags::MF), u32::from(mf));

            let mut rebuilt = Flags::ZEROED;
            rebuilt.set_reserved(flags.reserved());
            rebuilt.set_df(flags.df());
            rebuilt.set_mf(flags.mf());
            assert_eq!(rebuilt, flags);

            let mut raw_set = Flags::ZEROED;
            raw_set.set(&Flags::DF, u32::from(df)).unwrap();
            raw_set.set(&Flags::MF, u32::from(mf)).unwrap();
            assert_eq!(raw_set.df(), flags.df());
            assert_eq!(raw_set.mf(), flags.mf());
        }
    }

    #[test]
    fn flags_reject_wide_values() {
        let error = Flags::new(0b1000).unwrap_err();
        assert!(error.is_out_of_range());

        let mut flags = Flags::ZEROED;
        let error = flags.set(&Flags::DF, 2).unwrap_err();
        assert!(error.is_out_of_range());
        assert_eq!(flags, Flags::ZEROED);
    }

    #[test]
    fn tos_layout() {
        let mut tos = Tos::ZEROED;
        tos.set_precedence(Precedence::CRITIC_ECP);
        assert_eq!(tos.raw(), 0b1010_0000);

        tos.set_delay(Delay::LOW);
        tos.set_throughput(Throughput::HIGH);
        tos.set_reliability(Reliability::HIGH);
        assert_eq!(tos.raw(), 0b1011_1100);

        tos.set_reserved(0b11).unwrap();
        assert_eq!(tos.raw(), 0b1011_1111);
        assert!(tos.set_reserved(0b100).is_err());

        tos.set_precedence(Precedence::ROUTINE);
        assert_eq!(tos.raw(), 0b0001_1111);
        assert_eq!(tos.delay(), Delay::LOW);
        assert_eq!(tos.reserved(), 0b11);
    }

    #[test]
    fn tos_round_trip_every_byte() {
        for raw in 0..=u8::MAX {
            let tos = Tos::new(raw).unwrap();

            let mut rebuilt = Tos::ZEROED;
            rebuilt.set_precedence(tos.precedence());
            rebuilt.set_delay(tos.delay());
            rebuilt.set_throughput(tos.throughput());
            rebuilt.set_reliability(tos.reliability());
            rebuilt.set_reserved(tos.reserved()).unwrap();

            assert_eq!(rebuilt, tos);
            assert_eq!(u8::from(rebuilt), raw);
        }
    }

    #[test]
    fn precedence_values() {
        for raw in 0..=7u8 {
            let precedence = Precedence::new(raw).unwrap();
            assert_eq!(precedence.get(), raw);

            let mut tos = Tos::ZEROED;
            tos.set_precedence(precedence);
            assert_eq!(tos.get(&Tos::PRECEDENCE), u32::from(raw));
        }

        assert!(Precedence::new(8).unwrap_err().is_out_of_range());
        assert!(Fragment::new(2).is_err());
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(Precedence::CRITIC_ECP.to_string(), "CRITIC/ECP");
        assert_eq!(format!("{:?}", Precedence::CRITIC_ECP), "CRITIC_ECP");
        assert_eq!(Fragment::DONT_FRAGMENT.to_string(), "Don't Fragment");
        assert_eq!(Protocol::TCP.to_string(), "Transmission Control");
        assert_eq!(Protocol::new(250).unwrap().to_string(), "Unknown value: 250");
        assert_eq!(format!("{:?}", Protocol::new(250).unwrap()), "UNKNOWN(250)");

        let mut flags = Flags::ZEROED;
        flags.set_df(Fragment::DONT_FRAGMENT);
        assert_eq!(
            format!("{flags:?}"),
            "Flags { reserved: false, df: DONT_FRAGMENT, mf: LAST_FRAGMENT }"
        );
    }

    #[test]
    fn protocol_numbers() {
        assert_eq!(Protocol::ICMP.get(), 1);
        assert_eq!(Protocol::TCP.get(), 6);
        assert_eq!(Protocol::UDP.get(), 17);
    }
}
