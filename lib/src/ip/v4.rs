use core::fmt;
use core::net::Ipv4Addr;

use super::{Flags, Protocol, Tos};

crate::macros::define_header! {
    /// The fixed part of the IPv4 header, including one word of options and
    /// padding.
    pub struct Header[6] {
        /// The format of the internet header, 4 for this header.
        VERSION => raw version, set_version: u8 = [0, 0, 4];
        /// The length of the internet header in 32-bit words.
        IHL => raw ihl, set_ihl: u8 = [0, 4, 4];
        /// The quality of service desired.
        TOS => view tos, set_tos: Tos = [0, 8, 8];
        /// The length of the datagram in octets, including header and data.
        TOTAL_LENGTH => raw total_length, set_total_length: u16 = [0, 16, 16];
        /// An identifying value assigned by the sender to aid in assembling
        /// the fragments of a datagram.
        IDENTIFICATION => raw identification, set_identification: u16 = [1, 0, 16];
        /// Various control flags.
        FLAGS => view flags, set_flags: Flags = [1, 16, 3];
        /// Where in the datagram this fragment belongs, in units of 8 octets.
        FRAGMENT_OFFSET => raw fragment_offset, set_fragment_offset: u16 = [1, 19, 13];
        /// The maximum time the datagram is allowed to remain in the internet
        /// system.
        TTL => raw ttl, set_ttl: u8 = [2, 0, 8];
        /// The next level protocol used in the data portion of the datagram.
        PROTOCOL => view protocol, set_protocol: Protocol = [2, 8, 8];
        /// A checksum on the header only.
        CHECKSUM => raw checksum, set_checksum: u16 = [2, 16, 16];
        /// The source address.
        SOURCE => raw source, set_source: u32 = [3, 0, 32];
        /// The destination address.
        DESTINATION => raw destination, set_destination: u32 = [4, 0, 32];
        /// Options, opaque to this header.
        OPTIONS => raw options, set_options: u32 = [5, 0, 24];
        /// Padding ensuring that the header ends on a 32-bit boundary.
        PADDING => raw padding, set_padding: u8 = [5, 24, 8];
    }
}

impl Header {
    /// Get the source address.
    #[inline]
    pub fn source_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from_bits(self.source())
    }

    /// Set the source address.
    #[inline]
    pub fn set_source_addr(&mut self, addr: Ipv4Addr) {
        crate::packed::insert(self, &Self::SOURCE, addr.to_bits());
    }

    /// Get the destination address.
    #[inline]
    pub fn destination_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from_bits(self.destination())
    }

    /// Set the destination address.
    #[inline]
    pub fn set_destination_addr(&mut self, addr: Ipv4Addr) {
        crate::packed::insert(self, &Self::DESTINATION, addr.to_bits());
    }
}
