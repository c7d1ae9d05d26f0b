//! User Datagram Protocol header.

use core::fmt;

crate::macros::define_header! {
    /// The UDP header.
    pub struct Header[2] {
        /// The port of the sending process.
        SOURCE_PORT => raw source_port, set_source_port: u16 = [0, 0, 16];
        /// The port of the receiving process.
        DESTINATION_PORT => raw destination_port, set_destination_port: u16 = [0, 16, 16];
        /// The length in octets of this user datagram including this header.
        LENGTH => raw length, set_length: u16 = [1, 0, 16];
        /// Checksum over the pseudo header, header and data.
        CHECKSUM => raw checksum, set_checksum: u16 = [1, 16, 16];
    }
}

#[cfg(test)]
mod tests {
    use crate::Packed;

    use super::Header;

    #[test]
    fn layout() {
        let mut header = Header::ZEROED;
        header.set_source_port(0xabcd).unwrap();
        header.set_destination_port(53).unwrap();
        header.set_length(0x0010).unwrap();
        header.set_checksum(0x1234).unwrap();

        assert_eq!(
            header.as_bytes(),
            &[0xab, 0xcd, 0x00, 0x35, 0x00, 0x10, 0x12, 0x34]
        );
        assert_eq!(Header::from_array(header.to_array()), header);
    }

    #[test]
    fn fields_are_independent() {
        let mut header = Header::ZEROED;

        for field in Header::FIELDS {
            header.set(field, 0xffff).unwrap();
        }

        header.set_destination_port(0).unwrap();
        header.set_checksum(0).unwrap();

        assert_eq!(header.source_port(), 0xffff);
        assert_eq!(header.length(), 0xffff);
        assert_eq!(header.as_bytes(), &[0xff, 0xff, 0, 0, 0xff, 0xff, 0, 0]);
    }

    #[test]
    fn generic_access() {
        let mut header = Header::ZEROED;
        let field = Header::field("length").unwrap();
        header.set(field, 8).unwrap();
        assert_eq!(header.length(), 8);

        let error = header.set(field, 0x1_0000).unwrap_err();
        assert!(error.is_out_of_range());
        assert_eq!(header.length(), 8);

        assert_eq!(header.word(1), Some(0x0008_0000));
        assert_eq!(header.word(2), None);
    }
}
