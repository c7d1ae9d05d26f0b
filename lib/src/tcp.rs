//! Transmission Control Protocol headers.

use core::fmt;

crate::macros::define_header! {
    /// The fixed part of the TCP header with the control bits of RFC 3168.
    pub struct Header[5] {
        /// The source port number.
        SOURCE_PORT => raw source_port, set_source_port: u16 = [0, 0, 16];
        /// The destination port number.
        DESTINATION_PORT => raw destination_port, set_destination_port: u16 = [0, 16, 16];
        /// The sequence number of the first data octet in this segment.
        SEQUENCE => raw sequence, set_sequence: u32 = [1, 0, 32];
        /// The next sequence number the sender of the segment is expecting to
        /// receive.
        ACKNOWLEDGMENT => raw acknowledgment, set_acknowledgment: u32 = [2, 0, 32];
        /// The number of 32-bit words in the TCP header.
        DATA_OFFSET => raw data_offset, set_data_offset: u8 = [3, 0, 4];
        /// Reserved for future use, must be zero.
        RESERVED => raw reserved, set_reserved: u8 = [3, 4, 4];
        /// Congestion Window Reduced.
        CWR => flag cwr, set_cwr: bool = [3, 8, 1];
        /// ECN-Echo.
        ECE => flag ece, set_ece: bool = [3, 9, 1];
        /// Urgent Pointer field significant.
        URG => flag urg, set_urg: bool = [3, 10, 1];
        /// Acknowledgment field significant.
        ACK => flag ack, set_ack: bool = [3, 11, 1];
        /// Push Function.
        PSH => flag psh, set_psh: bool = [3, 12, 1];
        /// Reset the connection.
        RST => flag rst, set_rst: bool = [3, 13, 1];
        /// Synchronize sequence numbers.
        SYN => flag syn, set_syn: bool = [3, 14, 1];
        /// No more data from sender.
        FIN => flag fin, set_fin: bool = [3, 15, 1];
        /// The number of data octets the sender of this segment is willing to
        /// accept.
        WINDOW => raw window, set_window: u16 = [3, 16, 16];
        /// Checksum over the pseudo header, header and data.
        CHECKSUM => raw checksum, set_checksum: u16 = [4, 0, 16];
        /// Points to the sequence number of the octet following the urgent
        /// data.
        URGENT_POINTER => raw urgent_pointer, set_urgent_pointer: u16 = [4, 16, 16];
    }
}

crate::macros::define_header! {
    /// The fixed part of the TCP header with the control bits of RFC 793.
    ///
    /// Identical to [`Header`], except that the bits used by congestion control
    /// are part of the reserved field.
    pub struct Rfc793Header[5] {
        /// The source port number.
        SOURCE_PORT => raw source_port, set_source_port: u16 = [0, 0, 16];
        /// The destination port number.
        DESTINATION_PORT => raw destination_port, set_destination_port: u16 = [0, 16, 16];
        /// The sequence number of the first data octet in this segment.
        SEQUENCE => raw sequence, set_sequence: u32 = [1, 0, 32];
        /// The next sequence number the sender of the segment is expecting to
        /// receive.
        ACKNOWLEDGMENT => raw acknowledgment, set_acknowledgment: u32 = [2, 0, 32];
        /// The number of 32-bit words in the TCP header.
        DATA_OFFSET => raw data_offset, set_data_offset: u8 = [3, 0, 4];
        /// Reserved for future use, must be zero.
        RESERVED => raw reserved, set_reserved: u8 = [3, 4, 6];
        /// Urgent Pointer field significant.
        URG => flag urg, set_urg: bool = [3, 10, 1];
        /// Acknowledgment field significant.
        ACK => flag ack, set_ack: bool = [3, 11, 1];
        /// Push Function.
        PSH => flag psh, set_psh: bool = [3, 12, 1];
        /// Reset the connection.
        RST => flag rst, set_rst: bool = [3, 13, 1];
        /// Synchronize sequence numbers.
        SYN => flag syn, set_syn: bool = [3, 14, 1];
        /// No more data from sender.
        FIN => flag fin, set_fin: bool = [3, 15, 1];
        /// The number of data octets the sender of this segment is willing to
        /// accept.
        WINDOW => raw window, set_window: u16 = [3, 16, 16];
        /// Checksum over the pseudo header, header and data.
        CHECKSUM => raw checksum, set_checksum: u16 = [4, 0, 16];
        /// Points to the sequence number of the octet following the urgent
        /// data.
        URGENT_POINTER => raw urgent_pointer, set_urgent_pointer: u16 = [4, 16, 16];
    }
}

impl From<Header> for Rfc793Header {
    #[inline]
    fn from(header: Header) -> Self {
        Self::from_array(header.to_array())
    }
}

impl From<Rfc793Header> for Header {
    #[inline]
    fn from(header: Rfc793Header) -> Self {
        Self::from_array(header.to_array())
    }
}
