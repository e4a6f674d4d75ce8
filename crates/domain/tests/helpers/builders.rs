#![allow(dead_code)]

/// Assembles raw message bytes by hand, for feeding the decoder wire data
/// the encoder never produces (pointers, malformed fields).
pub struct MessageBytesBuilder {
    bytes: Vec<u8>,
}

impl MessageBytesBuilder {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn header(mut self, id: u16, counts: [u16; 4]) -> Self {
        self.bytes.extend_from_slice(&id.to_be_bytes());
        self.bytes.extend_from_slice(&0x8000u16.to_be_bytes());
        for count in counts {
            self.bytes.extend_from_slice(&count.to_be_bytes());
        }
        self
    }

    pub fn labels(mut self, labels: &[&str]) -> Self {
        for label in labels {
            self.bytes.push(label.len() as u8);
            self.bytes.extend_from_slice(label.as_bytes());
        }
        self
    }

    pub fn terminator(mut self) -> Self {
        self.bytes.push(0);
        self
    }

    pub fn pointer(mut self, offset: u16) -> Self {
        self.bytes.extend_from_slice(&(0xC000 | offset).to_be_bytes());
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.bytes.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.bytes.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Type, class IN, TTL and data length of a resource record.
    pub fn record_fields(self, record_type: u16, ttl: u32, data_len: u16) -> Self {
        self.u16(record_type).u16(1).u32(ttl).u16(data_len)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}
