use crate::wire::WireReader;
use crate::DomainError;
use std::fmt;

pub const HEADER_LEN: usize = 12;

/// The 16-bit flags word of the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HeaderFlags(u16);

impl HeaderFlags {
    pub const RESPONSE: u16 = 1 << 15;
    pub const AUTHORITATIVE: u16 = 1 << 10;
    pub const TRUNCATED: u16 = 1 << 9;
    pub const RECURSION_DESIRED: u16 = 1 << 8;
    pub const RECURSION_AVAILABLE: u16 = 1 << 7;

    const RCODE_MASK: u16 = 0x000F;

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub const fn recursion_desired() -> Self {
        Self(Self::RECURSION_DESIRED)
    }

    pub fn contains(&self, flag: u16) -> bool {
        self.0 & flag == flag
    }

    pub fn set(&mut self, flag: u16, enabled: bool) {
        if enabled {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    pub fn rcode(&self) -> u8 {
        (self.0 & Self::RCODE_MASK) as u8
    }
}

impl fmt::Display for HeaderFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::RESPONSE, "qr"),
            (Self::AUTHORITATIVE, "aa"),
            (Self::TRUNCATED, "tc"),
            (Self::RECURSION_DESIRED, "rd"),
            (Self::RECURSION_AVAILABLE, "ra"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "[{}] rcode={}", set.join(" "), self.rcode())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: HeaderFlags,
    pub num_questions: u16,
    pub num_answers: u16,
    pub num_authorities: u16,
    pub num_additionals: u16,
}

impl Header {
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let mut buf = [0u8; HEADER_LEN];
        let fields = [
            self.id,
            self.flags.bits(),
            self.num_questions,
            self.num_answers,
            self.num_authorities,
            self.num_additionals,
        ];
        for (chunk, field) in buf.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }
        buf
    }

    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        Ok(Self {
            id: reader.read_u16()?,
            flags: HeaderFlags::from_bits(reader.read_u16()?),
            num_questions: reader.read_u16()?,
            num_answers: reader.read_u16()?,
            num_authorities: reader.read_u16()?,
            num_additionals: reader.read_u16()?,
        })
    }
}
