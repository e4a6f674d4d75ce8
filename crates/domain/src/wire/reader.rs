use crate::DomainError;

/// Where compression pointers read by this cursor are resolved.
#[derive(Debug, Clone, Copy)]
enum Backing<'a> {
    /// The reader's own consumed prefix; the reader starts at message offset 0.
    Consumed,
    /// Message bytes received so far, handed down from an enclosing reader.
    Shared(&'a [u8]),
    Detached,
}

/// Big-endian cursor over (part of) one DNS message.
///
/// Every byte handed out by the cursor stays addressable through
/// [`WireReader::backing`], so a name decoded later in the same message can
/// follow a pointer into a question or record that was already parsed. A
/// reader never outlives the message it was created for.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
    origin: usize,
    backing: Backing<'a>,
}

impl<'a> WireReader<'a> {
    /// Reader over a complete message; pointers resolve against the bytes
    /// this reader has consumed so far.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            origin: 0,
            backing: Backing::Consumed,
        }
    }

    /// Reader with no message context. Any compression pointer is an error.
    pub fn detached(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            origin: 0,
            backing: Backing::Detached,
        }
    }

    /// Reader over `message` positioned at `offset`, used to follow a pointer.
    pub(crate) fn at_offset(message: &'a [u8], offset: usize) -> Self {
        Self {
            data: message,
            pos: offset,
            origin: 0,
            backing: Backing::Shared(message),
        }
    }

    /// Absolute offset of the next unread byte within the message.
    pub fn position(&self) -> usize {
        self.origin + self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Message bytes available for pointer resolution, if any.
    pub fn backing(&self) -> Option<&'a [u8]> {
        match self.backing {
            Backing::Consumed => Some(&self.data[..self.pos]),
            Backing::Shared(bytes) => Some(bytes),
            Backing::Detached => None,
        }
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        if self.remaining() < len {
            return Err(DomainError::Truncated {
                needed: len - self.remaining(),
                offset: self.position(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Consumes `len` bytes and returns a reader over just those bytes.
    ///
    /// The sub-reader keeps absolute positions and shares this reader's
    /// backing buffer, including the bytes it covers.
    pub fn split_off(&mut self, len: usize) -> Result<WireReader<'a>, DomainError> {
        let origin = self.position();
        let data = self.read_bytes(len)?;
        let backing = match self.backing() {
            Some(bytes) => Backing::Shared(bytes),
            None => Backing::Detached,
        };
        Ok(WireReader {
            data,
            pos: 0,
            origin,
            backing,
        })
    }
}
