use super::WireReader;
use crate::{DomainError, DomainName};

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const LABEL_TYPE_MASK: u8 = 0b1100_0000;
const POINTER_TAG: u8 = 0b1100_0000;
const POINTER_OFFSET_MASK: u8 = 0b0011_1111;

/// Encodes `name` as length-prefixed labels terminated by a zero byte.
pub fn encode_name(name: &DomainName) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(name.as_bytes().len() + 2);
    encode_name_into(name, &mut buf)?;
    Ok(buf)
}

pub fn encode_name_into(name: &DomainName, buf: &mut Vec<u8>) -> Result<(), DomainError> {
    let start = buf.len();
    for label in name.labels() {
        if label.is_empty() {
            return Err(DomainError::Encoding(format!("empty label in name '{}'", name)));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::Encoding(format!(
                "label of {} bytes exceeds {} in name '{}'",
                label.len(),
                MAX_LABEL_LEN,
                name
            )));
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label);
    }
    buf.push(0);

    let encoded_len = buf.len() - start;
    if encoded_len > MAX_NAME_LEN {
        return Err(DomainError::Encoding(format!(
            "name '{}' encodes to {} bytes, limit is {}",
            name, encoded_len, MAX_NAME_LEN
        )));
    }
    Ok(())
}

/// Decodes one name starting at the reader's position.
///
/// A compression pointer ends the name: decoding resumes at the pointer's
/// offset inside the reader's backing buffer and stops at the next
/// terminator. Pointers must point strictly backwards, which rules out
/// self-references and cycles. The reader is left just past the
/// terminator or pointer that ended the name in its own bytes.
pub fn decode_name(reader: &mut WireReader<'_>) -> Result<DomainName, DomainError> {
    let mut name: Vec<u8> = Vec::new();
    let mut jumped: Option<WireReader<'_>> = None;

    loop {
        let cursor = match jumped.as_mut() {
            Some(target) => target,
            None => &mut *reader,
        };
        let start = cursor.position();
        let len = cursor.read_u8()?;

        match len & LABEL_TYPE_MASK {
            0 => {
                if len == 0 {
                    break;
                }
                let label = cursor.read_bytes(len as usize)?;
                if !name.is_empty() {
                    name.push(b'.');
                }
                name.extend_from_slice(label);
                // Wire length counts one length byte per label plus the terminator.
                if name.len() + 2 > MAX_NAME_LEN {
                    return Err(DomainError::Decode(format!(
                        "name at offset {} exceeds {} bytes",
                        start, MAX_NAME_LEN
                    )));
                }
            }
            POINTER_TAG => {
                let low = cursor.read_u8()?;
                let offset = (((len & POINTER_OFFSET_MASK) as usize) << 8) | low as usize;
                let backing = cursor.backing().ok_or_else(|| {
                    DomainError::Compression(format!(
                        "pointer at offset {} with no message buffer to resolve it",
                        start
                    ))
                })?;
                if offset >= backing.len() {
                    return Err(DomainError::Compression(format!(
                        "pointer at offset {} targets {}, only {} byte(s) received",
                        start,
                        offset,
                        backing.len()
                    )));
                }
                if offset >= start {
                    return Err(DomainError::Compression(format!(
                        "pointer at offset {} targets {}, pointers must point backwards",
                        start, offset
                    )));
                }
                jumped = Some(WireReader::at_offset(backing, offset));
            }
            other => {
                return Err(DomainError::Decode(format!(
                    "reserved label type {:#04x} at offset {}",
                    other, start
                )));
            }
        }
    }

    Ok(DomainName::from_bytes(name))
}
