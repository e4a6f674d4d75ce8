use super::{RecordClass, RecordType};
use crate::wire::{decode_name, encode_name, encode_name_into, WireReader};
use crate::{DomainError, DomainName};
use std::fmt;
use std::net::Ipv4Addr;

/// Record payload, interpreted according to the record's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    /// `A`: four address bytes.
    Address(Ipv4Addr),
    /// `NS`: target host, itself name-encoded on the wire.
    NameServer(DomainName),
    Opaque(Vec<u8>),
}

impl RecordData {
    /// A and NS must carry their structured payload; every other type is opaque.
    fn encode(&self, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        match (record_type, self) {
            (RecordType::A, RecordData::Address(ip)) => Ok(ip.octets().to_vec()),
            (RecordType::NS, RecordData::NameServer(host)) => encode_name(host),
            (RecordType::A | RecordType::NS, _)
            | (_, RecordData::Address(_) | RecordData::NameServer(_)) => {
                Err(DomainError::Encoding(format!(
                    "{} record cannot carry {} data",
                    record_type,
                    self.kind()
                )))
            }
            (_, RecordData::Opaque(bytes)) => Ok(bytes.clone()),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            RecordData::Address(_) => "address",
            RecordData::NameServer(_) => "nameserver",
            RecordData::Opaque(_) => "opaque",
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Address(ip) => write!(f, "{}", ip),
            RecordData::NameServer(host) => write!(f, "{}", host),
            RecordData::Opaque(bytes) => {
                write!(f, "\\# {}", bytes.len())?;
                if !bytes.is_empty() {
                    write!(f, " ")?;
                    for b in bytes {
                        write!(f, "{:02x}", b)?;
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: DomainName,
    pub record_type: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl Record {
    pub fn a(name: impl Into<DomainName>, ttl: u32, ip: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            ttl,
            data: RecordData::Address(ip),
        }
    }

    pub fn ns(name: impl Into<DomainName>, ttl: u32, host: impl Into<DomainName>) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::NS,
            class: RecordClass::IN,
            ttl,
            data: RecordData::NameServer(host.into()),
        }
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match &self.data {
            RecordData::Address(ip) => Some(*ip),
            _ => None,
        }
    }

    pub fn name_server(&self) -> Option<&DomainName> {
        match &self.data {
            RecordData::NameServer(host) => Some(host),
            _ => None,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::new();
        self.encode_into(&mut buf)?;
        Ok(buf)
    }

    pub fn encode_into(&self, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        encode_name_into(&self.name, buf)?;
        let data = self.data.encode(self.record_type)?;
        let data_len = u16::try_from(data.len()).map_err(|_| {
            DomainError::Encoding(format!(
                "record data for '{}' is {} bytes, limit is {}",
                self.name,
                data.len(),
                u16::MAX
            ))
        })?;
        buf.extend_from_slice(&self.record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.class.to_u16().to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());
        buf.extend_from_slice(&data_len.to_be_bytes());
        buf.extend_from_slice(&data);
        Ok(())
    }

    pub fn decode(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        let name = decode_name(reader)?;
        let record_type = RecordType::from_u16(reader.read_u16()?);
        let class = RecordClass::from_u16(reader.read_u16()?);
        let ttl = reader.read_u32()?;
        let data_len = reader.read_u16()? as usize;
        let data_offset = reader.position();
        let mut data_reader = reader.split_off(data_len)?;

        let data = match record_type {
            RecordType::A => {
                let bytes = data_reader.read_bytes(data_len)?;
                let octets: [u8; 4] = bytes.try_into().map_err(|_| {
                    DomainError::Decode(format!(
                        "A record for '{}' has {} data bytes, expected 4",
                        name, data_len
                    ))
                })?;
                RecordData::Address(Ipv4Addr::from(octets))
            }
            RecordType::NS => {
                let host = decode_name(&mut data_reader)?;
                if !data_reader.is_empty() {
                    return Err(DomainError::Decode(format!(
                        "NS record data at offset {} has {} trailing byte(s)",
                        data_offset,
                        data_reader.remaining()
                    )));
                }
                RecordData::NameServer(host)
            }
            _ => RecordData::Opaque(data_reader.read_bytes(data_len)?.to_vec()),
        };

        Ok(Self {
            name,
            record_type,
            class,
            ttl,
            data,
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.class, self.record_type, self.data
        )
    }
}
