use crate::dns_record::{find_record, Record};
use crate::header::{Header, HeaderFlags};
use crate::wire::WireReader;
use crate::{DomainError, DomainName, Question, RecordType};

/// One DNS message: header plus the four record sections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Packet {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authorities: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl Packet {
    /// Single-question query in class `IN`.
    pub fn query(
        id: u16,
        name: impl Into<DomainName>,
        record_type: RecordType,
        flags: HeaderFlags,
    ) -> Self {
        Self {
            header: Header {
                id,
                flags,
                num_questions: 1,
                ..Header::default()
            },
            questions: vec![Question::new(name, record_type)],
            ..Self::default()
        }
    }

    /// Sets every header count from the current section lengths.
    pub fn sync_counts(&mut self) -> Result<(), DomainError> {
        self.header.num_questions = section_count("question", self.questions.len())?;
        self.header.num_answers = section_count("answer", self.answers.len())?;
        self.header.num_authorities = section_count("authority", self.authorities.len())?;
        self.header.num_additionals = section_count("additional", self.additionals.len())?;
        Ok(())
    }

    /// Encodes header, questions, answers, authorities and additionals in
    /// that order. The header counts must match the section lengths.
    pub fn encode(&self) -> Result<Vec<u8>, DomainError> {
        self.check_counts()?;

        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.header.encode());
        for question in &self.questions {
            question.encode_into(&mut buf)?;
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.encode_into(&mut buf)?;
        }
        Ok(buf)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, DomainError> {
        let mut reader = WireReader::new(bytes);
        Self::decode_from(&mut reader)
    }

    /// Reads exactly as many entries per section as the header announces.
    /// Compression pointers anywhere in the message resolve against the
    /// bytes `reader` has already consumed.
    pub fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, DomainError> {
        let header = Header::decode(reader)?;

        let questions = (0..header.num_questions)
            .map(|_| Question::decode(reader))
            .collect::<Result<Vec<_>, _>>()?;
        let answers = decode_records(reader, header.num_answers)?;
        let authorities = decode_records(reader, header.num_authorities)?;
        let additionals = decode_records(reader, header.num_additionals)?;

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    pub fn find_answer(&self, record_type: RecordType) -> Option<&Record> {
        find_record(&self.answers, record_type)
    }

    fn check_counts(&self) -> Result<(), DomainError> {
        let sections = [
            ("question", self.header.num_questions, self.questions.len()),
            ("answer", self.header.num_answers, self.answers.len()),
            ("authority", self.header.num_authorities, self.authorities.len()),
            ("additional", self.header.num_additionals, self.additionals.len()),
        ];
        for (section, declared, actual) in sections {
            if declared as usize != actual {
                return Err(DomainError::Encoding(format!(
                    "header declares {} {} record(s) but section holds {}",
                    declared, section, actual
                )));
            }
        }
        Ok(())
    }
}

fn decode_records(reader: &mut WireReader<'_>, count: u16) -> Result<Vec<Record>, DomainError> {
    (0..count).map(|_| Record::decode(reader)).collect()
}

fn section_count(section: &str, len: usize) -> Result<u16, DomainError> {
    u16::try_from(len).map_err(|_| {
        DomainError::Encoding(format!(
            "{} section holds {} entries, limit is {}",
            section,
            len,
            u16::MAX
        ))
    })
}
