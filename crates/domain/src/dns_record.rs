mod record;
mod record_type;

pub use record::{Record, RecordData};
pub use record_type::{RecordClass, RecordType};

/// First record in section order whose type matches. Arrival order is the
/// only tie-break.
pub fn find_record(records: &[Record], record_type: RecordType) -> Option<&Record> {
    records.iter().find(|r| r.record_type == record_type)
}
