/// Supplies transaction IDs for outgoing queries.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> u16;
}
