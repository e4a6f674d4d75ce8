use rootwalk_application::ports::IdSource;

/// Uniformly random transaction IDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl RandomIdSource {
    pub fn new() -> Self {
        Self
    }
}

impl IdSource for RandomIdSource {
    fn next_id(&self) -> u16 {
        fastrand::u16(..)
    }
}
