pub mod builders;

pub use builders::MessageBytesBuilder;
