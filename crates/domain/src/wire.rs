//! Wire primitives: big-endian field access and the label-sequence name
//! format, including compression pointers.

mod name;
mod reader;

pub use name::{decode_name, encode_name, encode_name_into, MAX_LABEL_LEN, MAX_NAME_LEN};
pub use reader::WireReader;
