//! Runtime support for the stproto wire format.
//!
//! The format is self-describing: a struct is written as a one-byte field
//! count followed by `(tag, type marker, payload)` triples, where the tag is
//! the field's declaration position and the marker is one of the ten
//! [`DataType`] codes. Every payload is self-delimiting, so a decoder can
//! skip fields it does not know about.
//!
//! ```
//! use stproto_protocol::{StBuffer, StBufferMut};
//!
//! let mut bf = StBufferMut::new();
//! bf.write_string("🍕");
//! bf.write_var_float(123.456);
//! let data = bf.data();
//!
//! let mut bb = StBuffer::new(&data);
//! assert_eq!(bb.read_string().unwrap(), "🍕");
//! assert_eq!(bb.read_var_float().unwrap(), 123.456);
//! ```

pub mod buffer;
pub mod error;

pub use buffer::{StBuffer, StBufferMut};
pub use error::ProtoError;

/// Wire type markers. Each struct field carries its marker on the wire, as
/// do list elements and map keys/values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DataType {
    Byte   = 1,
    Bool   = 2,
    Int    = 3,
    Long   = 4,
    Float  = 5,
    Double = 6,
    String = 7,
    List   = 8,
    Map    = 9,
    Struct = 10,
}

impl DataType {
    /// Decode a marker byte. Returns `None` for bytes outside the ten codes.
    pub fn from_byte(value: u8) -> Option<DataType> {
        match value {
            1 => Some(DataType::Byte),
            2 => Some(DataType::Bool),
            3 => Some(DataType::Int),
            4 => Some(DataType::Long),
            5 => Some(DataType::Float),
            6 => Some(DataType::Double),
            7 => Some(DataType::String),
            8 => Some(DataType::List),
            9 => Some(DataType::Map),
            10 => Some(DataType::Struct),
            _ => None,
        }
    }
}

/// Implemented by every generated struct. `write_data_buf` appends the
/// struct's framed fields to the buffer and cannot fail; `read_data_buf`
/// populates `self` in place and propagates any framing error.
pub trait StCodec {
    fn write_data_buf(&self, bf: &mut StBufferMut);
    fn read_data_buf(&mut self, bf: &mut StBuffer) -> Result<(), ProtoError>;
}
