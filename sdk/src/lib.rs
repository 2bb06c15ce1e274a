//! stproto
//!
//! Umbrella crate for code generated by `stprotoc` and for its consumers.
//!
//! - The wire runtime surface (`StBuffer`, `StBufferMut`, `StCodec`,
//!   `DataType`, `ProtoError`), re-exported from `stproto-protocol`
//! - `encode_to_vec` / `decode_from_slice` helpers
//! - The compiler entry points, for embedding schema compilation

pub use stproto_compiler::error::StprotoError;
pub use stproto_protocol::{DataType, ProtoError, StBuffer, StBufferMut, StCodec};

/// Encode a codec value into a standalone byte vector.
pub fn encode_to_vec<T: StCodec>(value: &T) -> Vec<u8> {
    let mut bf = StBufferMut::new();
    value.write_data_buf(&mut bf);
    bf.data()
}

/// Decode a codec value from a byte slice, starting from its zero value.
pub fn decode_from_slice<T: StCodec + Default>(data: &[u8]) -> Result<T, ProtoError> {
    let mut value = T::default();
    let mut bf = StBuffer::new(data);
    value.read_data_buf(&mut bf)?;
    Ok(value)
}

/// Pretty-print a parsed schema model as JSON.
pub fn schema_to_json(schema: &stproto_compiler::types::Schema) -> String {
    serde_json::to_string_pretty(schema).unwrap_or_default()
}

pub mod compiler {
    pub use stproto_compiler::{compile_schema, compile_schema_to_rust, compile_text};
}

pub mod error {
    pub use stproto_compiler::error::StprotoError;
    pub use stproto_protocol::ProtoError;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Ping {
        n: i32,
    }

    impl StCodec for Ping {
        fn write_data_buf(&self, bf: &mut StBufferMut) {
            bf.write_struct_length(1);
            bf.write_tag(0);
            bf.write_data_type(DataType::Int);
            bf.write_var_int(self.n);
        }

        fn read_data_buf(&mut self, bf: &mut StBuffer) -> Result<(), ProtoError> {
            let count = bf.read_struct_length()?;
            for _ in 0..count {
                let tag = bf.read_tag()?;
                let data_type = bf.read_data_type()?;
                match tag {
                    0 => {
                        let d1 = bf.read_var_int()?;
                        self.n = d1;
                    }
                    _ => bf.skip_value(data_type)?,
                }
            }
            Ok(())
        }
    }

    #[test]
    fn helpers_round_trip() {
        let ping = Ping { n: -7 };
        let bytes = encode_to_vec(&ping);
        assert_eq!(bytes, [1, 0, 3, 13]);
        let back: Ping = decode_from_slice(&bytes).unwrap();
        assert_eq!(back, ping);
    }

    #[test]
    fn decode_propagates_framing_errors() {
        // declared one field, payload missing
        let err = decode_from_slice::<Ping>(&[1, 0, 3]).unwrap_err();
        assert_eq!(err, ProtoError::UnexpectedEof);
    }

    #[test]
    fn schema_dump_is_json() {
        let schema = stproto_compiler::compile_schema("demo", "struct p {\n  x int\n}").unwrap();
        let json = schema_to_json(&schema);
        assert!(json.contains("\"name\": \"p\""));
    }
}
