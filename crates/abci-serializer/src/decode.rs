use crate::cursor::Cursor;
use crate::{SerialiserError, TAG_BOOL, TAG_BYTES, TAG_INT, TAG_MAP, TAG_STR};
use shared_types::{Map, Value};

/// Decode bytes produced by [`crate::encode`] back into a map.
///
/// Fails with [`SerialiserError::MalformedEncoding`] on truncated input,
/// an unrecognised tag byte, trailing bytes after the top-level value,
/// or a top-level value that is not a map.
pub fn decode(bytes: &[u8]) -> Result<Map, SerialiserError> {
    let mut cursor = Cursor::new(bytes);
    let value = decode_value(&mut cursor)?;
    if !cursor.at_end() {
        return Err(SerialiserError::MalformedEncoding(
            "trailing bytes after top-level value".into(),
        ));
    }
    match value {
        Value::Map(m) => Ok(m),
        _ => Err(SerialiserError::MalformedEncoding(
            "top-level encoding must be a map".into(),
        )),
    }
}

fn decode_value(cursor: &mut Cursor<'_>) -> Result<Value, SerialiserError> {
    match cursor.read_u8()? {
        TAG_INT => Ok(Value::Int(cursor.read_i64()?)),
        TAG_STR => {
            let bytes = cursor.read_len_prefixed()?;
            let s = String::from_utf8(bytes.to_vec())
                .map_err(|e| SerialiserError::MalformedEncoding(format!("invalid utf-8: {e}")))?;
            Ok(Value::Str(s))
        }
        TAG_BYTES => Ok(Value::Bytes(cursor.read_len_prefixed()?.to_vec())),
        TAG_BOOL => match cursor.read_u8()? {
            0 => Ok(Value::Bool(false)),
            1 => Ok(Value::Bool(true)),
            other => Err(SerialiserError::MalformedEncoding(format!(
                "invalid bool byte: {other}"
            ))),
        },
        TAG_MAP => {
            let count = cursor.read_u32()?;
            let mut map = Map::new();
            for _ in 0..count {
                let key_bytes = cursor.read_len_prefixed()?;
                let key = String::from_utf8(key_bytes.to_vec())
                    .map_err(|e| SerialiserError::MalformedEncoding(format!("invalid utf-8 key: {e}")))?;
                let value = decode_value(cursor)?;
                map.insert(key, value);
            }
            Ok(Value::Map(map))
        }
        other => Err(SerialiserError::MalformedEncoding(format!(
            "unknown tag byte: {other}"
        ))),
    }
}
