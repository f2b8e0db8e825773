use crate::{TAG_BOOL, TAG_BYTES, TAG_INT, TAG_MAP, TAG_STR};
use shared_types::{Map, Value};

/// Canonically encode a map to bytes.
///
/// Encoding the same structural map twice (even on different replicas)
/// always produces the same bytes: integers are fixed-width big-endian,
/// strings/byte-strings are length-prefixed, and map entries are emitted
/// in the `BTreeMap`'s sorted-key order.
pub fn encode(map: &Map) -> Vec<u8> {
    let mut out = Vec::new();
    encode_value(&Value::Map(map.clone()), &mut out);
    out
}

fn encode_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Int(i) => {
            out.push(TAG_INT);
            out.extend_from_slice(&i.to_be_bytes());
        }
        Value::Str(s) => {
            out.push(TAG_STR);
            encode_len_prefixed(s.as_bytes(), out);
        }
        Value::Bytes(b) => {
            out.push(TAG_BYTES);
            encode_len_prefixed(b, out);
        }
        Value::Bool(b) => {
            out.push(TAG_BOOL);
            out.push(u8::from(*b));
        }
        Value::Map(m) => {
            out.push(TAG_MAP);
            out.extend_from_slice(&(m.len() as u32).to_be_bytes());
            for (key, value) in m {
                encode_len_prefixed(key.as_bytes(), out);
                encode_value(value, out);
            }
        }
    }
}

fn encode_len_prefixed(bytes: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    out.extend_from_slice(bytes);
}
