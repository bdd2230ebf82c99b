//! Fail-fast single-cursor reader.
//!
//! Kept as a distinct code path from the batch engine on purpose: here a
//! single bad step anywhere aborts the whole lookup, where [`crate::get`]
//! drops the bad branch and keeps going. Call sites depend on both
//! behaviors.

use serde_json::Value;

use crate::parser::repetition_index;

/// Read a value by path with a single traversal cursor.
///
/// Repetition segments (`name[2]`) descend by key and then by index.
/// String keys applied to a sequence broadcast element-wise and build a
/// new sequence of the results; `*[i]` indexes every value of a mapping;
/// a bare `*` over a mapping materializes its values as a sequence (over
/// a sequence it is a no-op). Any missing key, out-of-range index, or
/// shape mismatch returns `None` immediately.
pub fn get_strict(doc: &Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let mut data = doc.clone();
    for segment in path.split('/') {
        data = match repetition_index(segment) {
            Some(rep) if rep.key != "*" => {
                let keyed = descend_key(&data, rep.key)?;
                descend_pos(&keyed, rep.index)?
            }
            Some(rep) => {
                let map = data.as_object()?;
                let mut out = Vec::with_capacity(map.len());
                for value in map.values() {
                    out.push(descend_pos(value, rep.index)?);
                }
                Value::Array(out)
            }
            None if segment == "*" => match data {
                Value::Array(_) => data,
                Value::Object(map) => Value::Array(map.into_iter().map(|(_, v)| v).collect()),
                _ => return None,
            },
            None => descend_key(&data, segment)?,
        };
    }
    Some(data)
}

/// Key step: mapping lookup, broadcast element-wise over sequences.
fn descend_key(data: &Value, key: &str) -> Option<Value> {
    match data {
        Value::Array(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            for item in arr {
                out.push(descend_key(item, key)?);
            }
            Some(Value::Array(out))
        }
        Value::Object(map) => map.get(key).cloned(),
        _ => None,
    }
}

/// Index step: direct sequence access, negative indices wrap.
fn descend_pos(data: &Value, index: isize) -> Option<Value> {
    let arr = data.as_array()?;
    let idx = if index < 0 { arr.len() as isize + index } else { index };
    if idx < 0 {
        return None;
    }
    arr.get(idx as usize).cloned()
}
