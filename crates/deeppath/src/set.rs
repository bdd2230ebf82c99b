//! In-place writer.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::parser::repetition_index;

/// Error from [`set`].
///
/// A failed write is not rolled back: containers created before the
/// failing step stay in the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetError {
    /// The index skips past the one-slot append position.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    /// A plain segment landed on something that is not a mapping.
    #[error("cannot descend into non-mapping value at segment '{0}'")]
    NotAMapping(String),
    /// A repetition segment's key holds something that is not a sequence.
    #[error("expected a sequence at segment '{0}'")]
    NotASequence(String),
}

/// Write `value` at `path`, creating intermediate containers as needed.
///
/// Plain segments create empty mappings on the way down. Repetition
/// segments (`name[2]`) create a one-element sequence `[{}]` when the
/// key is absent, append one element when the index equals the current
/// length, and otherwise descend into the existing element. The final
/// segment overwrites or appends the same way with `value` itself.
/// Indices further out than the append position are reported as
/// [`SetError::IndexOutOfRange`].
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let mut doc = json!({});
/// deeppath::set(&mut doc, "items[0]/v", json!("x")).unwrap();
/// deeppath::set(&mut doc, "items[1]/v", json!("y")).unwrap();
/// assert_eq!(doc, json!({"items": [{"v": "x"}, {"v": "y"}]}));
/// ```
pub fn set(doc: &mut Value, path: &str, value: Value) -> Result<(), SetError> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let segments: Vec<&str> = path.split('/').collect();
    let Some((&last, intermediate)) = segments.split_last() else {
        return Ok(());
    };

    let mut data = doc;
    for &segment in intermediate {
        data = match repetition_index(segment) {
            None => {
                let map = as_map_mut(data, segment)?;
                map.entry(segment.to_string())
                    .or_insert_with(empty_mapping)
            }
            Some(rep) => {
                let map = as_map_mut(data, segment)?;
                let slot = map
                    .entry(rep.key.to_string())
                    .or_insert_with(|| Value::Array(vec![empty_mapping()]));
                let arr = slot
                    .as_array_mut()
                    .ok_or_else(|| SetError::NotASequence(segment.to_string()))?;
                if rep.index == arr.len() as isize {
                    arr.push(empty_mapping());
                }
                element_mut(arr, rep.index)?
            }
        };
    }

    match repetition_index(last) {
        None => {
            let map = as_map_mut(data, last)?;
            map.insert(last.to_string(), value);
        }
        Some(rep) => {
            let map = as_map_mut(data, last)?;
            match map.get_mut(rep.key) {
                None => {
                    map.insert(rep.key.to_string(), Value::Array(vec![value]));
                }
                Some(slot) => {
                    let arr = slot
                        .as_array_mut()
                        .ok_or_else(|| SetError::NotASequence(last.to_string()))?;
                    if rep.index == arr.len() as isize {
                        arr.push(value);
                    } else {
                        *element_mut(arr, rep.index)? = value;
                    }
                }
            }
        }
    }
    Ok(())
}

fn empty_mapping() -> Value {
    Value::Object(Map::new())
}

fn as_map_mut<'a>(
    data: &'a mut Value,
    segment: &str,
) -> Result<&'a mut Map<String, Value>, SetError> {
    match data {
        Value::Object(map) => Ok(map),
        _ => Err(SetError::NotAMapping(segment.to_string())),
    }
}

/// Existing element at `index`, negative indices wrapping.
fn element_mut(arr: &mut [Value], index: isize) -> Result<&mut Value, SetError> {
    let len = arr.len();
    let idx = if index < 0 { index + len as isize } else { index };
    if idx < 0 || idx as usize >= len {
        return Err(SetError::IndexOutOfRange { index, len });
    }
    Ok(&mut arr[idx as usize])
}
