//! Batch fan-out read engine.

use serde_json::Value;

use crate::parser::parse_path;
use crate::types::PathCommand;

/// Execute compiled commands against a document.
///
/// The working batch starts as the singleton `[doc]`; every command maps
/// the current batch to the next one. Items that do not match a
/// command's shape (a key lookup on a non-mapping, an index past the end
/// of a sequence) are silently dropped, never reported.
pub fn eval<'a>(commands: &[PathCommand], doc: &'a Value) -> Vec<&'a Value> {
    let mut batch = vec![doc];
    for command in commands {
        batch = step(command, &batch);
    }
    batch
}

fn step<'a>(command: &PathCommand, batch: &[&'a Value]) -> Vec<&'a Value> {
    let mut next = Vec::new();
    for &item in batch {
        match command {
            PathCommand::DictKey(key) => {
                if let Value::Object(map) = item {
                    if let Some(child) = map.get(key) {
                        next.push(child);
                    }
                }
            }
            PathCommand::ListIndex(index) => {
                if let Value::Array(arr) = item {
                    if let Some(child) = resolve_index(arr, *index) {
                        next.push(child);
                    }
                }
            }
            PathCommand::ListFlat => {
                if let Value::Array(arr) = item {
                    next.extend(arr.iter());
                }
            }
            PathCommand::DictFlat => {
                if let Value::Object(map) = item {
                    next.extend(map.values());
                }
            }
        }
    }
    next
}

/// Resolve a possibly-negative index against one sequence's own length.
fn resolve_index(arr: &[Value], index: isize) -> Option<&Value> {
    let idx = if index < 0 { arr.len() as isize + index } else { index };
    if idx < 0 {
        return None;
    }
    arr.get(idx as usize)
}

/// Read a value by path, with wildcard fan-out.
///
/// Returns `None` when nothing matches; supply a fallback with
/// [`Option::unwrap_or`]. A path without a wildcard yields its first
/// match alone. A path containing `*` or `[*]` always yields a
/// `Value::Array` of every match, even when only one value matched;
/// callers rely on this asymmetry.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let doc = json!({"users": [{"name": "Al"}, {"name": "Bo"}]});
/// assert_eq!(deeppath::get(&doc, "users[0]/name"), Some(json!("Al")));
/// assert_eq!(deeppath::get(&doc, "users/*/name"), Some(json!(["Al", "Bo"])));
/// assert_eq!(deeppath::get(&doc, "users[9]/name"), None);
/// ```
pub fn get(doc: &Value, path: &str) -> Option<Value> {
    let commands = parse_path(path);
    let matches = eval(&commands, doc);
    if matches.is_empty() {
        return None;
    }
    if commands.iter().any(|c| c.is_flat()) {
        Some(Value::Array(matches.into_iter().cloned().collect()))
    } else {
        Some(matches[0].clone())
    }
}
