//! Depth-first leaf enumeration.

use serde_json::Value;

/// Enumerate every leaf of a value tree, depth-first, paired with the
/// path string that [`crate::get`] resolves back to it.
///
/// Mapping keys become path segments; sequence indices annotate the
/// previous segment (`key[0]`) instead of adding a segment of their own.
/// A sequence at the root has no previous segment, so its indices become
/// bare `[i]` segments.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// let doc = json!({"nested": {"other": 2}, "repetition": ["a", {"inside": "b"}]});
/// let leaves: Vec<(String, &serde_json::Value)> = deeppath::walk(&doc).collect();
/// assert_eq!(
///     leaves,
///     vec![
///         ("nested/other".to_string(), &json!(2)),
///         ("repetition[0]".to_string(), &json!("a")),
///         ("repetition[1]/inside".to_string(), &json!("b")),
///     ]
/// );
/// ```
pub fn walk(doc: &Value) -> Walk<'_> {
    Walk {
        stack: vec![(Vec::new(), doc)],
    }
}

/// Lazy iterator created by [`walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<(Vec<String>, &'a Value)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (String, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, value)) = self.stack.pop() {
            match value {
                Value::Object(map) => {
                    for (key, child) in map.iter().rev() {
                        let mut sub = path.clone();
                        sub.push(key.clone());
                        self.stack.push((sub, child));
                    }
                }
                Value::Array(arr) => {
                    for (index, child) in arr.iter().enumerate().rev() {
                        let mut sub = path.clone();
                        match sub.last_mut() {
                            Some(last) => last.push_str(&format!("[{index}]")),
                            None => sub.push(format!("[{index}]")),
                        }
                        self.stack.push((sub, child));
                    }
                }
                leaf => return Some((path.join("/"), leaf)),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaves(doc: &Value) -> Vec<(String, Value)> {
        walk(doc).map(|(p, v)| (p, v.clone())).collect()
    }

    #[test]
    fn test_walk_mixed_structure() {
        let doc = json!({
            "value": 1,
            "nested": {"other": 2},
            "repetition": ["repetition1", {"inside": "repetition"}]
        });
        assert_eq!(
            leaves(&doc),
            vec![
                ("value".to_string(), json!(1)),
                ("nested/other".to_string(), json!(2)),
                ("repetition[0]".to_string(), json!("repetition1")),
                ("repetition[1]/inside".to_string(), json!("repetition")),
            ]
        );
    }

    #[test]
    fn test_walk_scalar_root() {
        let doc = json!(42);
        assert_eq!(leaves(&doc), vec![("".to_string(), json!(42))]);
    }

    #[test]
    fn test_walk_root_sequence() {
        let doc = json!([1, [2]]);
        assert_eq!(
            leaves(&doc),
            vec![
                ("[0]".to_string(), json!(1)),
                ("[1][0]".to_string(), json!(2)),
            ]
        );
    }

    #[test]
    fn test_walk_empty_containers_yield_nothing() {
        assert!(walk(&json!({})).next().is_none());
        assert!(walk(&json!([])).next().is_none());
        assert_eq!(leaves(&json!({"a": {}, "b": 1})), vec![("b".to_string(), json!(1))]);
    }

    #[test]
    fn test_walk_is_lazy() {
        let doc = json!({"a": 1, "b": 2});
        let mut it = walk(&doc);
        assert_eq!(it.next(), Some(("a".to_string(), &json!(1))));
        assert_eq!(it.next(), Some(("b".to_string(), &json!(2))));
        assert_eq!(it.next(), None);
    }
}
