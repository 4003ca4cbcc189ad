use serde_json::Value;

/// Resolve a dot-separated path to every node it reaches inside `node`.
///
/// A segment applied to an array maps over its elements, so later segments
/// apply element-wise to every item of an earlier array. Missing keys and
/// non-container nodes drop out of the result silently. Empty segments are
/// skipped, so the empty path (and a bare `"."`) resolves to `node` itself.
pub fn resolve_mut<'a>(node: &'a mut Value, path: &str) -> Vec<&'a mut Value> {
    let mut current = vec![node];
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let mut next = Vec::new();
        for value in current {
            match value {
                Value::Object(map) => {
                    if let Some(child) = map.get_mut(segment) {
                        next.push(child);
                    }
                }
                Value::Array(items) => {
                    for item in items {
                        if let Value::Object(map) = item {
                            if let Some(child) = map.get_mut(segment) {
                                next.push(child);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
        current = next;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_path_is_identity() {
        let mut value = json!({"a": 1});
        let resolved = resolve_mut(&mut value, "");
        assert_eq!(resolved.len(), 1);
        assert_eq!(*resolved[0], json!({"a": 1}));
    }

    #[test]
    fn test_dot_only_path_is_identity() {
        let mut value = json!({"a": 1});
        let resolved = resolve_mut(&mut value, ".");
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_nested_path() {
        let mut value = json!({"a": {"b": {"c": 7}}});
        let resolved = resolve_mut(&mut value, "a.b");
        assert_eq!(resolved.len(), 1);
        assert_eq!(*resolved[0], json!({"c": 7}));
    }

    #[test]
    fn test_missing_path_resolves_to_nothing() {
        let mut value = json!({"a": {"b": 1}});
        assert!(resolve_mut(&mut value, "a.x").is_empty());
        assert!(resolve_mut(&mut value, "x").is_empty());
        assert!(resolve_mut(&mut value, "a.b.c").is_empty());
    }

    #[test]
    fn test_array_fans_out_element_wise() {
        let mut value = json!({"a": [{"b": 1}, {"b": 2}, {"other": 3}]});
        let resolved = resolve_mut(&mut value, "a.b");
        assert_eq!(resolved.len(), 2);
        assert_eq!(*resolved[0], json!(1));
        assert_eq!(*resolved[1], json!(2));
    }

    #[test]
    fn test_segment_after_array_continues_on_every_element() {
        let mut value = json!({"a": [{"b": {"c": 1}}, {"b": {"c": 2}}]});
        let resolved = resolve_mut(&mut value, "a.b.c");
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_scalar_node_resolves_to_nothing() {
        let mut value = json!(42);
        assert!(resolve_mut(&mut value, "a").is_empty());
    }
}
