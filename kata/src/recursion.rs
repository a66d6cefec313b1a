// All three functions recurse once per level of nesting (or once per
// character for strings). There is no depth limit; input deep enough to
// exhaust the stack overflows it.

use kata_value::{Array, Map, Value};

/// Reverse a string, one character at a time.
///
/// The suffix after the first character is reversed first and the first
/// character appended to it. Characters are Unicode scalar values, so
/// multi-byte characters stay intact but combining sequences are not kept
/// together.
pub fn reverse_str(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut reversed = reverse_str(chars.as_str());
            reversed.push(first);
            reversed
        }
    }
}

/// Check whether every leaf in a tree of maps has the same value.
///
/// The first leaf in depth-first, insertion-order traversal is the
/// reference; every other leaf is compared with it using
/// [`Value::same_leaf`]. Nested maps are descended into. Arrays are not:
/// they are leaves, and only equal to the very same array.
pub fn check_matching_leaves(map: &Map) -> bool {
    let mut tester = None;
    matching_leaves(map, &mut tester)
}

fn matching_leaves<'a>(map: &'a Map, tester: &mut Option<&'a Value>) -> bool {
    for (key, value) in map.iter() {
        if let Value::Map(nested) = value {
            if !matching_leaves(nested, tester) {
                return false;
            }
            continue;
        }
        match *tester {
            None => *tester = Some(value),
            Some(reference) => {
                if !value.same_leaf(reference) {
                    tracing::trace!(key, %value, %reference, "leaf does not match");
                    return false;
                }
            }
        }
    }
    true
}

/// Flatten nested arrays into a single array.
///
/// Members that are arrays are replaced by their flattened members, in
/// order. Anything else, maps included, is kept as is.
pub fn flatten(array: &Array) -> Array {
    let mut result = Vec::with_capacity(array.len());
    flatten_into(array, &mut result);
    result.into()
}

fn flatten_into(array: &Array, result: &mut Vec<Value>) {
    for member in array.iter() {
        if let Value::Array(nested) = member {
            flatten_into(nested, result);
        } else {
            result.push(member.clone());
        }
    }
}
