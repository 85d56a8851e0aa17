// Author: Dustin Pilgrim
// License: MIT

use super::*;
use crate::ast::Mapping;

/// Fold a resolved merge source into the node being built.
///
/// - sequence + sequence: concatenate
/// - sequence + anything else: append as one element
/// - mapping + mapping: key union, `merged` wins on conflicts
pub(super) fn combine(parser: &Parser, node: &mut Value, merged: Value, line: usize) -> Result<(), LpmlError> {
    match (node, merged) {
        (Value::Sequence(items), Value::Sequence(more)) => {
            items.extend(more);
            Ok(())
        }
        (Value::Sequence(items), other) => {
            items.push(other);
            Ok(())
        }
        (Value::Mapping(entries), Value::Mapping(incoming)) => {
            merge_mappings(entries, incoming);
            Ok(())
        }
        (_, other) => Err(parser.structural_error(
            line,
            format!("Cannot merge a {} into a mapping", other.kind()),
            Some("Only mappings can be merged into a mapping block".into()),
            204,
        )),
    }
}

/// Union of two mappings where entries from `incoming` overwrite existing keys.
pub fn merge_mappings(target: &mut Mapping, incoming: Mapping) {
    for (key, value) in incoming {
        target.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, i64)]) -> Mapping {
        pairs.iter().map(|(k, v)| (k.to_string(), Value::Int(*v))).collect()
    }

    #[test]
    fn test_incoming_keys_win() {
        let mut target = mapping(&[("a", 1), ("b", 2)]);
        merge_mappings(&mut target, mapping(&[("b", 99), ("c", 3)]));
        assert_eq!(target, mapping(&[("a", 1), ("b", 99), ("c", 3)]));
    }

    #[test]
    fn test_existing_keys_keep_their_position() {
        let mut target = mapping(&[("a", 1), ("b", 2)]);
        merge_mappings(&mut target, mapping(&[("a", 5)]));
        assert_eq!(target.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(target["a"], Value::Int(5));
    }
}
