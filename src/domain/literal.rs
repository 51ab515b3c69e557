//! Parsing of exercise literals such as `[1,2,3]` or `[3,9,20,null,null,15,7]`.
//!
//! Literals are JSON arrays of integers and `null`. Python's `None` is
//! accepted as a spelling of `null`.

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::list::{list_from_values, ListNode};
use crate::domain::tree::{tree_from_level_order, TreeNode};

/// Parses a literal that may contain null markers.
#[instrument(level = "debug")]
pub fn parse_slots(input: &str) -> DomainResult<Vec<Option<i32>>> {
    let normalized = input.trim().replace("None", "null");
    let slots: Vec<Option<i32>> =
        serde_json::from_str(&normalized).map_err(|e| DomainError::Parse {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
    debug!(len = slots.len(), "parsed literal");
    Ok(slots)
}

/// Parses a literal of plain integers; null markers are rejected.
#[instrument(level = "debug")]
pub fn parse_values(input: &str) -> DomainResult<Vec<i32>> {
    parse_slots(input)?
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.ok_or(DomainError::UnexpectedMarker { index }))
        .collect()
}

/// Parses a literal and builds a linked list from it.
pub fn parse_list(input: &str) -> DomainResult<Option<Box<ListNode>>> {
    Ok(list_from_values(parse_values(input)?))
}

/// Parses a level-order literal and builds a binary tree from it.
pub fn parse_tree(input: &str) -> DomainResult<Option<Box<TreeNode>>> {
    tree_from_level_order(parse_slots(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slots_with_null() {
        let slots = parse_slots("[3,9,20,null,null,15,7]").unwrap();
        assert_eq!(
            slots,
            vec![Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]
        );
    }

    #[test]
    fn test_parse_slots_with_python_none() {
        let slots = parse_slots(" [1, None, 2] ").unwrap();
        assert_eq!(slots, vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn test_parse_values_rejects_marker() {
        let err = parse_values("[1,null]").unwrap_err();
        assert_eq!(err, DomainError::UnexpectedMarker { index: 1 });
    }

    #[test]
    fn test_parse_garbage() {
        let err = parse_slots("[1,2").unwrap_err();
        assert!(matches!(err, DomainError::Parse { .. }));
    }
}
