//! Ordering and grouping of the tool list
//!
//! The persisted settings carry a linear order of tool ids. These helpers
//! reconcile that order against the catalog, bucket it into category
//! groups, and apply drag-reorder moves. All functions are pure; callers
//! own the resulting vectors.

use std::collections::HashSet;

use crate::catalog::{ToolCategory, ToolRecord};

/// Align a persisted order with the catalog.
///
/// Ids unknown to the catalog are dropped, duplicates keep their first
/// occurrence, and catalog ids missing from the persisted order are
/// appended in declaration order. The result is always a permutation of
/// exactly the catalog's ids.
pub fn reconcile_order(catalog: &[ToolRecord], persisted: &[String]) -> Vec<String> {
    let known: HashSet<&str> = catalog.iter().map(|t| t.id).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut order: Vec<String> = Vec::with_capacity(catalog.len());

    for id in persisted {
        if known.contains(id.as_str()) && seen.insert(id.as_str()) {
            order.push(id.clone());
        }
    }
    for tool in catalog {
        if !seen.contains(tool.id) {
            order.push(tool.id.to_string());
        }
    }
    order
}

/// Bucket an ordered id sequence into category groups.
///
/// Ids with no matching record are dropped; relative order within each
/// group follows `ordered`. Every category appears in the result, empty
/// or not, in the fixed display order.
pub fn group_by_category<'a>(
    ordered: &[String],
    catalog: &'a [ToolRecord],
) -> Vec<(ToolCategory, Vec<&'a ToolRecord>)> {
    let mut groups: Vec<(ToolCategory, Vec<&ToolRecord>)> = ToolCategory::ALL
        .iter()
        .map(|c| (*c, Vec::new()))
        .collect();

    for id in ordered {
        if let Some(tool) = catalog.iter().find(|t| t.id == id.as_str()) {
            if let Some((_, members)) = groups.iter_mut().find(|(c, _)| *c == tool.category) {
                members.push(tool);
            }
        }
    }
    groups
}

/// Move `source` to the position currently held by `target`.
///
/// Elements between the two shift by one. Returns the input unchanged
/// when `source == target` or either id is absent.
pub fn reorder(order: &[String], source: &str, target: &str) -> Vec<String> {
    let mut next: Vec<String> = order.to_vec();
    if source == target {
        return next;
    }
    let (Some(from), Some(to)) = (
        order.iter().position(|id| id == source),
        order.iter().position(|id| id == target),
    ) else {
        return next;
    };

    // Both positions are taken before the removal; removing the source
    // first makes the insert land in the target's slot from either
    // direction.
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::all_tools;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_reconcile_identity() {
        let catalog = all_tools();
        let declared: Vec<String> = catalog.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(reconcile_order(catalog, &declared), declared);
    }

    #[test]
    fn test_reconcile_empty_order_uses_declaration_order() {
        let catalog = all_tools();
        let declared: Vec<String> = catalog.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(reconcile_order(catalog, &[]), declared);
    }

    #[test]
    fn test_reconcile_drops_foreign_and_appends_missing() {
        let catalog = all_tools();
        let persisted = ids(&["claude", "retired-tool", "chatgpt"]);
        let result = reconcile_order(catalog, &persisted);

        assert_eq!(result.len(), catalog.len());
        assert_eq!(result[0], "claude");
        assert_eq!(result[1], "chatgpt");
        assert!(!result.contains(&"retired-tool".to_string()));
        // Remaining ids follow declaration order.
        assert_eq!(result[2], "gemini");
    }

    #[test]
    fn test_reconcile_is_total_permutation() {
        let catalog = all_tools();
        let inputs = [
            ids(&[]),
            ids(&["fireflies"]),
            ids(&["x", "y", "z"]),
            ids(&["claude", "claude", "claude"]),
            {
                let mut all: Vec<String> = catalog.iter().map(|t| t.id.to_string()).collect();
                all.reverse();
                all.push("extra".to_string());
                all
            },
        ];
        for persisted in &inputs {
            let result = reconcile_order(catalog, persisted);
            let mut sorted = result.clone();
            sorted.sort();
            let mut expected: Vec<String> = catalog.iter().map(|t| t.id.to_string()).collect();
            expected.sort();
            assert_eq!(sorted, expected, "input {:?}", persisted);
        }
    }

    #[test]
    fn test_reconcile_first_duplicate_wins() {
        let catalog = all_tools();
        let persisted = ids(&["grok", "claude", "grok"]);
        let result = reconcile_order(catalog, &persisted);
        assert_eq!(result[0], "grok");
        assert_eq!(result[1], "claude");
        assert_eq!(result.iter().filter(|id| *id == "grok").count(), 1);
    }

    #[test]
    fn test_group_preserves_order_and_keeps_empty_groups() {
        let catalog = all_tools();
        let ordered = ids(&["perplexity", "chatgpt", "notion", "fireflies"]);
        let groups = group_by_category(&ordered, catalog);

        assert_eq!(groups.len(), ToolCategory::ALL.len());

        let (_, writing) = groups
            .iter()
            .find(|(c, _)| *c == ToolCategory::WritingSearch)
            .unwrap();
        let writing_ids: Vec<&str> = writing.iter().map(|t| t.id).collect();
        assert_eq!(writing_ids, vec!["perplexity", "chatgpt"]);

        let (_, general) = groups
            .iter()
            .find(|(c, _)| *c == ToolCategory::General)
            .unwrap();
        assert!(general.is_empty());
    }

    #[test]
    fn test_group_drops_unknown_ids() {
        let catalog = all_tools();
        let ordered = ids(&["ghost", "runway"]);
        let groups = group_by_category(&ordered, catalog);
        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_reorder_moves_source_to_target_slot() {
        let order = ids(&["a", "b", "c", "d"]);
        assert_eq!(reorder(&order, "a", "c"), ids(&["b", "c", "a", "d"]));
        assert_eq!(reorder(&order, "d", "a"), ids(&["d", "a", "b", "c"]));
    }

    #[test]
    fn test_reorder_noop_cases() {
        let order = ids(&["a", "b", "c", "d"]);
        assert_eq!(reorder(&order, "z", "c"), order);
        assert_eq!(reorder(&order, "b", "z"), order);
        assert_eq!(reorder(&order, "b", "b"), order);
    }
}
