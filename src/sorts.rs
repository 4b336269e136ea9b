//! Ordering Helpers
//!
//! Rebuild display order from persisted order arrays.

use std::collections::HashMap;

/// Arrange `items` in the order given by `order_ids`.
///
/// Items whose id is not listed are dropped; an id listed twice yields its
/// item once, at the first position. Runs in O(n + m) and is idempotent.
pub fn map_order<T, F>(items: Vec<T>, order_ids: &[String], key: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut by_id: HashMap<String, T> = HashMap::with_capacity(items.len());
    for item in items {
        let id = key(&item).to_string();
        by_id.entry(id).or_insert(item);
    }

    order_ids
        .iter()
        .filter_map(|id| by_id.remove(id.as_str()))
        .collect()
}

/// Move the element at `from` to `to`, shifting the rest. Out-of-range
/// `from` leaves the list unchanged; `to` is clamped to the end.
pub fn array_move<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from >= items.len() {
        return items;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn by_self(s: &String) -> &str {
        s.as_str()
    }

    #[test]
    fn test_map_order_follows_order_ids() {
        let items = ids(&["a", "b", "c"]);
        let ordered = map_order(items, &ids(&["c", "a", "b"]), by_self);
        assert_eq!(ordered, ids(&["c", "a", "b"]));
    }

    #[test]
    fn test_map_order_drops_unreferenced() {
        let items = ids(&["a", "b", "stray"]);
        let ordered = map_order(items, &ids(&["b", "a"]), by_self);
        assert_eq!(ordered, ids(&["b", "a"]));
    }

    #[test]
    fn test_map_order_skips_unknown_and_duplicate_ids() {
        let items = ids(&["a", "b"]);
        let ordered = map_order(items, &ids(&["b", "ghost", "b", "a"]), by_self);
        assert_eq!(ordered, ids(&["b", "a"]));
    }

    #[test]
    fn test_map_order_is_idempotent() {
        let order = ids(&["x", "z", "y"]);
        let once = map_order(ids(&["y", "x", "z"]), &order, by_self);
        let twice = map_order(once.clone(), &order, by_self);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_array_move_forward_and_back() {
        assert_eq!(array_move(ids(&["a", "b", "c"]), 0, 2), ids(&["b", "c", "a"]));
        assert_eq!(array_move(ids(&["a", "b", "c"]), 2, 0), ids(&["c", "a", "b"]));
        assert_eq!(array_move(ids(&["a", "b", "c"]), 1, 1), ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_array_move_clamps_target() {
        assert_eq!(array_move(ids(&["a", "b", "c"]), 0, 99), ids(&["b", "c", "a"]));
        assert_eq!(array_move(ids(&["a"]), 5, 0), ids(&["a"]));
    }
}
