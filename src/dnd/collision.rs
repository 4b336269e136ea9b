//! Drop Target Resolution
//!
//! Column drags rank whole columns by corner proximity. Card drags use
//! pointer containment, refined to the nearest card when the pointer sits
//! in a column's empty space, and fall back to the last resolved target when
//! the pointer is outside every region.

use leptos_dragdrop::{closest_corners, pointer_within, Droppable, Point, Rect};

use crate::models::Column;

/// Nearest column to the dragged column rect
pub fn resolve_column_target(active_rect: &Rect, droppables: &[Droppable], columns: &[Column]) -> Option<String> {
    let column_regions: Vec<Droppable> = droppables
        .iter()
        .filter(|d| columns.iter().any(|c| c.id == d.id))
        .cloned()
        .collect();

    closest_corners(active_rect, &column_regions)
        .into_iter()
        .next()
        .map(|c| c.id)
}

/// Target under the pointer for a dragged card.
///
/// Returns `last_over_id` unchanged when nothing contains the pointer.
pub fn resolve_card_target(
    pointer: Point,
    active_rect: &Rect,
    droppables: &[Droppable],
    columns: &[Column],
    last_over_id: Option<&str>,
) -> Option<String> {
    let hits = pointer_within(pointer, droppables);
    let Some(first) = hits.into_iter().next() else {
        return last_over_id.map(str::to_string);
    };

    let Some(column) = columns.iter().find(|c| c.id == first.id) else {
        return Some(first.id);
    };

    // Over empty column space: pick the nearest card of that column
    let card_regions: Vec<Droppable> = droppables
        .iter()
        .filter(|d| column.card_order_ids.iter().any(|id| *id == d.id))
        .cloned()
        .collect();

    let refined = closest_corners(active_rect, &card_regions)
        .into_iter()
        .next()
        .map(|c| c.id)
        .unwrap_or(first.id);
    Some(refined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::column;

    /// Two columns side by side; c1 holds a and b stacked, c2 is empty
    fn layout() -> (Vec<Column>, Vec<Droppable>) {
        let columns = vec![column("c1", &["a", "b"]), column("c2", &[])];
        let droppables = vec![
            Droppable::new("c1", Rect::new(0.0, 0.0, 200.0, 500.0)),
            Droppable::new("a", Rect::new(10.0, 50.0, 180.0, 40.0)),
            Droppable::new("b", Rect::new(10.0, 100.0, 180.0, 40.0)),
            Droppable::new("c2", Rect::new(220.0, 0.0, 200.0, 500.0)),
            Droppable::new("c2-placeholder-card", Rect::new(230.0, 50.0, 180.0, 40.0)),
        ];
        (columns, droppables)
    }

    #[test]
    fn test_card_over_card_wins() {
        let (columns, droppables) = layout();
        let dragged = Rect::new(15.0, 95.0, 180.0, 40.0);
        let target = resolve_card_target(Point::new(50.0, 110.0), &dragged, &droppables, &columns, None);
        assert_eq!(target.as_deref(), Some("b"));
    }

    #[test]
    fn test_card_over_empty_column_space_refines_to_nearest_card() {
        let (columns, droppables) = layout();
        let dragged = Rect::new(20.0, 300.0, 180.0, 40.0);
        let target = resolve_card_target(Point::new(100.0, 320.0), &dragged, &droppables, &columns, None);
        assert_eq!(target.as_deref(), Some("b"));
    }

    #[test]
    fn test_card_over_empty_column_picks_placeholder() {
        let (columns, droppables) = layout();
        let dragged = Rect::new(240.0, 200.0, 180.0, 40.0);
        let target = resolve_card_target(Point::new(300.0, 220.0), &dragged, &droppables, &columns, None);
        assert_eq!(target.as_deref(), Some("c2-placeholder-card"));
    }

    #[test]
    fn test_card_outside_every_region_keeps_last_target() {
        let (columns, droppables) = layout();
        let dragged = Rect::new(600.0, 0.0, 180.0, 40.0);
        let target = resolve_card_target(Point::new(650.0, 20.0), &dragged, &droppables, &columns, Some("a"));
        assert_eq!(target.as_deref(), Some("a"));

        let none = resolve_card_target(Point::new(650.0, 20.0), &dragged, &droppables, &columns, None);
        assert!(none.is_none());
    }

    #[test]
    fn test_column_without_card_regions_falls_back_to_column() {
        let (columns, mut droppables) = layout();
        droppables.retain(|d| d.id != "c2-placeholder-card");
        let dragged = Rect::new(240.0, 200.0, 180.0, 40.0);
        let target = resolve_card_target(Point::new(300.0, 220.0), &dragged, &droppables, &columns, None);
        assert_eq!(target.as_deref(), Some("c2"));
    }

    #[test]
    fn test_column_drag_ignores_cards() {
        let (columns, droppables) = layout();
        let dragged = Rect::new(190.0, 10.0, 200.0, 500.0);
        let target = resolve_column_target(&dragged, &droppables, &columns);
        assert_eq!(target.as_deref(), Some("c2"));
    }
}
