//! Drag State Machine
//!
//! Tracks the one gesture in flight (`Idle -> Dragging -> Idle`) and turns
//! pointer frames into new column arrangements. Over only produces local
//! state; End produces the outcome that gets persisted.

use std::mem;

use leptos_dragdrop::{Droppable, Point, Rect};

use super::collision::{resolve_card_target, resolve_column_target};
use super::moves::{
    detach_card_elsewhere, find_column_by_card_id, find_target_column, insertion_index,
    move_card_between_columns, reorder_columns, replace_column,
};
use crate::models::{Card, Column};
use crate::sorts::array_move;

/// What is being dragged, fixed at gesture start
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveItem {
    Column(Column),
    Card(Card),
}

impl ActiveItem {
    /// Classify `id` against the current columns. Placeholders are not draggable.
    pub fn locate(id: &str, columns: &[Column]) -> Option<Self> {
        if let Some(col) = columns.iter().find(|c| c.id == id) {
            return Some(ActiveItem::Column(col.clone()));
        }
        columns
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|c| c.id == id && !c.placeholder)
            .map(|c| ActiveItem::Card(c.clone()))
    }

    pub fn id(&self) -> &str {
        match self {
            ActiveItem::Column(c) => &c.id,
            ActiveItem::Card(c) => &c.id,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DragSession {
    pub active: ActiveItem,
    /// Column holding the card when the gesture started (cards only)
    pub origin_column: Option<Column>,
    /// Last resolved target, reused while the pointer is outside every region
    pub last_over_id: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Resolved hover position for one pointer frame
#[derive(Clone, Debug, PartialEq)]
pub struct OverTarget {
    pub over_id: String,
    /// Pointer is below the vertical midpoint of the hovered element
    pub below_over_center: bool,
}

/// Result of a finished gesture
#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    Unchanged,
    ColumnsReordered {
        columns: Vec<Column>,
    },
    CardReordered {
        columns: Vec<Column>,
        column_id: String,
    },
    CardMoved {
        columns: Vec<Column>,
        card_id: String,
        from_column_id: String,
        to_column_id: String,
    },
}

#[derive(Debug, Default)]
pub struct BoardDnd {
    state: DragState,
}

impl BoardDnd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(s) => Some(s),
            DragState::Idle => None,
        }
    }

    /// Begin a gesture. Returns false if one is already running or the
    /// card's column cannot be found.
    pub fn start(&mut self, active: ActiveItem, columns: &[Column]) -> bool {
        if self.is_dragging() {
            return false;
        }
        let origin_column = match &active {
            ActiveItem::Card(card) => match find_column_by_card_id(columns, &card.id) {
                Some(col) => Some(col.clone()),
                None => return false,
            },
            ActiveItem::Column(_) => None,
        };
        self.state = DragState::Dragging(DragSession {
            active,
            origin_column,
            last_over_id: None,
        });
        true
    }

    /// Resolve the drop target for this frame, remembering it for card drags
    pub fn resolve_target(
        &mut self,
        pointer: Point,
        active_rect: &Rect,
        droppables: &[Droppable],
        columns: &[Column],
    ) -> Option<String> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        match session.active {
            ActiveItem::Column(_) => resolve_column_target(active_rect, droppables, columns),
            ActiveItem::Card(_) => {
                let over = resolve_card_target(
                    pointer,
                    active_rect,
                    droppables,
                    columns,
                    session.last_over_id.as_deref(),
                );
                session.last_over_id = over.clone();
                over
            }
        }
    }

    /// Pointer moved. Returns new columns when a card crosses into another column.
    pub fn over(&self, target: &OverTarget, columns: &[Column]) -> Option<Vec<Column>> {
        let session = self.session()?;
        let ActiveItem::Card(card) = &session.active else {
            return None;
        };

        let active_column = find_column_by_card_id(columns, &card.id)?;
        let over_column = find_target_column(columns, &target.over_id)?;
        if active_column.id == over_column.id {
            return None;
        }

        let index = insertion_index(over_column, &target.over_id, target.below_over_center);
        Some(move_card_between_columns(
            columns,
            card,
            &active_column.id,
            &over_column.id,
            index,
        ))
    }

    /// Finish the gesture. The machine is back to idle afterwards whatever the outcome.
    pub fn end(&mut self, target: Option<&OverTarget>, columns: &[Column]) -> DropOutcome {
        let DragState::Dragging(session) = mem::take(&mut self.state) else {
            return DropOutcome::Unchanged;
        };

        match session.active {
            ActiveItem::Column(column) => end_column(&column, target, columns),
            ActiveItem::Card(card) => match session.origin_column {
                Some(origin) => end_card(&card, &origin, target, columns),
                None => DropOutcome::Unchanged,
            },
        }
    }
}

fn end_column(active: &Column, target: Option<&OverTarget>, columns: &[Column]) -> DropOutcome {
    let Some(target) = target else {
        return DropOutcome::Unchanged;
    };
    let Some(over) = find_target_column(columns, &target.over_id) else {
        return DropOutcome::Unchanged;
    };
    let from = columns.iter().position(|c| c.id == active.id);
    let to = columns.iter().position(|c| c.id == over.id);
    match (from, to) {
        (Some(from), Some(to)) if from != to => DropOutcome::ColumnsReordered {
            columns: reorder_columns(columns, from, to),
        },
        _ => DropOutcome::Unchanged,
    }
}

fn end_card(card: &Card, origin: &Column, target: Option<&OverTarget>, columns: &[Column]) -> DropOutcome {
    let Some(current) = find_column_by_card_id(columns, &card.id) else {
        return DropOutcome::Unchanged;
    };
    let over_column = target
        .and_then(|t| find_target_column(columns, &t.over_id))
        .unwrap_or(current);

    if over_column.id != origin.id {
        let index = match target {
            Some(t) if t.over_id != card.id => {
                // Index against the landing list without the card itself
                let mut landing = over_column.clone();
                landing.cards.retain(|c| c.id != card.id);
                insertion_index(&landing, &t.over_id, t.below_over_center)
            }
            _ => over_column
                .cards
                .iter()
                .position(|c| c.id == card.id)
                .unwrap_or(over_column.cards.len()),
        };
        let moved = move_card_between_columns(columns, card, &current.id, &over_column.id, index);
        return DropOutcome::CardMoved {
            columns: moved,
            card_id: card.id.clone(),
            from_column_id: origin.id.clone(),
            to_column_id: over_column.id.clone(),
        };
    }

    // Dropped back in its origin: reorder against the gesture-start order
    let Some(old_index) = origin.cards.iter().position(|c| c.id == card.id) else {
        return DropOutcome::Unchanged;
    };
    let new_index = target
        .and_then(|t| origin.cards.iter().position(|c| c.id == t.over_id))
        .or_else(|| {
            (current.id == origin.id)
                .then(|| current.cards.iter().position(|c| c.id == card.id))
                .flatten()
        })
        .unwrap_or_else(|| origin.cards.len().saturating_sub(1));

    let mut reordered = origin.clone();
    reordered.cards = array_move(reordered.cards, old_index, new_index);
    reordered.card_order_ids = reordered.cards.iter().map(|c| c.id.clone()).collect();

    // Back at its start position: the board is what it was before the gesture
    if reordered.card_order_ids == origin.card_order_ids {
        return DropOutcome::Unchanged;
    }

    let columns = detach_card_elsewhere(&replace_column(columns, reordered), &card.id, &origin.id);
    DropOutcome::CardReordered {
        columns,
        column_id: origin.id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{assert_consistent, card_ids, column, find};
    use proptest::prelude::*;

    fn over(id: &str, below: bool) -> OverTarget {
        OverTarget { over_id: id.to_string(), below_over_center: below }
    }

    fn begin(dnd: &mut BoardDnd, id: &str, columns: &[Column]) {
        let item = ActiveItem::locate(id, columns).expect("draggable");
        assert!(dnd.start(item, columns));
    }

    fn column_ids(columns: &[Column]) -> Vec<&str> {
        columns.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_locate_classifies_items() {
        let cols = vec![column("c1", &["a"]), column("c2", &[])];
        assert!(matches!(ActiveItem::locate("c1", &cols), Some(ActiveItem::Column(_))));
        assert!(matches!(ActiveItem::locate("a", &cols), Some(ActiveItem::Card(_))));
        assert!(ActiveItem::locate("c2-placeholder-card", &cols).is_none());
        assert!(ActiveItem::locate("zzz", &cols).is_none());
    }

    #[test]
    fn test_start_captures_origin_for_cards_only() {
        let cols = vec![column("c1", &["a"]), column("c2", &[])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);
        assert_eq!(dnd.session().unwrap().origin_column.as_ref().unwrap().id, "c1");

        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "c2", &cols);
        assert!(dnd.session().unwrap().origin_column.is_none());
    }

    #[test]
    fn test_no_nested_gestures() {
        let cols = vec![column("c1", &["a", "b"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);
        let second = ActiveItem::locate("b", &cols).unwrap();
        assert!(!dnd.start(second, &cols));
        assert_eq!(dnd.session().unwrap().active.id(), "a");
    }

    #[test]
    fn test_over_same_column_is_noop() {
        let cols = vec![column("c1", &["a", "b", "c"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);
        assert!(dnd.over(&over("c", true), &cols).is_none());
    }

    #[test]
    fn test_over_column_drag_is_noop() {
        let cols = vec![column("c1", &["a"]), column("c2", &["b"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "c1", &cols);
        assert!(dnd.over(&over("c2", false), &cols).is_none());
    }

    #[test]
    fn test_drag_into_empty_column() {
        let cols = vec![column("c1", &["a", "b"]), column("c2", &[])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);

        let live = dnd.over(&over("c2-placeholder-card", false), &cols).expect("crossed");
        assert_eq!(card_ids(find(&live, "c2")), vec!["a"]);

        let outcome = dnd.end(Some(&over("a", false)), &live);
        let DropOutcome::CardMoved { columns, card_id, from_column_id, to_column_id } = outcome else {
            panic!("expected a cross-column move");
        };
        assert_eq!(card_id, "a");
        assert_eq!(from_column_id, "c1");
        assert_eq!(to_column_id, "c2");
        assert_eq!(card_ids(find(&columns, "c1")), vec!["b"]);
        assert_eq!(card_ids(find(&columns, "c2")), vec!["a"]);
        assert_consistent(&columns);
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_drag_through_two_columns_reports_origin() {
        let cols = vec![column("c1", &["a"]), column("c2", &["b"]), column("c3", &["c"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);

        let step1 = dnd.over(&over("b", true), &cols).unwrap();
        let step2 = dnd.over(&over("c", false), &step1).unwrap();
        assert_eq!(card_ids(find(&step2, "c2")), vec!["b"]);

        let DropOutcome::CardMoved { columns, from_column_id, to_column_id, .. } =
            dnd.end(Some(&over("c", false)), &step2)
        else {
            panic!("expected a cross-column move");
        };
        assert_eq!(from_column_id, "c1");
        assert_eq!(to_column_id, "c3");
        assert_eq!(card_ids(find(&columns, "c1")), vec!["c1-placeholder-card"]);
        assert_eq!(card_ids(find(&columns, "c3")), vec!["a", "c"]);
        assert_consistent(&columns);
    }

    #[test]
    fn test_reorder_within_column() {
        let cols = vec![column("c1", &["a", "b", "c"]), column("c2", &["z"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "b", &cols);

        let DropOutcome::CardReordered { columns, column_id } = dnd.end(Some(&over("a", false)), &cols) else {
            panic!("expected a same-column reorder");
        };
        assert_eq!(column_id, "c1");
        assert_eq!(card_ids(find(&columns, "c1")), vec!["b", "a", "c"]);
        assert_eq!(find(&columns, "c2"), find(&cols, "c2"));
        assert_consistent(&columns);
    }

    #[test]
    fn test_return_to_origin_uses_start_order() {
        let cols = vec![column("c1", &["a", "b"]), column("c2", &["z"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);

        let away = dnd.over(&over("z", false), &cols).unwrap();
        let back = dnd.over(&over("b", true), &away).unwrap();

        let DropOutcome::CardReordered { columns, .. } = dnd.end(Some(&over("b", true)), &back) else {
            panic!("expected a same-column reorder");
        };
        assert_eq!(card_ids(find(&columns, "c1")), vec!["b", "a"]);
        assert_eq!(card_ids(find(&columns, "c2")), vec!["z"]);
        assert_consistent(&columns);
    }

    #[test]
    fn test_drop_in_place_is_unchanged() {
        let cols = vec![column("c1", &["a", "b"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);
        assert_eq!(dnd.end(Some(&over("a", false)), &cols), DropOutcome::Unchanged);
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_back_onto_origin_placeholder_is_unchanged() {
        let cols = vec![column("c1", &["a"]), column("c2", &["z"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);

        let away = dnd.over(&over("z", true), &cols).unwrap();
        assert_eq!(card_ids(find(&away, "c1")), vec!["c1-placeholder-card"]);

        // Released over the placeholder without another Over frame
        assert_eq!(dnd.end(Some(&over("c1-placeholder-card", false)), &away), DropOutcome::Unchanged);

        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);
        let away = dnd.over(&over("z", true), &cols).unwrap();
        let back = dnd.over(&over("c1-placeholder-card", false), &away).unwrap();
        assert_eq!(card_ids(find(&back, "c1")), vec!["a"]);
        assert_eq!(card_ids(find(&back, "c2")), vec!["z"]);
        assert_eq!(dnd.end(Some(&over("c1-placeholder-card", false)), &back), DropOutcome::Unchanged);
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_cross_column_end_without_target_keeps_board_consistent() {
        let cols = vec![column("c1", &["a", "b"]), column("c2", &["z"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);
        let away = dnd.over(&over("z", false), &cols).unwrap();

        let DropOutcome::CardMoved { columns, from_column_id, to_column_id, .. } = dnd.end(None, &away) else {
            panic!("expected the live move to be kept");
        };
        assert_eq!(from_column_id, "c1");
        assert_eq!(to_column_id, "c2");
        assert_eq!(card_ids(find(&columns, "c1")), vec!["b"]);
        assert_eq!(card_ids(find(&columns, "c2")), vec!["a", "z"]);
        assert_consistent(&columns);
        assert!(!dnd.is_dragging());
    }

    #[test]
    fn test_column_reorder() {
        let cols = vec![column("c1", &[]), column("c2", &[]), column("c3", &[])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "c1", &cols);

        let DropOutcome::ColumnsReordered { columns } = dnd.end(Some(&over("c3", false)), &cols) else {
            panic!("expected a column reorder");
        };
        assert_eq!(column_ids(&columns), vec!["c2", "c3", "c1"]);
    }

    #[test]
    fn test_column_dropped_on_itself() {
        let cols = vec![column("c1", &[]), column("c2", &[])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "c2", &cols);
        assert_eq!(dnd.end(Some(&over("c2", false)), &cols), DropOutcome::Unchanged);
    }

    #[test]
    fn test_end_without_target_resets() {
        let cols = vec![column("c1", &["a"])];
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "c1", &cols);
        assert_eq!(dnd.end(None, &cols), DropOutcome::Unchanged);
        assert!(!dnd.is_dragging());
        assert_eq!(dnd.end(None, &cols), DropOutcome::Unchanged);
    }

    #[test]
    fn test_last_target_is_scoped_to_gesture() {
        let cols = vec![column("c1", &["a", "b"])];
        let regions = vec![
            Droppable::new("c1", Rect::new(0.0, 0.0, 200.0, 400.0)),
            Droppable::new("a", Rect::new(10.0, 10.0, 180.0, 40.0)),
            Droppable::new("b", Rect::new(10.0, 60.0, 180.0, 40.0)),
        ];
        let rect = Rect::new(10.0, 60.0, 180.0, 40.0);
        let mut dnd = BoardDnd::new();
        begin(&mut dnd, "a", &cols);

        let hit = dnd.resolve_target(Point::new(50.0, 70.0), &rect, &regions, &cols);
        assert_eq!(hit.as_deref(), Some("b"));
        let outside = dnd.resolve_target(Point::new(900.0, 900.0), &rect, &regions, &cols);
        assert_eq!(outside.as_deref(), Some("b"));

        dnd.end(None, &cols);
        begin(&mut dnd, "a", &cols);
        assert!(dnd.resolve_target(Point::new(900.0, 900.0), &rect, &regions, &cols).is_none());
    }

    #[derive(Clone, Debug)]
    enum Step {
        Start(usize),
        Over(usize, bool),
        End(Option<usize>, bool),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            any::<usize>().prop_map(Step::Start),
            (any::<usize>(), any::<bool>()).prop_map(|(i, below)| Step::Over(i, below)),
            (proptest::option::of(any::<usize>()), any::<bool>()).prop_map(|(i, below)| Step::End(i, below)),
        ]
    }

    /// Every column id and card id currently on the board, placeholders included
    fn targets(columns: &[Column]) -> Vec<String> {
        columns
            .iter()
            .flat_map(|c| std::iter::once(c.id.clone()).chain(c.cards.iter().map(|card| card.id.clone())))
            .collect()
    }

    fn pick(columns: &[Column], i: usize, below: bool) -> OverTarget {
        let ids = targets(columns);
        over(&ids[i % ids.len()], below)
    }

    proptest! {
        #[test]
        fn test_random_gestures_keep_board_consistent(steps in prop::collection::vec(step(), 1..60)) {
            let start = vec![column("c1", &["a", "b", "c"]), column("c2", &[]), column("c3", &["d"])];
            // `settled` mirrors the stored board, `live` the preview during a gesture
            let mut settled = start.clone();
            let mut live = start;
            let mut dnd = BoardDnd::new();

            for step in steps {
                match step {
                    Step::Start(i) => {
                        let ids = targets(&live);
                        if let Some(item) = ActiveItem::locate(&ids[i % ids.len()], &live) {
                            let was_dragging = dnd.is_dragging();
                            prop_assert_eq!(dnd.start(item, &live), !was_dragging);
                        }
                    }
                    Step::Over(i, below) => {
                        if let Some(next) = dnd.over(&pick(&live, i, below), &live) {
                            live = next;
                        }
                    }
                    Step::End(i, below) => {
                        let target = i.map(|i| pick(&live, i, below));
                        settled = match dnd.end(target.as_ref(), &live) {
                            DropOutcome::Unchanged => settled,
                            DropOutcome::ColumnsReordered { columns }
                            | DropOutcome::CardReordered { columns, .. }
                            | DropOutcome::CardMoved { columns, .. } => columns,
                        };
                        live = settled.clone();
                        prop_assert!(!dnd.is_dragging());
                    }
                }
                assert_consistent(&live);
                prop_assert_eq!(targets(&live).iter().filter(|id| id.len() == 1).count(), 4);
            }
        }
    }
}
