//! Board Content Component
//!
//! Renders the open board's columns and drives drag-and-drop:
//! pointer frames feed the `BoardDnd` state machine, live moves go to a
//! local column signal, and the finished gesture updates the store and
//! persists through `reconcile`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_handlers, collect_droppables, create_dnd_signals, find_droppable_rect, Point, Rect,
};

use crate::commands::HttpBoardApi;
use crate::components::{ColumnView, NewColumnForm};
use crate::context::AppContext;
use crate::dnd::{ActiveItem, BoardDnd, DropOutcome, OverTarget, DROPPABLE_ATTR};
use crate::models::{Board, Column};
use crate::reconcile::{self, apply_plan, PersistOp};
use crate::store::{use_app_store, AppStateStoreFields};

/// Per-gesture bookkeeping kept next to the state machine
#[derive(Default)]
struct DragFrame {
    machine: BoardDnd,
    start_pointer: Point,
    start_rect: Rect,
    over: Option<OverTarget>,
}

/// New board value and writes for a finished gesture
fn settle(board: &Board, outcome: DropOutcome) -> Option<(Board, Vec<PersistOp>)> {
    match outcome {
        DropOutcome::Unchanged => None,
        DropOutcome::ColumnsReordered { columns } => Some(reconcile::move_columns(board, columns)),
        DropOutcome::CardReordered { columns, column_id } => {
            let column = columns.iter().find(|c| c.id == column_id)?;
            Some(reconcile::move_card_in_same_column(
                board,
                column.cards.clone(),
                column.card_order_ids.clone(),
                &column_id,
            ))
        }
        DropOutcome::CardMoved { columns, card_id, from_column_id, to_column_id } => Some(
            reconcile::move_card_to_different_column(board, &card_id, &from_column_id, &to_column_id, columns),
        ),
    }
}

#[component]
pub fn BoardContent() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let dnd = create_dnd_signals();
    provide_context(dnd);

    // Working copy rendered during a gesture
    let ordered_columns = RwSignal::new(Vec::<Column>::new());
    Effect::new(move |_| {
        let columns = store.active_board().with(|b| b.as_ref().map(|b| b.columns.clone()));
        ordered_columns.set(columns.unwrap_or_default());
    });

    let frame = Rc::new(RefCell::new(DragFrame::default()));

    let on_start = {
        let frame = frame.clone();
        move |id: String, start: Point| {
            let columns = ordered_columns.get_untracked();
            let Some(item) = ActiveItem::locate(&id, &columns) else { return };
            let mut f = frame.borrow_mut();
            if f.machine.start(item, &columns) {
                f.start_pointer = start;
                f.start_rect = find_droppable_rect(DROPPABLE_ATTR, &id).unwrap_or_default();
                f.over = None;
                web_sys::console::log_1(&format!("[DND] Drag start {}", id).into());
            }
        }
    };

    let on_move = {
        let frame = frame.clone();
        move |pointer: Point| {
            let columns = ordered_columns.get_untracked();
            let next = {
                let mut f = frame.borrow_mut();
                if !f.machine.is_dragging() {
                    return;
                }
                let active_rect = f.start_rect.translate(
                    pointer.x - f.start_pointer.x,
                    pointer.y - f.start_pointer.y,
                );
                let droppables = collect_droppables(DROPPABLE_ATTR);
                let Some(over_id) = f.machine.resolve_target(pointer, &active_rect, &droppables, &columns) else {
                    return;
                };
                let below_over_center = droppables
                    .iter()
                    .find(|d| d.id == over_id)
                    .map(|d| pointer.y > d.rect.center().y)
                    .unwrap_or(false);
                let target = OverTarget { over_id, below_over_center };
                let next = f.machine.over(&target, &columns);
                f.over = Some(target);
                next
            };
            if let Some(next) = next {
                ordered_columns.set(next);
            }
        }
    };

    let on_end = {
        let frame = frame.clone();
        move |_pointer: Point| {
            let columns = ordered_columns.get_untracked();
            let outcome = {
                let mut f = frame.borrow_mut();
                let over = f.over.take();
                f.machine.end(over.as_ref(), &columns)
            };

            let Some(board) = store.active_board().get_untracked() else { return };
            let Some((next, ops)) = settle(&board, outcome) else {
                // Drop any live preview
                ordered_columns.set(board.columns);
                return;
            };

            ordered_columns.set(next.columns.clone());
            store.active_board().set(Some(next));

            spawn_local(async move {
                let report = apply_plan(&HttpBoardApi, &ops).await;
                if !report.is_clean() {
                    web_sys::console::log_1(
                        &format!("[DND] {} of {} writes failed: {:?}", report.failures.len(), report.attempted, report.failures).into(),
                    );
                    ctx.reload();
                }
            });
        }
    };

    bind_global_handlers(dnd, on_start, on_move, on_end);

    let board_id = Signal::derive(move || store.active_board().with(|b| b.as_ref().map(|b| b.id.clone())));

    view! {
        <Show
            when=move || board_id.get().is_some()
            fallback=|| view! { <p class="board-empty">"Select or create a board"</p> }
        >
            <div class="board-content">
                <For
                    each=move || ordered_columns.get()
                    key=|col| (col.id.clone(), col.title.clone(), col.card_order_ids.clone())
                    children=move |col| view! { <ColumnView column=col /> }
                />
                <NewColumnForm board_id=board_id />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{board, column};

    #[test]
    fn test_settle_unchanged_is_none() {
        let b = board(vec![column("c1", &["a"])]);
        assert!(settle(&b, DropOutcome::Unchanged).is_none());
    }

    #[test]
    fn test_settle_card_reorder() {
        let b = board(vec![column("c1", &["a", "b"])]);
        let mut reordered = b.columns.clone();
        reordered[0].cards.reverse();
        reordered[0].card_order_ids.reverse();

        let (next, ops) = settle(&b, DropOutcome::CardReordered { columns: reordered, column_id: "c1".into() }).unwrap();
        assert_eq!(next.columns[0].card_order_ids, vec!["b", "a"]);
        assert_eq!(
            ops,
            vec![PersistOp::UpdateColumnCardOrder { column_id: "c1".into(), card_order_ids: vec!["b".into(), "a".into()] }]
        );
    }
}
