//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag-and-drop for Leptos.
//! Uses a movement threshold to distinguish click from drag, and exposes the
//! geometry needed to resolve drop targets from DOM droppable regions.

mod geometry;

pub use geometry::{closest_corners, pointer_within, Collision, Droppable, Point, Rect};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    /// Pending id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<Point>,
    pub start_write: WriteSignal<Point>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: f64 = 10.0;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_read, start_write) = signal(Point::default());
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
    }
}

impl DndSignals {
    /// Whether `id` is the element currently being dragged (tracked)
    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging_id_read.with(|d| d.as_deref() == Some(id))
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.pending_id_write.set(None);
}

fn pointer_of(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Create mousedown handler for a draggable element.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(dnd: DndSignals, id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore form controls inside draggables
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
        }
        // Innermost draggable wins (a card inside a column)
        ev.stop_propagation();
        dnd.pending_id_write.set(Some(id.clone()));
        dnd.start_write.set(pointer_of(&ev));
    }
}

/// Bind document-level mousemove/mouseup handlers.
///
/// * `on_start(id, start_pointer)` fires once the pointer leaves the threshold
/// * `on_move(pointer)` fires on every move while dragging
/// * `on_end(pointer)` fires on mouseup after a real drag
pub fn bind_global_handlers<S, M, E>(dnd: DndSignals, on_start: S, on_move: M, on_end: E)
where
    S: Fn(String, Point) + 'static,
    M: Fn(Point) + 'static,
    E: Fn(Point) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pointer = pointer_of(&ev);

        if dnd.dragging_id_read.get_untracked().is_none() {
            let Some(pending) = dnd.pending_id_read.get_untracked() else { return };
            let start = dnd.start_read.get_untracked();
            let dx = (pointer.x - start.x).abs();
            let dy = (pointer.y - start.y).abs();
            if dx <= DRAG_THRESHOLD_PX && dy <= DRAG_THRESHOLD_PX {
                return;
            }
            dnd.dragging_id_write.set(Some(pending.clone()));
            on_start(pending, start);
        }

        // Suppress text selection while dragging
        ev.prevent_default();
        on_move(pointer);
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let was_dragging = dnd.dragging_id_read.get_untracked().is_some();
        end_drag(&dnd);
        if was_dragging {
            on_end(pointer_of(&ev));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

fn rect_of(el: &web_sys::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Collect every element carrying `attr` as a droppable, keyed by the attribute value
pub fn collect_droppables(attr: &str) -> Vec<Droppable> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(&format!("[{}]", attr)) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        if let Some(id) = el.get_attribute(attr) {
            out.push(Droppable::new(id, rect_of(&el)));
        }
    }
    out
}

/// Bounding rect of the droppable whose `attr` equals `id`
pub fn find_droppable_rect(attr: &str, id: &str) -> Option<Rect> {
    let doc = web_sys::window()?.document()?;
    let el = doc.query_selector(&format!("[{}=\"{}\"]", attr, id)).ok()??;
    Some(rect_of(&el))
}
