//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop handlers for Leptos.
//! Draggable items can be dropped onto another item or onto a zone.
//! Only hover highlighting is tracked here; what a drag means is up to the caller.

use leptos::prelude::*;
use web_sys::DragEvent;

/// MIME type the dragged item's id is written under
pub const DRAG_MIME: &str = "text/plain";

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget<I, Z> {
    /// Drop on another item
    Item(I),
    /// Drop on a zone's free area
    Zone(Z),
}

/// DnD hover state
pub struct DndSignals<I, Z>
where
    I: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    /// Target currently under the pointer
    pub hover: RwSignal<Option<DropTarget<I, Z>>>,
}

impl<I, Z> Clone for DndSignals<I, Z>
where
    I: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, Z> Copy for DndSignals<I, Z>
where
    I: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
}

impl<I, Z> DndSignals<I, Z>
where
    I: Copy + PartialEq + Send + Sync + 'static,
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    /// Whether `target` is the current hover target
    pub fn is_hovered(&self, target: DropTarget<I, Z>) -> bool {
        self.hover.get() == Some(target)
    }
}

pub fn create_dnd_signals<I, Z>() -> DndSignals<I, Z>
where
    I: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    DndSignals {
        hover: RwSignal::new(None),
    }
}

/// Create dragstart handler for a draggable item.
/// Writes the item id into the transfer payload and notifies `on_start`.
pub fn make_on_dragstart<I>(item_id: I, on_start: Callback<I>) -> impl Fn(DragEvent) + Copy + 'static
where
    I: Copy + ToString + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            // Firefox will not start a drag without a payload
            let _ = transfer.set_data(DRAG_MIME, &item_id.to_string());
            transfer.set_effect_allowed("move");
        }
        on_start.run(item_id);
    }
}

/// Create dragover handler that accepts drops and highlights `target`
pub fn make_on_dragover<I, Z>(dnd: DndSignals<I, Z>, target: DropTarget<I, Z>) -> impl Fn(DragEvent) + Copy + 'static
where
    I: Copy + PartialEq + Send + Sync + 'static,
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        // Items sit inside zones; keep the zone from claiming the hover
        if matches!(target, DropTarget::Item(_)) {
            ev.stop_propagation();
        }
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
        if dnd.hover.get_untracked() != Some(target) {
            dnd.hover.set(Some(target));
        }
    }
}

/// Create dragleave handler that clears the highlight of `target`
pub fn make_on_dragleave<I, Z>(dnd: DndSignals<I, Z>, target: DropTarget<I, Z>) -> impl Fn(DragEvent) + Copy + 'static
where
    I: Copy + PartialEq + Send + Sync + 'static,
    Z: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        if dnd.hover.get_untracked() == Some(target) {
            dnd.hover.set(None);
        }
    }
}

/// Create dragend handler for draggable items. Clears the highlight only.
pub fn make_on_dragend<I, Z>(dnd: DndSignals<I, Z>) -> impl Fn(DragEvent) + Copy + 'static
where
    I: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        dnd.hover.set(None);
    }
}

/// Create drop handler for `target`
pub fn make_on_drop<I, Z>(
    dnd: DndSignals<I, Z>,
    target: DropTarget<I, Z>,
    on_drop: Callback<DropTarget<I, Z>>,
) -> impl Fn(DragEvent) + Copy + 'static
where
    I: Copy + Send + Sync + 'static,
    Z: Copy + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        // An item drop must not also count as a drop on its zone
        ev.stop_propagation();
        dnd.hover.set(None);
        on_drop.run(target);
    }
}
