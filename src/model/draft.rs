//! The in-progress, unsubmitted selection of menu item quantities.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::{MenuItem, MenuItemId, OrderLine};

/// Per-item quantities for one ordering session, plus total computation.
///
/// A draft is seeded with quantity 0 for every active catalog item when the
/// ordering screen is entered, mutated only through the quantity operations
/// below, and cleared after a successful submission. Quantities can never go
/// below zero: decrements past zero floor at zero, mirroring a stepper
/// control. Unknown or inactive item ids are ignored, so nothing outside the
/// seeded catalog can be ordered.
///
/// Single-writer: a draft belongs to one interactive session and is not
/// shared across threads.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Active catalog items, in catalog order. Iteration order of every
    /// derived listing (totals, selected lines) follows this.
    items: Vec<MenuItem>,
    quantities: HashMap<MenuItemId, u32>,
}

impl OrderDraft {
    /// Creates a draft with quantity 0 for every active item in `catalog`.
    pub fn seeded(catalog: &[MenuItem]) -> Self {
        let items: Vec<MenuItem> = catalog.iter().filter(|m| m.is_active).cloned().collect();
        let quantities = items.iter().map(|m| (m.id, 0)).collect();
        Self { items, quantities }
    }

    /// The active catalog items backing this draft, in catalog order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Current quantity for an item; 0 for unknown ids.
    pub fn quantity(&self, id: MenuItemId) -> u32 {
        self.quantities.get(&id).copied().unwrap_or(0)
    }

    /// Sets the quantity for an item, flooring negative requests at zero.
    ///
    /// Unknown ids are ignored. Taking a signed quantity lets callers pass
    /// raw input (e.g. a parsed text field) without pre-validating it.
    pub fn set_quantity(&mut self, id: MenuItemId, quantity: i64) {
        if let Some(slot) = self.quantities.get_mut(&id) {
            *slot = quantity.max(0).min(u32::MAX as i64) as u32;
        }
    }

    /// Adjusts the quantity for an item by `delta`, flooring at zero.
    pub fn adjust_quantity(&mut self, id: MenuItemId, delta: i64) {
        let current = self.quantity(id) as i64;
        self.set_quantity(id, current + delta);
    }

    /// Σ quantity × unit price over all entries, recomputed on demand.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price * Decimal::from(self.quantity(item.id)))
            .sum()
    }

    /// Items with quantity > 0, in catalog order.
    ///
    /// Both the confirmation view and the submission payload are derived
    /// from this single listing, so what the user approves is exactly what
    /// is submitted.
    pub fn selected_items(&self) -> Vec<(&MenuItem, u32)> {
        self.items
            .iter()
            .filter_map(|item| match self.quantity(item.id) {
                0 => None,
                qty => Some((item, qty)),
            })
            .collect()
    }

    /// The selected items as submission lines, in catalog order.
    pub fn selected_lines(&self) -> Vec<OrderLine> {
        self.selected_items()
            .into_iter()
            .map(|(item, quantity)| OrderLine { menu_item: item.id, quantity })
            .collect()
    }

    /// True iff nothing has been selected.
    pub fn is_empty(&self) -> bool {
        self.quantities.values().all(|&q| q == 0)
    }

    /// Resets every quantity to zero. Used after a successful submission.
    pub fn clear(&mut self) {
        for quantity in self.quantities.values_mut() {
            *quantity = 0;
        }
    }
}
