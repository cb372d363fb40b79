//! Hit testing over the rectangles the desktop last laid out.
//!
//! Regions are kept in registration order (the store's insertion order), so
//! overlapping panels can be resolved either by who registered first or by
//! who is painted on top.

use clap::ValueEnum;
use ratatui::prelude::Rect;

/// Rule for picking a region when several contain the same point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HitPolicy {
    /// The earliest registered region wins.
    #[default]
    FirstRegistered,
    /// The last registered region wins; it is the one painted on top.
    Topmost,
}

#[derive(Debug, Clone)]
pub struct RegionMap<T: Clone + Eq> {
    regions: Vec<(T, Rect)>,
}

impl<T: Clone + Eq> Default for RegionMap<T> {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
        }
    }
}

impl<T: Clone + Eq> RegionMap<T> {
    /// Register `rect` for `id`. Re-registering keeps the existing slot.
    pub fn set(&mut self, id: T, rect: Rect) {
        if let Some(slot) = self.regions.iter_mut().find(|(existing, _)| *existing == id) {
            slot.1 = rect;
        } else {
            self.regions.push((id, rect));
        }
    }

    pub fn hit_test(&self, column: u16, row: u16, policy: HitPolicy) -> Option<T> {
        let contains = |(_, rect): &&(T, Rect)| rect_contains(*rect, column, row);
        let hit = match policy {
            HitPolicy::FirstRegistered => self.regions.iter().find(contains),
            HitPolicy::Topmost => self.regions.iter().rev().find(contains),
        };
        hit.map(|(id, _)| id.clone())
    }
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}
