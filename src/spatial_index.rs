//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing on the canvas.
//! This reduces hit testing from O(n) to O(log n) for point queries.
//! Each entry carries its stacking order so overlapping cards resolve to the
//! one drawn on top (last in item order).

use crate::types::{Item, ItemId, Point};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing a card's bounding box.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    /// Stacking order; higher is drawn later
    pub z: usize,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, z: usize, position: Point, size: (f64, f64)) -> Self {
        Self {
            item_id,
            z,
            min_x: position.x,
            min_y: position.y,
            max_x: position.x + size.0,
            max_y: position.y + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index for cards using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
    card_size: (f64, f64),
}

impl SpatialIndex {
    pub fn new(card_size: (f64, f64)) -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            card_size,
        }
    }

    /// Build an index over `items`, stacked in slice order.
    pub fn from_items(items: &[Item], card_size: (f64, f64)) -> Self {
        let mut index = Self::new(card_size);
        index.rebuild(items);
        index
    }

    pub fn card_size(&self) -> (f64, f64) {
        self.card_size
    }

    /// Insert or move a card, keeping its stacking order `z`.
    pub fn insert(&mut self, item_id: &str, z: usize, position: Point) {
        self.remove(item_id);
        let entry = SpatialEntry::new(item_id.to_string(), z, position, self.card_size);
        self.tree.insert(entry.clone());
        self.entries.insert(entry.item_id.clone(), entry);
    }

    pub fn remove(&mut self, item_id: &str) -> bool {
        if let Some(entry) = self.entries.remove(item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All cards under the point, bottom to top.
    pub fn query_point(&self, point: Point) -> Vec<ItemId> {
        let envelope = AABB::from_point([point.x, point.y]);
        let mut hits: Vec<&SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .collect();
        hits.sort_by_key(|entry| entry.z);
        hits.into_iter().map(|entry| entry.item_id.clone()).collect()
    }

    /// The card drawn on top at `point`, if any.
    pub fn topmost_at(&self, point: Point) -> Option<ItemId> {
        let envelope = AABB::from_point([point.x, point.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .max_by_key(|entry| entry.z)
            .map(|entry| entry.item_id.clone())
    }

    /// All cards intersecting a rectangular region.
    pub fn query_rect(&self, min: Point, max: Point) -> Vec<ItemId> {
        let envelope = AABB::from_corners([min.x, min.y], [max.x, max.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.item_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild(&mut self, items: &[Item]) {
        let entries: Vec<SpatialEntry> = items
            .iter()
            .enumerate()
            .map(|(z, item)| {
                SpatialEntry::new(item.id.clone(), z, item.position.to_point(), self.card_size)
            })
            .collect();

        self.entries = entries
            .iter()
            .map(|e| (e.item_id.clone(), e.clone()))
            .collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
