use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub type WarehouseId = u32;
pub type ItemId = u32;

/// Cubic units. Same unit as the dimensions it is computed from.
pub type Volume = f64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub length: f64,
}

impl Dimensions {
    pub fn new(height: f64, width: f64, length: f64) -> Self {
        Self { height, width, length }
    }

    pub fn volume(&self) -> Volume {
        self.height * self.width * self.length
    }

    /// Every side finite and strictly positive, with a finite volume. NaN fails.
    pub fn is_positive(&self) -> bool {
        self.sides().all(|side| side.is_finite() && side > 0.0) && self.volume().is_finite()
    }

    /// Every side finite and `>= 0`, with a finite volume. Zero-sized
    /// capacities are allowed.
    ///
    /// Finite sides can still overflow: `1e200 * 1e200 * 0.0` is NaN, and a
    /// NaN volume makes every capacity comparison false.
    pub fn is_non_negative(&self) -> bool {
        self.sides().all(|side| side.is_finite() && side >= 0.0) && self.volume().is_finite()
    }

    fn sides(&self) -> impl Iterator<Item = f64> {
        [self.height, self.width, self.length].into_iter()
    }
}

/// Inclusive whole-day range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "DayRange start must not be after end");
        Self { start, end }
    }

    /// Number of days in the range, both ends counted.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Every day from `start` through `end`, chronological.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |d| d.checked_add_days(Days::new(1)))
            .take_while(move |d| *d <= end)
    }
}

/// A booking of space: occupies its volume on every day of `[start, end]` while active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub dimensions: Dimensions,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        dimensions: Dimensions,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            dimensions,
            start,
            end,
            active: true,
        }
    }

    pub fn volume(&self) -> Volume {
        self.dimensions.volume()
    }

    /// True if this item takes up space on `day`.
    pub fn occupies(&self, day: NaiveDate) -> bool {
        self.active && self.start <= day && day <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub max_capacity: Dimensions,
    /// Sorted by `start`.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Warehouse {
    pub fn new(id: WarehouseId, max_capacity: Dimensions) -> Self {
        Self {
            id,
            max_capacity,
            items: Vec::new(),
        }
    }

    pub fn volume(&self) -> Volume {
        self.max_capacity.volume()
    }

    /// Insert item maintaining sort order by start date. Equal starts keep insertion order.
    pub fn insert_item(&mut self, item: Item) {
        let pos = self.items.partition_point(|i| i.start <= item.start);
        self.items.insert(pos, item);
    }

    /// Active items whose interval includes `day`.
    /// Items at index >= the partition point start after `day` and are skipped.
    pub fn items_on(&self, day: NaiveDate) -> impl Iterator<Item = &Item> {
        let right_bound = self.items.partition_point(|i| i.start <= day);
        self.items[..right_bound]
            .iter()
            .filter(move |i| i.occupies(day))
    }

    /// Sum of the volumes of active items on `day`.
    pub fn occupied_on(&self, day: NaiveDate) -> Volume {
        self.items_on(day).map(Item::volume).sum()
    }

    /// Smallest item id not yet used in this warehouse.
    pub fn next_item_id(&self) -> ItemId {
        self.items.iter().map(|i| i.id).max().map_or(1, |id| id + 1)
    }
}

// ── Query result types ───────────────────────────────────────────

/// Occupied volume summed over every day of a range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WarehouseUsage {
    pub warehouse_id: WarehouseId,
    pub volume_days: Volume,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn cube(side: f64) -> Dimensions {
        Dimensions::new(side, side, side)
    }

    #[test]
    fn dimensions_volume() {
        assert_eq!(Dimensions::new(2.0, 3.0, 4.0).volume(), 24.0);
        assert_eq!(cube(10.0).volume(), 1000.0);
    }

    #[test]
    fn dimensions_validity() {
        assert!(cube(1.0).is_positive());
        assert!(!Dimensions::new(0.0, 1.0, 1.0).is_positive());
        assert!(!Dimensions::new(1.0, -1.0, 1.0).is_positive());
        assert!(!Dimensions::new(1.0, 1.0, f64::NAN).is_positive());

        assert!(Dimensions::new(0.0, 5.0, 5.0).is_non_negative());
        assert!(!Dimensions::new(-0.5, 5.0, 5.0).is_non_negative());
        assert!(!Dimensions::new(f64::INFINITY, 5.0, 5.0).is_non_negative());
    }

    #[test]
    fn overflowing_volume_is_invalid() {
        assert!(Dimensions::new(1e200, 1e200, 0.0).volume().is_nan());
        assert!(!Dimensions::new(1e200, 1e200, 0.0).is_non_negative());
        assert!(!Dimensions::new(1e200, 1e200, 1.0).is_non_negative());
        assert!(!Dimensions::new(1e200, 1e200, 1.0).is_positive());
        assert!(!Dimensions::new(f64::INFINITY, 1.0, 1.0).is_positive());
    }

    #[test]
    fn day_range_basics() {
        let r = DayRange::new(day("2025-01-10"), day("2025-01-12"));
        assert_eq!(r.len_days(), 3);
        assert!(r.contains(day("2025-01-10")));
        assert!(r.contains(day("2025-01-12"))); // inclusive
        assert!(!r.contains(day("2025-01-13")));
        assert!(!r.contains(day("2025-01-09")));
    }

    #[test]
    fn day_range_iterates_inclusive() {
        let r = DayRange::new(day("2024-02-27"), day("2024-03-01"));
        let days: Vec<_> = r.days().collect();
        assert_eq!(
            days,
            vec![
                day("2024-02-27"),
                day("2024-02-28"),
                day("2024-02-29"),
                day("2024-03-01"),
            ]
        );
    }

    #[test]
    fn day_range_single_day() {
        let r = DayRange::new(day("2025-01-10"), day("2025-01-10"));
        assert_eq!(r.len_days(), 1);
        assert_eq!(r.days().count(), 1);
    }

    #[test]
    fn item_occupies_inclusive_bounds() {
        let item = Item::new(1, "crate", cube(2.0), day("2024-01-01"), day("2024-01-05"));
        assert!(item.occupies(day("2024-01-01")));
        assert!(item.occupies(day("2024-01-05")));
        assert!(!item.occupies(day("2023-12-31")));
        assert!(!item.occupies(day("2024-01-06")));
    }

    #[test]
    fn inactive_item_never_occupies() {
        let mut item = Item::new(1, "crate", cube(2.0), day("2024-01-01"), day("2024-01-05"));
        item.active = false;
        assert!(!item.occupies(day("2024-01-03")));
    }

    #[test]
    fn items_kept_in_start_order() {
        let mut wh = Warehouse::new(1, cube(10.0));
        wh.insert_item(Item::new(1, "c", cube(1.0), day("2025-03-01"), day("2025-03-02")));
        wh.insert_item(Item::new(2, "a", cube(1.0), day("2025-01-01"), day("2025-01-02")));
        wh.insert_item(Item::new(3, "b", cube(1.0), day("2025-02-01"), day("2025-02-02")));
        let ids: Vec<_> = wh.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn equal_starts_keep_insertion_order() {
        let mut wh = Warehouse::new(1, cube(10.0));
        wh.insert_item(Item::new(7, "first", cube(1.0), day("2025-01-01"), day("2025-01-02")));
        wh.insert_item(Item::new(3, "second", cube(1.0), day("2025-01-01"), day("2025-01-09")));
        assert_eq!(wh.items[0].id, 7);
        assert_eq!(wh.items[1].id, 3);
    }

    #[test]
    fn occupied_on_sums_overlapping_items() {
        let mut wh = Warehouse::new(1, cube(10.0));
        wh.insert_item(Item::new(1, "a", cube(2.0), day("2024-01-01"), day("2024-01-05")));
        wh.insert_item(Item::new(2, "b", Dimensions::new(1.0, 1.0, 4.0), day("2024-01-03"), day("2024-01-10")));
        // Starts after the query day, skipped by the partition point.
        wh.insert_item(Item::new(3, "c", cube(3.0), day("2024-02-01"), day("2024-02-02")));

        assert_eq!(wh.occupied_on(day("2024-01-02")), 8.0);
        assert_eq!(wh.occupied_on(day("2024-01-04")), 12.0);
        assert_eq!(wh.occupied_on(day("2024-01-07")), 4.0);
        assert_eq!(wh.occupied_on(day("2024-01-20")), 0.0);
    }

    #[test]
    fn occupied_on_long_item_spanning_later_starts() {
        let mut wh = Warehouse::new(1, cube(10.0));
        wh.insert_item(Item::new(1, "long", cube(1.0), day("2024-01-01"), day("2024-12-31")));
        wh.insert_item(Item::new(2, "short", cube(2.0), day("2024-06-01"), day("2024-06-01")));
        assert_eq!(wh.occupied_on(day("2024-06-01")), 9.0);
        assert_eq!(wh.occupied_on(day("2024-06-02")), 1.0);
    }

    #[test]
    fn next_item_id() {
        let mut wh = Warehouse::new(1, cube(10.0));
        assert_eq!(wh.next_item_id(), 1);
        wh.insert_item(Item::new(4, "a", cube(1.0), day("2024-01-01"), day("2024-01-01")));
        wh.insert_item(Item::new(2, "b", cube(1.0), day("2024-01-02"), day("2024-01-02")));
        assert_eq!(wh.next_item_id(), 5);
    }

    #[test]
    fn item_active_defaults_to_true() {
        let json = r#"{
            "id": 1,
            "name": "pallet",
            "dimensions": { "height": 1.0, "width": 2.0, "length": 3.0 },
            "start": "2025-01-10",
            "end": "2025-01-12"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert!(item.active);
        assert_eq!(item.volume(), 6.0);
        assert_eq!(item.start, day("2025-01-10"));
    }
}
