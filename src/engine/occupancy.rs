use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::*;

// ── Occupancy arithmetic ──────────────────────────────────────────
//
// Everything here walks the range one day at a time. Per-day sums add items
// in warehouse list order and warehouses in engine order, so results are
// reproducible down to float rounding.

/// Sum of every warehouse's volume.
pub fn total_capacity(warehouses: &[Warehouse]) -> Volume {
    warehouses.iter().map(Warehouse::volume).sum()
}

/// Occupied volume on `day` summed across all warehouses.
pub fn occupied_across(warehouses: &[Warehouse], day: NaiveDate) -> Volume {
    warehouses.iter().map(|w| w.occupied_on(day)).sum()
}

/// First day in `range` on which `required` more volume would not fit, if any.
pub fn first_overflow_day(warehouse: &Warehouse, range: &DayRange, required: Volume) -> Option<NaiveDate> {
    let capacity = warehouse.volume();
    range
        .days()
        .find(|&day| warehouse.occupied_on(day) + required > capacity)
}

/// True if `required` fits on every day of `range`.
pub fn fits(warehouse: &Warehouse, range: &DayRange, required: Volume) -> bool {
    first_overflow_day(warehouse, range, required).is_none()
}

/// Occupied volume summed over every day of `range`.
pub fn volume_days(warehouse: &Warehouse, range: &DayRange) -> Volume {
    range.days().map(|day| warehouse.occupied_on(day)).sum()
}

/// Days whose aggregate occupancy meets or exceeds aggregate capacity, chronological.
pub fn fully_utilized_days(warehouses: &[Warehouse], range: &DayRange) -> Vec<NaiveDate> {
    let capacity = total_capacity(warehouses);
    range
        .days()
        .filter(|&day| occupied_across(warehouses, day) >= capacity)
        .collect()
}

/// Aggregate free volume per day. Overbooked days go negative.
pub fn available_by_day(warehouses: &[Warehouse], range: &DayRange) -> BTreeMap<NaiveDate, Volume> {
    let capacity = total_capacity(warehouses);
    range
        .days()
        .map(|day| (day, capacity - occupied_across(warehouses, day)))
        .collect()
}

/// Lowest `volume_days`; the earliest entry wins a tie.
/// `None` when the slice is empty or the minimum is exactly zero.
pub fn least_used(usages: &[WarehouseUsage]) -> Option<WarehouseId> {
    let mut best: Option<&WarehouseUsage> = None;
    for usage in usages {
        if best.is_none_or(|b| usage.volume_days < b.volume_days) {
            best = Some(usage);
        }
    }
    match best {
        Some(b) if b.volume_days != 0.0 => Some(b.warehouse_id),
        _ => None,
    }
}
