use std::collections::BTreeMap;
use std::time::Instant;

use chrono::NaiveDate;
use tracing::debug;

use crate::model::*;
use crate::observability::{self, record_query};

use super::occupancy::{available_by_day, first_overflow_day, fully_utilized_days, least_used, volume_days};
use super::validate::{require_warehouses, today, validate_not_past, validate_range, validate_required};
use super::{Engine, EngineError};

impl Engine {
    /// First warehouse, in list order, with room for `required` on every day of
    /// `[start, end]`. `Ok(None)` when no warehouse has room.
    pub fn find_available_warehouse(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        required: Dimensions,
    ) -> Result<Option<WarehouseId>, EngineError> {
        self.find_available_warehouse_as_of(today(), start, end, required)
    }

    /// Same as `find_available_warehouse` with an explicit "today".
    pub fn find_available_warehouse_as_of(
        &self,
        today: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        required: Dimensions,
    ) -> Result<Option<WarehouseId>, EngineError> {
        let started = Instant::now();
        let result = self.find_available(today, start, end, &required);
        record_query(observability::FIND_AVAILABLE_WAREHOUSE, result.is_ok(), started);
        result
    }

    fn find_available(
        &self,
        today: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        required: &Dimensions,
    ) -> Result<Option<WarehouseId>, EngineError> {
        require_warehouses(&self.warehouses)?;
        validate_required(required)?;
        let range = validate_range(start, end)?;
        validate_not_past(start, today)?;

        let volume = required.volume();
        for wh in &self.warehouses {
            match first_overflow_day(wh, &range, volume) {
                None => {
                    debug!("find_available_warehouse {start}..={end} volume {volume}: warehouse {}", wh.id);
                    return Ok(Some(wh.id));
                }
                Some(day) => debug!("warehouse {} cannot take volume {volume} on {day}", wh.id),
            }
        }
        debug!("find_available_warehouse {start}..={end} volume {volume}: none");
        Ok(None)
    }

    /// Days in `[start, end]` on which aggregate occupancy reaches aggregate capacity.
    pub fn fully_utilized_dates(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, EngineError> {
        let started = Instant::now();
        let result = self.checked_range(start, end).map(|range| {
            let days = fully_utilized_days(&self.warehouses, &range);
            debug!("fully_utilized_dates {start}..={end}: {} of {} days", days.len(), range.len_days());
            days
        });
        record_query(observability::FULLY_UTILIZED_DATES, result.is_ok(), started);
        result
    }

    /// Aggregate free volume for every day in `[start, end]`. Negative when overbooked.
    pub fn available_capacity(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, Volume>, EngineError> {
        let started = Instant::now();
        let result = self.checked_range(start, end).map(|range| {
            debug!("available_capacity {start}..={end}: {} days", range.len_days());
            available_by_day(&self.warehouses, &range)
        });
        record_query(observability::AVAILABLE_CAPACITY, result.is_ok(), started);
        result
    }

    /// Volume-days per warehouse over `[start, end]`, in list order.
    pub fn usage_by_warehouse(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<WarehouseUsage>, EngineError> {
        let range = self.checked_range(start, end)?;
        Ok(self.usages(&range))
    }

    /// Warehouse with the fewest volume-days over `[start, end]`.
    ///
    /// A tie goes to the warehouse added first. `Ok(None)` when the lowest
    /// usage is exactly zero, even if other warehouses are in use.
    pub fn least_used_warehouse(&self, start: NaiveDate, end: NaiveDate) -> Result<Option<WarehouseId>, EngineError> {
        let started = Instant::now();
        let result = self.checked_range(start, end).map(|range| {
            let id = least_used(&self.usages(&range));
            debug!("least_used_warehouse {start}..={end}: {id:?}");
            id
        });
        record_query(observability::LEAST_USED_WAREHOUSE, result.is_ok(), started);
        result
    }

    fn checked_range(&self, start: NaiveDate, end: NaiveDate) -> Result<DayRange, EngineError> {
        require_warehouses(&self.warehouses)?;
        validate_range(start, end)
    }

    fn usages(&self, range: &DayRange) -> Vec<WarehouseUsage> {
        self.warehouses
            .iter()
            .map(|wh| WarehouseUsage {
                warehouse_id: wh.id,
                volume_days: volume_days(wh, range),
            })
            .collect()
    }
}
