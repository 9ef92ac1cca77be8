use chrono::NaiveDate;
use tracing::{debug, info};

use crate::limits::*;
use crate::model::*;
use crate::observability;

use super::validate::{today, validate_item};
use super::{Engine, EngineError};

impl Engine {
    pub fn add_warehouse(&mut self, id: WarehouseId, max_capacity: Dimensions) -> Result<(), EngineError> {
        if self.warehouses.len() >= MAX_WAREHOUSES {
            return Err(EngineError::LimitExceeded("too many warehouses"));
        }
        if !max_capacity.is_non_negative() {
            return Err(EngineError::InvalidDimensions);
        }
        if self.warehouse(id).is_some() {
            return Err(EngineError::WarehouseExists(id));
        }

        self.warehouses.push(Warehouse::new(id, max_capacity));
        metrics::gauge!(observability::WAREHOUSES).set(self.warehouses.len() as f64);
        debug!("added warehouse {id} with volume {}", max_capacity.volume());
        Ok(())
    }

    /// Store an item as-is. No capacity check: setup may overbook.
    /// Item ids are unique within a warehouse.
    pub fn add_item(&mut self, warehouse_id: WarehouseId, item: Item) -> Result<(), EngineError> {
        validate_item(&item)?;
        let wh = self
            .warehouse_mut(warehouse_id)
            .ok_or(EngineError::WarehouseNotFound(warehouse_id))?;
        if wh.items.len() >= MAX_ITEMS_PER_WAREHOUSE {
            return Err(EngineError::LimitExceeded("too many items in warehouse"));
        }
        if wh.items.iter().any(|i| i.id == item.id) {
            return Err(EngineError::ItemExists(warehouse_id, item.id));
        }
        debug!("warehouse {warehouse_id}: item {} {}..={}", item.id, item.start, item.end);
        wh.insert_item(item);
        Ok(())
    }

    /// Book a new item into the first warehouse with room for it.
    pub fn allocate_item(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        name: impl Into<String>,
        dimensions: Dimensions,
    ) -> Result<(WarehouseId, ItemId), EngineError> {
        self.allocate_item_as_of(today(), start, end, name, dimensions)
    }

    /// Same as `allocate_item` with an explicit "today".
    pub fn allocate_item_as_of(
        &mut self,
        today: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
        name: impl Into<String>,
        dimensions: Dimensions,
    ) -> Result<(WarehouseId, ItemId), EngineError> {
        let name = name.into();
        if name.len() > MAX_NAME_LEN {
            return Err(EngineError::LimitExceeded("item name too long"));
        }
        let warehouse_id = self
            .find_available_warehouse_as_of(today, start, end, dimensions)?
            .ok_or(EngineError::VolumeNotAccommodated)?;
        let item_id = self
            .warehouse(warehouse_id)
            .ok_or(EngineError::WarehouseNotFound(warehouse_id))?
            .next_item_id();

        self.add_item(warehouse_id, Item::new(item_id, name, dimensions, start, end))?;
        info!("allocated item {item_id} in warehouse {warehouse_id} for {start}..={end}");
        Ok((warehouse_id, item_id))
    }
}
