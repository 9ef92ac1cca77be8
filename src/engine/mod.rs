mod error;
mod mutations;
mod occupancy;
mod queries;
mod validate;

pub use error::EngineError;
pub use occupancy::{
    available_by_day, first_overflow_day, fits, fully_utilized_days, least_used, occupied_across,
    total_capacity, volume_days,
};

use chrono::NaiveDate;

use crate::model::*;

/// In-memory allocation engine over a list of warehouses.
///
/// Queries borrow `&self` and never touch stored state. Warehouses and items
/// only come in through the setup calls in `mutations`, which validate them.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    /// Insertion order. Scans and tie-breaks follow it.
    warehouses: Vec<Warehouse>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pre-assembled warehouses, running every warehouse and item
    /// through the same checks as `add_warehouse` / `add_item`.
    pub fn with_warehouses(warehouses: Vec<Warehouse>) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        for wh in warehouses {
            engine.add_warehouse(wh.id, wh.max_capacity)?;
            for item in wh.items {
                engine.add_item(wh.id, item)?;
            }
        }
        Ok(engine)
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    pub fn warehouse(&self, id: WarehouseId) -> Option<&Warehouse> {
        self.warehouses.iter().find(|w| w.id == id)
    }

    pub(super) fn warehouse_mut(&mut self, id: WarehouseId) -> Option<&mut Warehouse> {
        self.warehouses.iter_mut().find(|w| w.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }

    /// Sum of every warehouse's volume.
    pub fn total_capacity(&self) -> Volume {
        total_capacity(&self.warehouses)
    }

    /// Occupied volume on `day` across all warehouses.
    pub fn occupied_on(&self, day: NaiveDate) -> Volume {
        occupied_across(&self.warehouses, day)
    }
}
