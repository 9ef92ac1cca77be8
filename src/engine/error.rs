use thiserror::Error;

use crate::model::{ItemId, WarehouseId};

/// Every failure the engine reports. Display strings are stable: callers match on them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no warehouses available")]
    NoWarehouses,
    #[error("the 3D model has invalid dimensions (zero or negative)")]
    InvalidDimensions,
    #[error("start date cannot be later than end date")]
    StartAfterEnd,
    #[error("start date cannot be in the past")]
    StartInPast,
    #[error("required volume cannot be accommodated within the specified dates")]
    VolumeNotAccommodated,
    #[error("not found: warehouse {0}")]
    WarehouseNotFound(WarehouseId),
    #[error("already exists: warehouse {0}")]
    WarehouseExists(WarehouseId),
    #[error("already exists: item {1} in warehouse {0}")]
    ItemExists(WarehouseId, ItemId),
    #[error("limit exceeded: {0}")]
    LimitExceeded(&'static str),
}
