use chrono::NaiveDate;

use crate::limits::*;
use crate::model::*;

use super::EngineError;

/// Today's date on the local calendar.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn require_warehouses(warehouses: &[Warehouse]) -> Result<(), EngineError> {
    if warehouses.is_empty() {
        return Err(EngineError::NoWarehouses);
    }
    Ok(())
}

pub(crate) fn validate_required(dimensions: &Dimensions) -> Result<(), EngineError> {
    if !dimensions.is_positive() {
        return Err(EngineError::InvalidDimensions);
    }
    Ok(())
}

/// Order check first, then the window cap.
pub(crate) fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<DayRange, EngineError> {
    if start > end {
        return Err(EngineError::StartAfterEnd);
    }
    let range = DayRange::new(start, end);
    if range.len_days() > MAX_QUERY_DAYS {
        return Err(EngineError::LimitExceeded("query window too wide"));
    }
    Ok(range)
}

pub(crate) fn validate_not_past(start: NaiveDate, today: NaiveDate) -> Result<(), EngineError> {
    if start < today {
        return Err(EngineError::StartInPast);
    }
    Ok(())
}

/// Setup-time checks for an item about to be stored.
pub(crate) fn validate_item(item: &Item) -> Result<(), EngineError> {
    if item.name.len() > MAX_NAME_LEN {
        return Err(EngineError::LimitExceeded("item name too long"));
    }
    if !item.dimensions.is_non_negative() {
        return Err(EngineError::InvalidDimensions);
    }
    if item.start > item.end {
        return Err(EngineError::StartAfterEnd);
    }
    Ok(())
}
