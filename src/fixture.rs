//! Loading a warehouse set from JSON, plus the built-in demo set.
//!
//! ```json
//! {
//!   "warehouses": [
//!     {
//!       "id": 1,
//!       "max_capacity": { "height": 10, "width": 10, "length": 10 },
//!       "items": [
//!         {
//!           "id": 1,
//!           "name": "pallet",
//!           "dimensions": { "height": 2, "width": 2, "length": 2 },
//!           "start": "2025-01-10",
//!           "end": "2025-01-12"
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use chrono::{Days, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use crate::engine::{Engine, EngineError};
use crate::model::*;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("reading fixture: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing fixture: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid fixture: {0}")]
    Engine(#[from] EngineError),
}

#[derive(Debug, Deserialize)]
struct FixtureDoc {
    warehouses: Vec<Warehouse>,
}

/// Parse a fixture document and build an engine from it.
pub fn parse(json: &str) -> Result<Engine, FixtureError> {
    let doc: FixtureDoc = serde_json::from_str(json)?;
    Ok(Engine::with_warehouses(doc.warehouses)?)
}

pub fn load(path: &Path) -> Result<Engine, FixtureError> {
    let json = std::fs::read_to_string(path)?;
    parse(&json)
}

/// One 10x10x10 warehouse holding a 2x2x2 item from `today` for ten days,
/// and an empty 15x25x35 warehouse.
pub fn demo(today: NaiveDate) -> Result<Engine, EngineError> {
    let mut engine = Engine::new();
    engine.add_warehouse(1, Dimensions::new(10.0, 10.0, 10.0))?;
    engine.add_warehouse(2, Dimensions::new(15.0, 25.0, 35.0))?;

    let end = today
        .checked_add_days(Days::new(10))
        .ok_or(EngineError::LimitExceeded("demo date out of range"))?;
    engine.add_item(1, Item::new(1, "Item1", Dimensions::new(2.0, 2.0, 2.0), today, end))?;
    Ok(engine)
}
