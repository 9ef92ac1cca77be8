use std::path::PathBuf;

use chrono::{Days, NaiveDate};
use tracing::info;

use stowage::engine::Engine;
use stowage::fixture;
use stowage::model::Dimensions;

fn parse_date(var: &str, raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("{var}={raw}: {e}"))
}

/// `HxWxL`, e.g. `2x2x2`.
fn parse_dimensions(raw: &str) -> Result<Dimensions, String> {
    let sides: Vec<f64> = raw
        .split('x')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("STOWAGE_ITEM={raw}: {e}"))?;
    match sides.as_slice() {
        [h, w, l] => Ok(Dimensions::new(*h, *w, *l)),
        _ => Err(format!("STOWAGE_ITEM={raw}: expected HxWxL")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let today = chrono::Local::now().date_naive();
    let data: Option<PathBuf> = std::env::var("STOWAGE_DATA").ok().map(PathBuf::from);
    let start = match std::env::var("STOWAGE_START") {
        Ok(raw) => parse_date("STOWAGE_START", &raw)?,
        Err(_) => today.checked_add_days(Days::new(1)).ok_or("date out of range")?,
    };
    let end = match std::env::var("STOWAGE_END") {
        Ok(raw) => parse_date("STOWAGE_END", &raw)?,
        Err(_) => today.checked_add_days(Days::new(5)).ok_or("date out of range")?,
    };
    let item = parse_dimensions(&std::env::var("STOWAGE_ITEM").unwrap_or_else(|_| "2x2x2".into()))?;

    let engine: Engine = match &data {
        Some(path) => fixture::load(path)?,
        None => fixture::demo(today)?,
    };
    info!("stowage: {} warehouses, total volume {}", engine.warehouses().len(), engine.total_capacity());
    info!("  data: {}", data.as_ref().map_or("built-in demo".to_string(), |p| p.display().to_string()));
    info!("  range: {start}..={end}");

    match engine.find_available_warehouse(start, end, item) {
        Ok(Some(id)) => info!("available warehouse for {item:?}: {id}"),
        Ok(None) => info!("available warehouse for {item:?}: none"),
        Err(e) => tracing::error!("find_available_warehouse: {e}"),
    }

    match engine.fully_utilized_dates(start, end) {
        Ok(days) => info!("fully utilized dates: {days:?}"),
        Err(e) => tracing::error!("fully_utilized_dates: {e}"),
    }

    match engine.available_capacity(start, end) {
        Ok(capacity) => {
            for (day, free) in &capacity {
                info!("available capacity {day}: {free}");
            }
        }
        Err(e) => tracing::error!("available_capacity: {e}"),
    }

    match engine.least_used_warehouse(start, end) {
        Ok(Some(id)) => info!("least used warehouse: {id}"),
        Ok(None) => info!("least used warehouse: none"),
        Err(e) => tracing::error!("least_used_warehouse: {e}"),
    }

    Ok(())
}
