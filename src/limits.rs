//! Hard caps on input sizes. Queries loop once per day, so the window bound
//! also bounds query cost.

/// Widest query window, in days (both ends counted). About a century.
pub const MAX_QUERY_DAYS: i64 = 36_525;

/// Longest item name accepted by setup calls, in bytes.
pub const MAX_NAME_LEN: usize = 256;

/// Most warehouses a single engine will hold.
pub const MAX_WAREHOUSES: usize = 100_000;

/// Most items a single warehouse will hold.
pub const MAX_ITEMS_PER_WAREHOUSE: usize = 1_000_000;
