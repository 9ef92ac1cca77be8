pub mod engine;
pub mod fixture;
pub mod limits;
pub mod model;
pub mod observability;
