pub mod query;
pub mod router;
pub mod surface;
