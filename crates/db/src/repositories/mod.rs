//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods that must run inside
//! a caller-owned transaction take `&mut Transaction<'_, Postgres>` instead.

pub mod location_repo;
pub mod part_repo;
pub mod part_vehicle_repo;
pub mod search_repo;
pub mod stock_repo;
pub mod vehicle_repo;

pub use location_repo::LocationRepo;
pub use part_repo::PartRepo;
pub use part_vehicle_repo::PartVehicleRepo;
pub use search_repo::SearchRepo;
pub use stock_repo::StockRepo;
pub use vehicle_repo::VehicleRepo;
