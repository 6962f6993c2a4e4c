//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod hex_color_repo;
pub mod host_repo;
pub mod season_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use hex_color_repo::HexColorRepo;
pub use host_repo::HostRepo;
pub use season_repo::SeasonRepo;
pub use user_repo::UserRepo;
