pub mod constants;
pub mod reel;
pub mod shared_crate_store;
pub mod shared_wheel;
