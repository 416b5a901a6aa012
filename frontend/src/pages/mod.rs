pub mod home;
pub mod crate_opening;
pub mod wheel;
