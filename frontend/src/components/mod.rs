pub mod crate_store;
pub mod crate_detail;
pub mod crate_spinner;

pub use crate_store::CrateStore;
pub use crate_detail::CrateDetail;
pub use crate_spinner::CrateSpinner;
