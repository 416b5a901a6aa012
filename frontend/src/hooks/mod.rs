pub mod use_currency;

pub use use_currency::*;
