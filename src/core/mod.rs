pub mod browser;
pub mod lookup;

pub use crate::domain::model::{ParkName, ParkRecord, StateCode};
pub use crate::domain::ports::{ConfigProvider, ParkSource, ParkStore};
pub use crate::utils::error::Result;
