pub mod seed;
pub mod store;

pub use store::{ClinicDb, SlotKey, StoreError};
