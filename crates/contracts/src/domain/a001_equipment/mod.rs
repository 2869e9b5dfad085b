pub mod aggregate;

pub use aggregate::{EquipmentDto, EquipmentField};
