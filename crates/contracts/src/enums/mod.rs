pub mod equipment_category;

pub use equipment_category::{EquipmentCategory, EquipmentSubCategory};
