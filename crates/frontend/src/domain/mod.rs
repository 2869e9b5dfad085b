pub mod a001_equipment;
