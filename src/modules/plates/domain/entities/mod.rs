pub mod plate_record;

pub use plate_record::{NewPlateRecord, PlateRecord};
