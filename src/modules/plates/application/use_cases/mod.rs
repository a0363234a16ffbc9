pub mod get_plate;
pub mod list_plates;
pub mod search_plates;

pub use get_plate::*;
pub use list_plates::*;
pub use search_plates::*;
