pub mod get_plate_request;
pub mod search_plates_request;

pub use get_plate_request::*;
pub use search_plates_request::*;
