pub mod dto;
pub mod use_cases;

pub use dto::{GetPlateRequest, SearchPlatesRequest};
pub use use_cases::{GetPlateUseCase, ListPlatesUseCase, SearchPlatesUseCase};
