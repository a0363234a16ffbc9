pub mod persistence;

pub use persistence::InMemoryPlateRepository;
