mod in_memory_plate_repository;

pub use in_memory_plate_repository::InMemoryPlateRepository;
