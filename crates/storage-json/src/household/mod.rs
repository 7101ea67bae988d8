mod repository;

pub use repository::HouseholdRepository;
