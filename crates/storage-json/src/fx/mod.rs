mod repository;

pub use repository::FxRepository;
