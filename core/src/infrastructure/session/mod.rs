pub mod repositories;

pub use repositories::in_memory_session_repository::InMemorySessionRepository;
