pub mod file_repo;
mod in_memory;

pub use file_repo::FileDraftRepository;
pub use in_memory::InMemoryDraftRepository;
