mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{storage, utils};
pub use interfaces::{handlers, repositories, routes};

use interfaces::repositories::memory::MemoryStore;
use storage::local::LocalResumeStorage;
use use_cases::candidates::CandidateHandler;

pub type AppCandidateHandler = CandidateHandler<MemoryStore, LocalResumeStorage>;

pub struct AppState {
    pub candidates: AppCandidateHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let store = MemoryStore::new();
        let resume_storage = LocalResumeStorage::new(&config.upload_dir);

        AppState {
            candidates: CandidateHandler::new(store, resume_storage),
        }
    }
}
