use std::sync::Arc;

use crate::config::Config;
use crate::db::SubmissionRepository;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub submissions: Arc<dyn SubmissionRepository>,
}
