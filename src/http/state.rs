use std::sync::Arc;

use tokio::sync::watch;

use crate::clock::entities::WorldClockEntry;
use crate::repository;

pub struct AppState {
    pub repo: Arc<dyn repository::session::Repository>,
    pub countries: Arc<dyn repository::country::Source>,
    pub worldtime: Arc<dyn repository::worldtime::TimeSource>,
    pub clock: watch::Receiver<Vec<WorldClockEntry>>,
}
