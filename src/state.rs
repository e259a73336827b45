use crate::counts::VisitorTally;
use crate::ledger::LedgerClient;
use crate::models::CacheData;
use crate::relay::MessageRelay;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub cache_path: PathBuf,
    pub cache: Arc<Mutex<CacheData>>,
    pub ledger: Option<LedgerClient>,
    pub relay: MessageRelay,
    pub visitors: VisitorTally,
}

impl AppState {
    pub fn new(
        cache_path: PathBuf,
        cache: CacheData,
        ledger: Option<LedgerClient>,
        relay: MessageRelay,
    ) -> Self {
        Self {
            cache_path,
            cache: Arc::new(Mutex::new(cache)),
            ledger,
            relay,
            visitors: VisitorTally::default(),
        }
    }
}
