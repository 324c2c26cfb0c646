use async_trait::async_trait;
use ferrous_arp_application::ports::{CommandOutput, CommandRunner, NeighborTable};
use ferrous_arp_domain::{DomainError, NeighborRecord, Platform};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Ordered record of every call made to the mocks sharing it.
pub type CallLog = Arc<RwLock<Vec<String>>>;

pub struct MockCommandRunner {
    responses: Arc<RwLock<HashMap<String, Result<CommandOutput, DomainError>>>>,
    calls: Arc<RwLock<Vec<(String, Vec<String>)>>>,
    log: CallLog,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::with_log(Arc::new(RwLock::new(Vec::new())))
    }

    pub fn with_log(log: CallLog) -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            log,
        }
    }

    pub async fn set_response(&self, program: &str, response: Result<CommandOutput, DomainError>) {
        self.responses
            .write()
            .await
            .insert(program.to_string(), response);
    }

    pub async fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl CommandRunner for MockCommandRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, DomainError> {
        self.calls
            .write()
            .await
            .push((program.to_string(), args.to_vec()));
        self.log.write().await.push(format!("run:{}", program));

        self.responses
            .read()
            .await
            .get(program)
            .cloned()
            .unwrap_or_else(|| Ok(CommandOutput::success("")))
    }
}

pub struct MockNeighborTable {
    records: Arc<RwLock<Vec<NeighborRecord>>>,
    error: Arc<RwLock<Option<DomainError>>>,
    requested: Arc<RwLock<Vec<Option<String>>>>,
    call_count: Arc<AtomicU64>,
    log: CallLog,
}

impl MockNeighborTable {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<NeighborRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            error: Arc::new(RwLock::new(None)),
            requested: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub async fn set_error(&self, error: DomainError) {
        *self.error.write().await = Some(error);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn requested(&self) -> Vec<Option<String>> {
        self.requested.read().await.clone()
    }
}

#[async_trait]
impl NeighborTable for MockNeighborTable {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn probe_args(&self, ip: &str) -> Vec<String> {
        vec!["-c".to_string(), "1".to_string(), ip.to_string()]
    }

    async fn read_table(&self, ip: Option<&str>) -> Result<Vec<NeighborRecord>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.requested.write().await.push(ip.map(str::to_string));
        self.log.write().await.push("read_table".to_string());

        if let Some(error) = self.error.read().await.clone() {
            return Err(error);
        }
        Ok(self.records.read().await.clone())
    }
}
