//! In-memory ports shared by the tf-app integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use anyhow::{anyhow, Result};
use bytes::Bytes;
use tokio::sync::Notify;

use tf_app::{UploadClipboard, UploadPolicy, UploadPorts};
use tf_core::ports::{
    ClipboardPort, ClockPort, ElapsedTimerPort, FileStat, FileSystemPort, Notification,
    NotifierPort, QrRendererPort, UploadProgressPort, UploadTransportPort,
};
use tf_core::{ClipboardContents, QrPayload, SanitizedUpload, UploadResponse, UploadStage};

pub const NOW_MS: i64 = 1_700_000_000_000;
pub const PLAIN_LINK: &str = "https://d.tmpfile.link/public/2024-11-20/a b/shot.png";
pub const ENCODED_LINK: &str = "https://d.tmpfile.link/public/2024-11-20/a%20b/shot.png";
pub const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

static TRACE_INIT: Once = Once::new();

pub fn init_tracing() {
    TRACE_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn ok_response() -> UploadResponse {
    UploadResponse::new(
        200,
        format!(r#"{{"downloadLink":"{PLAIN_LINK}","downloadLinkEncoded":"{ENCODED_LINK}"}}"#),
    )
}

#[derive(Default)]
pub struct FakeClipboard {
    contents: Mutex<ClipboardContents>,
    read_error: Option<String>,
    fail_writes: bool,
    pub reads: AtomicUsize,
    pub written: Mutex<Vec<String>>,
}

impl FakeClipboard {
    pub fn holding(contents: ClipboardContents) -> Self {
        Self {
            contents: Mutex::new(contents),
            ..Self::default()
        }
    }

    pub fn unreadable(reason: &str) -> Self {
        Self {
            read_error: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn rejecting_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_contents(&self, contents: ClipboardContents) {
        *self.contents.lock().unwrap() = contents;
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ClipboardPort for FakeClipboard {
    async fn read(&self) -> Result<ClipboardContents> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match &self.read_error {
            Some(reason) => Err(anyhow!(reason.clone())),
            None => Ok(self.contents.lock().unwrap().clone()),
        }
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("clipboard is locked by another process"));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

enum FakeEntry {
    Dir,
    File { bytes: Bytes, reported_size: u64 },
    Unreadable,
}

#[derive(Default)]
pub struct FakeFileSystem {
    entries: HashMap<PathBuf, FakeEntry>,
    pub reads: AtomicUsize,
}

impl FakeFileSystem {
    pub fn with_file(mut self, path: impl Into<PathBuf>, bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        let reported_size = bytes.len() as u64;
        self.entries.insert(
            path.into(),
            FakeEntry::File {
                bytes,
                reported_size,
            },
        );
        self
    }

    /// A file whose `stat` size differs from what a read returns.
    pub fn with_sized_file(
        mut self,
        path: impl Into<PathBuf>,
        reported_size: u64,
        bytes: impl Into<Bytes>,
    ) -> Self {
        self.entries.insert(
            path.into(),
            FakeEntry::File {
                bytes: bytes.into(),
                reported_size,
            },
        );
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(path.into(), FakeEntry::Dir);
        self
    }

    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.insert(path.into(), FakeEntry::Unreadable);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FileSystemPort for FakeFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    async fn stat(&self, path: &Path) -> Result<FileStat> {
        match self.entries.get(path) {
            Some(FakeEntry::Dir) => Ok(FileStat {
                is_dir: true,
                size_bytes: 4096,
            }),
            Some(FakeEntry::File { reported_size, .. }) => Ok(FileStat {
                is_dir: false,
                size_bytes: *reported_size,
            }),
            Some(FakeEntry::Unreadable) => Ok(FileStat {
                is_dir: false,
                size_bytes: 10,
            }),
            None => Err(anyhow!("no such file")),
        }
    }

    async fn read_all(&self, path: &Path) -> Result<Bytes> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match self.entries.get(path) {
            Some(FakeEntry::File { bytes, .. }) => Ok(bytes.clone()),
            Some(FakeEntry::Unreadable) => Err(anyhow!("permission denied")),
            _ => Err(anyhow!("not a readable file")),
        }
    }
}

pub enum TransportBehavior {
    Respond(UploadResponse),
    Fail(String),
    /// Never answers; the request future is only released by cancellation.
    Hang,
}

pub struct FakeTransport {
    behavior: TransportBehavior,
    pub submitted: Mutex<Vec<SanitizedUpload>>,
    pub started: Notify,
    pub aborted: Arc<AtomicBool>,
}

impl FakeTransport {
    pub fn new(behavior: TransportBehavior) -> Self {
        Self {
            behavior,
            submitted: Mutex::new(Vec::new()),
            started: Notify::new(),
            aborted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn responding(response: UploadResponse) -> Self {
        Self::new(TransportBehavior::Respond(response))
    }

    pub fn ok() -> Self {
        Self::responding(ok_response())
    }

    pub fn submitted(&self) -> Vec<SanitizedUpload> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn was_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }
}

struct DropFlag(Arc<AtomicBool>);

impl Drop for DropFlag {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl UploadTransportPort for FakeTransport {
    async fn submit(&self, upload: &SanitizedUpload) -> Result<UploadResponse> {
        self.submitted.lock().unwrap().push(upload.clone());
        match &self.behavior {
            TransportBehavior::Respond(response) => Ok(response.clone()),
            TransportBehavior::Fail(reason) => Err(anyhow!(reason.clone())),
            TransportBehavior::Hang => {
                let _flag = DropFlag(self.aborted.clone());
                self.started.notify_one();
                std::future::pending::<Result<UploadResponse>>().await
            }
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.sent.lock().unwrap().push(notification.clone());
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub stages: Mutex<Vec<UploadStage>>,
}

impl RecordingProgress {
    pub fn stages(&self) -> Vec<UploadStage> {
        self.stages.lock().unwrap().clone()
    }
}

impl UploadProgressPort for RecordingProgress {
    fn report(&self, stage: &UploadStage) {
        self.stages.lock().unwrap().push(stage.clone());
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

#[derive(Default)]
pub struct CountingTimer {
    pub starts: AtomicUsize,
    pub stops: AtomicUsize,
}

impl CountingTimer {
    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl ElapsedTimerPort for CountingTimer {
    fn start(&self) {
        self.starts.fetch_add(1, Ordering::SeqCst);
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }

    fn elapsed_secs(&self) -> u64 {
        0
    }
}

pub struct FakeQr {
    fail: bool,
}

impl FakeQr {
    pub fn working() -> Self {
        Self { fail: false }
    }

    pub fn broken() -> Self {
        Self { fail: true }
    }
}

#[async_trait::async_trait]
impl QrRendererPort for FakeQr {
    async fn render(&self, link: &str) -> Result<QrPayload> {
        if self.fail {
            return Err(anyhow!("qr service unreachable"));
        }
        Ok(QrPayload::Text(format!("QR<{link}>")))
    }
}

/// Every port of one pipeline, kept around so tests can inspect them.
pub struct Harness {
    pub clipboard: Arc<FakeClipboard>,
    pub fs: Arc<FakeFileSystem>,
    pub transport: Arc<FakeTransport>,
    pub notifier: Arc<RecordingNotifier>,
    pub progress: Arc<RecordingProgress>,
    pub timer: Arc<CountingTimer>,
    pub qr: Option<Arc<FakeQr>>,
    pub policy: UploadPolicy,
}

impl Harness {
    pub fn new(clipboard: FakeClipboard, fs: FakeFileSystem, transport: FakeTransport) -> Self {
        init_tracing();
        Self {
            clipboard: Arc::new(clipboard),
            fs: Arc::new(fs),
            transport: Arc::new(transport),
            notifier: Arc::new(RecordingNotifier::default()),
            progress: Arc::new(RecordingProgress::default()),
            timer: Arc::new(CountingTimer::default()),
            qr: None,
            policy: UploadPolicy::default(),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::new(
            FakeClipboard::holding(ClipboardContents::with_text(text)),
            FakeFileSystem::default(),
            FakeTransport::ok(),
        )
    }

    pub fn with_qr(mut self, qr: FakeQr) -> Self {
        self.qr = Some(Arc::new(qr));
        self
    }

    pub fn with_policy(mut self, policy: UploadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn ports_with_notifier(&self, notifier: Arc<dyn NotifierPort>) -> UploadPorts {
        UploadPorts {
            clipboard: self.clipboard.clone(),
            file_system: self.fs.clone(),
            transport: self.transport.clone(),
            notifier,
            qr_renderer: self
                .qr
                .clone()
                .map(|qr| qr as Arc<dyn QrRendererPort>),
            clock: Arc::new(FixedClock(NOW_MS)),
            timer: self.timer.clone(),
            progress: self.progress.clone(),
        }
    }

    pub fn pipeline(&self) -> UploadClipboard {
        UploadClipboard::from_ports(self.ports_with_notifier(self.notifier.clone()), self.policy)
            .with_working_dir(None)
    }
}
