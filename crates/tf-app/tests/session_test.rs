//! UploadSession start/cancel semantics.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use tf_app::UploadSession;
use tf_core::{ClipboardContents, UploadError, UploadOutcome};

fn hanging_harness() -> Harness {
    Harness::new(
        FakeClipboard::holding(ClipboardContents::with_text("payload")),
        FakeFileSystem::default(),
        FakeTransport::new(TransportBehavior::Hang),
    )
}

#[tokio::test]
async fn session_yields_pipeline_outcome() {
    let harness = Harness::text("hello");
    let session = UploadSession::start(Arc::new(harness.pipeline()));

    let outcome = session.outcome().await;

    assert_eq!(outcome.link(), Some(ENCODED_LINK));
    assert!(!outcome.is_cancelled());
}

#[tokio::test]
async fn cancel_ends_outstanding_upload() {
    let harness = hanging_harness();
    let session = UploadSession::start(Arc::new(harness.pipeline()));
    harness.transport.started.notified().await;
    assert!(!session.is_finished());

    session.cancel();
    let outcome = tokio::time::timeout(Duration::from_secs(5), session.outcome())
        .await
        .expect("outcome after cancel");

    assert_eq!(outcome, UploadOutcome::Cancelled);
    assert!(harness.transport.was_aborted());
    assert!(harness.notifier.sent().is_empty());
}

#[tokio::test]
async fn dropping_session_cancels_run() {
    let harness = hanging_harness();
    let session = UploadSession::start(Arc::new(harness.pipeline()));
    harness.transport.started.notified().await;
    let token = session.cancellation();

    drop(session);

    assert!(token.is_cancelled());
    tokio::time::timeout(Duration::from_secs(5), async {
        while !harness.transport.was_aborted() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("request released after drop");
    assert!(harness.clipboard.written().is_empty());
}

#[tokio::test]
async fn retry_is_a_fresh_session() {
    let harness = Harness::new(
        FakeClipboard::holding(ClipboardContents::empty()),
        FakeFileSystem::default(),
        FakeTransport::ok(),
    );
    let pipeline = Arc::new(harness.pipeline());

    let first = UploadSession::start(pipeline.clone()).outcome().await;
    assert_eq!(first, UploadOutcome::Failure(UploadError::EmptyClipboard));

    harness
        .clipboard
        .set_contents(ClipboardContents::with_text("now there is text"));
    let second = UploadSession::start(pipeline).outcome().await;

    assert!(second.is_success());
    assert_eq!(harness.transport.submitted().len(), 1);
    assert_eq!(harness.timer.starts(), 2);
    assert_eq!(harness.timer.stops(), 2);
}
