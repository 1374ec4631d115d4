//! Containment boundary around the import flow.
//!
//! Each attempt runs in its own task. A panic inside it (for instance in a notification
//! sink) is logged and trips the boundary; from then on the static fallback notice
//! is returned instead of running imports, until `reset` is called.

use crate::adapters::ui::ImportControl;
use crate::domain::{ImportOutcome, SelectedFile};
use crate::ports::ImportPort;
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};

pub const FALLBACK_NOTICE: &str = "Import functionality is currently unavailable.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryResult {
    /// The attempt ran to completion (successfully or not).
    Completed(ImportOutcome),
    /// The import surface is degraded; carries the fallback notice.
    Unavailable(&'static str),
}

pub struct ContainmentBoundary {
    inner: Arc<dyn ImportPort>,
    tripped: AtomicBool,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl ContainmentBoundary {
    pub fn new(inner: Arc<dyn ImportPort>) -> Self {
        Self {
            inner,
            tripped: AtomicBool::new(false),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.tripped.load(Ordering::SeqCst)
    }

    /// Re-arm after a fault.
    pub fn reset(&self) {
        if self.tripped.swap(false, Ordering::SeqCst) {
            info!("import boundary re-armed");
        }
    }

    /// Runs an attempt for the control's current selection. The control is
    /// cleared first, whatever happens next.
    pub async fn submit(&self, control: &mut ImportControl) -> BoundaryResult {
        let file = control.take_selection();
        self.run(file).await
    }

    pub async fn run(&self, file: Option<SelectedFile>) -> BoundaryResult {
        if self.is_degraded() {
            warn!("import boundary is degraded; showing fallback");
            return BoundaryResult::Unavailable(FALLBACK_NOTICE);
        }

        let inner = Arc::clone(&self.inner);
        match tokio::spawn(async move { inner.import_file(file).await }).await {
            Ok(outcome) => BoundaryResult::Completed(outcome),
            Err(e) => {
                if e.is_panic() {
                    let payload = e.into_panic();
                    error!(fault = %panic_message(payload.as_ref()), "fault escaped chat import");
                } else {
                    error!(error = %e, "chat import task did not complete");
                }
                self.tripped.store(true, Ordering::SeqCst);
                BoundaryResult::Unavailable(FALLBACK_NOTICE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::notify::RecordingNotifier;
    use crate::domain::{DomainError, ShapePolicy};
    use crate::ports::{FileTextReader, ImportHandler, NotificationSink};
    use crate::usecases::import_service::ChatImportService;
    use crate::usecases::import_service::test_support::{SpyHandler, StaticReader};
    use std::sync::atomic::AtomicUsize;

    /// Sink that blows up on its first error notice.
    struct ExplodingNotifier {
        errors: AtomicUsize,
    }

    impl NotificationSink for ExplodingNotifier {
        fn success(&self, _message: &str) {}

        fn error(&self, message: &str) {
            if self.errors.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("toast container missing while showing: {message}");
            }
        }
    }

    fn boundary_with(reader: StaticReader, notifier: Arc<dyn NotificationSink>) -> ContainmentBoundary {
        let handler = Arc::new(SpyHandler::new(Arc::new(RecordingNotifier::new())));
        let service = ChatImportService::new(
            Arc::new(reader) as Arc<dyn FileTextReader>,
            Some(handler as Arc<dyn ImportHandler>),
            notifier,
            ShapePolicy::Strict,
        );
        ContainmentBoundary::new(Arc::new(service))
    }

    #[tokio::test]
    async fn passes_outcomes_through() {
        let boundary = boundary_with(
            StaticReader::text(r#"{"messages":[]}"#),
            Arc::new(RecordingNotifier::new()),
        );

        let result = boundary.run(Some(SelectedFile::new("chat.json"))).await;

        assert_eq!(result, BoundaryResult::Completed(ImportOutcome::Success));
        assert!(!boundary.is_degraded());
    }

    #[tokio::test]
    async fn reported_failures_do_not_trip() {
        let boundary = boundary_with(
            StaticReader::failing(DomainError::Read("eio".into())),
            Arc::new(RecordingNotifier::new()),
        );

        let result = boundary.run(Some(SelectedFile::new("chat.json"))).await;

        assert_eq!(
            result,
            BoundaryResult::Completed(ImportOutcome::ReadFailure("eio".into()))
        );
        assert!(!boundary.is_degraded());
    }

    #[tokio::test]
    async fn sink_fault_trips_to_fallback_until_reset() {
        let boundary = boundary_with(
            StaticReader::text("not json"),
            Arc::new(ExplodingNotifier {
                errors: AtomicUsize::new(0),
            }),
        );
        let file = || Some(SelectedFile::new("chat.json"));

        assert_eq!(
            boundary.run(file()).await,
            BoundaryResult::Unavailable(FALLBACK_NOTICE)
        );
        assert!(boundary.is_degraded());

        // Stays degraded.
        assert_eq!(
            boundary.run(file()).await,
            BoundaryResult::Unavailable(FALLBACK_NOTICE)
        );

        boundary.reset();
        assert!(matches!(
            boundary.run(file()).await,
            BoundaryResult::Completed(ImportOutcome::ParseFailure(_))
        ));
    }

    #[tokio::test]
    async fn submit_clears_the_control_and_same_file_runs_again() {
        let notifier = Arc::new(RecordingNotifier::new());
        let boundary = boundary_with(
            StaticReader::text(r#"{"messages":[]}"#),
            Arc::clone(&notifier) as Arc<dyn NotificationSink>,
        );
        let mut control = ImportControl::new(".json");
        let file = SelectedFile::new("chat.json");

        control.select(file.clone());
        assert!(matches!(
            boundary.submit(&mut control).await,
            BoundaryResult::Completed(ImportOutcome::Success)
        ));
        assert!(control.selection().is_none());

        control.select(file);
        assert!(matches!(
            boundary.submit(&mut control).await,
            BoundaryResult::Completed(ImportOutcome::Success)
        ));
        assert!(control.selection().is_none());
        assert_eq!(notifier.messages().len(), 2);
    }

    #[tokio::test]
    async fn failed_attempt_also_clears_the_control() {
        let boundary = boundary_with(
            StaticReader::text("{"),
            Arc::new(RecordingNotifier::new()),
        );
        let mut control = ImportControl::new(".json");
        control.select(SelectedFile::new("broken.json"));

        let result = boundary.submit(&mut control).await;

        assert!(matches!(
            result,
            BoundaryResult::Completed(ImportOutcome::ParseFailure(_))
        ));
        assert!(control.selection().is_none());
    }

    #[tokio::test]
    async fn empty_control_reports_generic_notice() {
        let notifier = Arc::new(RecordingNotifier::new());
        let boundary = boundary_with(
            StaticReader::text("{}"),
            Arc::clone(&notifier) as Arc<dyn NotificationSink>,
        );
        let mut control = ImportControl::new(".json");

        let result = boundary.submit(&mut control).await;

        assert_eq!(
            result,
            BoundaryResult::Completed(ImportOutcome::NotAttempted("no file selected".into()))
        );
        assert_eq!(notifier.messages()[0].1, "Something went wrong");
    }

    #[test]
    fn panic_payloads_are_rendered() {
        let s: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(s.as_ref()), "static");
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(owned.as_ref()), "owned");
        let other: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(other.as_ref()), "non-string panic payload");
    }
}
