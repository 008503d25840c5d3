//! Batch outcome inspection and diagnostic reporting.

use ruleforge_compiler_api::{BatchError, Diagnostic, Session};

use crate::error::CodegenError;

/// Where diagnostics go before a failure is raised.
///
/// Injected rather than ambient so reporting behavior is observable in
/// tests; the default emits one `tracing::error!` line per diagnostic.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Default sink: one log line per diagnostic, at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.resource() {
            Some(path) => {
                tracing::error!(resource = %path.display(), "{}", diagnostic.message());
            }
            None => tracing::error!("{}", diagnostic.message()),
        }
    }
}

/// Decide whether a finished batch run succeeded.
///
/// Any recorded diagnostic, or a failure caught during execution, makes the
/// run a failure; the absence of both is the only success path. Every
/// diagnostic is reported through the sink before the failure value is
/// returned, whichever channel triggered it, so operators keep the full
/// list even when callers only surface a summary. No retries: identical
/// inputs compile identically, so re-running without changing them is
/// pointless.
pub fn check_outcome(
    session: &mut Session,
    caught: Option<BatchError>,
    sink: &dyn DiagnosticSink,
) -> Result<(), CodegenError> {
    if caught.is_none() && !session.has_diagnostics() {
        return Ok(());
    }

    for diagnostic in session.diagnostics() {
        sink.report(diagnostic);
    }
    let diagnostics = session.take_diagnostics();

    match caught {
        Some(source) => {
            tracing::error!(error = %source, "rule compiler failed during batch execution");
            Err(CodegenError::CompilerFailure {
                source,
                diagnostics,
            })
        }
        None => Err(CodegenError::Rejected { diagnostics }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Sink that records every reported message.
    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub(crate) messages: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn report(&self, diagnostic: &Diagnostic) {
            self.messages.lock().unwrap().push(diagnostic.to_string());
        }
    }

    #[test]
    fn clean_session_passes() {
        let mut session = Session::new();
        let sink = RecordingSink::default();
        assert!(check_outcome(&mut session, None, &sink).is_ok());
        assert!(sink.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn diagnostics_alone_fail_the_run() {
        let mut session = Session::new();
        session.record_diagnostic(Diagnostic::new("bad declare block"));
        session.record_diagnostic(Diagnostic::new("unknown field type"));
        let sink = RecordingSink::default();

        let err = check_outcome(&mut session, None, &sink).unwrap_err();
        assert!(matches!(err, CodegenError::Rejected { .. }));
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(sink.messages.lock().unwrap().len(), 2);
    }

    #[test]
    fn caught_failure_wins_even_without_diagnostics() {
        let mut session = Session::new();
        let sink = RecordingSink::default();

        let err =
            check_outcome(&mut session, Some(BatchError::new("engine panic")), &sink).unwrap_err();
        match err {
            CodegenError::CompilerFailure {
                source,
                diagnostics,
            } => {
                assert_eq!(source.message(), "engine panic");
                assert!(diagnostics.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn all_diagnostics_reported_before_failure_channel_a() {
        let mut session = Session::new();
        session.record_diagnostic(Diagnostic::new("partial diagnostic"));
        let sink = RecordingSink::default();

        let err =
            check_outcome(&mut session, Some(BatchError::new("engine gave up")), &sink).unwrap_err();
        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(
            sink.messages.lock().unwrap().as_slice(),
            ["partial diagnostic"]
        );
    }
}
