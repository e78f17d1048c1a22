//! Advisory reporting and tracing for the duration codec.
//!
//! Fatal conditions are returned as [RhythmError](crate::RhythmError);
//! everything routed through a [DiagnosticsSink] is informational and never
//! changes what the codec returns.

use std::cell::RefCell;

use crate::InputLocation;

pub trait DiagnosticsSink {
    /// When false, callers skip building trace messages altogether.
    fn trace_enabled(&self) -> bool {
        false
    }
    fn trace(&self, _message: &str) {}
    fn warning(&self, _location: &InputLocation, _message: &str) {}
}

/// Swallows everything. Default sink of the codec.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;
impl DiagnosticsSink for NoDiagnostics {}

pub(crate) static NO_DIAGNOSTICS: NoDiagnostics = NoDiagnostics;

/// Forwards to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics {
    pub trace: bool,
}
impl LogDiagnostics {
    pub fn new(trace: bool) -> Self {
        Self { trace }
    }
}
impl DiagnosticsSink for LogDiagnostics {
    fn trace_enabled(&self) -> bool {
        self.trace && log::log_enabled!(log::Level::Trace)
    }
    fn trace(&self, message: &str) {
        log::trace!("{message}");
    }
    fn warning(&self, location: &InputLocation, message: &str) {
        log::warn!("{location}: {message}");
    }
}

/// Keeps every message, for inspection by the caller.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    pub trace: bool,
    pub traces: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
}
impl CollectedDiagnostics {
    pub fn new(trace: bool) -> Self {
        Self {
            trace,
            ..Default::default()
        }
    }
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }
    pub fn traces(&self) -> Vec<String> {
        self.traces.borrow().clone()
    }
}
impl DiagnosticsSink for CollectedDiagnostics {
    fn trace_enabled(&self) -> bool {
        self.trace
    }
    fn trace(&self, message: &str) {
        self.traces.borrow_mut().push(message.to_string());
    }
    fn warning(&self, location: &InputLocation, message: &str) {
        self.warnings
            .borrow_mut()
            .push(format!("{location}: {message}"));
    }
}
