//! Progress reporting for validation runs.
//!
//! The runner never writes to a process-wide logger of its own; it hands
//! every event to a [`Reporter`] owned by the `Validor`.

use std::fmt::Debug;

/// Receives validation progress events.
///
/// Indices are 1-based.
pub trait Reporter {
    /// A case was evaluated and is about to be compared.
    fn running(&self, index: usize, actual: &dyn Debug, expected: &dyn Debug);

    /// A case matched.
    fn passed(&self, index: usize, description: &str);

    /// A case failed; `message` is the full failure text.
    fn failed(&self, index: usize, message: &str);

    /// Every case matched.
    fn finished(&self, name: &str, passed: usize);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn running(&self, index: usize, actual: &dyn Debug, expected: &dyn Debug) {
        (**self).running(index, actual, expected)
    }

    fn passed(&self, index: usize, description: &str) {
        (**self).passed(index, description)
    }

    fn failed(&self, index: usize, message: &str) {
        (**self).failed(index, message)
    }

    fn finished(&self, name: &str, passed: usize) {
        (**self).finished(name, passed)
    }
}

/// Default reporter emitting `tracing` events under the `dual_validor` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn running(&self, index: usize, actual: &dyn Debug, expected: &dyn Debug) {
        tracing::info!(
            target: "dual_validor",
            "Test {index} RUNNING: actual {actual:?} vs expected {expected:?}"
        );
    }

    fn passed(&self, index: usize, description: &str) {
        tracing::debug!(target: "dual_validor", "Test {index} PASSED: {description}");
    }

    fn failed(&self, index: usize, message: &str) {
        tracing::warn!(target: "dual_validor", index, "{message}");
    }

    fn finished(&self, name: &str, passed: usize) {
        tracing::info!(target: "dual_validor", "All {passed} tests passed for {name}.");
    }
}
