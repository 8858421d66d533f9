//! Case-driven runner.

use std::fmt::Debug;

use crate::case::TestCase;
use crate::comparison::exact;
use crate::error::ValidationError;
use crate::reporter::{Reporter, TracingReporter};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Name of the validated callable
    pub name: String,
    /// Number of cases that matched
    pub passed: usize,
}

/// Runs a callable against an ordered list of [`TestCase`]s.
///
/// Evaluation stops at the first mismatch or the first error returned by the
/// callable.
///
/// # Examples
/// ```
/// use dual_validor::{TestCase, Validor};
/// use std::convert::Infallible;
///
/// #[derive(Debug)]
/// struct Args {
///     a: i32,
///     b: i32,
/// }
///
/// let report = Validor::new("add", |args: &Args| Ok::<_, Infallible>(args.a + args.b))
///     .add_case(TestCase::new(Args { a: 1, b: 2 }, 3))
///     .add_case(TestCase::new(Args { a: -4, b: 4 }, 0).with_description("cancels"))
///     .run()
///     .unwrap();
/// assert_eq!(report.passed, 2);
/// ```
pub struct Validor<I, O, F, R = TracingReporter> {
    name: String,
    func: F,
    cases: Vec<TestCase<I, O>>,
    reporter: R,
}

impl<I, O, F> Validor<I, O, F> {
    /// Create a runner reporting through `tracing`.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            cases: Vec::new(),
            reporter: TracingReporter,
        }
    }
}

impl<I, O, F, R> Validor<I, O, F, R> {
    /// Replace the reporter.
    pub fn with_reporter<R2: Reporter>(self, reporter: R2) -> Validor<I, O, F, R2> {
        Validor {
            name: self.name,
            func: self.func,
            cases: self.cases,
            reporter,
        }
    }

    /// Append one case.
    pub fn add_case(mut self, case: TestCase<I, O>) -> Self {
        self.cases.push(case);
        self
    }

    /// Append several cases, keeping their order.
    pub fn add_cases(mut self, cases: impl IntoIterator<Item = TestCase<I, O>>) -> Self {
        self.cases.extend(cases);
        self
    }

    /// Name of the validated callable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered cases in evaluation order.
    pub fn cases(&self) -> &[TestCase<I, O>] {
        &self.cases
    }
}

impl<I, O, F, R> Validor<I, O, F, R>
where
    I: Debug,
    O: Debug + PartialEq,
    R: Reporter,
{
    /// Run every case, comparing with `PartialEq`.
    pub fn run<E>(&self) -> Result<ValidationReport, ValidationError>
    where
        F: Fn(&I) -> Result<O, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.run_with(exact)
    }
}

impl<I, O, F, R> Validor<I, O, F, R>
where
    I: Debug,
    O: Debug,
    R: Reporter,
{
    /// Run every case, comparing with `compare(actual, expected)`.
    pub fn run_with<E, C>(&self, compare: C) -> Result<ValidationReport, ValidationError>
    where
        F: Fn(&I) -> Result<O, E>,
        E: std::error::Error + Send + Sync + 'static,
        C: Fn(&O, &O) -> bool,
    {
        for (offset, case) in self.cases.iter().enumerate() {
            let index = offset + 1;

            let actual = match (self.func)(&case.input) {
                Ok(actual) => actual,
                Err(cause) => {
                    let err = ValidationError::Evaluation {
                        index,
                        description: case.description().to_string(),
                        input: format!("{:?}", case.input),
                        cause: Box::new(cause),
                    };
                    self.reporter.failed(index, &err.to_string());
                    return Err(err);
                }
            };

            self.reporter.running(index, &actual, &case.expected);

            if !compare(&actual, &case.expected) {
                let err = ValidationError::Mismatch {
                    index,
                    description: case.description().to_string(),
                    input: format!("{:?}", case.input),
                    expected: format!("{:?}", case.expected),
                    actual: format!("{:?}", actual),
                };
                self.reporter.failed(index, &err.to_string());
                return Err(err);
            }

            self.reporter.passed(index, case.description());
        }

        let passed = self.cases.len();
        self.reporter.finished(&self.name, passed);
        Ok(ValidationReport {
            name: self.name.clone(),
            passed,
        })
    }
}
