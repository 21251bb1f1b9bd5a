// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [JUnit `testsuite`][1] document model and its XML rendering.
//!
//! Rendering is a pure function of the accumulated state: serializing the
//! same [`TestSuite`] twice yields identical documents.
//!
//! [1]: https://llg.cubic.org/docs/junit

use std::{
    io::{self, Write as _},
    time::Duration,
};

use crate::{error::WriteError, xml::XmlDoc};

/// Completed report of a single feature's execution.
#[derive(Clone, Debug)]
pub struct TestSuite {
    /// Display name of the reported feature.
    pub name: String,

    /// Number of emitted [`TestCase`]s.
    pub tests: usize,

    /// Number of failure-classified [`TestCase`]s.
    pub failures: usize,

    /// Number of errored [`TestCase`]s.
    ///
    /// Always equals [`failures`]: no separate error concept is tracked, and
    /// CI consumers of this format don't require the distinction.
    ///
    /// [`failures`]: TestSuite::failures
    pub errors: usize,

    /// Sum of all emitted [`TestCase`] durations.
    pub time: Duration,

    /// Emitted [`TestCase`]s, in their execution order.
    pub cases: Vec<TestCase>,
}

/// Single reportable unit of execution: a plain scenario's step sequence, or
/// one data row of a `Scenario Outline`.
#[derive(Clone, Debug)]
pub struct TestCase {
    /// Qualified `<feature>.<scenario>` name.
    pub classname: String,

    /// Display name of this [`TestCase`] (the scenario name, plus an example
    /// row suffix for outline rows).
    pub name: String,

    /// Measured wall-clock duration of this [`TestCase`].
    pub time: Duration,

    /// Failure payload, present on failure-classified cases only.
    pub failure: Option<Failure>,
}

/// Failure payload of a [`TestCase`].
#[derive(Clone, Debug)]
pub struct Failure {
    /// `<verdict> <test-case name>` summary line.
    pub message: String,

    /// Verdict text this failure was classified from.
    pub kind: String,

    /// Narrative transcript of the failed unit, followed by the captured
    /// failure's rendering.
    pub body: String,
}

impl TestSuite {
    /// Serializes this [`TestSuite`] as an XML document into the given `out`
    /// sink.
    pub fn write_xml<W: io::Write>(&self, out: W) -> Result<(), WriteError> {
        let tests = self.tests.to_string();
        let failures = self.failures.to_string();
        let errors = self.errors.to_string();
        let time = format_seconds(self.time);

        let mut doc = XmlDoc::new(out);
        doc.declaration()?;
        doc.element(
            "testsuite",
            &[
                ("tests", tests.as_str()),
                ("failures", failures.as_str()),
                ("errors", errors.as_str()),
                ("time", time.as_str()),
                ("name", self.name.as_str()),
            ],
            |doc| {
                for case in &self.cases {
                    case.write_xml(doc)?;
                }
                Ok(())
            },
        )?;
        let mut out = doc.finish()?;
        out.flush()?;
        Ok(())
    }
}

impl TestCase {
    /// Writes this [`TestCase`] as a `<testcase>` element of the given `doc`.
    fn write_xml<W: io::Write>(&self, doc: &mut XmlDoc<W>) -> quick_xml::Result<()> {
        let time = format_seconds(self.time);
        doc.element(
            "testcase",
            &[
                ("classname", self.classname.as_str()),
                ("name", self.name.as_str()),
                ("time", time.as_str()),
            ],
            |doc| {
                if let Some(failure) = &self.failure {
                    doc.element(
                        "failure",
                        &[
                            ("message", failure.message.as_str()),
                            ("type", failure.kind.as_str()),
                        ],
                        |doc| doc.text(&failure.body),
                    )?;
                }
                Ok(())
            },
        )
    }
}

/// Formats the given [`Duration`] as seconds with six fractional digits.
#[must_use]
pub(crate) fn format_seconds(duration: Duration) -> String {
    format!("{:.6}", duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_suite() -> TestSuite {
        TestSuite {
            name: "Checkout".into(),
            tests: 2,
            failures: 1,
            errors: 1,
            time: Duration::from_millis(350),
            cases: vec![
                TestCase {
                    classname: "Checkout.Pay with card".into(),
                    name: "Pay with card".into(),
                    time: Duration::from_millis(250),
                    failure: None,
                },
                TestCase {
                    classname: "Checkout.Pay with invalid card".into(),
                    name: "Pay with invalid card".into(),
                    time: Duration::from_millis(100),
                    failure: Some(Failure {
                        message: "failed Pay with invalid card".into(),
                        kind: "failed".into(),
                        body: "Scenario: Pay with invalid card\n\nMessage:\n".into(),
                    }),
                },
            ],
        }
    }

    fn render(suite: &TestSuite) -> String {
        let mut out = Vec::new();
        suite.write_xml(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_summary_attributes_in_stable_order() {
        let xml = render(&sample_suite());

        assert!(xml.contains(
            "<testsuite tests=\"2\" failures=\"1\" errors=\"1\" \
             time=\"0.350000\" name=\"Checkout\">",
        ));
    }

    #[test]
    fn renders_test_cases_with_six_decimal_durations() {
        let xml = render(&sample_suite());

        assert!(xml.contains(
            "<testcase classname=\"Checkout.Pay with card\" \
             name=\"Pay with card\" time=\"0.250000\">",
        ));
        assert!(xml.contains(
            "<failure message=\"failed Pay with invalid card\" type=\"failed\">",
        ));
        assert!(xml.contains("Scenario: Pay with invalid card"));
    }

    #[test]
    fn serialization_is_idempotent() {
        let suite = sample_suite();

        assert_eq!(render(&suite), render(&suite));
    }

    #[test]
    fn formats_sub_microsecond_durations() {
        assert_eq!(format_seconds(Duration::from_micros(1_500)), "0.001500");
        assert_eq!(format_seconds(Duration::ZERO), "0.000000");
    }
}
