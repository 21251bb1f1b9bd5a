// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Per-feature accumulation state of a [`JUnit`] reporter.
//!
//! [`JUnit`]: super::JUnit

use std::{
    path::PathBuf,
    time::{Duration, SystemTime},
};

use crate::{
    event::{
        CapturedFailure, ExampleRow, Feature, RowOutcome, Scenario,
        StepsOutcome, Verdict,
    },
    report::{Failure, TestCase, TestSuite, format_failure},
};

/// Accumulation state of a single feature's execution.
///
/// Created at a feature's `Started` event, consumed by [`finish()`] at its
/// `Finished` event, never reused across features. Durations come from the
/// wall-clock timestamps of the bracketing events; units are executed
/// strictly one at a time, so their spans never overlap.
///
/// [`finish()`]: FeatureRun::finish
#[derive(Debug)]
pub struct FeatureRun {
    /// Display name of the feature: first line of its raw textual name, with
    /// the leading `Feature:` label stripped.
    name: String,

    /// Path of the `.feature` source, for deriving the report file name.
    path: PathBuf,

    /// Number of emitted test cases.
    tests: usize,

    /// Number of failure-classified test cases.
    failures: usize,

    /// Sum of all emitted test-case durations.
    time: Duration,

    /// Emitted test cases, in their execution order.
    cases: Vec<TestCase>,

    /// What kind of unit the events currently describe.
    context: UnitContext,

    /// Whether the next examples-table row is the header row.
    header_row: bool,

    /// The currently open scenario, if any.
    scenario: Option<ScenarioContext>,

    /// Timestamp of the currently measured unit's start marker.
    unit_started_at: Option<SystemTime>,
}

/// Kind of execution unit the incoming events describe.
///
/// Completion of a step sequence produces a test case only in [`Foreground`]:
/// background steps are never reported, and an outline scenario is reported
/// per example row instead of per its own step sequence.
///
/// [`Foreground`]: UnitContext::Foreground
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum UnitContext {
    /// Step sequence of a plain scenario.
    Foreground,

    /// Step sequence of a feature's background.
    Background,

    /// `Scenario Outline`: reportable units are its example rows.
    Outline,
}

/// State of the currently open scenario.
#[derive(Debug)]
struct ScenarioContext {
    /// Normalized display name.
    name: String,

    /// Whether the scenario is a `Scenario Outline`.
    outline: bool,

    /// Narrative transcript rendered into a failure's body.
    transcript: String,
}

impl ScenarioContext {
    /// Creates a new [`ScenarioContext`] out of a [`Scenario`] subject.
    fn new(scenario: &Scenario) -> Self {
        let name = scenario_display_name(&scenario.name);
        let outline = scenario.keyword.contains("Scenario Outline");
        let transcript = format!(
            "Scenario{}: {name}\n\n",
            if outline { " outline" } else { "" },
        );
        Self { name, outline, transcript }
    }
}

impl FeatureRun {
    /// Starts a new [`FeatureRun`] for the given [`Feature`], with all
    /// counters zeroed and no test cases recorded.
    #[must_use]
    pub fn new(feature: &Feature) -> Self {
        Self {
            name: feature_display_name(&feature.name),
            path: feature.path.clone(),
            tests: 0,
            failures: 0,
            time: Duration::ZERO,
            cases: vec![],
            context: UnitContext::Foreground,
            header_row: false,
            scenario: None,
            unit_started_at: None,
        }
    }

    /// Display name of the executed feature.
    #[must_use]
    pub fn feature_name(&self) -> &str {
        &self.name
    }

    /// Marks the start of the feature's background step sequence.
    pub fn background_started(&mut self) {
        self.context = UnitContext::Background;
    }

    /// Marks the end of the feature's background step sequence.
    pub fn background_finished(&mut self) {
        self.context = self.scenario_unit_context();
    }

    /// Opens a fresh [`ScenarioContext`] for the given [`Scenario`],
    /// replacing any previously open one.
    pub fn scenario_started(&mut self, scenario: &Scenario) {
        self.scenario = Some(ScenarioContext::new(scenario));
        self.context = self.scenario_unit_context();
    }

    /// Marks the timing origin of a step sequence.
    pub fn steps_started(&mut self, at: SystemTime) {
        self.unit_started_at = Some(at);
    }

    /// Completes a step sequence: measures its duration and, unless the
    /// sequence belongs to a background or an outline scenario, records its
    /// test case.
    pub fn steps_finished(
        &mut self,
        outcome: &StepsOutcome,
        at: SystemTime,
        strict: bool,
    ) {
        let started_at = self.unit_started_at.take().unwrap_or_else(|| {
            panic!(
                "no `Steps(Started)` event before `Steps(Finished)` \
                 in feature \"{}\"",
                self.name,
            )
        });
        if self.context != UnitContext::Foreground {
            return;
        }
        let duration = elapsed(started_at, at);

        if outcome.verdict.is_failure(strict) {
            let scenario = self.open_scenario();
            for step in &outcome.steps {
                scenario.transcript.push_str(&format!("{} {}\n", step.keyword, step.text));
            }
            scenario.transcript.push_str("\nMessage:\n");
        }
        self.push_case(duration, outcome.verdict, outcome.failure.as_ref(), "", strict);
    }

    /// Marks the entry into an outline's examples table: the next row to
    /// arrive is the header row.
    pub fn examples_started(&mut self) {
        self.header_row = true;
    }

    /// Marks the timing origin of an example row.
    ///
    /// Rows outside an outline scenario (e.g. a step's data table) are
    /// ignored.
    pub fn row_started(&mut self, at: SystemTime) {
        if self.context != UnitContext::Outline {
            return;
        }
        self.unit_started_at = Some(at);
    }

    /// Completes an example row: measures its duration and, unless it's the
    /// suppressed header row, records its test case.
    pub fn row_finished(
        &mut self,
        row: &ExampleRow,
        outcome: &RowOutcome,
        at: SystemTime,
        strict: bool,
    ) {
        if self.context != UnitContext::Outline {
            return;
        }
        let started_at = self.unit_started_at.take().unwrap_or_else(|| {
            panic!(
                "no `Row(Started)` event before `Row(Finished)` \
                 for example row \"{}\"",
                row.name,
            )
        });
        if self.header_row {
            self.header_row = false;
            return;
        }
        let duration = elapsed(started_at, at);

        if outcome.verdict.is_failure(strict) {
            let scenario = self.open_scenario();
            scenario.transcript.push_str(&format!("Example row: {}\n", row.name));
            scenario.transcript.push_str("\nMessage:\n");
        }
        self.push_case(
            duration,
            outcome.verdict,
            outcome.failure.as_ref(),
            &format!(" (outline example : {})", row.name),
            strict,
        );
    }

    /// Finishes this [`FeatureRun`], producing the completed [`TestSuite`]
    /// and the feature's source path.
    #[must_use]
    pub fn finish(self) -> (TestSuite, PathBuf) {
        let Self { name, path, tests, failures, time, cases, .. } = self;
        let suite = TestSuite {
            name,
            tests,
            failures,
            errors: failures,
            time,
            cases,
        };
        (suite, path)
    }

    /// Records a test case for a completed unit, per the shared emission
    /// rule: `passed` and failure-classified verdicts count and are recorded,
    /// anything else leaves no trace.
    fn push_case(
        &mut self,
        duration: Duration,
        verdict: Verdict,
        failure: Option<&CapturedFailure>,
        name_suffix: &str,
        strict: bool,
    ) {
        let failed = verdict.is_failure(strict);
        if verdict != Verdict::Passed && !failed {
            return;
        }

        let scenario = self.scenario.as_ref().unwrap_or_else(|| {
            panic!(
                "no `Scenario(Started)` event before a unit's completion \
                 in feature \"{}\"",
                self.name,
            )
        });
        let name = format!("{}{name_suffix}", scenario.name);
        let payload = failed.then(|| Failure {
            message: format!("{verdict} {name}"),
            kind: verdict.to_string(),
            body: match failure {
                Some(f) => format!("{}{}", scenario.transcript, format_failure(f)),
                None => scenario.transcript.clone(),
            },
        });

        self.tests += 1;
        self.time += duration;
        if payload.is_some() {
            self.failures += 1;
        }
        self.cases.push(TestCase {
            classname: format!("{}.{}", self.name, scenario.name),
            name,
            time: duration,
            failure: payload,
        });
    }

    /// [`UnitContext`] implied by the currently open scenario.
    fn scenario_unit_context(&self) -> UnitContext {
        if self.scenario.as_ref().is_some_and(|sc| sc.outline) {
            UnitContext::Outline
        } else {
            UnitContext::Foreground
        }
    }

    /// Returns the currently open [`ScenarioContext`].
    fn open_scenario(&mut self) -> &mut ScenarioContext {
        self.scenario.as_mut().unwrap_or_else(|| {
            panic!("no `Scenario(Started)` event in feature \"{}\"", self.name)
        })
    }
}

/// Computes the display name of a feature out of its raw textual name: the
/// first line, with a leading `Feature:` label stripped and whitespace
/// trimmed.
fn feature_display_name(raw: &str) -> String {
    let first = raw.lines().next().unwrap_or_default().trim();
    first.strip_prefix("Feature:").unwrap_or(first).trim().to_owned()
}

/// Computes the display name of a scenario out of its raw textual name:
/// trimmed, with embedded `.`/`\r`/`\n` removed, defaulting to
/// `"Unnamed scenario"` when blank.
fn scenario_display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "Unnamed scenario".to_owned();
    }
    trimmed.chars().filter(|c| !matches!(c, '.' | '\r' | '\n')).collect()
}

/// Computes the wall-clock span between a unit's start and end markers.
fn elapsed(started_at: SystemTime, ended_at: SystemTime) -> Duration {
    ended_at.duration_since(started_at).unwrap_or_else(|e| {
        panic!(
            "failed to compute duration between {started_at:?} \
             and {ended_at:?}: {e}",
        )
    })
}

#[cfg(test)]
mod tests {
    use crate::event::{Source, Step};

    use super::*;

    fn at(ms: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_millis(ms)
    }

    fn feature() -> Feature {
        Feature::new("Feature: Checkout\nPaying for things", "features/checkout.feature")
    }

    fn plain_scenario(name: &str) -> Scenario {
        Scenario::new("Scenario", name, "features/checkout.feature:3")
    }

    fn outline_scenario(name: &str) -> Scenario {
        Scenario::new("Scenario Outline", name, "features/checkout.feature:10")
    }

    fn passed_steps() -> StepsOutcome {
        StepsOutcome::new(vec![], Verdict::Passed)
    }

    fn run_unit(run: &mut FeatureRun, outcome: &StepsOutcome, start: u64, end: u64) {
        run.steps_started(at(start));
        run.steps_finished(outcome, at(end), false);
    }

    #[test]
    fn feature_display_name_strips_keyword_and_extra_lines() {
        assert_eq!(feature_display_name("Feature: Checkout\nMore text"), "Checkout");
        assert_eq!(feature_display_name("  Checkout  "), "Checkout");
        assert_eq!(feature_display_name(""), "");
    }

    #[test]
    fn scenario_display_name_normalizes() {
        assert_eq!(scenario_display_name("  Buy milk.\n"), "Buy milk");
        assert_eq!(scenario_display_name(""), "Unnamed scenario");
        assert_eq!(scenario_display_name("   \t "), "Unnamed scenario");
        assert_eq!(scenario_display_name("a.b\rc\nd"), "abcd");
    }

    #[test]
    fn all_passing_units_reconcile_counts_and_time() {
        let mut run = FeatureRun::new(&feature());
        for (i, name) in ["one", "two", "three"].iter().enumerate() {
            run.scenario_started(&plain_scenario(name));
            let start = i as u64 * 1_000;
            run_unit(&mut run, &passed_steps(), start, start + 250);
        }

        assert_eq!(run.feature_name(), "Checkout");
        let (suite, path) = run.finish();

        assert_eq!(suite.tests, 3);
        assert_eq!(suite.failures, 0);
        assert_eq!(suite.errors, 0);
        assert_eq!(suite.time, Duration::from_millis(750));
        assert_eq!(suite.cases.len(), 3);
        assert_eq!(suite.cases[0].classname, "Checkout.one");
        assert_eq!(path, PathBuf::from("features/checkout.feature"));
    }

    #[test]
    fn background_steps_leave_no_trace() {
        let mut run = FeatureRun::new(&feature());
        run.background_started();
        run_unit(&mut run, &StepsOutcome::new(vec![], Verdict::Failed), 0, 100);
        run.background_finished();

        run.scenario_started(&plain_scenario("visible"));
        run_unit(&mut run, &passed_steps(), 200, 300);

        let (suite, _) = run.finish();

        assert_eq!(suite.tests, 1);
        assert_eq!(suite.failures, 0);
        assert_eq!(suite.time, Duration::from_millis(100));
        assert_eq!(suite.cases[0].name, "visible");
    }

    #[test]
    fn outline_reports_rows_but_not_its_own_steps() {
        let mut run = FeatureRun::new(&feature());
        run.scenario_started(&outline_scenario("prices"));
        run_unit(&mut run, &passed_steps(), 0, 50);
        run.examples_started();

        let header = ExampleRow::new("| amount | total |");
        run.row_started(at(100));
        run.row_finished(&header, &RowOutcome::new(Verdict::Passed), at(110), false);

        for (i, name) in ["| 1 | 10 |", "| 2 | 20 |"].iter().enumerate() {
            let row = ExampleRow::new(*name);
            let start = 200 + i as u64 * 100;
            run.row_started(at(start));
            run.row_finished(&row, &RowOutcome::new(Verdict::Passed), at(start + 40), false);
        }

        let (suite, _) = run.finish();

        assert_eq!(suite.tests, 2);
        assert_eq!(suite.time, Duration::from_millis(80));
        assert_eq!(suite.cases[0].name, "prices (outline example : | 1 | 10 |)");
        assert_eq!(suite.cases[1].name, "prices (outline example : | 2 | 20 |)");
        assert_eq!(suite.cases[0].classname, "Checkout.prices");
    }

    #[test]
    fn rows_outside_an_outline_are_ignored() {
        let mut run = FeatureRun::new(&feature());
        run.scenario_started(&plain_scenario("with data table"));
        run.row_started(at(0));
        run.row_finished(
            &ExampleRow::new("| a | b |"),
            &RowOutcome::new(Verdict::Passed),
            at(10),
            false,
        );

        let (suite, _) = run.finish();

        assert_eq!(suite.tests, 0);
    }

    #[test]
    fn pending_is_silent_unless_strict() {
        let pending = StepsOutcome::new(vec![], Verdict::Pending);

        let mut lenient = FeatureRun::new(&feature());
        lenient.scenario_started(&plain_scenario("todo"));
        lenient.steps_started(at(0));
        lenient.steps_finished(&pending, at(100), false);
        let (suite, _) = lenient.finish();
        assert_eq!(suite.tests, 0);
        assert_eq!(suite.failures, 0);
        assert_eq!(suite.time, Duration::ZERO);

        let mut strict = FeatureRun::new(&feature());
        strict.scenario_started(&plain_scenario("todo"));
        strict.steps_started(at(0));
        strict.steps_finished(&pending, at(100), true);
        let (suite, _) = strict.finish();
        assert_eq!(suite.tests, 1);
        assert_eq!(suite.failures, 1);
        assert_eq!(suite.errors, 1);
        let failure = suite.cases[0].failure.as_ref().unwrap();
        assert_eq!(failure.message, "pending todo");
        assert_eq!(failure.kind, "pending");
    }

    #[test]
    fn undefined_and_skipped_leave_no_trace() {
        for verdict in [Verdict::Undefined, Verdict::Skipped] {
            let mut run = FeatureRun::new(&feature());
            run.scenario_started(&plain_scenario("missing"));
            run_unit(&mut run, &StepsOutcome::new(vec![], verdict), 0, 100);

            let (suite, _) = run.finish();

            assert_eq!(suite.tests, 0, "{verdict}");
            assert_eq!(suite.time, Duration::ZERO, "{verdict}");
        }
    }

    #[test]
    fn failed_steps_record_transcript_and_captured_failure() {
        let steps = vec![
            Source::new(Step::new("Given", "a cart with one item")),
            Source::new(Step::new("When", "I pay with an invalid card")),
        ];
        let outcome = StepsOutcome::new(steps, Verdict::Failed).with_failure(
            CapturedFailure::new("Card declined", "AssertionError")
                .with_backtrace(["steps/checkout.rs:42"]),
        );

        let mut run = FeatureRun::new(&feature());
        run.scenario_started(&plain_scenario("Pay with invalid card"));
        run.steps_started(at(0));
        run.steps_finished(&outcome, at(100), false);

        let (suite, _) = run.finish();

        assert_eq!(suite.tests, 1);
        assert_eq!(suite.failures, 1);
        let case = &suite.cases[0];
        assert_eq!(case.classname, "Checkout.Pay with invalid card");
        let failure = case.failure.as_ref().unwrap();
        assert_eq!(failure.message, "failed Pay with invalid card");
        assert_eq!(failure.kind, "failed");
        assert_eq!(
            failure.body,
            "Scenario: Pay with invalid card\n\n\
             Given a cart with one item\n\
             When I pay with an invalid card\n\n\
             Message:\n\
             Card declined (AssertionError)\nsteps/checkout.rs:42",
        );
    }

    #[test]
    fn failed_row_records_example_banner_in_transcript() {
        let mut run = FeatureRun::new(&feature());
        run.scenario_started(&outline_scenario("prices"));
        run.examples_started();
        run.row_started(at(0));
        run.row_finished(
            &ExampleRow::new("| amount |"),
            &RowOutcome::new(Verdict::Passed),
            at(10),
            false,
        );

        run.row_started(at(100));
        run.row_finished(
            &ExampleRow::new("| 7 |"),
            &RowOutcome::new(Verdict::Failed),
            at(150),
            false,
        );

        let (suite, _) = run.finish();

        let failure = suite.cases[0].failure.as_ref().unwrap();
        assert_eq!(failure.message, "failed prices (outline example : | 7 |)");
        assert_eq!(
            failure.body,
            "Scenario outline: prices\n\nExample row: | 7 |\n\nMessage:\n",
        );
    }

    #[test]
    #[should_panic(expected = "no `Steps(Started)` event")]
    fn panics_on_steps_finished_without_started() {
        let mut run = FeatureRun::new(&feature());
        run.scenario_started(&plain_scenario("broken stream"));
        run.steps_finished(&passed_steps(), at(100), false);
    }
}
