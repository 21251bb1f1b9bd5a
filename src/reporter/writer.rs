// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Main [`JUnit`] reporter implementation.

use crate::{
    EventHandler,
    error::ConfigError,
    event::{
        BackgroundEvent, Event, ExamplesEvent, Feature, FeatureEvent,
        Lifecycle, Metadata, RowEvent, Scenario, ScenarioEvent, StepsEvent,
    },
    report::ReportDir,
};

use super::{Cli, Config, FeatureRun};

/// [JUnit XML report][1] reporter, writing one `TEST-<feature>.xml` document
/// per executed feature into its configured [`ReportDir`].
///
/// The output directory is validated at construction, before any event is
/// consumed; a failure to write an individual report is logged and swallowed,
/// so one unwritable feature doesn't take the rest of the run down.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Debug)]
pub struct JUnit {
    /// Whether `pending` verdicts are treated as failures.
    strict: bool,

    /// Validated directory the reports are written into.
    out: ReportDir,

    /// Accumulation state of the currently executed feature.
    feature: Option<FeatureRun>,
}

impl JUnit {
    /// Creates a new [`JUnit`] reporter out of the given [`Config`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotADirectory`], if the configured output location
    /// doesn't exist or is not a directory.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Ok(Self {
            strict: config.strict,
            out: ReportDir::new(config.output_dir)?,
            feature: None,
        })
    }

    /// Creates a new [`JUnit`] reporter out of the given [`Cli`] options.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingOutputDir`], if no output directory was
    /// specified, or [`ConfigError::NotADirectory`], if the specified one is
    /// not usable.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::new(Config::try_from(cli)?)
    }

    /// Handles an event of the given [`Scenario`].
    fn scenario_event(
        &mut self,
        feature: &Feature,
        scenario: &Scenario,
        event: ScenarioEvent,
        meta: Metadata,
    ) {
        let strict = self.strict;
        let run = self.open_run(feature);
        match event {
            ScenarioEvent::Started => run.scenario_started(scenario),
            ScenarioEvent::Steps(StepsEvent::Started) => {
                run.steps_started(meta.at);
            }
            ScenarioEvent::Steps(StepsEvent::Finished(outcome)) => {
                run.steps_finished(&outcome, meta.at, strict);
            }
            ScenarioEvent::Examples(ExamplesEvent::Started) => {
                run.examples_started();
            }
            ScenarioEvent::Examples(ExamplesEvent::Row(_, RowEvent::Started)) => {
                run.row_started(meta.at);
            }
            ScenarioEvent::Examples(ExamplesEvent::Row(row, RowEvent::Finished(outcome))) => {
                run.row_finished(&row, &outcome, meta.at, strict);
            }
        }
    }

    /// Flushes the finished [`FeatureRun`] as a report file.
    fn feature_finished(&mut self, feature: &Feature) {
        let run = self.take_run(feature);
        let (suite, path) = run.finish();
        if let Err(e) = self.out.write(&suite, &path) {
            tracing::warn!(
                "failed to write JUnit XML report for feature \"{}\": {e}",
                suite.name,
            );
        }
    }

    /// Returns the currently open [`FeatureRun`].
    fn open_run(&mut self, feature: &Feature) -> &mut FeatureRun {
        self.feature.as_mut().unwrap_or_else(|| {
            panic!("no `Started` event for feature \"{}\"", feature.name)
        })
    }

    /// Takes the currently open [`FeatureRun`] out, leaving no feature open.
    fn take_run(&mut self, feature: &Feature) -> FeatureRun {
        self.feature.take().unwrap_or_else(|| {
            panic!("no `Started` event for feature \"{}\"", feature.name)
        })
    }
}

impl EventHandler for JUnit {
    fn handle_event(&mut self, event: Event<Lifecycle>) {
        let (Lifecycle::Feature(feature, event), meta) = event.split();
        match event {
            FeatureEvent::Started => {
                self.feature = Some(FeatureRun::new(&feature));
            }
            FeatureEvent::Background(BackgroundEvent::Started) => {
                self.open_run(&feature).background_started();
            }
            FeatureEvent::Background(BackgroundEvent::Finished) => {
                self.open_run(&feature).background_finished();
            }
            FeatureEvent::Scenario(scenario, event) => {
                self.scenario_event(&feature, &scenario, event, meta);
            }
            FeatureEvent::Finished => self.feature_finished(&feature),
        }
    }
}
