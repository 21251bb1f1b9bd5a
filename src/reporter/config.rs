// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Construction-time configuration of a [`JUnit`] reporter.
//!
//! [`JUnit`]: super::JUnit

use std::path::PathBuf;

use smart_default::SmartDefault;

use crate::error::ConfigError;

use super::cli::Cli;

/// Configuration of a [`JUnit`] reporter.
///
/// [`JUnit`]: super::JUnit
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Directory to write `TEST-*.xml` report files into.
    ///
    /// Must be an existing directory, validated once at the reporter's
    /// construction.
    #[default(PathBuf::from("."))]
    pub output_dir: PathBuf,

    /// Whether `pending` verdicts are treated as failures.
    pub strict: bool,
}

impl TryFrom<&Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, ConfigError> {
        let output_dir =
            cli.out.clone().ok_or(ConfigError::MissingOutputDir)?;
        Ok(Self { output_dir, strict: cli.strict })
    }
}
