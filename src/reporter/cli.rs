// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options of a [`JUnit`] reporter.
//!
//! [`JUnit`]: super::JUnit

use std::path::PathBuf;

/// CLI options of a [`JUnit`] reporter.
///
/// Intended to be merged into the hosting runner's CLI surface.
///
/// [`JUnit`]: super::JUnit
#[derive(Clone, Debug, Default, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Directory to write `TEST-*.xml` report files into.
    ///
    /// Must be an existing directory.
    #[arg(id = "junit-out", long = "junit-out", value_name = "DIR", global = true)]
    pub out: Option<PathBuf>,

    /// Treat `pending` scenarios as failures in JUnit XML reports.
    #[arg(id = "junit-strict", long = "junit-strict", global = true)]
    pub strict: bool,
}
