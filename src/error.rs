// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types of this crate.
//!
//! Note, that a failed [`Step`] is not an error: it's a regular value
//! ([`CapturedFailure`]) flowing through the event stream and rendered into
//! the report.
//!
//! [`CapturedFailure`]: crate::event::CapturedFailure
//! [`Step`]: crate::event::Step

use std::{io, path::PathBuf};

use derive_more::{Display, Error, From};

/// Error of a misconfigured [`JUnit`] reporter.
///
/// Raised eagerly at construction time, before any event is consumed. This is
/// the only fatal, user-visible error of this crate.
///
/// [`JUnit`]: crate::reporter::JUnit
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// No output directory was specified for report files.
    #[display("JUnit XML report output directory is not specified")]
    MissingOutputDir,

    /// The specified output location doesn't exist or is not a directory.
    #[display("`{}` is not an existing directory", path.display())]
    NotADirectory {
        /// The rejected output location.
        path: PathBuf,
    },
}

/// Error of persisting a [`TestSuite`] document.
///
/// [`TestSuite`]: crate::report::TestSuite
#[derive(Debug, Display, Error, From)]
pub enum WriteError {
    /// I/O operation failed.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),

    /// XML generation failed.
    #[display("XML generation failed: {_0}")]
    Xml(quick_xml::Error),
}
