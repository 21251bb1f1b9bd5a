// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Low-level XML document building.
//!
//! A thin scoped-composition layer over a [`quick_xml::Writer`]: an element's
//! children are written by a closure running between its start and end tags,
//! so nesting of the produced markup always mirrors nesting of the code.
//!
//! Attributes keep their insertion order and text content is escaped. The
//! 2-space indentation is cosmetic only: consumers are structural XML
//! parsers, not byte-exact comparators.

use std::io;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

/// Indented XML document being written into an [`io::Write`] sink.
pub struct XmlDoc<W: io::Write> {
    /// Underlying [`quick_xml::Writer`].
    writer: Writer<W>,
}

impl<W: io::Write> XmlDoc<W> {
    /// Starts a new [`XmlDoc`] writing into the given `out` sink.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { writer: Writer::new_with_indent(out, b' ', 2) }
    }

    /// Writes the `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    pub fn declaration(&mut self) -> quick_xml::Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    /// Writes an element named `name` carrying the given `attrs` (in their
    /// given order), with its body produced by the `children` closure.
    pub fn element<F>(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
        children: F,
    ) -> quick_xml::Result<()>
    where
        F: FnOnce(&mut Self) -> quick_xml::Result<()>,
    {
        let mut start = BytesStart::new(name);
        for (key, value) in attrs {
            start.push_attribute((*key, *value));
        }
        self.writer.write_event(Event::Start(start))?;
        children(self)?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))
    }

    /// Writes escaped text `content` into the current element's body.
    pub fn text(&mut self, content: &str) -> quick_xml::Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(content)))
    }

    /// Finishes this [`XmlDoc`] with a trailing newline, returning the
    /// underlying sink.
    pub fn finish(mut self) -> quick_xml::Result<W> {
        self.writer.write_indent()?;
        Ok(self.writer.into_inner())
    }
}
