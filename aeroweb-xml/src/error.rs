// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// Reasons a service response could not be read into an element tree.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// An XML error from the underlying reader (syntax, escaping, encoding).
    Xml(String),
    /// The response body ended inside an element. Holds the tag name of the
    /// innermost open element, e.g. `opmet` for a truncated OPMET bulletin.
    UnclosedElement(String),
    /// A closing tag appeared after the root tag was already closed. Holds
    /// the name of the stray closing tag.
    UnexpectedEnd(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(e) => write!(f, "XML error: {e}"),
            Self::UnclosedElement(name) => write!(f, "response ends inside <{name}>"),
            Self::UnexpectedEnd(name) => write!(f, "closing tag </{name}> has no opening tag"),
        }
    }
}

impl std::error::Error for Error {}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_errors_name_the_tag() {
        assert_eq!(
            Error::UnclosedElement("opmet".to_string()).to_string(),
            "response ends inside <opmet>"
        );
        assert_eq!(
            Error::UnexpectedEnd("root".to_string()).to_string(),
            "closing tag </root> has no opening tag"
        );
    }
}
