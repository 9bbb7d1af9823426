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

use std::error;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// The service answered with a non-success HTTP status.
    Transport { status: u16, message: String },
    /// The request failed before a status was received.
    Http(String),
    /// The response body is not well-formed XML.
    Xml(aeroweb_xml::Error),
    /// The service rejected the login token.
    Authentication,
    /// The request URL could not be built from the configured base and path.
    InvalidUrl(String),
    /// No transport was set and the `http` feature is disabled.
    NoTransport,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { status, message } => {
                write!(f, "service responded with {status}: {message}")
            }
            Self::Http(e) => write!(f, "HTTP request failed: {e}"),
            Self::Xml(e) => write!(f, "invalid response: {e}"),
            Self::Authentication => write!(f, "login unknown to the service"),
            Self::InvalidUrl(e) => write!(f, "invalid service URL: {e}"),
            Self::NoTransport => write!(f, "no transport configured"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Xml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<aeroweb_xml::Error> for Error {
    fn from(e: aeroweb_xml::Error) -> Self {
        Self::Xml(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::InvalidUrl(e.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Self::Transport {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            },
            None => Self::Http(e.to_string()),
        }
    }
}
