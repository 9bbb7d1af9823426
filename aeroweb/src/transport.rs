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

//! Transport of requests to the data service.

use async_trait::async_trait;
use url::Url;

use crate::error::Error;

/// Fetches the raw response of a request URL.
///
/// The client builds the complete URL including the query and leaves
/// everything else to the transport: connection handling, timeouts, headers
/// and retries if any.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `url` and returns the response body.
    ///
    /// A response with a non-success status must be reported as
    /// [`Error::Transport`].
    async fn get(&self, url: Url) -> Result<String, Error>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[cfg(feature = "http")]
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a preconfigured client, e.g. with a proxy or timeouts.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<String, Error> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Transport {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
