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

//! Client for the Aeroweb aeronautical weather data service.
//!
//! The service of Météo-France answers every request with an XML document
//! whose structure depends on the requested [data type]. This crate sends the
//! requests and turns the answers into predictable values:
//!
//! - METAR/TAF and SIGMET as [`Station`]s with their messages,
//! - volcanic ash and tropical cyclone advisories as [`GroupedBulletin`]s,
//! - charts and advisory graphics as a flat list of chart entries,
//! - everything else as a normalized [`Value`] tree.
//!
//! Responses go through three stages. The body is parsed into a generic XML
//! tree by [`aeroweb_xml`], the tree is collapsed by [`normalize`] into
//! [`Value`]s, and an adapter reshapes the value for the data type.
//!
//! # Examples
//!
//! ```no_run
//! # async fn run() -> Result<(), aeroweb::Error> {
//! use aeroweb::Aeroweb;
//!
//! let client = Aeroweb::new("my-login")?;
//! let stations = client.opmet(&["LFPG", "LFPO"]).await?;
//!
//! for station in stations {
//!     println!("{}: {:?}", station.oaci, station.messages);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [data type]: crate::request::DataType

mod adapter;
mod client;
mod error;
mod normalize;
mod value;

pub mod catalog;
pub mod request;
pub mod transport;

pub use adapter::*;
pub use client::{Aeroweb, AerowebBuilder, ParseFn, RequestHook, BASE_URL, PATH};
pub use error::Error;
pub use normalize::{normalize, LINK_FIELD};
pub use value::Value;
