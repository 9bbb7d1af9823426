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

//! Generic XML tree for the Aeroweb data service.
//!
//! The service answers every request with a small XML document whose shape
//! depends on the requested data type. This crate does not know any of these
//! shapes. It reads a document into a generic [`Element`] tree that keeps
//! attributes, text, CDATA and named children apart, and keeps them in
//! document order so later stages can rely on the order in which fields
//! appeared.
//!
//! # Examples
//!
//! ```
//! use aeroweb_xml::Child;
//!
//! let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
//! <root>
//!   <opmet oaci="LFPG" nom="PARIS CHARLES DE GAULLE">
//!     <METAR><![CDATA[METAR LFPG 181030Z 24012KT CAVOK 14/08 Q1021=]]></METAR>
//!     <TAF>NODATA</TAF>
//!   </opmet>
//! </root>"#;
//!
//! let document = aeroweb_xml::parse(xml).unwrap();
//! let root = document.child("root").unwrap();
//! let opmet = root.child("opmet").unwrap();
//!
//! assert_eq!(opmet.attributes["oaci"], "LFPG");
//! assert_eq!(opmet.child("TAF").unwrap().text.as_deref(), Some("NODATA"));
//! assert!(matches!(root.children["opmet"], Child::One(_)));
//! ```

mod element;
mod error;
mod parser;

pub use element::{Child, Element};
pub use error::Error;
pub use parser::parse;
