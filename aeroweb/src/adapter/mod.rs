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

//! Reshaping of normalized responses into domain types.
//!
//! Each family of data types answers with a differently nested document. The
//! adapters in this module pull the interesting part out of a normalized
//! [`Value`] and return it in a predictable shape:
//!
//! - [`to_stations`] for the bulletins of airports and FIRs,
//! - [`to_grouped`] for advisories grouped by message type,
//! - [`to_flat_list`] for charts spread over zone blocks.
//!
//! All of them coerce elements that may appear once or many times with
//! [`Value::as_list`].

use crate::value::Value;

mod charts;
mod grouped;
mod stations;

pub use charts::to_flat_list;
pub use grouped::{to_grouped, GroupedBulletin};
pub use stations::{to_stations, Station, NODATA};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Container of the chart listing.
pub(crate) const CHART_CONTAINER: &str = "cartes";
/// Zone blocks within the chart listing.
pub(crate) const ZONE_BLOCK: &str = "bloc_zone";
/// Charts within a zone block.
pub(crate) const CHART: &str = "carte";

/// Result of an adapter whose container may be missing from the response.
///
/// If the response does not have the expected container, the adapter leaves
/// the value untouched and returns it as [`Unchanged`](Adapted::Unchanged).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum Adapted<T> {
    Shaped(T),
    Unchanged(Value),
}

impl<T> Adapted<T> {
    /// Returns the shaped value or `None` if the response was left unchanged.
    pub fn shaped(self) -> Option<T> {
        match self {
            Self::Shaped(t) => Some(t),
            Self::Unchanged(_) => None,
        }
    }
}

impl<T: Default> Default for Adapted<T> {
    fn default() -> Self {
        Self::Shaped(T::default())
    }
}
