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

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::value::Value;

/// Value used by the service for a bulletin that is not available.
pub const NODATA: &str = "NODATA";

/// Bulletins of one airport or FIR.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Station {
    /// ICAO code of the airport or FIR (e.g. `"LFPG"`).
    pub oaci: String,
    /// Name of the airport or FIR.
    pub nom: String,
    /// Every available bulletin in document order.
    pub messages: Vec<Value>,
}

impl From<&Value> for Station {
    fn from(value: &Value) -> Self {
        let mut station = Station::default();

        for (name, field) in value.as_map().into_iter().flatten() {
            match name.as_str() {
                "oaci" => station.oaci = field.as_str().unwrap_or_default().to_string(),
                "nom" => station.nom = field.as_str().unwrap_or_default().to_string(),
                _ if field.as_str() == Some(NODATA) => continue,
                _ => station.messages.extend(field.as_list().iter().cloned()),
            }
        }

        station
    }
}

/// Converts one station or a list of stations into [`Station`]s.
///
/// Apart from the `oaci` and `nom` identity, every field of a station is a
/// bulletin. Fields holding exactly [`NODATA`] are dropped, and a field that
/// repeated in the response contributes each of its items.
///
/// # Examples
///
/// ```
/// use aeroweb::{to_stations, Value};
///
/// let opmet = Value::from([
///     ("oaci", Value::from("LFPG")),
///     ("nom", Value::from("PARIS CHARLES DE GAULLE")),
///     ("METAR", Value::from("METAR LFPG 181030Z 24012KT CAVOK 14/08 Q1021=")),
///     ("TAFC", Value::from("NODATA")),
/// ]);
///
/// let stations = to_stations(&opmet);
/// assert_eq!(stations.len(), 1);
/// assert_eq!(stations[0].oaci, "LFPG");
/// assert_eq!(stations[0].messages.len(), 1);
/// ```
pub fn to_stations(root: &Value) -> Vec<Station> {
    root.as_list().iter().map(Station::from).collect()
}
