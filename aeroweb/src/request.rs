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

//! Request parameters of the data service.

use std::fmt;

/// Query parameter with the login token.
pub const LOGIN: &str = "ID";
/// Query parameter selecting the [`DataType`].
pub const DATA_TYPE: &str = "TYPE_DONNEES";
/// Codes of the requested airports, FIRs or centres joined by `|`.
pub const LOCATIONS: &str = "LIEUID";
/// Requests the full chart base.
pub const FULL_BASE: &str = "BASE_COMPLETE";
pub const ZONE: &str = "ZONE";
pub const CHART_TYPE: &str = "VUE_CARTE";
pub const ALTITUDE: &str = "ALTITUDE";
pub const DESTINATION: &str = "DESTINATION";
pub const WEATHER_CODE: &str = "CODE_METEO";

/// Separator of the codes in [`LOCATIONS`].
pub const CODE_SEPARATOR: &str = "|";

/// The kind of data requested from the service.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum DataType {
    /// METAR, SPECI and TAF of aerodromes.
    Opmet,
    /// SIGMET, AIRMET and GAMET of FIRs.
    Sigmet,
    /// Volcanic ash advisories.
    Vaa,
    /// Volcanic ash advisory graphics.
    Vag,
    /// Tropical cyclone advisories.
    Tca,
    /// Tropical cyclone advisory graphics.
    Tcag,
    /// Aerodrome warnings.
    Maa,
    /// Pre-flight briefings.
    Predec,
    /// Significant weather and wind/temperature charts.
    Cartes,
    /// Flight briefing dossier to a destination.
    Dossier,
    /// Significant weather bulletin.
    Sw,
    /// Syntax check of a weather code.
    Validation,
}

impl DataType {
    /// Returns the value of the [`DATA_TYPE`] parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opmet => "OPMET2",
            Self::Sigmet => "SIGMET2",
            Self::Vaa => "VAA",
            Self::Vag => "VAG",
            Self::Tca => "TCA",
            Self::Tcag => "TCAG",
            Self::Maa => "MAA",
            Self::Predec => "PREDEC",
            Self::Cartes => "CARTES",
            Self::Dossier => "DOSSIER",
            Self::Sw => "SW",
            Self::Validation => "VALIDATION",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation specific query parameters in insertion order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the parameter `key` and returns the parameters.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.0.push((key, value.into()));
        self
    }

    /// Parameters of the data types keyed by a list of codes.
    ///
    /// ```
    /// # use aeroweb::request::{Params, LOCATIONS};
    /// let params = Params::locations(&["LFPG", "LFPO"]);
    /// assert_eq!(params.get(LOCATIONS), Some("LFPG|LFPO"));
    /// ```
    pub fn locations(codes: &[&str]) -> Self {
        Self::new().with(LOCATIONS, codes.join(CODE_SEPARATOR))
    }

    /// Parameters of a chart request.
    ///
    /// Without any filter the full chart base is requested.
    pub fn charts(zone: Option<&str>, chart_type: Option<&str>, altitude: Option<u16>) -> Self {
        if zone.is_none() && chart_type.is_none() && altitude.is_none() {
            return Self::new().with(FULL_BASE, "oui");
        }

        let mut params = Self::new();
        if let Some(zone) = zone {
            params = params.with(ZONE, zone);
        }
        if let Some(chart_type) = chart_type {
            params = params.with(CHART_TYPE, chart_type);
        }
        if let Some(altitude) = altitude {
            params = params.with(ALTITUDE, altitude.to_string());
        }
        params
    }

    /// Returns the value of the first parameter `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find_map(|(k, v)| (*k == key).then_some(v.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charts_without_filter_request_full_base() {
        let params = Params::charts(None, None, None);

        assert_eq!(params.get(FULL_BASE), Some("oui"));
        assert_eq!(params.get(ZONE), None);
        assert_eq!(params.get(CHART_TYPE), None);
        assert_eq!(params.get(ALTITUDE), None);
    }

    #[test]
    fn charts_with_filter() {
        let params = Params::charts(Some("AERO_FRANCE"), None, Some(340));
        let pairs: Vec<_> = params.iter().collect();

        assert_eq!(pairs, [(ZONE, "AERO_FRANCE"), (ALTITUDE, "340")]);
        assert_eq!(params.get(FULL_BASE), None);
    }

    #[test]
    fn single_location_has_no_separator() {
        assert_eq!(Params::locations(&["LFRR"]).get(LOCATIONS), Some("LFRR"));
    }

    #[test]
    fn data_type_names() {
        assert_eq!(DataType::Opmet.to_string(), "OPMET2");
        assert_eq!(DataType::Sigmet.as_str(), "SIGMET2");
        assert_eq!(DataType::Tcag.as_str(), "TCAG");
    }
}
