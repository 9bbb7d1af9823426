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

//! Code tables of the data service.
//!
//! The service does not publish the codes it accepts. These tables list the
//! advisory centres, aerodromes, chart zones, chart types and chart levels
//! known to be served, with a human-readable name.

/// Volcanic ash advisory centres (`VAA`).
pub const VAA_CENTRES: &[(&str, &str)] = &[
    ("PAWU", "Anchorage"),
    ("ADRM", "Darwin"),
    ("EGRR", "London"),
    ("CWAO", "Montreal"),
    ("RJTD", "Tokyo"),
    ("LFPW", "Toulouse"),
    ("KNES", "Washington"),
    ("SABM", "Buenos Aires"),
    ("NZKL", "Wellington"),
];

/// Volcanic ash advisory centres publishing graphics (`VAG`).
pub const VAG_CENTRES: &[(&str, &str)] = &[
    ("PAWU", "Anchorage"),
    ("ADRM", "Darwin"),
    ("EGRR", "London"),
    ("CWAO", "Montreal"),
    ("RJTD", "Tokyo"),
    ("LFPW", "Toulouse"),
    ("KNES", "Washington"),
];

/// Tropical cyclone advisory centres (`TCA`).
pub const TCA_CENTRES: &[(&str, &str)] = &[
    ("FMEE", "La Réunion"),
    ("KNHC", "Miami"),
    ("RJTD", "Tokyo"),
    ("PHFO", "Honolulu"),
    ("VIDP", "New Delhi"),
    ("NFFN", "Nadi"),
    ("ADRM", "Darwin"),
];

/// Tropical cyclone advisory centres publishing graphics (`TCAG`).
pub const TCAG_CENTRES: &[(&str, &str)] = &[("FMEE", "La Réunion")];

/// Aerodromes with a pre-flight briefing (`PREDEC`).
pub const PREDEC_AERODROMES: &[(&str, &str)] = &[
    ("LFPG", "CDG"),
    ("LFPO", "Orly"),
    ("SOCA", "Cayenne"),
    ("TFFF", "Fort de France"),
    ("TFFR", "Pointe à pitre"),
    ("FMEE", "Saint Denis"),
    ("NWWW", "Nouméa"),
    ("NTAA", "Tahiti"),
];

/// Chart zones (`CARTES`, parameter `ZONE`).
pub const CHART_ZONES: &[(&str, &str)] = &[
    ("AERO_FRANCE", "FRANCE"),
    ("AERO_EUROC", "EUROC"),
    ("AERO_EUR", "EUR"),
    ("AERO_ANTILLES", "ANTILLES"),
    ("AERO_ANTIL_GUY", "ANTILLES GUYANE"),
    ("AERO_DIRAG_ATL", "ANTILLES-GUYANE-AMERIQUES"),
    ("AERO_ATLANTIQUE", "ANTILLES-GUYANE-ATLANTIQUE"),
    ("AERO_GUYANE", "GUYANE"),
    ("AERO_MASCAREIG", "MASCAREIGNES"),
    ("AERO_DIRNC-AUSTRALIE", "NOUVELLE_CALEDONIE-AUSTRALIE"),
    ("AERO_JAPON", "NOUVELLE_CALEDONIE-JAPON"),
    ("AERO_MAGENTA", "NOUVELLE_CALEDONIE-MAGENTA"),
    ("AERO_NANDI_WALLIS", "NOUVELLE_CALEDONIE-NANDI_WALLIS"),
    ("AERO_NORFOLK", "NOUVELLE_CALEDONIE-NORFOLK"),
    ("AERO_NOUVELLE_ZELANDE", "NOUVELLE_CALEDONIE-NOUVELLE_ZELANDE"),
    ("AERO_SAIPAN", "NOUVELLE_CALEDONIE-SAIPAN"),
    ("AERO_TAHITI", "NOUVELLE_CALEDONIE-TAHITI"),
    ("AERO_WALLIS", "NOUVELLE_CALEDONIE-WALLIS"),
    ("AERO_PAC_EST", "PACIFIQUE EST"),
    ("AERO_PAC_OUEST", "PACIFIQUE OUEST"),
    ("AERO_POLYNESIE", "POLYNESIE"),
    ("AERO_TAHITI-HAWAI-JAPON", "TAHITI-HAWAI-JAPON"),
    ("AERO_TAHITI-EASTER_ISLAND-CHILI", "TAHITI-EASTER_ISLAND-CHILI"),
    ("AERO_TAHITI-POLYNESIE-FRANCAISE", "TAHITI-POLYNESIE-FRANCAISE"),
    ("AERO_AUSTRALIE", "AUSTRALIE"),
    ("AERO_EURASIA", "ASIA (D)"),
    ("AERO_ASIA_SOUTH", "ASIA SOUTH"),
    ("AERO_MEA", "ASIA SOUTH_MID"),
    ("AERO_EURAFI", "EURAFI C"),
    ("AERO_EURSAM_B", "EURSAM B"),
    ("AERO_EURSAM_B1", "EURSAM B1"),
    ("AERO_INDOC", "INDOC E"),
    ("AERO_MID", "MID G"),
    ("AERO_AMERIQUES", "NAMSAM A"),
    ("AERO_NORTH_ATL", "NAT"),
    ("AERO_NAT", "NAT H"),
    ("AERO_NATsecour", "NAT H Secours"),
    ("AERO_NORTH_PAC", "NORTH PACIFIC M"),
    ("AERO_PACIF", "PACIF I"),
    ("AERO_PACIFIC", "PACIFIC F"),
    ("AERO_SIO", "SIO K"),
    ("AERO_SOUTH_POL", "SOUTH POLAR J"),
];

/// Chart types (`CARTES`, parameter `VUE_CARTE`).
pub const CHART_TYPES: &[(&str, &str)] = &[
    ("AERO_TEMSI", "Temps Significatif"),
    ("AERO_WINTEM", "Vent & Température"),
];

/// Chart levels in hundreds of feet (`CARTES`, parameter `ALTITUDE`).
pub const CHART_ALTITUDES: &[u16] = &[
    20, 50, 80, 100, 140, 180, 210, 240, 270, 300, 320, 340, 360, 390, 410, 450, 480, 530,
];

/// Returns the name of `code` in one of the tables above.
///
/// ```
/// use aeroweb::catalog::tables::{lookup, VAA_CENTRES};
///
/// assert_eq!(lookup(VAA_CENTRES, "LFPW"), Some("Toulouse"));
/// assert_eq!(lookup(VAA_CENTRES, "LFPG"), None);
/// ```
pub fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|(c, name)| (*c == code).then_some(*name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphics_centres_are_advisory_centres() {
        for (code, _) in VAG_CENTRES {
            assert!(lookup(VAA_CENTRES, code).is_some(), "{code} publishes no VAA");
        }
        for (code, _) in TCAG_CENTRES {
            assert!(lookup(TCA_CENTRES, code).is_some(), "{code} publishes no TCA");
        }
    }

    #[test]
    fn altitudes_are_ascending() {
        assert!(CHART_ALTITUDES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn chart_lookup() {
        assert_eq!(lookup(CHART_ZONES, "AERO_NATsecour"), Some("NAT H Secours"));
        assert_eq!(lookup(CHART_TYPES, "AERO_WINTEM"), Some("Vent & Température"));
    }
}
