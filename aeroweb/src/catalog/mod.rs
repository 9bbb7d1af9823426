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

//! Discovery of the charts served by the data service.
//!
//! The full chart base (`CARTES` with `BASE_COMPLETE=oui`) lists every zone
//! block with its charts. The functions of this module derive the available
//! zones and, per zone, the chart types and levels from such a listing.

use indexmap::{IndexMap, IndexSet};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::adapter::{CHART, CHART_CONTAINER, ZONE_BLOCK};
use crate::value::Value;

pub mod tables;

/// Chart levels keyed by chart type, keyed by zone.
pub type ZoneCatalog = IndexMap<String, IndexMap<String, IndexSet<String>>>;

/// A chart zone as listed by the service.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Zone {
    /// Zone identifier (e.g. `"AERO_FRANCE"`).
    pub id: String,
    /// Zone name (e.g. `"FRANCE"`).
    pub name: String,
}

/// Zones and their charts extracted from the full chart base.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChartCatalog {
    pub zones: Vec<Zone>,
    pub maps: ZoneCatalog,
}

impl From<&Value> for ChartCatalog {
    fn from(root: &Value) -> Self {
        Self {
            zones: extract_zones(root),
            maps: extract_maps(root),
        }
    }
}

fn zone_blocks(root: &Value) -> &[Value] {
    root.pointer(&[CHART_CONTAINER, ZONE_BLOCK])
        .map(Value::as_list)
        .unwrap_or_default()
}

fn text(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Lists every zone block of a chart listing in document order.
///
/// Zones are not deduplicated.
pub fn extract_zones(root: &Value) -> Vec<Zone> {
    zone_blocks(root)
        .iter()
        .map(|block| Zone {
            id: text(block, "idz").unwrap_or_default(),
            name: text(block, "nom").unwrap_or_default(),
        })
        .collect()
}

/// Groups the chart levels of a chart listing by zone and chart type.
///
/// Zone blocks sharing an identifier are merged. The levels of a chart type
/// are deduplicated and keep the order of their first occurrence.
///
/// # Examples
///
/// ```
/// use aeroweb::catalog::extract_maps;
/// use aeroweb::Value;
///
/// let chart = |niveau: &str| {
///     Value::from([("type", Value::from("AERO_WINTEM")), ("niveau", Value::from(niveau))])
/// };
/// let root = Value::from([(
///     "cartes",
///     Value::from([(
///         "bloc_zone",
///         Value::from([
///             ("idz", Value::from("AERO_FRANCE")),
///             ("carte", Value::List(vec![chart("340"), chart("340"), chart("100")])),
///         ]),
///     )]),
/// )]);
///
/// let maps = extract_maps(&root);
/// let levels: Vec<_> = maps["AERO_FRANCE"]["AERO_WINTEM"].iter().map(String::as_str).collect();
/// assert_eq!(levels, ["340", "100"]);
/// ```
pub fn extract_maps(root: &Value) -> ZoneCatalog {
    let mut catalog = ZoneCatalog::new();

    for block in zone_blocks(root) {
        let Some(idz) = text(block, "idz") else {
            continue;
        };
        let types = catalog.entry(idz).or_default();

        let charts = block.get(CHART).map(Value::as_list).unwrap_or_default();
        for chart in charts {
            let Some(kind) = text(chart, "type") else {
                continue;
            };
            let levels = types.entry(kind).or_default();
            if let Some(niveau) = text(chart, "niveau") {
                levels.insert(niveau);
            }
        }
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(kind: &str, niveau: &str) -> Value {
        Value::from([("type", Value::from(kind)), ("niveau", Value::from(niveau))])
    }

    fn listing() -> Value {
        Value::from([(
            "cartes",
            Value::from([(
                "bloc_zone",
                Value::List(vec![
                    Value::from([
                        ("idz", Value::from("AERO_FRANCE")),
                        ("nom", Value::from("FRANCE")),
                        (
                            "carte",
                            Value::List(vec![
                                chart("AERO_WINTEM", "340"),
                                chart("AERO_TEMSI", "100"),
                                chart("AERO_WINTEM", "340"),
                            ]),
                        ),
                    ]),
                    Value::from([
                        ("idz", Value::from("AERO_EUR")),
                        ("nom", Value::from("EUR")),
                        ("carte", chart("AERO_TEMSI", "450")),
                    ]),
                    Value::from([
                        ("idz", Value::from("AERO_FRANCE")),
                        ("nom", Value::from("FRANCE")),
                        ("carte", chart("AERO_WINTEM", "180")),
                    ]),
                ]),
            )]),
        )])
    }

    #[test]
    fn zones_are_listed_in_order() {
        let zones = extract_zones(&listing());
        let ids: Vec<_> = zones.iter().map(|z| z.id.as_str()).collect();

        assert_eq!(ids, ["AERO_FRANCE", "AERO_EUR", "AERO_FRANCE"]);
        assert_eq!(zones[1].name, "EUR");
    }

    #[test]
    fn altitudes_are_deduplicated() {
        let maps = extract_maps(&listing());

        let zones: Vec<_> = maps.keys().map(String::as_str).collect();
        assert_eq!(zones, ["AERO_FRANCE", "AERO_EUR"]);

        let france = &maps["AERO_FRANCE"];
        let types: Vec<_> = france.keys().map(String::as_str).collect();
        assert_eq!(types, ["AERO_WINTEM", "AERO_TEMSI"]);

        let wintem: Vec<_> = france["AERO_WINTEM"].iter().map(String::as_str).collect();
        assert_eq!(wintem, ["340", "180"]);
        assert_eq!(maps["AERO_EUR"]["AERO_TEMSI"].len(), 1);
    }

    #[test]
    fn listing_without_charts_is_empty() {
        let root = Value::from([("ERREUR", Value::from("indisponible"))]);

        assert!(extract_zones(&root).is_empty());
        assert!(extract_maps(&root).is_empty());
        assert_eq!(ChartCatalog::from(&root), ChartCatalog::default());
    }
}
