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

use super::{Adapted, CHART, CHART_CONTAINER, ZONE_BLOCK};
use crate::value::Value;

/// Collects the charts of all zone blocks into one list.
///
/// Charts are listed under `cartes.bloc_zone[].carte[]`. Each zone block may
/// hold one or many charts, or none at all. Missing and blank entries are
/// dropped. If there is no `cartes` container, the value is returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use aeroweb::{to_flat_list, Value};
///
/// let chart = Value::from([("type", Value::from("AERO_TEMSI")), ("niveau", Value::from("100"))]);
/// let root = Value::from([(
///     "cartes",
///     Value::from([("bloc_zone", Value::from([("idz", Value::from("AERO_FRANCE")), ("carte", chart.clone())]))]),
/// )]);
///
/// assert_eq!(to_flat_list(root).shaped(), Some(vec![chart]));
/// ```
pub fn to_flat_list(root: Value) -> Adapted<Vec<Value>> {
    if root.get(CHART_CONTAINER).is_none() {
        return Adapted::Unchanged(root);
    }

    let charts = root
        .pointer(&[CHART_CONTAINER, ZONE_BLOCK])
        .map(Value::as_list)
        .unwrap_or_default()
        .iter()
        .filter_map(|zone| zone.get(CHART))
        .flat_map(Value::as_list)
        .filter(|chart| !is_blank(chart))
        .cloned()
        .collect();

    Adapted::Shaped(charts)
}

fn is_blank(value: &Value) -> bool {
    matches!(value, Value::Text(s) if s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(kind: &str, niveau: &str) -> Value {
        Value::from([("type", Value::from(kind)), ("niveau", Value::from(niveau))])
    }

    fn zone(idz: &str, charts: Option<Value>) -> Value {
        let mut fields = vec![("idz", Value::from(idz))];
        fields.extend(charts.map(|charts| ("carte", charts)));
        Value::Map(fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn missing_container_returns_input() {
        let root = Value::from([("ERREUR", Value::from("pas de carte"))]);
        assert_eq!(to_flat_list(root.clone()), Adapted::Unchanged(root));
    }

    #[test]
    fn charts_of_all_zones_are_concatenated() {
        let root = Value::from([(
            "cartes",
            Value::from([(
                "bloc_zone",
                Value::List(vec![
                    zone(
                        "AERO_FRANCE",
                        Some(Value::List(vec![
                            chart("AERO_TEMSI", "100"),
                            chart("AERO_WINTEM", "340"),
                        ])),
                    ),
                    zone("AERO_EUROC", None),
                    zone("AERO_EUR", Some(chart("AERO_TEMSI", "450"))),
                ]),
            )]),
        )]);

        assert_eq!(
            to_flat_list(root).shaped().unwrap(),
            vec![
                chart("AERO_TEMSI", "100"),
                chart("AERO_WINTEM", "340"),
                chart("AERO_TEMSI", "450"),
            ]
        );
    }

    #[test]
    fn blank_charts_are_dropped() {
        let root = Value::from([(
            "cartes",
            Value::from([(
                "bloc_zone",
                zone(
                    "AERO_FRANCE",
                    Some(Value::List(vec![Value::from(""), chart("AERO_TEMSI", "100")])),
                ),
            )]),
        )]);

        assert_eq!(
            to_flat_list(root).shaped().unwrap(),
            vec![chart("AERO_TEMSI", "100")]
        );
    }

    #[test]
    fn container_without_zones_is_empty() {
        let root = Value::from([("cartes", Value::default())]);
        assert_eq!(to_flat_list(root), Adapted::Shaped(vec![]));
    }
}
