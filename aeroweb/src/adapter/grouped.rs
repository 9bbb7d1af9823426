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

use indexmap::IndexMap;
use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

use super::Adapted;
use crate::value::Value;

/// Container of the advisories grouped by station.
const GROUP_CONTAINER: &str = "groupe";

/// Advisories of one station grouped by message type.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GroupedBulletin {
    /// ICAO code of the advisory centre.
    pub oaci: String,
    /// Name of the advisory centre.
    pub nom: String,
    /// Message texts keyed by message type, in order of first occurrence.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub groups: IndexMap<String, Vec<String>>,
}

impl From<&Value> for GroupedBulletin {
    fn from(station: &Value) -> Self {
        let text = |key: &str| {
            station
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let mut bulletin = GroupedBulletin {
            oaci: text("oaci"),
            nom: text("nom"),
            groups: IndexMap::new(),
        };

        let messages = station.get("message").map(Value::as_list).unwrap_or_default();

        for message in messages.iter().filter(|message| !message.is_empty()) {
            let Some(kind) = message.get("type").and_then(Value::as_str) else {
                debug!("message of {} has no type and is skipped", bulletin.oaci);
                continue;
            };

            let group = bulletin.groups.entry(kind.to_string()).or_default();
            if let Some(texte) = message.get("texte").and_then(Value::as_str) {
                group.push(texte.to_string());
            }
        }

        bulletin
    }
}

/// Groups the advisories of each station by message type.
///
/// The response is expected to list its stations under `groupe.messages`,
/// each with its `message` entries carrying a `type` and a `texte`. If there
/// is no `groupe`, the value is returned unchanged.
pub fn to_grouped(root: Value) -> Adapted<Vec<GroupedBulletin>> {
    if root.get(GROUP_CONTAINER).is_none() {
        return Adapted::Unchanged(root);
    }

    let bulletins = root
        .pointer(&[GROUP_CONTAINER, "messages"])
        .map(Value::as_list)
        .unwrap_or_default()
        .iter()
        .map(GroupedBulletin::from)
        .collect();

    Adapted::Shaped(bulletins)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(kind: &str, texte: &str) -> Value {
        Value::from([("type", Value::from(kind)), ("texte", Value::from(texte))])
    }

    #[test]
    fn missing_container_returns_input() {
        let root = Value::from([("vaa", Value::from("unexpected"))]);
        assert_eq!(to_grouped(root.clone()), Adapted::Unchanged(root));

        assert_eq!(to_grouped(Value::default()), Adapted::Unchanged(Value::default()));
    }

    #[test]
    fn messages_are_grouped_by_type() {
        let root = Value::from([(
            "groupe",
            Value::from([(
                "messages",
                Value::from([
                    ("oaci", Value::from("LFPW")),
                    ("nom", Value::from("Toulouse")),
                    (
                        "message",
                        Value::List(vec![
                            message("VAA", "VA ADVISORY 1"),
                            message("VAG", "VA GRAPHIC"),
                            message("VAA", "VA ADVISORY 2"),
                        ]),
                    ),
                ]),
            )]),
        )]);

        let bulletins = to_grouped(root).shaped().unwrap();
        assert_eq!(bulletins.len(), 1);

        let lfpw = &bulletins[0];
        assert_eq!(lfpw.oaci, "LFPW");
        assert_eq!(lfpw.nom, "Toulouse");

        let kinds: Vec<_> = lfpw.groups.keys().map(String::as_str).collect();
        assert_eq!(kinds, ["VAA", "VAG"]);
        assert_eq!(lfpw.groups["VAA"], ["VA ADVISORY 1", "VA ADVISORY 2"]);
        assert_eq!(lfpw.groups["VAG"], ["VA GRAPHIC"]);
    }

    #[test]
    fn single_station_and_message_are_coerced() {
        let root = Value::from([(
            "groupe",
            Value::from([(
                "messages",
                Value::from([
                    ("oaci", Value::from("FMEE")),
                    ("nom", Value::from("La Réunion")),
                    ("message", message("TCA", "TC ADVISORY")),
                ]),
            )]),
        )]);

        let bulletins = to_grouped(root).shaped().unwrap();
        assert_eq!(bulletins[0].groups["TCA"], ["TC ADVISORY"]);
    }

    #[test]
    fn untyped_messages_are_skipped() {
        let station = Value::from([
            ("oaci", Value::from("KNHC")),
            (
                "message",
                Value::List(vec![
                    Value::from([("texte", Value::from("orphan"))]),
                    message("TCA", "TC ADVISORY"),
                ]),
            ),
        ]);

        let bulletin = GroupedBulletin::from(&station);
        assert_eq!(bulletin.groups.len(), 1);
        assert_eq!(bulletin.groups["TCA"], ["TC ADVISORY"]);
    }
}
