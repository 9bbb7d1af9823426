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

//! Normalized response values.

use indexmap::IndexMap;

/// A normalized response tree.
///
/// Every XML element of a response ends up as one of three shapes: a
/// [`Text`](Value::Text) if it carried character data, a [`Map`](Value::Map)
/// of its fields otherwise and a [`List`](Value::List) where a tag repeated
/// within its parent. Fields keep the order in which they appeared in the
/// document.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Value {
    Text(String),
    Map(IndexMap<String, Value>),
    List(Vec<Value>),
}

impl Value {
    /// Returns the text if this is a [`Value::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the field `key` if this is a [`Value::Map`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Follows a path of field names from this value.
    ///
    /// ```
    /// # use aeroweb::Value;
    /// let value = Value::from([(
    ///     "validation",
    ///     Value::from([("resultat", Value::from("OK"))]),
    /// )]);
    ///
    /// assert_eq!(value.pointer(&["validation", "resultat"]), Some(&Value::from("OK")));
    /// assert_eq!(value.pointer(&["validation", "code"]), None);
    /// ```
    pub fn pointer(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(self, |value, key| value.get(key))
    }

    /// Returns the value as a list of items.
    ///
    /// An XML element that may appear once or many times is a single value in
    /// the first case and a [`Value::List`] in the second. This coerces both
    /// cases into a slice so callers can always iterate.
    ///
    /// ```
    /// # use aeroweb::Value;
    /// let one = Value::from("LFPG");
    /// let many = Value::List(vec![Value::from("LFPG"), Value::from("LFPO")]);
    ///
    /// assert_eq!(one.as_list(), [Value::from("LFPG")]);
    /// assert_eq!(many.as_list().len(), 2);
    /// ```
    pub fn as_list(&self) -> &[Value] {
        match self {
            Self::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// Returns `true` for an empty text, map or list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }
}

impl Default for Value {
    /// An empty map, the shape of a response without any data.
    fn default() -> Self {
        Self::Map(IndexMap::new())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self::Map(map)
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Value); N]> for Value {
    fn from(fields: [(K, Value); N]) -> Self {
        Self::Map(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Map(map) => serde::Serialize::serialize(map, serializer),
            Self::List(items) => serde::Serialize::serialize(items, serializer),
        }
    }
}
