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

//! Collapses the generic XML tree into [`Value`]s.
//!
//! The service encodes fields as attributes, as character data, as CDATA
//! sections or as nested elements, and does not do so consistently across
//! data types. Normalization flattens all of these into one shape:
//!
//! 1. attributes become fields next to the child elements, replacing a
//!    child of the same name,
//! 2. an element with text (or else CDATA) becomes that text,
//! 3. `lien` fields become absolute URLs,
//! 4. repeated elements become lists.

use aeroweb_xml::{Child, Element};
use indexmap::IndexMap;
use log::warn;
use url::Url;

use crate::value::Value;

/// Name of the fields holding a link to a resource of the service.
pub const LINK_FIELD: &str = "lien";

/// Normalizes an element and all its descendants.
///
/// Links are resolved relative to `link_base`, the address of the service.
///
/// # Examples
///
/// ```
/// use aeroweb::{normalize, Value};
/// use url::Url;
///
/// let document = aeroweb_xml::parse(
///     r#"<carte type="AERO_TEMSI" niveau="100" lien="/FR/aviation/temsi.png"/>"#,
/// )?;
/// let base = Url::parse("https://aviation.meteo.fr")?;
/// let value = normalize(&document, &base);
///
/// assert_eq!(
///     value.pointer(&["carte", "lien"]),
///     Some(&Value::from("https://aviation.meteo.fr/FR/aviation/temsi.png"))
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn normalize(element: &Element, link_base: &Url) -> Value {
    if let Some(text) = &element.text {
        return Value::Text(text.clone());
    }

    if let Some(cdata) = &element.cdata {
        return Value::Text(cdata.clone());
    }

    let mut fields = IndexMap::with_capacity(element.children.len() + element.attributes.len());

    for (name, child) in &element.children {
        let value = match child {
            Child::One(element) => normalize(element, link_base),
            Child::Many(elements) => Value::List(
                elements
                    .iter()
                    .map(|element| normalize(element, link_base))
                    .collect(),
            ),
        };
        fields.insert(name.clone(), value);
    }

    // An attribute overwrites a child of the same name in place.
    for (name, value) in &element.attributes {
        fields.insert(name.clone(), Value::Text(value.clone()));
    }

    if let Some(link) = fields.get_mut(LINK_FIELD) {
        resolve_links(link, link_base);
    }

    Value::Map(fields)
}

fn resolve_links(value: &mut Value, base: &Url) {
    match value {
        Value::Text(link) => *link = resolve(base, link),
        Value::List(items) => items.iter_mut().for_each(|item| resolve_links(item, base)),
        Value::Map(_) => {}
    }
}

fn resolve(base: &Url, link: &str) -> String {
    match base.join(link) {
        Ok(url) => url.into(),
        Err(e) => {
            warn!("link {link:?} could not be resolved against {base}: {e}");
            format!("{}{link}", base.as_str().trim_end_matches('/'))
        }
    }
}
