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

//! The generic tree yielded by [`parse`](crate::parse).
//!
//! An [`Element`] mirrors one XML element without interpreting it: the
//! attribute bag, the character data, the CDATA sections and the child
//! elements are kept in separate slots. Children are keyed by their tag name.
//! A tag that appears once is stored as [`Child::One`], a tag that repeats
//! within the same parent is promoted to [`Child::Many`] in document order.

use indexmap::map::Entry;
use indexmap::IndexMap;

/// An XML element with its attributes, character data and children.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Element {
    /// Attributes in document order (e.g. `oaci="LFPG"`).
    pub attributes: IndexMap<String, String>,
    /// Character data of the element, if any non-blank text was found.
    pub text: Option<String>,
    /// Content of the `<![CDATA[...]]>` sections of the element.
    pub cdata: Option<String>,
    /// Child elements keyed by tag name, ordered by first occurrence.
    pub children: IndexMap<String, Child>,
}

/// One or more child elements sharing the same tag name.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Child {
    One(Element),
    Many(Vec<Element>),
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first child with the tag `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.get(name).and_then(|child| child.iter().next())
    }

    /// Appends a child under `name`, promoting an existing single child to a
    /// list if the tag repeats.
    pub(crate) fn push_child(&mut self, name: String, element: Element) {
        match self.children.entry(name) {
            Entry::Vacant(entry) => {
                entry.insert(Child::One(element));
            }
            Entry::Occupied(mut entry) => {
                let child = entry.get_mut();
                match child {
                    Child::Many(elements) => elements.push(element),
                    Child::One(first) => {
                        let first = std::mem::take(first);
                        *child = Child::Many(vec![first, element]);
                    }
                }
            }
        }
    }

    pub(crate) fn push_text(&mut self, s: &str) {
        self.text.get_or_insert_with(String::new).push_str(s);
    }

    pub(crate) fn push_cdata(&mut self, s: &str) {
        self.cdata.get_or_insert_with(String::new).push_str(s);
    }
}

impl Child {
    /// Iterates over the elements regardless of their multiplicity.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        match self {
            Self::One(element) => std::slice::from_ref(element).iter(),
            Self::Many(elements) => elements.iter(),
        }
    }
}
