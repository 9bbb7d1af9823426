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

use log::trace;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::element::Element;
use crate::error::Error;

/// Reads an XML document into a generic [`Element`] tree.
///
/// The returned element is the document itself. It has no attributes or
/// text and holds the root tag as its only child. The XML declaration,
/// comments, processing instructions and the doctype are skipped. Text that
/// consists only of whitespace is considered formatting and dropped, any
/// other text is kept as is with entities unescaped.
///
/// # Examples
///
/// ```
/// let document = aeroweb_xml::parse(r#"<validation><resultat>OK</resultat></validation>"#)?;
/// let resultat = document
///     .child("validation")
///     .and_then(|validation| validation.child("resultat"))
///     .and_then(|resultat| resultat.text.as_deref());
///
/// assert_eq!(resultat, Some("OK"));
/// # Ok::<(), aeroweb_xml::Error>(())
/// ```
pub fn parse(xml: &str) -> Result<Element, Error> {
    let mut reader = Reader::from_str(xml);

    // The bottom of the stack is the document, every other entry an open tag.
    let mut stack: Vec<(String, Element)> = vec![(String::new(), Element::new())];

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let (name, element) = open(e)?;
                stack.push((name, element));
            }
            Event::Empty(ref e) => {
                let (name, element) = open(e)?;
                top(&mut stack).push_child(name, element);
            }
            Event::End(ref e) => {
                if stack.len() < 2 {
                    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                    return Err(Error::UnexpectedEnd(name));
                }
                if let Some((name, element)) = stack.pop() {
                    top(&mut stack).push_child(name, element);
                }
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                if !text.trim().is_empty() {
                    top(&mut stack).push_text(&text);
                }
            }
            Event::CData(e) => {
                let cdata = std::str::from_utf8(&e)?;
                top(&mut stack).push_cdata(cdata);
            }
            Event::Eof => break,
            _ => continue,
        }
    }

    if stack.len() > 1 {
        let (name, _) = &stack[stack.len() - 1];
        return Err(Error::UnclosedElement(name.clone()));
    }

    let document = std::mem::take(top(&mut stack));

    trace!("parsed XML document with {} root tag(s)", document.children.len());

    Ok(document)
}

/// Creates the element for an opening tag with its attributes.
fn open(e: &BytesStart<'_>) -> Result<(String, Element), Error> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut element = Element::new();

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.insert(key, value);
    }

    Ok((name, element))
}

fn top(stack: &mut [(String, Element)]) -> &mut Element {
    // The document entry is never popped, so the stack is never empty.
    &mut stack[stack.len() - 1].1
}
