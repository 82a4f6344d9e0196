//! Minimal CSS-style selectors for the in-memory host.
//!
//! Supports comma-separated compound selectors built from `tag`, `*`, `#id`,
//! `.class`, `[attr]` and `[attr=value]` (value optionally quoted). No
//! combinators or pseudo-classes.

use super::memory::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Tag(String),
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Vec<Part>>,
}

impl Selector {
    /// Parse a selector list. Returns `None` for anything outside the supported subset.
    pub fn parse(input: &str) -> Option<Self> {
        let alternatives = input
            .split(',')
            .map(|compound| parse_compound(compound.trim()))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { alternatives })
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.alternatives
            .iter()
            .any(|parts| parts.iter().all(|part| part_matches(part, element)))
    }
}

fn parse_compound(input: &str) -> Option<Vec<Part>> {
    if input.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    let mut chars = input.chars().peekable();

    // Optional leading tag or universal selector
    let tag: String = std::iter::from_fn(|| chars.next_if(|c| is_ident_char(*c))).collect();
    if !tag.is_empty() {
        parts.push(Part::Tag(tag.to_ascii_lowercase()));
    } else {
        // `*` adds no constraint
        let _ = chars.next_if_eq(&'*');
    }

    while let Some(c) = chars.next() {
        match c {
            '#' | '.' => {
                let ident: String =
                    std::iter::from_fn(|| chars.next_if(|c| is_ident_char(*c))).collect();
                if ident.is_empty() {
                    return None;
                }
                parts.push(if c == '#' {
                    Part::Id(ident)
                } else {
                    Part::Class(ident)
                });
            }
            '[' => {
                let body: String = std::iter::from_fn(|| chars.next_if(|c| *c != ']')).collect();
                chars.next_if_eq(&']')?;
                parts.push(parse_attr(&body)?);
            }
            _ => return None,
        }
    }

    Some(parts)
}

fn parse_attr(body: &str) -> Option<Part> {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => {
            let value = value.trim();
            let unquoted = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            (name.trim(), Some(unquoted.to_string()))
        }
        None => (body.trim(), None),
    };
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return None;
    }
    Some(Part::Attr {
        name: name.to_ascii_lowercase(),
        value,
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn part_matches(part: &Part, element: &Element) -> bool {
    match part {
        Part::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
        Part::Id(id) => element.attr("id") == Some(id.as_str()),
        Part::Class(class) => element
            .attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class.as_str())),
        Part::Attr { name, value: None } => element.attr(name).is_some(),
        Part::Attr {
            name,
            value: Some(value),
        } => element.attr(name) == Some(value.as_str()),
    }
}
