// SPDX-FileCopyrightText: 2026 Pluggio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamic-loader patterns.
//!
//! A [`Pattern`] decides whether a dynamic loader applies to an input and
//! extracts the named captures handed to it. Three shapes exist: a literal
//! template with `{name}` placeholders matched against a whole key, a
//! pre-built regular expression, and a structured URL template constraining
//! any combination of scheme, host, and path.

use regex::Regex;
use url::Url;

use crate::traits::Params;

/// A dynamic-loader pattern with a single matching operation.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Literal string with `{name}` placeholders, matched against the whole
    /// key. `*` matches any run of characters; placeholders capture lazily.
    Key(String),
    /// Pre-built regular expression, matched unanchored. Named captures
    /// become loader params; anonymous captures are discarded.
    Regex(Regex),
    /// Structured URL template. Omitted segments are unconstrained.
    Url(UrlTemplate),
}

impl Pattern {
    /// Shorthand for [`Pattern::Key`].
    pub fn key(template: impl Into<String>) -> Self {
        Self::Key(template.into())
    }

    /// Match `candidate` against this pattern, returning the named captures
    /// on success.
    pub fn matches(&self, candidate: &str) -> Option<Params> {
        match self {
            Self::Key(template) => {
                let re = compile_segment(template, None)?;
                captures_to_params(&re, candidate)
            }
            Self::Regex(re) => captures_to_params(re, candidate),
            Self::Url(template) => template.matches(candidate),
        }
    }
}

impl From<UrlTemplate> for Pattern {
    fn from(template: UrlTemplate) -> Self {
        Self::Url(template)
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

/// Template constraining any combination of a URL's scheme, host, and path.
///
/// Each segment is a literal with `{name}` placeholders; a placeholder stops
/// at the segment's separator (`.` in hosts, `/` in paths). `*` matches a
/// single segment, `**` matches across separators. Named captures from all
/// segments are merged into one flat map.
#[derive(Debug, Clone, Default)]
pub struct UrlTemplate {
    scheme: Option<String>,
    host: Option<String>,
    path: Option<String>,
}

impl UrlTemplate {
    /// An unconstrained template (matches every parseable URL).
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the scheme, e.g. `"sample+{encoding}"`.
    pub fn scheme(mut self, template: impl Into<String>) -> Self {
        self.scheme = Some(template.into());
        self
    }

    /// Constrain the host, e.g. `"{bucket}.example.com"`.
    pub fn host(mut self, template: impl Into<String>) -> Self {
        self.host = Some(template.into());
        self
    }

    /// Constrain the path, e.g. `"/assets/{name}"`.
    pub fn path(mut self, template: impl Into<String>) -> Self {
        self.path = Some(template.into());
        self
    }

    /// Match a full URL string, merging named captures from every
    /// constrained segment.
    pub fn matches(&self, candidate: &str) -> Option<Params> {
        let url = Url::parse(candidate).ok()?;
        let mut params = Params::new();

        if let Some(template) = &self.scheme {
            let re = compile_segment(template, None)?;
            params.extend(captures_to_params(&re, url.scheme())?);
        }
        if let Some(template) = &self.host {
            let re = compile_segment(template, Some('.'))?;
            params.extend(captures_to_params(&re, url.host_str().unwrap_or(""))?);
        }
        if let Some(template) = &self.path {
            let re = compile_segment(template, Some('/'))?;
            params.extend(captures_to_params(&re, url.path())?);
        }
        Some(params)
    }
}

/// Compile a literal-with-placeholders template into an anchored regex.
///
/// `stop` is the separator a placeholder or single `*` must not cross
/// (none for whole keys and schemes).
fn compile_segment(template: &str, stop: Option<char>) -> Option<Regex> {
    let mut src = String::from("^");
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' => {
                let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
                if !is_valid_group_name(&name) {
                    return None;
                }
                match stop {
                    Some(sep) => src.push_str(&format!("(?P<{name}>[^{sep}]+?)")),
                    None => src.push_str(&format!("(?P<{name}>.+?)")),
                }
            }
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    src.push_str(".*");
                } else {
                    match stop {
                        Some(sep) => src.push_str(&format!("[^{sep}]*")),
                        None => src.push_str(".*"),
                    }
                }
            }
            other => src.push_str(&regex::escape(&other.to_string())),
        }
    }
    src.push('$');
    Regex::new(&src).ok()
}

fn is_valid_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Collect named captures into a flat map, discarding anonymous groups.
fn captures_to_params(re: &Regex, candidate: &str) -> Option<Params> {
    let caps = re.captures(candidate)?;
    let mut params = Params::new();
    for name in re.capture_names().flatten() {
        if let Some(matched) = caps.name(name) {
            params.insert(name.to_string(), matched.as_str().to_string());
        }
    }
    Some(params)
}
