//! A post split into front matter and body.
//!
//! Only `discuss` and `discussAt` are interpreted. Rewriting `discussAt` edits
//! the header text line-wise so every other line and the body keep their exact
//! bytes; the edited header is re-parsed to prove nothing else changed.
//!
//! `discuss` is read loosely: `true`, `yes`, and `on` in any case, quoted or
//! not, and non-zero numbers opt a post in.

use serde_json::{Map as JsonMap, Value as JsonValue};
use serde_yaml::{Mapping, Value as YamlValue};
use toml_edit::{ImDocument, Table as EditTable};

use crate::error::ParseError;

pub const DISCUSS_KEY: &str = "discuss";
pub const DISCUSS_AT_KEY: &str = "discussAt";

/// Front matter flavour, chosen by the opening delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    /// `---` delimited YAML.
    Yaml,
    /// `+++` delimited TOML.
    Toml,
    /// A JSON object whose `{` and `}` sit on lines of their own.
    Json,
}

impl HeaderFormat {
    /// The opening delimiter line.
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
            Self::Json => "{",
        }
    }

    /// The closing delimiter line.
    #[must_use]
    pub const fn closing_delimiter(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
            Self::Json => "}",
        }
    }

    fn detect(line: &str) -> Option<Self> {
        match line.trim_end() {
            "---" => Some(Self::Yaml),
            "+++" => Some(Self::Toml),
            "{" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Header {
    Yaml(Mapping),
    Toml(toml::Table),
    Json(JsonMap<String, JsonValue>),
}

impl Header {
    fn parse(format: HeaderFormat, text: &str) -> Result<Self, ParseError> {
        match format {
            HeaderFormat::Yaml => {
                if text.trim().is_empty() {
                    return Ok(Self::Yaml(Mapping::new()));
                }
                match serde_yaml::from_str::<YamlValue>(text)? {
                    YamlValue::Mapping(mapping) => Ok(Self::Yaml(mapping)),
                    YamlValue::Null => Ok(Self::Yaml(Mapping::new())),
                    _ => Err(ParseError::NotAMapping),
                }
            }
            HeaderFormat::Toml => Ok(Self::Toml(toml::from_str::<toml::Table>(text)?)),
            HeaderFormat::Json => {
                match serde_json::from_str::<JsonValue>(&format!("{{{text}}}"))? {
                    JsonValue::Object(map) => Ok(Self::Json(map)),
                    _ => Err(ParseError::NotAMapping),
                }
            }
        }
    }

    fn discuss(&self) -> bool {
        match self {
            Self::Yaml(mapping) => match mapping.get(DISCUSS_KEY) {
                None | Some(YamlValue::Null) => false,
                Some(YamlValue::Bool(flag)) => *flag,
                Some(YamlValue::String(text)) => truthy_text(text),
                Some(YamlValue::Number(n)) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
                Some(_) => unreadable_flag(),
            },
            Self::Toml(table) => match table.get(DISCUSS_KEY) {
                None => false,
                Some(toml::Value::Boolean(flag)) => *flag,
                Some(toml::Value::String(text)) => truthy_text(text),
                Some(toml::Value::Integer(n)) => *n != 0,
                Some(toml::Value::Float(n)) => n.abs() > 0.0,
                Some(_) => unreadable_flag(),
            },
            Self::Json(map) => match map.get(DISCUSS_KEY) {
                None | Some(JsonValue::Null) => false,
                Some(JsonValue::Bool(flag)) => *flag,
                Some(JsonValue::String(text)) => truthy_text(text),
                Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
                Some(_) => unreadable_flag(),
            },
        }
    }

    fn discuss_at(&self) -> Result<Option<String>, ParseError> {
        let invalid = ParseError::InvalidField {
            key: DISCUSS_AT_KEY,
            expected: "a string",
        };
        let raw = match self {
            Self::Yaml(mapping) => match mapping.get(DISCUSS_AT_KEY) {
                None | Some(YamlValue::Null) => None,
                Some(YamlValue::String(url)) => Some(url.as_str()),
                Some(_) => return Err(invalid),
            },
            Self::Toml(table) => match table.get(DISCUSS_AT_KEY) {
                None => None,
                Some(toml::Value::String(url)) => Some(url.as_str()),
                Some(_) => return Err(invalid),
            },
            Self::Json(map) => match map.get(DISCUSS_AT_KEY) {
                None | Some(JsonValue::Null) => None,
                Some(JsonValue::String(url)) => Some(url.as_str()),
                Some(_) => return Err(invalid),
            },
        };
        Ok(raw
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string))
    }

    fn with_discuss_at(&self, url: &str) -> Self {
        let mut header = self.clone();
        match &mut header {
            Self::Yaml(mapping) => {
                mapping.insert(
                    YamlValue::String(DISCUSS_AT_KEY.to_string()),
                    YamlValue::String(url.to_string()),
                );
            }
            Self::Toml(table) => {
                table.insert(
                    DISCUSS_AT_KEY.to_string(),
                    toml::Value::String(url.to_string()),
                );
            }
            Self::Json(map) => {
                map.insert(
                    DISCUSS_AT_KEY.to_string(),
                    JsonValue::String(url.to_string()),
                );
            }
        }
        header
    }
}

/// A post file: opening delimiter, raw header, closing delimiter, body.
#[derive(Debug, Clone)]
pub struct Document {
    format: HeaderFormat,
    opening: String,
    header: String,
    closing: String,
    body: String,
    parsed: Header,
}

impl Document {
    /// Split `text` into front matter and body and parse the front matter.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if there is no front matter, it is never closed,
    /// it does not parse as a mapping, or `discussAt` is not a string.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut lines = text.split_inclusive('\n');
        let opening = lines.next().ok_or(ParseError::NoFrontMatter)?;
        let format = HeaderFormat::detect(opening).ok_or(ParseError::NoFrontMatter)?;

        let header_start = opening.len();
        let mut offset = header_start;
        for line in lines {
            if line.trim_end() == format.closing_delimiter() {
                let header = &text[header_start..offset];
                let parsed = Header::parse(format, header)?;
                parsed.discuss_at()?;
                return Ok(Self {
                    format,
                    opening: opening.to_string(),
                    header: header.to_string(),
                    closing: line.to_string(),
                    body: text[offset + line.len()..].to_string(),
                    parsed,
                });
            }
            offset += line.len();
        }

        Err(ParseError::Unterminated {
            delimiter: format.delimiter(),
        })
    }

    #[must_use]
    pub const fn format(&self) -> HeaderFormat {
        self.format
    }

    /// Whether the post opted in through `discuss`.
    #[must_use]
    pub fn discuss(&self) -> bool {
        self.parsed.discuss()
    }

    /// The linked discussion URL; blank values count as unset.
    #[must_use]
    pub fn discuss_at(&self) -> Option<String> {
        // Validated in `parse` and `set_discuss_at`.
        self.parsed.discuss_at().ok().flatten()
    }

    /// Raw header text between the delimiters.
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Everything after the closing delimiter line, untouched.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Set `discussAt`, replacing an existing top-level line or adding one.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::RoundTrip`] if the edited header does not parse
    /// back to the old header plus the new URL.
    pub fn set_discuss_at(&mut self, url: &str) -> Result<(), ParseError> {
        let lines: Vec<&str> = self.header.split_inclusive('\n').collect();
        let top_level_end = self.top_level_end(&lines)?;
        let indent = self.key_indent(&lines);

        let existing = lines[..top_level_end].iter().position(|l| {
            l.strip_prefix(indent.as_str())
                .is_some_and(|rest| is_discuss_at_line(rest, self.format))
        });
        let json = self.format == HeaderFormat::Json;
        let (start, end, comma) = match existing {
            Some(idx) => {
                let mut end = idx + 1;
                if self.format == HeaderFormat::Yaml {
                    while end < lines.len() && is_yaml_continuation(lines[end]) {
                        end += 1;
                    }
                }
                (idx, end, json && lines[idx].trim_end().ends_with(','))
            }
            // JSON gets the key first so no other line needs a comma added.
            None if json => (0, 0, !self.header.trim().is_empty()),
            None => (top_level_end, top_level_end, false),
        };

        let line = format!(
            "{indent}{}{}{}",
            self.discuss_at_entry(url),
            if comma { "," } else { "" },
            self.newline()
        );
        let mut header = String::with_capacity(self.header.len() + line.len());
        lines[..start].iter().for_each(|l| header.push_str(l));
        header.push_str(&line);
        lines[end..].iter().for_each(|l| header.push_str(l));

        let reparsed = Header::parse(self.format, &header)
            .map_err(|e| ParseError::RoundTrip(e.to_string()))?;
        if reparsed != self.parsed.with_discuss_at(url) {
            return Err(ParseError::RoundTrip(format!(
                "setting {DISCUSS_AT_KEY} to '{url}' changed other keys"
            )));
        }

        tracing::debug!(replaced = start != end, "rewrote {DISCUSS_AT_KEY} line");
        self.header = header;
        self.parsed = reparsed;
        Ok(())
    }

    /// The full file text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.opening.len() + self.header.len() + self.closing.len() + self.body.len(),
        );
        out.push_str(&self.opening);
        out.push_str(&self.header);
        out.push_str(&self.closing);
        out.push_str(&self.body);
        out
    }

    fn newline(&self) -> &'static str {
        if self.opening.ends_with("\r\n") {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Index of the first header line that is not top level: in TOML, the
    /// first table header. Tables are located from a real parse so lines in
    /// multi-line strings never count.
    fn top_level_end(&self, lines: &[&str]) -> Result<usize, ParseError> {
        if self.format != HeaderFormat::Toml {
            return Ok(lines.len());
        }
        let layout = ImDocument::parse(self.header.as_str())?;
        let Some(offset) = first_table_offset(layout.as_table()) else {
            return Ok(lines.len());
        };
        // Step over blank and comment lines to the header line itself.
        let mut idx = self.header[..offset].matches('\n').count();
        while idx < lines.len() && !lines[idx].trim_start().starts_with('[') {
            idx += 1;
        }
        Ok(idx)
    }

    /// Leading whitespace of top-level keys. Only JSON objects are indented.
    fn key_indent(&self, lines: &[&str]) -> String {
        if self.format != HeaderFormat::Json {
            return String::new();
        }
        lines
            .iter()
            .find(|l| !l.trim().is_empty())
            .map_or_else(
                || "  ".to_string(),
                |l| l[..l.len() - l.trim_start().len()].to_string(),
            )
    }

    fn discuss_at_entry(&self, url: &str) -> String {
        match self.format {
            HeaderFormat::Yaml if is_plain_yaml_url(url) => format!("{DISCUSS_AT_KEY}: {url}"),
            // JSON strings are valid YAML double-quoted scalars.
            HeaderFormat::Yaml => format!(
                "{DISCUSS_AT_KEY}: {}",
                serde_json::Value::String(url.to_string())
            ),
            HeaderFormat::Toml => format!(
                "{DISCUSS_AT_KEY} = {}",
                toml::Value::String(url.to_string())
            ),
            HeaderFormat::Json => format!(
                "\"{DISCUSS_AT_KEY}\": {}",
                JsonValue::String(url.to_string())
            ),
        }
    }
}

/// Byte offset of the earliest `[table]` or `[[array]]` header, recursing
/// through implicit parents of dotted headers. Dotted keys are not headers.
fn first_table_offset(table: &EditTable) -> Option<usize> {
    let mut first: Option<usize> = None;
    for (_, item) in table.iter() {
        let mut consider = |child: &EditTable| {
            if child.is_dotted() {
                return;
            }
            let offset = if child.is_implicit() {
                first_table_offset(child)
            } else {
                child.span().map(|span| span.start)
            };
            if let Some(offset) = offset {
                first = Some(first.map_or(offset, |f| f.min(offset)));
            }
        };
        if let Some(child) = item.as_table() {
            consider(child);
        } else if let Some(array) = item.as_array_of_tables() {
            array.iter().for_each(&mut consider);
        }
    }
    first
}

fn truthy_text(text: &str) -> bool {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => true,
        "false" | "no" | "off" | "" => false,
        other => {
            tracing::warn!(value = other, "{DISCUSS_KEY} is not a boolean, treating as false");
            false
        }
    }
}

fn unreadable_flag() -> bool {
    tracing::warn!("{DISCUSS_KEY} is a list or mapping, treating as false");
    false
}

fn is_discuss_at_line(line: &str, format: HeaderFormat) -> bool {
    let quoted_double = format!("\"{DISCUSS_AT_KEY}\"");
    let quoted_single = format!("'{DISCUSS_AT_KEY}'");
    let Some(rest) = [DISCUSS_AT_KEY, quoted_double.as_str(), quoted_single.as_str()]
        .into_iter()
        .find_map(|key| line.strip_prefix(key))
    else {
        return false;
    };
    let rest = rest.trim_start_matches([' ', '\t']);
    match format {
        HeaderFormat::Yaml | HeaderFormat::Json => rest.starts_with(':'),
        HeaderFormat::Toml => rest.starts_with('='),
    }
}

fn is_yaml_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t']) && !line.trim().is_empty()
}

fn is_plain_yaml_url(url: &str) -> bool {
    url.contains("://")
        && url.starts_with(|c: char| c.is_ascii_alphabetic())
        && !url.ends_with(':')
        && url
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-._~:/?=&%+@".contains(c))
}
