use regex::Regex;
use std::sync::OnceLock;

/// Regex matching the "<business> in|at|near <location>" query shape.
/// The left group is lazy so the first connector splits the sentence.
static CONNECTOR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_connector_regex() -> &'static Regex {
    CONNECTOR_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^(.+?)\s+(?:in|at|near)\s+(.+)$").expect("Invalid regex pattern")
    })
}

/// Cities recognized by the fallback scan when a query carries no connector
/// word. Lowercase, scanned in table order: the first entry found anywhere in
/// the query wins, even if another city occurs earlier in the text.
pub const KNOWN_CITIES: &[&str] = &[
    "mumbai",
    "delhi",
    "bangalore",
    "bengaluru",
    "pune",
    "hyderabad",
    "chennai",
    "kolkata",
    "ahmedabad",
    "jaipur",
    "surat",
    "lucknow",
    "nagpur",
    "indore",
    "chandigarh",
    "goa",
];

/// Filler phrases stripped (repeatedly) from the front of a business-type
/// candidate. Multi-word phrases precede their single-word heads so that
/// "tell me about" is removed as one unit.
pub const FILLER_PREFIXES: &[&str] = &[
    "tell me about",
    "show me",
    "i want to",
    "looking for",
    "open",
    "start",
    "find",
    "a",
    "an",
    "the",
];

/// Connector prepositions trimmed from the tail of a business-type candidate
/// and the head of a location candidate.
const CONNECTORS: &[&str] = &["in", "at", "near"];

/// A user utterance resolved into its structured parts.
///
/// A query that could not be fully resolved keeps `None` in the missing slot;
/// [`ParsedQuery::needs_clarification`] is derived from that, so an
/// "unclarified but complete" value cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParsedQuery {
    /// Free-text business category, e.g. "coffee shop".
    pub business_type: Option<String>,
    /// Title-cased place name, e.g. "Pune".
    pub location: Option<String>,
}

impl ParsedQuery {
    /// True when the presentation layer must prompt the user instead of
    /// calling the backend gateway.
    pub fn needs_clarification(&self) -> bool {
        self.business_type.is_none() || self.location.is_none()
    }
}

/// Parse a free-text utterance into a [`ParsedQuery`].
///
/// Deterministic and infallible: ambiguity is encoded as `None` fields, never
/// as an error. Two recognizers run in order:
///
/// 1. the connector pattern `"<text> in|at|near <text>"`;
/// 2. a scan of [`KNOWN_CITIES`] over the lowercased text, taking everything
///    before the first hit as the business-type candidate.
///
/// Both candidates then go through cleanup: leading filler phrases and
/// trailing connectors are stripped from the business type, the location is
/// title-cased. A candidate that is empty after cleanup counts as missing.
pub fn parse_query(input: &str) -> ParsedQuery {
    let trimmed = input.trim();
    let lowered = trimmed.to_lowercase();

    let (business_raw, location_raw) = if let Some(caps) = get_connector_regex().captures(trimmed) {
        (Some(caps[1].to_string()), Some(caps[2].to_string()))
    } else if let Some((city, start)) = find_known_city(&lowered) {
        // Byte offsets line up with the original for ASCII input; fall back
        // to the lowered text if case folding shifted them.
        let before = trimmed.get(..start).unwrap_or(&lowered[..start]);
        (Some(before.to_string()), Some(city))
    } else {
        (None, None)
    };

    let business_type = business_raw
        .as_deref()
        .map(clean_business_type)
        .filter(|s| !s.is_empty());
    let location = location_raw
        .as_deref()
        .map(clean_location)
        .filter(|s| !s.is_empty());

    ParsedQuery { business_type, location }
}

/// Find the first [`KNOWN_CITIES`] entry (in table order) occurring anywhere
/// in the lowercased text. Returns the title-cased city and the byte offset
/// of its match.
fn find_known_city(lowered: &str) -> Option<(String, usize)> {
    for city in KNOWN_CITIES {
        if let Some(start) = lowered.find(city) {
            return Some((title_case(city), start));
        }
    }
    None
}

fn clean_business_type(raw: &str) -> String {
    strip_trailing_connectors(strip_leading_fillers(raw)).to_string()
}

fn clean_location(raw: &str) -> String {
    let mut rest = raw.trim();
    'strip: loop {
        for connector in CONNECTORS {
            if let Some(after) = strip_prefix_ignore_case(rest, connector) {
                if after.is_empty() || after.starts_with(char::is_whitespace) {
                    rest = after.trim_start();
                    continue 'strip;
                }
            }
        }
        break;
    }
    title_case(rest)
}

/// Strip filler phrases from the front of the text until none applies.
fn strip_leading_fillers(text: &str) -> &str {
    let mut rest = text.trim();
    'strip: loop {
        for filler in FILLER_PREFIXES {
            if let Some(after) = strip_prefix_ignore_case(rest, filler) {
                if after.is_empty() || after.starts_with(char::is_whitespace) {
                    rest = after.trim_start();
                    continue 'strip;
                }
            }
        }
        return rest;
    }
}

/// Strip connector prepositions left dangling at the end of the text.
fn strip_trailing_connectors(text: &str) -> &str {
    let mut rest = text.trim_end();
    'strip: loop {
        for connector in CONNECTORS {
            if let Some(before) = strip_suffix_ignore_case(rest, connector) {
                if before.is_empty() || before.ends_with(char::is_whitespace) {
                    rest = before.trim_end();
                    continue 'strip;
                }
            }
        }
        return rest;
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let cut = text.len().checked_sub(suffix.len())?;
    let tail = text.get(cut..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &text[..cut])
}

/// Capitalize the first letter of every whitespace-separated word and
/// lowercase the rest: "navi mumbai" -> "Navi Mumbai".
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
