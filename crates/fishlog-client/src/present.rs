//! Presentation helpers shared by front ends.

use fishlog_shared::constants::MAP_SEARCH_URL;

/// Species name with its first character upper-cased ("striped bass" ->
/// "Striped bass").
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// First match wins, so "striped bass" must precede any plainer bass rule.
const SPECIES_ICONS: &[(&str, &str)] = &[
    ("striped bass", "🐟"),
    ("shark", "🦈"),
    ("catfish", "🐡"),
    ("salmon", "🐠"),
    ("trout", "🐟"),
    ("tuna", "🐟"),
    ("snapper", "🐠"),
    ("perch", "🐟"),
    ("flounder", "🦑"),
    ("porgy", "🐟"),
];

const DEFAULT_ICON: &str = "🎣";

/// Emoji shown next to a catch.
pub fn species_icon(name: &str) -> &'static str {
    let name = name.to_lowercase();
    SPECIES_ICONS
        .iter()
        .find(|&&(needle, _)| name.contains(needle))
        .map_or(DEFAULT_ICON, |&(_, icon)| icon)
}

/// Map search link for a free-text location.
pub fn map_search_url(location: &str) -> String {
    format!("{MAP_SEARCH_URL}{}", encode_uri_component(location))
}

/// Percent-encode everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
