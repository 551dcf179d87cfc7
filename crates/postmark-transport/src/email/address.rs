/// Address-list serialization for payload header fields
use crate::constants::ADDRESS_SEPARATOR;
use crate::models::{ClientProfile, EmailAddress};
use base64::Engine;

/// RFC 5322 specials that force a display name into a quoted string
const SPECIALS: &[char] = &[
    '(', ')', '<', '>', '[', ']', ':', ';', '@', '\\', ',', '.', '"',
];

/// Bytes of UTF-8 per encoded word; keeps each word within 75 characters
const ENCODED_WORD_CHUNK: usize = 45;

/// Serializes an address list according to the client profile.
///
/// `Standard` yields the encoded header value (`Name <addr>, addr`),
/// `Legacy` yields the bare addresses only.
pub fn format_address_list(addresses: &[&EmailAddress], profile: ClientProfile) -> String {
    addresses
        .iter()
        .map(|address| match profile {
            ClientProfile::Standard => encode_address(address),
            ClientProfile::Legacy => address.address.clone(),
        })
        .collect::<Vec<_>>()
        .join(ADDRESS_SEPARATOR)
}

/// Encodes a single mailbox for a header value
pub fn encode_address(address: &EmailAddress) -> String {
    match address.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => {
            format!("{} <{}>", encode_display_name(name), address.address)
        }
        _ => address.address.clone(),
    }
}

fn encode_display_name(name: &str) -> String {
    if !name.is_ascii() {
        return encode_words(name);
    }

    if name.contains(SPECIALS) {
        let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
        return format!("\"{}\"", escaped);
    }

    name.to_string()
}

/// RFC 2047 encoded words, split on character boundaries
fn encode_words(name: &str) -> String {
    let mut words = Vec::new();
    let mut chunk = String::new();

    for ch in name.chars() {
        if chunk.len() + ch.len_utf8() > ENCODED_WORD_CHUNK {
            words.push(encode_word(&chunk));
            chunk.clear();
        }
        chunk.push(ch);
    }
    if !chunk.is_empty() {
        words.push(encode_word(&chunk));
    }

    words.join(" ")
}

fn encode_word(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("=?UTF-8?B?{}?=", encoded)
}
