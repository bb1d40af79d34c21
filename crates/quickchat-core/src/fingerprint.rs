//! Message fingerprints.
//!
//! A fingerprint is a short, deterministic digest of a message:
//!
//! ```text
//! <id[0..2]>:<key>:<first word><last word>     (uppercased)
//! ```
//!
//! where `<key>` is either the dispatcher's send sequence number
//! ([`FingerprintScheme::SequenceIndexed`]) or the sender's first initial
//! ([`FingerprintScheme::IdentityIndexed`]). The ledger keys deletion and
//! reports on the identity-indexed form.
//!
//! Fingerprinting never fails: input it cannot digest yields `""`.

use serde::{Deserialize, Serialize};

/// Which key sits in the middle segment of a fingerprint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FingerprintScheme {
    /// Keyed on the send counter assigned by a dispatcher.
    SequenceIndexed,
    /// Keyed on the sender's first initial.
    #[default]
    IdentityIndexed,
}

/// Identity-indexed fingerprint: `"<id2>:<senderInitial>:<first><last>"`.
///
/// Returns `""` if `id` has fewer than two characters or `sender` is empty.
pub fn identity_fingerprint(id: &str, sender: &str, payload: &str) -> String {
    let Some(initial) = sender.chars().next() else {
        return String::new();
    };
    let mut key = [0u8; 4];
    assemble(id, initial.encode_utf8(&mut key), payload)
}

/// Identity-indexed fingerprint over a possibly missing payload.
pub fn identity_fingerprint_opt(id: &str, sender: &str, payload: Option<&str>) -> String {
    payload.map_or_else(String::new, |p| identity_fingerprint(id, sender, p))
}

/// Sequence-indexed fingerprint: `"<id2>:<sequence>:<first><last>"`.
///
/// Returns `""` if `id` has fewer than two characters.
pub fn sequence_fingerprint(id: &str, sequence: u64, payload: &str) -> String {
    assemble(id, &sequence.to_string(), payload)
}

/// Sequence-indexed fingerprint over a possibly missing payload.
pub fn sequence_fingerprint_opt(id: &str, sequence: u64, payload: Option<&str>) -> String {
    payload.map_or_else(String::new, |p| sequence_fingerprint(id, sequence, p))
}

fn assemble(id: &str, key: &str, payload: &str) -> String {
    let Some(prefix) = id_prefix(id) else {
        return String::new();
    };
    let (first, last) = edge_words(payload);
    format!("{prefix}:{key}:{first}{last}").to_uppercase()
}

pub(crate) fn id_prefix(id: &str) -> Option<&str> {
    let mut indices = id.char_indices().map(|(i, _)| i).skip(1);
    indices.next()?;
    let end = indices.next().unwrap_or(id.len());
    Some(&id[..end])
}

/// First and last whitespace-delimited words of the trimmed payload.
///
/// A single word is returned twice; blank payloads give two empty segments.
fn edge_words(payload: &str) -> (&str, &str) {
    let mut words = payload.split_whitespace();
    match words.next() {
        None => ("", ""),
        Some(first) => (first, words.last().unwrap_or(first)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fingerprint_multi_word() {
        assert_eq!(
            identity_fingerprint("0012345678", "Funiwe", "Hi Mike, can you join us for dinner tonight"),
            "00:F:HITONIGHT"
        );
    }

    #[test]
    fn test_identity_fingerprint_single_word() {
        assert_eq!(
            identity_fingerprint("AB98765432", "Funiwe", "Greetings"),
            "AB:F:GREETINGSGREETINGS"
        );
    }

    #[test]
    fn test_identity_fingerprint_blank_payload() {
        assert_eq!(identity_fingerprint("AB1234", "F", "   "), "AB:F:");
        assert_eq!(identity_fingerprint("AB1234", "F", ""), "AB:F:");
    }

    #[test]
    fn test_identity_fingerprint_keeps_punctuation() {
        assert_eq!(
            identity_fingerprint("id2", "Funiwe", "Where are you? You are late! I have asked you to be on time."),
            "ID:F:WHERETIME."
        );
    }

    #[test]
    fn test_identity_fingerprint_fails_closed() {
        assert_eq!(identity_fingerprint("A", "Funiwe", "hello"), "");
        assert_eq!(identity_fingerprint("", "Funiwe", "hello"), "");
        assert_eq!(identity_fingerprint("AB12", "", "hello"), "");
        assert_eq!(identity_fingerprint_opt("AB12", "F", None), "");
    }

    #[test]
    fn test_sequence_fingerprint() {
        assert_eq!(
            sequence_fingerprint("0012345678", 0, "Hi thanks"),
            "00:0:HITHANKS"
        );
        assert_eq!(
            sequence_fingerprint("9912345678", 12, "  Did you get the cake?  "),
            "99:12:DIDCAKE?"
        );
        assert_eq!(sequence_fingerprint("9", 1, "hello"), "");
        assert_eq!(sequence_fingerprint_opt("99", 1, None), "");
    }

    #[test]
    fn test_multibyte_prefix_does_not_panic() {
        assert_eq!(identity_fingerprint("éa123", "ñ", "olá"), "ÉA:Ñ:OLÁOLÁ");
        assert_eq!(identity_fingerprint("é", "F", "x"), "");
    }
}
