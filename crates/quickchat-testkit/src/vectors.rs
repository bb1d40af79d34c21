//! Golden fingerprint vectors.
//!
//! Fingerprints are matched against stored records, so their exact text must
//! not drift.

use quickchat_core::{identity_fingerprint, sequence_fingerprint, FingerprintScheme};

/// A golden fingerprint vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    pub name: &'static str,
    pub scheme: FingerprintScheme,
    pub id: &'static str,
    /// Sender for identity-indexed vectors; ignored otherwise.
    pub sender: &'static str,
    /// Sequence for sequence-indexed vectors; ignored otherwise.
    pub sequence: u64,
    pub payload: &'static str,
    pub expected: &'static str,
}

impl GoldenVector {
    pub fn compute(&self) -> String {
        match self.scheme {
            FingerprintScheme::IdentityIndexed => {
                identity_fingerprint(self.id, self.sender, self.payload)
            }
            FingerprintScheme::SequenceIndexed => {
                sequence_fingerprint(self.id, self.sequence, self.payload)
            }
        }
    }
}

/// Get all golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    use FingerprintScheme::*;
    vec![
        GoldenVector {
            name: "identity, multi-word",
            scheme: IdentityIndexed,
            id: "0012345678",
            sender: "Funiwe",
            sequence: 0,
            payload: "Hi Mike, can you join us for dinner tonight",
            expected: "00:F:HITONIGHT",
        },
        GoldenVector {
            name: "identity, single word",
            scheme: IdentityIndexed,
            id: "AB98765432",
            sender: "Funiwe",
            sequence: 0,
            payload: "Greetings",
            expected: "AB:F:GREETINGSGREETINGS",
        },
        GoldenVector {
            name: "identity, whitespace payload",
            scheme: IdentityIndexed,
            id: "AB1234",
            sender: "F",
            sequence: 0,
            payload: "   ",
            expected: "AB:F:",
        },
        GoldenVector {
            name: "identity, lowercase sender",
            scheme: IdentityIndexed,
            id: "id3",
            sender: "funiwe",
            sequence: 0,
            payload: "Yohoooo, I am at your gate.",
            expected: "ID:F:YOHOOOO,GATE.",
        },
        GoldenVector {
            name: "identity, short id",
            scheme: IdentityIndexed,
            id: "7",
            sender: "Funiwe",
            sequence: 0,
            payload: "hello",
            expected: "",
        },
        GoldenVector {
            name: "sequence, first send",
            scheme: SequenceIndexed,
            id: "0012345678",
            sender: "",
            sequence: 0,
            payload: "Hi thanks",
            expected: "00:0:HITHANKS",
        },
        GoldenVector {
            name: "sequence, padded payload",
            scheme: SequenceIndexed,
            id: "4512345678",
            sender: "",
            sequence: 17,
            payload: "\t Ok, I am leaving without you. \n",
            expected: "45:17:OK,YOU.",
        },
    ]
}

/// Compute every vector, returning `(name, matches, actual)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = v.compute();
            (v.name.to_string(), actual == v.expected, actual)
        })
        .collect()
}
