//! Prompt fingerprinting.
//!
//! Prompts are data that changes independently of the code; logging a
//! stable fingerprint per dispatch ties a logged failure back to the
//! exact prompt wording that produced it.

use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 hex fingerprint for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::hash_prompt;

    #[test]
    fn test_known_vector() {
        // SHA-256 of the empty string.
        assert_eq!(
            hash_prompt(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_distinct_prompts_distinct_fingerprints() {
        let first = hash_prompt("list three strengths");
        assert_eq!(first.len(), 64);
        assert_eq!(first, hash_prompt("list three strengths"));
        assert_ne!(first, hash_prompt("list three weaknesses"));
    }
}
