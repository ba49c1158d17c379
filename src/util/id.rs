//! Short random identifiers.

use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of ids returned by [`generate_id`].
pub const ID_LEN: usize = 9;

/// Nine random base-36 characters. Not collision-proof; fine for UI keys.
#[must_use]
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
#[path = "id_test.rs"]
mod tests;
