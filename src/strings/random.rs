use rand::Rng;

use super::Strings;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

impl Strings {
    /// Generate a random hexadecimal string of the given length.
    ///
    /// Not suitable for secrets; the thread-local RNG is used.
    pub fn random_hex(length: usize, uppercase: bool) -> String {
        let mut rng = rand::thread_rng();
        Self::random_hex_with(&mut rng, length, uppercase)
    }

    /// Generate a random hexadecimal string using the supplied generator
    pub fn random_hex_with<R: Rng + ?Sized>(rng: &mut R, length: usize, uppercase: bool) -> String {
        let hex: String = (0..length)
            .map(|_| HEX_DIGITS[rng.gen_range(0..HEX_DIGITS.len())] as char)
            .collect();

        if uppercase {
            hex.to_ascii_uppercase()
        } else {
            hex
        }
    }
}
