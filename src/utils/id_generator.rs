//! Short identifier generation.

/// Number of random bytes backing a generated identifier.
///
/// Two bytes hex-encode to a 4-character id, giving a 16^4 = 65536-value
/// space. Uniqueness is not guaranteed here; callers check availability
/// against the store and redraw on collision.
const ID_LENGTH_BYTES: usize = 2;

/// Generates a random 4-character lowercase-hex identifier.
///
/// Uses OS entropy via `getrandom`, uniformly distributed over the id space.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```
/// let id = urlmap::utils::id_generator::generate_id();
/// assert_eq!(id.len(), 4);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
/// ```
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}
