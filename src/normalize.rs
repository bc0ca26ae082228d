use unidecode::unidecode;

/// Canonicalize an answer for comparison: strip accents down to ASCII base
/// letters, lowercase, drop anything that is not a letter, space, or hyphen,
/// collapse whitespace runs and trim the ends.
///
/// Total and idempotent, so "Café  con  LECHE!" and "cafe con leche" compare
/// equal without either being an error.
pub fn normalize(input: &str) -> String {
    let ascii = unidecode(input).to_lowercase();
    let mut out = String::with_capacity(ascii.len());
    let mut pending_space = false;

    for c in ascii.chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_ascii_lowercase() || c == '-' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
        // Digits, punctuation and anything else are dropped.
    }

    out
}
