//! Snake case normalization for file and folder names.
//!
//! A name is compliant when it is already all lowercase and has no hyphens.
//! Anything else gets a recommendation built by [`to_snake_case`].

/// Convert a name to its canonical `snake_case` form.
///
/// Hyphens become underscores, an underscore is inserted wherever an ASCII
/// lowercase letter or digit is immediately followed by an ASCII uppercase
/// letter, and the result is lowercased. Boundaries are matched left to right
/// without overlap, so a run of capitals stays together:
///
/// ```
/// use python_filename_linter::detectors::names::to_snake_case;
///
/// assert_eq!(to_snake_case("helloDear"), "hello_dear");
/// assert_eq!(to_snake_case("__ThisIsATest__"), "__this_is_atest__");
/// assert_eq!(to_snake_case("kebab-case-name"), "kebab_case_name");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.replace('-', "_").chars().collect();
    let mut split = String::with_capacity(chars.len() + chars.len() / 2);

    let mut i = 0;
    while i < chars.len() {
        let current = chars[i];
        match chars.get(i + 1) {
            Some(&next) if is_lower_or_digit(current) && next.is_ascii_uppercase() => {
                split.push(current);
                split.push('_');
                split.push(next);
                // The pair is consumed; the scan resumes after `next`.
                i += 2;
            }
            _ => {
                split.push(current);
                i += 1;
            }
        }
    }

    split.to_lowercase()
}

/// Whether `name` already follows the convention.
pub fn is_snake_case(name: &str) -> bool {
    !name.contains('-') && name == name.to_lowercase()
}

fn is_lower_or_digit(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
