// Identifier grammar shared by declarations and the expression tokenizer.

pub fn is_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

pub fn is_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

pub fn is_valid(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if is_start(c) => chars.all(is_part),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid("x"));
        assert!(is_valid("_tmp"));
        assert!(is_valid("$cost"));
        assert!(is_valid("x2"));
        assert!(is_valid("loop_count"));
    }

    #[test]
    fn test_invalid_names() {
        assert!(!is_valid(""));
        assert!(!is_valid("2x"));
        assert!(!is_valid("a-b"));
        assert!(!is_valid("a b"));
    }
}
