//! Environment variable validation with helpful error messages
//!
//! Invalid values produce a warning with a Levenshtein-based suggestion and
//! fall back to the value already configured.

use std::io::Write;

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    /// `valid_values` is only used for the warning text; it may be a sample
    /// of accepted values when the parser accepts more.
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, returning `fallback` if invalid (warning on stderr)
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    /// Parse with a custom writer (for testing)
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        fallback: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                let _ = writeln!(
                    writer,
                    "Warning: Invalid {} value '{}'{}",
                    self.var_name,
                    value,
                    self.suggest(value)
                );
                let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
                fallback
            }
        }
    }

    fn suggest(&self, value: &str) -> String {
        let input = value.to_lowercase();
        let best = self
            .valid_values
            .iter()
            .map(|valid| (*valid, levenshtein(&input, valid)))
            .min_by_key(|(_, dist)| *dist);

        match best {
            Some((suggested, dist)) if dist <= 2 && dist > 0 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Levenshtein distance over bytes, used for typo suggestions.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_counts_edits() {
        assert_eq!(levenshtein("debug", "debug"), 0);
        assert_eq!(levenshtein("debgu", "debug"), 2);
        assert_eq!(levenshtein("inf", "info"), 1);
        assert_eq!(levenshtein("", "warn"), 4);
    }

    #[test]
    fn valid_value_is_parsed() {
        let validator = EnvVarValidator::new("EDITOR_HOST_LOG", &["info", "debug"]);
        let mut output = Vec::new();
        let level = validator.parse_with_writer(
            "debug",
            |s| Some(s.to_string()),
            "warn".to_string(),
            &mut output,
        );
        assert_eq!(level, "debug");
        assert!(output.is_empty());
    }

    #[test]
    fn invalid_value_warns_with_suggestion_and_falls_back() {
        let validator = EnvVarValidator::new("EDITOR_HOST_LOG", &["error", "warn", "info"]);
        let mut output = Vec::new();
        let level = validator.parse_with_writer("inof", |_| None::<&str>, "warn", &mut output);

        let msg = String::from_utf8(output).unwrap();
        assert_eq!(level, "warn");
        assert!(msg.contains("Warning: Invalid EDITOR_HOST_LOG value 'inof'"), "{}", msg);
        assert!(msg.contains("Did you mean 'info'?"), "{}", msg);
        assert!(msg.contains("Valid values: error, warn, info"), "{}", msg);
    }

    #[test]
    fn distant_value_gets_no_suggestion() {
        let validator = EnvVarValidator::new("EDITOR_HOST_VERSION", &["14.0.0.0"]);
        let mut output = Vec::new();
        validator.parse_with_writer("latest", |_| None::<()>, (), &mut output);

        let msg = String::from_utf8(output).unwrap();
        assert!(!msg.contains("Did you mean"), "{}", msg);
    }
}
