//! Line tokenizer
//!
//! Every character that is not an ASCII letter, digit or underscore is a
//! separator. A line is split into the maximal runs of non-separator
//! characters, left to right. There is no language-aware lexing: `foo.bar`
//! and `foo->bar` both yield `foo`, `bar`.
//!
//! Extraction is stateless: [`next_token`] hands back the token together with
//! the unconsumed remainder of the line, and [`Tokens`] simply drives it in a
//! loop.

/// Whether `c` separates tokens
#[inline]
pub fn is_separator(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_')
}

/// Extract the next token from `line`.
///
/// Returns `(token, rest)` where `rest` starts right after the token, or
/// `None` when only separators remain. A token that runs up to the end of the
/// line is returned like any other.
pub fn next_token(line: &str) -> Option<(&str, &str)> {
    let start = line.find(|c: char| !is_separator(c))?;
    let tail = &line[start..];
    let len = tail.find(is_separator).unwrap_or(tail.len());
    Some((&tail[..len], &tail[len..]))
}

/// Iterator over the tokens of one line
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (token, rest) = next_token(self.rest)?;
        self.rest = rest;
        Some(token)
    }
}

/// Tokenize a line. Each call starts from the beginning of `line`.
pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens { rest: line }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(line: &str) -> Vec<&str> {
        tokens(line).collect()
    }

    #[test]
    fn test_punctuation_separates() {
        assert_eq!(
            collect("fn main() { let x_1 = foo.bar(2); }"),
            vec!["fn", "main", "let", "x_1", "foo", "bar", "2"]
        );
    }

    #[test]
    fn test_empty_and_separator_only_lines() {
        assert!(collect("").is_empty());
        assert!(collect("   \t ").is_empty());
        assert!(collect("(){}[];,.-+*/").is_empty());
    }

    #[test]
    fn test_token_touching_end_of_line() {
        assert_eq!(collect("alpha beta"), vec!["alpha", "beta"]);
        assert_eq!(collect("x = y"), vec!["x", "y"]);
        assert_eq!(collect("z"), vec!["z"]);
        assert_eq!(collect("  q"), vec!["q"]);
    }

    #[test]
    fn test_carriage_return_is_separator() {
        assert_eq!(collect("hello world\r"), vec!["hello", "world"]);
    }

    #[test]
    fn test_non_ascii_is_separator() {
        assert_eq!(collect("caf\u{e9} na\u{ef}ve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_next_token_returns_remainder() {
        let (token, rest) = next_token("  one, two").unwrap();
        assert_eq!(token, "one");
        assert_eq!(rest, ", two");

        let (token, rest) = next_token(rest).unwrap();
        assert_eq!(token, "two");
        assert_eq!(rest, "");

        assert!(next_token(rest).is_none());
    }

    #[test]
    fn test_restartable_per_call() {
        let line = "a1 b2 c3";
        assert_eq!(collect(line), collect(line));
    }

    #[test]
    fn test_rejoin_is_idempotent() {
        let lines = [
            "int main(int argc, char **argv) {",
            "  self.value_x += other->Value2; // done",
            "__init__ 0x1F 'quoted' \"strings\"",
            "trailing_token",
        ];
        for line in lines {
            let first = collect(line);
            let rejoined = first.join(" ");
            assert_eq!(collect(&rejoined), first, "line: {line}");
        }
    }
}
