/// A raw input line split into a command name and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// First token, lower-cased
    pub name: String,
    /// Remaining tokens joined by single spaces, lower-cased
    pub args: String,
    /// Remaining tokens joined by single spaces, original case (used by `echo`)
    pub raw_args: String,
    /// The trimmed input line
    pub line: &'a str,
}

impl<'a> ParsedInput<'a> {
    /// Split `input` on whitespace runs. Returns `None` for blank input.
    pub fn parse(input: &'a str) -> Option<Self> {
        let line = input.trim();
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?.to_lowercase();
        let raw_args = tokens.collect::<Vec<_>>().join(" ");
        Some(Self {
            name,
            args: raw_args.to_lowercase(),
            raw_args,
            line,
        })
    }

    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_parses_to_none() {
        assert_eq!(ParsedInput::parse(""), None);
        assert_eq!(ParsedInput::parse("   \t  "), None);
    }

    #[test]
    fn test_name_and_args_are_lower_cased() {
        let parsed = ParsedInput::parse("  PROJECTS   Agentic   RAG ").unwrap();
        assert_eq!(parsed.name, "projects");
        assert_eq!(parsed.args, "agentic rag");
        assert_eq!(parsed.raw_args, "Agentic RAG");
        assert_eq!(parsed.line, "PROJECTS   Agentic   RAG");
    }

    #[test]
    fn test_no_args() {
        let parsed = ParsedInput::parse("help").unwrap();
        assert!(!parsed.has_args());
        assert_eq!(parsed.raw_args, "");
    }
}
