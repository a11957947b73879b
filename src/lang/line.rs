use super::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// One numbered statement of a source program. The body is kept verbatim;
/// listing a program reproduces what was loaded.
#[derive(Debug, PartialEq)]
pub struct Statement {
    number: LineNumber,
    body: String,
}

impl Statement {
    /// Parses one raw source line of the form `<line-number> <body>`.
    pub fn from_str(s: &str) -> Result<Statement> {
        let s = s.trim_end();
        let (number, body) = split_first_word(s);
        let number = match number.parse::<LineNumber>() {
            Ok(number) if number > 0 => number,
            _ => return Err(error!(MalformedLine; format!("EXPECTED LINE NUMBER: {}", s))),
        };
        Ok(Statement {
            number,
            body: body.to_string(),
        })
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.body)
    }
}

/// Splits off the leading whitespace-delimited word, returning it and the
/// remainder with separating whitespace stripped.
pub fn split_first_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}
