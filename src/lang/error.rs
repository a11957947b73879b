use super::LineNumber;

pub struct Error {
    code: u16,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        self.line_number = Some(line);
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.into();
        self
    }
}

pub enum ErrorCode {
    SyntaxError = 2,
    Overflow = 6,
    UndefinedLine = 8,
    DivisionByZero = 11,
    MalformedLine = 20,
    InvalidIdentifier = 21,
    DuplicateDeclaration = 22,
    UndeclaredVariable = 23,
    UninitializedRead = 24,
    InputCountMismatch = 25,
    InputFormat = 26,
    MalformedExpression = 27,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            6 => "OVERFLOW",
            8 => "UNDEFINED LINE",
            11 => "DIVISION BY ZERO",
            20 => "MALFORMED LINE",
            21 => "INVALID IDENTIFIER",
            22 => "DUPLICATE DECLARATION",
            23 => "UNDECLARED VARIABLE",
            24 => "UNINITIALIZED READ",
            25 => "INPUT COUNT MISMATCH",
            26 => "BAD INPUT FORMAT",
            27 => "MALFORMED EXPRESSION",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if let Some(line_number) = self.line_number {
            write!(f, " IN {}", line_number)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}
