use serde::{Deserialize, Serialize};

/// Default field separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Default quote character.
pub const DEFAULT_QUOTE: char = '"';

/// Line terminator appended after each written row.
///
/// Reading is not affected: both LF and CRLF are accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
}

impl LineTerminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
            LineTerminator::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

/// Describes how fields are laid out on a line.
///
/// Missing keys fall back to their defaults when deserializing, so a document
/// such as `{"separator": ";"}` is a complete dialect.
///
/// # Examples
///
/// ```
/// use csv_handler::core::dialect::{Dialect, LineTerminator};
///
/// let dialect = Dialect::default();
/// assert_eq!(dialect.separator, ',');
/// assert_eq!(dialect.quote, '"');
/// assert_eq!(dialect.terminator, LineTerminator::Native);
///
/// let semicolon = Dialect::default().with_separator(';').with_quote('\'');
/// assert_eq!(semicolon.separator, ';');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    /// Character dividing fields within a line.
    pub separator: char,
    /// Character wrapped around fields that need protecting on write,
    /// and stripped from field ends on read.
    pub quote: char,
    /// Terminator written after each row.
    pub terminator: LineTerminator,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            quote: DEFAULT_QUOTE,
            terminator: LineTerminator::default(),
        }
    }
}

impl Dialect {
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Dialect, LineTerminator};

    #[test]
    fn terminators_should_render_their_bytes() {
        assert_eq!(LineTerminator::Lf.as_str(), "\n");
        assert_eq!(LineTerminator::CrLf.as_str(), "\r\n");
        if cfg!(windows) {
            assert_eq!(LineTerminator::Native.as_str(), "\r\n");
        } else {
            assert_eq!(LineTerminator::Native.as_str(), "\n");
        }
    }

    #[test]
    fn builder_methods_should_override_defaults() {
        let dialect = Dialect::default()
            .with_separator('\t')
            .with_quote('\'')
            .with_terminator(LineTerminator::CrLf);

        assert_eq!(
            dialect,
            Dialect {
                separator: '\t',
                quote: '\'',
                terminator: LineTerminator::CrLf,
            }
        );
    }
}
