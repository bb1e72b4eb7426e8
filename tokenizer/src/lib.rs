//! Lexer, semantic normalizer and comparator for arbitrary software version strings.
//!
//! This is not a parser for a particular versioning scheme.
//! Any string is accepted and turned into a sequence of [`Token`]s that can be compared
//! against the tokens of any other string, following the conventions of the big package ecosystems:
//!
//! - An `N:` prefix is an epoch and outranks everything else (e.g. "1:1" > "2")
//! - `alpha`, `beta`, `rc` (and `a`/`b` in front of a number) mark pre-releases (e.g. "1.0alpha" < "1.0")
//! - Separators are mostly noise (e.g. "1.1" = "1u1" = "1_1")
//! - Trailing zeroes do not matter (e.g. "1.0.0" = "1")
//! - A trailing `^` is larger than anything with the same prefix (e.g. "6.0.99999" < "6.0.^" < "6.1")
//!
//! ## Examples
//!
//! ```rust
//! use software_version_tokenizer::{compare, tokenize};
//! use std::cmp::Ordering;
//!
//! let cmp = |l: &str, r: &str| compare(&tokenize(l), &tokenize(r));
//!
//! assert_eq!(cmp("1.0.0", "1"), Ordering::Equal);
//! assert_eq!(cmp("1:1", "2"), Ordering::Greater);
//! assert_eq!(cmp("1.0alpha", "1.0"), Ordering::Less);
//! assert_eq!(cmp("1.1-1-3", "1.1-2"), Ordering::Less);
//! assert_eq!(cmp("6.0.^", "6.0.99999"), Ordering::Greater);
//! ```
#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use std::{cmp::Ordering, iter::FusedIterator, str::CharIndices};

mod number;
pub use number::Number;

/// The kind of a literal or semantic token.
///
/// The declaration order is the comparison order between tokens of different kinds:
///
/// ```text
///   1alpha (PreVersion)
/// < 1~1    (Tilde)
/// < 1      (EndOfVersion)
/// < 1-1    (Dash)
/// < 1+1    (Plus)
/// < 1^1    (Caret)
/// < 1g     (Word)
/// < 1.1    (Number)
/// < 1:1    (Epoch)
/// < ^      (Max)
/// ```
///
/// [`Kind::Colon`], [`Kind::Dot`] and [`Kind::Underscore`] only exist as literal tokens,
/// the normalizer drops them since they do nothing but separate numbers.
/// [`Kind::PreVersion`], [`Kind::Epoch`] and [`Kind::Max`] only exist as semantic tokens.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// A pre-release marker, like `alpha` or the `b` in `1b2`
    PreVersion,
    /// `~`
    Tilde,
    /// The end of the version, always the last token
    EndOfVersion,
    /// `-`
    Dash,
    /// `+`
    Plus,
    /// `:`
    Colon,
    /// `^` that is followed by something
    Caret,
    /// Any run of characters that are neither digits nor separators
    Word,
    /// `_` or a space
    Underscore,
    /// `.` or `,`
    Dot,
    /// A run of ASCII digits
    Number,
    /// A number that was followed by `:`
    Epoch,
    /// A trailing `^`, larger than any number
    Max,
}

/// Maps a single character to the kind of token it belongs to.
///
/// Every character belongs to some kind, anything unknown is part of a [`Kind::Word`].
///
/// ## Examples
///
/// ```rust
/// # use software_version_tokenizer::{classify, Kind};
/// assert_eq!(classify('7'), Kind::Number);
/// assert_eq!(classify(','), Kind::Dot);
/// assert_eq!(classify(' '), Kind::Underscore);
/// assert_eq!(classify('ß'), Kind::Word);
/// ```
pub fn classify(c: char) -> Kind {
    match c {
        '0'..='9' => Kind::Number,
        '.' | ',' => Kind::Dot,
        '~' => Kind::Tilde,
        '+' => Kind::Plus,
        '-' => Kind::Dash,
        ':' => Kind::Colon,
        '^' => Kind::Caret,
        '_' | ' ' => Kind::Underscore,
        _ => Kind::Word,
    }
}

/// The value carried by a [`Token`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// No value, used by [`Kind::EndOfVersion`]
    None,
    /// The value of [`Kind::Number`] and [`Kind::Epoch`]
    Number(Number),
    /// The text of any other kind, lower-cased for words
    Text(Box<str>),
}

/// A semantic token, ready for comparison.
///
/// Tokens compare by their [`Kind`] first, and by their [`Value`] only if the kinds are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    /// The kind of this token.
    pub kind: Kind,
    /// The value of this token.
    pub value: Value,
}

impl Token {
    /// Constructs a [`Kind::Number`] token.
    pub fn number<N: Into<Number>>(number: N) -> Self {
        Self {
            kind: Kind::Number,
            value: Value::Number(number.into()),
        }
    }

    /// Constructs a [`Kind::Epoch`] token.
    pub fn epoch<N: Into<Number>>(epoch: N) -> Self {
        Self {
            kind: Kind::Epoch,
            value: Value::Number(epoch.into()),
        }
    }

    /// Constructs a token of any kind that carries text.
    pub fn text<S: Into<Box<str>>>(kind: Kind, text: S) -> Self {
        Self {
            kind,
            value: Value::Text(text.into()),
        }
    }

    /// Constructs the [`Kind::EndOfVersion`] token.
    pub const fn end_of_version() -> Self {
        Self {
            kind: Kind::EndOfVersion,
            value: Value::None,
        }
    }

    /// Returns the numeric value for [`Kind::Number`] and [`Kind::Epoch`] tokens.
    pub fn as_number(&self) -> Option<&Number> {
        match &self.value {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Returns the text value of any token that is neither numeric nor the end of the version.
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    fn is_zero(&self) -> bool {
        self.as_number().map_or(false, Number::is_zero)
    }
}

/// A literal token, borrowing its text from the input.
///
/// The text is the raw run of characters of the same kind, e.g. `"0012"` or `"Beta"`.
/// The [`Kind::EndOfVersion`] lexeme has an empty text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Lexeme<'input> {
    /// The kind of every character in this run.
    pub kind: Kind,
    /// The raw characters.
    pub text: &'input str,
}

impl<'input> Lexeme<'input> {
    const END_OF_VERSION: Lexeme<'static> = Lexeme {
        kind: Kind::EndOfVersion,
        text: "",
    };

    /// Returns the numeric value of a [`Kind::Number`] lexeme.
    pub fn number(&self) -> Option<Number> {
        match self.kind {
            Kind::Number => Some(Number::parse(self.text)),
            _ => None,
        }
    }
}

/// Cut a version string into literal tokens, without further interpretation.
///
/// `"1:2.3beta"` becomes `Number Colon Number Dot Number Word EndOfVersion`.
/// The last lexeme is always [`Kind::EndOfVersion`], even for empty input.
///
/// ## Examples
///
/// ```rust
/// # use software_version_tokenizer::{lex, Kind};
/// let kinds = lex("1:2.3beta").map(|l| l.kind).collect::<Vec<_>>();
/// assert_eq!(
///     kinds,
///     vec![Kind::Number, Kind::Colon, Kind::Number, Kind::Dot, Kind::Number, Kind::Word, Kind::EndOfVersion]
/// );
///
/// let kinds = lex("").map(|l| l.kind).collect::<Vec<_>>();
/// assert_eq!(kinds, vec![Kind::EndOfVersion]);
/// ```
pub fn lex(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

/// Iterator over the [`Lexeme`]s of an input, see [`lex`].
#[derive(Debug, Clone)]
pub struct Lexer<'input> {
    input: &'input str,
    chars: CharIndices<'input>,
    peeked: Option<(usize, char)>,
    finished: bool,
}

impl<'input> Lexer<'input> {
    fn new(input: &'input str) -> Lexer<'input> {
        let mut chars = input.char_indices();
        let peeked = chars.next();
        Lexer {
            input,
            chars,
            peeked,
            finished: false,
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Lexeme<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, c) = match self.peeked.take() {
            Some(peeked) => peeked,
            None if self.finished => return None,
            None => {
                self.finished = true;
                return Some(Lexeme::END_OF_VERSION);
            }
        };

        let kind = classify(c);
        let end = match self.chars.find(|&(_, c)| classify(c) != kind) {
            Some((j, c)) => {
                self.peeked = Some((j, c));
                j
            }
            None => self.input.len(),
        };

        Some(Lexeme {
            kind,
            text: &self.input[start..end],
        })
    }
}

impl FusedIterator for Lexer<'_> {}

/// Turn literal tokens into semantic tokens.
///
/// Every lexeme is looked at together with the lexeme right after it:
///
/// - A number followed by `:` becomes an epoch, so that "1:1" > "2"
/// - Dots, underscores and colons are dropped
/// - A `^` at the very end becomes [`Kind::Max`]
/// - `r`, `u`, `p` and `v` in front of a number are fancy dots and dropped
/// - `rev`, `revision`, `update` and `patch` are always dropped
/// - `a` and `b` in front of a number are pre-releases, "52.0a2" is "52.0alpha2" while "52b" comes before "52c"
/// - `alpha`, `beta` and `rc` are always pre-releases
///
/// Words are lower-cased, everything else is kept as is.
/// The result still contains meaningless zeroes, see [`trim_zeros`].
pub fn normalize<'input, I>(lexemes: I) -> Vec<Token>
where
    I: IntoIterator<Item = Lexeme<'input>>,
{
    let mut lexemes = lexemes.into_iter().peekable();
    let mut tokens = Vec::new();

    while let Some(current) = lexemes.next() {
        let ahead = lexemes.peek().map(|l| l.kind);
        match current.kind {
            Kind::Number => {
                let number = Number::parse(current.text);
                if ahead == Some(Kind::Colon) {
                    tokens.push(Token::epoch(number));
                } else {
                    tokens.push(Token::number(number));
                }
            }
            Kind::Dot | Kind::Underscore | Kind::Colon => {}
            Kind::Caret => {
                let kind = if ahead == Some(Kind::EndOfVersion) {
                    Kind::Max
                } else {
                    Kind::Caret
                };
                tokens.push(Token::text(kind, current.text));
            }
            Kind::Word => {
                let word = current.text.to_lowercase();
                if let Some(kind) = classify_word(&word, ahead) {
                    tokens.push(Token::text(kind, word));
                }
            }
            Kind::EndOfVersion => tokens.push(Token::end_of_version()),
            kind => tokens.push(Token::text(kind, current.text)),
        }
    }

    tokens
}

fn classify_word(word: &str, ahead: Option<Kind>) -> Option<Kind> {
    let before_number = ahead == Some(Kind::Number);
    match word {
        "r" | "u" | "p" | "v" if before_number => None,
        "rev" | "revision" | "update" | "patch" => None,
        "a" | "b" if before_number => Some(Kind::PreVersion),
        "alpha" | "beta" | "rc" => Some(Kind::PreVersion),
        _ => Some(Kind::Word),
    }
}

/// Drop zeroes that carry no meaning, so that "1.0.0" = "1".
///
/// Zeroes are only dropped if they are not followed by a non-zero number (or [`Kind::Max`]).
/// This happens after the normalization, so that "1.0.noarch" = "1.noarch",
/// but "1.0u1" ≠ "1u1" since the `u` is gone by then and the zero is followed by a number.
/// [`Kind::Max`] behaves like a number here, so "6.^" ≠ "6.0.^" and "6.0.^" < "6.1".
pub fn trim_zeros(tokens: Vec<Token>) -> Vec<Token> {
    let mut trimmed = Vec::with_capacity(tokens.len());
    let mut held = Vec::new();

    for token in tokens {
        if matches!(token.kind, Kind::Number | Kind::Max) {
            if token.is_zero() {
                held.push(token);
                continue;
            }
            trimmed.append(&mut held);
        }
        held.clear();
        trimmed.push(token);
    }

    trimmed
}

/// Turn any string into the semantic tokens used for comparison.
///
/// ## Examples
///
/// ```rust
/// # use software_version_tokenizer::{tokenize, Token, Kind};
/// assert_eq!(
///     tokenize("1:2.0.0-beta"),
///     vec![
///         Token::epoch(1),
///         Token::number(2),
///         Token::text(Kind::Dash, "-"),
///         Token::text(Kind::PreVersion, "beta"),
///         Token::end_of_version(),
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    let tokens = trim_zeros(normalize(lex(input)));
    log::trace!("tokenized {:?} into {} tokens", input, tokens.len());
    tokens
}

/// Compare two token sequences.
///
/// Tokens are compared pairwise and the first pair that differs decides.
/// Only as many pairs as the shorter sequence has are compared, so a sequence is
/// equal to any longer sequence that it is a prefix of.
/// Sequences from [`tokenize`] always end with [`Kind::EndOfVersion`] and
/// that token never appears anywhere else, so two tokenized versions are only equal
/// if they have the same tokens.
pub fn compare(left: &[Token], right: &[Token]) -> Ordering {
    left.iter()
        .zip(right)
        .map(|(l, r)| l.cmp(r))
        .find(|&ordering| ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Returns the first run of consecutive numbers, ignoring any epoch.
///
/// The result has at least three entries, missing ones are filled with zeroes.
/// Numbers that do not fit into an [`u64`] saturate at [`u64::MAX`].
///
/// ## Examples
///
/// ```rust
/// # use software_version_tokenizer::{leading_numbers, tokenize};
/// assert_eq!(leading_numbers(&tokenize("1:2.3")), vec![2, 3, 0]);
/// assert_eq!(leading_numbers(&tokenize("19.1R2-S8")), vec![19, 1, 2]);
/// assert_eq!(leading_numbers(&tokenize("KB.16.10.0012")), vec![16, 10, 12]);
/// assert_eq!(leading_numbers(&tokenize("1.2.3.4")), vec![1, 2, 3, 4]);
/// ```
pub fn leading_numbers(tokens: &[Token]) -> Vec<u64> {
    let mut numbers = tokens
        .iter()
        .skip_while(|t| t.kind != Kind::Number)
        .map_while(|t| match t.kind {
            Kind::Number => t.as_number().map(Number::saturating_u64),
            _ => None,
        })
        .collect::<Vec<_>>();
    if numbers.len() < 3 {
        numbers.resize(3, 0);
    }
    numbers
}
