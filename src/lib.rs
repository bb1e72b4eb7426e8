//! Compare arbitrary software version strings.
//!
//! ## Motivation
//!
//! Package repositories are full of version strings that follow no particular specification,
//! like `1:2.3.4-beta~rc2`, `19.1R2-S8`, `el6_7` or `KB.16.10.0012`.
//! This crate does not try to parse them into a structured format.
//! Instead, every string is cut into tokens, the tokens are normalized,
//! and two versions are ordered by comparing their tokens.
//! The order follows the conventions of the big package ecosystems:
//!
//! - An epoch (`N:`) outranks everything else (e.g. "1:1" > "2")
//! - Pre-release markers sort before the release (e.g. "1.0alpha" < "1.0", "1.0b2" < "1.0")
//! - Separators are mostly noise (e.g. "1.1" = "1u1" = "1_1")
//! - Trailing zeroes do not matter (e.g. "1.0.0" = "1")
//! - A trailing `^` is larger than anything with the same prefix (e.g. "6.0.99999" < "6.0.^" < "6.1")
//!
//! Any input is a valid version, the empty string included, which sorts before everything else.
//!
//! ## Examples
//!
//! ```rust
//! use software_version::Version;
//!
//! assert!(Version::new("1.0.0") == Version::new("1"));
//! assert!(Version::new("1:1") > Version::new("2"));
//! assert!(Version::new("1.0alpha") < Version::new("1.0"));
//! assert!(Version::new("1.1-1-3") < Version::new("1.1-2"));
//!
//! // raw strings are fine as well
//! assert!(Version::new("6.0.^") > "6.0.99999");
//! assert!(Version::new("6.0.^") < "6.1");
//!
//! let mut versions = ["1.0.0", "1.5.5", "1.4.8", "1.10.5", "1.10"]
//!     .iter()
//!     .map(|v| Version::new(*v))
//!     .collect::<Vec<_>>();
//! versions.sort();
//! assert_eq!(versions, ["1.0.0", "1.4.8", "1.5.5", "1.10", "1.10.5"]);
//! ```
//!
//! The rendered version is always the original input:
//!
//! ```rust
//! # use software_version::Version;
//! let version = Version::new("1:2.3.0-Beta");
//! assert_eq!(version.to_string(), "1:2.3.0-Beta");
//! assert_eq!(version.epoch(), 1);
//! assert_eq!(version.major(), 2);
//! assert_eq!(version.minor(), 3);
//! assert_eq!(version.patch(), 0);
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

use once_cell::sync::OnceCell;
use software_version_tokenizer::{leading_numbers, tokenize};
use std::{
    cmp::Ordering,
    convert::Infallible,
    fmt::{self, Display},
    hash,
    ops::Deref,
    str::FromStr,
};

pub use software_version_tokenizer::{Kind, Number, Token, Value};

/// A version of some software, as found in a package repository.
///
/// The version keeps the raw input and compares by the tokens derived from it.
/// The tokens, as well as the numbers behind [`Version::major`], [`Version::minor`]
/// and [`Version::patch`], are computed on first use and cached for the lifetime of the value.
/// A `Version` can be shared between threads, concurrent first uses compute the same value.
#[derive(Clone, Default)]
pub struct Version {
    raw: String,
    tokens: OnceCell<Vec<Token>>,
    numbers: OnceCell<Vec<u64>>,
}

impl Version {
    /// Constructs a new version from its raw text.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use software_version::Version;
    /// let version = Version::new("1.2.3");
    /// assert_eq!(version.as_str(), "1.2.3");
    /// ```
    pub fn new<S: Into<String>>(raw: S) -> Self {
        Self {
            raw: raw.into(),
            tokens: OnceCell::new(),
            numbers: OnceCell::new(),
        }
    }

    /// Constructs the empty version, which sorts before any other version.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use software_version::Version;
    /// let version = Version::empty();
    /// assert_eq!(version.to_string(), "");
    /// assert!(version < Version::new("0.0.1"));
    /// assert_eq!(version, Version::from(None::<&str>));
    /// ```
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the original input.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the original input, consuming this version.
    pub fn into_string(self) -> String {
        self.raw
    }

    /// Returns the semantic tokens this version compares by.
    ///
    /// The last token is always [`Kind::EndOfVersion`].
    ///
    /// ## Examples
    ///
    /// ```
    /// # use software_version::{Kind, Token, Version};
    /// let version = Version::new("1:2.0.0");
    /// assert_eq!(
    ///     version.tokens(),
    ///     &[Token::epoch(1), Token::number(2), Token::end_of_version()]
    /// );
    /// ```
    pub fn tokens(&self) -> &[Token] {
        self.tokens.get_or_init(|| {
            log::trace!("caching tokens of version {:?}", self.raw);
            tokenize(&self.raw)
        })
    }

    /// Returns the epoch, or 0 if there is none.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use software_version::Version;
    /// assert_eq!(Version::new("1:1.0").epoch(), 1);
    /// assert_eq!(Version::new("1.0").epoch(), 0);
    /// assert_eq!(Version::new("").epoch(), 0);
    /// ```
    pub fn epoch(&self) -> u64 {
        match self.tokens().first() {
            Some(token) if token.kind == Kind::Epoch => {
                token.as_number().map_or(0, Number::saturating_u64)
            }
            _ => 0,
        }
    }

    /// Returns the first run of consecutive numbers, padded with zeroes to at least three entries.
    ///
    /// The epoch is not part of the run, and numbers that do not fit into an [`u64`]
    /// are reported as [`u64::MAX`].
    ///
    /// ## Examples
    ///
    /// ```
    /// # use software_version::Version;
    /// assert_eq!(Version::new("1:2.3").numbers(), &[2, 3, 0]);
    /// assert_eq!(Version::new("KB.16.10.0012").numbers(), &[16, 10, 12]);
    /// assert_eq!(Version::new("1.2.3.4-5").numbers(), &[1, 2, 3, 4]);
    /// ```
    pub fn numbers(&self) -> &[u64] {
        self.numbers.get_or_init(|| leading_numbers(self.tokens()))
    }

    /// Returns the first number of [`Version::numbers`].
    pub fn major(&self) -> u64 {
        self.numbers()[0]
    }

    /// Returns the second number of [`Version::numbers`].
    pub fn minor(&self) -> u64 {
        self.numbers()[1]
    }

    /// Returns the third number of [`Version::numbers`].
    ///
    /// ## Examples
    ///
    /// ```
    /// # use software_version::Version;
    /// assert_eq!(Version::new("11.22.33").patch(), 33);
    /// assert_eq!(Version::new("0.0.1.0").patch(), 1);
    /// assert_eq!(Version::new("19.1R2-S8").patch(), 2);
    /// assert_eq!(Version::new("11").patch(), 0);
    /// ```
    pub fn patch(&self) -> u64 {
        self.numbers()[2]
    }

    /// Returns true if this version contains a pre-release marker.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use software_version::Version;
    /// assert!(Version::new("1.0beta").is_pre_release());
    /// assert!(Version::new("52.0a2").is_pre_release());
    /// assert!(!Version::new("52a").is_pre_release());
    /// assert!(!Version::new("1.0").is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        self.tokens().iter().any(|t| t.kind == Kind::PreVersion)
    }

    fn cmp_raw(&self, other: &str) -> Ordering {
        software_version_tokenizer::compare(self.tokens(), &tokenize(other))
    }
}

/// Converts anything that can be a version into a [`Version`].
///
/// A [`Version`] is returned as is.
///
/// ## Examples
///
/// ```
/// # use software_version::{as_version, Version};
/// assert_eq!(as_version("1.0"), Version::new("1.0"));
/// assert_eq!(as_version(Version::new("1.0")), Version::new("1.0"));
/// assert_eq!(as_version(42), Version::new("42"));
/// assert_eq!(as_version(None::<String>).as_str(), "");
/// ```
pub fn as_version<V: Into<Version>>(version: V) -> Version {
    version.into()
}

/// Compares two raw version strings, without constructing and caching a [`Version`].
///
/// ## Examples
///
/// ```
/// # use std::cmp::Ordering;
/// assert_eq!(software_version::compare("1.0.0", "1"), Ordering::Equal);
/// assert_eq!(software_version::compare("1.10", "1.9"), Ordering::Greater);
/// assert_eq!(software_version::compare("", "0.1"), Ordering::Less);
/// ```
pub fn compare(left: &str, right: &str) -> Ordering {
    software_version_tokenizer::compare(&tokenize(left), &tokenize(right))
}

impl fmt::Debug for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Version").field(&self.raw).finish()
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.raw)
    }
}

impl Deref for Version {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Version {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Version {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&String> for Version {
    fn from(raw: &String) -> Self {
        Self::new(raw.as_str())
    }
}

impl From<&Version> for Version {
    fn from(version: &Version) -> Self {
        version.clone()
    }
}

impl<S: Into<String>> From<Option<S>> for Version {
    fn from(raw: Option<S>) -> Self {
        raw.map_or_else(Self::empty, Self::new)
    }
}

macro_rules! from_integer {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<$ty> for Version {
            fn from(raw: $ty) -> Self {
                Self::new(raw.to_string())
            }
        }
    )+};
}

from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl PartialEq for Version {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        software_version_tokenizer::compare(self.tokens(), other.tokens())
    }
}

impl hash::Hash for Version {
    fn hash<H: hash::Hasher>(&self, into: &mut H) {
        self.tokens().hash(into);
    }
}

macro_rules! cmp_with_raw {
    ($($ty:ty),+ $(,)?) => {$(
        impl PartialEq<$ty> for Version {
            fn eq(&self, other: &$ty) -> bool {
                self.cmp_raw(other) == Ordering::Equal
            }
        }

        impl PartialEq<Version> for $ty {
            fn eq(&self, other: &Version) -> bool {
                other.cmp_raw(self) == Ordering::Equal
            }
        }

        impl PartialOrd<$ty> for Version {
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                Some(self.cmp_raw(other))
            }
        }

        impl PartialOrd<Version> for $ty {
            fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
                Some(other.cmp_raw(self).reverse())
            }
        }
    )+};
}

cmp_with_raw!(str, &str, String);

#[cfg(feature = "serde")]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{Serialize, Serializer};

#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a version string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Version::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Version::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Version::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Version::from(v))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Version::new(v.to_string()))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Version::empty())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Version::empty())
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(VersionVisitor)
    }
}

#[cfg(feature = "semver")]
impl Version {
    /// Returns a [`semver::Version`] made of [`Version::major`], [`Version::minor`] and [`Version::patch`].
    ///
    /// Everything else, including epoch and pre-release markers, is dropped.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use software_version::Version;
    /// let version = Version::new("2:19.1R2-S8");
    /// assert_eq!(version.to_semver(), semver::Version::new(19, 1, 2));
    /// ```
    pub fn to_semver(&self) -> semver::Version {
        semver::Version::new(self.major(), self.minor(), self.patch())
    }
}

#[cfg(feature = "semver")]
impl From<&semver::Version> for Version {
    fn from(v: &semver::Version) -> Self {
        Self::new(v.to_string())
    }
}

#[cfg(feature = "semver")]
impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Self::from(&v)
    }
}

#[cfg(test)]
mod tests;
