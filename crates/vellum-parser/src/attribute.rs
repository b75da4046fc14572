//! Attribute maps and string-to-value coercion.
//!
//! Every coercer takes the raw attribute value (`None` when the attribute is
//! absent) and returns `Some(value)` only if the text matches the literal
//! grammar of the target type. Each coercer has an `_or` companion that
//! substitutes a default instead of returning `None`.
//!
//! # Lists
//!
//! List values are split on runs of commas and whitespace, so `"1 2 3"`,
//! `"1,2,3"` and `" 1 ,, 2\t3 "` all produce the same three tokens. Each
//! token is parsed on its own and a token that does not parse becomes the
//! zero value of the element type: `"1, x, 3"` yields `[1, 0, 3]`. Callers
//! that need strict lists can tokenize with [`tokenize`] and parse the tokens
//! themselves.
//!
//! # Rectangles
//!
//! A rectangle needs exactly four tokens, each a valid number, read as
//! `x y width height`. Anything else yields `None`, never a partially filled
//! rectangle.

use indexmap::IndexMap;
use winnow::{
    ModalResult, Parser as _,
    combinator::{delimited, opt, separated},
    token::{take_till, take_while},
};

use vellum_core::geometry::Rect;

/// The attributes of one start tag, in document order.
///
/// Keys are unique; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, String>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, returning the previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the raw value of an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if the attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over `(key, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// =============================================================================
// Tokenizer
// =============================================================================

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// One or more commas or whitespace characters
fn separator(input: &mut &str) -> ModalResult<()> {
    take_while(1.., is_separator).void().parse_next(input)
}

/// A single list item: everything up to the next separator
fn item<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_till(1.., is_separator).parse_next(input)
}

/// Items separated by runs of separators, ignoring leading and trailing ones
fn items<'s>(input: &mut &'s str) -> ModalResult<Vec<&'s str>> {
    delimited(opt(separator), separated(0.., item, separator), opt(separator))
        .parse_next(input)
}

/// Split a list value into its tokens.
///
/// ```
/// # use vellum_parser::attribute::tokenize;
/// assert_eq!(tokenize(" 0, 0  100,50 "), vec!["0", "0", "100", "50"]);
/// assert!(tokenize(" ,, ").is_empty());
/// ```
pub fn tokenize(raw: &str) -> Vec<&str> {
    items.parse(raw).unwrap_or_default()
}

// =============================================================================
// Scalars
// =============================================================================

/// A scalar that can be read from a single token.
trait Scalar: Sized + Default {
    fn from_token(token: &str) -> Option<Self>;
}

impl Scalar for i64 {
    fn from_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl Scalar for f32 {
    fn from_token(token: &str) -> Option<Self> {
        token.parse::<f32>().ok().filter(|value| value.is_finite())
    }
}

impl Scalar for f64 {
    fn from_token(token: &str) -> Option<Self> {
        token.parse::<f64>().ok().filter(|value| value.is_finite())
    }
}

impl Scalar for String {
    fn from_token(token: &str) -> Option<Self> {
        Some(token.to_string())
    }
}

fn scalar<T: Scalar>(raw: Option<&str>) -> Option<T> {
    T::from_token(raw?.trim())
}

fn list<T: Scalar>(raw: Option<&str>) -> Option<Vec<T>> {
    let values = tokenize(raw?)
        .into_iter()
        .map(|token| T::from_token(token).unwrap_or_default())
        .collect();
    Some(values)
}

/// Coerce to a signed integer.
pub fn integer(raw: Option<&str>) -> Option<i64> {
    scalar(raw)
}

/// Coerce to a signed integer, falling back to `default`.
pub fn integer_or(raw: Option<&str>, default: i64) -> i64 {
    integer(raw).unwrap_or(default)
}

/// Coerce to a finite single-precision float.
pub fn float(raw: Option<&str>) -> Option<f32> {
    scalar(raw)
}

/// Coerce to a finite single-precision float, falling back to `default`.
pub fn float_or(raw: Option<&str>, default: f32) -> f32 {
    float(raw).unwrap_or(default)
}

/// Coerce to a finite double-precision float.
///
/// ```
/// # use vellum_parser::attribute::double;
/// assert_eq!(double(Some(" 2.5 ")), Some(2.5));
/// assert_eq!(double(Some("2.5px")), None);
/// assert_eq!(double(Some("inf")), None);
/// assert_eq!(double(None), None);
/// ```
pub fn double(raw: Option<&str>) -> Option<f64> {
    scalar(raw)
}

/// Coerce to a finite double-precision float, falling back to `default`.
pub fn double_or(raw: Option<&str>, default: f64) -> f64 {
    double(raw).unwrap_or(default)
}

// =============================================================================
// Lists
// =============================================================================

/// Split into a list of strings.
pub fn string_list(raw: Option<&str>) -> Option<Vec<String>> {
    list(raw)
}

/// Split into a list of strings, falling back to `default`.
pub fn string_list_or(raw: Option<&str>, default: Vec<String>) -> Vec<String> {
    string_list(raw).unwrap_or(default)
}

/// Split into a list of integers; malformed items become `0`.
pub fn integer_list(raw: Option<&str>) -> Option<Vec<i64>> {
    list(raw)
}

/// Split into a list of integers, falling back to `default`.
pub fn integer_list_or(raw: Option<&str>, default: Vec<i64>) -> Vec<i64> {
    integer_list(raw).unwrap_or(default)
}

/// Split into a list of single-precision floats; malformed items become `0.0`.
pub fn float_list(raw: Option<&str>) -> Option<Vec<f32>> {
    list(raw)
}

/// Split into a list of single-precision floats, falling back to `default`.
pub fn float_list_or(raw: Option<&str>, default: Vec<f32>) -> Vec<f32> {
    float_list(raw).unwrap_or(default)
}

/// Split into a list of double-precision floats; malformed items become `0.0`.
///
/// ```
/// # use vellum_parser::attribute::double_list;
/// assert_eq!(double_list(Some("1, x, 3")), Some(vec![1.0, 0.0, 3.0]));
/// ```
pub fn double_list(raw: Option<&str>) -> Option<Vec<f64>> {
    list(raw)
}

/// Split into a list of double-precision floats, falling back to `default`.
pub fn double_list_or(raw: Option<&str>, default: Vec<f64>) -> Vec<f64> {
    double_list(raw).unwrap_or(default)
}

// =============================================================================
// Rectangles
// =============================================================================

/// Coerce to a rectangle written as `x y width height`.
///
/// ```
/// # use vellum_parser::attribute::rect;
/// # use vellum_core::geometry::Rect;
/// let expected = Rect::new(0.0, 0.0, 100.0, 50.0);
/// assert_eq!(rect(Some("0 0 100 50")), Some(expected));
/// assert_eq!(rect(Some("0,0,100,50")), Some(expected));
/// assert_eq!(rect(Some("0 0 100")), None);
/// ```
pub fn rect(raw: Option<&str>) -> Option<Rect> {
    let tokens = tokenize(raw?);
    let [x, y, width, height] = tokens.as_slice() else {
        return None;
    };

    Some(Rect::new(
        f64::from_token(x)?,
        f64::from_token(y)?,
        f64::from_token(width)?,
        f64::from_token(height)?,
    ))
}

/// Coerce to a rectangle, falling back to `default`.
pub fn rect_or(raw: Option<&str>, default: Rect) -> Rect {
    rect(raw).unwrap_or(default)
}
