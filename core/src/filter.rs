// core/src/filter.rs

//! Coercion of raw query-string parameters into a [`FilterRequest`].
//!
//! The listing endpoint never rejects a request because of parameter shape.
//! Every value that cannot be understood falls back to its default:
//!  - numbers use the longest numeric prefix of the value (`"2abc"` is 2),
//!  - an integer too large to represent saturates instead of being dropped,
//!  - a value that coerces to zero counts as absent,
//!  - `page` below 1 is clamped to 1 and a non-positive `limit` uses the default.

use crate::query::PageWindow;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 12;
pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 10_000.0;

/// Requested ordering of a product listing, matched exactly against `sortBy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
  #[default]
  None,
  PriceAsc,
  PriceDesc,
  DateAsc,
  DateDesc,
}

impl SortBy {
  /// Unknown values are not an error; they mean natural order.
  pub fn from_param(value: &str) -> Self {
    match value {
      "priceAsc" => SortBy::PriceAsc,
      "priceDesc" => SortBy::PriceDesc,
      "dateAsc" => SortBy::DateAsc,
      "dateDesc" => SortBy::DateDesc,
      _ => SortBy::None,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterRequest {
  pub page: u64,
  pub limit: u64,
  pub search: String,
  pub sort_by: SortBy,
  /// Exact comma-split tokens. Empty means no category constraint.
  pub category: Vec<String>,
  /// Exact comma-split tokens. Empty means no brand constraint.
  pub brand: Vec<String>,
  pub min_price: f64,
  pub max_price: f64,
}

impl Default for FilterRequest {
  fn default() -> Self {
    Self {
      page: DEFAULT_PAGE,
      limit: DEFAULT_LIMIT,
      search: String::new(),
      sort_by: SortBy::None,
      category: Vec::new(),
      brand: Vec::new(),
      min_price: DEFAULT_MIN_PRICE,
      max_price: DEFAULT_MAX_PRICE,
    }
  }
}

impl FilterRequest {
  /// Builds a request from decoded query pairs. Unknown keys are ignored and
  /// the first occurrence of a repeated key wins.
  pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let mut raw = RawParams::default();
    for (key, value) in pairs {
      let slot = match key.as_ref() {
        "page" => &mut raw.page,
        "limit" => &mut raw.limit,
        "search" => &mut raw.search,
        "sortBy" => &mut raw.sort_by,
        "category" => &mut raw.category,
        "brand" => &mut raw.brand,
        "minPrice" => &mut raw.min_price,
        "maxPrice" => &mut raw.max_price,
        _ => continue,
      };
      if slot.is_none() {
        *slot = Some(value.as_ref().to_string());
      }
    }
    raw.coerce()
  }

  /// Number of matching products skipped before this page.
  pub fn skip(&self) -> u64 {
    self.page.saturating_sub(1).saturating_mul(self.limit)
  }

  pub fn window(&self) -> PageWindow {
    PageWindow {
      skip: self.skip(),
      limit: self.limit,
    }
  }
}

#[derive(Debug, Default)]
struct RawParams {
  page: Option<String>,
  limit: Option<String>,
  search: Option<String>,
  sort_by: Option<String>,
  category: Option<String>,
  brand: Option<String>,
  min_price: Option<String>,
  max_price: Option<String>,
}

impl RawParams {
  fn coerce(self) -> FilterRequest {
    let page = match self.page.as_deref().and_then(parse_leading_int) {
      Some(p) if p >= 1 => p as u64,
      _ => DEFAULT_PAGE,
    };
    let limit = match self.limit.as_deref().and_then(parse_leading_int) {
      Some(l) if l >= 1 => l as u64,
      _ => DEFAULT_LIMIT,
    };

    FilterRequest {
      page,
      limit,
      search: self.search.unwrap_or_default(),
      sort_by: self.sort_by.as_deref().map(SortBy::from_param).unwrap_or_default(),
      category: split_tokens(self.category.as_deref()),
      brand: split_tokens(self.brand.as_deref()),
      min_price: non_zero_float(self.min_price.as_deref()).unwrap_or(DEFAULT_MIN_PRICE),
      max_price: non_zero_float(self.max_price.as_deref()).unwrap_or(DEFAULT_MAX_PRICE),
    }
  }
}

// Tokens are kept verbatim: no trimming, no dedup.
fn split_tokens(value: Option<&str>) -> Vec<String> {
  match value {
    None | Some("") => Vec::new(),
    Some(csv) => csv.split(',').map(str::to_string).collect(),
  }
}

fn non_zero_float(value: Option<&str>) -> Option<f64> {
  value.and_then(parse_leading_float).filter(|v| *v != 0.0)
}

/// Longest `[+-]?digits` prefix after leading whitespace. Overlong digit runs
/// saturate at `i64::MAX` in magnitude.
fn parse_leading_int(value: &str) -> Option<i64> {
  let s = value.trim_start();
  let bytes = s.as_bytes();
  let mut end = 0;
  if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
    end = 1;
  }
  let digits_start = end;
  while end < bytes.len() && bytes[end].is_ascii_digit() {
    end += 1;
  }
  if end == digits_start {
    return None;
  }
  let magnitude = s[digits_start..end].parse::<i64>().unwrap_or(i64::MAX);
  Some(if bytes[0] == b'-' { -magnitude } else { magnitude })
}

/// Longest `[+-]?digits[.digits][e[+-]digits]` or `[+-]?Infinity` prefix after
/// leading whitespace.
fn parse_leading_float(value: &str) -> Option<f64> {
  let s = value.trim_start();
  let bytes = s.as_bytes();
  let mut end = 0;
  if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
    end = 1;
  }
  if s[end..].starts_with("Infinity") {
    return Some(if bytes[0] == b'-' { f64::NEG_INFINITY } else { f64::INFINITY });
  }

  let mut mantissa_digits = 0;
  while end < bytes.len() && bytes[end].is_ascii_digit() {
    end += 1;
    mantissa_digits += 1;
  }
  if end < bytes.len() && bytes[end] == b'.' {
    let mut frac_end = end + 1;
    while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
      frac_end += 1;
      mantissa_digits += 1;
    }
    if mantissa_digits > 0 {
      end = frac_end;
    }
  }
  if mantissa_digits == 0 {
    return None;
  }

  // Exponent only counts when at least one digit follows it.
  if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
    let mut exp_end = end + 1;
    if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
      exp_end += 1;
    }
    let exp_digits_start = exp_end;
    while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
      exp_end += 1;
    }
    if exp_end > exp_digits_start {
      end = exp_end;
    }
  }

  s[..end].parse::<f64>().ok()
}
