//! Custom serde helpers for the service's wire formats.
//!
//! The service is not consistent about numeric encoding: prices and volumes
//! arrive as decimal strings on some endpoints and as bare JSON numbers on
//! others. These helpers accept both and always produce exact values.

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Parse a decimal from its textual form, accepting scientific notation.
pub fn parse_decimal(s: &str) -> Result<Decimal, rust_decimal::Error> {
    let s = s.trim();
    Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s))
}

struct DecimalVisitor;

impl<'de> Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
        parse_decimal(v).map_err(|e| E::custom(format!("invalid decimal {v:?}: {e}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(v))
    }

    // `f64`'s Display is the shortest string that round-trips, so this
    // recovers the literal the service wrote for any realistic price.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
        if !v.is_finite() {
            return Err(E::custom(format!("non-finite decimal: {v}")));
        }
        self.visit_str(&v.to_string())
    }
}

/// A `Decimal` that deserializes from either a string or a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LenientDecimal(pub Decimal);

impl<'de> Deserialize<'de> for LenientDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor).map(LenientDecimal)
    }
}

/// `deserialize_with` target for required decimal fields.
pub mod decimal {
    use super::LenientDecimal;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        LenientDecimal::deserialize(deserializer).map(|d| d.0)
    }
}

/// `deserialize_with` target for nullable decimal fields (use with `default`).
pub mod option_decimal {
    use super::LenientDecimal;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<LenientDecimal>::deserialize(deserializer)?.map(|d| d.0))
    }
}

/// Deserializes epoch milliseconds sent either as a number or a numeric string.
pub mod timestamp_ms {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    struct MillisVisitor;

    impl<'de> Visitor<'de> for MillisVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("epoch milliseconds as a number or string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::custom(format!("Invalid timestamp: {v}")))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.is_finite() && v.fract() == 0.0 {
                Ok(v as i64)
            } else {
                Err(E::custom(format!("Invalid timestamp: {v}")))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim()
                .parse::<i64>()
                .map_err(|_| E::custom(format!("Invalid timestamp: {v:?}")))
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MillisVisitor)
    }
}

/// Deserializes a scalar (string or number) into its textual form.
///
/// Used for `timestamp` fields whose encoding differs between endpoints.
pub mod text {
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor)
    }
}

/// Treats an explicit `null` like an absent field.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
