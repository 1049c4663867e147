//! Newtype wrapper around [`i64`] for the product identifier.
//!
//! Identifier values are assigned by the store (an in-memory sequence or a
//! PostgreSQL `BIGSERIAL`); nothing outside a store implementation should
//! construct fresh ones. When the `sqlx` feature is enabled the type also
//! implements `sqlx::Type`, `sqlx::Encode`, and `sqlx::Decode` for
//! PostgreSQL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Create an identifier from a raw value previously assigned by a store.
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the inner raw value.
    pub fn into_raw(self) -> i64 {
        self.0
    }

    /// Return a reference to the inner raw value.
    pub fn as_raw(&self) -> &i64 {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl From<i64> for ProductId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> i64 {
        id.0
    }
}

#[cfg(feature = "sqlx")]
impl sqlx::Type<sqlx::Postgres> for ProductId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

#[cfg(feature = "sqlx")]
impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ProductId {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(feature = "sqlx")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ProductId {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        <i64 as sqlx::Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::from_raw(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_product_id_from_str() {
        let id: ProductId = "100".parse().expect("should parse");
        assert_eq!(id.into_raw(), 100);
    }

    #[test]
    fn test_product_id_from_str_rejects_garbage() {
        assert!("not-a-number".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = ProductId::from_raw(7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "7");
        let parsed: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
