//! Serializers that keep 256-bit amounts exact by writing them as decimal strings

use fixed_point::U256;
use serde::Serializer;

pub fn serialize_u256<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn serialize_opt_u256<S>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serialize_u256(value, serializer),
        None => serializer.serialize_none(),
    }
}
