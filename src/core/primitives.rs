use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{FilterError, FilterResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> FilterResult<f64> {
    value.to_f64().ok_or_else(|| {
        FilterError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}
