macro_rules! common_derives {
    ($item:item) => {
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        $item
    };
}

macro_rules! wire_enum {
    ($item:item) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            strum::Display,
            strum::EnumString,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
        $item
    };
}

mod api;
mod error;
mod types;

pub use api::{BankApi, HealthProbe};
pub use error::{ApiError, ErrorKind};
pub use types::*;

pub use rust_decimal::Decimal;
