use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

wire_enum! {
    pub enum TransactionType {
        Deposit,
        Withdrawal,
        Transfer,
    }
}

wire_enum! {
    pub enum TransactionStatus {
        Pending,
        Completed,
        Failed,
    }
}

common_derives! {
    pub struct Transaction {
        pub id: i64,
        pub reference: String,
        pub account_id: i64,
        #[serde(rename = "type")]
        pub transaction_type: TransactionType,
        pub amount: Decimal,
        pub balance_after: Decimal,
        #[serde(default)]
        pub description: Option<String>,
        pub status: TransactionStatus,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub target_account_number: Option<String>,
        pub created_at: DateTime<Utc>,
    }
}

common_derives! {
    pub struct CreateTransactionRequest {
        pub account_id: i64,
        #[serde(rename = "type")]
        pub transaction_type: TransactionType,
        pub amount: Decimal,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub target_account_number: Option<String>,
    }
}
