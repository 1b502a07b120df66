use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

wire_enum! {
    pub enum AccountType {
        Checking,
        Savings,
        Business,
    }
}

wire_enum! {
    pub enum AccountStatus {
        Active,
        Frozen,
        Closed,
    }
}

common_derives! {
    pub struct Account {
        pub id: i64,
        pub account_number: String,
        pub account_type: AccountType,
        pub balance: Decimal,
        pub currency: String,
        pub status: AccountStatus,
        pub customer_id: i64,
        pub created_at: DateTime<Utc>,
    }
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

common_derives! {
    pub struct CreateAccountRequest {
        pub customer_id: i64,
        pub account_type: AccountType,
        #[serde(default)]
        pub initial_deposit: Decimal,
        #[serde(default = "default_currency")]
        pub currency: String,
    }
}

fn default_currency() -> String {
    "USD".to_string()
}
