use chrono::{DateTime, NaiveDate, Utc};

use crate::KycStatus;

common_derives! {
    pub struct Customer {
        pub id: i64,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
        #[serde(default)]
        pub phone: Option<String>,
        #[serde(default)]
        pub address: Option<String>,
        #[serde(default)]
        pub date_of_birth: Option<NaiveDate>,
        pub kyc_status: KycStatus,
        pub created_at: DateTime<Utc>,
    }
}

common_derives! {
    #[derive(Default)]
    pub struct UpdateProfileRequest {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub first_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub last_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub address: Option<String>,
    }
}

common_derives! {
    #[derive(Default)]
    pub struct CustomerQuery {
        #[serde(flatten)]
        pub page: crate::PageRequest,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub kyc_status: Option<KycStatus>,
    }
}
