use crate::KycStatus;

wire_enum! {
    pub enum Role {
        Customer,
        Admin,
    }
}

common_derives! {
    pub struct LoginRequest {
        pub email: String,
        pub password: String,
    }
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

common_derives! {
    pub struct AuthResponse {
        pub token: String,
        #[serde(default = "default_token_type")]
        pub token_type: String,
        pub user_id: i64,
        pub email: String,
        pub first_name: String,
        pub last_name: String,
        pub role: Role,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub kyc_status: Option<KycStatus>,
    }
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

common_derives! {
    pub struct RegisterRequest {
        pub first_name: String,
        pub last_name: String,
        pub email: String,
        pub password: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
    }
}
