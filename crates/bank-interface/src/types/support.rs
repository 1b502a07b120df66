use chrono::{DateTime, Utc};

wire_enum! {
    pub enum TicketStatus {
        Open,
        InProgress,
        Resolved,
        Closed,
    }
}

wire_enum! {
    pub enum TicketPriority {
        Low,
        Medium,
        High,
    }
}

common_derives! {
    pub struct SupportTicket {
        pub id: i64,
        pub customer_id: i64,
        pub subject: String,
        pub description: String,
        pub priority: TicketPriority,
        pub status: TicketStatus,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}

common_derives! {
    pub struct CreateTicketRequest {
        pub customer_id: i64,
        pub subject: String,
        pub description: String,
        #[serde(default = "default_priority")]
        pub priority: TicketPriority,
    }
}

fn default_priority() -> TicketPriority {
    TicketPriority::Medium
}

common_derives! {
    #[derive(Default)]
    pub struct TicketQuery {
        #[serde(flatten)]
        pub page: crate::PageRequest,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub status: Option<TicketStatus>,
    }
}
