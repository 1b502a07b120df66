use chrono::{DateTime, Utc};

wire_enum! {
    pub enum KycStatus {
        Pending,
        UnderReview,
        Verified,
        Rejected,
    }
}

wire_enum! {
    pub enum DocumentType {
        Passport,
        DriversLicense,
        NationalId,
        UtilityBill,
    }
}

wire_enum! {
    pub enum DocumentStatus {
        Pending,
        Approved,
        Rejected,
    }
}

common_derives! {
    pub struct KycDocument {
        pub id: i64,
        pub customer_id: i64,
        pub document_type: DocumentType,
        pub file_name: String,
        pub status: DocumentStatus,
        pub uploaded_at: DateTime<Utc>,
        #[serde(default)]
        pub reviewed_at: Option<DateTime<Utc>>,
        #[serde(default)]
        pub review_notes: Option<String>,
    }
}

common_derives! {
    pub struct KycStatusResponse {
        pub customer_id: i64,
        pub status: KycStatus,
        pub documents: Vec<KycDocument>,
    }
}

/// Document metadata plus the raw file body. The live adapter sends it as
/// multipart; the mock adapter only records the metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadDocumentRequest {
    pub customer_id: i64,
    pub document_type: DocumentType,
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

common_derives! {
    pub struct KycReviewRequest {
        pub approved: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub notes: Option<String>,
    }
}
