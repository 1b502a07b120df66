use async_trait::async_trait;

use crate::{
    Account, ApiError, AuthResponse, CreateAccountRequest, CreateTicketRequest,
    CreateTransactionRequest, Customer, CustomerQuery, KycDocument, KycReviewRequest,
    KycStatusResponse, LoginRequest, Page, PageRequest, RegisterRequest, SupportTicket,
    TicketQuery, TicketStatus, Transaction, UpdateProfileRequest, UploadDocumentRequest,
};

/// The full application-facing banking surface.
///
/// The live client, the mock backend and the resilient gateway all implement
/// this trait, so the compiler keeps their shapes identical. Every failure is
/// an [`ApiError`] already classified by the implementation that produced it.
#[async_trait]
pub trait BankApi: Send + Sync {
    // ── Auth ─────────────────────────────────────────────────────────────

    async fn customer_login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError>;

    async fn admin_login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError>;

    async fn register_customer(&self, request: RegisterRequest) -> Result<Customer, ApiError>;

    // ── Profile ──────────────────────────────────────────────────────────

    async fn get_profile(&self, customer_id: i64) -> Result<Customer, ApiError>;

    async fn update_profile(
        &self,
        customer_id: i64,
        request: UpdateProfileRequest,
    ) -> Result<Customer, ApiError>;

    // ── Accounts ─────────────────────────────────────────────────────────

    async fn get_accounts(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> Result<Page<Account>, ApiError>;

    async fn get_account(&self, account_id: i64) -> Result<Account, ApiError>;

    async fn create_account(&self, request: CreateAccountRequest) -> Result<Account, ApiError>;

    // ── Transactions ─────────────────────────────────────────────────────

    async fn get_transaction_history(
        &self,
        account_id: i64,
        page: PageRequest,
    ) -> Result<Page<Transaction>, ApiError>;

    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, ApiError>;

    // ── KYC ──────────────────────────────────────────────────────────────

    async fn get_kyc_status(&self, customer_id: i64) -> Result<KycStatusResponse, ApiError>;

    async fn get_kyc_documents(&self, customer_id: i64) -> Result<Vec<KycDocument>, ApiError>;

    async fn upload_document(
        &self,
        request: UploadDocumentRequest,
    ) -> Result<KycDocument, ApiError>;

    // ── Support ──────────────────────────────────────────────────────────

    async fn get_support_tickets(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> Result<Page<SupportTicket>, ApiError>;

    async fn create_support_ticket(
        &self,
        request: CreateTicketRequest,
    ) -> Result<SupportTicket, ApiError>;

    // ── Admin ────────────────────────────────────────────────────────────

    async fn get_all_customers(&self, query: CustomerQuery) -> Result<Page<Customer>, ApiError>;

    async fn get_pending_kyc_documents(
        &self,
        page: PageRequest,
    ) -> Result<Page<KycDocument>, ApiError>;

    async fn review_kyc_document(
        &self,
        document_id: i64,
        review: KycReviewRequest,
    ) -> Result<KycDocument, ApiError>;

    async fn get_all_transactions(&self, page: PageRequest)
    -> Result<Page<Transaction>, ApiError>;

    async fn get_all_support_tickets(
        &self,
        query: TicketQuery,
    ) -> Result<Page<SupportTicket>, ApiError>;

    async fn update_ticket_status(
        &self,
        ticket_id: i64,
        status: TicketStatus,
    ) -> Result<SupportTicket, ApiError>;
}

/// A side-effect-free liveness check against the live backend.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check(&self) -> Result<(), ApiError>;
}
