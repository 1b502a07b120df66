use async_trait::async_trait;
use reqwest::Method;
use wtf_bank_interface::{
    Account, ApiError, AuthResponse, BankApi, CreateAccountRequest, CreateTicketRequest,
    CreateTransactionRequest, Customer, CustomerQuery, HealthProbe, KycDocument,
    KycReviewRequest, KycStatusResponse, LoginRequest, Page, PageRequest, RegisterRequest,
    SupportTicket, TicketQuery, TicketStatus, Transaction, UpdateProfileRequest,
    UploadDocumentRequest,
};

use crate::LiveBankApi;

#[async_trait]
impl BankApi for LiveBankApi {
    async fn customer_login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/api/auth/customer/login", &request)
            .await
    }

    async fn admin_login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send_json(Method::POST, "/api/auth/admin/login", &request)
            .await
    }

    async fn register_customer(&self, request: RegisterRequest) -> Result<Customer, ApiError> {
        self.send_json(Method::POST, "/api/auth/register", &request)
            .await
    }

    async fn get_profile(&self, customer_id: i64) -> Result<Customer, ApiError> {
        self.get(&format!("/api/customers/{customer_id}"), &[]).await
    }

    async fn update_profile(
        &self,
        customer_id: i64,
        request: UpdateProfileRequest,
    ) -> Result<Customer, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/api/customers/{customer_id}"),
            &request,
        )
        .await
    }

    async fn get_accounts(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> Result<Page<Account>, ApiError> {
        self.get(
            &format!("/api/accounts/customer/{customer_id}"),
            &page.as_query(),
        )
        .await
    }

    async fn get_account(&self, account_id: i64) -> Result<Account, ApiError> {
        self.get(&format!("/api/accounts/{account_id}"), &[]).await
    }

    async fn create_account(&self, request: CreateAccountRequest) -> Result<Account, ApiError> {
        self.send_json(Method::POST, "/api/accounts", &request)
            .await
    }

    async fn get_transaction_history(
        &self,
        account_id: i64,
        page: PageRequest,
    ) -> Result<Page<Transaction>, ApiError> {
        self.get(
            &format!("/api/transactions/account/{account_id}"),
            &page.as_query(),
        )
        .await
    }

    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        self.send_json(Method::POST, "/api/transactions", &request)
            .await
    }

    async fn get_kyc_status(&self, customer_id: i64) -> Result<KycStatusResponse, ApiError> {
        self.get(&format!("/api/kyc/customer/{customer_id}/status"), &[])
            .await
    }

    async fn get_kyc_documents(&self, customer_id: i64) -> Result<Vec<KycDocument>, ApiError> {
        self.get(&format!("/api/kyc/customer/{customer_id}/documents"), &[])
            .await
    }

    async fn upload_document(
        &self,
        request: UploadDocumentRequest,
    ) -> Result<KycDocument, ApiError> {
        self.upload("/api/kyc/documents", request).await
    }

    async fn get_support_tickets(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> Result<Page<SupportTicket>, ApiError> {
        self.get(
            &format!("/api/support/tickets/customer/{customer_id}"),
            &page.as_query(),
        )
        .await
    }

    async fn create_support_ticket(
        &self,
        request: CreateTicketRequest,
    ) -> Result<SupportTicket, ApiError> {
        self.send_json(Method::POST, "/api/support/tickets", &request)
            .await
    }

    async fn get_all_customers(&self, query: CustomerQuery) -> Result<Page<Customer>, ApiError> {
        let mut params = query.page.as_query().to_vec();
        if let Some(status) = query.kyc_status {
            params.push(("kycStatus", status.to_string()));
        }
        self.get("/api/admin/customers", &params).await
    }

    async fn get_pending_kyc_documents(
        &self,
        page: PageRequest,
    ) -> Result<Page<KycDocument>, ApiError> {
        self.get("/api/admin/kyc/pending", &page.as_query()).await
    }

    async fn review_kyc_document(
        &self,
        document_id: i64,
        review: KycReviewRequest,
    ) -> Result<KycDocument, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/api/admin/kyc/documents/{document_id}/review"),
            &review,
        )
        .await
    }

    async fn get_all_transactions(
        &self,
        page: PageRequest,
    ) -> Result<Page<Transaction>, ApiError> {
        self.get("/api/admin/transactions", &page.as_query()).await
    }

    async fn get_all_support_tickets(
        &self,
        query: TicketQuery,
    ) -> Result<Page<SupportTicket>, ApiError> {
        let mut params = query.page.as_query().to_vec();
        if let Some(status) = query.status {
            params.push(("status", status.to_string()));
        }
        self.get("/api/admin/support/tickets", &params).await
    }

    async fn update_ticket_status(
        &self,
        ticket_id: i64,
        status: TicketStatus,
    ) -> Result<SupportTicket, ApiError> {
        self.send_json(
            Method::PUT,
            &format!("/api/admin/support/tickets/{ticket_id}/status"),
            &serde_json::json!({ "status": status }),
        )
        .await
    }
}

#[async_trait]
impl HealthProbe for LiveBankApi {
    async fn check(&self) -> Result<(), ApiError> {
        self.ping().await
    }
}
