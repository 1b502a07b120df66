mod session;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use wtf_bank_fixtures::{DEFAULT_DELAY_MS, FixtureSet, Latency, Sleeper, TokioSleeper};
use wtf_bank_interface::{
    Account, ApiError, AuthResponse, BankApi, CreateAccountRequest, CreateTicketRequest,
    CreateTransactionRequest, Customer, CustomerQuery, KycDocument, KycReviewRequest,
    KycStatusResponse, LoginRequest, Page, PageRequest, RegisterRequest, Role, SupportTicket,
    TicketQuery, TicketStatus, Transaction, UpdateProfileRequest, UploadDocumentRequest,
};

use crate::session::Session;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct MockConfig {
    pub delay: Duration,
    pub sleeper: Arc<dyn Sleeper>,
    pub fixtures: FixtureSet,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            sleeper: Arc::new(TokioSleeper),
            fixtures: FixtureSet::sample(),
        }
    }
}

impl MockConfig {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_fixtures(mut self, fixtures: FixtureSet) -> Self {
        self.fixtures = fixtures;
        self
    }
}

/// A complete in-memory stand-in for the banking backend.
///
/// Responses are derived from a session copy of [`FixtureSet`] and delivered
/// through [`Latency`], so callers observe the same suspension a network call
/// would cause. The only errors it produces are deliberate domain rejections.
pub struct MockBankApi {
    latency: Latency,
    fixtures: FixtureSet,
    session: Mutex<Session>,
}

impl Default for MockBankApi {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl MockBankApi {
    pub fn new(config: MockConfig) -> Self {
        Self {
            latency: Latency::new(config.sleeper, config.delay),
            session: Mutex::new(Session::new(config.fixtures.clone())),
            fixtures: config.fixtures,
        }
    }

    /// Discards every synthetic write made during this session.
    pub fn reset(&self) {
        *self.lock() = Session::new(self.fixtures.clone());
        tracing::debug!("mock_session_reset");
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read<T>(&self, f: impl FnOnce(&Session) -> T) -> T {
        f(&self.lock())
    }

    fn write<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        f(&mut self.lock())
    }

    async fn respond<T: Send>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        self.latency.delay(result).await
    }

    async fn login(&self, request: LoginRequest, role: Role) -> Result<AuthResponse, ApiError> {
        match self.read(|s| s.login(&request, role)) {
            Some(auth) => self.latency.delay(Ok(auth)).await,
            None => {
                tracing::debug!(role = %role, "mock_login_rejected");
                self.latency.delayed_error(INVALID_CREDENTIALS, 401).await
            }
        }
    }
}

#[async_trait]
impl BankApi for MockBankApi {
    async fn customer_login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.login(request, Role::Customer).await
    }

    async fn admin_login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.login(request, Role::Admin).await
    }

    async fn register_customer(&self, request: RegisterRequest) -> Result<Customer, ApiError> {
        let result = self.write(|s| s.register(request));
        self.respond(result).await
    }

    async fn get_profile(&self, customer_id: i64) -> Result<Customer, ApiError> {
        let result = self.read(|s| s.profile(customer_id));
        self.respond(result).await
    }

    async fn update_profile(
        &self,
        customer_id: i64,
        request: UpdateProfileRequest,
    ) -> Result<Customer, ApiError> {
        let result = self.write(|s| s.update_profile(customer_id, request));
        self.respond(result).await
    }

    async fn get_accounts(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> Result<Page<Account>, ApiError> {
        let result = self.read(|s| s.accounts(customer_id, page));
        self.respond(result).await
    }

    async fn get_account(&self, account_id: i64) -> Result<Account, ApiError> {
        let result = self.read(|s| s.account(account_id));
        self.respond(result).await
    }

    async fn create_account(&self, request: CreateAccountRequest) -> Result<Account, ApiError> {
        let result = self.write(|s| s.create_account(request));
        if let Ok(account) = &result {
            tracing::debug!(account_id = account.id, "mock_account_created");
        }
        self.respond(result).await
    }

    async fn get_transaction_history(
        &self,
        account_id: i64,
        page: PageRequest,
    ) -> Result<Page<Transaction>, ApiError> {
        let result = self.read(|s| s.history(account_id, page));
        self.respond(result).await
    }

    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        let result = self.write(|s| s.create_transaction(request));
        if let Ok(transaction) = &result {
            tracing::debug!(
                transaction_id = transaction.id,
                account_id = transaction.account_id,
                kind = %transaction.transaction_type,
                "mock_transaction_created"
            );
        }
        self.respond(result).await
    }

    async fn get_kyc_status(&self, customer_id: i64) -> Result<KycStatusResponse, ApiError> {
        let result = self.read(|s| s.kyc_status(customer_id));
        self.respond(result).await
    }

    async fn get_kyc_documents(&self, customer_id: i64) -> Result<Vec<KycDocument>, ApiError> {
        let result = self.read(|s| s.kyc_documents(customer_id));
        self.respond(result).await
    }

    async fn upload_document(
        &self,
        request: UploadDocumentRequest,
    ) -> Result<KycDocument, ApiError> {
        let result = self.write(|s| s.upload_document(request));
        self.respond(result).await
    }

    async fn get_support_tickets(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> Result<Page<SupportTicket>, ApiError> {
        let result = self.read(|s| s.tickets(customer_id, page));
        self.respond(result).await
    }

    async fn create_support_ticket(
        &self,
        request: CreateTicketRequest,
    ) -> Result<SupportTicket, ApiError> {
        let result = self.write(|s| s.create_ticket(request));
        self.respond(result).await
    }

    async fn get_all_customers(&self, query: CustomerQuery) -> Result<Page<Customer>, ApiError> {
        let page = self.read(|s| s.customers(query));
        self.respond(Ok(page)).await
    }

    async fn get_pending_kyc_documents(
        &self,
        page: PageRequest,
    ) -> Result<Page<KycDocument>, ApiError> {
        let page = self.read(|s| s.pending_documents(page));
        self.respond(Ok(page)).await
    }

    async fn review_kyc_document(
        &self,
        document_id: i64,
        review: KycReviewRequest,
    ) -> Result<KycDocument, ApiError> {
        let result = self.write(|s| s.review_document(document_id, review));
        self.respond(result).await
    }

    async fn get_all_transactions(
        &self,
        page: PageRequest,
    ) -> Result<Page<Transaction>, ApiError> {
        let page = self.read(|s| s.all_transactions(page));
        self.respond(Ok(page)).await
    }

    async fn get_all_support_tickets(
        &self,
        query: TicketQuery,
    ) -> Result<Page<SupportTicket>, ApiError> {
        let page = self.read(|s| s.all_tickets(query));
        self.respond(Ok(page)).await
    }

    async fn update_ticket_status(
        &self,
        ticket_id: i64,
        status: TicketStatus,
    ) -> Result<SupportTicket, ApiError> {
        let result = self.write(|s| s.update_ticket_status(ticket_id, status));
        self.respond(result).await
    }
}
