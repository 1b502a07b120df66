use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use wtf_bank_interface::{
    Account, ApiError, AuthResponse, BankApi, CreateAccountRequest, CreateTicketRequest,
    CreateTransactionRequest, Customer, CustomerQuery, HealthProbe, KycDocument,
    KycReviewRequest, KycStatusResponse, LoginRequest, Page, PageRequest, RegisterRequest,
    SupportTicket, TicketQuery, TicketStatus, Transaction, UpdateProfileRequest,
    UploadDocumentRequest,
};

use crate::GatewayConfig;
use crate::mode::{Liveness, Mode, ModeInfo, ModeState};

/// One [`BankApi`] that serves every call from either the live backend or the
/// mock backend.
///
/// Routing per call:
/// - forced mock or known-unavailable backend: mock, no network traffic;
/// - unknown backend: probe once, then route by the outcome;
/// - available backend: live. A [`ApiError::Network`] failure marks the
///   backend unavailable and replays the same call against the mock once.
///   Every other error is returned untouched.
///
/// The mode is captured when a call starts and does not change under it.
pub struct ResilientGateway {
    live: Arc<dyn BankApi>,
    probe: Arc<dyn HealthProbe>,
    mock: Arc<dyn BankApi>,
    probe_timeout: Duration,
    state: Mutex<ModeState>,
}

impl ResilientGateway {
    pub fn new<L>(live: Arc<L>, mock: Arc<dyn BankApi>, config: GatewayConfig) -> Self
    where
        L: BankApi + HealthProbe + 'static,
    {
        let probe: Arc<dyn HealthProbe> = live.clone();
        Self::from_parts(live, probe, mock, config)
    }

    pub fn from_parts(
        live: Arc<dyn BankApi>,
        probe: Arc<dyn HealthProbe>,
        mock: Arc<dyn BankApi>,
        config: GatewayConfig,
    ) -> Self {
        if config.force_mock {
            tracing::info!("gateway_started_in_forced_mock");
        }

        Self {
            live,
            probe,
            mock,
            probe_timeout: config.probe_timeout,
            state: Mutex::new(ModeState::new(config.force_mock)),
        }
    }

    pub fn mode_info(&self) -> ModeInfo {
        self.lock().info()
    }

    pub fn mode(&self) -> Mode {
        self.lock().mode()
    }

    /// Turning the override off forgets what was known about the backend, so
    /// the next call probes again.
    pub fn set_forced_mock(&self, enabled: bool) {
        let changed = {
            let mut state = self.lock();
            if state.forced == enabled {
                false
            } else {
                state.forced = enabled;
                if !enabled {
                    state.liveness = Liveness::Unknown;
                }
                true
            }
        };

        if changed {
            tracing::info!(forced = enabled, "forced_mock_changed");
        }
    }

    /// Probes immediately regardless of the current mode. The forced override
    /// is left as is; only the recorded liveness changes.
    pub async fn refresh_backend_status(&self) -> bool {
        self.lock().liveness = Liveness::Unknown;
        self.run_probe().await
    }

    fn lock(&self) -> MutexGuard<'_, ModeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn run_probe(&self) -> bool {
        let outcome = match tokio::time::timeout(self.probe_timeout, self.probe.check()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(error)) => Err(error.to_string()),
            Err(_) => Err(format!("timed out after {:?}", self.probe_timeout)),
        };

        let available = outcome.is_ok();
        self.lock().liveness = if available {
            Liveness::Available
        } else {
            Liveness::Unavailable
        };

        match outcome {
            Ok(()) => tracing::info!("backend_probe_succeeded"),
            Err(reason) => tracing::warn!(reason = %reason, "backend_probe_failed"),
        }

        available
    }

    async fn route<'a, T, F>(&'a self, operation: &'static str, call: F) -> Result<T, ApiError>
    where
        T: Send + 'a,
        F: Fn(&'a dyn BankApi) -> BoxFuture<'a, Result<T, ApiError>> + Send + 'a,
    {
        let mode = match self.mode() {
            Mode::LiveUnknown => {
                if self.run_probe().await {
                    Mode::LiveAvailable
                } else {
                    Mode::LiveUnavailable
                }
            }
            mode => mode,
        };

        if mode.is_mock() {
            tracing::debug!(operation, mode = %mode, source = "mock", "gateway_route");
            return call(&*self.mock).await;
        }

        tracing::debug!(operation, mode = %mode, source = "live", "gateway_route");
        match call(&*self.live).await {
            Err(error) if error.is_fallback_eligible() => {
                self.lock().liveness = Liveness::Unavailable;
                tracing::warn!(
                    operation,
                    error = %error,
                    "live_call_failed_falling_back_to_mock"
                );
                call(&*self.mock).await
            }
            result => result,
        }
    }
}

#[async_trait]
impl BankApi for ResilientGateway {
    async fn customer_login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.route("customer_login", move |api| {
            api.customer_login(request.clone())
        })
        .await
    }

    async fn admin_login(&self, request: LoginRequest) -> Result<AuthResponse, ApiError> {
        self.route("admin_login", move |api| api.admin_login(request.clone()))
            .await
    }

    async fn register_customer(&self, request: RegisterRequest) -> Result<Customer, ApiError> {
        self.route("register_customer", move |api| {
            api.register_customer(request.clone())
        })
        .await
    }

    async fn get_profile(&self, customer_id: i64) -> Result<Customer, ApiError> {
        self.route("get_profile", move |api| api.get_profile(customer_id))
            .await
    }

    async fn update_profile(
        &self,
        customer_id: i64,
        request: UpdateProfileRequest,
    ) -> Result<Customer, ApiError> {
        self.route("update_profile", move |api| {
            api.update_profile(customer_id, request.clone())
        })
        .await
    }

    async fn get_accounts(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> Result<Page<Account>, ApiError> {
        self.route("get_accounts", move |api| api.get_accounts(customer_id, page))
            .await
    }

    async fn get_account(&self, account_id: i64) -> Result<Account, ApiError> {
        self.route("get_account", move |api| api.get_account(account_id))
            .await
    }

    async fn create_account(&self, request: CreateAccountRequest) -> Result<Account, ApiError> {
        self.route("create_account", move |api| {
            api.create_account(request.clone())
        })
        .await
    }

    async fn get_transaction_history(
        &self,
        account_id: i64,
        page: PageRequest,
    ) -> Result<Page<Transaction>, ApiError> {
        self.route("get_transaction_history", move |api| {
            api.get_transaction_history(account_id, page)
        })
        .await
    }

    async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        self.route("create_transaction", move |api| {
            api.create_transaction(request.clone())
        })
        .await
    }

    async fn get_kyc_status(&self, customer_id: i64) -> Result<KycStatusResponse, ApiError> {
        self.route("get_kyc_status", move |api| api.get_kyc_status(customer_id))
            .await
    }

    async fn get_kyc_documents(&self, customer_id: i64) -> Result<Vec<KycDocument>, ApiError> {
        self.route("get_kyc_documents", move |api| {
            api.get_kyc_documents(customer_id)
        })
        .await
    }

    async fn upload_document(
        &self,
        request: UploadDocumentRequest,
    ) -> Result<KycDocument, ApiError> {
        self.route("upload_document", move |api| {
            api.upload_document(request.clone())
        })
        .await
    }

    async fn get_support_tickets(
        &self,
        customer_id: i64,
        page: PageRequest,
    ) -> Result<Page<SupportTicket>, ApiError> {
        self.route("get_support_tickets", move |api| {
            api.get_support_tickets(customer_id, page)
        })
        .await
    }

    async fn create_support_ticket(
        &self,
        request: CreateTicketRequest,
    ) -> Result<SupportTicket, ApiError> {
        self.route("create_support_ticket", move |api| {
            api.create_support_ticket(request.clone())
        })
        .await
    }

    async fn get_all_customers(&self, query: CustomerQuery) -> Result<Page<Customer>, ApiError> {
        self.route("get_all_customers", move |api| {
            api.get_all_customers(query.clone())
        })
        .await
    }

    async fn get_pending_kyc_documents(
        &self,
        page: PageRequest,
    ) -> Result<Page<KycDocument>, ApiError> {
        self.route("get_pending_kyc_documents", move |api| {
            api.get_pending_kyc_documents(page)
        })
        .await
    }

    async fn review_kyc_document(
        &self,
        document_id: i64,
        review: KycReviewRequest,
    ) -> Result<KycDocument, ApiError> {
        self.route("review_kyc_document", move |api| {
            api.review_kyc_document(document_id, review.clone())
        })
        .await
    }

    async fn get_all_transactions(
        &self,
        page: PageRequest,
    ) -> Result<Page<Transaction>, ApiError> {
        self.route("get_all_transactions", move |api| {
            api.get_all_transactions(page)
        })
        .await
    }

    async fn get_all_support_tickets(
        &self,
        query: TicketQuery,
    ) -> Result<Page<SupportTicket>, ApiError> {
        self.route("get_all_support_tickets", move |api| {
            api.get_all_support_tickets(query.clone())
        })
        .await
    }

    async fn update_ticket_status(
        &self,
        ticket_id: i64,
        status: TicketStatus,
    ) -> Result<SupportTicket, ApiError> {
        self.route("update_ticket_status", move |api| {
            api.update_ticket_status(ticket_id, status)
        })
        .await
    }
}
