use chrono::Utc;
use wtf_bank_fixtures::{Credential, FixtureSet};
use wtf_bank_interface::{
    Account, AccountStatus, ApiError, AuthResponse, CreateAccountRequest, CreateTicketRequest,
    CreateTransactionRequest, Customer, CustomerQuery, Decimal, DocumentStatus, KycDocument,
    KycReviewRequest, KycStatus, KycStatusResponse, LoginRequest, Page, PageRequest,
    RegisterRequest, Role, SupportTicket, TicketQuery, TicketStatus, Transaction,
    TransactionStatus, TransactionType, UpdateProfileRequest, UploadDocumentRequest,
};

type Result<T> = std::result::Result<T, ApiError>;

const ACCOUNT_NUMBER_BASE: i64 = 1_000_000_000;

fn not_found(what: &str) -> ApiError {
    ApiError::domain(404, format!("{what} not found"))
}

fn bad_request(message: impl Into<String>) -> ApiError {
    ApiError::domain(400, message)
}

#[derive(Debug, Clone, Copy)]
struct NextIds {
    customer: i64,
    account: i64,
    transaction: i64,
    document: i64,
    ticket: i64,
}

impl NextIds {
    fn after(fixtures: &FixtureSet) -> Self {
        fn next<T>(items: &[T], id: impl Fn(&T) -> i64) -> i64 {
            items.iter().map(id).max().unwrap_or(0) + 1
        }

        Self {
            customer: next(&fixtures.customers, |c| c.id),
            account: next(&fixtures.accounts, |a| a.id),
            transaction: next(&fixtures.transactions, |t| t.id),
            document: next(&fixtures.documents, |d| d.id),
            ticket: next(&fixtures.tickets, |t| t.id),
        }
    }

    fn take(counter: &mut i64) -> i64 {
        let id = *counter;
        *counter += 1;
        id
    }
}

/// Session-scoped working copy of the fixtures. Writes land here and are gone
/// once the session is reset or the process exits.
pub(crate) struct Session {
    data: FixtureSet,
    ids: NextIds,
}

impl Session {
    pub(crate) fn new(fixtures: FixtureSet) -> Self {
        let ids = NextIds::after(&fixtures);
        Self {
            data: fixtures,
            ids,
        }
    }

    fn customer(&self, customer_id: i64) -> Result<&Customer> {
        self.data
            .customer(customer_id)
            .ok_or_else(|| not_found("Customer"))
    }

    fn customer_mut(&mut self, customer_id: i64) -> Result<&mut Customer> {
        self.data
            .customers
            .iter_mut()
            .find(|c| c.id == customer_id)
            .ok_or_else(|| not_found("Customer"))
    }

    fn account_index(&self, account_id: i64) -> Result<usize> {
        self.data
            .accounts
            .iter()
            .position(|a| a.id == account_id)
            .ok_or_else(|| not_found("Account"))
    }

    // ── Auth ─────────────────────────────────────────────────────────────

    fn credential(&self, request: &LoginRequest, role: Role) -> Option<&Credential> {
        let email = request.email.trim();
        self.data.credentials.iter().find(|c| {
            c.role == role && c.email.eq_ignore_ascii_case(email) && c.password == request.password
        })
    }

    /// `None` means the credentials were rejected.
    pub(crate) fn login(&self, request: &LoginRequest, role: Role) -> Option<AuthResponse> {
        let credential = self.credential(request, role)?;
        let token = format!(
            "mock-{}.{}",
            role.to_string().to_lowercase(),
            uuid::Uuid::new_v4().simple()
        );

        match role {
            Role::Customer => {
                let customer = self.customer(credential.user_id).ok()?;
                Some(AuthResponse {
                    token,
                    token_type: "Bearer".into(),
                    user_id: customer.id,
                    email: customer.email.clone(),
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                    role,
                    kyc_status: Some(customer.kyc_status),
                })
            }
            Role::Admin => {
                let admin = self
                    .data
                    .admins
                    .iter()
                    .find(|a| a.id == credential.user_id)?;
                Some(AuthResponse {
                    token,
                    token_type: "Bearer".into(),
                    user_id: admin.id,
                    email: admin.email.clone(),
                    first_name: admin.first_name.clone(),
                    last_name: admin.last_name.clone(),
                    role,
                    kyc_status: None,
                })
            }
        }
    }

    pub(crate) fn register(&mut self, request: RegisterRequest) -> Result<Customer> {
        let email = request.email.trim().to_string();
        if email.is_empty() || request.password.is_empty() {
            return Err(bad_request("Email and password are required"));
        }
        if request.first_name.trim().is_empty() || request.last_name.trim().is_empty() {
            return Err(bad_request("First and last name are required"));
        }
        if self
            .data
            .customers
            .iter()
            .any(|c| c.email.eq_ignore_ascii_case(&email))
        {
            return Err(ApiError::domain(409, "Email is already registered"));
        }

        let customer = Customer {
            id: NextIds::take(&mut self.ids.customer),
            first_name: request.first_name.trim().to_string(),
            last_name: request.last_name.trim().to_string(),
            email: email.clone(),
            phone: request.phone,
            address: None,
            date_of_birth: None,
            kyc_status: KycStatus::Pending,
            created_at: Utc::now(),
        };

        self.data.credentials.push(Credential {
            email,
            password: request.password,
            role: Role::Customer,
            user_id: customer.id,
        });
        self.data.customers.push(customer.clone());
        Ok(customer)
    }

    // ── Profile ──────────────────────────────────────────────────────────

    pub(crate) fn profile(&self, customer_id: i64) -> Result<Customer> {
        self.customer(customer_id).cloned()
    }

    pub(crate) fn update_profile(
        &mut self,
        customer_id: i64,
        request: UpdateProfileRequest,
    ) -> Result<Customer> {
        let customer = self.customer_mut(customer_id)?;
        if let Some(first_name) = request.first_name {
            customer.first_name = first_name;
        }
        if let Some(last_name) = request.last_name {
            customer.last_name = last_name;
        }
        if let Some(phone) = request.phone {
            customer.phone = Some(phone);
        }
        if let Some(address) = request.address {
            customer.address = Some(address);
        }
        Ok(customer.clone())
    }

    // ── Accounts ─────────────────────────────────────────────────────────

    pub(crate) fn accounts(&self, customer_id: i64, page: PageRequest) -> Result<Page<Account>> {
        self.customer(customer_id)?;
        let owned = self
            .data
            .accounts
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect();
        Ok(Page::from_items(owned, page))
    }

    pub(crate) fn account(&self, account_id: i64) -> Result<Account> {
        let index = self.account_index(account_id)?;
        Ok(self.data.accounts[index].clone())
    }

    pub(crate) fn create_account(&mut self, request: CreateAccountRequest) -> Result<Account> {
        self.customer(request.customer_id)?;
        if request.initial_deposit.is_sign_negative() {
            return Err(bad_request("Initial deposit cannot be negative"));
        }

        let id = NextIds::take(&mut self.ids.account);
        let now = Utc::now();
        let account = Account {
            id,
            account_number: format!("WTF{}", ACCOUNT_NUMBER_BASE + id),
            account_type: request.account_type,
            balance: request.initial_deposit,
            currency: request.currency,
            status: AccountStatus::Active,
            customer_id: request.customer_id,
            created_at: now,
        };
        self.data.accounts.push(account.clone());

        if request.initial_deposit > Decimal::ZERO {
            self.record(
                id,
                TransactionType::Deposit,
                request.initial_deposit,
                request.initial_deposit,
                Some("Initial deposit".into()),
                None,
            );
        }

        Ok(account)
    }

    // ── Transactions ─────────────────────────────────────────────────────

    fn record(
        &mut self,
        account_id: i64,
        transaction_type: TransactionType,
        amount: Decimal,
        balance_after: Decimal,
        description: Option<String>,
        target_account_number: Option<String>,
    ) -> Transaction {
        let id = NextIds::take(&mut self.ids.transaction);
        let transaction = Transaction {
            id,
            reference: format!("TXN{:010}", id),
            account_id,
            transaction_type,
            amount,
            balance_after,
            description,
            status: TransactionStatus::Completed,
            target_account_number,
            created_at: Utc::now(),
        };
        self.data.transactions.push(transaction.clone());
        transaction
    }

    fn newest_first<T>(
        items: impl Iterator<Item = T>,
        key: impl Fn(&T) -> (chrono::DateTime<Utc>, i64),
    ) -> Vec<T> {
        let mut items: Vec<T> = items.collect();
        items.sort_by_key(|item| std::cmp::Reverse(key(item)));
        items
    }

    pub(crate) fn history(&self, account_id: i64, page: PageRequest) -> Result<Page<Transaction>> {
        self.account_index(account_id)?;
        let items = Self::newest_first(
            self.data
                .transactions
                .iter()
                .filter(|t| t.account_id == account_id)
                .cloned(),
            |t| (t.created_at, t.id),
        );
        Ok(Page::from_items(items, page))
    }

    pub(crate) fn all_transactions(&self, page: PageRequest) -> Page<Transaction> {
        let items = Self::newest_first(self.data.transactions.iter().cloned(), |t| {
            (t.created_at, t.id)
        });
        Page::from_items(items, page)
    }

    pub(crate) fn create_transaction(
        &mut self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction> {
        if request.amount <= Decimal::ZERO {
            return Err(bad_request("Amount must be greater than zero"));
        }

        let source = self.account_index(request.account_id)?;
        if !self.data.accounts[source].is_active() {
            return Err(bad_request("Account is not active"));
        }
        let balance = self.data.accounts[source].balance;

        match request.transaction_type {
            TransactionType::Deposit => {
                let balance_after = balance + request.amount;
                self.data.accounts[source].balance = balance_after;
                Ok(self.record(
                    request.account_id,
                    TransactionType::Deposit,
                    request.amount,
                    balance_after,
                    request.description,
                    None,
                ))
            }
            TransactionType::Withdrawal => {
                if request.amount > balance {
                    return Err(bad_request("Insufficient funds"));
                }
                let balance_after = balance - request.amount;
                self.data.accounts[source].balance = balance_after;
                Ok(self.record(
                    request.account_id,
                    TransactionType::Withdrawal,
                    request.amount,
                    balance_after,
                    request.description,
                    None,
                ))
            }
            TransactionType::Transfer => self.transfer(source, request),
        }
    }

    fn transfer(&mut self, source: usize, request: CreateTransactionRequest) -> Result<Transaction> {
        let target_number = request
            .target_account_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| bad_request("Target account number is required"))?
            .to_string();

        let target = self
            .data
            .accounts
            .iter()
            .position(|a| a.account_number == target_number)
            .ok_or_else(|| not_found("Target account"))?;
        if target == source {
            return Err(bad_request("Cannot transfer to the same account"));
        }
        if !self.data.accounts[target].is_active() {
            return Err(bad_request("Target account is not active"));
        }

        let balance = self.data.accounts[source].balance;
        if request.amount > balance {
            return Err(bad_request("Insufficient funds"));
        }

        let source_after = balance - request.amount;
        let target_after = self.data.accounts[target].balance + request.amount;
        let source_number = self.data.accounts[source].account_number.clone();
        let target_id = self.data.accounts[target].id;

        self.data.accounts[source].balance = source_after;
        self.data.accounts[target].balance = target_after;

        let outgoing = self.record(
            request.account_id,
            TransactionType::Transfer,
            request.amount,
            source_after,
            request.description,
            Some(target_number),
        );
        self.record(
            target_id,
            TransactionType::Deposit,
            request.amount,
            target_after,
            Some(format!("Transfer from {source_number}")),
            None,
        );

        Ok(outgoing)
    }

    // ── KYC ──────────────────────────────────────────────────────────────

    fn documents_of(&self, customer_id: i64) -> Vec<KycDocument> {
        self.data
            .documents
            .iter()
            .filter(|d| d.customer_id == customer_id)
            .cloned()
            .collect()
    }

    pub(crate) fn kyc_status(&self, customer_id: i64) -> Result<KycStatusResponse> {
        let customer = self.customer(customer_id)?;
        Ok(KycStatusResponse {
            customer_id,
            status: customer.kyc_status,
            documents: self.documents_of(customer_id),
        })
    }

    pub(crate) fn kyc_documents(&self, customer_id: i64) -> Result<Vec<KycDocument>> {
        self.customer(customer_id)?;
        Ok(self.documents_of(customer_id))
    }

    pub(crate) fn upload_document(&mut self, request: UploadDocumentRequest) -> Result<KycDocument> {
        if request.file_name.trim().is_empty() {
            return Err(bad_request("File name is required"));
        }
        if request.content.is_empty() {
            return Err(bad_request("File is empty"));
        }

        let customer = self.customer_mut(request.customer_id)?;
        if matches!(customer.kyc_status, KycStatus::Pending | KycStatus::Rejected) {
            customer.kyc_status = KycStatus::UnderReview;
        }

        let document = KycDocument {
            id: NextIds::take(&mut self.ids.document),
            customer_id: request.customer_id,
            document_type: request.document_type,
            file_name: request.file_name,
            status: DocumentStatus::Pending,
            uploaded_at: Utc::now(),
            reviewed_at: None,
            review_notes: None,
        };
        self.data.documents.push(document.clone());
        Ok(document)
    }

    pub(crate) fn pending_documents(&self, page: PageRequest) -> Page<KycDocument> {
        let pending = self
            .data
            .documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Pending)
            .cloned()
            .collect();
        Page::from_items(pending, page)
    }

    pub(crate) fn review_document(
        &mut self,
        document_id: i64,
        review: KycReviewRequest,
    ) -> Result<KycDocument> {
        let document = self
            .data
            .documents
            .iter_mut()
            .find(|d| d.id == document_id)
            .ok_or_else(|| not_found("Document"))?;
        if document.status != DocumentStatus::Pending {
            return Err(ApiError::domain(409, "Document has already been reviewed"));
        }

        document.status = if review.approved {
            DocumentStatus::Approved
        } else {
            DocumentStatus::Rejected
        };
        document.reviewed_at = Some(Utc::now());
        document.review_notes = review.notes;
        let reviewed = document.clone();

        let documents = self.documents_of(reviewed.customer_id);
        let status = if !review.approved {
            KycStatus::Rejected
        } else if documents.iter().all(|d| d.status == DocumentStatus::Approved) {
            KycStatus::Verified
        } else {
            KycStatus::UnderReview
        };
        self.customer_mut(reviewed.customer_id)?.kyc_status = status;

        Ok(reviewed)
    }

    // ── Support ──────────────────────────────────────────────────────────

    pub(crate) fn tickets(&self, customer_id: i64, page: PageRequest) -> Result<Page<SupportTicket>> {
        self.customer(customer_id)?;
        let items = Self::newest_first(
            self.data
                .tickets
                .iter()
                .filter(|t| t.customer_id == customer_id)
                .cloned(),
            |t| (t.created_at, t.id),
        );
        Ok(Page::from_items(items, page))
    }

    pub(crate) fn all_tickets(&self, query: TicketQuery) -> Page<SupportTicket> {
        let items = Self::newest_first(
            self.data
                .tickets
                .iter()
                .filter(|t| query.status.is_none_or(|s| t.status == s))
                .cloned(),
            |t| (t.created_at, t.id),
        );
        Page::from_items(items, query.page)
    }

    pub(crate) fn create_ticket(&mut self, request: CreateTicketRequest) -> Result<SupportTicket> {
        self.customer(request.customer_id)?;
        if request.subject.trim().is_empty() {
            return Err(bad_request("Subject is required"));
        }

        let now = Utc::now();
        let ticket = SupportTicket {
            id: NextIds::take(&mut self.ids.ticket),
            customer_id: request.customer_id,
            subject: request.subject,
            description: request.description,
            priority: request.priority,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
        };
        self.data.tickets.push(ticket.clone());
        Ok(ticket)
    }

    pub(crate) fn update_ticket_status(
        &mut self,
        ticket_id: i64,
        status: TicketStatus,
    ) -> Result<SupportTicket> {
        let ticket = self
            .data
            .tickets
            .iter_mut()
            .find(|t| t.id == ticket_id)
            .ok_or_else(|| not_found("Ticket"))?;
        ticket.status = status;
        ticket.updated_at = Utc::now();
        Ok(ticket.clone())
    }

    // ── Admin ────────────────────────────────────────────────────────────

    pub(crate) fn customers(&self, query: CustomerQuery) -> Page<Customer> {
        let matching = self
            .data
            .customers
            .iter()
            .filter(|c| query.kyc_status.is_none_or(|s| c.kyc_status == s))
            .cloned()
            .collect();
        Page::from_items(matching, query.page)
    }
}

#[cfg(test)]
mod tests {
    use wtf_bank_fixtures::{DEMO_CUSTOMER_ID, DEMO_EMAIL, DEMO_PASSWORD};
    use wtf_bank_interface::{AccountType, DocumentType, ErrorKind};

    use super::*;

    fn session() -> Session {
        Session::new(FixtureSet::sample())
    }

    fn usd(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn txn(
        account_id: i64,
        transaction_type: TransactionType,
        cents: i64,
        target: Option<&str>,
    ) -> CreateTransactionRequest {
        CreateTransactionRequest {
            account_id,
            transaction_type,
            amount: usd(cents),
            description: None,
            target_account_number: target.map(Into::into),
        }
    }

    #[test]
    fn login_checks_role_and_password() {
        let session = session();

        let ok = session
            .login(&LoginRequest::new(DEMO_EMAIL, DEMO_PASSWORD), Role::Customer)
            .unwrap();
        assert_eq!(ok.user_id, DEMO_CUSTOMER_ID);
        assert_eq!(ok.kyc_status, Some(KycStatus::Verified));
        assert!(ok.token.starts_with("mock-customer."));

        assert!(
            session
                .login(&LoginRequest::new(DEMO_EMAIL, "nope"), Role::Customer)
                .is_none()
        );
        assert!(
            session
                .login(&LoginRequest::new(DEMO_EMAIL, DEMO_PASSWORD), Role::Admin)
                .is_none()
        );
    }

    #[test]
    fn deposit_and_withdrawal_update_balance() {
        let mut session = session();

        let deposit = session
            .create_transaction(txn(1, TransactionType::Deposit, 10_000, None))
            .unwrap();
        assert_eq!(deposit.balance_after, usd(534_050));

        let withdrawal = session
            .create_transaction(txn(1, TransactionType::Withdrawal, 34_050, None))
            .unwrap();
        assert_eq!(withdrawal.balance_after, usd(500_000));
        assert_eq!(session.account(1).unwrap().balance, usd(500_000));
        assert!(withdrawal.id > 12);
    }

    #[test]
    fn transaction_rejections() {
        let cases: &[(&str, CreateTransactionRequest, u16)] = &[
            ("zero_amount", txn(1, TransactionType::Deposit, 0, None), 400),
            (
                "insufficient_funds",
                txn(4, TransactionType::Withdrawal, 999_999, None),
                400,
            ),
            ("frozen_account", txn(5, TransactionType::Deposit, 100, None), 400),
            ("unknown_account", txn(99, TransactionType::Deposit, 100, None), 404),
            ("transfer_without_target", txn(1, TransactionType::Transfer, 100, None), 400),
            (
                "transfer_to_self",
                txn(1, TransactionType::Transfer, 100, Some("WTF1000000001")),
                400,
            ),
            (
                "transfer_to_unknown",
                txn(1, TransactionType::Transfer, 100, Some("WTF0000000000")),
                404,
            ),
            (
                "transfer_to_frozen",
                txn(1, TransactionType::Transfer, 100, Some("WTF1000000005")),
                400,
            ),
        ];

        for (name, request, status) in cases {
            let mut session = session();
            let err = session.create_transaction(request.clone()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Domain, "{name}");
            assert_eq!(err.status(), Some(*status), "{name}");
            assert_eq!(session.data, FixtureSet::sample(), "{name}");
        }
    }

    #[test]
    fn transfer_moves_money_and_mirrors() {
        let mut session = session();

        let outgoing = session
            .create_transaction(txn(1, TransactionType::Transfer, 24_050, Some("WTF1000000004")))
            .unwrap();

        assert_eq!(outgoing.balance_after, usd(500_000));
        assert_eq!(outgoing.target_account_number.as_deref(), Some("WTF1000000004"));
        assert_eq!(session.account(4).unwrap().balance, usd(144_050));

        let incoming = session.history(4, PageRequest::default()).unwrap();
        assert_eq!(incoming.total_elements, 3);
        assert_eq!(incoming.content[0].transaction_type, TransactionType::Deposit);
        assert_eq!(
            incoming.content[0].description.as_deref(),
            Some("Transfer from WTF1000000001")
        );
    }

    #[test]
    fn history_is_newest_first_and_paged() {
        let session = session();

        let first = session.history(1, PageRequest::new(0, 4)).unwrap();
        assert_eq!(first.total_elements, 6);
        assert_eq!(first.total_pages, 2);
        assert_eq!(
            first.content.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![6, 5, 4, 3]
        );

        let second = session.history(1, PageRequest::new(1, 4)).unwrap();
        assert_eq!(
            second.content.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }

    #[test]
    fn register_then_login() {
        let mut session = session();
        let request = RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "engine".into(),
            phone: None,
        };

        let customer = session.register(request.clone()).unwrap();
        assert_eq!(customer.id, 6);
        assert_eq!(customer.kyc_status, KycStatus::Pending);

        let auth = session
            .login(&LoginRequest::new("ADA@example.com", "engine"), Role::Customer)
            .unwrap();
        assert_eq!(auth.user_id, 6);

        let err = session.register(request).unwrap_err();
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn create_account_with_initial_deposit() {
        let mut session = session();

        let account = session
            .create_account(CreateAccountRequest {
                customer_id: 2,
                account_type: AccountType::Savings,
                initial_deposit: usd(25_000),
                currency: "USD".into(),
            })
            .unwrap();

        assert_eq!(account.id, 7);
        assert_eq!(account.account_number, "WTF1000000007");
        let history = session.history(account.id, PageRequest::default()).unwrap();
        assert_eq!(history.total_elements, 1);
        assert_eq!(history.content[0].balance_after, usd(25_000));
        assert_eq!(
            session.accounts(2, PageRequest::default()).unwrap().total_elements,
            2
        );
    }

    #[test]
    fn upload_moves_customer_under_review() {
        let mut session = session();

        let document = session
            .upload_document(UploadDocumentRequest {
                customer_id: 5,
                document_type: DocumentType::NationalId,
                file_name: "id_front.png".into(),
                content_type: "image/png".into(),
                content: vec![1, 2, 3],
            })
            .unwrap();

        assert_eq!(document.status, DocumentStatus::Pending);
        assert_eq!(session.kyc_status(5).unwrap().status, KycStatus::UnderReview);
        assert_eq!(session.pending_documents(PageRequest::default()).total_elements, 4);
    }

    #[test]
    fn review_updates_customer_status() {
        let mut session = session();

        session
            .review_document(4, KycReviewRequest { approved: true, notes: None })
            .unwrap();
        assert_eq!(session.kyc_status(3).unwrap().status, KycStatus::UnderReview);

        session
            .review_document(
                5,
                KycReviewRequest {
                    approved: true,
                    notes: Some("ok".into()),
                },
            )
            .unwrap();
        assert_eq!(session.kyc_status(3).unwrap().status, KycStatus::Verified);

        let err = session
            .review_document(5, KycReviewRequest { approved: false, notes: None })
            .unwrap_err();
        assert_eq!(err.status(), Some(409));

        session
            .review_document(3, KycReviewRequest { approved: false, notes: None })
            .unwrap();
        assert_eq!(session.kyc_status(2).unwrap().status, KycStatus::Rejected);
    }

    #[test]
    fn admin_filters() {
        let session = session();

        let verified = session.customers(CustomerQuery {
            kyc_status: Some(KycStatus::Verified),
            ..Default::default()
        });
        assert_eq!(
            verified.content.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 4]
        );

        let open = session.all_tickets(TicketQuery {
            status: Some(TicketStatus::Open),
            ..Default::default()
        });
        assert_eq!(
            open.content.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 4]
        );

        assert_eq!(session.all_transactions(PageRequest::new(0, 100)).total_elements, 12);
    }
}
