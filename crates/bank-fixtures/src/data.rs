use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use wtf_bank_interface::{
    Account, AccountStatus, AccountType, Customer, Decimal, DocumentStatus, DocumentType,
    KycDocument, KycStatus, Role, SupportTicket, TicketPriority, TicketStatus, Transaction,
    TransactionStatus, TransactionType,
};

pub const DEMO_EMAIL: &str = "demo@wtfbank.com";
pub const DEMO_PASSWORD: &str = "demo123";
pub const DEMO_CUSTOMER_ID: i64 = 1;

pub const ADMIN_EMAIL: &str = "admin@wtfbank.com";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// The canonical sample data. Never mutated; the mock backend works on a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureSet {
    pub customers: Vec<Customer>,
    pub admins: Vec<AdminProfile>,
    pub credentials: Vec<Credential>,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub documents: Vec<KycDocument>,
    pub tickets: Vec<SupportTicket>,
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self::sample()
    }
}

impl FixtureSet {
    pub fn sample() -> Self {
        Self {
            customers: customers(),
            admins: admins(),
            credentials: credentials(),
            accounts: accounts(),
            transactions: transactions(),
            documents: documents(),
            tickets: tickets(),
        }
    }

    pub fn accounts_of(&self, customer_id: i64) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .collect()
    }

    pub fn customer(&self, customer_id: i64) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == customer_id)
    }
}

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn born(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: DEMO_EMAIL.into(),
            phone: Some("+1-555-0101".into()),
            address: Some("123 Main Street, New York, NY 10001".into()),
            date_of_birth: born(1990, 5, 15),
            kyc_status: KycStatus::Verified,
            created_at: ts(2024, 1, 15, 9, 30),
        },
        Customer {
            id: 2,
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@example.com".into(),
            phone: Some("+1-555-0102".into()),
            address: Some("456 Oak Avenue, Los Angeles, CA 90001".into()),
            date_of_birth: born(1985, 8, 22),
            kyc_status: KycStatus::Pending,
            created_at: ts(2024, 2, 20, 14, 15),
        },
        Customer {
            id: 3,
            first_name: "Robert".into(),
            last_name: "Johnson".into(),
            email: "robert.johnson@example.com".into(),
            phone: Some("+1-555-0103".into()),
            address: Some("789 Pine Road, Chicago, IL 60601".into()),
            date_of_birth: born(1978, 11, 3),
            kyc_status: KycStatus::UnderReview,
            created_at: ts(2024, 3, 5, 11, 0),
        },
        Customer {
            id: 4,
            first_name: "Emily".into(),
            last_name: "Davis".into(),
            email: "emily.davis@example.com".into(),
            phone: Some("+1-555-0104".into()),
            address: Some("321 Elm Street, Houston, TX 77001".into()),
            date_of_birth: born(1992, 2, 28),
            kyc_status: KycStatus::Verified,
            created_at: ts(2024, 3, 18, 16, 45),
        },
        Customer {
            id: 5,
            first_name: "Michael".into(),
            last_name: "Brown".into(),
            email: "michael.brown@example.com".into(),
            phone: Some("+1-555-0105".into()),
            address: Some("654 Maple Drive, Phoenix, AZ 85001".into()),
            date_of_birth: born(1988, 7, 9),
            kyc_status: KycStatus::Rejected,
            created_at: ts(2024, 4, 2, 10, 20),
        },
    ]
}

pub fn admins() -> Vec<AdminProfile> {
    vec![AdminProfile {
        id: 100,
        first_name: "System".into(),
        last_name: "Administrator".into(),
        email: ADMIN_EMAIL.into(),
    }]
}

pub fn credentials() -> Vec<Credential> {
    let credential = |email: &str, password: &str, role, user_id| Credential {
        email: email.into(),
        password: password.into(),
        role,
        user_id,
    };

    vec![
        credential(DEMO_EMAIL, DEMO_PASSWORD, Role::Customer, DEMO_CUSTOMER_ID),
        credential("jane.smith@example.com", "password123", Role::Customer, 2),
        credential(ADMIN_EMAIL, ADMIN_PASSWORD, Role::Admin, 100),
    ]
}

pub fn accounts() -> Vec<Account> {
    let account = |id, number: &str, account_type, cents, status, customer_id, created_at| Account {
        id,
        account_number: number.into(),
        account_type,
        balance: usd(cents),
        currency: "USD".into(),
        status,
        customer_id,
        created_at,
    };

    use AccountStatus::*;
    use AccountType::*;

    vec![
        account(1, "WTF1000000001", Checking, 524_050, Active, 1, ts(2024, 1, 15, 10, 0)),
        account(2, "WTF1000000002", Savings, 1_500_000, Active, 1, ts(2024, 1, 15, 10, 5)),
        account(3, "WTF1000000003", Business, 3_275_025, Active, 1, ts(2024, 2, 1, 8, 0)),
        account(4, "WTF1000000004", Checking, 120_000, Active, 2, ts(2024, 2, 20, 15, 0)),
        account(5, "WTF1000000005", Savings, 890_000, Frozen, 3, ts(2024, 3, 5, 12, 0)),
        account(6, "WTF1000000006", Checking, 430_075, Active, 4, ts(2024, 3, 18, 17, 0)),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    let txn = |id: i64,
               account_id,
               transaction_type,
               amount,
               balance_after,
               description: &str,
               target: Option<&str>,
               created_at| Transaction {
        id,
        reference: format!("TXN{:010}", id),
        account_id,
        transaction_type,
        amount: usd(amount),
        balance_after: usd(balance_after),
        description: Some(description.into()),
        status: TransactionStatus::Completed,
        target_account_number: target.map(Into::into),
        created_at,
    };

    use TransactionType::*;

    vec![
        txn(1, 1, Deposit, 300_000, 300_000, "Salary deposit", None, ts(2024, 6, 1, 9, 0)),
        txn(2, 1, Withdrawal, 12_550, 287_450, "Grocery store", None, ts(2024, 6, 3, 18, 20)),
        txn(3, 1, Withdrawal, 8_999, 278_451, "Electric bill", None, ts(2024, 6, 5, 7, 45)),
        txn(4, 1, Deposit, 300_000, 578_451, "Salary deposit", None, ts(2024, 7, 1, 9, 0)),
        txn(
            5,
            1,
            Transfer,
            50_000,
            528_451,
            "Transfer to savings",
            Some("WTF1000000002"),
            ts(2024, 7, 2, 12, 0),
        ),
        txn(6, 1, Withdrawal, 4_401, 524_050, "Coffee subscription", None, ts(2024, 7, 4, 8, 10)),
        txn(7, 2, Deposit, 1_450_000, 1_450_000, "Initial deposit", None, ts(2024, 1, 15, 10, 5)),
        txn(8, 2, Deposit, 50_000, 1_500_000, "Transfer from checking", None, ts(2024, 7, 2, 12, 0)),
        txn(9, 3, Deposit, 3_275_025, 3_275_025, "Client payment", None, ts(2024, 5, 12, 14, 30)),
        txn(10, 4, Deposit, 150_000, 150_000, "Initial deposit", None, ts(2024, 2, 20, 15, 0)),
        txn(11, 4, Withdrawal, 30_000, 120_000, "Rent share", None, ts(2024, 6, 28, 20, 0)),
        txn(12, 6, Deposit, 430_075, 430_075, "Payroll", None, ts(2024, 6, 15, 9, 0)),
    ]
}

pub fn documents() -> Vec<KycDocument> {
    let doc = |id,
               customer_id,
               document_type,
               file_name: &str,
               status: DocumentStatus,
               uploaded_at: DateTime<Utc>,
               notes: Option<&str>| KycDocument {
        id,
        customer_id,
        document_type,
        file_name: file_name.into(),
        status,
        uploaded_at,
        reviewed_at: (status != DocumentStatus::Pending)
            .then(|| uploaded_at + chrono::TimeDelta::days(1)),
        review_notes: notes.map(Into::into),
    };

    use DocumentStatus::*;
    use DocumentType::*;

    vec![
        doc(
            1,
            1,
            Passport,
            "passport_john_doe.pdf",
            Approved,
            ts(2024, 1, 16, 10, 0),
            Some("Document verified"),
        ),
        doc(
            2,
            1,
            UtilityBill,
            "utility_bill_jan.pdf",
            Approved,
            ts(2024, 1, 16, 10, 5),
            Some("Address confirmed"),
        ),
        doc(
            3,
            2,
            DriversLicense,
            "license_jane_smith.jpg",
            Pending,
            ts(2024, 2, 21, 9, 0),
            None,
        ),
        doc(
            4,
            3,
            NationalId,
            "national_id_rjohnson.png",
            Pending,
            ts(2024, 3, 6, 13, 0),
            None,
        ),
        doc(
            5,
            3,
            UtilityBill,
            "bank_statement_march.pdf",
            Pending,
            ts(2024, 3, 6, 13, 10),
            None,
        ),
        doc(
            6,
            5,
            Passport,
            "passport_mbrown.jpg",
            Rejected,
            ts(2024, 4, 3, 11, 0),
            Some("Image is blurry"),
        ),
    ]
}

pub fn tickets() -> Vec<SupportTicket> {
    let ticket = |id,
                  customer_id,
                  subject: &str,
                  description: &str,
                  priority,
                  status,
                  created_at: DateTime<Utc>| SupportTicket {
        id,
        customer_id,
        subject: subject.into(),
        description: description.into(),
        priority,
        status,
        created_at,
        updated_at: created_at,
    };

    use TicketPriority::*;
    use TicketStatus::*;

    vec![
        ticket(
            1,
            1,
            "Card not working abroad",
            "My debit card was declined while travelling in Spain.",
            High,
            Resolved,
            ts(2024, 6, 10, 8, 30),
        ),
        ticket(
            2,
            1,
            "Statement download",
            "The PDF statement for June fails to download.",
            Low,
            Open,
            ts(2024, 7, 5, 19, 0),
        ),
        ticket(
            3,
            2,
            "KYC verification status",
            "I uploaded my license two weeks ago and it is still pending.",
            Medium,
            InProgress,
            ts(2024, 3, 7, 12, 0),
        ),
        ticket(
            4,
            4,
            "Increase transfer limit",
            "I need to send a larger payment for my rent deposit.",
            Medium,
            Open,
            ts(2024, 7, 1, 16, 40),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let set = FixtureSet::sample();

        let unique = |ids: Vec<i64>| ids.len() == ids.iter().collect::<HashSet<_>>().len();

        assert!(unique(set.customers.iter().map(|c| c.id).collect()));
        assert!(unique(set.accounts.iter().map(|a| a.id).collect()));
        assert!(unique(set.transactions.iter().map(|t| t.id).collect()));
        assert!(unique(set.documents.iter().map(|d| d.id).collect()));
        assert!(unique(set.tickets.iter().map(|t| t.id).collect()));
    }

    #[test]
    fn references_resolve() {
        let set = FixtureSet::sample();

        for account in &set.accounts {
            assert!(set.customer(account.customer_id).is_some(), "{account:?}");
        }
        for txn in &set.transactions {
            assert!(set.accounts.iter().any(|a| a.id == txn.account_id), "{txn:?}");
        }
        for doc in &set.documents {
            assert!(set.customer(doc.customer_id).is_some(), "{doc:?}");
        }
        for ticket in &set.tickets {
            assert!(set.customer(ticket.customer_id).is_some(), "{ticket:?}");
        }
    }

    #[test]
    fn balances_match_latest_transaction() {
        let set = FixtureSet::sample();

        for account in &set.accounts {
            let latest = set
                .transactions
                .iter()
                .filter(|t| t.account_id == account.id)
                .max_by_key(|t| t.created_at);
            if let Some(latest) = latest {
                assert_eq!(latest.balance_after, account.balance, "{}", account.account_number);
            }
        }
    }

    #[test]
    fn demo_login_is_verified_customer() {
        let set = FixtureSet::sample();
        let demo = set
            .credentials
            .iter()
            .find(|c| c.email == DEMO_EMAIL)
            .unwrap();

        assert_eq!(demo.password, DEMO_PASSWORD);
        assert_eq!(demo.role, Role::Customer);
        assert_eq!(
            set.customer(demo.user_id).unwrap().kyc_status,
            KycStatus::Verified
        );
        assert_eq!(set.accounts_of(DEMO_CUSTOMER_ID).len(), 3);
    }
}
