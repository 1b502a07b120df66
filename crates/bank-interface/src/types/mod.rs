mod account;
mod auth;
mod customer;
mod kyc;
mod page;
mod support;
mod transaction;

pub use account::*;
pub use auth::*;
pub use customer::*;
pub use kyc::*;
pub use page::*;
pub use support::*;
pub use transaction::*;
