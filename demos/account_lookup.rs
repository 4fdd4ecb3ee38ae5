//! Account lookup service showing layered wrapping and boundary replies.
//!
//! Run with: `cargo run --example account_lookup`

use coded_error::boundary::Reply;
use coded_error::prelude::*;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
enum StoreError {
    AccountNotFound,
    Database,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountNotFound => write!(f, "account not found"),
            Self::Database => write!(f, "database error"),
        }
    }
}

impl Error for StoreError {}

#[derive(Debug, Clone)]
struct Account {
    id: u32,
    name: &'static str,
}

const ACCOUNTS: [Account; 3] = [
    Account { id: 1, name: "account_1" },
    Account { id: 2, name: "account_2" },
    Account { id: 3, name: "account_3" },
];

// === Repository layer ===

fn account_one(id: u32) -> Result<Account, StoreError> {
    if let Some(account) = ACCOUNTS.iter().find(|a| a.id == id) {
        return Ok(account.clone());
    }
    if id == 500 {
        return Err(StoreError::Database);
    }
    Err(StoreError::AccountNotFound)
}

// === Handler layer ===

fn show_account(raw_id: &str) -> CodedResult<Account> {
    let id = raw_id.parse::<u32>().wrap_code(CODE_BAD_REQUEST)?;

    account_one(id).wrap_code_with(|e| match e {
        StoreError::AccountNotFound => CODE_NOT_FOUND,
        StoreError::Database => CODE_UNKNOWN,
    })
}

fn respond(raw_id: &str) {
    match show_account(raw_id) {
        Ok(account) => println!("200 {{\"id\":{},\"name\":\"{}\"}}", account.id, account.name),
        Err(err) => {
            println!("---------- log ----------\n{:#}", err);

            let reply = Reply::from_error(&err);
            if reply.is_server_error() {
                println!("---------- alert ----------\n{:#?}", err);
            }

            let body = serde_json::to_string(&reply.body).unwrap_or_default();
            println!("{} {}", reply.status, body);
        },
    }
}

fn main() {
    for raw_id in ["1", "abc", "42", "500"] {
        println!("=== GET /accounts/{raw_id}");
        respond(raw_id);
        println!();
    }
}
