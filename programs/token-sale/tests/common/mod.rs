#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use token_sale::errors::SaleError;
use token_sale::state::{PurchaseRecord, RoundSetup, SaleRound};
use token_sale::utils::{Asset, Ledger, Party};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferLog {
    pub asset: Asset,
    pub from: Party,
    pub to: Party,
    pub amount: u64,
}

/// In-memory ledger. Transfers touching a rejected party fail, as do
/// transfers the source cannot cover.
#[derive(Default, Clone)]
pub struct MockLedger {
    balances: HashMap<(Asset, Party), u64>,
    rejected: HashSet<Party>,
    pub transfers: Vec<TransferLog>,
}

impl MockLedger {
    pub fn mint(&mut self, asset: Asset, party: Party, amount: u64) {
        *self.balances.entry((asset, party)).or_default() += amount;
    }

    pub fn balance(&self, asset: Asset, party: Party) -> u64 {
        self.balances.get(&(asset, party)).copied().unwrap_or_default()
    }

    pub fn reject(&mut self, party: Party) {
        self.rejected.insert(party);
    }

    pub fn accept(&mut self, party: Party) {
        self.rejected.remove(&party);
    }
}

impl Ledger for MockLedger {
    fn transfer(&mut self, asset: Asset, from: Party, to: Party, amount: u64) -> Result<()> {
        if self.rejected.contains(&from) || self.rejected.contains(&to) {
            return Err(ProgramError::InvalidAccountData.into());
        }

        let available = self.balance(asset, from);
        if available < amount {
            return Err(ProgramError::InsufficientFunds.into());
        }

        self.balances.insert((asset, from), available - amount);
        *self.balances.entry((asset, to)).or_default() += amount;
        self.transfers.push(TransferLog {
            asset,
            from,
            to,
            amount,
        });

        Ok(())
    }
}

pub fn error_code(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(e) => Some(e.error_code_number),
        _ => None,
    }
}

pub fn assert_sale_error<T: std::fmt::Debug>(result: Result<T>, expected: SaleError) {
    let code = u32::from(expected);
    let err = result.expect_err("operation should have failed");
    assert_eq!(
        error_code(&err),
        Some(code),
        "expected error code {code}, got {err:?}"
    );
}

/// A round with an owner, its partners and a ledger to trade against
pub struct Fixture {
    pub round: SaleRound,
    pub ledger: MockLedger,
    pub owner: Pubkey,
    pub partners: Vec<Pubkey>,
    pub now: i64,
}

impl Fixture {
    pub fn new(price: u64, minimum_purchase: u64, shares: &[u64]) -> Self {
        let owner = Pubkey::new_unique();
        let partners: Vec<Pubkey> = shares.iter().map(|_| Pubkey::new_unique()).collect();
        let now = 1_700_000_000;

        let mut round = SaleRound::default();
        round
            .initialize(
                RoundSetup {
                    owner,
                    main_mint: Pubkey::new_unique(),
                    project_mint: Pubkey::new_unique(),
                    main_vault: Pubkey::new_unique(),
                    project_vault: Pubkey::new_unique(),
                    price,
                    minimum_purchase,
                    bump: 255,
                },
                &partners,
                shares,
                now,
            )
            .expect("valid round");

        Self {
            round,
            ledger: MockLedger::default(),
            owner,
            partners,
            now,
        }
    }

    /// Mint `amount` project tokens to the owner and deposit them for sale
    pub fn supply(&mut self, amount: u64) {
        let owner = self.owner;
        self.ledger.mint(Asset::ProjectToken, Party::Wallet(owner), amount);
        self.round
            .add_supply(&owner, amount, owner, &mut self.ledger)
            .expect("supply added");
    }

    /// A fresh buyer holding `funds` main currency, with an empty record
    pub fn buyer(&mut self, funds: u64) -> PurchaseRecord {
        let buyer = Pubkey::new_unique();
        self.ledger.mint(Asset::MainCurrency, Party::Wallet(buyer), funds);
        PurchaseRecord {
            buyer,
            round: Pubkey::new_unique(),
            ..PurchaseRecord::default()
        }
    }

    pub fn buy(&mut self, record: &mut PurchaseRecord, amount: u64) -> Result<u64> {
        self.now += 1;
        self.round.buy_tokens(record, amount, self.now, &mut self.ledger)
    }

    pub fn claim(&mut self, record: &mut PurchaseRecord) -> Result<u64> {
        self.now += 1;
        self.round.claim_tokens(record, self.now, &mut self.ledger)
    }

    pub fn close(&mut self) -> Result<Vec<token_sale::state::Payout>> {
        self.now += 1;
        let owner = self.owner;
        self.round.close_round(&owner, self.now, &mut self.ledger)
    }

    pub fn main_balance(&self, party: Party) -> u64 {
        self.ledger.balance(Asset::MainCurrency, party)
    }

    pub fn project_balance(&self, party: Party) -> u64 {
        self.ledger.balance(Asset::ProjectToken, party)
    }
}
