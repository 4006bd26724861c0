use anchor_lang::prelude::*;
use anchor_spl::token::{self, accessor, TokenAccount, Transfer};

use crate::const_pda::const_authority::{VAULT_AUTHORITY_ID, VAULT_BUMP};
use crate::constants::VAULT_AUTHORITY;
use crate::errors::SaleError;
use crate::state::SaleRound;

/// The two assets a sale round moves around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// What buyers pay with and partners get paid in
    MainCurrency,
    /// What is being sold
    ProjectToken,
}

/// One side of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    /// The round's vault for the asset being moved
    Pool,
    /// A wallet outside the program
    Wallet(Pubkey),
}

/// External token ledger the sale engine requests transfers from.
///
/// The engine never tracks balances itself. Pull transfers out of a wallet
/// assume the wallet already authorized them.
pub trait Ledger {
    fn transfer(&mut self, asset: Asset, from: Party, to: Party, amount: u64) -> Result<()>;
}

struct WalletAccount<'info> {
    owner: Pubkey,
    asset: Asset,
    token_account: AccountInfo<'info>,
    /// Present when the wallet signed the instruction and can be debited
    signer: Option<AccountInfo<'info>>,
}

/// `Ledger` backed by SPL Token CPIs.
///
/// Vaults are debited with the vault authority PDA as signer, wallets with
/// their own signature.
pub struct SplLedger<'info> {
    token_program: AccountInfo<'info>,
    vault_authority: AccountInfo<'info>,
    vaults: Vec<(Asset, AccountInfo<'info>)>,
    wallets: Vec<WalletAccount<'info>>,
}

impl<'info> SplLedger<'info> {
    pub fn new(
        token_program: AccountInfo<'info>,
        vault_authority: AccountInfo<'info>,
    ) -> Result<Self> {
        require_keys_eq!(
            vault_authority.key(),
            VAULT_AUTHORITY_ID,
            SaleError::InvalidVault
        );

        Ok(Self {
            token_program,
            vault_authority,
            vaults: Vec::new(),
            wallets: Vec::new(),
        })
    }

    pub fn with_vault(mut self, asset: Asset, vault: AccountInfo<'info>) -> Self {
        self.vaults.push((asset, vault));
        self
    }

    pub fn with_wallet(
        mut self,
        owner: Pubkey,
        asset: Asset,
        token_account: AccountInfo<'info>,
        signer: Option<AccountInfo<'info>>,
    ) -> Self {
        self.wallets.push(WalletAccount {
            owner,
            asset,
            token_account,
            signer,
        });
        self
    }

    /// Attach the partners' main currency accounts, passed as remaining
    /// accounts in partner table order.
    pub fn with_partner_accounts(
        mut self,
        sale_round: &SaleRound,
        accounts: &[AccountInfo<'info>],
    ) -> Result<Self> {
        require!(
            accounts.len() == sale_round.partners.len(),
            SaleError::InvalidPartnerAccount
        );

        for (partner, info) in sale_round.partners.iter().zip(accounts) {
            require_keys_eq!(*info.owner, token::ID, SaleError::InvalidPartnerAccount);

            let token_account = {
                let data = info.try_borrow_data()?;
                TokenAccount::try_deserialize(&mut &data[..])?
            };

            require_keys_eq!(
                token_account.mint,
                sale_round.main_mint,
                SaleError::InvalidPartnerAccount
            );
            require_keys_eq!(
                token_account.owner,
                partner.partner,
                SaleError::InvalidPartnerAccount
            );

            self.wallets.push(WalletAccount {
                owner: partner.partner,
                asset: Asset::MainCurrency,
                token_account: info.clone(),
                signer: None,
            });
        }

        Ok(self)
    }

    fn vault(&self, asset: Asset) -> Result<&AccountInfo<'info>> {
        self.vaults
            .iter()
            .find(|(vault_asset, _)| *vault_asset == asset)
            .map(|(_, vault)| vault)
            .ok_or_else(|| error!(SaleError::InvalidVault))
    }

    fn wallet(&self, asset: Asset, owner: &Pubkey) -> Result<&WalletAccount<'info>> {
        self.wallets
            .iter()
            .find(|wallet| wallet.asset == asset && wallet.owner == *owner)
            .ok_or_else(|| error!(SaleError::TransferFailed))
    }

    fn destination(&self, asset: Asset, to: Party) -> Result<AccountInfo<'info>> {
        match to {
            Party::Pool => Ok(self.vault(asset)?.clone()),
            Party::Wallet(owner) => Ok(self.wallet(asset, &owner)?.token_account.clone()),
        }
    }
}

impl<'info> Ledger for SplLedger<'info> {
    fn transfer(&mut self, asset: Asset, from: Party, to: Party, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        let destination = self.destination(asset, to)?;

        match from {
            Party::Pool => {
                let vault = self.vault(asset)?.clone();
                require!(
                    accessor::amount(&vault)? >= amount,
                    SaleError::TransferFailed
                );

                let signer_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY, &[VAULT_BUMP]]];
                token::transfer(
                    CpiContext::new_with_signer(
                        self.token_program.clone(),
                        Transfer {
                            from: vault,
                            to: destination,
                            authority: self.vault_authority.clone(),
                        },
                        signer_seeds,
                    ),
                    amount,
                )
            }
            Party::Wallet(owner) => {
                let wallet = self.wallet(asset, &owner)?;
                let signer = wallet
                    .signer
                    .clone()
                    .ok_or_else(|| error!(SaleError::TransferFailed))?;
                let source = wallet.token_account.clone();
                require!(
                    accessor::amount(&source)? >= amount,
                    SaleError::TransferFailed
                );

                token::transfer(
                    CpiContext::new(
                        self.token_program.clone(),
                        Transfer {
                            from: source,
                            to: destination,
                            authority: signer,
                        },
                    ),
                    amount,
                )
            }
        }
    }
}
