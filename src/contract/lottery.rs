use alloy::network::{EthereumWallet, ReceiptResponse};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use alloy::transports::http::reqwest::Url;
use alloy_primitives::{Address, TxHash, U256};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use super::{ContractDataSource, ContractError, ContractField, PurchaseFailure, Session};

sol! {
    #[sol(rpc)]
    interface Lottery {
        function RemainingTickets() external view returns (uint256);
        function CurrentWinningReward() external view returns (uint256);
        function ticketPrice() external view returns (uint256);
        function ticketCommission() external view returns (uint256);
        function expiration() external view returns (uint256);
        function BuyTickets() external payable;
    }
}

/// The deployed lottery, reached over JSON-RPC.
pub struct LotteryContract {
    instance: Lottery::LotteryInstance<DynProvider>,
    session: Session,
    purchase_timeout: Duration,
}

impl LotteryContract {
    /// Connect to `address` through `rpc_url`. Without a private key the
    /// contract is read-only and every purchase fails with `NoWallet`.
    pub fn connect(
        rpc_url: &str,
        address: Address,
        private_key: Option<&str>,
        purchase_timeout: Duration,
    ) -> Result<Self> {
        let url: Url = rpc_url
            .parse()
            .with_context(|| format!("invalid rpc url {rpc_url:?}"))?;

        let (provider, session) = match private_key {
            Some(key) => {
                let signer: PrivateKeySigner = key.parse().context("invalid private key")?;
                let session = Session::with_account(signer.address());
                let provider = ProviderBuilder::new()
                    .wallet(EthereumWallet::from(signer))
                    .connect_http(url)
                    .erased();
                (provider, session)
            }
            None => {
                let provider = ProviderBuilder::new().connect_http(url).erased();
                (provider, Session::read_only())
            }
        };

        info!(%address, account = ?session.account, "lottery contract ready");

        Ok(Self {
            instance: Lottery::new(address, provider),
            session,
            purchase_timeout,
        })
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    async fn submit(&self, value: U256) -> Result<TxHash, PurchaseFailure> {
        let pending = self
            .instance
            .BuyTickets()
            .value(value)
            .send()
            .await
            .map_err(|e| PurchaseFailure::from_message(&e.to_string()))?;

        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, %value, "purchase submitted");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| PurchaseFailure::Network(e.to_string()))?;

        if receipt.status() {
            Ok(tx_hash)
        } else {
            Err(PurchaseFailure::Rejected(format!("transaction {tx_hash} reverted")))
        }
    }
}

impl ContractDataSource for LotteryContract {
    async fn read(&self, field: ContractField) -> Result<U256, ContractError> {
        let result = match field {
            ContractField::RemainingTickets => self.instance.RemainingTickets().call().await,
            ContractField::CurrentWinningReward => self.instance.CurrentWinningReward().call().await,
            ContractField::TicketPrice => self.instance.ticketPrice().call().await,
            ContractField::TicketCommission => self.instance.ticketCommission().call().await,
            ContractField::Expiration => self.instance.expiration().call().await,
        };

        result.map_err(|e| ContractError::Read {
            field: field.name(),
            message: e.to_string(),
        })
    }

    async fn buy_tickets(&self, value: U256) -> Result<TxHash, PurchaseFailure> {
        if !self.session.is_connected() {
            return Err(PurchaseFailure::NoWallet);
        }

        // The transaction may still land after we give up; we only stop waiting.
        match tokio::time::timeout(self.purchase_timeout, self.submit(value)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(timeout = ?self.purchase_timeout, "purchase timed out");
                Err(PurchaseFailure::Timeout)
            }
        }
    }
}
