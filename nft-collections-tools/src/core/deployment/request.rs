// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::TransactionRequest,
};

use super::DeploymentError;
use crate::utils::color::DebugColor;

/// Contract creation transaction.
///
/// Gas limit and EIP-1559 fees are left to the provider's gas filler unless a max fee per gas is
/// configured, in which case the node's suggested tip is kept below that cap.
#[derive(Debug)]
pub struct DeploymentRequest {
    tx: TransactionRequest,
    max_fee_per_gas_wei: Option<u128>,
}

impl DeploymentRequest {
    pub fn new(sender: Address, code: Bytes, max_fee_per_gas_wei: Option<u128>) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(code),
            max_fee_per_gas_wei,
        }
    }

    pub fn tx(&self) -> &TransactionRequest {
        &self.tx
    }

    /// Applies the configured fee cap, if any.
    pub async fn priced(
        self,
        provider: &impl Provider,
    ) -> Result<TransactionRequest, DeploymentError> {
        let mut tx = self.tx;
        if let Some(max_fee_per_gas) = self.max_fee_per_gas_wei {
            let tip = provider.get_max_priority_fee_per_gas().await?;
            tx.max_fee_per_gas = Some(max_fee_per_gas);
            tx.max_priority_fee_per_gas = Some(tip.min(max_fee_per_gas));
        }
        Ok(tx)
    }

    /// Prices and submits the transaction without waiting for it to be mined.
    pub async fn send(
        self,
        provider: &impl Provider,
    ) -> Result<PendingTransactionBuilder<Ethereum>, DeploymentError> {
        let tx = self.priced(provider).await?;
        let pending = provider.send_transaction(tx).await?;
        debug!(@grey, "sent deploy tx: {}", pending.tx_hash().debug_lavender());
        Ok(pending)
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{address, bytes, TxKind, U256},
        providers::ProviderBuilder,
        transports::mock::Asserter,
    };

    use super::*;

    const SENDER: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const GWEI: u128 = 1_000_000_000;

    fn mocked() -> (Asserter, impl Provider) {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone());
        (asserter, provider)
    }

    #[test]
    fn builds_creation_tx() {
        let req = DeploymentRequest::new(SENDER, bytes!("6001600c60003960016000f300"), None);
        let tx = req.tx();
        assert_eq!(tx.from, Some(SENDER));
        assert_eq!(tx.to, Some(TxKind::Create));
        assert_eq!(
            tx.input.input(),
            Some(&bytes!("6001600c60003960016000f300"))
        );
        assert_eq!(tx.value, None);
    }

    #[tokio::test]
    async fn leaves_fees_to_the_gas_filler() {
        let (_asserter, provider) = mocked();
        let tx = DeploymentRequest::new(SENDER, bytes!("00"), None)
            .priced(&provider)
            .await
            .unwrap();
        assert_eq!(tx.gas, None);
        assert_eq!(tx.gas_price, None);
        assert_eq!(tx.max_fee_per_gas, None);
        assert_eq!(tx.max_priority_fee_per_gas, None);
    }

    #[tokio::test]
    async fn max_fee_keeps_suggested_tip() {
        let (asserter, provider) = mocked();
        asserter.push_success(&U256::from(3 * GWEI / 2));
        let tx = DeploymentRequest::new(SENDER, bytes!("00"), Some(30 * GWEI))
            .priced(&provider)
            .await
            .unwrap();
        assert_eq!(tx.max_fee_per_gas, Some(30 * GWEI));
        assert_eq!(tx.max_priority_fee_per_gas, Some(3 * GWEI / 2));
    }

    #[tokio::test]
    async fn tip_is_capped_by_max_fee() {
        let (asserter, provider) = mocked();
        asserter.push_success(&U256::from(5 * GWEI));
        let tx = DeploymentRequest::new(SENDER, bytes!("00"), Some(2 * GWEI))
            .priced(&provider)
            .await
            .unwrap();
        assert_eq!(tx.max_fee_per_gas, Some(2 * GWEI));
        assert_eq!(tx.max_priority_fee_per_gas, Some(2 * GWEI));
    }
}
