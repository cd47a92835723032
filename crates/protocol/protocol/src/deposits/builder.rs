//! Builds [`TxDeposit`]s carrying system reports.

use alloc::vec::Vec;
use alloy_eips::eip2718::Encodable2718;
use alloy_primitives::{Address, B256, Bytes, TxKind, U256, address};
use op_alloy_consensus::{DepositSourceDomain, L1InfoDepositSource, TxDeposit};

use crate::{
    BurnReport, DepositError, DepositShape, L1BlockFields, PriceReport, PricePoint, PriceSource,
};

/// Addresses of the system accounts that send system deposits.
#[derive(Debug, Clone, Copy)]
pub struct SystemAddresses;

impl SystemAddresses {
    /// The depositor account that every system deposit is sent from.
    pub const DEPOSITOR_ACCOUNT: Address = address!("DeaDDEaDDeAdDeAdDEAdDEaddeAddEAdDEAd0001");
}

/// A price deposit, along with the report and price it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceDeposit {
    /// The report carried by the deposit.
    pub report: PriceReport,
    /// The price point returned by the source.
    ///
    /// A [`PricePoint::Stale`] point means the deposit reports a fallback price.
    pub point: PricePoint,
    /// The deposit transaction.
    pub tx: TxDeposit,
}

impl PriceDeposit {
    /// Returns `true` if the deposit reports a fallback price.
    pub const fn is_stale(&self) -> bool {
        self.point.is_stale()
    }
}

/// Builds system deposits for L1 blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepositBuilder;

impl DepositBuilder {
    /// Builds the L1 burn deposit for a block.
    pub fn burn_deposit<B: L1BlockFields>(
        sequence_number: u64,
        block: &B,
        regolith: bool,
    ) -> Result<(BurnReport, TxDeposit), DepositError> {
        let report = BurnReport::compute(block)?;
        let tx = Self::system_deposit(
            block.hash(),
            sequence_number,
            BurnReport::REPORTER,
            report.encode_calldata(),
            regolith,
        );

        info!(
            target: "deposits",
            to = %BurnReport::REPORTER,
            number = report.number,
            burn = report.burn,
            "Built l1 burn deposit"
        );
        Ok((report, tx))
    }

    /// Fetches a price from `source` and builds the price deposit for a block.
    pub async fn price_deposit<S, B>(
        source: &S,
        sequence_number: u64,
        block: &B,
        regolith: bool,
    ) -> Result<PriceDeposit, DepositError>
    where
        S: PriceSource + ?Sized,
        B: L1BlockFields,
    {
        let oracle = source.oracle();
        let point = source.fetch_price().await?;
        let report = PriceReport::new(block.number(), point.price());
        let to = oracle.reporter_address();
        let tx = Self::system_deposit(
            block.hash(),
            sequence_number,
            to,
            report.encode_calldata(),
            regolith,
        );

        info!(
            target: "deposits",
            %oracle,
            %to,
            number = block.number(),
            price = %report.price,
            stale = point.is_stale(),
            "Built price deposit"
        );
        Ok(PriceDeposit { report, point, tx })
    }

    /// Wraps reporter calldata into a system deposit sent from the depositor account.
    pub fn system_deposit(
        l1_block_hash: B256,
        sequence_number: u64,
        to: Address,
        input: Bytes,
        regolith: bool,
    ) -> TxDeposit {
        let source = DepositSourceDomain::L1Info(L1InfoDepositSource {
            l1_block_hash,
            seq_number: sequence_number,
        });
        let DepositShape { gas_limit, is_system_transaction } = DepositShape::resolve(regolith);

        TxDeposit {
            source_hash: source.source_hash(),
            from: SystemAddresses::DEPOSITOR_ACCOUNT,
            to: TxKind::Call(to),
            mint: 0,
            value: U256::ZERO,
            gas_limit,
            is_system_transaction,
            input,
        }
    }
}

/// Encodes a deposit into its EIP-2718 transport bytes.
pub fn deposit_bytes(tx: &TxDeposit) -> Bytes {
    let mut encoded = Vec::with_capacity(tx.encode_2718_len());
    tx.encode_2718(&mut encoded);
    encoded.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        FetchError, L1BlockRef, PriceOracle, PriceSourceError, SystemReport,
        test_utils::{MockPriceSource, test_block},
    };
    use alloy_eips::eip2718::Decodable2718;
    use alloy_primitives::b256;
    use op_alloy_consensus::{DEPOSIT_TX_TYPE_ID, OpTxEnvelope};
    use rstest::rstest;

    const WAD: u64 = 1_000_000_000_000_000_000;

    #[rstest]
    #[case::pre_regolith(false, 150_000_000, true)]
    #[case::regolith(true, 1_000_000, false)]
    fn test_burn_deposit_shape(
        #[case] regolith: bool,
        #[case] gas_limit: u64,
        #[case] is_system_transaction: bool,
    ) {
        let block = test_block().with_fees(7, 100);
        let (report, tx) = DepositBuilder::burn_deposit(3, &block, regolith).unwrap();

        assert_eq!(report, BurnReport { number: 42, burn: 700 });
        assert_eq!(tx.from, SystemAddresses::DEPOSITOR_ACCOUNT);
        assert_eq!(tx.to, TxKind::Call(BurnReport::REPORTER));
        assert_eq!(tx.mint, 0);
        assert_eq!(tx.value, U256::ZERO);
        assert_eq!(tx.gas_limit, gas_limit);
        assert_eq!(tx.is_system_transaction, is_system_transaction);
        assert_eq!(tx.input, report.encode_calldata());
    }

    #[test]
    fn test_burn_deposit_overflow_aborts() {
        let block = test_block().with_fees(u64::MAX, u64::MAX);
        let err = DepositBuilder::burn_deposit(0, &block, true).unwrap_err();
        assert!(matches!(err, DepositError::Burn(_)));
    }

    #[rstest]
    #[case::pre_regolith(false)]
    #[case::regolith(true)]
    #[tokio::test]
    async fn test_price_deposit_shape_for_every_oracle(#[case] regolith: bool) {
        let shape = DepositShape::resolve(regolith);
        for oracle in PriceOracle::ALL {
            let source = MockPriceSource::fresh(oracle, U256::from(WAD));
            let deposit =
                DepositBuilder::price_deposit(&source, 3, &test_block(), regolith).await.unwrap();

            assert_eq!(deposit.tx.to, TxKind::Call(oracle.reporter_address()));
            assert_eq!(deposit.tx.gas_limit, shape.gas_limit);
            assert_eq!(deposit.tx.is_system_transaction, shape.is_system_transaction);
        }
    }

    #[tokio::test]
    async fn test_price_deposit_end_to_end() {
        let block = test_block();
        let source = MockPriceSource::fresh(PriceOracle::Chainlink, U256::from(WAD));

        let deposit = DepositBuilder::price_deposit(&source, 3, &block, false).await.unwrap();

        assert!(!deposit.is_stale());
        assert_eq!(deposit.tx.input.len(), 68);
        assert_eq!(
            PriceReport::decode_calldata(&deposit.tx.input),
            Ok(PriceReport { number: U256::from(42), price: U256::from(WAD) })
        );
        assert_eq!(deposit.tx.to, TxKind::Call(PriceOracle::CHAINLINK_REPORTER));

        let source = DepositSourceDomain::L1Info(L1InfoDepositSource {
            l1_block_hash: block.hash,
            seq_number: 3,
        });
        assert_eq!(deposit.tx.source_hash, source.source_hash());
    }

    #[tokio::test]
    async fn test_price_deposit_reports_stale_fallback() {
        let point = PricePoint::Stale { price: U256::from(7), cause: FetchError::EmptyReading };
        let source = MockPriceSource::new(PriceOracle::Redstone, Ok(point.clone()));

        let deposit = DepositBuilder::price_deposit(&source, 0, &test_block(), true).await.unwrap();

        assert!(deposit.is_stale());
        assert_eq!(deposit.point, point);
        assert_eq!(deposit.report.price, U256::from(7));
    }

    #[tokio::test]
    async fn test_price_deposit_without_fallback_aborts() {
        let err = PriceSourceError::NoFallbackAvailable {
            oracle: PriceOracle::Coingecko,
            cause: FetchError::Status(503),
        };
        let source = MockPriceSource::new(PriceOracle::Coingecko, Err(err.clone()));

        let result = DepositBuilder::price_deposit(&source, 0, &test_block(), true).await;
        assert_eq!(result, Err(DepositError::Source(err)));
    }

    #[test]
    fn test_source_hash_depends_on_sequence_number() {
        let hash = b256!("392012032675be9f94aae5ab442de73c5f4fb1bf30fa7dd0d2442239899a40fc");
        let input = BurnReport::default().encode_calldata();
        let a = DepositBuilder::system_deposit(hash, 0, BurnReport::REPORTER, input.clone(), true);
        let b = DepositBuilder::system_deposit(hash, 1, BurnReport::REPORTER, input, true);
        assert_ne!(a.source_hash, b.source_hash);
    }

    #[test]
    fn test_deposit_bytes_roundtrip() {
        let block = L1BlockRef::new(1, B256::repeat_byte(0x11)).with_fees(3, 5);
        let (report, tx) = DepositBuilder::burn_deposit(2, &block, true).unwrap();

        let bytes = deposit_bytes(&tx);
        assert_eq!(bytes[0], DEPOSIT_TX_TYPE_ID);

        let envelope = OpTxEnvelope::decode_2718(&mut bytes.as_ref()).unwrap();
        let OpTxEnvelope::Deposit(sealed) = envelope else { panic!("expected a deposit") };
        assert_eq!(sealed.inner(), &tx);
        assert_eq!(SystemReport::decode_calldata(&sealed.input), Ok(SystemReport::Burn(report)));
    }
}
