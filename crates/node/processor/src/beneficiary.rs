//! Mining beneficiary selection.

use alloy_consensus::Header;
use alloy_primitives::Address;

/// Yields the address credited with execution fees and the block reward.
pub trait MiningBeneficiaryCalculator: Send + Sync {
    /// Beneficiary for the given header.
    fn beneficiary(&self, header: &Header) -> Address;
}

impl<F> MiningBeneficiaryCalculator for F
where
    F: Fn(&Header) -> Address + Send + Sync,
{
    fn beneficiary(&self, header: &Header) -> Address {
        self(header)
    }
}

/// Credits the header's coinbase directly (PoW and PoS mainnet).
#[derive(Clone, Copy, Debug, Default)]
pub struct CoinbaseBeneficiary;

impl MiningBeneficiaryCalculator for CoinbaseBeneficiary {
    fn beneficiary(&self, header: &Header) -> Address {
        header.beneficiary
    }
}

/// Credits a fixed address regardless of the header's coinbase field, for
/// authority-round networks where the signer differs from the coinbase.
#[derive(Clone, Copy, Debug)]
pub struct FixedBeneficiary(pub Address);

impl MiningBeneficiaryCalculator for FixedBeneficiary {
    fn beneficiary(&self, _header: &Header) -> Address {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coinbase_beneficiary_uses_header() {
        let miner = Address::repeat_byte(0xaa);
        let header = Header { beneficiary: miner, ..Default::default() };
        assert_eq!(CoinbaseBeneficiary.beneficiary(&header), miner);
    }

    #[test]
    fn fixed_beneficiary_ignores_header() {
        let signer = Address::repeat_byte(0xbb);
        let header = Header { beneficiary: Address::repeat_byte(0xaa), ..Default::default() };
        assert_eq!(FixedBeneficiary(signer).beneficiary(&header), signer);
    }

    #[test]
    fn closures_are_calculators() {
        let calculator = |header: &Header| header.beneficiary;
        let header = Header { beneficiary: Address::repeat_byte(1), ..Default::default() };
        assert_eq!(calculator.beneficiary(&header), Address::repeat_byte(1));
    }
}
