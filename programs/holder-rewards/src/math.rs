use crate::constants::BPS_DENOMINATOR;

/// Calculates the distribution pool for a claimed amount
/// pool = floor(claimed * distribution_bps / 10000)
/// Returns None on overflow
pub fn distribution_pool(claimed_amount: u64, distribution_bps: u16) -> Option<u64> {
    (claimed_amount as u128)
        .checked_mul(distribution_bps as u128)?
        .checked_div(BPS_DENOMINATOR as u128)?
        .try_into()
        .ok()
}

/// Calculates a holder's share of total supply in basis points
/// Zero supply is guarded to 0 bps
pub fn supply_share_bps(balance: u64, total_supply: u64) -> u16 {
    if total_supply == 0 {
        return 0;
    }
    let bps = (balance as u128 * BPS_DENOMINATOR as u128) / total_supply as u128;
    bps.min(BPS_DENOMINATOR as u128) as u16
}

/// Calculates retention against the holder's baseline balance
/// retention = floor(current * 10000 / initial), capped at 10000 bps.
/// A zero baseline on a previously seen holder counts as 0% retention.
pub fn retention_bps(current_balance: u64, initial_balance: u64) -> u16 {
    if initial_balance == 0 {
        return 0;
    }
    let bps = (current_balance as u128 * BPS_DENOMINATOR as u128) / initial_balance as u128;
    bps.min(BPS_DENOMINATOR as u128) as u16
}

/// Eligibility requires retaining at least (10000 - sell_threshold_bps)
/// of the baseline balance
pub fn retention_meets_threshold(retention_bps: u16, sell_threshold_bps: u16) -> bool {
    retention_bps >= BPS_DENOMINATOR as u16 - sell_threshold_bps.min(BPS_DENOMINATOR as u16)
}

/// Calculates a holder's proportional share of the distribution pool,
/// weighted against the eligible pool only (not total supply)
/// share = floor(pool * balance / eligible_weight)
/// Returns None when the eligible weight is zero or on overflow
pub fn holder_share(pool: u64, holder_balance: u64, eligible_weight: u64) -> Option<u64> {
    if eligible_weight == 0 {
        return None;
    }
    (pool as u128)
        .checked_mul(holder_balance as u128)?
        .checked_div(eligible_weight as u128)?
        .try_into()
        .ok()
}

/// Calculates a holder's share of the eligible pool in basis points
pub fn eligible_share_bps(holder_balance: u64, eligible_weight: u64) -> Option<u16> {
    if eligible_weight == 0 {
        return None;
    }
    let bps = (holder_balance as u128 * BPS_DENOMINATOR as u128) / eligible_weight as u128;
    Some(bps.min(BPS_DENOMINATOR as u128) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_is_percentage_of_claimed() {
        // 30% of 10.0 tokens (9 decimals)
        assert_eq!(distribution_pool(10_000_000_000, 3000), Some(3_000_000_000));
        // 100%
        assert_eq!(distribution_pool(1_000_000, 10000), Some(1_000_000));
        // 0%
        assert_eq!(distribution_pool(1_000_000, 0), Some(0));
    }

    #[test]
    fn pool_rounds_down() {
        // 33.33% of 100 = 33.33, floors to 33
        assert_eq!(distribution_pool(100, 3333), Some(33));
        // 1 bps of 99 = 0.0099, floors to 0
        assert_eq!(distribution_pool(99, 1), Some(0));
    }

    #[test]
    fn pool_max_values() {
        assert_eq!(distribution_pool(u64::MAX, 10000), Some(u64::MAX));
        let expected = (u64::MAX as u128 * 3000 / 10000) as u64;
        assert_eq!(distribution_pool(u64::MAX, 3000), Some(expected));
    }

    #[test]
    fn supply_share_zero_supply_guarded() {
        assert_eq!(supply_share_bps(1_000, 0), 0);
    }

    #[test]
    fn supply_share_normal() {
        assert_eq!(supply_share_bps(700, 1000), 7000);
        assert_eq!(supply_share_bps(300, 1000), 3000);
        assert_eq!(supply_share_bps(1000, 1000), 10000);
        assert_eq!(supply_share_bps(0, 1000), 0);
    }

    #[test]
    fn retention_first_baseline_is_full() {
        // holder still holds the full baseline
        assert_eq!(retention_bps(500, 500), 10000);
    }

    #[test]
    fn retention_half_sold() {
        assert_eq!(retention_bps(300, 600), 5000);
        assert_eq!(retention_bps(150, 600), 2500);
    }

    #[test]
    fn retention_increase_is_capped() {
        // holder bought more; retention capped at 100%
        assert_eq!(retention_bps(1200, 600), 10000);
    }

    #[test]
    fn retention_zero_baseline_is_zero() {
        assert_eq!(retention_bps(1_000, 0), 0);
        assert_eq!(retention_bps(0, 0), 0);
    }

    #[test]
    fn threshold_default_requires_seventy_percent() {
        // default threshold 3000 bps => 7000 bps retention required
        assert!(retention_meets_threshold(10000, 3000));
        assert!(retention_meets_threshold(7000, 3000));
        assert!(!retention_meets_threshold(6999, 3000));
        assert!(!retention_meets_threshold(5000, 3000));
        assert!(!retention_meets_threshold(0, 3000));
    }

    #[test]
    fn threshold_extremes() {
        // threshold 0 => only full retention qualifies
        assert!(retention_meets_threshold(10000, 0));
        assert!(!retention_meets_threshold(9999, 0));
        // threshold 10000 => everyone qualifies
        assert!(retention_meets_threshold(0, 10000));
    }

    #[test]
    fn share_is_renormalized_against_eligible_pool() {
        // eligible pool of 700 (a 300-balance holder was excluded):
        // the single eligible holder takes the entire pool
        assert_eq!(holder_share(3_000_000_000, 700, 700), Some(3_000_000_000));
    }

    #[test]
    fn share_splits_proportionally() {
        assert_eq!(holder_share(1_000, 700, 1000), Some(700));
        assert_eq!(holder_share(1_000, 300, 1000), Some(300));
    }

    #[test]
    fn share_zero_weight_rejected() {
        assert_eq!(holder_share(1_000, 0, 0), None);
        assert_eq!(holder_share(0, 100, 0), None);
    }

    #[test]
    fn shares_conserve_pool_within_rounding() {
        // residual from floor division stays below the holder count
        let pool: u64 = 1_000_003;
        let balances: [u64; 3] = [333, 333, 334];
        let weight: u64 = balances.iter().sum();
        let shares: Vec<u64> = balances
            .iter()
            .map(|b| holder_share(pool, *b, weight).unwrap())
            .collect();
        let distributed: u64 = shares.iter().sum();
        assert!(distributed <= pool);
        assert!((pool - distributed) < balances.len() as u64);
    }

    #[test]
    fn eligible_share_bps_renormalized() {
        // 700 of a 700-token eligible pool is 100% even though it was
        // only 70% of total supply
        assert_eq!(eligible_share_bps(700, 700), Some(10000));
        assert_eq!(eligible_share_bps(300, 1200), Some(2500));
        assert_eq!(eligible_share_bps(100, 0), None);
    }
}
