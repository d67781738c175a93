use soroban_sdk::{contracttype, Address};

// ─── Configuration ─────────────────────────────────────────────────────────

/// Collaborators and constants fixed at `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// The only address allowed to change modes, assets and reward rate.
    pub admin: Address,
    /// Receipt registry that issues one handle per position.
    pub receipt: Address,
    /// Asset that positions are denominated in and that deposits pull.
    pub staking_token: Address,
    /// Asset paid out by `claim` / `claim_all`.
    pub reward_token: Address,
    /// Price source for the staking token.
    pub oracle: Address,
    /// Divisor removing the oracle's fixed-point scaling (> 0).
    pub price_scale: i128,
}

/// Linear reward emission: `apr_bps` reward units per staked unit per year,
/// in basis points.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RewardSchedule {
    pub apr_bps: u32,
}

// ─── Mode table ────────────────────────────────────────────────────────────

/// Discount and lock schedule stored under a bond mode id.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BondMode {
    /// Discount in basis points (0..=10_000).
    pub discount_bps: u32,
    /// Lock period in seconds.
    pub lock_secs: u64,
}

/// A fully configured asset slot + bond mode pairing. Only produced by
/// `modes::resolve_terms`, never stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondTerms {
    pub asset_id: u32,
    pub asset: Address,
    pub mode_id: u32,
    pub discount_bps: u32,
    pub lock_secs: u64,
}

// ─── Positions ─────────────────────────────────────────────────────────────

/// Asset slot and bond mode a bonded position was opened under.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BondOrigin {
    pub asset_id: u32,
    pub mode_id: u32,
}

/// How a position was opened.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PositionKind {
    /// Principal asset converted through the oracle at a discount.
    Bonded(BondOrigin),
    /// Staking asset supplied directly, no discount.
    Deposited,
}

/// One locked stake, keyed by its receipt id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// Receipt holder at open time. Claims check the registry's current holder.
    pub owner: Address,
    /// Staking-equivalent value, always > 0.
    pub amount: i128,
    /// Ledger timestamp at open.
    pub start_time: u64,
    /// `start_time + lock`.
    pub end_time: u64,
    /// Last reward settlement; starts at `start_time`.
    pub last_claim: u64,
    pub kind: PositionKind,
}

/// Staking-asset value the pool has committed to open positions.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reserves {
    /// Sum of `amount` over bonded positions.
    pub bonded: i128,
    /// Sum of `amount` over deposited positions.
    pub deposited: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RewardStats {
    /// Cumulative reward paid out.
    pub total_paid: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
pub enum DataKey {
    /// PoolConfig.
    Config,
    /// RewardSchedule.
    RewardSchedule,
    /// Reserves.
    Reserves,
    /// RewardStats.
    RewardStats,
    /// Principal asset accepted under an asset slot.
    Asset(u32),
    /// BondMode stored under a mode id.
    Mode(u32),
    /// Position bound to a receipt id.
    Position(u64),
}
