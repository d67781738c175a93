#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `PoolError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Asset slot, bond mode and pool parameter errors (codes 200-299).
    Configuration,
    /// Position opening and settlement errors (codes 300-399).
    Position,
    /// Receipt registry errors (codes 400-499).
    Receipt,
    /// Failures of external collaborators (codes 500-599).
    External,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  PoolError
/// @notice Canonical error enum shared by the bonding pool and receipt registry.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Configuration
///   300 - 399 : Position
///   400 - 499 : Receipt
///   500 - 599 : External
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the administrator, or not the current holder of the
    /// receipt it tries to claim.
    Unauthorized = 100,

    /// Receipt transfer attempted by an address that does not hold it.
    NotReceiptOwner = 101,

    // --- Configuration (200-299) ---
    /// The requested bond mode has no discount/lock schedule configured.
    InvalidMode = 200,

    /// The requested asset slot has no principal asset configured.
    InvalidAssetMode = 201,

    /// Discount must be in the range 0-10000 basis points.
    InvalidDiscount = 202,

    /// Oracle price scale must be strictly positive.
    InvalidPriceScale = 203,

    /// Reward rate exceeds the configured maximum.
    InvalidRewardRate = 204,

    // --- Position (300-399) ---
    /// Amount argument must be strictly positive (> 0).
    InvalidAmount = 300,

    /// Lock duration is outside the accepted range.
    InvalidDuration = 301,

    /// The pool does not hold enough staking asset to back the position.
    CapacityExceeded = 302,

    /// Caller balance or allowance is below the amount to pull.
    InsufficientFunds = 303,

    /// No position is bound to the given receipt id.
    PositionNotFound = 304,

    /// The pool's reward balance cannot cover the owed reward.
    InsufficientRewards = 305,

    // --- Receipt (400-499) ---
    /// No receipt exists for the given id or index.
    ReceiptNotFound = 400,

    // --- External (500-599) ---
    /// Price oracle is unreachable or reported a non-positive price.
    OracleUnavailable = 500,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every PoolError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for PoolError {
    fn category(&self) -> ErrorCategory {
        match self {
            PoolError::NotInitialized | PoolError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            PoolError::Unauthorized | PoolError::NotReceiptOwner => ErrorCategory::Authorization,

            PoolError::InvalidMode
            | PoolError::InvalidAssetMode
            | PoolError::InvalidDiscount
            | PoolError::InvalidPriceScale
            | PoolError::InvalidRewardRate => ErrorCategory::Configuration,

            PoolError::InvalidAmount
            | PoolError::InvalidDuration
            | PoolError::CapacityExceeded
            | PoolError::InsufficientFunds
            | PoolError::PositionNotFound
            | PoolError::InsufficientRewards => ErrorCategory::Position,

            PoolError::ReceiptNotFound => ErrorCategory::Receipt,

            PoolError::OracleUnavailable => ErrorCategory::External,

            PoolError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            PoolError::NotInitialized => "Contract has not been initialized",
            PoolError::AlreadyInitialized => "Contract has already been initialized",
            PoolError::Unauthorized => "Invalid owner",
            PoolError::NotReceiptOwner => "Sender does not hold this receipt",
            PoolError::InvalidMode => "Invalid mode",
            PoolError::InvalidAssetMode => "Invalid asset mode",
            PoolError::InvalidDiscount => "Discount bps must be in range 0-10000",
            PoolError::InvalidPriceScale => "Price scale must be strictly positive",
            PoolError::InvalidRewardRate => "Reward rate exceeds the maximum APR",
            PoolError::InvalidAmount => "Invalid amount",
            PoolError::InvalidDuration => "Invalid secs",
            PoolError::CapacityExceeded => "amounts are too much",
            PoolError::InsufficientFunds => "your assets are not enough",
            PoolError::PositionNotFound => "No position bound to this receipt",
            PoolError::InsufficientRewards => "Reward balance cannot cover the claim",
            PoolError::ReceiptNotFound => "Receipt does not exist",
            PoolError::OracleUnavailable => "Oracle price unavailable",
            PoolError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
