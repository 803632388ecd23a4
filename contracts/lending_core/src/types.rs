//! Data model and storage keys for the lending core contract.

use soroban_sdk::{contracttype, Address};

/// Lifecycle status of an IOU.
///
/// Only `Active -> Received -> Repaid` is reachable through contract
/// operations. `Canceled` and `Overdue` are reserved tags carried over from
/// the protocol design with no assigned transition; they must not be
/// produced until their semantics are decided.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IouStatus {
    Active = 0,
    Canceled = 1,
    Received = 2,
    Repaid = 3,
    Overdue = 4,
}

/// A user's membership state within a circle.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemberStatus {
    None = 0,
    Applying = 1,
    Refused = 2,
    Approved = 3,
}

/// Stored loan record. Immutable audit record, never deleted.
///
/// `debt_amount` grows with each `supply` up to `need_amount` and is frozen
/// as the disbursed principal at `claim`. `last_update_timestamp` is zero
/// until `repay`, where it becomes the accrual cutoff for lender payouts.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Iou {
    pub borrower: Address,
    pub reserve_asset: Address,
    pub need_amount: i128,
    pub min_start_amount: i128,
    pub min_investment_amount: i128,
    pub debt_amount: i128,
    /// Per-year borrow rate in ray (10^27) fixed point.
    pub borrow_rate: i128,
    pub circle_id: u64,
    /// End of the funding window; the loan term runs from here.
    pub start_time: u64,
    /// End of the loan term; penalty rates apply past this point.
    pub end_time: u64,
    pub last_update_timestamp: u64,
    pub status: IouStatus,
}

/// Caller-supplied terms for `create_iou`. The borrower is always forced to
/// the caller; funding progress and status are contract-owned.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IouTerms {
    pub reserve_asset: Address,
    pub need_amount: i128,
    pub min_start_amount: i128,
    pub min_investment_amount: i128,
    pub borrow_rate: i128,
    pub circle_id: u64,
    pub start_time: u64,
    pub end_time: u64,
}

/// Per-user profile tracked by the access registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserProfile {
    /// Count of the user's currently open loans (created, not yet repaid).
    pub active_iou_count: u32,
    /// Blacklisted users cannot originate, fund, claim, or be granted
    /// circle changes. Repay and withdraw stay available.
    pub blacklisted: bool,
}

impl UserProfile {
    pub fn empty() -> Self {
        UserProfile {
            active_iou_count: 0,
            blacklisted: false,
        }
    }
}

/// Global configuration, mutated only through the administrative relay.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Protocol fee taken from the disbursed principal, in basis points.
    pub borrow_fee_bps: u32,
    /// Share of the protocol fee paid to the circle admin, in percent.
    pub circles_admin_proportion: u32,
    /// Cap on a borrower's concurrently open IOUs.
    pub max_active_ious: u32,
    /// Grace window after `end_time` during which `penalty_rate_1` applies.
    pub late_period: u64,
    /// First penalty rate (ray, per year), applied during the late period.
    pub penalty_rate_1: i128,
    /// Second penalty rate (ray, per year), applied past the late period.
    /// Must be strictly greater than `penalty_rate_1`.
    pub penalty_rate_2: i128,
    /// Blocks every state-mutating operation except relay setters while set.
    pub paused: bool,
    /// When set, a member holding open IOUs cannot be removed from a circle.
    /// Off by default; preserved as a configurable check.
    pub check_open_ious_on_remove: bool,
}

/// Storage keys
#[contracttype]
pub enum DataKey {
    /// Administrative relay address (the only allowed configurator)
    Relay,
    /// Protocol treasury address for the fee remainder
    Treasury,
    /// Contract address of the chain's native asset
    NativeToken,
    /// Global configuration struct
    Config,
    /// Monotonically increasing circle id counter
    NextCircleId,
    /// Monotonically increasing IOU id counter
    NextIouId,
    /// Circle admin (circle_id -> Address)
    CircleAdmin(u64),
    /// Membership state ((circle_id, user) -> MemberStatus)
    Member(u64, Address),
    /// User profile (user -> UserProfile)
    Profile(Address),
    /// Loan record (iou_id -> Iou)
    Iou(u64),
    /// Accumulated lender contribution ((iou_id, lender) -> i128)
    Contribution(u64, Address),
}
