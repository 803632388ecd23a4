#![no_std]

//! Circle lending core: invitation-only lending circles and the IOU
//! lifecycle engine (fund, claim, repay, withdraw).
//!
//! A circle admin curates membership; approved members originate and fund
//! fixed-term, fixed-rate loans denominated in a chosen reserve asset.
//! Interest and late penalties accrue piecewise in ray fixed point
//! (see `accrual`), and value moves through the custody adapter
//! (see `custody`).
//!
//! # Reentrancy
//! Soroban token transfers do not call back into this contract. The
//! settlement ordering is still enforced by construction: every operation
//! persists its ledger mutation (status flip, contribution zeroing, counter
//! decrement) before invoking the custody adapter, so even a re-entrant
//! caller would observe post-settlement state.

mod accrual;
mod custody;
mod events;
mod types;


use shared_utils::{SafeMath, TimeUtils, Validation};
use soroban_sdk::{
    contract, contracterror, contractimpl, symbol_short, Address, Env, String,
};

use events::{CircleCreatedEvent, ClaimedEvent, IouCreatedEvent};
pub use types::{Config, Iou, IouStatus, IouTerms, MemberStatus, UserProfile};
use types::DataKey;

// ============================================================================
// Error Types
// ============================================================================

/// Contract errors for structured error handling
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LendingError {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Blocked by the global pause flag
    ContractPaused = 3,
    /// Caller lacks the required capability (not the relay)
    Unauthorized = 4,
    /// Caller or target is blacklisted
    Blacklisted = 5,
    /// Caller is not the circle's admin
    NotCircleAdmin = 6,
    /// No circle exists with the given id
    CircleNotFound = 7,
    /// Caller is not an approved member of the circle
    NotCircleMember = 8,
    /// Membership is not in the `None` state
    AlreadyApplied = 9,
    /// Membership is not in the `Applying` state
    NotApplying = 10,
    /// Membership is not in the `Approved` state
    NotApproved = 11,
    /// No IOU exists with the given id
    IouNotFound = 12,
    /// IOU is not in the status the operation requires
    InvalidStatus = 13,
    /// Caller is not the IOU's borrower
    NotBorrower = 14,
    /// Funding window has closed (at or past start time)
    FundingClosed = 15,
    /// Loan term has not started yet
    LoanNotStarted = 16,
    /// Start time must be strictly in the future
    StartTimeNotFuture = 17,
    /// End time must be strictly after start time
    InvalidTimeWindow = 18,
    /// Amount is zero, negative, or inconsistent with the terms
    InvalidAmount = 19,
    /// Contribution is below the per-contribution floor
    BelowMinInvestment = 20,
    /// Contribution would push funding past the need amount
    ExceedsNeedAmount = 21,
    /// Funding threshold not met
    ThresholdNotMet = 22,
    /// Borrower is at the cap of concurrently open IOUs
    TooManyActiveIous = 23,
    /// Member still holds open IOUs (removal guard enabled)
    HasOpenIous = 24,
    /// Configuration value out of bounds
    InvalidConfig = 25,
    /// Arithmetic overflow
    MathOverflow = 26,
}

#[contract]
pub struct LendingCoreContract;

#[contractimpl]
impl LendingCoreContract {
    // ========================================================================
    // Initialization & configuration (administrative relay only)
    // ========================================================================

    /// Initialize the contract.
    ///
    /// # Arguments
    /// * `relay` - The administrative relay, the only allowed configurator
    /// * `treasury` - Recipient of the protocol's share of claim fees
    /// * `native_token` - Contract address of the chain's native asset,
    ///   used by the custody adapter to select the transfer variant
    /// * `config` - Initial configuration (validated)
    pub fn initialize(
        e: Env,
        relay: Address,
        treasury: Address,
        native_token: Address,
        config: Config,
    ) -> Result<(), LendingError> {
        if e.storage().instance().has(&DataKey::Relay) {
            return Err(LendingError::AlreadyInitialized);
        }
        validate_config(&config)?;

        e.storage().instance().set(&DataKey::Relay, &relay);
        e.storage().instance().set(&DataKey::Treasury, &treasury);
        e.storage().instance().set(&DataKey::NativeToken, &native_token);
        e.storage().instance().set(&DataKey::Config, &config);
        e.storage().instance().set(&DataKey::NextCircleId, &0u64);
        e.storage().instance().set(&DataKey::NextIouId, &0u64);

        Ok(())
    }

    /// Set the protocol fee taken on claim, in basis points.
    pub fn set_borrow_fee_bps(e: Env, caller: Address, bps: u32) -> Result<(), LendingError> {
        require_relay(&e, &caller)?;
        let mut config = read_config(&e)?;
        config.borrow_fee_bps = bps;
        validate_config(&config)?;
        write_config(&e, &config);
        events::config_updated(&e, symbol_short!("fee_bps"));
        Ok(())
    }

    /// Set the circle admin's share of the claim fee, in percent.
    pub fn set_admin_proportion(e: Env, caller: Address, percent: u32) -> Result<(), LendingError> {
        require_relay(&e, &caller)?;
        let mut config = read_config(&e)?;
        config.circles_admin_proportion = percent;
        validate_config(&config)?;
        write_config(&e, &config);
        events::config_updated(&e, symbol_short!("admin_pct"));
        Ok(())
    }

    /// Set the cap on a borrower's concurrently open IOUs.
    pub fn set_max_active_ious(e: Env, caller: Address, max: u32) -> Result<(), LendingError> {
        require_relay(&e, &caller)?;
        let mut config = read_config(&e)?;
        config.max_active_ious = max;
        write_config(&e, &config);
        events::config_updated(&e, symbol_short!("max_ious"));
        Ok(())
    }

    /// Set the grace period after a loan's term end, in seconds.
    pub fn set_late_period(e: Env, caller: Address, late_period: u64) -> Result<(), LendingError> {
        require_relay(&e, &caller)?;
        let mut config = read_config(&e)?;
        config.late_period = late_period;
        write_config(&e, &config);
        events::config_updated(&e, symbol_short!("late_prd"));
        Ok(())
    }

    /// Set both penalty rates (ray per year). Requires `penalty_1 < penalty_2`.
    pub fn set_penalty_rates(
        e: Env,
        caller: Address,
        penalty_1: i128,
        penalty_2: i128,
    ) -> Result<(), LendingError> {
        require_relay(&e, &caller)?;
        let mut config = read_config(&e)?;
        config.penalty_rate_1 = penalty_1;
        config.penalty_rate_2 = penalty_2;
        validate_config(&config)?;
        write_config(&e, &config);
        events::config_updated(&e, symbol_short!("penalties"));
        Ok(())
    }

    /// Set or clear the global pause flag. While set, every state-mutating
    /// operation other than relay setters is rejected.
    pub fn set_paused(e: Env, caller: Address, paused: bool) -> Result<(), LendingError> {
        require_relay(&e, &caller)?;
        let mut config = read_config(&e)?;
        config.paused = paused;
        write_config(&e, &config);
        events::config_updated(&e, symbol_short!("paused"));
        Ok(())
    }

    /// Replace the protocol treasury address.
    pub fn set_treasury(e: Env, caller: Address, treasury: Address) -> Result<(), LendingError> {
        require_relay(&e, &caller)?;
        e.storage().instance().set(&DataKey::Treasury, &treasury);
        events::config_updated(&e, symbol_short!("treasury"));
        Ok(())
    }

    /// Toggle the guard refusing circle removal of members with open IOUs.
    pub fn set_open_iou_check(e: Env, caller: Address, enabled: bool) -> Result<(), LendingError> {
        require_relay(&e, &caller)?;
        let mut config = read_config(&e)?;
        config.check_open_ious_on_remove = enabled;
        write_config(&e, &config);
        events::config_updated(&e, symbol_short!("rm_check"));
        Ok(())
    }

    /// Flip a user's blacklist flag. No membership side effects.
    pub fn set_blacklist(e: Env, caller: Address, user: Address, flag: bool) -> Result<(), LendingError> {
        require_relay(&e, &caller)?;
        let mut profile = read_profile(&e, &user);
        profile.blacklisted = flag;
        write_profile(&e, &user, &profile);
        events::blacklist_set(&e, user, flag);
        Ok(())
    }

    // ========================================================================
    // Circles & membership
    // ========================================================================

    /// Create a new circle; the caller becomes its admin and an approved
    /// member. Returns the new circle id.
    pub fn create_circle(
        e: Env,
        caller: Address,
        name: String,
        desc: String,
    ) -> Result<u64, LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;
        require_not_blacklisted(&e, &caller)?;

        let circle_id = next_circle_id(&e);
        e.storage()
            .persistent()
            .set(&DataKey::CircleAdmin(circle_id), &caller);
        e.storage().persistent().set(
            &DataKey::Member(circle_id, caller.clone()),
            &MemberStatus::Approved,
        );

        events::circle_created(
            &e,
            CircleCreatedEvent {
                circle_id,
                admin: caller,
                name,
                desc,
            },
        );

        Ok(circle_id)
    }

    /// Transfer circle admin to another, non-blacklisted address.
    /// Membership state of both parties is unchanged.
    pub fn change_circle_admin(
        e: Env,
        caller: Address,
        circle_id: u64,
        new_admin: Address,
    ) -> Result<(), LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;
        require_circle_admin(&e, circle_id, &caller)?;
        require_not_blacklisted(&e, &caller)?;
        require_not_blacklisted(&e, &new_admin)?;

        e.storage()
            .persistent()
            .set(&DataKey::CircleAdmin(circle_id), &new_admin);

        events::circle_admin_changed(&e, circle_id, caller, new_admin);
        Ok(())
    }

    /// Apply for membership in a circle. Fails unless the caller's
    /// membership is currently `None`.
    pub fn apply_to_circle(e: Env, caller: Address, circle_id: u64) -> Result<(), LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;
        require_not_blacklisted(&e, &caller)?;
        circle_admin(&e, circle_id)?;

        if membership(&e, circle_id, &caller) != MemberStatus::None {
            return Err(LendingError::AlreadyApplied);
        }

        e.storage().persistent().set(
            &DataKey::Member(circle_id, caller.clone()),
            &MemberStatus::Applying,
        );

        events::member_applied(&e, circle_id, caller);
        Ok(())
    }

    /// Approve or refuse a pending application (circle admin only).
    pub fn decide_application(
        e: Env,
        caller: Address,
        circle_id: u64,
        user: Address,
        approve: bool,
    ) -> Result<(), LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;
        require_circle_admin(&e, circle_id, &caller)?;
        require_not_blacklisted(&e, &user)?;

        if membership(&e, circle_id, &user) != MemberStatus::Applying {
            return Err(LendingError::NotApplying);
        }

        let status = if approve {
            MemberStatus::Approved
        } else {
            MemberStatus::Refused
        };
        e.storage()
            .persistent()
            .set(&DataKey::Member(circle_id, user.clone()), &status);

        events::member_decided(&e, circle_id, user, approve);
        Ok(())
    }

    /// Remove an approved member from a circle (circle admin only).
    pub fn remove_member(
        e: Env,
        caller: Address,
        circle_id: u64,
        user: Address,
    ) -> Result<(), LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;
        require_circle_admin(&e, circle_id, &caller)?;
        require_not_blacklisted(&e, &caller)?;

        if membership(&e, circle_id, &user) != MemberStatus::Approved {
            return Err(LendingError::NotApproved);
        }

        let config = read_config(&e)?;
        if config.check_open_ious_on_remove && read_profile(&e, &user).active_iou_count > 0 {
            return Err(LendingError::HasOpenIous);
        }

        e.storage()
            .persistent()
            .remove(&DataKey::Member(circle_id, user.clone()));

        events::member_removed(&e, circle_id, user);
        Ok(())
    }

    // ========================================================================
    // Loan lifecycle
    // ========================================================================

    /// Create a new IOU with the caller as borrower. No value moves.
    /// Returns the new IOU id.
    pub fn create_iou(e: Env, caller: Address, terms: IouTerms) -> Result<u64, LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;
        require_not_blacklisted(&e, &caller)?;

        if membership(&e, terms.circle_id, &caller) != MemberStatus::Approved {
            return Err(LendingError::NotCircleMember);
        }

        let config = read_config(&e)?;
        let mut profile = read_profile(&e, &caller);
        if profile.active_iou_count >= config.max_active_ious {
            return Err(LendingError::TooManyActiveIous);
        }

        if !Validation::is_positive(terms.need_amount)
            || terms.min_start_amount < 0
            || terms.min_start_amount > terms.need_amount
            || terms.min_investment_amount < 0
            || terms.borrow_rate < 0
        {
            return Err(LendingError::InvalidAmount);
        }
        if terms.start_time <= TimeUtils::now(&e) {
            return Err(LendingError::StartTimeNotFuture);
        }
        if !Validation::valid_window(terms.start_time, terms.end_time) {
            return Err(LendingError::InvalidTimeWindow);
        }

        let iou_id = next_iou_id(&e);
        let iou = Iou {
            borrower: caller.clone(),
            reserve_asset: terms.reserve_asset.clone(),
            need_amount: terms.need_amount,
            min_start_amount: terms.min_start_amount,
            min_investment_amount: terms.min_investment_amount,
            debt_amount: 0,
            borrow_rate: terms.borrow_rate,
            circle_id: terms.circle_id,
            start_time: terms.start_time,
            end_time: terms.end_time,
            last_update_timestamp: 0,
            status: IouStatus::Active,
        };
        write_iou(&e, iou_id, &iou);

        profile.active_iou_count += 1;
        write_profile(&e, &caller, &profile);

        events::iou_created(
            &e,
            IouCreatedEvent {
                iou_id,
                borrower: caller,
                terms,
            },
        );

        Ok(iou_id)
    }

    /// Fund an IOU before its start time. Pulls `amount` of the reserve
    /// asset from the caller into custody; partial fills accumulate until
    /// the funding window closes.
    pub fn supply(e: Env, caller: Address, iou_id: u64, amount: i128) -> Result<(), LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;

        let mut iou = read_iou(&e, iou_id)?;

        require_not_blacklisted(&e, &caller)?;
        require_not_blacklisted(&e, &iou.borrower)?;
        if membership(&e, iou.circle_id, &caller) != MemberStatus::Approved {
            return Err(LendingError::NotCircleMember);
        }
        if TimeUtils::now(&e) >= iou.start_time {
            return Err(LendingError::FundingClosed);
        }
        if iou.status != IouStatus::Active {
            return Err(LendingError::InvalidStatus);
        }
        if !Validation::is_positive(amount) {
            return Err(LendingError::InvalidAmount);
        }
        if amount < iou.min_investment_amount {
            return Err(LendingError::BelowMinInvestment);
        }
        let new_debt =
            SafeMath::add(iou.debt_amount, amount).ok_or(LendingError::MathOverflow)?;
        if new_debt > iou.need_amount {
            return Err(LendingError::ExceedsNeedAmount);
        }

        // EFFECTS
        iou.debt_amount = new_debt;
        write_iou(&e, iou_id, &iou);

        let key = DataKey::Contribution(iou_id, caller.clone());
        let contributed =
            SafeMath::add(contribution(&e, iou_id, &caller), amount)
                .ok_or(LendingError::MathOverflow)?;
        e.storage().persistent().set(&key, &contributed);

        // INTERACTIONS
        custody::pull(&e, &iou.reserve_asset, &caller, amount);

        events::supplied(&e, iou_id, caller, amount, new_debt);
        Ok(())
    }

    /// Disburse the raised principal to the borrower, minus the protocol
    /// fee, once the funding threshold is met. Succeeds at most once per
    /// IOU; the status flip guards replays.
    pub fn claim(e: Env, caller: Address, iou_id: u64) -> Result<(), LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;

        let mut iou = read_iou(&e, iou_id)?;

        if caller != iou.borrower {
            return Err(LendingError::NotBorrower);
        }
        require_not_blacklisted(&e, &caller)?;
        if TimeUtils::now(&e) < iou.start_time {
            return Err(LendingError::LoanNotStarted);
        }
        if iou.status != IouStatus::Active {
            return Err(LendingError::InvalidStatus);
        }
        if iou.debt_amount < iou.min_start_amount {
            return Err(LendingError::ThresholdNotMet);
        }

        let config = read_config(&e)?;
        let fee = SafeMath::bps(iou.debt_amount, config.borrow_fee_bps)
            .ok_or(LendingError::MathOverflow)?;
        let admin_share = SafeMath::percent(fee, config.circles_admin_proportion)
            .ok_or(LendingError::MathOverflow)?;
        let treasury_share =
            SafeMath::sub(fee, admin_share).ok_or(LendingError::MathOverflow)?;
        let disbursed =
            SafeMath::sub(iou.debt_amount, fee).ok_or(LendingError::MathOverflow)?;

        // Fee recipients are resolved at call time, never cached
        let circle_admin = circle_admin(&e, iou.circle_id)?;
        let treasury: Address = e
            .storage()
            .instance()
            .get(&DataKey::Treasury)
            .ok_or(LendingError::NotInitialized)?;

        // EFFECTS: the status flip is the replay guard, so it lands before
        // any transfer
        iou.status = IouStatus::Received;
        write_iou(&e, iou_id, &iou);

        // INTERACTIONS
        custody::push(&e, &iou.reserve_asset, &iou.borrower, disbursed);
        if admin_share > 0 {
            custody::push(&e, &iou.reserve_asset, &circle_admin, admin_share);
        }
        if treasury_share > 0 {
            custody::push(&e, &iou.reserve_asset, &treasury, treasury_share);
        }

        events::claimed(
            &e,
            ClaimedEvent {
                iou_id,
                borrower: iou.borrower,
                disbursed,
                fee,
                admin_share,
            },
        );
        Ok(())
    }

    /// Settle the loan: pulls principal plus accrued interest and penalties
    /// from the borrower and freezes the accrual cutoff for lender payouts.
    /// Returns the amount repaid.
    pub fn repay(e: Env, caller: Address, iou_id: u64) -> Result<i128, LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;

        let mut iou = read_iou(&e, iou_id)?;

        if caller != iou.borrower {
            return Err(LendingError::NotBorrower);
        }
        let now = TimeUtils::now(&e);
        if now < iou.start_time {
            return Err(LendingError::LoanNotStarted);
        }
        if iou.status != IouStatus::Received {
            return Err(LendingError::InvalidStatus);
        }

        let config = read_config(&e)?;
        let repay_amount = accrual::amount_due(
            iou.debt_amount,
            iou.start_time,
            iou.end_time,
            iou.borrow_rate,
            config.late_period,
            config.penalty_rate_1,
            config.penalty_rate_2,
            now,
        )
        .ok_or(LendingError::MathOverflow)?;

        // EFFECTS
        iou.status = IouStatus::Repaid;
        iou.last_update_timestamp = now;
        write_iou(&e, iou_id, &iou);

        let mut profile = read_profile(&e, &caller);
        profile.active_iou_count = profile.active_iou_count.saturating_sub(1);
        write_profile(&e, &caller, &profile);

        // INTERACTIONS
        custody::pull(&e, &iou.reserve_asset, &caller, repay_amount);

        events::repaid(&e, iou_id, caller, repay_amount, now);
        Ok(repay_amount)
    }

    /// Recover a lender's position: a full refund if the loan never
    /// activated, or principal plus interest once the borrower has repaid.
    /// Any other status/timing combination is a no-op. Returns the amount
    /// transferred (0 for no-op).
    pub fn withdraw(e: Env, caller: Address, iou_id: u64) -> Result<i128, LendingError> {
        caller.require_auth();
        require_not_paused(&e)?;

        let iou = read_iou(&e, iou_id)?;
        let contributed = contribution(&e, iou_id, &caller);
        if contributed == 0 {
            return Ok(0);
        }

        let now = TimeUtils::now(&e);
        let key = DataKey::Contribution(iou_id, caller.clone());

        if iou.status == IouStatus::Active
            && now >= iou.start_time
            && iou.debt_amount < iou.min_start_amount
        {
            // Refund: the loan failed to activate. Zero the contribution
            // before moving value.
            e.storage().persistent().remove(&key);

            custody::push(&e, &iou.reserve_asset, &caller, contributed);

            events::withdrawn(&e, iou_id, caller, contributed, true);
            return Ok(contributed);
        }

        if iou.status == IouStatus::Repaid {
            // Payout: contribution is zeroed before the payout is computed
            // or transferred, so a replay observes an empty position.
            e.storage().persistent().remove(&key);

            let config = read_config(&e)?;
            let payout = accrual::amount_due(
                contributed,
                iou.start_time,
                iou.end_time,
                iou.borrow_rate,
                config.late_period,
                config.penalty_rate_1,
                config.penalty_rate_2,
                iou.last_update_timestamp,
            )
            .ok_or(LendingError::MathOverflow)?;

            custody::push(&e, &iou.reserve_asset, &caller, payout);

            events::withdrawn(&e, iou_id, caller, payout, false);
            return Ok(payout);
        }

        Ok(0)
    }

    // ========================================================================
    // Read-only views
    // ========================================================================

    /// Get an IOU record by id.
    pub fn get_iou(e: Env, iou_id: u64) -> Result<Iou, LendingError> {
        read_iou(&e, iou_id)
    }

    /// Amount currently owed for an IOU: the reserve asset and the accrued
    /// total at query time. Zero unless the loan is in `Received` status.
    pub fn get_amount_owed(e: Env, iou_id: u64) -> Result<(Address, i128), LendingError> {
        let iou = read_iou(&e, iou_id)?;
        if iou.status != IouStatus::Received {
            return Ok((iou.reserve_asset, 0));
        }
        let config = read_config(&e)?;
        let owed = accrual::amount_due(
            iou.debt_amount,
            iou.start_time,
            iou.end_time,
            iou.borrow_rate,
            config.late_period,
            config.penalty_rate_1,
            config.penalty_rate_2,
            TimeUtils::now(&e),
        )
        .ok_or(LendingError::MathOverflow)?;
        Ok((iou.reserve_asset, owed))
    }

    /// Get a user's profile (zeroed defaults if never touched).
    pub fn get_profile(e: Env, user: Address) -> UserProfile {
        read_profile(&e, &user)
    }

    /// Get a user's membership state within a circle.
    pub fn get_membership(e: Env, circle_id: u64, user: Address) -> MemberStatus {
        membership(&e, circle_id, &user)
    }

    /// Get a circle's current admin.
    pub fn get_circle_admin(e: Env, circle_id: u64) -> Result<Address, LendingError> {
        circle_admin(&e, circle_id)
    }

    /// Get a lender's accumulated contribution to an IOU.
    pub fn get_contribution(e: Env, iou_id: u64, lender: Address) -> i128 {
        contribution(&e, iou_id, &lender)
    }

    /// Get the current configuration.
    pub fn get_config(e: Env) -> Result<Config, LendingError> {
        read_config(&e)
    }

    /// Whether the global pause flag is set.
    pub fn is_paused(e: Env) -> bool {
        read_config(&e).map_or(false, |config| config.paused)
    }
}

// ============================================================================
// Storage & precondition helpers
// ============================================================================

fn validate_config(config: &Config) -> Result<(), LendingError> {
    if !Validation::valid_bps(config.borrow_fee_bps)
        || !Validation::valid_percent(config.circles_admin_proportion)
        || config.penalty_rate_1 < 0
        || config.penalty_rate_1 >= config.penalty_rate_2
    {
        return Err(LendingError::InvalidConfig);
    }
    Ok(())
}

fn read_config(e: &Env) -> Result<Config, LendingError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LendingError::NotInitialized)
}

fn write_config(e: &Env, config: &Config) {
    e.storage().instance().set(&DataKey::Config, config);
}

fn require_not_paused(e: &Env) -> Result<(), LendingError> {
    if read_config(e)?.paused {
        return Err(LendingError::ContractPaused);
    }
    Ok(())
}

fn require_relay(e: &Env, caller: &Address) -> Result<(), LendingError> {
    caller.require_auth();
    let relay: Address = e
        .storage()
        .instance()
        .get(&DataKey::Relay)
        .ok_or(LendingError::NotInitialized)?;
    if *caller != relay {
        return Err(LendingError::Unauthorized);
    }
    Ok(())
}

fn read_profile(e: &Env, user: &Address) -> UserProfile {
    e.storage()
        .persistent()
        .get(&DataKey::Profile(user.clone()))
        .unwrap_or_else(UserProfile::empty)
}

fn write_profile(e: &Env, user: &Address, profile: &UserProfile) {
    e.storage()
        .persistent()
        .set(&DataKey::Profile(user.clone()), profile);
}

fn require_not_blacklisted(e: &Env, user: &Address) -> Result<(), LendingError> {
    if read_profile(e, user).blacklisted {
        return Err(LendingError::Blacklisted);
    }
    Ok(())
}

fn membership(e: &Env, circle_id: u64, user: &Address) -> MemberStatus {
    e.storage()
        .persistent()
        .get(&DataKey::Member(circle_id, user.clone()))
        .unwrap_or(MemberStatus::None)
}

fn circle_admin(e: &Env, circle_id: u64) -> Result<Address, LendingError> {
    e.storage()
        .persistent()
        .get(&DataKey::CircleAdmin(circle_id))
        .ok_or(LendingError::CircleNotFound)
}

fn require_circle_admin(e: &Env, circle_id: u64, caller: &Address) -> Result<(), LendingError> {
    if circle_admin(e, circle_id)? != *caller {
        return Err(LendingError::NotCircleAdmin);
    }
    Ok(())
}

fn read_iou(e: &Env, iou_id: u64) -> Result<Iou, LendingError> {
    e.storage()
        .persistent()
        .get(&DataKey::Iou(iou_id))
        .ok_or(LendingError::IouNotFound)
}

fn write_iou(e: &Env, iou_id: u64, iou: &Iou) {
    e.storage().persistent().set(&DataKey::Iou(iou_id), iou);
}

fn contribution(e: &Env, iou_id: u64, lender: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Contribution(iou_id, lender.clone()))
        .unwrap_or(0)
}

fn next_circle_id(e: &Env) -> u64 {
    let next = e
        .storage()
        .instance()
        .get::<_, u64>(&DataKey::NextCircleId)
        .unwrap_or(0)
        .saturating_add(1);
    e.storage().instance().set(&DataKey::NextCircleId, &next);
    next
}

fn next_iou_id(e: &Env) -> u64 {
    let next = e
        .storage()
        .instance()
        .get::<_, u64>(&DataKey::NextIouId)
        .unwrap_or(0)
        .saturating_add(1);
    e.storage().instance().set(&DataKey::NextIouId, &next);
    next
}
