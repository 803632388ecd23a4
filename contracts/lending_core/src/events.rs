//! Event schemas and publish helpers for the lending core contract.
//! Stable payloads for indexing circle and loan lifecycles.

use shared_utils::Events;
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::types::IouTerms;

/// Emitted once per circle at creation. The name and description are only
/// recorded here; the ledger keeps no circle record beyond the admin map.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CircleCreatedEvent {
    pub circle_id: u64,
    pub admin: Address,
    pub name: String,
    pub desc: String,
}

/// Emitted once per IOU at creation with the full agreed terms.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IouCreatedEvent {
    pub iou_id: u64,
    pub borrower: Address,
    pub terms: IouTerms,
}

/// Emitted when the borrower claims the raised principal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub iou_id: u64,
    pub borrower: Address,
    pub disbursed: i128,
    pub fee: i128,
    pub admin_share: i128,
}

pub fn circle_created(e: &Env, event: CircleCreatedEvent) {
    Events::emit_with_topics(e, (symbol_short!("circle"), symbol_short!("created")), event);
}

pub fn circle_admin_changed(e: &Env, circle_id: u64, old_admin: Address, new_admin: Address) {
    Events::emit_with_topics(
        e,
        (symbol_short!("circle"), symbol_short!("admin")),
        (circle_id, old_admin, new_admin),
    );
}

pub fn member_applied(e: &Env, circle_id: u64, user: Address) {
    Events::emit_with_topics(
        e,
        (symbol_short!("member"), symbol_short!("applied")),
        (circle_id, user),
    );
}

pub fn member_decided(e: &Env, circle_id: u64, user: Address, approved: bool) {
    Events::emit_with_topics(
        e,
        (symbol_short!("member"), symbol_short!("decided")),
        (circle_id, user, approved),
    );
}

pub fn member_removed(e: &Env, circle_id: u64, user: Address) {
    Events::emit_with_topics(
        e,
        (symbol_short!("member"), symbol_short!("removed")),
        (circle_id, user),
    );
}

pub fn iou_created(e: &Env, event: IouCreatedEvent) {
    Events::emit_with_topics(e, (symbol_short!("iou"), symbol_short!("created")), event);
}

pub fn supplied(e: &Env, iou_id: u64, lender: Address, amount: i128, debt_amount: i128) {
    Events::emit_with_topics(
        e,
        (symbol_short!("iou"), symbol_short!("supply")),
        (iou_id, lender, amount, debt_amount),
    );
}

pub fn claimed(e: &Env, event: ClaimedEvent) {
    Events::emit_with_topics(e, (symbol_short!("iou"), symbol_short!("claim")), event);
}

pub fn repaid(e: &Env, iou_id: u64, borrower: Address, amount: i128, timestamp: u64) {
    Events::emit_with_topics(
        e,
        (symbol_short!("iou"), symbol_short!("repay")),
        (iou_id, borrower, amount, timestamp),
    );
}

pub fn withdrawn(e: &Env, iou_id: u64, lender: Address, amount: i128, refund: bool) {
    Events::emit_with_topics(
        e,
        (symbol_short!("iou"), symbol_short!("withdraw")),
        (iou_id, lender, amount, refund),
    );
}

pub fn blacklist_set(e: &Env, user: Address, flag: bool) {
    Events::emit_with_topics(
        e,
        (symbol_short!("admin"), symbol_short!("blacklist")),
        (user, flag),
    );
}

pub fn config_updated(e: &Env, field: Symbol) {
    Events::emit_with_topics(
        e,
        (symbol_short!("admin"), symbol_short!("config")),
        (field, e.ledger().timestamp()),
    );
}
