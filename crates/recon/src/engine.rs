//! The core computation: per-member maximum upgrade level and discrepancy
//! flagging.

use std::collections::HashMap;

use crate::model::{Discrepancy, Member, ReconResult, ReconSummary, UpgradeTx};
use crate::tiers;
use crate::token::is_usdt_token;

/// Highest level paid for in a member's qualifying upgrade transactions.
///
/// A transaction qualifies when its token passes the stablecoin heuristic
/// and its amount is exactly a price-table value. Returns 0 when nothing
/// qualifies — that is "unknown", not an error.
pub fn max_upgrade_level(txs: &[&UpgradeTx]) -> u8 {
    let mut max_level = 0;
    for tx in txs {
        if !is_usdt_token(&tx.token) {
            continue;
        }
        if let Some(level) = tiers::level_for_amount(tx.amount) {
            if level > max_level {
                max_level = level;
            }
        }
    }
    max_level
}

/// Final tier for a member: computed level if known, else the recorded
/// level if positive, else level 1. A member never regresses to unknown.
fn final_level(computed: u8, recorded: u8) -> u8 {
    if computed > 0 {
        computed
    } else if recorded > 0 {
        recorded
    } else {
        tiers::MIN_LEVEL
    }
}

/// Run reconciliation: derive the corrected roster and the discrepancy
/// list. Inputs are not mutated; outputs keep roster order.
pub fn run(roster: &[Member], txs: &[UpgradeTx]) -> ReconResult {
    // Payer convention: the member wallet is matched against the ledger's
    // from_addr column (already normalized at ingestion).
    let mut by_payer: HashMap<&str, Vec<&UpgradeTx>> = HashMap::new();
    for tx in txs {
        by_payer.entry(tx.from_addr.as_str()).or_default().push(tx);
    }

    let mut members = Vec::with_capacity(roster.len());
    let mut discrepancies = Vec::new();

    for member in roster {
        let wallet_key = member.wallet_key();
        let wallet_txs: &[&UpgradeTx] = by_payer
            .get(wallet_key.as_str())
            .map_or(&[], |v| v.as_slice());

        let computed = max_upgrade_level(wallet_txs);
        let correct_level = final_level(computed, member.current_level);

        if member.current_level != correct_level {
            discrepancies.push(Discrepancy {
                wallet_address: member.wallet_address.clone(),
                wrong_level: member.current_level,
                correct_level,
                level_name: tiers::level_name(correct_level),
            });
        }

        members.push(Member {
            current_level: correct_level,
            ..member.clone()
        });
    }

    let summary = ReconSummary {
        total_members: roster.len(),
        flagged: discrepancies.len(),
        unflagged: roster.len() - discrepancies.len(),
    };

    ReconResult {
        members,
        discrepancies,
        summary,
    }
}
