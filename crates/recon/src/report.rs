//! Render reconciliation outputs as CSV text.
//!
//! Pure string building: the caller decides where the bytes land, so
//! re-runs over identical inputs are byte-identical.

use crate::error::ReconError;
use crate::model::{Discrepancy, Member};

/// Column order of `members.csv`, preserved in the corrected roster.
pub const MEMBER_COLUMNS: [&str; 6] = [
    "wallet_address",
    "referrer_wallet",
    "current_level",
    "activation_sequence",
    "activation_time",
    "total_nft_claimed",
];

fn render_err(e: impl std::fmt::Display) -> ReconError {
    ReconError::Render(e.to_string())
}

/// Corrected roster (`members_update.csv`): original fields pass through,
/// `current_level` carries the reconciled value.
pub fn render_roster(members: &[Member]) -> Result<String, ReconError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(MEMBER_COLUMNS).map_err(render_err)?;

    for m in members {
        wtr.write_record([
            m.wallet_address.as_str(),
            m.referrer_wallet.as_str(),
            &m.current_level.to_string(),
            m.activation_sequence.as_str(),
            m.activation_time.as_str(),
            m.total_nft_claimed.as_str(),
        ])
        .map_err(render_err)?;
    }

    let bytes = wtr.into_inner().map_err(render_err)?;
    String::from_utf8(bytes).map_err(render_err)
}

/// Discrepancy report (`wrong_levels.csv`): flagged members only.
/// The header row comes from the [`Discrepancy`] field names.
pub fn render_discrepancies(discrepancies: &[Discrepancy]) -> Result<String, ReconError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for d in discrepancies {
        wtr.serialize(d).map_err(render_err)?;
    }

    let bytes = wtr.into_inner().map_err(render_err)?;
    String::from_utf8(bytes).map_err(render_err)
}
