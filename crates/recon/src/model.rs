use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One roster row from `members.csv`.
///
/// Everything except `current_level` is opaque pass-through text preserved
/// byte-for-byte into the corrected roster. `wallet_address` keeps its
/// original spelling; identity comparisons go through [`wallet_key`].
///
/// [`wallet_key`]: Member::wallet_key
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub wallet_address: String,
    pub referrer_wallet: String,
    pub current_level: u8,
    pub activation_sequence: String,
    pub activation_time: String,
    pub total_nft_claimed: String,
}

impl Member {
    /// Normalized identity key: lowercase, whitespace-trimmed.
    pub fn wallet_key(&self) -> String {
        crate::ingest::normalize_address(&self.wallet_address)
    }
}

/// One retained row from the transaction ledger (`method == "upgrade"` only).
///
/// `from_addr` and `to_addr` are stored normalized; the remaining fields are
/// opaque except `amount` and `token`, which drive the tier computation.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeTx {
    pub tx_hash: String,
    pub method: String,
    pub from_addr: String,
    pub to_addr: String,
    pub amount: f64,
    pub token: String,
    pub block: String,
    pub age: String,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A member whose recorded level differs from the computed one.
///
/// Field names and order define the `wrong_levels.csv` columns (serialized
/// through the CSV writer).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Discrepancy {
    pub wallet_address: String,
    pub wrong_level: u8,
    pub correct_level: u8,
    pub level_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReconSummary {
    pub total_members: usize,
    pub flagged: usize,
    pub unflagged: usize,
}

/// Full reconciliation output: corrected roster in input order, flagged
/// members in roster order, and summary counts. Presentation (files,
/// console) is the caller's job.
#[derive(Debug, Clone)]
pub struct ReconResult {
    pub members: Vec<Member>,
    pub discrepancies: Vec<Discrepancy>,
    pub summary: ReconSummary,
}
