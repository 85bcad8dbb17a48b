//! CSV ingestion for the roster and the transaction ledger.
//!
//! Field access is best-effort: a missing column reads as empty, malformed
//! numerics default (amount → 0.0, level → 0) and never fail the row. Only
//! CSV-level read errors abort a load.

use std::collections::HashMap;

use csv::StringRecord;

use crate::error::ReconError;
use crate::model::{Member, UpgradeTx};

/// Normalize a wallet address for identity comparison: trim + lowercase.
pub fn normalize_address(addr: &str) -> String {
    addr.trim().to_lowercase()
}

/// Lenient amount parse: anything unparsable is 0.0.
pub fn parse_amount(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

fn parse_level(value: &str) -> u8 {
    value.trim().parse().unwrap_or(0)
}

/// Header-position lookup over one CSV table. Missing columns yield empty
/// fields instead of errors.
struct Columns {
    index: HashMap<String, usize>,
}

impl Columns {
    fn new(headers: &StringRecord) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_string(), i))
            .collect();
        Self { index }
    }

    fn get<'r>(&self, record: &'r StringRecord, name: &str) -> &'r str {
        self.index
            .get(name)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
    }
}

fn reader(csv_text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes())
}

/// Load the member roster from `members.csv` text.
///
/// Rows with an empty normalized wallet are skipped. A duplicate wallet
/// overwrites the earlier record in place: last occurrence wins, first
/// position is kept.
pub fn load_members(csv_text: &str) -> Result<Vec<Member>, ReconError> {
    let mut rdr = reader(csv_text);
    let headers = rdr
        .headers()
        .map_err(|e| ReconError::Csv {
            file: "members.csv".into(),
            message: e.to_string(),
        })?
        .clone();
    let cols = Columns::new(&headers);

    let mut members: Vec<Member> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for record in rdr.records() {
        let record = record.map_err(|e| ReconError::Csv {
            file: "members.csv".into(),
            message: e.to_string(),
        })?;

        let wallet_key = normalize_address(cols.get(&record, "wallet_address"));
        if wallet_key.is_empty() {
            continue;
        }

        let member = Member {
            wallet_address: cols.get(&record, "wallet_address").to_string(),
            referrer_wallet: cols.get(&record, "referrer_wallet").to_string(),
            current_level: parse_level(cols.get(&record, "current_level")),
            activation_sequence: cols.get(&record, "activation_sequence").to_string(),
            activation_time: cols.get(&record, "activation_time").to_string(),
            total_nft_claimed: cols.get(&record, "total_nft_claimed").to_string(),
        };

        match seen.get(&wallet_key) {
            Some(&i) => members[i] = member,
            None => {
                seen.insert(wallet_key, members.len());
                members.push(member);
            }
        }
    }

    Ok(members)
}

/// Load the transaction ledger from `filtered_by_fee.csv` text, retaining
/// only rows whose method is `upgrade` (case-insensitive, trimmed).
pub fn load_upgrade_txs(csv_text: &str) -> Result<Vec<UpgradeTx>, ReconError> {
    let mut rdr = reader(csv_text);
    let headers = rdr
        .headers()
        .map_err(|e| ReconError::Csv {
            file: "filtered_by_fee.csv".into(),
            message: e.to_string(),
        })?
        .clone();
    let cols = Columns::new(&headers);

    let mut txs = Vec::new();

    for record in rdr.records() {
        let record = record.map_err(|e| ReconError::Csv {
            file: "filtered_by_fee.csv".into(),
            message: e.to_string(),
        })?;

        let method = cols.get(&record, "method").trim();
        if !method.eq_ignore_ascii_case("upgrade") {
            continue;
        }

        txs.push(UpgradeTx {
            tx_hash: cols.get(&record, "tx_hash").to_string(),
            method: method.to_string(),
            from_addr: normalize_address(cols.get(&record, "from_addr")),
            to_addr: normalize_address(cols.get(&record, "to_addr")),
            amount: parse_amount(cols.get(&record, "amount")),
            token: cols.get(&record, "token").to_string(),
            block: cols.get(&record, "block").to_string(),
            age: cols.get(&record, "age").to_string(),
        });
    }

    Ok(txs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBERS_CSV: &str = "\
wallet_address,referrer_wallet,current_level,activation_sequence,activation_time,total_nft_claimed
0xAAA,0xREF,2,1,2024-01-01,0
0xBBB,0xREF,,2,2024-01-02,1
";

    #[test]
    fn load_members_basic() {
        let members = load_members(MEMBERS_CSV).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].wallet_address, "0xAAA");
        assert_eq!(members[0].wallet_key(), "0xaaa");
        assert_eq!(members[0].current_level, 2);
        // empty level defaults to 0
        assert_eq!(members[1].current_level, 0);
    }

    #[test]
    fn load_members_skips_empty_wallet() {
        let csv = "\
wallet_address,referrer_wallet,current_level,activation_sequence,activation_time,total_nft_claimed
,0xREF,2,1,t,0
   ,0xREF,3,2,t,0
0xAAA,0xREF,1,3,t,0
";
        let members = load_members(csv).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].wallet_address, "0xAAA");
    }

    #[test]
    fn load_members_duplicate_last_wins_first_position() {
        let csv = "\
wallet_address,referrer_wallet,current_level,activation_sequence,activation_time,total_nft_claimed
0xAAA,0xR1,1,1,t,0
0xBBB,0xR2,2,2,t,0
0xaaa,0xR3,5,3,t,0
";
        let members = load_members(csv).unwrap();
        assert_eq!(members.len(), 2);
        // position of the first occurrence, record of the last
        assert_eq!(members[0].wallet_address, "0xaaa");
        assert_eq!(members[0].current_level, 5);
        assert_eq!(members[0].referrer_wallet, "0xR3");
        assert_eq!(members[1].wallet_address, "0xBBB");
    }

    #[test]
    fn load_members_malformed_level_defaults_to_zero() {
        let csv = "\
wallet_address,referrer_wallet,current_level,activation_sequence,activation_time,total_nft_claimed
0xAAA,0xREF,not-a-number,1,t,0
";
        let members = load_members(csv).unwrap();
        assert_eq!(members[0].current_level, 0);
    }

    #[test]
    fn load_members_missing_column_reads_empty() {
        let csv = "\
wallet_address,current_level
0xAAA,4
";
        let members = load_members(csv).unwrap();
        assert_eq!(members[0].current_level, 4);
        assert_eq!(members[0].referrer_wallet, "");
        assert_eq!(members[0].total_nft_claimed, "");
    }

    const TXS_CSV: &str = "\
tx_hash,method,from_addr,to_addr,amount,token,block,age
0x1,Upgrade,0xAAA,0xCONTRACT,130,USD₮0,100,1d
0x2,transfer,0xAAA,0xCONTRACT,200,USD₮0,101,1d
0x3,upgrade,0xBBB,0xCONTRACT,abc,USDT0,102,2d
";

    #[test]
    fn load_txs_filters_method_case_insensitive() {
        let txs = load_upgrade_txs(TXS_CSV).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].tx_hash, "0x1");
        assert_eq!(txs[0].from_addr, "0xaaa");
        assert_eq!(txs[0].amount, 130.0);
        assert_eq!(txs[1].tx_hash, "0x3");
    }

    #[test]
    fn load_txs_malformed_amount_defaults_to_zero() {
        let txs = load_upgrade_txs(TXS_CSV).unwrap();
        assert_eq!(txs[1].amount, 0.0);
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_address("  0xAbCd  "), "0xabcd");
        assert_eq!(normalize_address(""), "");
    }
}
