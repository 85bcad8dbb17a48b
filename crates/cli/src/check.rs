//! The reconciliation run: read the two fixed-name inputs from a directory,
//! run the engine, overwrite the outputs, and report.
//!
//! Computation ([`run_in_dir`]) and console rendering ([`print_report`])
//! are separate so tests can drive the full pipeline without capturing
//! stdout.

use std::path::Path;

use tiercheck_recon::{engine, ingest, report, Discrepancy, ReconSummary};

use crate::CliError;

pub const MEMBERS_FILE: &str = "members.csv";
pub const TRANSACTIONS_FILE: &str = "filtered_by_fee.csv";
pub const ROSTER_OUT_FILE: &str = "members_update.csv";
pub const REPORT_OUT_FILE: &str = "wrong_levels.csv";

/// Everything the console summary needs, collected before anything prints.
#[derive(Debug)]
pub struct RunReport {
    pub summary: ReconSummary,
    pub discrepancies: Vec<Discrepancy>,
    pub txs_read: usize,
    pub roster_written: bool,
    pub report_written: bool,
}

/// Execute one full reconciliation in `dir`.
///
/// Both inputs are read up front; a missing or unreadable input aborts
/// before any output is written. Output files are overwritten
/// unconditionally, except that `members_update.csv` is skipped for an
/// empty roster and `wrong_levels.csv` is skipped when nothing is flagged.
pub fn run_in_dir(dir: &Path) -> Result<RunReport, CliError> {
    let members_path = dir.join(MEMBERS_FILE);
    let members_csv = std::fs::read_to_string(&members_path).map_err(|e| {
        CliError::input_missing(format!("cannot read {}: {e}", members_path.display()))
            .with_hint(format!("run from the directory containing {MEMBERS_FILE}"))
    })?;

    let txs_path = dir.join(TRANSACTIONS_FILE);
    let txs_csv = std::fs::read_to_string(&txs_path).map_err(|e| {
        CliError::input_missing(format!("cannot read {}: {e}", txs_path.display()))
            .with_hint(format!("run from the directory containing {TRANSACTIONS_FILE}"))
    })?;

    let roster = ingest::load_members(&members_csv).map_err(|e| CliError::error(e.to_string()))?;
    let txs = ingest::load_upgrade_txs(&txs_csv).map_err(|e| CliError::error(e.to_string()))?;

    let result = engine::run(&roster, &txs);

    let roster_written = if result.members.is_empty() {
        false
    } else {
        let out = report::render_roster(&result.members)
            .map_err(|e| CliError::error(e.to_string()))?;
        let out_path = dir.join(ROSTER_OUT_FILE);
        std::fs::write(&out_path, out)
            .map_err(|e| CliError::error(format!("cannot write {}: {e}", out_path.display())))?;
        true
    };

    let report_written = if result.discrepancies.is_empty() {
        false
    } else {
        let out = report::render_discrepancies(&result.discrepancies)
            .map_err(|e| CliError::error(e.to_string()))?;
        let out_path = dir.join(REPORT_OUT_FILE);
        std::fs::write(&out_path, out)
            .map_err(|e| CliError::error(format!("cannot write {}: {e}", out_path.display())))?;
        true
    };

    Ok(RunReport {
        summary: result.summary,
        discrepancies: result.discrepancies,
        txs_read: txs.len(),
        roster_written,
        report_written,
    })
}

/// Render the console summary for a completed run.
pub fn print_report(report: &RunReport) {
    println!(
        "read {} members, {} upgrade transactions",
        report.summary.total_members, report.txs_read
    );
    if report.roster_written {
        println!("wrote {ROSTER_OUT_FILE} ({} members)", report.summary.total_members);
    }
    if report.report_written {
        println!("wrote {REPORT_OUT_FILE} ({} flagged)", report.summary.flagged);
    }

    println!();
    println!("total members: {}", report.summary.total_members);
    println!("wrong levels:  {}", report.summary.flagged);
    println!("correct:       {}", report.summary.unflagged);

    if report.discrepancies.is_empty() {
        println!("no members with wrong levels found");
        return;
    }

    println!();
    println!("first {} flagged:", report.discrepancies.len().min(10));
    for (i, d) in report.discrepancies.iter().take(10).enumerate() {
        println!(
            "  {}. {} | wrong: Level {} | correct: Level {} ({})",
            i + 1,
            truncate_address(&d.wallet_address),
            d.wrong_level,
            d.correct_level,
            d.level_name,
        );
    }
}

/// First 20 characters of an address, always suffixed with an ellipsis.
fn truncate_address(addr: &str) -> String {
    let prefix: String = addr.chars().take(20).collect();
    format!("{prefix}...")
}
