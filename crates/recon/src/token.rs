//! Stablecoin ticker heuristic.
//!
//! Ledger exports render the settlement token ticker inconsistently
//! (`USD₮0`, `USDT0`, lowercase variants). A label qualifies when it
//! contains "usd" case-insensitively, carries either the `₮` glyph or a
//! case-insensitive `t`, and contains the digit `0`.

pub fn is_usdt_token(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let lower = token.to_lowercase();
    lower.contains("usd") && (token.contains('₮') || lower.contains('t')) && token.contains('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_glyph_spelling() {
        assert!(is_usdt_token("USD₮0"));
        assert!(is_usdt_token("usd₮0"));
    }

    #[test]
    fn accepts_ascii_spelling() {
        assert!(is_usdt_token("USDT0"));
        assert!(is_usdt_token("usdt0"));
        assert!(is_usdt_token("Usdt0 (bridged)"));
    }

    #[test]
    fn rejects_missing_usd() {
        assert!(!is_usdt_token("T0"));
        assert!(!is_usdt_token("DAI0"));
    }

    #[test]
    fn rejects_missing_zero() {
        assert!(!is_usdt_token("USDT"));
        assert!(!is_usdt_token("USD₮"));
    }

    #[test]
    fn rejects_missing_t_marker() {
        // "usd" alone carries no 't' and no glyph
        assert!(!is_usdt_token("USD0"));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_usdt_token(""));
    }
}
