//! Fixed tier tables: level prices in USDT and display names.
//!
//! The price table is a strict one-to-one mapping. Reverse lookup
//! (price → level) is exact: 130 maps to level 1, 131 maps to nothing.

use std::collections::HashMap;
use std::sync::OnceLock;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 19;

/// Upgrade price in USDT per level; index 0 = level 1.
const LEVEL_PRICES: [u32; MAX_LEVEL as usize] = [
    130, 150, 200, 250, 300, 350, 400, 450, 500, 550, 600, 650, 700, 750, 800, 850, 900, 950,
    1000,
];

/// Display name per level; index 0 = level 1.
const LEVEL_NAMES: [&str; MAX_LEVEL as usize] = [
    "Warrior",
    "Bronze",
    "Silver",
    "Gold",
    "Elite",
    "Platinum",
    "Master",
    "Diamond",
    "Grandmaster",
    "Starlight",
    "Epic",
    "Legend",
    "Supreme King",
    "Peerless King",
    "Glory King",
    "Legendary",
    "Supreme",
    "Mythic",
    "Mythic Apex",
];

fn price_to_level() -> &'static HashMap<u32, u8> {
    static MAP: OnceLock<HashMap<u32, u8>> = OnceLock::new();
    MAP.get_or_init(|| {
        LEVEL_PRICES
            .iter()
            .enumerate()
            .map(|(i, &price)| (price, i as u8 + 1))
            .collect()
    })
}

pub fn price_for_level(level: u8) -> Option<u32> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        Some(LEVEL_PRICES[level as usize - 1])
    } else {
        None
    }
}

pub fn level_for_price(price: u32) -> Option<u8> {
    price_to_level().get(&price).copied()
}

/// Exact match of a parsed payment amount against the price table.
/// Fractional or out-of-range amounts never match; no rounding.
pub fn level_for_amount(amount: f64) -> Option<u8> {
    if !amount.is_finite() || amount < 0.0 || amount.fract() != 0.0 || amount > u32::MAX as f64 {
        return None;
    }
    level_for_price(amount as u32)
}

/// Display name for a level, or `Level N` when the table has no entry.
pub fn level_name(level: u8) -> String {
    match level {
        MIN_LEVEL..=MAX_LEVEL => LEVEL_NAMES[level as usize - 1].to_string(),
        other => format!("Level {other}"),
    }
}
