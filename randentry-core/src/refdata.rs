//! Static reference data for Chinese futures symbols.
//!
//! Two tables keyed by the short commodity symbol (e.g. "RB"):
//! - the platform's continuous dominant-contract code ("RB9999.XSGE"), used
//!   as the benchmark / scheduling reference security, and
//! - the contract point value (yuan per index point per lot), used by the
//!   position sizer.
//!
//! Lookup misses are explicit: `Option` for the code table (non-fatal by host
//! convention) and a typed error for the point-value table (sizing must never
//! silently miscompute).

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefDataError {
    #[error("no point value registered for symbol {0}")]
    UnknownPointValue(String),
}

static DOMINANT_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("A", "A9999.XDCE"),
        ("AG", "AG9999.XSGE"),
        ("AL", "AL9999.XSGE"),
        ("AU", "AU9999.XSGE"),
        ("B", "B9999.XDCE"),
        ("BB", "BB9999.XDCE"),
        ("BU", "BU9999.XSGE"),
        ("C", "C9999.XDCE"),
        ("CF", "CF9999.XZCE"),
        ("CS", "CS9999.XDCE"),
        ("CU", "CU9999.XSGE"),
        ("ER", "ER9999.XZCE"),
        ("FB", "FB9999.XDCE"),
        ("FG", "FG9999.XZCE"),
        ("FU", "FU9999.XSGE"),
        ("GN", "GN9999.XZCE"),
        ("HC", "HC9999.XSGE"),
        ("I", "I9999.XDCE"),
        ("IC", "IC9999.CCFX"),
        ("IF", "IF9999.CCFX"),
        ("IH", "IH9999.CCFX"),
        ("J", "J9999.XDCE"),
        ("JD", "JD9999.XDCE"),
        ("JM", "JM9999.XDCE"),
        ("JR", "JR9999.XZCE"),
        ("L", "L9999.XDCE"),
        ("LR", "LR9999.XZCE"),
        ("M", "M9999.XDCE"),
        ("MA", "MA9999.XZCE"),
        ("ME", "ME9999.XZCE"),
        ("NI", "NI9999.XSGE"),
        ("OI", "OI9999.XZCE"),
        ("P", "P9999.XDCE"),
        ("PB", "PB9999.XSGE"),
        ("PM", "PM9999.XZCE"),
        ("PP", "PP9999.XDCE"),
        ("RB", "RB9999.XSGE"),
        ("RI", "RI9999.XZCE"),
        ("RM", "RM9999.XZCE"),
        ("RO", "RO9999.XZCE"),
        ("RS", "RS9999.XZCE"),
        ("RU", "RU9999.XSGE"),
        ("SF", "SF9999.XZCE"),
        ("SM", "SM9999.XZCE"),
        ("SN", "SN9999.XSGE"),
        ("SR", "SR9999.XZCE"),
        ("T", "T9999.CCFX"),
        ("TA", "TA9999.XZCE"),
        ("TC", "TC9999.XZCE"),
        ("TF", "TF9999.CCFX"),
        ("V", "V9999.XDCE"),
        ("WH", "WH9999.XZCE"),
        ("WR", "WR9999.XSGE"),
        ("WS", "WS9999.XZCE"),
        ("WT", "WT9999.XZCE"),
        ("Y", "Y9999.XDCE"),
        ("ZC", "ZC9999.XZCE"),
        ("ZN", "ZN9999.XSGE"),
    ])
});

static POINT_VALUES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("A", 10.0),
        ("AG", 15.0),
        ("AL", 5.0),
        ("AU", 1000.0),
        ("B", 10.0),
        ("BB", 500.0),
        ("BU", 10.0),
        ("C", 10.0),
        ("CF", 5.0),
        ("CS", 10.0),
        ("CU", 5.0),
        ("ER", 10.0),
        ("FB", 500.0),
        ("FG", 20.0),
        ("FU", 50.0),
        ("GN", 10.0),
        ("HC", 10.0),
        ("I", 100.0),
        ("IC", 200.0),
        ("IF", 300.0),
        ("IH", 300.0),
        ("J", 100.0),
        ("JD", 5.0),
        ("JM", 60.0),
        ("JR", 20.0),
        ("L", 5.0),
        ("LR", 10.0),
        ("M", 10.0),
        ("MA", 10.0),
        ("ME", 10.0),
        ("NI", 1.0),
        ("OI", 10.0),
        ("P", 10.0),
        ("PB", 5.0),
        ("PM", 50.0),
        ("PP", 5.0),
        ("RB", 10.0),
        ("RI", 20.0),
        ("RM", 10.0),
        ("RO", 10.0),
        ("RS", 10.0),
        ("RU", 10.0),
        ("SF", 5.0),
        ("SM", 5.0),
        ("SN", 1.0),
        ("SR", 10.0),
        ("T", 10000.0),
        ("TA", 5.0),
        ("TC", 100.0),
        ("TF", 10000.0),
        ("V", 5.0),
        ("WH", 20.0),
        ("WR", 10.0),
        ("WS", 50.0),
        ("WT", 10.0),
        ("Y", 10.0),
        ("ZC", 100.0),
        ("ZN", 5.0),
    ])
});

/// Continuous dominant-contract code for a short symbol, if registered.
pub fn dominant_code(symbol: &str) -> Option<&'static str> {
    DOMINANT_CODES.get(symbol).copied()
}

/// Contract point value (multiplier) for a short symbol.
pub fn point_value(symbol: &str) -> Result<f64, RefDataError> {
    POINT_VALUES
        .get(symbol)
        .copied()
        .ok_or_else(|| RefDataError::UnknownPointValue(symbol.to_string()))
}
