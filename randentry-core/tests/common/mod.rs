//! Scripted host platform for integration tests.
//!
//! `SimHost` is a lookup-table host: every collaborator call reads from a map
//! the test populated, and every order is recorded. `fill_at` controls
//! whether a submitted order materializes as a position (and at what price),
//! which is how tests exercise the "re-check position after submission" path.

use std::collections::HashMap;

use chrono::NaiveDate;

use randentry_core::domain::{Bar, PositionSnapshot, Side};
use randentry_core::host::{Host, HostError, Scheduler, SessionPhase};
use randentry_core::strategy::AccountSetup;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub code: String,
    pub units: i64,
    pub side: Side,
}

pub struct SimHost {
    pub today: NaiveDate,
    /// Dominant contract code returned for every symbol query.
    pub dominant: String,
    pub expiry: HashMap<String, NaiveDate>,
    pub daily: HashMap<String, Vec<Bar>>,
    pub last_price: HashMap<String, f64>,
    pub last_close: HashMap<String, f64>,
    pub positions: HashMap<(String, Side), PositionSnapshot>,
    pub total_value: f64,
    /// When set, a submitted order fills immediately at this price.
    pub fill_at: Option<f64>,

    pub orders: Vec<OrderRecord>,
    pub closes: Vec<(String, Side)>,
    pub registered: Vec<(SessionPhase, String)>,
    pub setup: Option<AccountSetup>,
}

impl SimHost {
    pub fn new(dominant: &str) -> Self {
        Self {
            today: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            dominant: dominant.to_string(),
            expiry: HashMap::new(),
            daily: HashMap::new(),
            last_price: HashMap::new(),
            last_close: HashMap::new(),
            positions: HashMap::new(),
            total_value: 1_000_000.0,
            fill_at: None,
            orders: Vec::new(),
            closes: Vec::new(),
            registered: Vec::new(),
            setup: None,
        }
    }

    /// Flat daily history: `count` bars with constant close and a fixed
    /// high/low band around it, giving a known constant true range.
    pub fn with_flat_history(mut self, code: &str, count: usize, close: f64, half_range: f64) -> Self {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = (0..count)
            .map(|i| Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open: close,
                high: close + half_range,
                low: close - half_range,
                close,
            })
            .collect();
        self.daily.insert(code.to_string(), bars);
        self.last_price.insert(code.to_string(), close);
        self.last_close.insert(code.to_string(), close);
        // Expiry far in the future unless a test overrides it.
        self.expiry
            .insert(code.to_string(), NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        self
    }
}

impl Host for SimHost {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn last_price(&self, code: &str) -> Result<f64, HostError> {
        self.last_price
            .get(code)
            .copied()
            .ok_or_else(|| HostError::NoData { code: code.to_string() })
    }

    fn last_bar_close(&self, code: &str) -> Result<f64, HostError> {
        self.last_close
            .get(code)
            .copied()
            .ok_or_else(|| HostError::NoData { code: code.to_string() })
    }

    fn daily_bars(&self, code: &str, count: usize) -> Result<Vec<Bar>, HostError> {
        let bars = self.daily.get(code).cloned().unwrap_or_default();
        let start = bars.len().saturating_sub(count);
        Ok(bars[start..].to_vec())
    }

    fn submit_order(&mut self, code: &str, units: i64, side: Side) -> Result<(), HostError> {
        self.orders.push(OrderRecord {
            code: code.to_string(),
            units,
            side,
        });
        if let Some(price) = self.fill_at {
            self.positions.insert(
                (code.to_string(), side),
                PositionSnapshot {
                    quantity: units,
                    avg_price: price,
                },
            );
        }
        Ok(())
    }

    fn close_position(&mut self, code: &str, side: Side) -> Result<(), HostError> {
        self.closes.push((code.to_string(), side));
        self.positions.remove(&(code.to_string(), side));
        Ok(())
    }

    fn position(&self, code: &str, side: Side) -> Option<PositionSnapshot> {
        self.positions.get(&(code.to_string(), side)).cloned()
    }

    fn total_value(&self) -> f64 {
        self.total_value
    }

    fn dominant_contract(&self, _symbol: &str) -> Result<String, HostError> {
        Ok(self.dominant.clone())
    }

    fn expiry_date(&self, code: &str) -> Result<NaiveDate, HostError> {
        self.expiry
            .get(code)
            .copied()
            .ok_or_else(|| HostError::UnknownInstrument { code: code.to_string() })
    }

    fn apply_setup(&mut self, setup: &AccountSetup) {
        self.setup = Some(*setup);
    }
}

impl Scheduler for SimHost {
    fn run_daily(&mut self, phase: SessionPhase, reference_code: &str) {
        self.registered.push((phase, reference_code.to_string()));
    }
}
