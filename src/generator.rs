use std::ops::RangeInclusive;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use tracing::debug;

use crate::calendar::{date, days_in_month};
use crate::catalog::{spend_range, vendors};
use crate::error::{Result, SpendError};
use crate::models::{Category, SpendProfile, SpendingTier, Transaction};

pub const DEFAULT_USERS: u32 = 1000;
pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_MAX_DAILY: u32 = 10;

/// Assumed purchases per category per month, redrawn for every transaction.
const TXNS_PER_CATEGORY: RangeInclusive<u32> = 5..=20;
const AMOUNT_STD_DEV: f64 = 5.0;
const MIN_AMOUNT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub users: u32,
    pub year: i32,
    pub profile: SpendProfile,
    pub max_daily_transactions: u32,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            users: DEFAULT_USERS,
            year: DEFAULT_YEAR,
            profile: SpendProfile::Tiered,
            max_daily_transactions: DEFAULT_MAX_DAILY,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.users == 0 {
            return Err(SpendError::InvalidConfig("user count must be at least 1".to_string()));
        }
        if !(1..=9999).contains(&self.year) {
            return Err(SpendError::InvalidConfig(format!(
                "year {} must be between 1 and 9999",
                self.year
            )));
        }
        Ok(())
    }
}

pub struct Generator<R: Rng = StdRng> {
    rng: R,
    config: GeneratorConfig,
    /// Indexed by user id. Empty under the flat profile.
    tiers: Vec<SpendingTier>,
}

impl Generator<StdRng> {
    /// Build a generator from config, seeding from `config.seed` or entropy.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Generator<R> {
    pub fn with_rng(config: GeneratorConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let tiers = match config.profile {
            SpendProfile::Tiered => (0..config.users)
                .map(|_| SpendingTier::ALL[rng.gen_range(0..SpendingTier::ALL.len())])
                .collect(),
            SpendProfile::Flat => Vec::new(),
        };
        Ok(Self { rng, config, tiers })
    }

    pub fn tier(&self, user_id: u32) -> Option<SpendingTier> {
        self.tiers.get(user_id as usize).copied()
    }

    /// One ordinary (non-rent) purchase for `user_id` on `date`.
    pub fn generate_transaction(&mut self, user_id: u32, date: NaiveDate) -> Result<Transaction> {
        let category = Category::DAILY[self.rng.gen_range(0..Category::DAILY.len())];
        let vendor = self.pick_vendor(category);
        let range = spend_range(self.config.profile, self.tier(user_id), category);

        let num_txns = self.rng.gen_range(TXNS_PER_CATEGORY);
        let mean = range.midpoint() / num_txns as f64;
        let amount = self.draw_amount(mean)?;

        Ok(Transaction {
            user_id,
            date,
            category,
            vendor,
            amount,
        })
    }

    /// The rent charge for `user_id`, dated the 1st of `month` in `year`.
    pub fn generate_rent_transaction(&mut self, user_id: u32, year: i32, month: u32) -> Result<Transaction> {
        let category = Category::Rent;
        let vendor = self.pick_vendor(category);
        let range = spend_range(self.config.profile, self.tier(user_id), category);
        let amount = round_cents(self.rng.gen_range(range.min as f64..range.max as f64));
        Ok(Transaction {
            user_id,
            date: date(year, month, 1)?,
            category,
            vendor,
            amount,
        })
    }

    /// Every transaction for one month: rent on day 1, then 0..=max daily
    /// purchases per user per day.
    pub fn generate_monthly_data(&mut self, year: i32, month: u32, num_days: u32) -> Result<Vec<Transaction>> {
        let mut txns = Vec::new();
        for day in 1..=num_days {
            let today = date(year, month, day)?;
            for user_id in 0..self.config.users {
                if day == 1 {
                    txns.push(self.generate_rent_transaction(user_id, year, month)?);
                }
                let count = self.rng.gen_range(0..=self.config.max_daily_transactions);
                for _ in 0..count {
                    txns.push(self.generate_transaction(user_id, today)?);
                }
            }
        }
        Ok(txns)
    }

    /// All twelve months of the configured year, in generation order.
    pub fn generate_year(&mut self) -> Result<Vec<Transaction>> {
        let year = self.config.year;
        let mut all = Vec::new();
        for month in 1..=12 {
            let num_days = days_in_month(year, month)?;
            let monthly = self.generate_monthly_data(year, month, num_days)?;
            debug!(year, month, num_days, rows = monthly.len(), "generated month");
            all.extend(monthly);
        }
        Ok(all)
    }

    pub fn shuffle(&mut self, txns: &mut [Transaction]) {
        txns.shuffle(&mut self.rng);
    }

    /// Normal(mean, 5) rounded to cents, never below $1.
    fn draw_amount(&mut self, mean: f64) -> Result<f64> {
        let normal = Normal::new(mean, AMOUNT_STD_DEV)?;
        Ok(round_cents(self.rng.sample(normal)).max(MIN_AMOUNT))
    }

    fn pick_vendor(&mut self, category: Category) -> &'static str {
        let list = vendors(category);
        list[self.rng.gen_range(0..list.len())]
    }
}

fn round_cents(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}
