use crate::models::{Category, SpendProfile, SpendingTier};

/// Average monthly spend range in whole dollars, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendRange {
    pub min: u32,
    pub max: u32,
}

impl SpendRange {
    const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }
}

const GROCERIES: &[&str] = &["Whole Foods", "Trader Joe's", "Market Basket", "Walmart", "Stop & Shop"];
const DINING: &[&str] = &["Starbucks", "Chipotle", "Dunkin'", "Pressed Cafe"];
const TRAVEL: &[&str] = &["Delta Airlines", "Uber", "Airbnb", "Marriott", "Lyft"];
const ENTERTAINMENT: &[&str] = &["Netflix", "AMC Theaters", "Spotify", "Apple Music", "Hulu", "Concert"];
const UTILITIES: &[&str] = &["Comcast", "National Grid", "Xfinity", "Water Dept"];
const HEALTHCARE: &[&str] = &["CVS Pharmacy", "Walgreens", "Blue Cross", "Dental Care"];
const RENT: &[&str] = &["Landlord", "Management Company", "Apartment Complex"];
const SHOPPING: &[&str] = &["Amazon", "Target", "Abercrombie", "H&M", "Old Navy", "Apple Store", "Sephora"];
const EDUCATION: &[&str] = &["Coursera", "Udemy", "Bookstore"];
const PERSONAL_CARE: &[&str] = &["Hair Salon", "Nail Salon", "Spa", "Gym Membership"];
const MISCELLANEOUS: &[&str] = &["Post Office", "Gas Station", "Donation"];

pub fn vendors(category: Category) -> &'static [&'static str] {
    match category {
        Category::Groceries => GROCERIES,
        Category::Dining => DINING,
        Category::Travel => TRAVEL,
        Category::Entertainment => ENTERTAINMENT,
        Category::Utilities => UTILITIES,
        Category::Healthcare => HEALTHCARE,
        Category::Rent => RENT,
        Category::Shopping => SHOPPING,
        Category::Education => EDUCATION,
        Category::PersonalCare => PERSONAL_CARE,
        Category::Miscellaneous => MISCELLANEOUS,
    }
}

// Rows follow `Category::ALL` order.

const LOW: [SpendRange; 11] = [
    SpendRange::new(50, 200),
    SpendRange::new(0, 100),
    SpendRange::new(0, 150),
    SpendRange::new(0, 50),
    SpendRange::new(0, 50),
    SpendRange::new(0, 150),
    SpendRange::new(1000, 1500),
    SpendRange::new(50, 100),
    SpendRange::new(0, 150),
    SpendRange::new(0, 50),
    SpendRange::new(0, 100),
];

const MEDIUM: [SpendRange; 11] = [
    SpendRange::new(201, 400),
    SpendRange::new(101, 300),
    SpendRange::new(151, 400),
    SpendRange::new(51, 200),
    SpendRange::new(51, 150),
    SpendRange::new(151, 300),
    SpendRange::new(1501, 2200),
    SpendRange::new(101, 250),
    SpendRange::new(151, 300),
    SpendRange::new(51, 200),
    SpendRange::new(101, 200),
];

const HIGH: [SpendRange; 11] = [
    SpendRange::new(401, 600),
    SpendRange::new(301, 600),
    SpendRange::new(401, 2000),
    SpendRange::new(201, 500),
    SpendRange::new(151, 300),
    SpendRange::new(301, 1000),
    SpendRange::new(2201, 5000),
    SpendRange::new(251, 3000),
    SpendRange::new(301, 5000),
    SpendRange::new(201, 600),
    SpendRange::new(201, 1000),
];

const FLAT: [SpendRange; 11] = [
    SpendRange::new(200, 600),
    SpendRange::new(50, 300),
    SpendRange::new(0, 500),
    SpendRange::new(20, 150),
    SpendRange::new(100, 300),
    SpendRange::new(0, 300),
    SpendRange::new(1000, 3000),
    SpendRange::new(50, 500),
    SpendRange::new(0, 300),
    SpendRange::new(20, 150),
    SpendRange::new(0, 200),
];

/// Look up the spend range for a category. `tier` is ignored under the flat
/// profile; under the tiered profile a missing tier falls back to medium.
pub fn spend_range(profile: SpendProfile, tier: Option<SpendingTier>, category: Category) -> SpendRange {
    let table = match (profile, tier) {
        (SpendProfile::Flat, _) => &FLAT,
        (SpendProfile::Tiered, Some(SpendingTier::Low)) => &LOW,
        (SpendProfile::Tiered, Some(SpendingTier::Medium) | None) => &MEDIUM,
        (SpendProfile::Tiered, Some(SpendingTier::High)) => &HIGH,
    };
    table[category.index()]
}
