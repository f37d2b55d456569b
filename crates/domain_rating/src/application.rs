//! Application record collected by the quote wizard
//!
//! The application is the immutable input to the rating engine. It is
//! assembled incrementally by the collection layer and never mutated after
//! submission; the engine recomputes the breakdown from scratch on every
//! invocation.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// Identity and contact details for the applicant
///
/// Informational only. None of these fields influence the premium.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// National registration card number
    pub national_id: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
}

/// Classes of vehicle with distinct base rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Van,
}

/// The insured vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub registration_number: String,
    pub vehicle_type: VehicleType,
    /// Current market value in ZMW - the primary price driver
    pub current_value: Money,
}

/// Driver history relevant to rating
///
/// Every field here is optional or defaultable; the engine treats missing
/// data as neutral rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverInfo {
    pub date_of_birth: Option<NaiveDate>,
    /// Date the driving licence was first issued, preferred tenure source
    pub license_issued_date: Option<NaiveDate>,
    /// Whole years held, used when no issue date was captured
    pub license_years: Option<u32>,
    #[serde(default)]
    pub has_accidents: bool,
    #[serde(default)]
    pub number_of_claims: u32,
    pub occupation: Option<String>,
}

impl DriverInfo {
    /// Age in whole years as of the given date
    ///
    /// Derived by calendar-year subtraction, matching how the product
    /// brackets drivers into age bands. Returns None when no date of birth
    /// was captured.
    pub fn age_as_of(&self, as_of: NaiveDate) -> Option<i32> {
        self.date_of_birth.map(|dob| as_of.year() - dob.year())
    }

    /// Licence tenure in years as of the given date
    ///
    /// A continuous quantity (elapsed days / 365) when an issue date is
    /// available, otherwise the declared whole years. Returns None when
    /// neither source was captured.
    pub fn tenure_years_as_of(&self, as_of: NaiveDate) -> Option<Decimal> {
        if let Some(issued) = self.license_issued_date {
            let days = (as_of - issued).num_days();
            return Some(Decimal::from(days) / Decimal::from(365));
        }
        self.license_years.map(Decimal::from)
    }
}

/// Coverage tiers of decreasing scope and cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoverageType {
    Comprehensive,
    ThirdParty,
    ThirdPartyFireTheft,
}

/// Declared use of the vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleUse {
    Private,
    Commercial,
}

impl Default for VehicleUse {
    fn default() -> Self {
        VehicleUse::Private
    }
}

/// Policy term in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum CoverPeriod {
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl CoverPeriod {
    /// Number of months in the term
    pub fn months(&self) -> u32 {
        match self {
            CoverPeriod::OneMonth => 1,
            CoverPeriod::ThreeMonths => 3,
            CoverPeriod::SixMonths => 6,
            CoverPeriod::TwelveMonths => 12,
        }
    }

    /// Fraction of a full year covered by the term
    pub fn year_fraction(&self) -> Decimal {
        Decimal::from(self.months()) / Decimal::from(12)
    }
}

impl Default for CoverPeriod {
    fn default() -> Self {
        CoverPeriod::TwelveMonths
    }
}

impl TryFrom<u32> for CoverPeriod {
    type Error = String;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            1 => Ok(CoverPeriod::OneMonth),
            3 => Ok(CoverPeriod::ThreeMonths),
            6 => Ok(CoverPeriod::SixMonths),
            12 => Ok(CoverPeriod::TwelveMonths),
            other => Err(format!("Invalid cover period: {} months", other)),
        }
    }
}

impl From<CoverPeriod> for u32 {
    fn from(period: CoverPeriod) -> u32 {
        period.months()
    }
}

/// Optional coverage extensions, each a flat annual charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddOn {
    Breakdown,
    Windscreen,
    LegalCover,
    PassengerLiability,
    RiotStrike,
    ExcessProtector,
    CarHire,
    RoadsideAssistance,
    CrossBorder,
}

impl AddOn {
    /// All add-ons offered on the product
    pub const ALL: [AddOn; 9] = [
        AddOn::Breakdown,
        AddOn::Windscreen,
        AddOn::LegalCover,
        AddOn::PassengerLiability,
        AddOn::RiotStrike,
        AddOn::ExcessProtector,
        AddOn::CarHire,
        AddOn::RoadsideAssistance,
        AddOn::CrossBorder,
    ];

    /// Human-readable name for summaries
    pub fn label(&self) -> &'static str {
        match self {
            AddOn::Breakdown => "Breakdown Cover",
            AddOn::Windscreen => "Windscreen Cover",
            AddOn::LegalCover => "Legal Cover",
            AddOn::PassengerLiability => "Passenger Liability",
            AddOn::RiotStrike => "Riot, Strike & Civil Commotion",
            AddOn::ExcessProtector => "Excess Protector",
            AddOn::CarHire => "Car Hire (Post-accident)",
            AddOn::RoadsideAssistance => "Roadside Assistance",
            AddOn::CrossBorder => "Cross-Border Cover (SADC)",
        }
    }
}

/// The set of selected add-ons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOns {
    pub breakdown: bool,
    pub windscreen: bool,
    pub legal_cover: bool,
    pub passenger_liability: bool,
    pub riot_strike: bool,
    pub excess_protector: bool,
    pub car_hire: bool,
    pub roadside_assistance: bool,
    pub cross_border: bool,
}

impl AddOns {
    /// No extensions selected
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether a given add-on is selected
    pub fn includes(&self, add_on: AddOn) -> bool {
        match add_on {
            AddOn::Breakdown => self.breakdown,
            AddOn::Windscreen => self.windscreen,
            AddOn::LegalCover => self.legal_cover,
            AddOn::PassengerLiability => self.passenger_liability,
            AddOn::RiotStrike => self.riot_strike,
            AddOn::ExcessProtector => self.excess_protector,
            AddOn::CarHire => self.car_hire,
            AddOn::RoadsideAssistance => self.roadside_assistance,
            AddOn::CrossBorder => self.cross_border,
        }
    }

    /// Iterates over the selected add-ons in product order
    pub fn active(&self) -> impl Iterator<Item = AddOn> + '_ {
        AddOn::ALL.into_iter().filter(|a| self.includes(*a))
    }

    /// Returns a copy with the given add-on toggled on or off
    pub fn with(&self, add_on: AddOn, selected: bool) -> Self {
        let mut next = *self;
        match add_on {
            AddOn::Breakdown => next.breakdown = selected,
            AddOn::Windscreen => next.windscreen = selected,
            AddOn::LegalCover => next.legal_cover = selected,
            AddOn::PassengerLiability => next.passenger_liability = selected,
            AddOn::RiotStrike => next.riot_strike = selected,
            AddOn::ExcessProtector => next.excess_protector = selected,
            AddOn::CarHire => next.car_hire = selected,
            AddOn::RoadsideAssistance => next.roadside_assistance = selected,
            AddOn::CrossBorder => next.cross_border = selected,
        }
        next
    }
}

/// The coverage the applicant selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSelection {
    pub coverage_type: CoverageType,
    /// Voluntary excess in ZMW; higher excess earns a discount
    pub excess_amount: Money,
    #[serde(default)]
    pub add_ons: AddOns,
    #[serde(default)]
    pub additional_drivers: u32,
    #[serde(default)]
    pub vehicle_use: VehicleUse,
    #[serde(default)]
    pub cover_period: CoverPeriod,
}

/// A complete quote application
///
/// Built incrementally across the wizard steps; immutable input to the
/// rating engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub personal: PersonalInfo,
    pub vehicle: VehicleDetails,
    pub driver: DriverInfo,
    pub coverage: CoverageSelection,
}
