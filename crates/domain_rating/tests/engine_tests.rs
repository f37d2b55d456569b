//! Rating Engine Property and Scenario Tests
//!
//! Exercises the documented guarantees of the rating engine:
//! - Monotonicity in vehicle value
//! - The minimum-premium floor
//! - Idempotence for a fixed rating date
//! - Proration consistency across cover periods
//! - Add-on additivity
//!
//! # Test Organization
//!
//! - `invariants` - properties checked over generated applications
//! - `add_on_tests` - flat-charge additivity
//! - `serde_tests` - application wire format

use chrono::NaiveDate;
use core_kernel::Money;
use domain_rating::{
    compute_quote_as_of, AddOn, AddOns, Application, CoverPeriod, CoverageSelection, CoverageType,
    DriverInfo, PersonalInfo, RatingEngine, VehicleDetails, VehicleType, VehicleUse,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn base_application() -> Application {
    Application {
        personal: PersonalInfo {
            first_name: "Bwalya".to_string(),
            last_name: "Phiri".to_string(),
            email: "bwalya.phiri@example.com".to_string(),
            phone: "+260977654321".to_string(),
            ..PersonalInfo::default()
        },
        vehicle: VehicleDetails {
            make: "Nissan".to_string(),
            model: "Hardbody".to_string(),
            year: Some(2016),
            registration_number: "ALB 902".to_string(),
            vehicle_type: VehicleType::Car,
            current_value: Money::zmw(dec!(80000)),
        },
        driver: DriverInfo {
            date_of_birth: NaiveDate::from_ymd_opt(1988, 4, 2),
            license_issued_date: NaiveDate::from_ymd_opt(2008, 7, 1),
            ..DriverInfo::default()
        },
        coverage: CoverageSelection {
            coverage_type: CoverageType::Comprehensive,
            excess_amount: Money::zmw(dec!(0)),
            add_ons: AddOns::none(),
            additional_drivers: 0,
            vehicle_use: VehicleUse::Private,
            cover_period: CoverPeriod::TwelveMonths,
        },
    }
}

fn arb_application() -> impl Strategy<Value = Application> {
    (
        0i64..2_000_000i64,
        prop_oneof![
            Just(VehicleType::Car),
            Just(VehicleType::Motorcycle),
            Just(VehicleType::Van)
        ],
        1940i32..2007i32,
        prop_oneof![
            Just(CoverageType::Comprehensive),
            Just(CoverageType::ThirdParty),
            Just(CoverageType::ThirdPartyFireTheft)
        ],
        0i64..50_000i64,
        prop_oneof![
            Just(CoverPeriod::OneMonth),
            Just(CoverPeriod::ThreeMonths),
            Just(CoverPeriod::SixMonths),
            Just(CoverPeriod::TwelveMonths)
        ],
        any::<bool>(),
        0u32..5u32,
    )
        .prop_map(
            |(value, vehicle_type, birth_year, coverage_type, excess, period, accidents, claims)| {
                let mut app = base_application();
                app.vehicle.vehicle_type = vehicle_type;
                app.vehicle.current_value = Money::zmw(Decimal::from(value));
                app.driver.date_of_birth = NaiveDate::from_ymd_opt(birth_year, 6, 1);
                app.driver.has_accidents = accidents;
                app.driver.number_of_claims = claims;
                app.coverage.coverage_type = coverage_type;
                app.coverage.excess_amount = Money::zmw(Decimal::from(excess));
                app.coverage.cover_period = period;
                app
            },
        )
}

mod invariants {
    use super::*;

    proptest! {
        /// Increasing the vehicle value never decreases the base premium
        #[test]
        fn base_price_monotonic_in_value(app in arb_application(), bump in 1i64..500_000i64) {
            let lower = compute_quote_as_of(&app, as_of());

            let mut richer = app.clone();
            richer.vehicle.current_value =
                Money::zmw(app.vehicle.current_value.amount() + Decimal::from(bump));
            let higher = compute_quote_as_of(&richer, as_of());

            prop_assert!(higher.base_price.amount() >= lower.base_price.amount());
        }

        /// The prorated total never drops below the floor's share of the term
        #[test]
        fn floor_invariant(app in arb_application()) {
            let breakdown = compute_quote_as_of(&app, as_of());
            let engine = RatingEngine::new();
            let floor = engine.table().minimum_annual_premium.amount();
            let fraction = app.coverage.cover_period.year_fraction();

            prop_assert!(breakdown.total_price.amount() >= (floor * fraction).round_dp(2));
            prop_assert!(!breakdown.total_price.is_negative());
            prop_assert!(!breakdown.monthly_price.is_negative());
        }

        /// Rating the same application twice yields an identical breakdown
        #[test]
        fn idempotent_for_fixed_date(app in arb_application()) {
            let first = compute_quote_as_of(&app, as_of());
            let second = compute_quote_as_of(&app, as_of());
            prop_assert_eq!(first, second);
        }

        /// total = annual x period/12 for every period, within rounding
        #[test]
        fn proration_consistency(app in arb_application()) {
            let mut annual_app = app.clone();
            annual_app.coverage.cover_period = CoverPeriod::TwelveMonths;
            let annual = compute_quote_as_of(&annual_app, as_of());

            let breakdown = compute_quote_as_of(&app, as_of());
            let expected = annual.total_price.amount()
                * app.coverage.cover_period.year_fraction();

            let delta = (breakdown.total_price.amount() - expected).abs();
            prop_assert!(delta <= dec!(0.01), "total {} vs expected {}", breakdown.total_price, expected);
        }

        /// Breakdown components reconcile: total = (base + charges - discount) x fraction
        /// whenever the floor is not in play
        #[test]
        fn components_reconcile(app in arb_application()) {
            let breakdown = compute_quote_as_of(&app, as_of());
            let annual = breakdown.base_price.amount()
                + breakdown.additional_charges.amount()
                - breakdown.discount.amount();

            if annual >= dec!(200) {
                let expected = annual * app.coverage.cover_period.year_fraction();
                let delta = (breakdown.total_price.amount() - expected).abs();
                // Components are individually rounded to whole Kwacha
                prop_assert!(delta <= dec!(2));
            }
        }
    }
}

mod add_on_tests {
    use super::*;

    /// Toggling exactly one add-on moves additional charges by exactly its fee
    #[test]
    fn test_single_add_on_additivity() {
        let engine = RatingEngine::new();
        let app = base_application();
        let without = engine.quote_as_of(&app, as_of());

        for add_on in AddOn::ALL {
            let mut with_one = app.clone();
            with_one.coverage.add_ons = AddOns::none().with(add_on, true);
            let with = engine.quote_as_of(&with_one, as_of());

            let delta = with.additional_charges - without.additional_charges;
            assert_eq!(
                delta,
                engine.table().add_on_fee(add_on),
                "unexpected charge delta for {}",
                add_on.label()
            );
        }
    }

    #[test]
    fn test_all_add_ons_sum() {
        let engine = RatingEngine::new();
        let mut app = base_application();
        app.coverage.add_ons = AddOns {
            breakdown: true,
            windscreen: true,
            legal_cover: true,
            passenger_liability: true,
            riot_strike: true,
            excess_protector: true,
            car_hire: true,
            roadside_assistance: true,
            cross_border: true,
        };
        let breakdown = engine.quote_as_of(&app, as_of());

        // 1200+900+800+2500+1500+2000+3000+1800+2200
        assert_eq!(breakdown.additional_charges, Money::zmw(dec!(15900)));
    }

    #[test]
    fn test_additional_drivers_fee() {
        let engine = RatingEngine::new();
        let mut app = base_application();
        app.coverage.additional_drivers = 3;
        let breakdown = engine.quote_as_of(&app, as_of());

        assert_eq!(breakdown.additional_charges, Money::zmw(dec!(1500)));
    }
}

mod serde_tests {
    use super::*;

    #[test]
    fn test_application_round_trips_through_json() {
        let app = base_application();
        let json = serde_json::to_string(&app).unwrap();
        let back: Application = serde_json::from_str(&json).unwrap();
        assert_eq!(app, back);
    }

    #[test]
    fn test_wire_enum_names() {
        let json = serde_json::to_value(CoverageType::ThirdPartyFireTheft).unwrap();
        assert_eq!(json, serde_json::json!("thirdPartyFireTheft"));

        let json = serde_json::to_value(VehicleType::Motorcycle).unwrap();
        assert_eq!(json, serde_json::json!("motorcycle"));
    }

    #[test]
    fn test_optional_driver_fields_default() {
        // Unknown history deserializes to the neutral defaults
        let driver: DriverInfo = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(!driver.has_accidents);
        assert_eq!(driver.number_of_claims, 0);
        assert!(driver.date_of_birth.is_none());
        assert!(driver.tenure_years_as_of(as_of()).is_none());
    }
}
