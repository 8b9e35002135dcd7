//! Experience, tier, and badge evaluation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use centime_shared::types::percent_of;

use super::types::{Badge, Progression, Tier};
use crate::forecast::ForecastStatus;
use crate::ledger::Goal;

/// Savings rate (percent of balance left after the monthly burn) the
/// Saver badge requires.
const SAVER_RATE_PERCENT: i64 = 20;

/// Goals that must exist for the Planner badge.
const PLANNER_GOAL_COUNT: usize = 3;

/// Pantry items that must exist for the Provisioner badge.
const PROVISIONER_PANTRY_COUNT: u32 = 5;

/// Experience score: floor of the balance plus 100 per completed goal,
/// clamped at zero.
#[must_use]
pub fn experience(balance: Decimal, goals: &[Goal]) -> i64 {
    let completed = goals.iter().filter(|g| g.is_completed()).count() as i64;
    // Ledger balances sit far below the i64 range.
    let raw = balance.floor().to_i64().unwrap_or_default();
    (raw + completed * 100).max(0)
}

/// The four achievement badges, each evaluated independently.
#[must_use]
pub fn achievements(
    balance: Decimal,
    monthly_burn: Decimal,
    forecast_status: ForecastStatus,
    goals: &[Goal],
    pantry_count: u32,
) -> Vec<Badge> {
    let savings_rate = if balance > Decimal::ZERO {
        percent_of(balance - monthly_burn, balance)
    } else {
        Decimal::ZERO
    };

    vec![
        badge(
            "saver",
            "Saver",
            "Savings rate above 20%",
            balance > Decimal::ZERO && savings_rate > Decimal::from(SAVER_RATE_PERCENT),
        ),
        badge(
            "resilient",
            "Resilient",
            "Month projected to end in the green",
            forecast_status == ForecastStatus::Safe,
        ),
        badge(
            "planner",
            "Planner",
            "Three goals defined",
            goals.len() >= PLANNER_GOAL_COUNT,
        ),
        badge(
            "provisioner",
            "Provisioner",
            "A well-stocked pantry",
            pantry_count >= PROVISIONER_PANTRY_COUNT,
        ),
    ]
}

/// Full progression record for one owner.
#[must_use]
pub fn evaluate(
    balance: Decimal,
    goals: &[Goal],
    monthly_burn: Decimal,
    forecast_status: ForecastStatus,
    pantry_count: u32,
) -> Progression {
    let experience = experience(balance, goals);
    let tier = Tier::for_experience(experience);

    Progression {
        experience,
        tier,
        next_threshold: tier.next_threshold(),
        badges: achievements(balance, monthly_burn, forecast_status, goals, pantry_count),
    }
}

fn badge(id: &str, name: &str, description: &str, unlocked: bool) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        unlocked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use centime_shared::types::{GoalId, OwnerId};

    use crate::ledger::GoalPriority;

    fn goal(target: Decimal, saved: Decimal) -> Goal {
        Goal {
            id: GoalId::new(),
            owner_id: OwnerId::new(),
            label: "goal".to_string(),
            target,
            saved,
            deadline: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            priority: GoalPriority::Medium,
        }
    }

    #[test]
    fn test_experience_from_balance_and_goals() {
        let goals = vec![goal(dec!(100), dec!(100)), goal(dec!(50), dec!(10))];
        // floor(1000) + 100 * 1 completed goal
        assert_eq!(experience(dec!(1000), &goals), 1100);
    }

    #[test]
    fn test_experience_clamped_at_zero() {
        assert_eq!(experience(dec!(-750.25), &[]), 0);
        // A completed goal can pull a small deficit back above zero.
        let goals = vec![goal(dec!(10), dec!(10))];
        assert_eq!(experience(dec!(-50), &goals), 50);
    }

    #[rstest]
    #[case(0, Tier::I, 500)]
    #[case(499, Tier::I, 500)]
    #[case(500, Tier::II, 2000)]
    #[case(1100, Tier::II, 2000)]
    #[case(1999, Tier::II, 2000)]
    #[case(2000, Tier::III, 5000)]
    #[case(4999, Tier::III, 5000)]
    #[case(5000, Tier::IV, 10000)]
    #[case(9999, Tier::IV, 10000)]
    #[case(10000, Tier::V, 999_999)]
    #[case(1_000_000, Tier::V, 999_999)]
    fn test_tier_ladder(#[case] xp: i64, #[case] tier: Tier, #[case] next: i64) {
        assert_eq!(Tier::for_experience(xp), tier);
        assert_eq!(tier.next_threshold(), next);
    }

    #[test]
    fn test_all_four_badges_always_present() {
        let badges = achievements(dec!(0), dec!(50), ForecastStatus::Danger, &[], 0);
        let ids: Vec<&str> = badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["saver", "resilient", "planner", "provisioner"]);
        assert!(badges.iter().all(|b| !b.unlocked));
        assert!(badges.iter().all(|b| !b.name.is_empty() && !b.description.is_empty()));
    }

    #[test]
    fn test_saver_requires_positive_balance() {
        // Zero balance locks Saver regardless of burn.
        let badges = achievements(dec!(0), dec!(50), ForecastStatus::Safe, &[], 0);
        assert!(!badges[0].unlocked);

        // 1000 balance, 50 burn -> 95% savings rate.
        let badges = achievements(dec!(1000), dec!(50), ForecastStatus::Safe, &[], 0);
        assert!(badges[0].unlocked);

        // 1000 balance, 800 burn -> 20% exactly, not strictly above.
        let badges = achievements(dec!(1000), dec!(800), ForecastStatus::Safe, &[], 0);
        assert!(!badges[0].unlocked);
    }

    #[test]
    fn test_resilient_follows_forecast() {
        let badges = achievements(dec!(100), dec!(0), ForecastStatus::Safe, &[], 0);
        assert!(badges[1].unlocked);

        let badges = achievements(dec!(100), dec!(0), ForecastStatus::Danger, &[], 0);
        assert!(!badges[1].unlocked);
    }

    #[test]
    fn test_planner_counts_goals_not_completion() {
        let goals = vec![
            goal(dec!(100), dec!(0)),
            goal(dec!(100), dec!(0)),
            goal(dec!(100), dec!(0)),
        ];
        let badges = achievements(dec!(100), dec!(0), ForecastStatus::Safe, &goals, 0);
        assert!(badges[2].unlocked);

        let badges = achievements(dec!(100), dec!(0), ForecastStatus::Safe, &goals[..2], 0);
        assert!(!badges[2].unlocked);
    }

    #[test]
    fn test_provisioner_threshold() {
        let badges = achievements(dec!(100), dec!(0), ForecastStatus::Safe, &[], 5);
        assert!(badges[3].unlocked);

        let badges = achievements(dec!(100), dec!(0), ForecastStatus::Safe, &[], 4);
        assert!(!badges[3].unlocked);
    }

    #[test]
    fn test_evaluate_composes_all_parts() {
        let goals = vec![goal(dec!(100), dec!(100)), goal(dec!(50), dec!(10))];
        let progression = evaluate(dec!(1000), &goals, dec!(50), ForecastStatus::Safe, 0);

        assert_eq!(progression.experience, 1100);
        assert_eq!(progression.tier, Tier::II);
        assert_eq!(progression.next_threshold, 2000);
        assert_eq!(progression.badges.len(), 4);
    }

    proptest::proptest! {
        /// Tier is monotonically non-decreasing in experience.
        #[test]
        fn prop_tier_monotonic(a in 0i64..20_000, b in 0i64..20_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            proptest::prop_assert!(Tier::for_experience(lo) <= Tier::for_experience(hi));
        }
    }
}
