//! Property-based tests for the room countdown

use chrono::{DateTime, Utc};
use proptest::prelude::*;

use xfrooms::egui_app::room::countdown::Countdown;
use xfrooms::shared::limits::MILESTONES_SECONDS;

fn at(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000 + seconds, 0).unwrap()
}

proptest! {
    #[test]
    fn test_milestones_fire_at_most_once_over_any_walk(
        duration in 300i64..=1200,
        steps in prop::collection::vec(0i64..120, 1..40),
    ) {
        let mut countdown = Countdown::new();
        countdown.start(at(0), duration, at(0));

        let mut seen: Vec<i64> = Vec::new();
        let mut last_remaining = countdown.remaining_seconds();
        let mut t = 0;
        for step in steps {
            t += step;
            for threshold in countdown.tick(at(t)) {
                prop_assert!(!seen.contains(&threshold));
                prop_assert!(MILESTONES_SECONDS.contains(&threshold));
                seen.push(threshold);
            }
            let remaining = countdown.remaining_seconds();
            prop_assert!(remaining >= 0);
            prop_assert!(remaining <= last_remaining);
            prop_assert_eq!(countdown.is_expired(), remaining == 0);
            last_remaining = remaining;
        }
    }

    #[test]
    fn test_override_preserves_at_most_once(
        duration in 300i64..=1200,
        before in 0i64..600,
        override_secs in -50i64..1500,
        steps in prop::collection::vec(0i64..120, 1..20),
    ) {
        let mut countdown = Countdown::new();
        countdown.start(at(0), duration, at(0));

        let mut seen: Vec<i64> = Vec::new();
        for threshold in countdown.tick(at(before)) {
            seen.push(threshold);
        }

        countdown.set_remaining(override_secs, at(before));
        prop_assert_eq!(countdown.remaining_seconds(), override_secs.max(0));

        let mut t = before;
        for step in steps {
            t += step;
            for threshold in countdown.tick(at(t)) {
                prop_assert!(!seen.contains(&threshold));
                seen.push(threshold);
            }
        }
    }

    #[test]
    fn test_late_join_announces_at_most_the_exact_threshold(
        duration in 300i64..=1200,
        offset in 0i64..1400,
    ) {
        let mut countdown = Countdown::new();
        countdown.start(at(0), duration, at(offset));

        let remaining = countdown.remaining_seconds();
        prop_assert_eq!(remaining, (duration - offset).max(0));

        // Ticking at the join instant may announce only a threshold
        // sitting exactly at the current remainder
        let crossed = countdown.tick(at(offset));
        prop_assert!(crossed.len() <= 1);
        if let Some(&threshold) = crossed.first() {
            prop_assert_eq!(threshold, remaining);
        }
    }

    #[test]
    fn test_display_shape(remaining in 0i64..=1300) {
        let mut countdown = Countdown::new();
        countdown.set_remaining(remaining, at(0));
        let display = countdown.display();
        if remaining > 60 {
            let minutes: i64 = display
                .strip_suffix(" min")
                .expect("minute form")
                .parse()
                .unwrap();
            // Whole minutes round up, never under-reporting
            prop_assert!(minutes * 60 >= remaining);
            prop_assert!((minutes - 1) * 60 < remaining);
        } else {
            let (m, s) = display.split_once(':').expect("M:SS form");
            let minutes: i64 = m.parse().unwrap();
            let seconds: i64 = s.parse().unwrap();
            prop_assert!(seconds < 60);
            prop_assert_eq!(minutes * 60 + seconds, remaining);
        }
    }
}
