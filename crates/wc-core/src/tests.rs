//! Unit tests for wc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CaptureId, PointId, TruckId};

    #[test]
    fn index_roundtrip() {
        let id = PointId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PointId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(TruckId(0) < TruckId(1));
        assert!(PointId(100) > PointId(99));
    }

    #[test]
    fn oversized_index_is_rejected() {
        assert!(CaptureId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(PointId(7).to_string(), "point 7");
        assert_eq!(TruckId(0).to_string(), "truck 0");
        assert_eq!(CaptureId(2).to_string(), "capture vehicle 2");
    }
}

#[cfg(test)]
mod time {
    use crate::{Minute, SimClock};

    #[test]
    fn minute_arithmetic() {
        let t = Minute(10);
        assert_eq!(t + 5, Minute(15));
        assert_eq!(t.offset(3), Minute(13));
        assert_eq!(Minute(15) - Minute(10), 5u64);
        assert_eq!(Minute(15).since(Minute(4)), 11);
    }

    #[test]
    fn clock_only_moves_forward() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), Minute::ZERO);
        assert_eq!(clock.advance(3), Minute(3));
        assert_eq!(clock.advance(0), Minute(3));
        assert_eq!(clock.advance(7), Minute(10));
    }

    #[test]
    fn budget_exhaustion_is_inclusive() {
        let mut clock = SimClock::new();
        clock.advance(479);
        assert!(!clock.exhausted(480));
        clock.advance(1);
        assert!(clock.exhausted(480));
    }

    #[test]
    fn display_hours_minutes() {
        let mut clock = SimClock::new();
        clock.advance(125);
        assert_eq!(clock.elapsed_hm(), (2, 5));
        assert_eq!(clock.to_string(), "125 min (02:05)");
    }
}

#[cfg(test)]
mod volume {
    use crate::{CoreError, Volume};

    #[test]
    fn from_m3_rounds_to_litre() {
        assert_eq!(Volume::from_m3(12.0).unwrap(), Volume(12_000));
        assert_eq!(Volume::from_m3(0.0004).unwrap(), Volume(0));
        assert_eq!(Volume::from_m3(1.2346).unwrap(), Volume(1_235));
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(matches!(Volume::from_m3(-1.0), Err(CoreError::InvalidVolume(_))));
        assert!(Volume::from_m3(f64::NAN).is_err());
        assert!(Volume::from_m3(f64::INFINITY).is_err());
        assert!(Volume::from_m3(1e16).is_err());
        assert_eq!(Volume::from_m3(Volume::MAX_M3).unwrap(), Volume(1_000_000_000_000));
    }

    #[test]
    fn checked_sum_detects_overflow() {
        assert_eq!(Volume::checked_sum([Volume(2), Volume(3)]), Some(Volume(5)));
        assert_eq!(Volume::checked_sum([Volume(u64::MAX), Volume(1)]), None);
        assert_eq!(Volume::checked_sum(std::iter::empty()), Some(Volume::ZERO));
    }

    #[test]
    fn labor_minutes_round_up() {
        // ceil(12 / 4) = 3
        assert_eq!(Volume::m3(12).labor_minutes(4), 3);
        // ceil(8 / 4) = 2
        assert_eq!(Volume::m3(8).labor_minutes(4), 2);
        // ceil(2 / 4) = 1
        assert_eq!(Volume::m3(2).labor_minutes(4), 1);
        assert_eq!(Volume::ZERO.labor_minutes(4), 0);
    }

    #[test]
    fn third_truncates() {
        assert_eq!(Volume::m3(10).third(), Volume(3_333));
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Volume(3_333).to_string(), "3.33 m³");
    }

    #[test]
    fn sum() {
        let total: Volume = [Volume::m3(1), Volume(500)].into_iter().sum();
        assert_eq!(total, Volume(1_500));
    }
}

#[cfg(test)]
mod animal {
    use crate::{AnimalCounts, AnimalKind};

    #[test]
    fn dominance_order() {
        assert!(AnimalKind::Dog.dominance() > AnimalKind::Cat.dominance());
        assert!(AnimalKind::Cat.dominance() > AnimalKind::Rodent.dominance());
    }

    #[test]
    fn rodents_are_not_capturable() {
        assert!(!AnimalKind::Rodent.is_capturable());
        assert!(AnimalKind::Cat.is_capturable());
        assert!(AnimalKind::Dog.is_capturable());
    }

    #[test]
    fn remove_never_goes_negative() {
        let mut c = AnimalCounts::new(0, 2, 0);
        assert_eq!(c.remove(AnimalKind::Cat, 5), 2);
        assert_eq!(c.get(AnimalKind::Cat), 0);
        assert_eq!(c.remove(AnimalKind::Dog, 1), 0);
    }

    #[test]
    fn presence_queries() {
        let c = AnimalCounts::new(1, 0, 0);
        assert!(c.any());
        assert!(!c.any_capturable());
        assert!(!c.all_kinds());
        assert!(AnimalCounts::new(1, 1, 1).all_kinds());
        assert!(!AnimalCounts::NONE.any());
    }

    #[test]
    fn describe() {
        assert_eq!(AnimalCounts::NONE.describe(), "none");
        assert_eq!(AnimalCounts::new(2, 0, 1).describe(), "rodent, dog");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig, Volume};

    #[test]
    fn defaults_are_valid() {
        let cfg = SimConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.budget_minutes, 480);
        assert_eq!(cfg.truck_capacity(), Volume::m3(10));
    }

    #[test]
    fn rejects_max_trucks_below_initial() {
        let cfg = SimConfig { initial_trucks: 3, max_trucks: 2, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn rejects_bad_probability() {
        let mut cfg = SimConfig::default();
        cfg.spawn.dog_given_cat = 1.5;
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("dog_given_cat"), "got {err}");
    }

    #[test]
    fn rejects_zero_capacity() {
        let cfg = SimConfig { truck_capacity_m3: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.chance(0.5), r2.chance(0.5));
        }
    }

    #[test]
    fn chance_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }

    #[test]
    fn chance_clamps_and_rejects_nan() {
        let mut rng = SimRng::new(9);
        for _ in 0..100 {
            assert!(rng.chance(7.5));
            assert!(!rng.chance(-1.0));
            assert!(!rng.chance(f64::NAN));
        }
    }
}
