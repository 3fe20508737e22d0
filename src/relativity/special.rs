//! Boosts in natural units: velocities are fractions of c and time is
//! carried as ct, so light rays have slope ±1.

/// Returned by [`gamma`] when `v >= 1` instead of dividing by zero.
pub const GAMMA_SENTINEL: f64 = 1e6;

/// A point in spacetime, (x, ct).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub x: f64,
    pub ct: f64,
}

impl Event {
    pub const fn new(x: f64, ct: f64) -> Self {
        Self { x, ct }
    }

    /// Spacetime interval s² = x² − (ct)², measured from the origin.
    pub fn interval(&self) -> f64 {
        self.x * self.x - self.ct * self.ct
    }
}

pub const ORIGIN: Event = Event::new(0.0, 0.0);
/// Purely spatial separation from the origin.
pub const EVENT_A: Event = Event::new(1.0, 0.0);
/// Purely temporal separation from the origin.
pub const EVENT_B: Event = Event::new(0.0, 1.0);

/// Lorentz factor γ = 1 / sqrt(1 - v²)
pub fn gamma(v: f64) -> f64 {
    if v < 1.0 {
        1.0 / (1.0 - v * v).sqrt()
    } else {
        GAMMA_SENTINEL
    }
}

/// x' = x − v·ct, ct' = ct
pub fn galilean_transform(x: f64, ct: f64, v: f64) -> (f64, f64) {
    (x - v * ct, ct)
}

/// x' = γ(x − v·ct), ct' = γ(ct − v·x)
pub fn lorentz_transform(x: f64, ct: f64, v: f64) -> (f64, f64) {
    let g = gamma(v);
    (g * (x - v * ct), g * (ct - v * x))
}

/// Length contraction: L = L0 / γ
pub fn length_contraction(proper_length: f64, v: f64) -> f64 {
    proper_length / gamma(v)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boost {
    Galilean,
    Lorentz,
}

impl Boost {
    pub fn apply(self, event: Event, v: f64) -> Event {
        let (x, ct) = match self {
            Boost::Galilean => galilean_transform(event.x, event.ct, v),
            Boost::Lorentz => lorentz_transform(event.x, event.ct, v),
        };
        Event::new(x, ct)
    }

    /// Scale factor for the moving frame's rulers; Galilean rulers never contract.
    pub fn gamma(self, v: f64) -> f64 {
        match self {
            Boost::Galilean => 1.0,
            Boost::Lorentz => gamma(v),
        }
    }

    /// Whether s² is invariant under this boost and therefore worth showing.
    pub fn preserves_interval(self) -> bool {
        matches!(self, Boost::Lorentz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    const SAMPLE_VELOCITIES: [f64; 5] = [0.0, 0.3, 0.6, 0.9, 0.99];

    #[test]
    fn gamma_at_rest_is_one() {
        assert_eq!(gamma(0.0), 1.0);
    }

    #[test]
    fn gamma_known_values() {
        assert_relative_eq!(gamma(0.5), 1.0 / 0.75f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(gamma(0.6), 1.25, max_relative = 1e-12);
        assert_relative_eq!(gamma(0.99), 1.0 / (1.0 - 0.99f64 * 0.99).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn gamma_guard_returns_sentinel() {
        assert_eq!(gamma(1.0), GAMMA_SENTINEL);
        assert_eq!(gamma(1.5), GAMMA_SENTINEL);
        assert!(gamma(1.0).is_finite());
    }

    #[test]
    fn galilean_scenarios() {
        assert_eq!(galilean_transform(1.0, 0.0, 0.5), (1.0, 0.0));
        let (x, ct) = galilean_transform(0.0, 1.0, 0.6);
        assert_abs_diff_eq!(x, -0.6, epsilon = 1e-12);
        assert_eq!(ct, 1.0);
    }

    #[test]
    fn galilean_at_rest_is_identity() {
        assert_eq!(galilean_transform(3.0, 2.0, 0.0), (3.0, 2.0));
    }

    #[test]
    fn lorentz_event_a_scenario() {
        let (x, ct) = lorentz_transform(1.0, 0.0, 0.6);
        assert_relative_eq!(x, gamma(0.6), max_relative = 1e-12);
        assert_relative_eq!(ct, -gamma(0.6) * 0.6, max_relative = 1e-12);
        assert_relative_eq!(x, 1.25, max_relative = 1e-12);
        assert_relative_eq!(ct, -0.75, max_relative = 1e-12);
    }

    #[test]
    fn lorentz_event_b() {
        let g = gamma(0.6);
        let (x, ct) = lorentz_transform(0.0, 1.0, 0.6);
        assert_relative_eq!(x, -g * 0.6, max_relative = 1e-12);
        assert_relative_eq!(ct, g, max_relative = 1e-12);
    }

    #[test]
    fn lorentz_preserves_interval_for_canonical_events() {
        for &v in &SAMPLE_VELOCITIES {
            for event in [EVENT_A, EVENT_B] {
                let boosted = Boost::Lorentz.apply(event, v);
                assert_abs_diff_eq!(boosted.interval(), event.interval(), epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn galilean_breaks_interval_for_timelike_event() {
        let boosted = Boost::Galilean.apply(EVENT_B, 0.6);
        assert!((boosted.interval() - EVENT_B.interval()).abs() > 1e-6);
    }

    #[test]
    fn galilean_keeps_interval_of_spacelike_event_a() {
        for v in [0.3, 0.6, 0.9] {
            let boosted = Boost::Galilean.apply(EVENT_A, v);
            assert_abs_diff_eq!(boosted.interval(), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn lorentz_approaches_galilean_at_low_velocity() {
        let v = 0.001;
        let (xg, ctg) = galilean_transform(0.0, 2.0, v);
        let (xl, ctl) = lorentz_transform(0.0, 2.0, v);
        assert_abs_diff_eq!(xl, xg, epsilon = 1e-5);
        assert_abs_diff_eq!(ctl, ctg, epsilon = 1e-5);
    }

    #[test]
    fn length_contraction_scales_by_gamma() {
        assert_relative_eq!(length_contraction(1.0, 0.6), 0.8, max_relative = 1e-12);
        assert_eq!(length_contraction(2.0, 0.0), 2.0);
    }

    #[test]
    fn boost_gamma_is_unity_for_galilean() {
        assert_eq!(Boost::Galilean.gamma(0.9), 1.0);
        assert_relative_eq!(Boost::Lorentz.gamma(0.6), 1.25, max_relative = 1e-12);
        assert!(Boost::Lorentz.preserves_interval());
        assert!(!Boost::Galilean.preserves_interval());
    }

    proptest! {
        #[test]
        fn gamma_is_at_least_one(v in 0.0f64..1.0) {
            prop_assert!(gamma(v) >= 1.0);
        }

        #[test]
        fn gamma_is_sentinel_at_or_above_c(v in 1.0f64..1e6) {
            prop_assert_eq!(gamma(v), GAMMA_SENTINEL);
        }

        #[test]
        fn origin_is_fixed_by_both_boosts(v in -2.0f64..2.0) {
            prop_assert_eq!(Boost::Galilean.apply(ORIGIN, v), ORIGIN);
            let o = Boost::Lorentz.apply(ORIGIN, v.abs().min(0.999));
            prop_assert_eq!(o.x, 0.0);
            prop_assert_eq!(o.ct, 0.0);
        }

        #[test]
        fn galilean_time_is_absolute(x in -10.0f64..10.0, ct in -10.0f64..10.0, v in -2.0f64..2.0) {
            let (_, ct_prime) = galilean_transform(x, ct, v);
            prop_assert_eq!(ct_prime, ct);
        }

        #[test]
        fn lorentz_preserves_interval(x in -5.0f64..5.0, ct in -5.0f64..5.0, v in 0.0f64..0.95) {
            let e = Event::new(x, ct);
            let boosted = Boost::Lorentz.apply(e, v);
            prop_assert!((boosted.interval() - e.interval()).abs() < 1e-9);
        }
    }
}
