use std::str::FromStr;

use super::MotionError;

/// Easing curves used by the site, named after their GSAP counterparts.
///
/// `PowerNOut` is `1 - (1 - t)^(N + 1)`; `Back` overshoots by `overshoot`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    Power2Out,
    #[default]
    Power3Out,
    Power2InOut,
    BackOut(f64),
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

impl FromStr for Easing {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "none" | "linear" => return Ok(Self::Linear),
            "power2.out" => return Ok(Self::Power2Out),
            "power3.out" => return Ok(Self::Power3Out),
            "power2.inOut" => return Ok(Self::Power2InOut),
            "back.out" => return Ok(Self::BackOut(1.70158)),
            _ => {}
        }
        s.strip_prefix("back.out(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|n| n.trim().parse::<f64>().ok())
            .map(Self::BackOut)
            .ok_or_else(|| MotionError::UnknownEasing(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::Power2Out,
        Easing::Power3Out,
        Easing::Power2InOut,
        Easing::BackOut(1.7),
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-9, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Easing::Power2Out.apply(7.0), 1.0);
    }

    #[test]
    fn test_out_curves_lead_linear() {
        for easing in [Easing::Power2Out, Easing::Power3Out] {
            assert!(easing.apply(0.25) > 0.25);
        }
        assert!(Easing::Power3Out.apply(0.25) > Easing::Power2Out.apply(0.25));
    }

    #[test]
    fn test_in_out_is_symmetric() {
        let e = Easing::Power2InOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-9);
        assert!((e.apply(0.2) + e.apply(0.8) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_parse_gsap_names() {
        assert_eq!("power2.out".parse(), Ok(Easing::Power2Out));
        assert_eq!("power3.out".parse(), Ok(Easing::Power3Out));
        assert_eq!("power2.inOut".parse(), Ok(Easing::Power2InOut));
        assert_eq!("none".parse(), Ok(Easing::Linear));
        assert_eq!("back.out(1.7)".parse(), Ok(Easing::BackOut(1.7)));
        assert!("elastic.out".parse::<Easing>().is_err());
        assert!("back.out(x)".parse::<Easing>().is_err());
    }
}
