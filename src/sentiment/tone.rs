//! Tone Interpreter
//!
//! Fixed-threshold mapping from polarity to a magnitude band and, combined with
//! the classifier decision, to a recommendation. Boundary values fall into the
//! band checked first.

use super::types::{Magnitude, PolarityResult, Recommendation};

const ELATION_FLOOR: f64 = 0.5;
const WARM_FLOOR: f64 = 0.2;
const SHADOW_CEILING: f64 = -0.5;
const TWILIGHT_CEILING: f64 = -0.2;

/// Polarity above which a positive decision earns the luminous pick.
const LUMINOUS_THRESHOLD: f64 = 0.4;
/// Polarity below which a negative decision earns the thriller pick.
const THRILLER_THRESHOLD: f64 = -0.4;

impl Magnitude {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity >= ELATION_FLOOR {
            Magnitude::ElationSurge
        } else if polarity >= WARM_FLOOR {
            Magnitude::WarmResonance
        } else if polarity <= SHADOW_CEILING {
            Magnitude::DeepShadow
        } else if polarity <= TWILIGHT_CEILING {
            Magnitude::CoolTwilight
        } else {
            Magnitude::BalancedHush
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Magnitude::ElationSurge => "Elation surge",
            Magnitude::WarmResonance => "Warm resonance",
            Magnitude::BalancedHush => "Balanced hush",
            Magnitude::CoolTwilight => "Cool twilight",
            Magnitude::DeepShadow => "Deep shadow",
        }
    }
}

impl Recommendation {
    pub fn select(is_positive: bool, polarity: f64) -> Self {
        match (is_positive, polarity) {
            (true, p) if p > LUMINOUS_THRESHOLD => Recommendation::LuminousStorytelling,
            (true, _) => Recommendation::SlowBurn,
            (false, p) if p < THRILLER_THRESHOLD => Recommendation::IntenseThriller,
            (false, _) => Recommendation::ResetTheVibe,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Recommendation::LuminousStorytelling => {
                "Queue the Bliss Pulse carousel for luminous storytelling."
            }
            Recommendation::SlowBurn => "Slide into Velvet Serenade for textured slow-burns.",
            Recommendation::IntenseThriller => {
                "Lean toward Neon Noir thrillers to mirror the intensity."
            }
            Recommendation::ResetTheVibe => {
                "Try Pulse of the Universe to reset the vibe with awe-heavy sci-fi."
            }
        }
    }
}

pub fn interpret(is_positive: bool, polarity: f64) -> PolarityResult {
    PolarityResult {
        polarity,
        magnitude: Magnitude::from_polarity(polarity),
        recommendation: Recommendation::select(is_positive, polarity),
    }
}
