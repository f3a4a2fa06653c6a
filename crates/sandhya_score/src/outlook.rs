//! Qualitative outlook tiers for presentation.
//!
//! Fixed inclusive thresholds at 0.8 / 0.6 / 0.4 map the probability to
//! a tier, and the tier to the message, accent color, and gradient the
//! UI layer renders. Lookup tables only; no scoring logic lives here.

/// Presentation tier for a beauty probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlookTier {
    /// Probability >= 0.8.
    Spectacular,
    /// Probability >= 0.6.
    Great,
    /// Probability >= 0.4.
    Moderate,
    /// Everything below 0.4.
    Basic,
}

impl OutlookTier {
    /// Classify a probability. Thresholds are inclusive lower bounds.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            Self::Spectacular
        } else if probability >= 0.6 {
            Self::Great
        } else if probability >= 0.4 {
            Self::Moderate
        } else {
            Self::Basic
        }
    }

    /// Headline message for this tier.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Spectacular => "Spectacular sunrise/sunset expected!",
            Self::Great => "Great conditions for beautiful colors",
            Self::Moderate => "Moderate chance of a pretty display",
            Self::Basic => "Basic sunrise/sunset conditions",
        }
    }

    /// Accent color class for the probability readout.
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Spectacular => "text-orange-500",
            Self::Great => "text-yellow-500",
            Self::Moderate => "text-blue-500",
            Self::Basic => "text-gray-500",
        }
    }

    /// Background gradient class for the probability bar.
    pub const fn gradient_class(self) -> &'static str {
        match self {
            Self::Spectacular => "from-orange-500 to-red-500",
            Self::Great => "from-yellow-500 to-orange-500",
            Self::Moderate => "from-blue-500 to-purple-500",
            Self::Basic => "from-gray-400 to-gray-600",
        }
    }
}
