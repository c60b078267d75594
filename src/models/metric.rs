/// Price metric labels selectable on the budgets screen.
///
/// Display options only; plans are never validated against the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PriceMetric {
    Cpm,
    Cpc,
    Cpa,
}

impl PriceMetric {
    pub(crate) fn id(&self) -> u8 {
        match self {
            Self::Cpm => 1,
            Self::Cpc => 2,
            Self::Cpa => 3,
        }
    }

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Cpm => "CPM",
            Self::Cpc => "CPC",
            Self::Cpa => "CPA",
        }
    }

    pub(crate) fn all() -> &'static [PriceMetric] {
        &[Self::Cpm, Self::Cpc, Self::Cpa]
    }

    /// The next metric in the fixed cycle, wrapping around.
    pub(crate) fn next(&self) -> PriceMetric {
        match self {
            Self::Cpm => Self::Cpc,
            Self::Cpc => Self::Cpa,
            Self::Cpa => Self::Cpm,
        }
    }
}

impl std::fmt::Display for PriceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
