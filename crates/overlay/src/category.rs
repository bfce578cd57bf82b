//! Drought Monitor severity categories.

/// Severity category attached to each boundary feature via its `DM` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DmCategory {
    /// DM −1: no drought.
    None,
    /// DM 0: abnormally dry.
    AbnormallyDry,
    /// DM 1: moderate drought.
    ModerateDrought,
    /// DM 2: severe drought.
    SevereDrought,
    /// DM 3: extreme drought.
    ExtremeDrought,
    /// DM 4: exceptional drought.
    ExceptionalDrought,
}

impl DmCategory {
    /// All categories in ascending severity order.
    pub const ALL: [DmCategory; 6] = [
        DmCategory::None,
        DmCategory::AbnormallyDry,
        DmCategory::ModerateDrought,
        DmCategory::SevereDrought,
        DmCategory::ExtremeDrought,
        DmCategory::ExceptionalDrought,
    ];

    /// Maps an upstream `DM` code; codes outside −1..=4 are unknown.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            -1 => Some(DmCategory::None),
            0 => Some(DmCategory::AbnormallyDry),
            1 => Some(DmCategory::ModerateDrought),
            2 => Some(DmCategory::SevereDrought),
            3 => Some(DmCategory::ExtremeDrought),
            4 => Some(DmCategory::ExceptionalDrought),
            _ => None,
        }
    }

    /// The upstream `DM` code.
    pub fn code(self) -> i8 {
        match self {
            DmCategory::None => -1,
            DmCategory::AbnormallyDry => 0,
            DmCategory::ModerateDrought => 1,
            DmCategory::SevereDrought => 2,
            DmCategory::ExtremeDrought => 3,
            DmCategory::ExceptionalDrought => 4,
        }
    }

    /// Descriptive text for the category.
    pub fn label(self) -> &'static str {
        match self {
            DmCategory::None => "None",
            DmCategory::AbnormallyDry => "Abnormally Dry",
            DmCategory::ModerateDrought => "Moderate Drought",
            DmCategory::SevereDrought => "Severe Drought",
            DmCategory::ExtremeDrought => "Extreme Drought",
            DmCategory::ExceptionalDrought => "Exceptional Drought",
        }
    }

    /// Fill color used when rendering the category.
    pub fn fill_color(self) -> &'static str {
        match self {
            DmCategory::None | DmCategory::AbnormallyDry => "#FFFFCC",
            DmCategory::ModerateDrought => "#FD8D3C",
            DmCategory::SevereDrought => "#FC4E2A",
            DmCategory::ExtremeDrought => "#E31A1C",
            DmCategory::ExceptionalDrought => "#800026",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for category in DmCategory::ALL {
            assert_eq!(DmCategory::from_code(category.code() as i64), Some(category));
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        assert_eq!(DmCategory::from_code(5), None);
        assert_eq!(DmCategory::from_code(-2), None);
    }

    #[test]
    fn severity_ordering() {
        assert!(DmCategory::None < DmCategory::AbnormallyDry);
        assert!(DmCategory::ExtremeDrought < DmCategory::ExceptionalDrought);
    }

    #[test]
    fn labels() {
        assert_eq!(DmCategory::ExceptionalDrought.label(), "Exceptional Drought");
        assert_eq!(DmCategory::None.label(), "None");
    }

    #[test]
    fn colors_darken_with_severity() {
        assert_eq!(DmCategory::AbnormallyDry.fill_color(), "#FFFFCC");
        assert_eq!(DmCategory::ExceptionalDrought.fill_color(), "#800026");
    }
}
