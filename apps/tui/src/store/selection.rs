use serde::Serialize;

pub const DEFAULT_COUNTRY: &str = "ghana";
pub const DEFAULT_SECTOR: &str = "agriculture";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub country: String,
    pub sector: String,
}

impl Selection {
    pub fn new(country: impl Into<String>, sector: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            sector: sector.into(),
        }
    }

    pub fn matches(&self, country: &str, sector: &str) -> bool {
        self.country.eq_ignore_ascii_case(country) && self.sector.eq_ignore_ascii_case(sector)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY, DEFAULT_SECTOR)
    }
}

/// The selection a request was issued for, stamped with the selection
/// generation at issue time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTag {
    pub generation: u64,
    pub country: String,
    pub sector: String,
}

impl SelectionTag {
    /// True when a response carrying this tag may still be committed.
    pub fn is_current(&self, selection: &Selection, generation: u64) -> bool {
        self.generation == generation && selection.matches(&self.country, &self.sector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ghana_agriculture() {
        let selection = Selection::default();
        assert_eq!(selection.country, "ghana");
        assert_eq!(selection.sector, "agriculture");
    }

    #[test]
    fn tag_goes_stale_on_generation_or_pair_change() {
        let selection = Selection::new("kenya", "water");
        let tag = SelectionTag {
            generation: 3,
            country: "Kenya".into(),
            sector: "water".into(),
        };
        assert!(tag.is_current(&selection, 3));
        assert!(!tag.is_current(&selection, 4));
        assert!(!tag.is_current(&Selection::default(), 3));
    }
}
