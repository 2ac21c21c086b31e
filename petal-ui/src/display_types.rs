//! Display types for UI components
//!
//! These types are lightweight versions of the API response models,
//! containing only the fields needed for display. They enable props-based
//! components that can work with either real or fixture data.

/// Species summary shown on search result and catalogue cards
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesSummary {
    pub id: String,
    pub scientific_name: String,
    pub common_names: Vec<String>,
    pub image_url: Option<String>,
}

impl SpeciesSummary {
    /// Preferred display name: first common name, falling back to the
    /// scientific name.
    pub fn display_name(&self) -> &str {
        self.common_names
            .first()
            .map(|n| n.as_str())
            .unwrap_or(&self.scientific_name)
    }
}

/// Catalogue entry display info
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogueEntry {
    pub species: SpeciesSummary,
    pub colors: Vec<String>,
    pub countries: Vec<String>,
    pub search_count: Option<u64>,
}

/// A selectable filter value with its display label
#[derive(Clone, Debug, PartialEq)]
pub struct FilterChoice {
    pub value: String,
    pub label: String,
    pub count: Option<u64>,
}

/// Identification outcome display info
#[derive(Clone, Debug, PartialEq)]
pub struct IdentifiedFlower {
    pub species_id: Option<String>,
    pub scientific_name: String,
    pub common_names: Vec<String>,
    pub confidence: f64,
    pub image_url: Option<String>,
    pub alternatives: Vec<AlternativeMatch>,
}

/// A lower-confidence alternative identification
#[derive(Clone, Debug, PartialEq)]
pub struct AlternativeMatch {
    pub scientific_name: String,
    pub common_names: Vec<String>,
    pub confidence: f64,
}

/// Full species profile for the detail page
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesProfile {
    pub scientific_name: String,
    pub common_names: Vec<String>,
    pub description: Option<String>,
    pub care_tips: Option<String>,
    pub bloom_season: Vec<String>,
    pub image_url: Option<String>,
}

impl SpeciesProfile {
    pub fn display_name(&self) -> &str {
        self.common_names
            .first()
            .map(|n| n.as_str())
            .unwrap_or(&self.scientific_name)
    }

    /// Common names after the primary one, for the "also known as" line.
    pub fn other_names(&self) -> &[String] {
        if self.common_names.len() > 1 {
            &self.common_names[1..]
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(common: &[&str]) -> SpeciesSummary {
        SpeciesSummary {
            id: "rosa-1".to_string(),
            scientific_name: "Rosa rubiginosa".to_string(),
            common_names: common.iter().map(|s| s.to_string()).collect(),
            image_url: None,
        }
    }

    #[test]
    fn display_name_prefers_common_name() {
        assert_eq!(summary(&["Sweet briar", "Eglantine"]).display_name(), "Sweet briar");
    }

    #[test]
    fn display_name_falls_back_to_scientific() {
        assert_eq!(summary(&[]).display_name(), "Rosa rubiginosa");
    }

    #[test]
    fn other_names_skips_primary() {
        let profile = SpeciesProfile {
            scientific_name: "Rosa rubiginosa".to_string(),
            common_names: vec!["Sweet briar".to_string(), "Eglantine".to_string()],
            description: None,
            care_tips: None,
            bloom_season: vec![],
            image_url: None,
        };
        assert_eq!(profile.other_names(), &["Eglantine".to_string()]);
    }
}
