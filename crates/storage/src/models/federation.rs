use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const DEFAULT_FEDERATION: &str = "IPF";

/// Upper-bound labels per sex, lightest first. A trailing `+` marks the open
/// class above the last bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightClassTable {
    pub male: Vec<String>,
    pub female: Vec<String>,
}

impl WeightClassTable {
    pub fn new(male: &[&str], female: &[&str]) -> Self {
        Self {
            male: male.iter().map(|s| s.to_string()).collect(),
            female: female.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Federation {
    pub code: String,
    pub name: String,
    pub equipment_levels: Vec<String>,
    pub drug_tested: bool,
    pub weight_classes: WeightClassTable,
    pub division_labels: BTreeMap<String, String>,
}

impl Federation {
    /// Display label for a division name, or the name itself when the
    /// federation does not define one.
    pub fn division_label(&self, division_name: &str) -> String {
        self.division_labels
            .get(&division_name.trim().to_uppercase())
            .cloned()
            .unwrap_or_else(|| division_name.to_string())
    }

    pub fn summary(&self) -> FederationSummary {
        FederationSummary {
            code: self.code.clone(),
            name: self.name.clone(),
            equipment_levels: self.equipment_levels.clone(),
            drug_tested: self.drug_tested,
        }
    }

    fn ipf() -> Self {
        Self {
            code: "IPF".to_string(),
            name: "International Powerlifting Federation".to_string(),
            equipment_levels: vec!["Raw".to_string(), "Equipped".to_string()],
            drug_tested: true,
            weight_classes: WeightClassTable::new(
                &["59", "66", "74", "83", "93", "105", "120", "120+"],
                &["47", "52", "57", "63", "69", "76", "84", "84+"],
            ),
            division_labels: labels(&[
                ("SJ", "Sub-Junior"),
                ("JR", "Junior"),
                ("OPEN", "Open"),
                ("M1", "Masters 1"),
                ("M2", "Masters 2"),
                ("M3", "Masters 3"),
                ("M4", "Masters 4"),
            ]),
        }
    }

    fn usapl() -> Self {
        Self {
            code: "USAPL".to_string(),
            name: "USA Powerlifting".to_string(),
            equipment_levels: vec!["Raw".to_string(), "Equipped".to_string()],
            drug_tested: true,
            weight_classes: WeightClassTable::new(
                &["52", "56", "60", "67.5", "75", "82.5", "90", "100", "110", "125", "140", "140+"],
                &["44", "48", "52", "56", "60", "67.5", "75", "82.5", "90", "100", "100+"],
            ),
            division_labels: labels(&[
                ("T1", "Teen 1"),
                ("T2", "Teen 2"),
                ("T3", "Teen 3"),
                ("JR", "Junior"),
                ("OPEN", "Open"),
                ("M1", "Master 1"),
                ("M2", "Master 2"),
            ]),
        }
    }

    fn uspa() -> Self {
        Self {
            code: "USPA".to_string(),
            name: "United States Powerlifting Association".to_string(),
            equipment_levels: vec![
                "Raw".to_string(),
                "Raw with Wraps".to_string(),
                "Single-ply".to_string(),
                "Multi-ply".to_string(),
            ],
            drug_tested: false,
            weight_classes: WeightClassTable::new(
                &["52", "56", "60", "67.5", "75", "82.5", "90", "100", "110", "125", "140", "140+"],
                &["44", "48", "52", "56", "60", "67.5", "75", "82.5", "90", "100", "110", "110+"],
            ),
            division_labels: labels(&[
                ("JR", "Junior (20-23)"),
                ("OPEN", "Open"),
                ("SUBMASTER", "Submaster (35-39)"),
                ("M1", "Master (40-44)"),
            ]),
        }
    }
}

fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FederationSummary {
    pub code: String,
    pub name: String,
    pub equipment_levels: Vec<String>,
    pub drug_tested: bool,
}

/// Built-in federation configuration, keyed by upper-case code.
pub struct FederationRegistry {
    federations: BTreeMap<String, Federation>,
    fallback: Federation,
}

impl FederationRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            federations: BTreeMap::new(),
            fallback: Federation::ipf(),
        };

        registry.register(Federation::ipf());
        registry.register(Federation::usapl());
        registry.register(Federation::uspa());

        registry
    }

    fn register(&mut self, federation: Federation) {
        self.federations.insert(federation.code.clone(), federation);
    }

    /// Looks a federation up by code, falling back to the default federation
    /// for unknown codes.
    pub fn get(&self, code: &str) -> &Federation {
        self.federations
            .get(&code.trim().to_uppercase())
            .unwrap_or(&self.fallback)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.federations.contains_key(&code.trim().to_uppercase())
    }

    pub fn codes(&self) -> Vec<String> {
        self.federations.keys().cloned().collect()
    }

    pub fn summaries(&self) -> Vec<FederationSummary> {
        self.federations.values().map(Federation::summary).collect()
    }
}

impl Default for FederationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup_is_case_insensitive() {
        let registry = FederationRegistry::new();
        assert_eq!(registry.get("usapl").code, "USAPL");
        assert!(registry.contains(" uspa "));
    }

    #[test]
    fn test_unknown_code_falls_back_to_default() {
        let registry = FederationRegistry::new();
        assert_eq!(registry.get("WRPF").code, DEFAULT_FEDERATION);
        assert!(!registry.contains("WRPF"));
    }

    #[test]
    fn test_codes_are_sorted() {
        let registry = FederationRegistry::new();
        assert_eq!(registry.codes(), vec!["IPF", "USAPL", "USPA"]);
        assert_eq!(registry.summaries().len(), 3);
    }

    #[test]
    fn test_division_label() {
        let federation = FederationRegistry::new().get("IPF").clone();
        assert_eq!(federation.division_label("jr"), "Junior");
        assert_eq!(federation.division_label("Guest"), "Guest");
    }
}
