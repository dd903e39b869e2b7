use crate::domain::features::{FEATURE_NAMES, OUTCOME_COLUMN};

/// The nine columns every merged training row carries, in order
pub fn common_columns() -> Vec<&'static str> {
    FEATURE_NAMES
        .iter()
        .copied()
        .chain(std::iter::once(OUTCOME_COLUMN))
        .collect()
}

/// Renames applied to a source schema before it is merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    renames: Vec<(String, String)>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self {
            renames: Vec::new(),
        }
    }

    pub fn with_rename(mut self, from: &str, to: &str) -> Self {
        self.renames.push((from.to_string(), to.to_string()));
        self
    }

    /// Schema alignment for the secondary (african health) dataset
    pub fn secondary_dataset() -> Self {
        Self::new()
            .with_rename("GlucoseLevel", "Glucose")
            .with_rename("BMI_Index", "BMI")
            .with_rename("AgeYears", "Age")
    }

    /// Target name for a header, or the header itself when not renamed
    pub fn apply<'a>(&'a self, header: &'a str) -> &'a str {
        self.renames
            .iter()
            .find(|(from, _)| from == header)
            .map(|(_, to)| to.as_str())
            .unwrap_or(header)
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty()
    }
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_columns_end_with_outcome() {
        let columns = common_columns();
        assert_eq!(columns.len(), 9);
        assert_eq!(columns[0], "Pregnancies");
        assert_eq!(columns[8], "Outcome");
    }

    #[test]
    fn test_secondary_mapping_aligns_schema() {
        let mapping = ColumnMapping::secondary_dataset();
        let secondary = [
            "Pregnancies",
            "GlucoseLevel",
            "BloodPressure",
            "SkinThickness",
            "Insulin",
            "BMI_Index",
            "DiabetesPedigreeFunction",
            "AgeYears",
            "Outcome",
        ];

        let renamed: Vec<&str> = secondary.iter().map(|h| mapping.apply(h)).collect();
        assert_eq!(renamed, common_columns());
    }

    #[test]
    fn test_unmapped_headers_pass_through() {
        let mapping = ColumnMapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.apply("GlucoseLevel"), "GlucoseLevel");
    }
}
