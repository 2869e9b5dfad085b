use serde::{Deserialize, Serialize};

/// Equipment categories offered in the partner catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentCategory {
    Energie,
}

impl EquipmentCategory {
    /// Tag stored in the form
    pub fn code(&self) -> &'static str {
        match self {
            EquipmentCategory::Energie => "energie",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EquipmentCategory::Energie => "Énergie",
        }
    }

    pub fn all() -> Vec<EquipmentCategory> {
        vec![EquipmentCategory::Energie]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "energie" => Some(EquipmentCategory::Energie),
            _ => None,
        }
    }
}

impl Default for EquipmentCategory {
    fn default() -> Self {
        EquipmentCategory::Energie
    }
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Sub-categories of equipment.
///
/// Not tied to a parent category: any sub-category may be stored
/// alongside any category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquipmentSubCategory {
    GroupeElectrogene,
    PanneauSolaire,
}

impl EquipmentSubCategory {
    pub fn code(&self) -> &'static str {
        match self {
            EquipmentSubCategory::GroupeElectrogene => "groupe-electrogene",
            EquipmentSubCategory::PanneauSolaire => "panneau-solaire",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EquipmentSubCategory::GroupeElectrogene => "Groupe électrogène",
            EquipmentSubCategory::PanneauSolaire => "Panneau solaire",
        }
    }

    /// Icon shown next to the label in the picker
    pub fn icon_name(&self) -> &'static str {
        match self {
            EquipmentSubCategory::GroupeElectrogene => "zap",
            EquipmentSubCategory::PanneauSolaire => "sun",
        }
    }

    pub fn all() -> Vec<EquipmentSubCategory> {
        vec![
            EquipmentSubCategory::GroupeElectrogene,
            EquipmentSubCategory::PanneauSolaire,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "groupe-electrogene" => Some(EquipmentSubCategory::GroupeElectrogene),
            "panneau-solaire" => Some(EquipmentSubCategory::PanneauSolaire),
            _ => None,
        }
    }
}

impl std::fmt::Display for EquipmentSubCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes() {
        assert_eq!(EquipmentCategory::default().code(), "energie");
        assert_eq!(
            EquipmentCategory::from_code("energie"),
            Some(EquipmentCategory::Energie)
        );
        assert_eq!(EquipmentCategory::from_code("transport"), None);
    }

    #[test]
    fn test_sub_category_codes() {
        for sub in EquipmentSubCategory::all() {
            assert_eq!(EquipmentSubCategory::from_code(sub.code()), Some(sub));
        }
        assert_eq!(EquipmentSubCategory::from_code(""), None);
        assert_eq!(
            EquipmentSubCategory::PanneauSolaire.to_string(),
            "panneau-solaire"
        );
    }
}
