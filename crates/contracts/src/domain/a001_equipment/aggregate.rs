use serde::{Deserialize, Serialize};

use crate::enums::EquipmentCategory;

// ============================================================================
// Field names
// ============================================================================

/// Editable fields of the equipment form, keyed by their input `name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentField {
    Nom,
    Kind,
    Modele,
    Puissance,
    Description,
    Prix,
    Categorie,
    SousCategorie,
}

impl EquipmentField {
    /// Name used by the form inputs
    pub fn name(&self) -> &'static str {
        match self {
            EquipmentField::Nom => "nom",
            EquipmentField::Kind => "type",
            EquipmentField::Modele => "modele",
            EquipmentField::Puissance => "puissance",
            EquipmentField::Description => "description",
            EquipmentField::Prix => "prix",
            EquipmentField::Categorie => "categorie",
            EquipmentField::SousCategorie => "sousCategorie",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nom" => Some(EquipmentField::Nom),
            "type" => Some(EquipmentField::Kind),
            "modele" => Some(EquipmentField::Modele),
            "puissance" => Some(EquipmentField::Puissance),
            "description" => Some(EquipmentField::Description),
            "prix" => Some(EquipmentField::Prix),
            "categorie" => Some(EquipmentField::Categorie),
            "sousCategorie" => Some(EquipmentField::SousCategorie),
            _ => None,
        }
    }

    pub fn all() -> Vec<EquipmentField> {
        vec![
            EquipmentField::Nom,
            EquipmentField::Kind,
            EquipmentField::Modele,
            EquipmentField::Puissance,
            EquipmentField::Description,
            EquipmentField::Prix,
            EquipmentField::Categorie,
            EquipmentField::SousCategorie,
        ]
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for registering a new equipment listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDto {
    pub nom: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub modele: String,
    pub puissance: String,
    pub description: String,
    pub disponibilite: bool,

    /// Daily price in FCFA, kept as typed by the user
    pub prix: String,

    pub categorie: String,

    #[serde(rename = "sousCategorie")]
    pub sous_categorie: String,
}

impl Default for EquipmentDto {
    fn default() -> Self {
        Self {
            nom: String::new(),
            kind: String::new(),
            modele: String::new(),
            puissance: String::new(),
            description: String::new(),
            disponibilite: true,
            prix: String::new(),
            categorie: EquipmentCategory::default().code().to_string(),
            sous_categorie: String::new(),
        }
    }
}

impl EquipmentDto {
    /// Read a field by key
    pub fn field(&self, field: EquipmentField) -> &str {
        match field {
            EquipmentField::Nom => &self.nom,
            EquipmentField::Kind => &self.kind,
            EquipmentField::Modele => &self.modele,
            EquipmentField::Puissance => &self.puissance,
            EquipmentField::Description => &self.description,
            EquipmentField::Prix => &self.prix,
            EquipmentField::Categorie => &self.categorie,
            EquipmentField::SousCategorie => &self.sous_categorie,
        }
    }

    /// Overwrite a single field, leaving the others untouched.
    ///
    /// No validation: category and sub-category accept any tag.
    pub fn set_field(&mut self, field: EquipmentField, value: String) {
        let slot = match field {
            EquipmentField::Nom => &mut self.nom,
            EquipmentField::Kind => &mut self.kind,
            EquipmentField::Modele => &mut self.modele,
            EquipmentField::Puissance => &mut self.puissance,
            EquipmentField::Description => &mut self.description,
            EquipmentField::Prix => &mut self.prix,
            EquipmentField::Categorie => &mut self.categorie,
            EquipmentField::SousCategorie => &mut self.sous_categorie,
        };
        *slot = value;
    }

    /// Set a field by its input name. Returns `false` for unknown names.
    pub fn set_by_name(&mut self, name: &str, value: String) -> bool {
        match EquipmentField::from_name(name) {
            Some(field) => {
                self.set_field(field, value);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let dto = EquipmentDto::default();
        assert!(dto.disponibilite);
        assert_eq!(dto.categorie, "energie");
        for field in EquipmentField::all() {
            if field != EquipmentField::Categorie {
                assert_eq!(dto.field(field), "", "{} should start empty", field.name());
            }
        }
    }

    #[test]
    fn test_set_field_touches_only_that_field() {
        let defaults = EquipmentDto::default();
        for field in EquipmentField::all() {
            let mut dto = EquipmentDto::default();
            dto.set_field(field, "x".to_string());

            for other in EquipmentField::all() {
                if other == field {
                    assert_eq!(dto.field(other), "x");
                } else {
                    assert_eq!(dto.field(other), defaults.field(other));
                }
            }
            assert!(dto.disponibilite);
        }
    }

    #[test]
    fn test_set_by_name() {
        let mut dto = EquipmentDto::default();
        assert!(dto.set_by_name("type", "Diesel".to_string()));
        assert!(dto.set_by_name("sousCategorie", "panneau-solaire".to_string()));
        assert_eq!(dto.kind, "Diesel");
        assert_eq!(dto.sous_categorie, "panneau-solaire");

        let before = dto.clone();
        assert!(!dto.set_by_name("disponibilite", "false".to_string()));
        assert!(!dto.set_by_name("inconnu", "x".to_string()));
        assert_eq!(dto, before);
    }

    #[test]
    fn test_sub_category_is_not_checked_against_category() {
        let mut dto = EquipmentDto::default();
        dto.set_field(EquipmentField::SousCategorie, "n-importe-quoi".to_string());
        assert_eq!(dto.categorie, "energie");
        assert_eq!(dto.sous_categorie, "n-importe-quoi");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in EquipmentField::all() {
            assert_eq!(EquipmentField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_serde_uses_form_names() {
        let mut dto = EquipmentDto::default();
        dto.kind = "Diesel".to_string();
        dto.sous_categorie = "groupe-electrogene".to_string();

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["type"], "Diesel");
        assert_eq!(json["sousCategorie"], "groupe-electrogene");
        assert_eq!(json["disponibilite"], true);
        assert!(json.get("kind").is_none());
    }
}
