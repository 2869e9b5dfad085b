use super::model;
use crate::shared::config::DASHBOARD_ROUTE;
use crate::shared::preview::{ImageSet, ObjectUrlSource};
use contracts::domain::a001_equipment::{EquipmentDto, EquipmentField};
use leptos::prelude::*;
use std::rc::Rc;
use uuid::Uuid;
use web_sys::{File, FileList};

pub type BrowserImageSet = ImageSet<File, ObjectUrlSource>;

/// Submission lifecycle of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Idle -> Submitting. Returns `false` if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        match self {
            SubmissionState::Idle => {
                *self = SubmissionState::Submitting;
                true
            }
            SubmissionState::Submitting => false,
        }
    }

    pub fn finish(&mut self) {
        *self = SubmissionState::Idle;
    }
}

/// ViewModel for the equipment registration form
#[derive(Clone, Copy)]
pub struct EquipmentDetailsViewModel {
    pub form: RwSignal<EquipmentDto>,
    /// `File` handles are not `Send`, hence local storage
    pub images: RwSignal<BrowserImageSet, LocalStorage>,
    pub submission: RwSignal<SubmissionState>,
    pub error: RwSignal<Option<String>>,
}

impl EquipmentDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EquipmentDto::default()),
            images: RwSignal::new_local(ImageSet::new(ObjectUrlSource)),
            submission: RwSignal::new(SubmissionState::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.get().is_submitting()
    }

    pub fn selection_locked(&self) -> bool {
        self.images.with(|set| set.selection_locked())
    }

    /// `(key, preview)` pairs in display order
    pub fn previews(&self) -> Vec<(Uuid, String)> {
        self.images.with(|set| {
            set.entries()
                .iter()
                .map(|e| (e.key, e.preview.clone()))
                .collect()
        })
    }

    pub fn set_field(&self, field: EquipmentField, value: String) {
        log::debug!("Field '{}' changed", field.name());
        self.form.update(|f| f.set_field(field, value));
    }

    /// Apply an edit coming from an input's `name`
    pub fn edit_field(&self, name: &str, value: String) {
        let mut known = false;
        self.form.update(|f| known = f.set_by_name(name, value));
        if known {
            log::debug!("Field '{}' changed", name);
        } else {
            log::warn!("Ignoring edit of unknown field '{}'", name);
        }
    }

    pub fn select_category(&self, value: String) {
        self.set_field(EquipmentField::Categorie, value);
    }

    pub fn select_sub_category(&self, value: String) {
        self.set_field(EquipmentField::SousCategorie, value);
    }

    pub fn toggle_availability(&self, checked: bool) {
        log::debug!("Availability set to {}", checked);
        self.form.update(|f| f.disponibilite = checked);
    }

    /// Append the picked files and their previews
    pub fn add_images(&self, files: FileList) {
        let picked: Vec<File> = (0..files.length()).filter_map(|i| files.get(i)).collect();
        let requested = picked.len();
        let mut added = 0;
        self.images.update(|set| added = set.add(picked));
        log::debug!("Added {} of {} selected images", added, requested);
    }

    pub fn remove_image(&self, index: usize) {
        let mut removed = false;
        self.images.update(|set| removed = set.remove(index));
        if removed {
            log::debug!("Removed image #{}", index);
        }
    }

    /// Release every preview; used on page teardown
    pub fn release_images(&self) {
        self.images.try_update(|set| set.clear());
    }

    /// Submit the form, then navigate to the dashboard on success
    pub fn submit_command(&self, navigate: Rc<dyn Fn(&str)>) {
        let mut started = false;
        self.submission.update(|s| started = s.begin());
        if !started {
            log::debug!("Submission already in flight");
            return;
        }

        log::info!("Submitting equipment listing");
        self.error.set(None);

        let submission = self.submission;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::submit_equipment().await;
            submission.try_update(|s| s.finish());
            match result {
                Ok(()) => {
                    log::info!("Equipment listing saved, redirecting to {}", DASHBOARD_ROUTE);
                    navigate(DASHBOARD_ROUTE);
                }
                Err(e) => {
                    log::error!("Equipment submission failed: {}", e);
                    error.try_set(Some(e.message));
                }
            }
        });
    }
}

impl Default for EquipmentDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_starts_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
        assert!(!SubmissionState::default().is_submitting());
    }

    #[test]
    fn test_begin_then_finish() {
        let mut state = SubmissionState::Idle;
        assert!(state.begin());
        assert!(state.is_submitting());

        state.finish();
        assert_eq!(state, SubmissionState::Idle);
        assert!(state.begin());
    }

    #[test]
    fn test_second_begin_is_rejected() {
        let mut state = SubmissionState::Idle;
        assert!(state.begin());
        assert!(!state.begin());
        assert_eq!(state, SubmissionState::Submitting);
    }

    #[test]
    fn test_default_form_can_be_submitted() {
        // no cross-field validation: default category, empty sub-category
        let vm = EquipmentDetailsViewModel::new();
        let form = vm.form.get_untracked();
        assert_eq!(form.categorie, "energie");
        assert!(form.sous_categorie.is_empty());

        let mut started = false;
        vm.submission.update(|s| started = s.begin());
        assert!(started);
        assert!(vm.submission.get_untracked().is_submitting());
        assert_eq!(vm.form.get_untracked(), EquipmentDto::default());
    }

    #[test]
    fn test_edit_field_updates_only_that_field() {
        let vm = EquipmentDetailsViewModel::new();
        vm.edit_field("modele", "XYZ-5000".to_string());

        let expected = EquipmentDto {
            modele: "XYZ-5000".to_string(),
            ..EquipmentDto::default()
        };
        assert_eq!(vm.form.get_untracked(), expected);
    }

    #[test]
    fn test_edit_field_ignores_unknown_names() {
        let vm = EquipmentDetailsViewModel::new();
        vm.edit_field("inconnu", "x".to_string());
        vm.edit_field("disponibilite", "false".to_string());

        assert_eq!(vm.form.get_untracked(), EquipmentDto::default());
    }

    #[test]
    fn test_toggle_availability_only_changes_disponibilite() {
        let vm = EquipmentDetailsViewModel::new();
        vm.edit_field("nom", "Groupe électrogène 5kVA".to_string());
        let before = vm.form.get_untracked();

        vm.toggle_availability(false);

        let after = vm.form.get_untracked();
        assert!(!after.disponibilite);
        assert_eq!(
            after,
            EquipmentDto {
                disponibilite: false,
                ..before
            }
        );
    }

    #[test]
    fn test_select_sub_category_is_not_validated() {
        let vm = EquipmentDetailsViewModel::new();
        vm.select_sub_category("zzz".to_string());
        vm.select_category("energie".to_string());

        let form = vm.form.get_untracked();
        assert_eq!(form.sous_categorie, "zzz");
        assert_eq!(form.categorie, "energie");
    }

    #[test]
    fn test_remove_image_on_empty_set_is_noop() {
        let vm = EquipmentDetailsViewModel::new();
        vm.remove_image(3);
        vm.remove_image(0);

        assert!(vm.previews().is_empty());
        assert!(!vm.selection_locked());
        assert_eq!(vm.form.get_untracked(), EquipmentDto::default());
    }
}
