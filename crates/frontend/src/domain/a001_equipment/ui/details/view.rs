use super::view_model::EquipmentDetailsViewModel;
use crate::shared::components::ui::{Button, Input, Select, Switch, Textarea};
use crate::shared::config::{DASHBOARD_ROUTE, IMAGE_ACCEPT, PREVIEW_PLACEHOLDER};
use crate::shared::icons::icon;
use contracts::enums::{EquipmentCategory, EquipmentSubCategory};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;
use thaw::{Card, Spinner};
use wasm_bindgen::JsCast;

#[component]
pub fn EquipmentDetails() -> impl IntoView {
    let vm = EquipmentDetailsViewModel::new();
    on_cleanup(move || vm.release_images());

    let navigate = use_navigate();
    let go_to: Rc<dyn Fn(&str)> =
        Rc::new(move |path: &str| navigate(path, NavigateOptions::default()));

    let on_text_input = Callback::new(move |(name, value): (String, String)| {
        vm.edit_field(&name, value);
    });

    let category_options: Vec<(String, String)> = EquipmentCategory::all()
        .into_iter()
        .map(|c| (c.code().to_string(), c.display_name().to_string()))
        .collect();
    let sub_category_options: Vec<(String, String)> = EquipmentSubCategory::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    let on_submit = {
        let go_to = go_to.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit_command(go_to.clone());
        }
    };

    view! {
        <div class="page page--detail equipment-details">
            <div class="page__back">
                <A href=DASHBOARD_ROUTE attr:class="back-link">
                    {icon("arrow-left")}
                    "Retour au tableau de bord"
                </A>
            </div>

            <div class="page__content page__content--narrow">
                <h1 class="page__title">"Ajouter un nouvel équipement"</h1>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <form on:submit=on_submit>
                    <Card class="form-card">
                        <div class="form-card__header">
                            <h2 class="form-card__title">"Informations générales"</h2>
                            <p class="form-card__description">
                                "Entrez les informations de base de votre équipement"
                            </p>
                        </div>

                        <Input
                            label="Nom de l'équipement"
                            name="nom"
                            placeholder="Ex: Groupe électrogène 5kVA"
                            value=Signal::derive(move || vm.form.get().nom)
                            on_input=on_text_input
                            required=true
                        />

                        <div class="form__grid">
                            <Select
                                label="Catégorie"
                                id="categorie"
                                placeholder="Sélectionnez une catégorie"
                                value=Signal::derive(move || vm.form.get().categorie)
                                options=category_options
                                on_change=Callback::new(move |v: String| vm.select_category(v))
                            />

                            <div class="form__with-icon">
                                <Select
                                    label="Sous-catégorie"
                                    id="sousCategorie"
                                    placeholder="Sélectionnez une sous-catégorie"
                                    value=Signal::derive(move || vm.form.get().sous_categorie)
                                    options=sub_category_options
                                    on_change=Callback::new(move |v: String| vm.select_sub_category(v))
                                />
                                {move || {
                                    EquipmentSubCategory::from_code(&vm.form.get().sous_categorie)
                                        .map(|s| icon(s.icon_name()))
                                }}
                            </div>
                        </div>

                        <div class="form__grid">
                            <Input
                                label="Type"
                                name="type"
                                placeholder="Ex: Diesel, Solaire monocristallin"
                                value=Signal::derive(move || vm.form.get().kind)
                                on_input=on_text_input
                                required=true
                            />
                            <Input
                                label="Modèle"
                                name="modele"
                                placeholder="Ex: XYZ-5000"
                                value=Signal::derive(move || vm.form.get().modele)
                                on_input=on_text_input
                                required=true
                            />
                        </div>

                        <Input
                            label="Puissance"
                            name="puissance"
                            placeholder="Ex: 5kVA, 300W"
                            value=Signal::derive(move || vm.form.get().puissance)
                            on_input=on_text_input
                            required=true
                        />

                        <Textarea
                            label="Description"
                            name="description"
                            placeholder="Décrivez votre équipement en détail..."
                            rows=5
                            value=Signal::derive(move || vm.form.get().description)
                            on_input=on_text_input
                            required=true
                        />
                    </Card>

                    <Card class="form-card">
                        <div class="form-card__header">
                            <h2 class="form-card__title">"Images"</h2>
                            <p class="form-card__description">
                                "Ajoutez des photos de votre équipement (maximum 5 images)"
                            </p>
                        </div>

                        <ImagePicker vm=vm />
                        <PreviewGrid vm=vm />
                    </Card>

                    <Card class="form-card">
                        <div class="form-card__header">
                            <h2 class="form-card__title">"Tarification et disponibilité"</h2>
                            <p class="form-card__description">
                                "Définissez le prix et la disponibilité de votre équipement"
                            </p>
                        </div>

                        <Input
                            label="Prix journalier (FCFA)"
                            name="prix"
                            input_type="number"
                            placeholder="Ex: 15000"
                            value=Signal::derive(move || vm.form.get().prix)
                            on_input=on_text_input
                            required=true
                        />

                        <Switch
                            id="disponibilite"
                            label="Disponible immédiatement"
                            hint="L'équipement sera visible dans le catalogue"
                            checked=Signal::derive(move || vm.form.get().disponibilite)
                            on_change=Callback::new(move |checked: bool| vm.toggle_availability(checked))
                        />
                    </Card>

                    <div class="form__actions">
                        <button
                            type="button"
                            class="button button--outline"
                            on:click={
                                let go_to = go_to.clone();
                                move |_| go_to(DASHBOARD_ROUTE)
                            }
                        >
                            "Annuler"
                        </button>
                        <Button
                            button_type="submit"
                            disabled=Signal::derive(move || vm.is_submitting())
                        >
                            {move || if vm.is_submitting() {
                                view! {
                                    <Spinner />
                                    "Enregistrement..."
                                }.into_any()
                            } else {
                                "Enregistrer l'équipement".into_any()
                            }}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Drop zone with the hidden multi-select file input
#[component]
fn ImagePicker(vm: EquipmentDetailsViewModel) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input = match ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            Some(input) => input,
            None => return,
        };
        if let Some(files) = input.files() {
            vm.add_images(files);
        }
    };

    view! {
        <div class="dropzone">
            <div class="dropzone__icon">{icon("upload")}</div>
            <p class="dropzone__text">
                "Glissez-déposez vos images ici ou cliquez pour parcourir"
            </p>
            <p class="dropzone__hint">"PNG, JPG ou JPEG (max 5MB)"</p>
            <input
                id="images"
                type="file"
                accept=IMAGE_ACCEPT
                multiple=true
                class="visually-hidden"
                disabled=move || vm.selection_locked()
                on:change=on_change
            />
            <label
                for="images"
                class="button button--outline"
                class:button--disabled=move || vm.selection_locked()
            >
                "Sélectionner des fichiers"
            </label>
        </div>
    }
}

#[component]
fn PreviewGrid(vm: EquipmentDetailsViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.images.with(|set| !set.is_empty())>
            <div class="preview-grid">
                <For
                    each=move || vm.previews().into_iter().enumerate()
                    key=|(index, (key, _))| (*index, *key)
                    children=move |(index, (_, url))| {
                        let src = if url.is_empty() { PREVIEW_PLACEHOLDER.to_string() } else { url };
                        view! {
                            <div class="preview-grid__item">
                                <img
                                    src=src
                                    alt=format!("Aperçu {}", index + 1)
                                    class="preview-grid__image"
                                />
                                <button
                                    type="button"
                                    class="preview-grid__remove"
                                    on:click=move |_| vm.remove_image(index)
                                >
                                    {icon("close")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
