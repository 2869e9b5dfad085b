//! Partner dashboard landing page, target of the post-submit redirect

use crate::shared::config::ADD_EQUIPMENT_ROUTE;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

#[component]
pub fn PartnerDashboard() -> impl IntoView {
    view! {
        <div class="page page--dashboard">
            <div class="page__header">
                {icon("dashboard")}
                <h1 class="page__title">"Tableau de bord partenaire"</h1>
            </div>
            <Card class="form-card">
                <p>"Gérez vos équipements mis en location."</p>
                <A href=ADD_EQUIPMENT_ROUTE attr:class="button button--primary">
                    {icon("plus")}
                    "Ajouter un équipement"
                </A>
            </Card>
        </div>
    }
}
