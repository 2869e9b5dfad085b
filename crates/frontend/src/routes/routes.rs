use crate::dashboards::d001_partner_dashboard::PartnerDashboard;
use crate::domain::a001_equipment::ui::details::EquipmentDetails;
use crate::shared::config::ADD_EQUIPMENT_ROUTE;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Page introuvable"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=ADD_EQUIPMENT_ROUTE /> } />
                    <Route path=path!("/partenaire/ajouter-engin") view=EquipmentDetails />
                    <Route path=path!("/partenaire/tableau-de-bord") view=PartnerDashboard />
                </Routes>
            </main>
        </Router>
    }
}
