use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use talentrack_core::ReviewerRole;

use crate::{
    api::ApiClient,
    components::layout::Layout,
    pages::{
        absences::AbsencesPage,
        audit::AuditPage,
        reviews::{DecisionHistoryPage, ReviewDetailPage, ReviewQueuePage},
    },
    state::flash::provide_flash,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/empleado/ausencias",
    "/manager/ausencias/solicitudes",
    "/manager/ausencias/solicitudes/:id",
    "/manager/ausencias/aprobaciones",
    "/rrhh/ausencias/solicitudes",
    "/rrhh/ausencias/solicitudes/:id",
    "/rrhh/ausencias/aprobaciones",
    "/auditor/ausencias",
];

/// Routes that may submit a decision.
pub const DECISION_ROUTE_PATHS: &[&str] = &[
    "/manager/ausencias/solicitudes/:id",
    "/rrhh/ausencias/solicitudes/:id",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_flash();
    provide_meta_context();
    view! {
        <Title text="Talentrack | Ausencias"/>
        <Router>
            <Routes>
                <Route path="/" view=AbsencesPage/>
                <Route path="/empleado/ausencias" view=AbsencesPage/>
                <Route path="/manager/ausencias/solicitudes" view=ManagerQueue/>
                <Route path="/manager/ausencias/solicitudes/:id" view=ManagerDetail/>
                <Route path="/manager/ausencias/aprobaciones" view=ManagerHistory/>
                <Route path="/rrhh/ausencias/solicitudes" view=HrQueue/>
                <Route path="/rrhh/ausencias/solicitudes/:id" view=HrDetail/>
                <Route path="/rrhh/ausencias/aprobaciones" view=HrHistory/>
                <Route path="/auditor/ausencias" view=AuditPage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn ManagerQueue() -> impl IntoView {
    view! { <ReviewQueuePage role=ReviewerRole::Manager/> }
}

#[component]
fn ManagerDetail() -> impl IntoView {
    view! { <ReviewDetailPage role=ReviewerRole::Manager/> }
}

#[component]
fn ManagerHistory() -> impl IntoView {
    view! { <DecisionHistoryPage role=ReviewerRole::Manager/> }
}

#[component]
fn HrQueue() -> impl IntoView {
    view! { <ReviewQueuePage role=ReviewerRole::HumanResources/> }
}

#[component]
fn HrDetail() -> impl IntoView {
    view! { <ReviewDetailPage role=ReviewerRole::HumanResources/> }
}

#[component]
fn HrHistory() -> impl IntoView {
    view! { <DecisionHistoryPage role=ReviewerRole::HumanResources/> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Layout>
            <div class="text-center py-12 text-fg-muted">"Página no encontrada."</div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_deciding_role_has_queue_detail_and_history() {
        for role in [ReviewerRole::Manager, ReviewerRole::HumanResources] {
            let queue = role.queue_route();
            assert!(ROUTE_PATHS.contains(&queue.as_str()));
            let detail = format!("{}/:id", queue);
            assert!(ROUTE_PATHS.contains(&detail.as_str()));
            let history = format!("/{}/ausencias/aprobaciones", role.path_segment());
            assert!(ROUTE_PATHS.contains(&history.as_str()));
        }
    }

    #[test]
    fn auditor_has_no_decision_route() {
        assert!(DECISION_ROUTE_PATHS
            .iter()
            .all(|path| !path.starts_with("/auditor")));
    }

    #[test]
    fn decision_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in DECISION_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "decision path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
