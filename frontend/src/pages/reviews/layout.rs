use crate::components::layout::Layout;
use leptos::*;
use talentrack_core::ReviewerRole;

pub fn role_title(role: ReviewerRole) -> &'static str {
    match role {
        ReviewerRole::Manager => "Solicitudes de mi equipo",
        ReviewerRole::HumanResources => "Solicitudes de Recursos Humanos",
        ReviewerRole::Auditor => "Auditoría de ausencias",
    }
}

#[component]
pub fn ReviewsLayout(role: ReviewerRole, children: Children) -> impl IntoView {
    let base = format!("/{}/ausencias", role.path_segment());
    let queue_href = format!("{}/solicitudes", base);
    let history_href = format!("{}/aprobaciones", base);
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex flex-col gap-2 md:flex-row md:items-end md:justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">{role_title(role)}</h1>
                        <p class="mt-1 text-sm text-fg-muted">
                            "Revisa y decide las solicitudes de ausencia pendientes."
                        </p>
                    </div>
                    <nav class="flex gap-4 text-sm">
                        <a class="text-action-primary-bg" href=queue_href>"Pendientes"</a>
                        <a class="text-action-primary-bg" href=history_href>"Historial"</a>
                    </nav>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
