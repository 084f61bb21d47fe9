use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AuditLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Auditoría de ausencias"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Consulta solicitudes, decisiones y saldos. Vista de solo lectura."
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
