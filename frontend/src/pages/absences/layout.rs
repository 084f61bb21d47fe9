use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AbsencesLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Mis Ausencias"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Registra solicitudes de ausencia y revisa su estado."
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
