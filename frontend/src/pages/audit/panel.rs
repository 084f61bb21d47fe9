use leptos::*;

use crate::components::{error::InlineErrorMessage, layout::LoadingSpinner};
use crate::pages::audit::{
    components::tables::{AuditRequestsTable, VacationBalancesTable},
    layout::AuditLayout,
    view_model::{AuditTab, AuditViewModel},
};
use crate::pages::reviews::components::history::DecisionHistory;

#[component]
pub fn AuditPage() -> impl IntoView {
    let vm = AuditViewModel::new();
    let loading = vm.loading();

    view! {
        <AuditLayout>
            <div class="flex gap-2 border-b border-border">
                {AuditTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let class = move || {
                            if vm.tab.get() == tab {
                                "px-4 py-2 text-sm font-medium border-b-2 border-action-primary-bg text-fg"
                            } else {
                                "px-4 py-2 text-sm text-fg-muted"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| vm.tab.set(tab)>
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <InlineErrorMessage error=vm.error()/>
            <div class="bg-surface-elevated shadow rounded-lg p-6">
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                    {move || match vm.tab.get() {
                        AuditTab::Requests => {
                            view! { <AuditRequestsTable requests=vm.requests()/> }.into_view()
                        }
                        AuditTab::Approvals => {
                            view! { <DecisionHistory records=vm.approvals()/> }.into_view()
                        }
                        AuditTab::Balances => {
                            view! { <VacationBalancesTable balances=vm.balances()/> }.into_view()
                        }
                    }}
                </Show>
            </div>
        </AuditLayout>
    }
}
