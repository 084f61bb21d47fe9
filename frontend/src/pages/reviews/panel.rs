use leptos::*;
use leptos_router::{use_navigate, use_params_map};
use talentrack_core::{DecisionAction, DecisionOutcome, ReviewerRole};

use crate::components::{
    error::InlineErrorMessage,
    layout::{ErrorMessage, LoadingSpinner, SuccessMessage},
};
use crate::pages::reviews::{
    components::{
        decision_modal::DecisionModal, detail::RequestDetail, history::DecisionHistory,
        queue::ReviewQueue,
    },
    layout::ReviewsLayout,
    view_model::{DecisionHistoryViewModel, ReviewDetailViewModel, ReviewQueueViewModel},
};
use crate::state::flash::use_flash;

#[component]
pub fn ReviewQueuePage(role: ReviewerRole) -> impl IntoView {
    let vm = ReviewQueueViewModel::new(role);
    let notice = use_flash().take();
    let loading = vm.queue_resource.loading();

    view! {
        <ReviewsLayout role=role>
            {notice.map(|message| view! { <SuccessMessage message=message/> })}
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-medium text-fg">"Solicitudes pendientes"</h3>
                <InlineErrorMessage error=vm.error()/>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                    <ReviewQueue role=role requests=vm.requests()/>
                </Show>
            </div>
        </ReviewsLayout>
    }
}

#[component]
pub fn DecisionHistoryPage(role: ReviewerRole) -> impl IntoView {
    let vm = DecisionHistoryViewModel::new(role);
    let loading = vm.history_resource.loading();

    view! {
        <ReviewsLayout role=role>
            <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-medium text-fg">"Historial de decisiones"</h3>
                <InlineErrorMessage error=vm.error()/>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                    <DecisionHistory records=vm.records()/>
                </Show>
            </div>
        </ReviewsLayout>
    }
}

/// Routed detail screen: reads `:id`, and after a successful decision
/// hands the outcome message to the queue it navigates back to.
#[component]
pub fn ReviewDetailPage(role: ReviewerRole) -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));
    let flash = use_flash();
    let navigate = use_navigate();
    let on_decided = Callback::new(move |outcome: DecisionOutcome| {
        flash.set(outcome.message());
        navigate(&role.queue_route(), Default::default());
    });

    view! {
        <ReviewsLayout role=role>
            {match id {
                Some(id) => view! { <ReviewDetail role=role request_id=id on_decided=on_decided/> }
                    .into_view(),
                None => view! { <ErrorMessage message="Solicitud no encontrada."/> }.into_view(),
            }}
        </ReviewsLayout>
    }
}

#[component]
pub fn ReviewDetail(
    role: ReviewerRole,
    request_id: i64,
    on_decided: Callback<DecisionOutcome>,
) -> impl IntoView {
    let vm = ReviewDetailViewModel::new(role, request_id);
    let loading = vm.request_resource.loading();
    let request = vm.request();
    let can_decide = vm.can_decide();
    let pending = vm.decide_action.pending();

    create_effect(move |_| {
        if let Some(outcome) = vm.outcome.get() {
            on_decided.call(outcome);
        }
    });

    view! {
        <div class="space-y-6">
            <InlineErrorMessage error=vm.load_error()/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                {move || request.get().map(|request| view! { <RequestDetail request=request/> })}
            </Show>
            <Show when=move || can_decide.get()>
                <div class="flex justify-end gap-3">
                    <button
                        class="px-4 py-2 rounded bg-action-danger-bg text-action-danger-text"
                        on:click=move |_| vm.open_modal(DecisionAction::Reject)
                    >
                        "Rechazar"
                    </button>
                    <button
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text"
                        on:click=move |_| vm.open_modal(DecisionAction::Approve)
                    >
                        "Aprobar"
                    </button>
                </div>
            </Show>
            <DecisionModal
                action=vm.modal_action
                comment=vm.comment
                error=vm.decision_error
                pending=pending
                comment_required=role.requires_reject_comment()
                on_confirm=Callback::new(move |_| vm.confirm())
                on_close=Callback::new(move |_| vm.close_modal())
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::flash::provide_flash;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn queue_page_shows_flash_once() {
        let html = render_to_string(|| {
            provide_flash().set("Solicitud aprobado.");
            view! { <ReviewQueuePage role=ReviewerRole::Manager/> }
        });
        assert!(html.contains("Solicitud aprobado."));
        assert!(html.contains("Solicitudes de mi equipo"));
    }

    #[test]
    fn history_page_links_back_to_queue() {
        let html = render_to_string(|| {
            view! { <DecisionHistoryPage role=ReviewerRole::HumanResources/> }
        });
        assert!(html.contains("/rrhh/ausencias/solicitudes"));
        assert!(html.contains("Historial de decisiones"));
    }

    #[test]
    fn detail_without_loaded_request_offers_no_decision() {
        let html = render_to_string(|| {
            view! {
                <ReviewDetail
                    role=ReviewerRole::Manager
                    request_id=4
                    on_decided=Callback::new(|_| ())
                />
            }
        });
        assert!(!html.contains(">Aprobar<"));
    }
}
