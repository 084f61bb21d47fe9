use leptos::*;
use talentrack_core::{
    AbsenceRequest, ApprovalRecord, Decision, DecisionAction, DecisionOutcome, ReviewerRole,
};

use crate::api::{ApiClient, ApiError};
use crate::pages::reviews::repository::ReviewsRepository;

fn repository_for(role: ReviewerRole) -> StoredValue<ReviewsRepository> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    store_value(ReviewsRepository::new(api, role))
}

#[derive(Clone, Copy)]
pub struct ReviewQueueViewModel {
    pub role: ReviewerRole,
    pub queue_resource: Resource<(), Result<Vec<AbsenceRequest>, ApiError>>,
}

impl ReviewQueueViewModel {
    pub fn new(role: ReviewerRole) -> Self {
        let repository = repository_for(role);
        let queue_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.queue().await }
            },
        );
        Self {
            role,
            queue_resource,
        }
    }

    pub fn requests(&self) -> Signal<Vec<AbsenceRequest>> {
        let resource = self.queue_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let resource = self.queue_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }
}

#[derive(Clone, Copy)]
pub struct DecisionHistoryViewModel {
    pub role: ReviewerRole,
    pub history_resource: Resource<(), Result<Vec<ApprovalRecord>, ApiError>>,
}

impl DecisionHistoryViewModel {
    pub fn new(role: ReviewerRole) -> Self {
        let repository = repository_for(role);
        let history_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.history().await }
            },
        );
        Self {
            role,
            history_resource,
        }
    }

    pub fn records(&self) -> Signal<Vec<ApprovalRecord>> {
        let resource = self.history_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let resource = self.history_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }
}

/// State of the detail screen: the loaded request, the decision modal and
/// the result of the last submission.
#[derive(Clone, Copy)]
pub struct ReviewDetailViewModel {
    pub role: ReviewerRole,
    pub request_id: i64,
    pub request_resource: Resource<i64, Result<AbsenceRequest, ApiError>>,
    /// Action chosen in the open modal; `None` while the modal is closed.
    pub modal_action: RwSignal<Option<DecisionAction>>,
    pub comment: RwSignal<String>,
    pub decision_error: RwSignal<Option<ApiError>>,
    pub outcome: RwSignal<Option<DecisionOutcome>>,
    pub decide_action: Action<Decision, Result<DecisionOutcome, ApiError>>,
}

/// A failed decision keeps the modal open and leaves the loaded request
/// as it was; the server message is shown untouched.
pub fn apply_decision_result(
    result: Option<Result<DecisionOutcome, ApiError>>,
    modal_action: RwSignal<Option<DecisionAction>>,
    comment: RwSignal<String>,
    decision_error: RwSignal<Option<ApiError>>,
    outcome: RwSignal<Option<DecisionOutcome>>,
) {
    match result {
        Some(Ok(done)) => {
            decision_error.set(None);
            modal_action.set(None);
            comment.set(String::new());
            outcome.set(Some(done));
        }
        Some(Err(err)) => decision_error.set(Some(err)),
        None => {}
    }
}

impl ReviewDetailViewModel {
    pub fn new(role: ReviewerRole, request_id: i64) -> Self {
        let repository = repository_for(role);
        let request_resource = create_resource(
            move || request_id,
            move |id| {
                let repo = repository.get_value();
                async move { repo.request(id).await }
            },
        );
        let modal_action = create_rw_signal(None::<DecisionAction>);
        let comment = create_rw_signal(String::new());
        let decision_error = create_rw_signal(None::<ApiError>);
        let outcome = create_rw_signal(None::<DecisionOutcome>);

        let decide_action = create_action(move |decision: &Decision| {
            let repo = repository.get_value();
            let decision = decision.clone();
            async move { repo.decide(request_id, &decision).await }
        });

        create_effect(move |_| {
            apply_decision_result(
                decide_action.value().get(),
                modal_action,
                comment,
                decision_error,
                outcome,
            );
        });

        Self {
            role,
            request_id,
            request_resource,
            modal_action,
            comment,
            decision_error,
            outcome,
            decide_action,
        }
    }

    pub fn request(&self) -> Signal<Option<AbsenceRequest>> {
        let resource = self.request_resource;
        Signal::derive(move || resource.get().and_then(|result| result.ok()))
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.request_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    /// Decision buttons are offered only to roles that may decide and only
    /// while the request is still pending.
    pub fn can_decide(&self) -> Signal<bool> {
        let role = self.role;
        let request = self.request();
        Signal::derive(move || {
            role.can_decide() && request.get().map(|r| r.is_pending()).unwrap_or(false)
        })
    }

    pub fn open_modal(&self, action: DecisionAction) {
        self.decision_error.set(None);
        self.comment.set(String::new());
        self.modal_action.set(Some(action));
    }

    pub fn close_modal(&self) {
        self.modal_action.set(None);
        self.decision_error.set(None);
    }

    /// Validates locally before dispatching; a local failure is reported
    /// the same way as a server rejection.
    pub fn confirm(&self) {
        let Some(action) = self.modal_action.get_untracked() else {
            return;
        };
        let comment = self.comment.get_untracked();
        let decision = Decision::new(action, Some(comment.as_str()));
        match decision.validate_for(self.role) {
            Ok(()) => {
                self.decision_error.set(None);
                self.decide_action.dispatch(decision);
            }
            Err(err) => self.decision_error.set(Some(err.into())),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_api, wait_until};
    use crate::test_support::ssr::{with_local_runtime_async, with_runtime};
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    fn pending_request(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "nombres": "Ana",
            "apellidos": "Pérez",
            "tipo_ausencia": "Vacaciones",
            "fecha_inicio": "2025-03-10",
            "fecha_fin": "2025-03-12",
            "dias_habiles": 3,
            "estado": 1,
            "estado_label": "pendiente"
        })
    }

    #[test]
    fn successful_decision_closes_modal() {
        with_runtime(|| {
            let modal = create_rw_signal(Some(DecisionAction::Approve));
            let comment = create_rw_signal("ok".to_string());
            let error = create_rw_signal(Some(ApiError::unknown("previo")));
            let outcome = create_rw_signal(None);
            let done = DecisionOutcome {
                request_id: 4,
                status_label: Some("aprobado".into()),
            };
            apply_decision_result(Some(Ok(done.clone())), modal, comment, error, outcome);
            assert_eq!(modal.get(), None);
            assert_eq!(comment.get(), "");
            assert!(error.get().is_none());
            assert_eq!(outcome.get(), Some(done));
        });
    }

    #[test]
    fn failed_decision_keeps_modal_open() {
        with_runtime(|| {
            let modal = create_rw_signal(Some(DecisionAction::Reject));
            let comment = create_rw_signal("motivo".to_string());
            let error = create_rw_signal(None);
            let outcome = create_rw_signal(None);
            apply_decision_result(
                Some(Err(ApiError::from_response(
                    409,
                    r#"{"detail":"La solicitud ya fue decidida."}"#,
                ))),
                modal,
                comment,
                error,
                outcome,
            );
            assert_eq!(modal.get(), Some(DecisionAction::Reject));
            assert_eq!(comment.get(), "motivo");
            assert_eq!(error.get().unwrap().error, "La solicitud ya fue decidida.");
            assert!(outcome.get().is_none());
        });
    }

    #[test]
    fn manager_reject_without_comment_is_not_sent() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = ReviewDetailViewModel::new(ReviewerRole::Manager, 3);
            vm.open_modal(DecisionAction::Reject);
            vm.comment.set("   ".into());
            vm.confirm();
            assert_eq!(
                vm.decision_error.get().map(|e| e.error).as_deref(),
                Some("El comentario es obligatorio para rechazar.")
            );
            assert_eq!(vm.modal_action.get(), Some(DecisionAction::Reject));
            assert!(vm.decide_action.input().get().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn auditor_never_gets_decision_buttons() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = ReviewDetailViewModel::new(ReviewerRole::Auditor, 3);
            assert!(!vm.can_decide().get());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn conflict_keeps_loaded_request_and_shows_detail() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            let detail = server
                .mock_async(|when, then| {
                    when.method(GET)
                        .path("/api/manager/ausencias/solicitudes/12/");
                    then.status(200).json_body(pending_request(12));
                })
                .await;
            let decide = server
                .mock_async(|when, then| {
                    when.method(PATCH)
                        .path("/api/manager/ausencias/solicitudes/12/decidir/")
                        .json_body(json!({ "accion": 1, "comentario": null }));
                    then.status(400)
                        .json_body(json!({ "detail": "La solicitud ya no está pendiente." }));
                })
                .await;
            provide_api(&server);

            let vm = ReviewDetailViewModel::new(ReviewerRole::Manager, 12);
            assert!(wait_until(|| vm.request().get_untracked().is_some()).await);
            let before = vm.request().get_untracked();
            assert!(vm.can_decide().get_untracked());

            vm.open_modal(DecisionAction::Approve);
            vm.confirm();
            assert!(wait_until(|| vm.decide_action.value().get_untracked().is_some()).await);
            apply_decision_result(
                vm.decide_action.value().get_untracked(),
                vm.modal_action,
                vm.comment,
                vm.decision_error,
                vm.outcome,
            );

            assert_eq!(
                vm.decision_error.get_untracked().map(|e| e.error).as_deref(),
                Some("La solicitud ya no está pendiente.")
            );
            assert_eq!(vm.request().get_untracked(), before);
            assert!(vm.outcome.get_untracked().is_none());
            decide.assert_hits_async(1).await;
            detail.assert_hits_async(1).await;
        });
    }

    #[test]
    fn queue_loads_for_role() {
        with_local_runtime_async(|| async {
            let server = MockServer::start_async().await;
            server
                .mock_async(|when, then| {
                    when.method(GET).path("/api/rrhh/ausencias/solicitudes/");
                    then.status(200)
                        .json_body(json!([pending_request(1), pending_request(2)]));
                })
                .await;
            provide_api(&server);

            let vm = ReviewQueueViewModel::new(ReviewerRole::HumanResources);
            assert!(wait_until(|| vm.requests().get_untracked().len() == 2).await);
            assert!(vm.error().get_untracked().is_none());
        });
    }
}
