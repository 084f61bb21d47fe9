use leptos::*;
use talentrack_core::{AbsenceRequest, ApprovalRecord, VacationBalance};

use crate::api::{ApiClient, ApiError};
use crate::pages::audit::repository::AuditRepository;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditTab {
    Requests,
    Approvals,
    Balances,
}

impl AuditTab {
    pub const ALL: [AuditTab; 3] = [Self::Requests, Self::Approvals, Self::Balances];

    pub fn label(self) -> &'static str {
        match self {
            Self::Requests => "Solicitudes",
            Self::Approvals => "Aprobaciones",
            Self::Balances => "Saldos de vacaciones",
        }
    }
}

/// Read-only views for auditors. Each tab loads on first display.
#[derive(Clone, Copy)]
pub struct AuditViewModel {
    pub tab: RwSignal<AuditTab>,
    pub requests_resource: Resource<bool, Result<Vec<AbsenceRequest>, ApiError>>,
    pub approvals_resource: Resource<bool, Result<Vec<ApprovalRecord>, ApiError>>,
    pub balances_resource: Resource<bool, Result<Vec<VacationBalance>, ApiError>>,
}

fn loaded<T: Clone>(result: Option<Result<Vec<T>, ApiError>>) -> Vec<T> {
    result.and_then(|r| r.ok()).unwrap_or_default()
}

fn failed<T>(result: Option<Result<Vec<T>, ApiError>>) -> Option<ApiError> {
    result.and_then(|r| r.err())
}

impl AuditViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AuditRepository::new(api));
        let tab = create_rw_signal(AuditTab::Requests);

        // The source flips to `true` once the tab has been opened and stays there.
        let opened = move |wanted: AuditTab| {
            let seen = store_value(false);
            move || {
                if tab.get() == wanted {
                    seen.set_value(true);
                }
                seen.get_value()
            }
        };

        let requests_resource = create_resource(opened(AuditTab::Requests), move |open| {
            let repo = repository.get_value();
            async move {
                if open {
                    repo.requests().await
                } else {
                    Ok(Vec::new())
                }
            }
        });
        let approvals_resource = create_resource(opened(AuditTab::Approvals), move |open| {
            let repo = repository.get_value();
            async move {
                if open {
                    repo.approvals().await
                } else {
                    Ok(Vec::new())
                }
            }
        });
        let balances_resource = create_resource(opened(AuditTab::Balances), move |open| {
            let repo = repository.get_value();
            async move {
                if open {
                    repo.vacation_balances().await
                } else {
                    Ok(Vec::new())
                }
            }
        });

        Self {
            tab,
            requests_resource,
            approvals_resource,
            balances_resource,
        }
    }

    pub fn requests(&self) -> Signal<Vec<AbsenceRequest>> {
        let resource = self.requests_resource;
        Signal::derive(move || loaded(resource.get()))
    }

    pub fn approvals(&self) -> Signal<Vec<ApprovalRecord>> {
        let resource = self.approvals_resource;
        Signal::derive(move || loaded(resource.get()))
    }

    pub fn balances(&self) -> Signal<Vec<VacationBalance>> {
        let resource = self.balances_resource;
        Signal::derive(move || loaded(resource.get()))
    }

    /// Error of whichever tab is showing.
    pub fn error(&self) -> Signal<Option<ApiError>> {
        let vm = *self;
        Signal::derive(move || match vm.tab.get() {
            AuditTab::Requests => failed(vm.requests_resource.get()),
            AuditTab::Approvals => failed(vm.approvals_resource.get()),
            AuditTab::Balances => failed(vm.balances_resource.get()),
        })
    }

    pub fn loading(&self) -> Signal<bool> {
        let vm = *self;
        Signal::derive(move || match vm.tab.get() {
            AuditTab::Requests => vm.requests_resource.loading().get(),
            AuditTab::Approvals => vm.approvals_resource.loading().get(),
            AuditTab::Balances => vm.balances_resource.loading().get(),
        })
    }
}

impl Default for AuditViewModel {
    fn default() -> Self {
        Self::new()
    }
}
