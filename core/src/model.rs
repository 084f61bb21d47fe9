use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    date_range::{parse_iso_date, DateRange},
    format::full_name,
    status::RequestStatus,
};

/// An employee's requested time off, as returned by any of the
/// employee, reviewer or auditor endpoints.
///
/// The endpoints disagree on which fields they send, so everything except
/// the identifier is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbsenceRequest {
    pub id: i64,
    #[serde(default)]
    pub nombres: Option<String>,
    #[serde(default)]
    pub apellidos: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "unidad")]
    pub unidad_organizacional: Option<String>,
    #[serde(default)]
    pub puesto: Option<String>,
    #[serde(default)]
    pub manager: Option<String>,
    /// Type name on reviewer endpoints, type id on the employee endpoint.
    #[serde(default)]
    pub tipo_ausencia: Option<Value>,
    #[serde(default)]
    pub tipo_ausencia_nombre: Option<String>,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    /// Server-computed; the client preview never replaces it.
    #[serde(default)]
    pub dias_habiles: Option<i64>,
    #[serde(default)]
    pub motivo: Option<String>,
    #[serde(default)]
    pub flujo_actual: Option<i64>,
    #[serde(default)]
    pub estado: Option<RequestStatus>,
    #[serde(default)]
    pub estado_label: Option<String>,
    #[serde(default)]
    pub creada_el: Option<String>,
}

impl AbsenceRequest {
    pub fn status(&self) -> Option<RequestStatus> {
        self.estado
    }

    /// Falls back to the status code when the endpoint sends no label.
    pub fn status_label(&self) -> String {
        self.estado_label
            .clone()
            .filter(|label| !label.trim().is_empty())
            .or_else(|| self.estado.map(|status| status.label()))
            .unwrap_or_else(|| "N/A".into())
    }

    pub fn is_pending(&self) -> bool {
        self.estado.map(RequestStatus::is_pending).unwrap_or(false)
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.fecha_inicio.as_deref().and_then(parse_iso_date)
    }

    /// A request without end date covers its start date only.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.fecha_fin
            .as_deref()
            .and_then(parse_iso_date)
            .or_else(|| self.start_date())
    }

    pub fn calendar(&self) -> DateRange {
        DateRange::materialize(
            self.start_date(),
            self.fecha_fin.as_deref().and_then(parse_iso_date),
        )
    }

    pub fn type_label(&self) -> String {
        if let Some(name) = self
            .tipo_ausencia_nombre
            .as_ref()
            .filter(|n| !n.trim().is_empty())
        {
            return name.clone();
        }
        match &self.tipo_ausencia {
            Some(Value::String(name)) => name.clone(),
            Some(Value::Number(id)) => format!("#{}", id),
            _ => "N/A".into(),
        }
    }

    /// Numeric type id when the endpoint sends one, for pre-filling the form.
    pub fn type_id(&self) -> Option<i64> {
        match &self.tipo_ausencia {
            Some(Value::Number(id)) => id.as_i64(),
            Some(Value::String(raw)) => raw.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn employee_name(&self) -> String {
        full_name(self.nombres.as_deref(), self.apellidos.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceType {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub afecta_sueldo: Option<bool>,
    #[serde(default)]
    pub requiere_soporte: Option<bool>,
}

/// One entry of a reviewer's decision history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    pub id: i64,
    #[serde(default)]
    pub nombres: Option<String>,
    #[serde(default)]
    pub apellidos: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tipo_ausencia: Option<String>,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub dias_habiles: Option<i64>,
    #[serde(default)]
    pub motivo: Option<String>,
    #[serde(default, alias = "aprobador_nombre")]
    pub aprobador: Option<String>,
    #[serde(default)]
    pub accion: Option<i16>,
    #[serde(default)]
    pub accion_label: Option<String>,
    #[serde(default)]
    pub comentario: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
}

impl ApprovalRecord {
    pub fn employee_name(&self) -> String {
        full_name(self.nombres.as_deref(), self.apellidos.as_deref())
    }

    pub fn action_label(&self) -> String {
        self.accion_label.clone().unwrap_or_else(|| match self.accion {
            Some(1) => "aprobado".into(),
            Some(2) => "rechazado".into(),
            Some(other) => format!("desconocido({})", other),
            None => "N/A".into(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VacationBalance {
    pub id: i64,
    #[serde(default)]
    pub nombres: Option<String>,
    #[serde(default)]
    pub apellidos: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub periodo: Option<String>,
    #[serde(default)]
    pub dias_asignados: Option<Value>,
    #[serde(default)]
    pub dias_tomados: Option<Value>,
    #[serde(default)]
    pub dias_disponibles: Option<Value>,
}

impl VacationBalance {
    pub fn employee_name(&self) -> String {
        full_name(self.nombres.as_deref(), self.apellidos.as_deref())
    }
}

/// Decimal fields arrive either as strings (`"15.00"`) or as numbers.
pub fn render_amount(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(raw)) => raw.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "N/A".into(),
    }
}

/// List payloads come either bare or wrapped as `{count, results}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paged {
        #[serde(default)]
        count: Option<u64>,
        results: Vec<T>,
    },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged { results, .. } => results,
            Self::Bare(items) => items,
        }
    }
}
