use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::date_range::{day_count_preview, parse_iso_date, DateRange};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Selecciona un tipo de ausencia.")]
    MissingType,
    #[error("Tipo de ausencia inválido.")]
    InvalidType,
    #[error("Selecciona fecha de inicio.")]
    MissingStart,
    #[error("Fecha de inicio inválida.")]
    InvalidStart,
    #[error("Motivo es obligatorio.")]
    MissingReason,
    #[error("fecha_fin no puede ser menor a fecha_inicio.")]
    EndBeforeStart,
}

/// Raw values of the create/edit absence form, as typed by the employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbsenceDraft {
    pub absence_type_id: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl AbsenceDraft {
    /// Moving the start past the current end clears the end.
    pub fn on_start_changed(&mut self, start: impl Into<String>) {
        self.start_date = start.into();
        if let (Some(start), Some(end)) = (
            parse_iso_date(&self.start_date),
            parse_iso_date(&self.end_date),
        ) {
            if end < start {
                self.end_date.clear();
            }
        }
    }

    pub fn preview_days(&self) -> u32 {
        day_count_preview(
            parse_iso_date(&self.start_date),
            parse_iso_date(&self.end_date),
        )
    }

    pub fn calendar(&self) -> DateRange {
        DateRange::from_iso(&self.start_date, &self.end_date)
    }

    pub fn validate(&self) -> Result<NewAbsenceRequest, FormError> {
        let type_raw = self.absence_type_id.trim();
        if type_raw.is_empty() {
            return Err(FormError::MissingType);
        }
        let id_tipo_ausencia = type_raw
            .parse::<i64>()
            .map_err(|_| FormError::InvalidType)?;

        if self.start_date.trim().is_empty() {
            return Err(FormError::MissingStart);
        }
        let fecha_inicio = parse_iso_date(&self.start_date).ok_or(FormError::InvalidStart)?;

        let motivo = self.reason.trim();
        if motivo.is_empty() {
            return Err(FormError::MissingReason);
        }

        let fecha_fin = parse_iso_date(&self.end_date);
        if matches!(fecha_fin, Some(end) if end < fecha_inicio) {
            return Err(FormError::EndBeforeStart);
        }

        Ok(NewAbsenceRequest {
            id_tipo_ausencia,
            fecha_inicio,
            fecha_fin,
            motivo: motivo.to_string(),
        })
    }
}

/// Payload for `POST /empleado/ausencias/` and `PUT /empleado/ausencias/{id}/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAbsenceRequest {
    pub id_tipo_ausencia: i64,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: Option<NaiveDate>,
    pub motivo: String,
}
