//! Registration record and attachment models
//!
//! Field and part names on the wire are fixed by the onboarding backend
//! contract: camelCase Spanish field keys, four named file parts and the
//! submitting session's `userEmail`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Full onboarding data record collected by the registration screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    // Datos personales
    pub apellidos: String,
    pub nombre: String,
    pub sexo: String,
    pub dni: String,
    pub nss: String,
    pub discapacidad: bool,
    /// Only meaningful while `discapacidad` is true
    pub porcentaje_discapacidad: String,
    pub fecha_nacimiento: String,
    // Dirección
    pub direccion: String,
    pub localidad: String,
    pub provincia: String,
    pub codigo_postal: String,
    pub pais: String,
    pub localidad_nacimiento: String,
    pub provincia_nacimiento: String,
    // Contacto
    pub email: String,
    pub telefono_fijo: String,
    pub telefono_movil: String,
    // Formación
    pub titulacion: String,
    // Datos bancarios
    pub nombre_entidad_bancaria: String,
    pub iban: String,
    pub bic_code: String,
    // Contacto de emergencia
    pub contacto_emergencia_nombre: String,
    pub contacto_emergencia_parentesco: String,
    pub contacto_emergencia_telefono: String,
}

/// The four attachment slots of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Foto,
    CertificadoTitularidad,
    Titulacion,
    /// Only meaningful while `discapacidad` is true
    Discapacidad,
}

impl AttachmentKind {
    pub const ALL: [AttachmentKind; 4] = [
        AttachmentKind::Foto,
        AttachmentKind::CertificadoTitularidad,
        AttachmentKind::Titulacion,
        AttachmentKind::Discapacidad,
    ];

    /// Multipart part name on the wire
    pub fn part_name(&self) -> &'static str {
        match self {
            AttachmentKind::Foto => "fotoFile",
            AttachmentKind::CertificadoTitularidad => "certificadoTitularidad",
            AttachmentKind::Titulacion => "titulacionFile",
            AttachmentKind::Discapacidad => "discapacidadFile",
        }
    }
}

/// A selected file; content is never inspected before submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub path: PathBuf,
}

/// Optional file selections of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentSet {
    foto: Option<Attachment>,
    certificado_titularidad: Option<Attachment>,
    titulacion: Option<Attachment>,
    discapacidad: Option<Attachment>,
}

impl AttachmentSet {
    fn slot(&self, kind: AttachmentKind) -> &Option<Attachment> {
        match kind {
            AttachmentKind::Foto => &self.foto,
            AttachmentKind::CertificadoTitularidad => &self.certificado_titularidad,
            AttachmentKind::Titulacion => &self.titulacion,
            AttachmentKind::Discapacidad => &self.discapacidad,
        }
    }

    fn slot_mut(&mut self, kind: AttachmentKind) -> &mut Option<Attachment> {
        match kind {
            AttachmentKind::Foto => &mut self.foto,
            AttachmentKind::CertificadoTitularidad => &mut self.certificado_titularidad,
            AttachmentKind::Titulacion => &mut self.titulacion,
            AttachmentKind::Discapacidad => &mut self.discapacidad,
        }
    }

    /// Selecting a file replaces any previous selection in the slot
    pub fn select(&mut self, kind: AttachmentKind, attachment: Attachment) {
        *self.slot_mut(kind) = Some(attachment);
    }

    pub fn get(&self, kind: AttachmentKind) -> Option<&Attachment> {
        self.slot(kind).as_ref()
    }

    pub fn is_selected(&self, kind: AttachmentKind) -> bool {
        self.slot(kind).is_some()
    }

    pub fn is_empty(&self) -> bool {
        AttachmentKind::ALL.iter().all(|kind| !self.is_selected(*kind))
    }

    /// Iterate over selected attachments in wire order
    pub fn iter(&self) -> impl Iterator<Item = (AttachmentKind, &Attachment)> {
        AttachmentKind::ALL
            .iter()
            .filter_map(|kind| self.slot(*kind).as_ref().map(|a| (*kind, a)))
    }
}

/// Transmittable package assembled on registration submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPayload {
    pub record: RegistrationRecord,
    pub attachments: AttachmentSet,
    /// Identity of the submitting session, sent as `userEmail`
    pub user_email: String,
}

impl RegistrationPayload {
    /// Flatten the record into wire (key, value) text fields
    ///
    /// Matches the backend contract: every field as a string, the
    /// discapacidad flag as `"true"`/`"false"`.
    pub fn text_fields(&self) -> crate::utils::errors::Result<Vec<(String, String)>> {
        let value = serde_json::to_value(&self.record)?;
        let map = match value {
            serde_json::Value::Object(map) => map,
            _ => unreachable!("record serializes to an object"),
        };

        Ok(map
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect())
    }
}
