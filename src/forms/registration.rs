//! Registration screen controller
//!
//! Holds the onboarding record and attachment selections, applies the
//! field specs on submit and assembles the transmittable payload. The
//! form is deliberately not cleared after submission; that matches the
//! original portal, in contrast with the admin form.

use super::{FieldKind, FieldSpec};
use crate::models::{Attachment, AttachmentKind, AttachmentSet, RegistrationPayload, RegistrationRecord};
use crate::utils::errors::{AltaFlowError, Result};

/// Field specs in rendering order; required everywhere except the two
/// phone fields and the disability percentage.
pub const FIELD_SPECS: [FieldSpec; 24] = [
    // Datos Personales
    FieldSpec { key: "apellidos", label: "Apellidos", section: "Datos Personales", kind: FieldKind::Text, required: true },
    FieldSpec { key: "nombre", label: "Nombre", section: "Datos Personales", kind: FieldKind::Text, required: true },
    FieldSpec { key: "sexo", label: "Sexo", section: "Datos Personales", kind: FieldKind::Text, required: true },
    FieldSpec { key: "fechaNacimiento", label: "Fecha de Nacimiento", section: "Datos Personales", kind: FieldKind::Date, required: true },
    FieldSpec { key: "dni", label: "DNI", section: "Datos Personales", kind: FieldKind::Text, required: true },
    FieldSpec { key: "nss", label: "Número de Seguridad Social", section: "Datos Personales", kind: FieldKind::Text, required: true },
    FieldSpec { key: "porcentajeDiscapacidad", label: "Porcentaje de Discapacidad", section: "Datos Personales", kind: FieldKind::Percent, required: false },
    // Dirección
    FieldSpec { key: "direccion", label: "Dirección", section: "Dirección", kind: FieldKind::Text, required: true },
    FieldSpec { key: "localidad", label: "Localidad", section: "Dirección", kind: FieldKind::Text, required: true },
    FieldSpec { key: "provincia", label: "Provincia", section: "Dirección", kind: FieldKind::Text, required: true },
    FieldSpec { key: "codigoPostal", label: "Código Postal", section: "Dirección", kind: FieldKind::Text, required: true },
    FieldSpec { key: "pais", label: "País", section: "Dirección", kind: FieldKind::Text, required: true },
    FieldSpec { key: "localidadNacimiento", label: "Localidad de Nacimiento", section: "Dirección", kind: FieldKind::Text, required: true },
    FieldSpec { key: "provinciaNacimiento", label: "Provincia de Nacimiento", section: "Dirección", kind: FieldKind::Text, required: true },
    // Contacto
    FieldSpec { key: "email", label: "Email", section: "Contacto", kind: FieldKind::Email, required: true },
    FieldSpec { key: "telefonoFijo", label: "Teléfono Fijo", section: "Contacto", kind: FieldKind::Phone, required: false },
    FieldSpec { key: "telefonoMovil", label: "Teléfono Móvil", section: "Contacto", kind: FieldKind::Phone, required: false },
    // Formación
    FieldSpec { key: "titulacion", label: "Titulación", section: "Formación", kind: FieldKind::Text, required: true },
    // Datos Bancarios
    FieldSpec { key: "nombreEntidadBancaria", label: "Nombre de la Entidad Bancaria", section: "Datos Bancarios", kind: FieldKind::Text, required: true },
    FieldSpec { key: "iban", label: "IBAN", section: "Datos Bancarios", kind: FieldKind::Text, required: true },
    FieldSpec { key: "bicCode", label: "BIC Code", section: "Datos Bancarios", kind: FieldKind::Text, required: true },
    // Contacto de Emergencia
    FieldSpec { key: "contactoEmergenciaNombre", label: "Nombre del Contacto de Emergencia", section: "Contacto de Emergencia", kind: FieldKind::Text, required: true },
    FieldSpec { key: "contactoEmergenciaParentesco", label: "Parentesco", section: "Contacto de Emergencia", kind: FieldKind::Text, required: true },
    FieldSpec { key: "contactoEmergenciaTelefono", label: "Teléfono del Contacto de Emergencia", section: "Contacto de Emergencia", kind: FieldKind::Phone, required: true },
];

/// Registration screen state: record fields plus attachment slots
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    record: RegistrationRecord,
    attachments: AttachmentSet,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    pub fn attachments(&self) -> &AttachmentSet {
        &self.attachments
    }

    /// Set a string field by wire key
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = self.field_mut(key).ok_or_else(|| {
            AltaFlowError::InvalidInput(format!("Unknown registration field: {}", key))
        })?;
        *slot = value.to_string();
        Ok(())
    }

    /// Read a string field by wire key
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "apellidos" => Some(&self.record.apellidos),
            "nombre" => Some(&self.record.nombre),
            "sexo" => Some(&self.record.sexo),
            "dni" => Some(&self.record.dni),
            "nss" => Some(&self.record.nss),
            "porcentajeDiscapacidad" => Some(&self.record.porcentaje_discapacidad),
            "fechaNacimiento" => Some(&self.record.fecha_nacimiento),
            "direccion" => Some(&self.record.direccion),
            "localidad" => Some(&self.record.localidad),
            "provincia" => Some(&self.record.provincia),
            "codigoPostal" => Some(&self.record.codigo_postal),
            "pais" => Some(&self.record.pais),
            "localidadNacimiento" => Some(&self.record.localidad_nacimiento),
            "provinciaNacimiento" => Some(&self.record.provincia_nacimiento),
            "email" => Some(&self.record.email),
            "telefonoFijo" => Some(&self.record.telefono_fijo),
            "telefonoMovil" => Some(&self.record.telefono_movil),
            "titulacion" => Some(&self.record.titulacion),
            "nombreEntidadBancaria" => Some(&self.record.nombre_entidad_bancaria),
            "iban" => Some(&self.record.iban),
            "bicCode" => Some(&self.record.bic_code),
            "contactoEmergenciaNombre" => Some(&self.record.contacto_emergencia_nombre),
            "contactoEmergenciaParentesco" => Some(&self.record.contacto_emergencia_parentesco),
            "contactoEmergenciaTelefono" => Some(&self.record.contacto_emergencia_telefono),
            _ => None,
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "apellidos" => Some(&mut self.record.apellidos),
            "nombre" => Some(&mut self.record.nombre),
            "sexo" => Some(&mut self.record.sexo),
            "dni" => Some(&mut self.record.dni),
            "nss" => Some(&mut self.record.nss),
            "porcentajeDiscapacidad" => Some(&mut self.record.porcentaje_discapacidad),
            "fechaNacimiento" => Some(&mut self.record.fecha_nacimiento),
            "direccion" => Some(&mut self.record.direccion),
            "localidad" => Some(&mut self.record.localidad),
            "provincia" => Some(&mut self.record.provincia),
            "codigoPostal" => Some(&mut self.record.codigo_postal),
            "pais" => Some(&mut self.record.pais),
            "localidadNacimiento" => Some(&mut self.record.localidad_nacimiento),
            "provinciaNacimiento" => Some(&mut self.record.provincia_nacimiento),
            "email" => Some(&mut self.record.email),
            "telefonoFijo" => Some(&mut self.record.telefono_fijo),
            "telefonoMovil" => Some(&mut self.record.telefono_movil),
            "titulacion" => Some(&mut self.record.titulacion),
            "nombreEntidadBancaria" => Some(&mut self.record.nombre_entidad_bancaria),
            "iban" => Some(&mut self.record.iban),
            "bicCode" => Some(&mut self.record.bic_code),
            "contactoEmergenciaNombre" => Some(&mut self.record.contacto_emergencia_nombre),
            "contactoEmergenciaParentesco" => Some(&mut self.record.contacto_emergencia_parentesco),
            "contactoEmergenciaTelefono" => Some(&mut self.record.contacto_emergencia_telefono),
            _ => None,
        }
    }

    /// Toggle the disability checkbox
    pub fn set_discapacidad(&mut self, value: bool) {
        self.record.discapacidad = value;
    }

    pub fn discapacidad(&self) -> bool {
        self.record.discapacidad
    }

    /// Select a file for an attachment slot
    pub fn select_attachment(&mut self, kind: AttachmentKind, attachment: Attachment) {
        self.attachments.select(kind, attachment);
    }

    /// Button label for an attachment slot, as the original portal shows it
    pub fn attachment_label(&self, kind: AttachmentKind) -> &'static str {
        if self.attachments.is_selected(kind) {
            "Archivo seleccionado"
        } else {
            "Seleccionar archivo"
        }
    }

    /// Validate the whole form against the field specs
    ///
    /// The disability percentage and certificate only apply while the
    /// checkbox is set; nothing about them blocks submission otherwise.
    pub fn validate(&self) -> Result<()> {
        for spec in &FIELD_SPECS {
            if spec.key == "porcentajeDiscapacidad" && !self.record.discapacidad {
                continue;
            }
            let value = self.field(spec.key).unwrap_or_default();
            spec.validate(value)?;
        }
        Ok(())
    }

    /// Assemble the transmittable payload; the form keeps its state
    pub fn build_payload(&self, user_email: &str) -> Result<RegistrationPayload> {
        self.validate()?;
        Ok(RegistrationPayload {
            record: self.record.clone(),
            attachments: self.attachments.clone(),
            user_email: user_email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::path::PathBuf;

    pub fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        let values = [
            ("apellidos", "García Pérez"),
            ("nombre", "María"),
            ("sexo", "femenino"),
            ("fechaNacimiento", "1992-03-08"),
            ("dni", "12345678Z"),
            ("nss", "281234567890"),
            ("direccion", "Calle Mayor 1"),
            ("localidad", "Alicante"),
            ("provincia", "Alicante"),
            ("codigoPostal", "03001"),
            ("pais", "España"),
            ("localidadNacimiento", "Elche"),
            ("provinciaNacimiento", "Alicante"),
            ("email", "maria.garcia@example.com"),
            ("telefonoMovil", "612345678"),
            ("titulacion", "Ingeniería Industrial"),
            ("nombreEntidadBancaria", "Banco Santander"),
            ("iban", "ES9121000418450200051332"),
            ("bicCode", "BSCHESMM"),
            ("contactoEmergenciaNombre", "Luis García"),
            ("contactoEmergenciaParentesco", "Padre"),
            ("contactoEmergenciaTelefono", "965123456"),
        ];
        for (key, value) in values {
            form.set_field(key, value).unwrap();
        }
        form
    }

    #[test]
    fn test_filled_form_without_files_validates() {
        let form = filled_form();
        assert!(form.validate().is_ok());
        let payload = form.build_payload("user@ideaingenieria.es").unwrap();
        assert!(payload.attachments.is_empty());
        assert_eq!(payload.user_email, "user@ideaingenieria.es");
        // Phone fields stay optional.
        assert!(payload.record.telefono_fijo.is_empty());
    }

    #[test]
    fn test_missing_required_field_blocks_submission() {
        let mut form = filled_form();
        form.set_field("iban", "").unwrap();
        assert_matches!(
            form.build_payload("user@ideaingenieria.es"),
            Err(AltaFlowError::MissingField { .. })
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut form = RegistrationForm::new();
        assert_matches!(
            form.set_field("nomina", "x"),
            Err(AltaFlowError::InvalidInput(_))
        );
    }

    #[test]
    fn test_percentage_only_checked_with_disability() {
        let mut form = filled_form();
        form.set_field("porcentajeDiscapacidad", "not a number").unwrap();
        // Checkbox off: the field does not apply.
        assert!(form.validate().is_ok());

        form.set_discapacidad(true);
        assert_matches!(form.validate(), Err(AltaFlowError::InvalidInput(_)));

        form.set_field("porcentajeDiscapacidad", "33").unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_attachment_labels_track_selection() {
        let mut form = RegistrationForm::new();
        assert_eq!(
            form.attachment_label(AttachmentKind::Foto),
            "Seleccionar archivo"
        );
        form.select_attachment(
            AttachmentKind::Foto,
            Attachment {
                file_name: "foto.jpg".to_string(),
                path: PathBuf::from("/tmp/foto.jpg"),
            },
        );
        assert_eq!(
            form.attachment_label(AttachmentKind::Foto),
            "Archivo seleccionado"
        );
    }

    #[test]
    fn test_specs_cover_every_string_field() {
        let mut form = RegistrationForm::new();
        for spec in &FIELD_SPECS {
            assert!(form.set_field(spec.key, "x").is_ok(), "spec key {}", spec.key);
        }
    }
}
