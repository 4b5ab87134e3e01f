//! Test data builders

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use AltaFlow::forms::RegistrationForm;

/// A registration form with every required field populated and no
/// attachments selected
pub fn filled_registration_form() -> RegistrationForm {
    let nombre: String = FirstName().fake();
    let apellido: String = LastName().fake();
    let contacto: String = FirstName().fake();

    let mut form = RegistrationForm::new();
    let values = [
        ("apellidos", apellido.as_str()),
        ("nombre", nombre.as_str()),
        ("sexo", "otro"),
        ("fechaNacimiento", "1990-05-17"),
        ("dni", "12345678Z"),
        ("nss", "281234567890"),
        ("direccion", "Calle Mayor 1"),
        ("localidad", "Alicante"),
        ("provincia", "Alicante"),
        ("codigoPostal", "03001"),
        ("pais", "España"),
        ("localidadNacimiento", "Elche"),
        ("provinciaNacimiento", "Alicante"),
        ("email", "empleado@example.com"),
        ("telefonoMovil", "612345678"),
        ("titulacion", "Ingeniería Industrial"),
        ("nombreEntidadBancaria", "Banco Santander"),
        ("iban", "ES9121000418450200051332"),
        ("bicCode", "BSCHESMM"),
        ("contactoEmergenciaNombre", contacto.as_str()),
        ("contactoEmergenciaParentesco", "Padre"),
        ("contactoEmergenciaTelefono", "965123456"),
    ];
    for (key, value) in values {
        form.set_field(key, value).expect("known field key");
    }
    form
}
