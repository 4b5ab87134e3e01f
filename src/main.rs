//! AltaFlow Onboarding Portal
//!
//! Interactive console entry point. All decision logic lives in the
//! library; this binary only prompts, prints and forwards input to the
//! application shell.

#![allow(non_snake_case)]

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{error, info};

use AltaFlow::{
    config::Settings,
    forms::registration::FIELD_SPECS,
    models::{Attachment, AttachmentKind},
    services::ServiceFactory,
    shell::PortalShell,
    state::Screen,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", AltaFlow::info());

    let services = ServiceFactory::new(settings)?;
    let mut shell = PortalShell::new(services);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();

    loop {
        let outcome = match shell.active_screen() {
            Screen::Login => run_login_screen(&mut shell, &mut input),
            Screen::Registration => run_registration_screen(&mut shell, &mut input).await,
            Screen::Admin => run_admin_screen(&mut shell, &mut input).await,
        };

        match outcome {
            Ok(true) => continue,
            Ok(false) => break,
            Err(e) => {
                error!(error = %e, "Screen handling failed");
                println!("Error: {}", e);
                if !e.is_recoverable() {
                    return Err(e.into());
                }
            }
        }
    }

    info!("AltaFlow portal closed.");
    Ok(())
}

/// Prompt for a line of input; returns the trimmed answer
fn prompt(input: &mut impl BufRead, label: &str) -> std::io::Result<String> {
    print!("{}: ", label);
    std::io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Login screen: email and password, any non-empty pair succeeds
fn run_login_screen(
    shell: &mut PortalShell,
    input: &mut impl BufRead,
) -> AltaFlow::Result<bool> {
    println!();
    println!("== Iniciar Sesión ==");
    shell.login_form.email = prompt(input, "Correo electrónico")?;
    shell.login_form.password = prompt(input, "Contraseña")?;

    if let Err(e) = shell.login() {
        println!("{}", e);
    }
    Ok(true)
}

/// Registration screen menu
async fn run_registration_screen(
    shell: &mut PortalShell,
    input: &mut impl BufRead,
) -> AltaFlow::Result<bool> {
    println!();
    println!("== Formulario de Registro ({}) ==", shell.session().identity);
    println!("  [f] Rellenar formulario");
    println!("  [a] Adjuntar archivos");
    println!("  [s] Enviar formulario");
    if shell.admin_gateway_available() {
        println!("  [g] Administración");
    }
    println!("  [l] Cerrar sesión");
    println!("  [q] Salir");

    match prompt(input, "Opción")?.as_str() {
        "f" => fill_registration_fields(shell, input)?,
        "a" => select_attachments(shell, input)?,
        "s" => match shell.submit_registration().await {
            Ok(receipt) => println!("Formulario enviado con éxito ({})", receipt.reference),
            Err(e) => println!("{}", e),
        },
        "g" => {
            if let Err(e) = shell.open_admin_panel() {
                println!("{}", e);
            }
        }
        "l" => shell.logout()?,
        "q" => return Ok(false),
        other => println!("Opción desconocida: {}", other),
    }
    Ok(true)
}

/// Walk the field specs section by section
fn fill_registration_fields(
    shell: &mut PortalShell,
    input: &mut impl BufRead,
) -> AltaFlow::Result<()> {
    let mut current_section = "";
    for spec in &FIELD_SPECS {
        if spec.key == "porcentajeDiscapacidad" {
            let flag = prompt(input, "Discapacidad (s/n)")?;
            shell.registration_form.set_discapacidad(flag == "s");
            if !shell.registration_form.discapacidad() {
                continue;
            }
        }

        if spec.section != current_section {
            current_section = spec.section;
            println!("-- {} --", current_section);
        }

        let suffix = if spec.required { "" } else { " (opcional)" };
        let value = prompt(input, &format!("{}{}", spec.label, suffix))?;
        shell.registration_form.set_field(spec.key, &value)?;
    }
    Ok(())
}

/// Offer the four attachment slots
fn select_attachments(
    shell: &mut PortalShell,
    input: &mut impl BufRead,
) -> AltaFlow::Result<()> {
    for kind in AttachmentKind::ALL {
        if kind == AttachmentKind::Discapacidad && !shell.registration_form.discapacidad() {
            continue;
        }

        let label = shell.registration_form.attachment_label(kind);
        let path = prompt(
            input,
            &format!("{} [{}] (ruta, vacío para omitir)", kind.part_name(), label),
        )?;
        if path.is_empty() {
            continue;
        }

        let path = PathBuf::from(path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "archivo".to_string());
        shell
            .registration_form
            .select_attachment(kind, Attachment { file_name, path });
    }
    Ok(())
}

/// Admin screen: provisioning form, back and logout
async fn run_admin_screen(
    shell: &mut PortalShell,
    input: &mut impl BufRead,
) -> AltaFlow::Result<bool> {
    println!();
    println!("== Administración - Alta de Usuarios ==");
    println!("  [n] Dar de alta un usuario");
    println!("  [b] Volver");
    println!("  [l] Cerrar sesión");

    match prompt(input, "Opción")?.as_str() {
        "n" => {
            shell.admin_form.email = prompt(input, "Correo Electrónico")?;
            shell.admin_form.estimated_start_date =
                prompt(input, "Fecha Estimada de Alta (YYYY-MM-DD)")?;
            match shell.submit_provisioning().await {
                Ok(_) => println!("Usuario dado de alta con éxito"),
                Err(e) => println!("{}", e),
            }
        }
        "b" => shell.close_admin_panel()?,
        "l" => shell.logout()?,
        other => println!("Opción desconocida: {}", other),
    }
    Ok(true)
}
