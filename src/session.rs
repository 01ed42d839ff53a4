//! Interactive terminal session driving the wizard.
//!
//! Renders the current screen, reads one line of input and dispatches it to
//! the wizard. Input and timer callbacks are the only mutation sources; each
//! runs to completion before the next is read.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::display;
use crate::model::Step;
use crate::wizard::Wizard;
use eyre::Result;
use std::io::{self, Write};

const BACK: &str = "a";
const QUIT: &str = "q";

pub async fn run(catalog: &Catalog, config: &Config) -> Result<()> {
    let mut wizard = Wizard::new(catalog, config);
    println!("Sistema de Prácticas Profesionales");
    println!("Complete el proceso paso a paso para postularse a un proyecto");
    println!("('a' vuelve una pantalla, 'q' sale)");

    loop {
        display::progress(wizard.step());
        match wizard.step() {
            Step::University => {
                display::universities(catalog);
                let Some(input) = prompt("Universidad (id)")? else {
                    break;
                };
                if let Err(e) = wizard.choose_university(&input) {
                    println!("{e}");
                }
            }
            Step::Legajo => {
                display::legajo_examples();
                let Some(input) = prompt("Número de Legajo")? else {
                    break;
                };
                if input == BACK {
                    wizard.back()?;
                    continue;
                }
                println!("Validando...");
                wizard.submit_legajo(&input).await?;
            }
            Step::Projects => {
                display::projects(catalog);
                let Some(input) = prompt("Proyecto (número)")? else {
                    break;
                };
                if input == BACK {
                    wizard.back()?;
                    continue;
                }
                if let Err(e) = wizard.choose_project(&input) {
                    println!("{e}");
                }
            }
            Step::Positions => {
                let project = wizard
                    .draft()
                    .project
                    .clone()
                    .expect("project chosen before the position screen");
                display::positions(catalog, &project);
                let Some(input) = prompt("Puesto (código)")? else {
                    break;
                };
                if input == BACK {
                    wizard.back()?;
                    continue;
                }
                if let Err(e) = wizard.choose_position(&input) {
                    println!("{e}");
                }
            }
            Step::Confirm => {
                display::summary(wizard.draft(), catalog);
                let Some(input) = prompt("¿Desea postularse al puesto seleccionado? (s/n)")?
                else {
                    break;
                };
                match input.as_str() {
                    "s" | "si" | "sí" => {
                        println!("Procesando...");
                        wizard.confirm().await?;
                    }
                    "n" | "no" => wizard.decline()?,
                    _ => println!("Responda 's' o 'n'"),
                }
            }
            Step::Done => {
                display::success();
                let Some(input) = prompt("¿Nueva postulación? (s/n)")? else {
                    break;
                };
                if matches!(input.as_str(), "s" | "si" | "sí") {
                    wizard.reset();
                } else {
                    break;
                }
            }
        }
        if let Some(notice) = wizard.notices().current() {
            display::notice(&notice);
        }
    }
    Ok(())
}

/// Read one trimmed line. None means end of input or an explicit quit.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim().to_owned();
    if line == QUIT {
        return Ok(None);
    }
    Ok(Some(line))
}
