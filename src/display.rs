//! Terminal rendering for each wizard screen.

use crate::catalog::Catalog;
use crate::model::{Draft, Project, Step};
use crate::notice::{Kind, Notice};

pub fn progress(step: Step) {
    let mut bar = String::new();
    for n in 1..=Step::COUNT {
        if n > 1 {
            bar.push_str("──");
        }
        if n <= step.number() {
            bar.push_str(&format!("[{n}]"));
        } else {
            bar.push_str(&format!(" {n} "));
        }
    }
    println!("\n{bar}");
    println!("Paso {} de {}\n", step.number(), Step::COUNT);
}

pub fn universities(catalog: &Catalog) {
    println!("Seleccionar Universidad");
    println!("Elija su universidad para continuar con el proceso de postulación\n");
    for university in &catalog.universities {
        println!("  {}. {}", university.id, university.name);
    }
    println!();
}

pub fn legajo_examples() {
    println!("Datos del Estudiante");
    println!("Ingrese el legajo del Estudiante\n");
    println!("Ejemplos para prueba:");
    println!("  - Cualquier número válido de 5 dígitos: postulación exitosa.");
    println!("  - Texto o números incompletos: datos no válidos.");
    println!("  - 00000: estudiante no encontrado.");
    println!("  - 99999: postulación fuera de fecha.");
    println!("  - 11111: cupo del puesto alcanzado.");
    println!("  - 22222: postulación existente.");
    println!("  - 33333: estudiante dado de baja.");
    println!("  - 44444: carrera incorrecta.");
    println!("  - 55555: materias regulares insuficientes.");
    println!("  - 66666: materias aprobadas insuficientes.");
    println!();
}

pub fn projects(catalog: &Catalog) {
    println!("Proyectos Disponibles");
    println!("Seleccione el proyecto al que desea postularse\n");
    for project in &catalog.projects {
        println!("  [{}] {} — {}", project.number, project.name, project.company);
        println!("      {}", project.description);
        println!(
            "      Cierre de postulaciones: {}  |  Inicio de actividades: {}  |  Fin: {}",
            project.application_close, project.activity_start, project.project_end
        );
        println!();
    }
}

pub fn positions(catalog: &Catalog, project: &Project) {
    println!("Puestos Disponibles");
    println!("Proyecto: {}\n", project.name);
    for position in &catalog.positions {
        println!(
            "  [{}] {} — {} vacante{}, {} h/semana",
            position.code,
            position.name,
            position.vacancies,
            if position.vacancies == 1 { "" } else { "s" },
            position.weekly_hours
        );
        println!("      {}", position.description);
        println!(
            "      Requisitos: {} | mín. {} materias aprobadas | mín. {} materias regulares",
            position.field, position.min_approved_courses, position.min_regular_courses
        );
        println!();
    }
}

pub fn summary(draft: &Draft, catalog: &Catalog) {
    println!("Confirmar Postulación");
    println!("Resumen de su postulación:\n");
    if let Some(project) = &draft.project {
        println!("  Proyecto:    {}", project.name);
        println!("  Empresa:     {}", project.company);
    }
    if let Some(position) = &draft.position {
        println!("  Puesto:      {}", position.name);
        println!("  Dedicación:  {} horas/semana", position.weekly_hours);
    }
    if let Some(legajo) = &draft.legajo {
        println!("  Legajo:      {legajo}");
    }
    if let Some(university) = draft
        .university
        .as_deref()
        .and_then(|id| catalog.university(id))
    {
        println!("  Universidad: {}", university.name);
    }
    println!();
}

pub fn success() {
    println!("¡Postulación Exitosa!");
    println!("Su postulación al proyecto ha sido registrada correctamente.\n");
}

pub fn notice(notice: &Notice) {
    match notice.kind {
        Kind::Error => println!("\n  [!] {}", notice.message),
        Kind::Success => println!("\n  [✓] {}", notice.message),
    }
}
