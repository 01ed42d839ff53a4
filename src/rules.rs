//! Eligibility and submission rules.
//!
//! The reserved legajos and the business rule each one trips are kept as a
//! table rather than branching logic, so the mapping can be read, tested and
//! localized in one place.

/// A legajo is exactly five ASCII digits.
pub fn is_well_formed(raw: &str) -> bool {
    let raw = raw.trim();
    raw.len() == 5 && raw.bytes().all(|b| b.is_ascii_digit())
}

/// The one reserved legajo that fails the entry-time student lookup.
pub const NOT_FOUND: &str = "00000";

/// Business rules evaluated at submission time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rejection {
    WindowClosed,
    QuotaExceeded,
    DuplicateApplication,
    Deactivated,
    WrongField,
    NotEnoughRegularCourses,
    NotEnoughApprovedCourses,
}

/// Reserved legajos and the rejection each one simulates.
pub const REJECTIONS: [(&str, Rejection); 7] = [
    ("99999", Rejection::WindowClosed),
    ("11111", Rejection::QuotaExceeded),
    ("22222", Rejection::DuplicateApplication),
    ("33333", Rejection::Deactivated),
    ("44444", Rejection::WrongField),
    ("55555", Rejection::NotEnoughRegularCourses),
    ("66666", Rejection::NotEnoughApprovedCourses),
];

pub fn rejection_for(legajo: &str) -> Option<Rejection> {
    REJECTIONS
        .iter()
        .find(|(reserved, _)| *reserved == legajo)
        .map(|&(_, rejection)| rejection)
}

pub const INVALID_FORMAT: &str = "Los datos ingresados no son válidos. Intenta nuevamente.";
pub const STUDENT_NOT_FOUND: &str = "No se ha podido encontrar el Estudiante. Intente nuevamente";
pub const SUCCESS: &str = "Postulación exitosa al proyecto";

impl Rejection {
    /// User-facing message. The window-closed and quota rules name the
    /// project the application was for.
    pub fn message(self, project: &str) -> String {
        const PREFIX: &str = "No se ha podido completar la postulación al Puesto.";
        match self {
            Rejection::WindowClosed => format!(
                "{PREFIX} El periodo de postulaciones al proyecto {project} ha cerrado."
            ),
            Rejection::QuotaExceeded => format!(
                "{PREFIX} Se ha superado el número máximo de postulaciones para el proyecto {project}"
            ),
            Rejection::DuplicateApplication => {
                format!("{PREFIX} Usted ya tiene una postulación en curso")
            }
            Rejection::Deactivated => {
                format!("{PREFIX} El estudiante se encuentra dado de baja")
            }
            Rejection::WrongField => {
                format!("{PREFIX} No pertenece a la carrera solicitada")
            }
            Rejection::NotEnoughRegularCourses => format!(
                "{PREFIX} No cumple con la cantidad de materias regulares requeridas"
            ),
            Rejection::NotEnoughApprovedCourses => format!(
                "{PREFIX} No cumple con la cantidad de materias aprobadas requeridas"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_legajos_are_exactly_five_digits() {
        assert!(is_well_formed("12345"));
        assert!(is_well_formed("00000"));
        assert!(is_well_formed(" 12345 "));
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("1234"));
        assert!(!is_well_formed("123456"));
        assert!(!is_well_formed("12a45"));
        assert!(!is_well_formed("abcde"));
        assert!(!is_well_formed("12 45"));
    }

    #[test]
    fn the_not_found_sentinel_is_well_formed() {
        // It must pass the format check to reach the simulated lookup.
        assert!(is_well_formed(NOT_FOUND));
    }

    #[test]
    fn reserved_legajos_map_to_their_rejection() {
        assert_eq!(rejection_for("99999"), Some(Rejection::WindowClosed));
        assert_eq!(rejection_for("11111"), Some(Rejection::QuotaExceeded));
        assert_eq!(rejection_for("22222"), Some(Rejection::DuplicateApplication));
        assert_eq!(rejection_for("33333"), Some(Rejection::Deactivated));
        assert_eq!(rejection_for("44444"), Some(Rejection::WrongField));
        assert_eq!(rejection_for("55555"), Some(Rejection::NotEnoughRegularCourses));
        assert_eq!(rejection_for("66666"), Some(Rejection::NotEnoughApprovedCourses));
    }

    #[test]
    fn ordinary_legajos_are_not_rejected() {
        assert_eq!(rejection_for("12345"), None);
        assert_eq!(rejection_for("54321"), None);
        // The not-found sentinel is an entry-time failure, not a rejection.
        assert_eq!(rejection_for(NOT_FOUND), None);
    }

    #[test]
    fn window_closed_and_quota_messages_name_the_project() {
        let closed = Rejection::WindowClosed.message("Plataforma E-Learning");
        assert!(closed.contains("Plataforma E-Learning"));
        let quota = Rejection::QuotaExceeded.message("Plataforma E-Learning");
        assert!(quota.contains("Plataforma E-Learning"));
    }

    #[test]
    fn other_messages_are_fixed_text() {
        for rejection in [
            Rejection::DuplicateApplication,
            Rejection::Deactivated,
            Rejection::WrongField,
            Rejection::NotEnoughRegularCourses,
            Rejection::NotEnoughApprovedCourses,
        ] {
            let message = rejection.message("Sistema de Gestión Empresarial");
            assert!(!message.contains("Sistema de Gestión Empresarial"));
            assert!(message.starts_with("No se ha podido completar la postulación al Puesto."));
        }
    }
}
