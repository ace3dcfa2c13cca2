//! The fixed catalog of wizard steps.
//!
//! Nine ordered steps partition the 22 character fields: every field is
//! owned by exactly one step.

use crate::character::Field;

/// One wizard step: a title and the fields it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub title: &'static str,
    pub fields: &'static [Field],
}

/// The step catalog, in wizard order.
pub const STEPS: [StepDefinition; 9] = [
    StepDefinition {
        title: "1. Identidad del Personaje",
        fields: &[Field::Nombre, Field::Raza],
    },
    StepDefinition {
        title: "2. Descripción Física y Personal",
        fields: &[
            Field::Apariencia,
            Field::CaracteristicasDistintivas,
            Field::EstiloVestimenta,
        ],
    },
    StepDefinition {
        title: "3. Personalidad y Psicología",
        fields: &[
            Field::RasgosPersonalidad,
            Field::ValoresCreencias,
            Field::TemoresDebilidades,
        ],
    },
    StepDefinition {
        title: "4. Relaciones y Conexiones",
        fields: &[Field::Aliados, Field::Enemigos],
    },
    StepDefinition {
        title: "5. Motivaciones y Objetivos",
        fields: &[Field::ObjetivosCortoPlazo, Field::ObjetivosLargoPlazo],
    },
    StepDefinition {
        title: "6. Atributos",
        fields: &[
            Field::Fuerza,
            Field::Destreza,
            Field::Inteligencia,
            Field::Carisma,
        ],
    },
    StepDefinition {
        title: "7. Habilidades y Talentos Especiales",
        fields: &[Field::HabilidadesAdicionales, Field::TalentosUnicos],
    },
    StepDefinition {
        title: "8. Inventario y Recursos",
        fields: &[Field::EquipoActual, Field::RecursosFinancieros],
    },
    StepDefinition {
        title: "9. Historial de Aventura",
        fields: &[Field::LogrosTitulos, Field::EventosSignificativos],
    },
];

/// Number of steps in the wizard.
pub fn step_count() -> usize {
    STEPS.len()
}

/// Look up a step by index. Indices come from the wizard state machine and
/// are always in range.
pub fn step(index: usize) -> &'static StepDefinition {
    &STEPS[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nine_steps() {
        assert_eq!(step_count(), 9);
    }

    #[test]
    fn test_steps_partition_all_fields() {
        let mut seen = HashSet::new();
        for step in &STEPS {
            for field in step.fields {
                assert!(seen.insert(*field), "{field} owned by more than one step");
            }
        }
        assert_eq!(seen.len(), Field::all().len());
    }

    #[test]
    fn test_attribute_step() {
        assert_eq!(step(5).title, "6. Atributos");
        assert_eq!(step(5).fields.len(), 4);
    }
}
