//! Character sheet data model.
//!
//! A `Character` is a flat record of 22 named fields: 18 free-form text
//! fields and 4 numeric attributes. The field set is fixed; fields are
//! never added or removed at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four numeric attributes share one valid range.
pub const ATTRIBUTE_MIN: i32 = 0;
/// Upper bound of the attribute range, inclusive.
pub const ATTRIBUTE_MAX: i32 = 20;

/// Every field of the character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Nombre,
    Raza,
    Apariencia,
    CaracteristicasDistintivas,
    EstiloVestimenta,
    RasgosPersonalidad,
    ValoresCreencias,
    TemoresDebilidades,
    Aliados,
    Enemigos,
    ObjetivosCortoPlazo,
    ObjetivosLargoPlazo,
    Fuerza,
    Destreza,
    Inteligencia,
    Carisma,
    HabilidadesAdicionales,
    TalentosUnicos,
    EquipoActual,
    RecursosFinancieros,
    LogrosTitulos,
    EventosSignificativos,
}

/// Whether a field holds free-form text or a numeric attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Attribute,
}

impl Field {
    /// All 22 fields, in sheet order.
    pub const ALL: [Field; 22] = [
        Field::Nombre,
        Field::Raza,
        Field::Apariencia,
        Field::CaracteristicasDistintivas,
        Field::EstiloVestimenta,
        Field::RasgosPersonalidad,
        Field::ValoresCreencias,
        Field::TemoresDebilidades,
        Field::Aliados,
        Field::Enemigos,
        Field::ObjetivosCortoPlazo,
        Field::ObjetivosLargoPlazo,
        Field::Fuerza,
        Field::Destreza,
        Field::Inteligencia,
        Field::Carisma,
        Field::HabilidadesAdicionales,
        Field::TalentosUnicos,
        Field::EquipoActual,
        Field::RecursosFinancieros,
        Field::LogrosTitulos,
        Field::EventosSignificativos,
    ];

    pub fn all() -> &'static [Field] {
        &Self::ALL
    }

    /// The serialized name, matching the keys of the persisted record.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Nombre => "nombre",
            Field::Raza => "raza",
            Field::Apariencia => "apariencia",
            Field::CaracteristicasDistintivas => "caracteristicasDistintivas",
            Field::EstiloVestimenta => "estiloVestimenta",
            Field::RasgosPersonalidad => "rasgosPersonalidad",
            Field::ValoresCreencias => "valoresCreencias",
            Field::TemoresDebilidades => "temoresDebilidades",
            Field::Aliados => "aliados",
            Field::Enemigos => "enemigos",
            Field::ObjetivosCortoPlazo => "objetivosCortoPlazo",
            Field::ObjetivosLargoPlazo => "objetivosLargoPlazo",
            Field::Fuerza => "fuerza",
            Field::Destreza => "destreza",
            Field::Inteligencia => "inteligencia",
            Field::Carisma => "carisma",
            Field::HabilidadesAdicionales => "habilidadesAdicionales",
            Field::TalentosUnicos => "talentosUnicos",
            Field::EquipoActual => "equipoActual",
            Field::RecursosFinancieros => "recursosFinancieros",
            Field::LogrosTitulos => "logrosTitulos",
            Field::EventosSignificativos => "eventosSignificativos",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Nombre => "Nombre",
            Field::Raza => "Raza",
            Field::Apariencia => "Apariencia",
            Field::CaracteristicasDistintivas => "Características distintivas",
            Field::EstiloVestimenta => "Estilo de vestimenta",
            Field::RasgosPersonalidad => "Rasgos de personalidad",
            Field::ValoresCreencias => "Valores y creencias",
            Field::TemoresDebilidades => "Temores y debilidades",
            Field::Aliados => "Aliados",
            Field::Enemigos => "Enemigos",
            Field::ObjetivosCortoPlazo => "Objetivos a corto plazo",
            Field::ObjetivosLargoPlazo => "Objetivos a largo plazo",
            Field::Fuerza => "Fuerza",
            Field::Destreza => "Destreza",
            Field::Inteligencia => "Inteligencia",
            Field::Carisma => "Carisma",
            Field::HabilidadesAdicionales => "Habilidades adicionales",
            Field::TalentosUnicos => "Talentos únicos",
            Field::EquipoActual => "Equipo actual",
            Field::RecursosFinancieros => "Recursos financieros",
            Field::LogrosTitulos => "Logros y títulos",
            Field::EventosSignificativos => "Eventos significativos",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Fuerza | Field::Destreza | Field::Inteligencia | Field::Carisma => {
                FieldKind::Attribute
            }
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The value of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Attribute(i32),
}

impl FieldValue {
    /// Coerce into text. Numbers render in decimal, the way the original
    /// sheet stored raw input.
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Attribute(n) => n.to_string(),
        }
    }

    /// Coerce into an attribute value. Unparseable text becomes 0.
    pub fn into_attribute(self) -> i32 {
        match self {
            FieldValue::Attribute(n) => n,
            FieldValue::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Attribute(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Attribute(n)
    }
}

/// The full character record.
///
/// Serialized field names are camelCase so the persisted document keeps the
/// layout the sheet has always used. Missing fields deserialize to their
/// defaults; there is no schema version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    pub nombre: String,
    pub raza: String,
    pub apariencia: String,
    pub caracteristicas_distintivas: String,
    pub estilo_vestimenta: String,
    pub rasgos_personalidad: String,
    pub valores_creencias: String,
    pub temores_debilidades: String,
    pub aliados: String,
    pub enemigos: String,
    pub objetivos_corto_plazo: String,
    pub objetivos_largo_plazo: String,
    pub fuerza: i32,
    pub destreza: i32,
    pub inteligencia: i32,
    pub carisma: i32,
    pub habilidades_adicionales: String,
    pub talentos_unicos: String,
    pub equipo_actual: String,
    pub recursos_financieros: String,
    pub logros_titulos: String,
    pub eventos_significativos: String,
}

impl Character {
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Nombre => FieldValue::Text(self.nombre.clone()),
            Field::Raza => FieldValue::Text(self.raza.clone()),
            Field::Apariencia => FieldValue::Text(self.apariencia.clone()),
            Field::CaracteristicasDistintivas => {
                FieldValue::Text(self.caracteristicas_distintivas.clone())
            }
            Field::EstiloVestimenta => FieldValue::Text(self.estilo_vestimenta.clone()),
            Field::RasgosPersonalidad => FieldValue::Text(self.rasgos_personalidad.clone()),
            Field::ValoresCreencias => FieldValue::Text(self.valores_creencias.clone()),
            Field::TemoresDebilidades => FieldValue::Text(self.temores_debilidades.clone()),
            Field::Aliados => FieldValue::Text(self.aliados.clone()),
            Field::Enemigos => FieldValue::Text(self.enemigos.clone()),
            Field::ObjetivosCortoPlazo => FieldValue::Text(self.objetivos_corto_plazo.clone()),
            Field::ObjetivosLargoPlazo => FieldValue::Text(self.objetivos_largo_plazo.clone()),
            Field::Fuerza => FieldValue::Attribute(self.fuerza),
            Field::Destreza => FieldValue::Attribute(self.destreza),
            Field::Inteligencia => FieldValue::Attribute(self.inteligencia),
            Field::Carisma => FieldValue::Attribute(self.carisma),
            Field::HabilidadesAdicionales => {
                FieldValue::Text(self.habilidades_adicionales.clone())
            }
            Field::TalentosUnicos => FieldValue::Text(self.talentos_unicos.clone()),
            Field::EquipoActual => FieldValue::Text(self.equipo_actual.clone()),
            Field::RecursosFinancieros => FieldValue::Text(self.recursos_financieros.clone()),
            Field::LogrosTitulos => FieldValue::Text(self.logros_titulos.clone()),
            Field::EventosSignificativos => FieldValue::Text(self.eventos_significativos.clone()),
        }
    }

    /// Replace one field's value, leaving all others untouched.
    ///
    /// A value of the wrong kind is coerced the way raw sheet input was:
    /// numbers render as text, text parses as a number or falls back to 0.
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        let value = value.into();
        match field {
            Field::Nombre => self.nombre = value.into_text(),
            Field::Raza => self.raza = value.into_text(),
            Field::Apariencia => self.apariencia = value.into_text(),
            Field::CaracteristicasDistintivas => {
                self.caracteristicas_distintivas = value.into_text();
            }
            Field::EstiloVestimenta => self.estilo_vestimenta = value.into_text(),
            Field::RasgosPersonalidad => self.rasgos_personalidad = value.into_text(),
            Field::ValoresCreencias => self.valores_creencias = value.into_text(),
            Field::TemoresDebilidades => self.temores_debilidades = value.into_text(),
            Field::Aliados => self.aliados = value.into_text(),
            Field::Enemigos => self.enemigos = value.into_text(),
            Field::ObjetivosCortoPlazo => self.objetivos_corto_plazo = value.into_text(),
            Field::ObjetivosLargoPlazo => self.objetivos_largo_plazo = value.into_text(),
            Field::Fuerza => self.fuerza = value.into_attribute(),
            Field::Destreza => self.destreza = value.into_attribute(),
            Field::Inteligencia => self.inteligencia = value.into_attribute(),
            Field::Carisma => self.carisma = value.into_attribute(),
            Field::HabilidadesAdicionales => self.habilidades_adicionales = value.into_text(),
            Field::TalentosUnicos => self.talentos_unicos = value.into_text(),
            Field::EquipoActual => self.equipo_actual = value.into_text(),
            Field::RecursosFinancieros => self.recursos_financieros = value.into_text(),
            Field::LogrosTitulos => self.logros_titulos = value.into_text(),
            Field::EventosSignificativos => self.eventos_significativos = value.into_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let character = Character::default();
        for field in Field::all() {
            match character.get(*field) {
                FieldValue::Text(s) => assert_eq!(s, "", "{field} should default empty"),
                FieldValue::Attribute(n) => assert_eq!(n, 0, "{field} should default to 0"),
            }
        }
    }

    #[test]
    fn test_field_count_and_kinds() {
        assert_eq!(Field::all().len(), 22);
        let attributes: Vec<_> = Field::all()
            .iter()
            .filter(|f| f.kind() == FieldKind::Attribute)
            .collect();
        assert_eq!(
            attributes,
            vec![
                &Field::Fuerza,
                &Field::Destreza,
                &Field::Inteligencia,
                &Field::Carisma
            ]
        );
    }

    #[test]
    fn test_set_leaves_other_fields_untouched() {
        let mut character = Character::default();
        character.set(Field::Nombre, "Aria");
        character.set(Field::Fuerza, 12);

        assert_eq!(character.nombre, "Aria");
        assert_eq!(character.fuerza, 12);
        assert_eq!(character.raza, "");
        assert_eq!(character.destreza, 0);
    }

    #[test]
    fn test_kind_coercion() {
        let mut character = Character::default();
        character.set(Field::Fuerza, "15");
        assert_eq!(character.fuerza, 15);

        character.set(Field::Fuerza, "not a number");
        assert_eq!(character.fuerza, 0);

        character.set(Field::Nombre, 7);
        assert_eq!(character.nombre, "7");
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let mut character = Character::default();
        character.set(Field::ObjetivosCortoPlazo, "Sobrevivir");

        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["objetivosCortoPlazo"], "Sobrevivir");
        assert_eq!(json["caracteristicasDistintivas"], "");
        assert_eq!(json["fuerza"], 0);

        // Every field name is present under its serialized key.
        for field in Field::all() {
            assert!(
                json.get(field.name()).is_some(),
                "missing key {}",
                field.name()
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let mut character = Character::default();
        character.set(Field::Nombre, "Aria");
        character.set(Field::Raza, "Elf");
        character.set(Field::Carisma, 18);

        let json = serde_json::to_string(&character).unwrap();
        let loaded: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, character);
    }

    #[test]
    fn test_missing_fields_default_on_load() {
        // A record persisted before some fields existed loads with defaults.
        let loaded: Character =
            serde_json::from_str(r#"{"nombre":"Bruno","fuerza":14}"#).unwrap();
        assert_eq!(loaded.nombre, "Bruno");
        assert_eq!(loaded.fuerza, 14);
        assert_eq!(loaded.raza, "");
        assert_eq!(loaded.destreza, 0);
    }
}
