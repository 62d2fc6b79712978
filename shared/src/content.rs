//! Curated Java lessons rendered by the page.
//!
//! The store is a `static` slice built at compile time. Readers enumerate it
//! and never mutate it, so it is shared without any locking.

use std::collections::HashSet;

use thiserror::Error;

pub mod snippets;

/// Visual theme of a section. Has no behavioural effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionColor {
    Primary,
    Secondary,
    Accent,
}

impl SectionColor {
    /// Theme token used to build CSS class names such as `text-primary`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionColor::Primary => "primary",
            SectionColor::Secondary => "secondary",
            SectionColor::Accent => "accent",
        }
    }
}

/// A titled snippet owned by exactly one [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub title: &'static str,
    pub code: &'static str,
}

/// An anchorable content block. `id` doubles as the DOM element id and the
/// URL fragment that addresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: SectionColor,
    pub examples: &'static [Example],
}

/// Content authoring mistakes. Only [`validate`] reports them; rendering and
/// navigation never fail because of content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("duplicate section id `{0}`")]
    DuplicateId(String),
    #[error("section `{0}` has no examples")]
    EmptyExamples(String),
}

/// Every section, in display order.
pub static SECTIONS: &[Section] = &[
    Section {
        id: "enum",
        title: "Datos Enumerados (Enum)",
        description: "Los enums en Java son tipos especiales que representan un grupo fijo de \
                      constantes. Son perfectos para representar estados, categorías o cualquier \
                      conjunto predefinido de valores.",
        color: SectionColor::Primary,
        examples: &[
            Example {
                title: "Enum con Estados de Proceso y Métodos",
                code: snippets::ENUM_PROCESS_STATES,
            },
            Example {
                title: "Enum con Implementación de Interface",
                code: snippets::ENUM_WITH_INTERFACE,
            },
        ],
    },
    Section {
        id: "formato",
        title: "Formato de Datos",
        description: "El formateo de datos es esencial para presentar información de manera \
                      legible y profesional. Java ofrece múltiples herramientas para formatear \
                      strings, números y fechas.",
        color: SectionColor::Secondary,
        examples: &[
            Example {
                title: "Formato Avanzado con Locale y Especificadores",
                code: snippets::FORMAT_LOCALE_SPECIFIERS,
            },
            Example {
                title: "DecimalFormat y Parsing de Datos",
                code: snippets::FORMAT_DECIMAL_PARSING,
            },
        ],
    },
    Section {
        id: "random",
        title: "Números Aleatorios",
        description: "La generación de números aleatorios es fundamental para simulaciones, \
                      juegos, testing y aplicaciones de seguridad. Java proporciona varias formas \
                      de generar números aleatorios.",
        color: SectionColor::Accent,
        examples: &[
            Example {
                title: "Simulación con Random y Análisis Estadístico",
                code: snippets::RANDOM_SIMULATION,
            },
            Example {
                title: "SecureRandom para Aplicaciones Seguras",
                code: snippets::RANDOM_SECURE,
            },
        ],
    },
    Section {
        id: "recursividad",
        title: "Recursividad",
        description: "La recursividad es una técnica donde una función se llama a sí misma para \
                      resolver un problema dividiéndolo en subproblemas más pequeños. Es elegante \
                      pero requiere cuidado para evitar desbordamientos de pila.",
        color: SectionColor::Primary,
        examples: &[
            Example {
                title: "Algoritmos de Ordenamiento Recursivos",
                code: snippets::RECURSION_SORTING,
            },
            Example {
                title: "Problemas Clásicos de Recursividad",
                code: snippets::RECURSION_CLASSIC,
            },
        ],
    },
];

pub fn sections() -> &'static [Section] {
    SECTIONS
}

pub fn find_section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.id == id)
}

/// Check the authoring invariants: unique ids and at least one example per
/// section. Stops at the first violation.
pub fn validate(sections: &[Section]) -> Result<(), ContentError> {
    let mut seen = HashSet::with_capacity(sections.len());
    for section in sections {
        if !seen.insert(section.id) {
            return Err(ContentError::DuplicateId(section.id.to_string()));
        }
        if section.examples.is_empty() {
            return Err(ContentError::EmptyExamples(section.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[Example] = &[Example {
        title: "t",
        code: "class A {}",
    }];

    fn section(id: &'static str, examples: &'static [Example]) -> Section {
        Section {
            id,
            title: "title",
            description: "description",
            color: SectionColor::Accent,
            examples,
        }
    }

    #[test]
    fn shipped_content_is_valid() {
        assert_eq!(validate(sections()), Ok(()));
    }

    #[test]
    fn shipped_sections_keep_display_order() {
        let ids: Vec<_> = sections().iter().map(|section| section.id).collect();
        assert_eq!(ids, ["enum", "formato", "random", "recursividad"]);
    }

    #[test]
    fn every_section_ships_two_non_empty_examples() {
        for section in sections() {
            assert_eq!(section.examples.len(), 2, "section {}", section.id);
            for example in section.examples {
                assert!(!example.title.trim().is_empty());
                assert!(!example.code.trim().is_empty());
            }
        }
    }

    #[test]
    fn snippets_keep_java_escapes_literal() {
        let format = find_section("formato").expect("formato section");
        assert!(format.examples[0].code.contains(r#"println("\n=== FORMATO MONEDA ===")"#));
        assert!(format.examples[1].code.contains(r####""###,##0.###""####));
    }

    #[test]
    fn find_section_by_id() {
        assert_eq!(find_section("random").map(|s| s.color), Some(SectionColor::Accent));
        assert!(find_section("Random").is_none());
        assert!(find_section("").is_none());
    }

    #[test]
    fn validate_reports_duplicate_ids() {
        let store = [section("enum", SAMPLE), section("random", SAMPLE), section("enum", SAMPLE)];
        assert_eq!(validate(&store), Err(ContentError::DuplicateId("enum".into())));
    }

    #[test]
    fn validate_reports_empty_examples() {
        let store = [section("enum", SAMPLE), section("vacia", &[])];
        assert_eq!(validate(&store), Err(ContentError::EmptyExamples("vacia".into())));
    }

    #[test]
    fn color_tokens() {
        assert_eq!(SectionColor::Primary.as_str(), "primary");
        assert_eq!(SectionColor::Secondary.as_str(), "secondary");
        assert_eq!(SectionColor::Accent.as_str(), "accent");
    }
}
