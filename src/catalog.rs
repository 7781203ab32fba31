//! The subject syllabus offered as selectable contents on the entry form.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllabusModule {
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

/// Read-only mapping of module name to its ordered topics.
#[derive(Debug, Clone, Copy)]
pub struct SyllabusCatalog {
    modules: &'static [SyllabusModule],
}

const BUILTIN_MODULES: &[SyllabusModule] = &[
    SyllabusModule {
        name: "Módulo Diseño de Algoritmos",
        topics: &[
            "Concepto de algoritmo",
            "Especificación de programas",
            "Predicados, precondiciones y postcondiciones",
        ],
    },
    SyllabusModule {
        name: "Módulo Paradigmas de Programación",
        topics: &[
            "Conceptos básicos de programación funcional, conceptos de recursión y su implementación en el paradigma funcional",
            "El tipo de datos lista, funciones sobre listas",
            "Condiciones de terminación de programas funcionales",
            "Principios de la programación imperativa",
            "Conceptos básicos: acciones y comandos, valores y expresiones, tipos, estado",
            "Estructuras de control: secuencia, selección, iteración",
            "Variables, registros",
            "El tipo de dato arreglo",
            "Principios de la programación estructurada: Funciones y procedimientos, pasaje de parámetros",
            "Modularización de programas",
            "Conceptos del paradigma orientado a objetos",
            "Objetos y mensajes",
            "Métodos, clases herencia y polimorfismo",
        ],
    },
];

impl SyllabusCatalog {
    pub const fn new(modules: &'static [SyllabusModule]) -> Self {
        Self { modules }
    }

    pub const fn builtin() -> Self {
        Self::new(BUILTIN_MODULES)
    }

    pub fn modules(&self) -> &'static [SyllabusModule] {
        self.modules
    }

    pub fn topic_count(&self) -> usize {
        self.modules.iter().map(|m| m.topics.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_layout() {
        let catalog = SyllabusCatalog::builtin();
        let modules = catalog.modules();

        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].topics.len(), 3);
        assert_eq!(modules[1].topics.len(), 13);
        assert_eq!(catalog.topic_count(), 16);
        assert_eq!(modules[0].topics[0], "Concepto de algoritmo");
    }
}
