pub mod hero {
    pub const TITLE_PREFIX: &str = "Tecnicas de ";
    pub const TITLE_HIGHLIGHT: &str = "Java";
    pub const LOGO_ALT: &str = "Java Logo";
    pub const TAGLINE: &str =
        "Explora los conceptos de Java con un enfoque en las buenas prácticas y patrones de diseño.";
    pub const TAG_ARIA_TEMPLATE: &str = "Ir a la sección de {}";
}

pub mod code_block {
    pub const COPY: &str = "Copiar";
    pub const COPIED: &str = "¡Copiado!";
    pub const COPY_ARIA: &str = "Copiar código al portapapeles";
    pub const COPY_FAILED_LOG: &str = "Error al copiar";
}

pub mod navigation {
    pub const FAILED_LOG: &str = "Error al navegar a la sección";
    pub const UNKNOWN_TAG_LOG: &str = "Etiqueta de navegación desconocida";
}

pub mod footer {
    pub const TITLE_HIGHLIGHT: &str = "Java";
    pub const TITLE_REST: &str = " Es una experiencia linda";
    pub const SUBTITLE: &str = "Explora más sobre programación en Java";
    pub const DOCUMENT_LINK: &str = "Ver Documentación";
    pub const CLOSING_NOTE: &str = "\"Hola profe. -Listo para pasar Desarrollo III 🥳\"";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Página no encontrada";
    pub const BODY: &str = "Lo sentimos, la página que buscas no existe.";
    pub const BACK_HOME: &str = "Volver al inicio";
}

pub mod content {
    pub const INVALID_LOG: &str = "Contenido de secciones inválido";
}
