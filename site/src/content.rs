//! Built-in page content.
//!
//! All text is compiled into the crate. The legal reference list is built
//! once on first access and never changes afterwards.

use crate::types::LegalReferenceItem;
use once_cell::sync::Lazy;

/// Header navigation entry.
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "#hero",
        label: "Inicio",
        active: true,
    },
    NavLink {
        href: "#about",
        label: "Leyes y Marcos Legales",
        active: false,
    },
    NavLink {
        href: "#services",
        label: "Leyes de Costa Rica",
        active: false,
    },
];

/// One hero carousel slide.
#[derive(Clone, Copy, Debug)]
pub struct HeroSlide {
    pub title: &'static str,
    pub body: &'static str,
    /// Element id the "Leer más" button scrolls to; `None` renders an inert button
    pub scroll_target: Option<&'static str>,
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        title: "Impacto de las redes sociales en las poblaciones vulnerables de Costa Rica",
        body: "Este proyecto busca analizar las principales problemáticas asociadas a las redes sociales en Costa Rica desde un enfoque ético y legal, \
               priorizando el impacto en poblaciones vulnerables. Los resultados podrían orientar políticas públicas, promover campañas educativas y \
               empoderar a los usuarios frente a los riesgos de las redes sociales.",
        scroll_target: Some("about"),
    },
    HeroSlide {
        title: "Protección Legal",
        body: "En Costa Rica, el impacto de las redes sociales en las poblaciones vulnerables es un tema de creciente preocupación, \
               ya que estas plataformas pueden exponer a grupos como menores de edad, personas con discapacidad y comunidades marginadas \
               a riesgos como el ciberacoso y la desinformación.",
        scroll_target: Some("about"),
    },
    HeroSlide {
        title: "Problemática en Costa Rica",
        body: "En Costa Rica, el ciberbullying afecta gravemente a las poblaciones vulnerables, con consecuencias extremas como el suicidio, \
               lo que subraya la necesidad de programas educativos que fomenten una navegación segura. \
               Además, el discurso de odio y la desinformación en redes sociales afectan a grupos como mujeres, minorías étnicas y la comunidad LGTBIQ+, \
               mientras que la falta de regulación en plataformas como Facebook y Twitter expone a las víctimas a riesgos adicionales.",
        scroll_target: None,
    },
];

pub const ABOUT_TITLE: &str = "Acerca de";
pub const ABOUT_SUBTITLE: &str = "Leyes y Marcos legales";

pub const ABOUT_INTRO: &str = "Afortunadamente, existen diversas leyes nacionales para luchar contra esta problemática que \
     buscan salvaguardar la privacidad y seguridad en línea. \
     Además, Costa Rica puede beneficiarse de marcos internacionales.";

pub const ABOUT_BULLETS: &[&str] = &[
    "Ley de Protección de la Persona frente al Tratamiento de sus Datos Personales (Ley 8968)",
    "Ley contra el Cibercrimen (Ley 9048).",
    "Marcos internacionales como la Convención sobre los Derechos del Niño y el Reglamento General de Protección de Datos (GDPR) de la Unión Europea",
];

pub const ABOUT_DETAIL: &str = "A continuación se muestran las principales leyes y marcos legales que protegen a las poblaciones vulnerables en el contexto digital. \
     Estas regulaciones, tanto nacionales como internacionales, son fundamentales para garantizar la seguridad y la privacidad de los usuarios en las redes sociales.";

/// One pane of the tabbed legal reference section.
#[derive(Clone, Copy, Debug)]
pub struct FeatureTab {
    /// Pane id, also the `data-tab` value of its button
    pub key: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub heading: &'static str,
    pub intro: &'static str,
    /// Render the intro paragraph in italics
    pub intro_italic: bool,
    pub items: &'static [&'static str],
    /// File name under the configured image base
    pub image: &'static str,
}

pub const DEFAULT_FEATURE_TAB: &str = "features-tab-1";

pub const FEATURE_TABS: &[FeatureTab] = &[
    FeatureTab {
        key: "features-tab-1",
        icon: "bi bi-journal",
        label: "Leyes de Costa Rica",
        heading: "Leyes de Costa Rica",
        intro: "Leyes que buscan proteger a las personas, especialmente a las poblaciones vulnerables, en el entorno digital, \
                asegurando su privacidad y seguridad en el uso de las redes sociales.",
        intro_italic: true,
        items: &[
            "Ley de Delitos Informáticos (Ley N°9048)",
            "Código Penal de Costa Rica",
            "Ley de Protección de la Persona frente al tratamiento de sus Datos Personales (Ley N°8968)",
        ],
        image: "legal.jpg",
    },
    FeatureTab {
        key: "features-tab-2",
        icon: "bi bi-book",
        label: "Leyes y Marcos Internacionales",
        heading: "Leyes y Marcos Internacionales",
        intro: "A nivel internacional, diversos marcos y leyes ofrecen lineamientos para proteger los derechos digitales \
                y garantizar la seguridad de las poblaciones vulnerables en el entorno digital.",
        intro_italic: false,
        items: &[
            "Convenio de Budapest (2001): Es el primer tratado internacional sobre delitos informáticos, \
             que establece medidas para combatir el cibercrimen, incluyendo el ciberacoso.",
            "Reglamento General de Protección de Datos de la UE (GDPR): \
             Es un marco europeo, que sirve como referencia para la protección de datos personales.",
            "Ley Modelo de la ONU sobre Delitos Informáticos (2002): \
             Ofrece lineamientos para legislar sobre delitos cibernéticos, incluyendo la explotación de vulnerabilidades en redes sociales.",
            "Código de Conducta de la UE contra la Desinformación (2018): \
             Este código involucra a plataformas como Facebook y Twitter para prevenir la propagación de contenido falso.",
            "Declaración Universal de los Derechos Humanos, Artículo 19: \
             Este artículo protege la libertad de expresión, pero también establece que esta debe ejercerse con responsabilidad",
            "Declaración de Praga sobre la Gobernanza de Internet (2019): Fomenta la inclusión digital y el \
             acceso igualitario a tecnologías de información y comunicación.",
            "Agenda 2030 para el Desarrollo Sostenible, Objetivo 9: Este objetivo promueve el acceso equitativo \
             a la tecnología y la innovación, buscando reducir la brecha digital.",
            "Directrices de la OCDE sobre Protección de Menores en Entornos Digitales (2021): \
             Ofrecen recomendaciones para garantizar que los niños estén seguros en internet, incluyendo redes sociales.",
        ],
        image: "legalUE.jpg",
    },
];

pub const CTA_HEADING: &str = "Leyes de Costa Rica";
pub const CTA_BODY: &str = "En Costa Rica, existen leyes como la Ley de Protección de Datos Personales (Ley N°8968) y la Ley contra Delitos Informáticos (Ley N°9048) \
     que protegen a las poblaciones vulnerables en el entorno digital. Estas serán detalladas a continuación, destacando su importancia en la privacidad \
     y seguridad online.";
pub const CTA_BUTTON: &str = "Ver Leyes";

pub const SERVICES_TITLE: &str = "Costa Rica";
pub const SERVICES_SUBTITLE: &str = "Leyes";

pub const PROBLEMATICA_HEADING: &str = "Problemática de las Redes Sociales en Costa Rica";

pub const PROBLEMATICA_PARAGRAPHS: &[&str] = &[
    "En Costa Rica, el ciberbullying representa una grave amenaza, especialmente para las poblaciones vulnerables. \
     Según el Colegio de Criminología, este tipo de acoso puede llevar a consecuencias extremas, como el suicidio de algunas víctimas. \
     Esta problemática subraya la necesidad urgente de implementar programas educativos que enseñen a los usuarios, desde edades tempranas, \
     los riesgos del uso de redes sociales y promuevan prácticas seguras de navegación en línea.",
    "Otro desafío significativo es el discurso de odio y la discriminación en plataformas digitales. \
     Un informe de la ONU reveló la existencia de más de 548,000 conversaciones en redes sociales en Costa Rica que contenían mensajes de odio dirigidos \
     principalmente hacia mujeres, minorías étnicas y comunidades LGTBIQ+. \
     Este tipo de interacciones refuerza la exclusión y afecta gravemente el bienestar de estas poblaciones.",
    "Finalmente, la desinformación y la falta de regulación en redes sociales como Facebook, instagram y X han generado serios problemas, \
     incluida la vulneración de derechos fundamentales. En muchos casos, la difusión de información falsa ha expuesto a las víctimas a riesgos considerables, \
     evidenciando la necesidad de políticas más estrictas que regulen el contenido en estas plataformas.",
];

/// External report linked from the problem statement sidebar.
#[derive(Clone, Copy, Debug)]
pub struct ResourceLink {
    pub title: &'static str,
    pub href: &'static str,
}

pub const RESOURCE_LINKS: &[ResourceLink] = &[
    ResourceLink {
        title: "Informe sobre Discursos de Odio y Discriminación en Redes Sociales Costa Rica 2021",
        href: "https://costarica.un.org/es/235989-primer-informe-sobre-discursos-de-odio-y-discriminaci%C3%B3n-en-redes-sociales-costa-rica-2021",
    },
    ResourceLink {
        title: "Abordaje de la criminalidad en redes sociales",
        href: "https://www.criminologia.or.cr/wp-content/uploads/2018/01/Abordaje-de-la-criminalidad-PARA-PUBLICAR.pdf",
    },
    ResourceLink {
        title: "Victimización delictiva",
        href: "https://www.undp.org/es/costa-rica/comunicados-de-prensa/victimizacion-delictiva-se-incrementa-traves-de-medios-electronicos",
    },
    ResourceLink {
        title: "Ciberbullyng, Grooming Y Sexting",
        href: "https://ministeriopublico.poder-judicial.go.cr/index.php/medios-informativos/noticias-judiciales/2021/ciberbullying-grooming-y-sexting-identifiquelos-y-sepa-como-proteger-a-la-ninez",
    },
];

pub const FOOTER_SITE_NAME: &str = "Redes Sociales en Costa Rica";
pub const FOOTER_CREDIT_URL: &str = "https://bootstrapmade.com/";

/// Legal references shown in the services grid, in display order.
///
/// Items 1/2 and 4/5 carry the same title; `redes-cr check` reports them.
pub static LEGAL_REFERENCES: Lazy<Vec<LegalReferenceItem>> = Lazy::new(|| {
    vec![
        LegalReferenceItem {
            id: 1,
            title: "Código Penal de Costa Rica".into(),
            description: "Sanciona las afirmaciones que afecten la reputación de una persona. Si ocurre en redes sociales, puede agravarse (multas o prisión).".into(),
            icon: "bi bi-chat-text".into(),
            color: "#0dcaf0".into(),
            delay: 100,
        },
        LegalReferenceItem {
            id: 2,
            title: "Código Penal de Costa Rica".into(),
            description: "Sanciona conductas de acoso sexual, incluyendo entornos digitales (25 a 35 días de multa).".into(),
            icon: "bi bi-credit-card-2-front".into(),
            color: "#fd7e14".into(),
            delay: 200,
        },
        LegalReferenceItem {
            id: 3,
            title: "Ley de Protección de Datos (Ley N°8968)".into(),
            description: "Artículo 2: Sanciona las afirmaciones que afecten la reputación de una persona. Si ocurre en redes sociales, puede agravarse. Desde los  desde los ₡2,251,000 hasta los ₡13,506,000. ".into(),
            icon: "bi bi-cash-stack".into(),
            color: "#20c997".into(),
            delay: 300,
        },
        LegalReferenceItem {
            id: 4,
            title: "Ley de Delitos Informáticos (Ley N°9048)".into(),
            description: "Artículo 196 bis: Penaliza el acceso no autorizado a sistemas informáticos (3 a 6 años). ".into(),
            icon: "bi bi-globe".into(),
            color: "#6610f2".into(),
            delay: 500,
        },
        LegalReferenceItem {
            id: 5,
            title: "Ley de Delitos Informáticos (Ley N°9048)".into(),
            description: "Artículo 230 bis: Penaliza la publicación o distribución de imágenes, video o audios de carácter íntimo sin consentimiento (5 a 10 años).".into(),
            icon: "bi bi-clock".into(),
            color: "#f3268c".into(),
            delay: 600,
        },
    ]
});

/// The built-in legal reference list.
pub fn legal_references() -> &'static [LegalReferenceItem] {
    LEGAL_REFERENCES.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_nav_link_is_active() {
        assert_eq!(NAV_LINKS.iter().filter(|l| l.active).count(), 1);
    }

    #[test]
    fn default_tab_exists() {
        assert!(FEATURE_TABS.iter().any(|t| t.key == DEFAULT_FEATURE_TAB));
    }

    #[test]
    fn last_hero_slide_has_no_scroll_target() {
        assert_eq!(HERO_SLIDES.len(), 3);
        assert!(HERO_SLIDES[..2].iter().all(|s| s.scroll_target == Some("about")));
        assert!(HERO_SLIDES[2].scroll_target.is_none());
    }

    #[test]
    fn legal_references_is_shared() {
        assert!(std::ptr::eq(legal_references(), legal_references()));
    }
}
