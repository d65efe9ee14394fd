//! Portfolio entries shown in the work carousel, with the lookups the
//! carousel filter uses.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub img: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Empty while the project page is still being built.
    pub href: &'static str,
    pub external: bool,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub featured: bool,
    pub year: u16,
    pub client: &'static str,
}

impl Project {
    pub fn has_link(&self) -> bool {
        !self.href.is_empty()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        img: "/assets/img/work/site1.jpg",
        name: "Blindagem Trabalhista",
        description: "Sistema de Acompanhamento de Documentos trabalhistas",
        href: "/projetos/blindagem-trabalhista",
        external: false,
        category: "Sistema Web",
        technologies: &["Next.js", "React", "TypeScript", "Node.js", "PostgreSQL"],
        featured: true,
        year: 2025,
        client: "Empresa Privada",
    },
    Project {
        img: "/assets/img/work/site2.jpg",
        name: "Gestão de Documentos",
        description: "Sistema de Gestão de Documentos com controle de versões e permissões",
        href: "/projetos/gestao-documentos",
        external: false,
        category: "Sistema Web",
        technologies: &["React", "Node.js", "MongoDB", "Express", "AWS S3"],
        featured: true,
        year: 2024,
        client: "Escritório de Advocacia",
    },
    Project {
        img: "/assets/img/work/site3.jpg",
        name: "Landing Page de Alta Conversão",
        description: "Landing Page otimizada para conversão com Analytics integrado",
        href: "/projetos/landing-page",
        external: false,
        category: "Marketing",
        technologies: &["Next.js", "Tailwind CSS", "Framer Motion", "Google Analytics"],
        featured: false,
        year: 2024,
        client: "Startup Tech",
    },
    Project {
        img: "/assets/img/work/site4.jpg",
        name: "Hiran Rangers Br",
        description: "Site institucional dos Hiran Rangers do Brasil com galeria e eventos",
        href: "https://hiranrangers.com.br",
        external: true,
        category: "Website",
        technologies: &["React", "CSS3", "Firebase", "Netlify"],
        featured: false,
        year: 2024,
        client: "Hiran Rangers Brasil",
    },
];

pub fn by_category(category: &str) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.category == category).collect()
}

pub fn featured() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).collect()
}

/// Every project, featured ones first.
pub fn featured_first() -> Vec<&'static Project> {
    let mut all = featured();
    all.extend(PROJECTS.iter().filter(|p| !p.featured));
    all
}

/// Distinct categories in first-seen order.
pub fn categories() -> Vec<&'static str> {
    unique(PROJECTS.iter().map(|p| p.category))
}

/// Distinct technologies in first-seen order.
pub fn technologies() -> Vec<&'static str> {
    unique(PROJECTS.iter().flat_map(|p| p.technologies.iter().copied()))
}

/// Case-insensitive match on name, description, category or any technology.
pub fn search(term: &str) -> Vec<&'static Project> {
    let term = term.to_lowercase();
    PROJECTS
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
                || p.category.to_lowercase().contains(&term)
                || p.technologies.iter().any(|t| t.to_lowercase().contains(&term))
        })
        .collect()
}

fn unique(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(projects: Vec<&Project>) -> Vec<&str> {
        projects.into_iter().map(|p| p.name).collect()
    }

    #[test]
    fn categories_keep_first_seen_order() {
        assert_eq!(categories(), vec!["Sistema Web", "Marketing", "Website"]);
    }

    #[test]
    fn category_filter() {
        assert_eq!(
            names(by_category("Sistema Web")),
            vec!["Blindagem Trabalhista", "Gestão de Documentos"]
        );
        assert!(by_category("E-commerce").is_empty());
    }

    #[test]
    fn featured_lead_the_list() {
        assert_eq!(featured().len(), 2);
        let all = featured_first();
        assert_eq!(all.len(), PROJECTS.len());
        assert!(all[..2].iter().all(|p| p.featured));
    }

    #[test]
    fn technologies_are_deduplicated() {
        let techs = technologies();
        assert_eq!(techs.iter().filter(|t| **t == "React").count(), 1);
        assert_eq!(techs[0], "Next.js");
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        assert_eq!(names(search("MONGODB")), vec!["Gestão de Documentos"]);
        assert_eq!(names(search("website")), vec!["Hiran Rangers Br"]);
        assert_eq!(search("").len(), PROJECTS.len());
    }
}
