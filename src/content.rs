//! Static site content: navigation entries, bio stats, project records,
//! and contact channels. Everything here is fixed at build time and
//! flows into the components as plain data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    /// Anchor id of the target section, without the leading '#'.
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub icon: String,
    pub label: String,
    pub target: u32,
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub overview: String,
    pub highlights: Vec<String>,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub link: String,
    pub repo: String,
    pub details: ProjectDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub icon: String,
    pub label: String,
    pub value: String,
}

pub fn nav_items() -> Vec<NavItem> {
    [
        ("Home", "home"),
        ("About", "about"),
        ("Projects", "projects"),
        ("Contact", "contact"),
    ]
    .into_iter()
    .map(|(label, target)| NavItem {
        label: label.to_string(),
        target: target.to_string(),
    })
    .collect()
}

pub fn stats() -> Vec<Stat> {
    [
        ("💻", "Projects Completed", 60, "+"),
        ("🏆", "Years Experience", 2, "+"),
        ("🤝", "Happy Clients", 40, "+"),
    ]
    .into_iter()
    .map(|(icon, label, target, suffix)| Stat {
        icon: icon.to_string(),
        label: label.to_string(),
        target,
        suffix: suffix.to_string(),
    })
    .collect()
}

pub fn contact_channels() -> Vec<ContactChannel> {
    [
        ("📧", "Email", "amina@developer.com"),
        ("📞", "Phone", "+1 (555) 123-4567"),
        ("📍", "Location", "San Francisco, CA"),
    ]
    .into_iter()
    .map(|(icon, label, value)| ContactChannel {
        icon: icon.to_string(),
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "E-Commerce Platform".to_string(),
            category: "Web Development".to_string(),
            description: "A full-featured e-commerce platform with payment integration, admin dashboard, and real-time inventory management.".to_string(),
            image: "/images/project-ecommerce.svg".to_string(),
            tags: vec!["React".to_string(), "Node.js".to_string(), "MongoDB".to_string()],
            link: "#".to_string(),
            repo: "#".to_string(),
            details: ProjectDetails {
                overview: "Built end to end for a retail client: storefront, checkout, and a back-office dashboard for catalog and order management.".to_string(),
                highlights: vec![
                    "Stripe payment integration with webhooks".to_string(),
                    "Real-time inventory sync across warehouses".to_string(),
                    "Role-based admin dashboard".to_string(),
                ],
                stack: vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "MongoDB".to_string(),
                    "Stripe".to_string(),
                ],
            },
        },
        Project {
            title: "Mobile Fitness App".to_string(),
            category: "Mobile Development".to_string(),
            description: "Cross-platform fitness tracking app with workout plans, progress tracking, and social features.".to_string(),
            image: "/images/project-fitness.svg".to_string(),
            tags: vec!["React Native".to_string(), "Firebase".to_string(), "Redux".to_string()],
            link: "#".to_string(),
            repo: "#".to_string(),
            details: ProjectDetails {
                overview: "A workout companion shipped to both app stores, with guided plans and a lightweight social layer for accountability.".to_string(),
                highlights: vec![
                    "Offline-first workout logging".to_string(),
                    "Animated progress charts".to_string(),
                    "Friend feeds and weekly challenges".to_string(),
                ],
                stack: vec![
                    "React Native".to_string(),
                    "Firebase".to_string(),
                    "Redux".to_string(),
                ],
            },
        },
        Project {
            title: "UI/UX Design System".to_string(),
            category: "Design".to_string(),
            description: "Comprehensive design system with reusable components, documentation, and Figma integration.".to_string(),
            image: "/images/project-design-system.svg".to_string(),
            tags: vec!["Figma".to_string(), "Tailwind".to_string(), "Storybook".to_string()],
            link: "#".to_string(),
            repo: "#".to_string(),
            details: ProjectDetails {
                overview: "A component library and token system adopted across three product teams, documented in Storybook and mirrored in Figma.".to_string(),
                highlights: vec![
                    "40+ documented components".to_string(),
                    "Design tokens shared between Figma and code".to_string(),
                    "Accessibility notes per component".to_string(),
                ],
                stack: vec![
                    "Figma".to_string(),
                    "Tailwind".to_string(),
                    "Storybook".to_string(),
                ],
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_match_section_ids() {
        let targets = nav_items()
            .into_iter()
            .map(|n| n.target)
            .collect::<Vec<_>>();
        assert_eq!(targets, vec!["home", "about", "projects", "contact"]);
        assert!(targets.iter().all(|t| !t.starts_with('#')));
    }

    #[test]
    fn test_projects_are_fully_populated() {
        let projects = projects();
        assert_eq!(projects.len(), 3);
        for p in &projects {
            assert!(!p.title.is_empty());
            assert!(!p.tags.is_empty());
            assert!(!p.details.overview.is_empty());
            assert!(!p.details.highlights.is_empty());
        }
    }

    #[test]
    fn test_stats_have_positive_targets() {
        assert!(stats().iter().all(|s| s.target > 0));
    }

    #[test]
    fn test_project_images_are_shipped_assets() {
        // Image paths resolve under the site's asset dir, so the
        // fallback placeholder stays the exceptional case
        let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for p in projects() {
            let relative = p.image.trim_start_matches('/');
            assert!(
                assets.join(relative).is_file(),
                "missing asset for {}: {}",
                p.title,
                p.image
            );
        }
        assert!(assets.join("favicon.svg").is_file());
        assert!(assets.join("images/placeholder.svg").is_file());
    }
}
