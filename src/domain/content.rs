//! Static page content embedded in the binary.
//!
//! The showcase functions here are the fallback sequences displayed whenever the
//! backend has nothing usable for a category.

use crate::domain::model::{Article, Package, Project, Showcase};

/// Shown for projects that carry no image of their own.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1518779578993-ec3579fee39f?q=80&w=1200&auto=format&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub anchor: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Everything on the page that never comes from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub brand: &'static str,
    pub availability: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub highlights: Vec<&'static str>,
    pub about: &'static str,
    pub about_points: Vec<&'static str>,
    pub skills: Vec<&'static str>,
    pub navigation: Vec<NavItem>,
    pub contact_title: &'static str,
    pub contact_intro: &'static str,
    pub contact_links: Vec<ContactLink>,
    pub footer_owner: &'static str,
    pub footer_tagline: &'static str,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            brand: "Flutter Dev",
            availability: "Available for freelance & full‑time",
            headline: "Flutter Mobile & Web Developer",
            summary: "3+ years crafting high‑quality apps. 20+ published on the App Store and Play Store. Package author and technical writer.",
            highlights: vec!["20+ Apps Published", "Flutter Package Author"],
            about: "I’m a Flutter developer specializing in building fast, elegant mobile and web apps. Over the past 3+ years, I’ve shipped 20+ apps to the App Store and Play Store, authored an open‑source Flutter package, and written technical articles on Medium.",
            about_points: vec![
                "End‑to‑end product delivery: design, development, deployment",
                "Clean architecture, strong state management, and testing",
                "Performance‑focused with fluid animations and 60fps targets",
                "Pragmatic problem‑solver and clear communicator",
            ],
            skills: vec![
                "Flutter",
                "Dart",
                "Firebase",
                "REST APIs",
                "Web & Mobile",
                "Animations",
                "SEO",
                "UI/UX",
            ],
            navigation: vec![
                NavItem { anchor: "about", label: "About" },
                NavItem { anchor: "skills", label: "Skills" },
                NavItem { anchor: "portfolio", label: "Portfolio" },
                NavItem { anchor: "packages", label: "Packages & Articles" },
                NavItem { anchor: "contact", label: "Contact" },
            ],
            contact_title: "Let’s build something great",
            contact_intro: "Have a project in mind or want to collaborate? Drop a message — I typically reply within 24 hours.",
            contact_links: vec![
                ContactLink { label: "hello@example.com", href: "mailto:hello@example.com" },
                ContactLink { label: "+1 234 567 890", href: "tel:+1234567890" },
                ContactLink { label: "GitHub", href: "https://github.com" },
                ContactLink { label: "LinkedIn", href: "https://linkedin.com" },
            ],
            footer_owner: "Flutter Developer",
            footer_tagline: "Designed with care • Fast, responsive, SEO‑friendly",
        }
    }
}

fn project(title: &str, description: &str, store: &str, url: &str, image: &str, tags: &[&str]) -> Project {
    Project {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        store: Some(store.to_string()),
        url: Some(url.to_string()),
        image: Some(image.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn fallback_projects() -> Vec<Project> {
    vec![
        project(
            "FinTrack – Personal Finance Manager",
            "Cross‑platform budget and expense tracker with real‑time sync.",
            "playstore",
            "https://play.google.com",
            "https://images.unsplash.com/photo-1553729784-e91953dec042?q=80&w=1200&auto=format&fit=crop",
            &["Flutter", "Firebase"],
        ),
        project(
            "FitPulse – Fitness Companion",
            "Workouts, analytics and Apple/Google Health integration.",
            "appstore",
            "https://apple.com/app-store/",
            "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?q=80&w=1200&auto=format&fit=crop",
            &["Flutter", "HealthKit"],
        ),
        project(
            "ShopSwift – E‑commerce",
            "High‑performance storefront with payments and push notifications.",
            "playstore",
            "https://play.google.com",
            "https://images.unsplash.com/photo-1542831371-29b0f74f9713?q=80&w=1200&auto=format&fit=crop",
            &["Flutter", "Stripe"],
        ),
    ]
}

pub fn fallback_packages() -> Vec<Package> {
    vec![Package {
        name: Some("awesome_flutter_widgets".to_string()),
        description: Some("A set of polished, customizable Flutter UI widgets.".to_string()),
        url: Some("https://pub.dev".to_string()),
    }]
}

pub fn fallback_articles() -> Vec<Article> {
    vec![
        Article {
            title: Some("Optimizing Flutter Apps for 60fps Animations".to_string()),
            url: Some("https://medium.com/".to_string()),
            published_at: Some("2024-01-10".to_string()),
        },
        Article {
            title: Some("Effective State Management in Flutter: A Practical Guide".to_string()),
            url: Some("https://medium.com/".to_string()),
            published_at: Some("2023-11-02".to_string()),
        },
    ]
}

pub fn fallback_showcase() -> Showcase {
    Showcase {
        projects: fallback_projects(),
        packages: fallback_packages(),
        articles: fallback_articles(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_showcase_is_never_empty() {
        let showcase = fallback_showcase();
        assert_eq!(showcase.projects.len(), 3);
        assert_eq!(showcase.packages.len(), 1);
        assert_eq!(showcase.articles.len(), 2);
        assert_eq!(
            showcase.projects[1].title.as_deref(),
            Some("FitPulse – Fitness Companion")
        );
    }

    #[test]
    fn test_navigation_matches_section_anchors() {
        let anchors: Vec<&str> = Profile::default().navigation.iter().map(|n| n.anchor).collect();
        assert_eq!(anchors, vec!["about", "skills", "portfolio", "packages", "contact"]);
    }
}
