use crate::core::contact::ContactState;
use crate::domain::content::{Profile, PLACEHOLDER_IMAGE};
use crate::domain::model::{Article, Package, Project, Showcase};
use chrono::Datelike;
use std::fmt::Write;

/// The whole page, rendered as plain text in section order.
#[derive(Debug, Clone)]
pub struct PortfolioPage {
    pub profile: Profile,
    pub showcase: Showcase,
    pub year: i32,
}

impl PortfolioPage {
    pub fn new(profile: Profile, showcase: Showcase) -> Self {
        Self {
            profile,
            showcase,
            year: chrono::Local::now().year(),
        }
    }

    pub fn render(&self, contact: &ContactState) -> String {
        let mut out = String::new();
        self.render_header(&mut out);
        self.render_hero(&mut out);
        self.render_about(&mut out);
        self.render_skills(&mut out);
        self.render_portfolio(&mut out);
        self.render_community(&mut out);
        self.render_contact(&mut out, contact);
        self.render_footer(&mut out);
        out
    }

    fn render_header(&self, out: &mut String) {
        let nav: Vec<String> = self
            .profile
            .navigation
            .iter()
            .map(|n| format!("{} (#{})", n.label, n.anchor))
            .collect();
        let _ = writeln!(out, "{}  |  {}", self.profile.brand, nav.join("  "));
        out.push('\n');
    }

    fn render_hero(&self, out: &mut String) {
        let p = &self.profile;
        let _ = writeln!(out, "[{}]", p.availability);
        let _ = writeln!(out, "{}", p.headline);
        let _ = writeln!(out, "{}", p.summary);
        let _ = writeln!(out, "{}", p.highlights.join(" · "));
        out.push('\n');
    }

    fn render_about(&self, out: &mut String) {
        section(out, "Introduction", "About Me");
        let _ = writeln!(out, "{}", self.profile.about);
        for point in &self.profile.about_points {
            let _ = writeln!(out, "  * {}", point);
        }
        out.push('\n');
    }

    fn render_skills(&self, out: &mut String) {
        section(out, "Expertise", "Skills & Tooling");
        let _ = writeln!(out, "{}", self.profile.skills.join(", "));
        out.push('\n');
    }

    fn render_portfolio(&self, out: &mut String) {
        section(out, "Portfolio", "Featured Work");
        for project in &self.showcase.projects {
            render_project(out, project);
        }
        out.push('\n');
    }

    fn render_community(&self, out: &mut String) {
        section(out, "Community", "Packages & Articles");
        let _ = writeln!(out, "Packages");
        for package in &self.showcase.packages {
            render_package(out, package);
        }
        let _ = writeln!(out, "Articles");
        for article in &self.showcase.articles {
            render_article(out, article);
        }
        out.push('\n');
    }

    fn render_contact(&self, out: &mut String, contact: &ContactState) {
        section(out, "Contact", self.profile.contact_title);
        let _ = writeln!(out, "{}", self.profile.contact_intro);
        for link in &self.profile.contact_links {
            let _ = writeln!(out, "  {} <{}>", link.label, link.href);
        }
        if let Some(error) = contact.error() {
            let _ = writeln!(out, "! {}", error);
        }
        if let Some(confirmation) = contact.confirmation() {
            let _ = writeln!(out, "✓ {}", confirmation);
        }
        let _ = writeln!(
            out,
            "[{}]{}",
            contact.submit_label(),
            if contact.submit_enabled() { "" } else { " (disabled)" }
        );
        out.push('\n');
    }

    fn render_footer(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "© {} {}. All rights reserved.",
            self.year, self.profile.footer_owner
        );
        let _ = writeln!(out, "{}", self.profile.footer_tagline);
    }
}

fn section(out: &mut String, caption: &str, title: &str) {
    let _ = writeln!(out, "{}", caption.to_uppercase());
    let _ = writeln!(out, "== {} ==", title);
}

fn link_or_hash(url: &Option<String>) -> &str {
    url.as_deref().unwrap_or("#")
}

fn render_project(out: &mut String, project: &Project) {
    let title = project.title.as_deref().unwrap_or_default();
    match &project.store {
        Some(store) => {
            let _ = writeln!(out, "- {} [{}]", title, store.to_uppercase());
        }
        None => {
            let _ = writeln!(out, "- {}", title);
        }
    }
    if let Some(description) = &project.description {
        let _ = writeln!(out, "    {}", description);
    }
    if !project.tags.is_empty() {
        let _ = writeln!(out, "    tags: {}", project.tags.join(", "));
    }
    let _ = writeln!(out, "    link: {}", link_or_hash(&project.url));
    let _ = writeln!(
        out,
        "    image: {}",
        project.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    );
}

fn render_package(out: &mut String, package: &Package) {
    let _ = writeln!(
        out,
        "- {} <{}>",
        package.name.as_deref().unwrap_or_default(),
        link_or_hash(&package.url)
    );
    if let Some(description) = &package.description {
        let _ = writeln!(out, "    {}", description);
    }
}

fn render_article(out: &mut String, article: &Article) {
    let _ = writeln!(
        out,
        "- {} <{}>",
        article.title.as_deref().unwrap_or_default(),
        link_or_hash(&article.url)
    );
    if let Some(published_at) = &article.published_at {
        let _ = writeln!(out, "    {}", published_at);
    }
}
