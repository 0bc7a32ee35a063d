use crate::core::{Backend, ShowcaseResource};
use crate::domain::model::{Article, ContentSource, LoadReport, Package, Project, Showcase};
use crate::utils::error::Result;

/// Best-effort overlay of backend showcase content onto the fallback sequences.
pub struct ShowcaseLoader<B: Backend> {
    backend: B,
}

impl<B: Backend> ShowcaseLoader<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch and parse one category. An empty array is returned as `Ok(vec![])`.
    pub async fn fetch<T: ShowcaseResource>(&self) -> Result<Vec<T>> {
        let body = self.backend.get(T::PATH).await?;
        let items: Vec<T> = serde_json::from_str(&body)?;
        Ok(items)
    }

    pub async fn load(&self, fallback: Showcase) -> Showcase {
        self.load_with_report(fallback).await.0
    }

    /// Requests all three categories at once. Each one independently replaces its
    /// fallback sequence in full, or leaves it untouched.
    pub async fn load_with_report(&self, fallback: Showcase) -> (Showcase, LoadReport) {
        let (projects, packages, articles) = tokio::join!(
            self.fetch::<Project>(),
            self.fetch::<Package>(),
            self.fetch::<Article>()
        );

        let (projects, projects_source) = overlay(projects, fallback.projects);
        let (packages, packages_source) = overlay(packages, fallback.packages);
        let (articles, articles_source) = overlay(articles, fallback.articles);

        let report = LoadReport {
            projects: projects_source,
            packages: packages_source,
            articles: articles_source,
        };
        tracing::info!(
            "Showcase loaded: projects={:?} packages={:?} articles={:?}",
            report.projects,
            report.packages,
            report.articles
        );

        (
            Showcase {
                projects,
                packages,
                articles,
            },
            report,
        )
    }
}

fn overlay<T: ShowcaseResource>(fetched: Result<Vec<T>>, fallback: Vec<T>) -> (Vec<T>, ContentSource) {
    match fetched {
        Ok(items) if !items.is_empty() => {
            tracing::debug!("/{}: using {} items from backend", T::PATH, items.len());
            (items, ContentSource::Server)
        }
        Ok(_) => {
            tracing::debug!("/{}: backend returned no items, keeping fallback", T::PATH);
            (fallback, ContentSource::Fallback)
        }
        Err(e) => {
            tracing::warn!("/{}: keeping fallback ({})", T::PATH, e);
            (fallback, ContentSource::Fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::fallback_showcase;
    use crate::utils::error::PortfolioError;
    use async_trait::async_trait;
    use serde::Serialize;
    use std::collections::HashMap;

    /// Serves canned bodies per path; paths without an entry fail like a dropped connection would.
    struct CannedBackend {
        bodies: HashMap<&'static str, std::result::Result<&'static str, u16>>,
    }

    #[async_trait]
    impl Backend for CannedBackend {
        async fn get(&self, path: &str) -> Result<String> {
            match self.bodies.get(path) {
                Some(Ok(body)) => Ok(body.to_string()),
                Some(Err(status)) => Err(PortfolioError::Status {
                    url: format!("http://backend/{}", path),
                    status: *status,
                }),
                None => Err(PortfolioError::Io(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ))),
            }
        }

        async fn post_json<T>(&self, _path: &str, _body: &T) -> Result<()>
        where
            T: Serialize + Sync,
        {
            unreachable!("the loader never posts")
        }
    }

    fn loader(entries: &[(&'static str, std::result::Result<&'static str, u16>)]) -> ShowcaseLoader<CannedBackend> {
        ShowcaseLoader::new(CannedBackend {
            bodies: entries.iter().cloned().collect(),
        })
    }

    #[tokio::test]
    async fn test_all_categories_replaced_when_backend_has_data() {
        let loader = loader(&[
            ("projects", Ok(r#"[{"title": "B"}, {"title": "A"}]"#)),
            ("packages", Ok(r#"[{"name": "pkg"}]"#)),
            ("articles", Ok(r#"[{"title": "Post", "published_at": "yesterday"}]"#)),
        ]);

        let (showcase, report) = loader.load_with_report(fallback_showcase()).await;

        let titles: Vec<_> = showcase.projects.iter().map(|p| p.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("B"), Some("A")]);
        assert_eq!(showcase.packages.len(), 1);
        assert_eq!(showcase.articles[0].published_at.as_deref(), Some("yesterday"));
        assert_eq!(report.projects, ContentSource::Server);
        assert_eq!(report.packages, ContentSource::Server);
        assert_eq!(report.articles, ContentSource::Server);
    }

    #[tokio::test]
    async fn test_each_category_falls_back_independently() {
        let loader = loader(&[
            ("projects", Ok("[]")),
            ("packages", Err(500)),
            ("articles", Ok(r#"[{"title": "Fresh"}]"#)),
        ]);
        let fallback = fallback_showcase();

        let (showcase, report) = loader.load_with_report(fallback.clone()).await;

        assert_eq!(showcase.projects, fallback.projects);
        assert_eq!(showcase.packages, fallback.packages);
        assert_eq!(
            showcase.articles,
            vec![Article {
                title: Some("Fresh".to_string()),
                ..Article::default()
            }]
        );
        assert_eq!(report.projects, ContentSource::Fallback);
        assert_eq!(report.packages, ContentSource::Fallback);
        assert_eq!(report.articles, ContentSource::Server);
    }

    #[tokio::test]
    async fn test_unparseable_bodies_keep_fallback() {
        let loader = loader(&[
            ("projects", Ok("<html>not json</html>")),
            ("packages", Ok(r#"{"name": "not an array"}"#)),
            ("articles", Ok(r#"[{"title": 7}]"#)),
        ]);
        let fallback = fallback_showcase();

        let showcase = loader.load(fallback.clone()).await;

        assert_eq!(showcase, fallback);
    }

    #[tokio::test]
    async fn test_transport_failures_keep_fallback() {
        let loader = loader(&[]);
        let fallback = fallback_showcase();

        let showcase = loader.load(fallback.clone()).await;

        assert_eq!(showcase, fallback);
    }

    #[tokio::test]
    async fn test_server_sequence_is_never_merged_with_fallback() {
        let loader = loader(&[("projects", Ok(r#"[{"title": "Only one"}]"#))]);

        let showcase = loader.load(fallback_showcase()).await;

        assert_eq!(
            showcase.projects,
            vec![Project {
                title: Some("Only one".to_string()),
                ..Project::default()
            }]
        );
    }

    #[tokio::test]
    async fn test_fetch_reports_the_failure_reason() {
        let loader = loader(&[("packages", Err(503))]);
        let err = loader.fetch::<Package>().await.unwrap_err();
        assert!(matches!(err, PortfolioError::Status { status: 503, .. }));
    }
}
