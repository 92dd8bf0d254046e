use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tech_stack: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A contact submission. Append-only: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// One entry of the hardcoded project list the seed reconciler treats as
/// authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalProject {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static str,
    pub image_url: &'static str,
    pub project_url: &'static str,
    pub github_url: &'static str,
}

impl Project {
    /// Local image paths are served from the static directory, anything with
    /// a scheme is linked as-is.
    pub fn image_src(&self) -> Option<String> {
        let url = self.image_url.as_deref().filter(|u| !u.is_empty() && *u != "#")?;
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/') {
            Some(url.to_string())
        } else {
            Some(format!("/static/{}", url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(image_url: Option<&str>) -> Project {
        Project {
            id: 1,
            title: "Taskizo".into(),
            description: "d".into(),
            tech_stack: None,
            image_url: image_url.map(str::to_string),
            project_url: None,
            github_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn local_image_is_served_from_static() {
        assert_eq!(
            project(Some("images/Taskizo.png")).image_src().as_deref(),
            Some("/static/images/Taskizo.png")
        );
    }

    #[test]
    fn external_image_is_kept() {
        assert_eq!(
            project(Some("https://cdn.example.com/a.png")).image_src().as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn placeholder_image_renders_nothing() {
        assert_eq!(project(Some("#")).image_src(), None);
        assert_eq!(project(Some("")).image_src(), None);
        assert_eq!(project(None).image_src(), None);
    }
}
