//! Frontend Models
//!
//! Data structures matching backend entities. Backend field spellings
//! (`_id`, `gitRepoUrl`, legacy `phoneNumber`) are normalized here at the
//! serde boundary; the rest of the app only sees the canonical names.

use serde::{Deserialize, Serialize};

/// Response envelope wrapping every payload the API returns
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Deployment status as the backend spells it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Deployed {
    Yes,
    Upcoming,
    #[default]
    No,
}

impl From<String> for Deployed {
    /// Anything the backend sends besides Yes/Upcoming counts as not
    /// deployed
    fn from(value: String) -> Self {
        match value.as_str() {
            "Yes" => Deployed::Yes,
            "Upcoming" => Deployed::Upcoming,
            _ => Deployed::No,
        }
    }
}

impl Deployed {
    /// Badge text on project cards
    pub fn label(&self) -> &'static str {
        match self {
            Deployed::Yes => "Yes",
            Deployed::Upcoming => "Upcoming",
            Deployed::No => "No",
        }
    }

    /// Longer badge text for the project page
    pub fn status_label(&self) -> &'static str {
        match self {
            Deployed::Yes => "Live Project",
            Deployed::Upcoming => "Coming Soon",
            Deployed::No => "Not Deployed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Deployed::Yes => "badge badge-live",
            Deployed::Upcoming => "badge badge-upcoming",
            Deployed::No => "badge badge-off",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Deployed::Yes)
    }
}

/// Project entity (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stack: String,
    #[serde(default)]
    pub deployed: Deployed,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "gitRepoUrl")]
    pub git_repo_url: Option<String>,
    #[serde(default, rename = "projectUrl")]
    pub project_url: Option<String>,
}

/// Skill entity (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub svg: String,
}

/// Software application entity (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareApp {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub svg: String,
}

/// Site owner profile (matches backend user document)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, rename = "fullname")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Older backend documents use the phoneNumber spelling
    #[serde(default, alias = "phoneNumber")]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default, rename = "githubURL")]
    pub github_url: Option<String>,
    #[serde(default, rename = "linkedinURL")]
    pub linkedin_url: Option<String>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("Ali Tayyab")
    }

    /// tel: link target, whitespace stripped
    pub fn tel_href(&self) -> Option<String> {
        self.phone
            .as_ref()
            .map(|phone| format!("tel:{}", phone.split_whitespace().collect::<String>()))
    }

    /// WhatsApp chat link built from the phone digits
    pub fn whatsapp_url(&self) -> Option<String> {
        self.phone.as_ref().map(|phone| {
            let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
            format!("https://wa.me/{digits}")
        })
    }
}

/// Outgoing contact form payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub sender_name: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// First validation failure, worded as the toast text
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.sender_name.trim().is_empty() {
            return Err("Please enter your name");
        }
        if self.subject.trim().is_empty() {
            return Err("Please enter a subject");
        }
        if self.message.trim().is_empty() {
            return Err("Please enter a message");
        }
        Ok(())
    }
}

/// Acknowledgement for a sent message
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageAck {
    pub message: String,
}

/// Carousel selection: deployed projects, or the first six when nothing
/// is deployed yet
pub fn featured_projects(projects: &[Project]) -> Vec<Project> {
    let deployed: Vec<Project> = projects
        .iter()
        .filter(|project| project.deployed.is_live())
        .cloned()
        .collect();
    if deployed.is_empty() {
        projects.iter().take(6).cloned().collect()
    } else {
        deployed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, deployed: Deployed) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            stack: String::new(),
            deployed,
            image: None,
            git_repo_url: None,
            project_url: None,
        }
    }

    #[test]
    fn project_decodes_backend_spellings() {
        let json = r#"{
            "_id": "66b1",
            "title": "Tracker",
            "description": "Tracks things.",
            "stack": "MERN",
            "deployed": "Yes",
            "image": "https://cdn.example/banner.png",
            "gitRepoUrl": "https://github.com/x/tracker",
            "projectUrl": "https://tracker.example"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "66b1");
        assert_eq!(project.deployed, Deployed::Yes);
        assert_eq!(
            project.git_repo_url.as_deref(),
            Some("https://github.com/x/tracker")
        );
        assert_eq!(
            project.project_url.as_deref(),
            Some("https://tracker.example")
        );
    }

    #[test]
    fn unknown_deployment_status_counts_as_not_deployed() {
        let json = r#"{ "_id": "1", "title": "T", "deployed": "Soonish" }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.deployed, Deployed::No);
        assert!(!project.deployed.is_live());
    }

    #[test]
    fn empty_data_decodes_to_an_empty_list() {
        let envelope: Envelope<Vec<Project>> =
            serde_json::from_str(r#"{ "data": [] }"#).unwrap();
        assert!(envelope.data.is_empty());
    }

    #[test]
    fn profile_accepts_the_legacy_phone_spelling() {
        let json = r#"{ "fullname": "Ali Tayyab", "phoneNumber": "+92 300 1234567" }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.phone.as_deref(), Some("+92 300 1234567"));
        assert_eq!(profile.display_name(), "Ali Tayyab");
    }

    #[test]
    fn contact_links_strip_the_right_characters() {
        let profile = Profile {
            phone: Some("+92 300 1234567".to_string()),
            ..Profile::default()
        };
        assert_eq!(profile.tel_href().as_deref(), Some("tel:+923001234567"));
        assert_eq!(
            profile.whatsapp_url().as_deref(),
            Some("https://wa.me/923001234567")
        );
    }

    #[test]
    fn featured_projects_prefer_deployed_ones() {
        let projects = vec![
            project("a", Deployed::No),
            project("b", Deployed::Yes),
            project("c", Deployed::Upcoming),
            project("d", Deployed::Yes),
        ];
        let featured = featured_projects(&projects);
        assert_eq!(featured.len(), 2);
        assert!(featured.iter().all(|p| p.deployed.is_live()));
    }

    #[test]
    fn featured_projects_fall_back_to_the_first_six() {
        let projects: Vec<Project> = (0..8)
            .map(|n| project(&n.to_string(), Deployed::Upcoming))
            .collect();
        let featured = featured_projects(&projects);
        assert_eq!(featured.len(), 6);
        assert_eq!(featured[0].id, "0");
        assert_eq!(featured[5].id, "5");
    }

    #[test]
    fn contact_message_serializes_with_backend_field_names() {
        let message = ContactMessage {
            sender_name: "Jo".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["senderName"], "Jo");
        assert_eq!(json["subject"], "Hello");
    }

    #[test]
    fn contact_message_validation_reports_the_first_gap() {
        let mut message = ContactMessage::default();
        assert_eq!(message.validate(), Err("Please enter your name"));
        message.sender_name = "Jo".to_string();
        assert_eq!(message.validate(), Err("Please enter a subject"));
        message.subject = "Hi".to_string();
        assert_eq!(message.validate(), Err("Please enter a message"));
        message.message = "Hello".to_string();
        assert_eq!(message.validate(), Ok(()));
    }
}
