use std::fmt::Display;

pub(crate) type ProjectId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Project {
    pub(crate) id: ProjectId,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
}

/// The portfolio's project entries. Fixed at build time.
pub(crate) const PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        name: "🚀 React Native Portfolio",
        description: "A personal portfolio app built with React Native.",
    },
    Project {
        id: 2,
        name: "📱 Mobile App Development",
        description: "A collection of mobile apps using React & MongoDB",
    },
    Project {
        id: 3,
        name: "🌐 Web Development",
        description: "A set of responsive websites built with modern web technologies.",
    },
];

pub(crate) fn find_project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

impl Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.id, self.name)
    }
}

/// Everything the home screen shows about its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Profile {
    pub(crate) name: String,
    pub(crate) bio: String,
    /// Bundled asset name or remote URL of the profile picture.
    pub(crate) picture: String,
    pub(crate) skills: Vec<String>,
    pub(crate) email: String,
    pub(crate) website: String,
}

impl Default for Profile {
    fn default() -> Self {
        Profile {
            name: "Yohann Nicholo Matibag".to_string(),
            bio: "Passionate developer specializing in React Native and other web development softwares."
                .to_string(),
            picture: "455048186_866652358677864_6298729169398841382_n.jpg".to_string(),
            skills: ["React Native", "JavaScript", "MongoDB", "Web Development"]
                .into_iter()
                .map(String::from)
                .collect(),
            email: "hello@example.com".to_string(),
            website: "https://example.com".to_string(),
        }
    }
}

impl Profile {
    pub(crate) fn mail_target(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Two letter monogram used in place of the picture.
    pub(crate) fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
