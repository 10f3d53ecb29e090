//! Canonical learning-path templates and the generic fallback.
//!
//! Every template, static or generated, has exactly `STEP_COUNT` steps with
//! ids 1..=6.

use serde::{Deserialize, Serialize};

pub const STEP_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapTemplate {
    pub title: String,
    pub description: String,
    pub steps: Vec<RoadmapStep>,
}

/// (title, description, duration); the position gives the id.
type StepSpec = (&'static str, &'static str, &'static str);

struct TemplateSpec {
    title: &'static str,
    description: &'static str,
    steps: [StepSpec; STEP_COUNT],
}

impl TemplateSpec {
    fn build(&self) -> RoadmapTemplate {
        RoadmapTemplate {
            title: self.title.to_string(),
            description: self.description.to_string(),
            steps: build_steps(&self.steps),
        }
    }
}

fn build_steps(specs: &[StepSpec; STEP_COUNT]) -> Vec<RoadmapStep> {
    specs
        .iter()
        .zip(1u32..)
        .map(|(&(title, description, duration), id)| RoadmapStep {
            id,
            title: title.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
        })
        .collect()
}

/// The closed set of topics with hand-authored templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    MachineLearning,
    WebDevelopment,
    DataScience,
    DigitalMarketing,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::MachineLearning,
        Topic::WebDevelopment,
        Topic::DataScience,
        Topic::DigitalMarketing,
    ];

    /// Lower-cased lookup key.
    pub fn key(self) -> &'static str {
        match self {
            Topic::MachineLearning => "machine learning",
            Topic::WebDevelopment => "web development",
            Topic::DataScience => "data science",
            Topic::DigitalMarketing => "digital marketing",
        }
    }

    /// Exact match against an already-normalized query.
    pub fn from_key(normalized: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.key() == normalized)
    }

    pub fn template(self) -> RoadmapTemplate {
        let spec = match self {
            Topic::MachineLearning => &MACHINE_LEARNING,
            Topic::WebDevelopment => &WEB_DEVELOPMENT,
            Topic::DataScience => &DATA_SCIENCE,
            Topic::DigitalMarketing => &DIGITAL_MARKETING,
        };
        spec.build()
    }
}

/// Shown before the user searches for anything.
pub const DEFAULT_TOPIC: Topic = Topic::WebDevelopment;

/// Suggestions offered under the search box.
pub const POPULAR_TOPICS: [&str; 12] = [
    "Machine Learning",
    "Web Development",
    "Data Science",
    "Digital Marketing",
    "Python Programming",
    "React Development",
    "Data Analysis",
    "UI/UX Design",
    "Cybersecurity",
    "Cloud Computing",
    "DevOps",
    "Mobile Development",
];

static GENERIC_STEPS: [StepSpec; STEP_COUNT] = [
    ("Foundation & Basics", "Start with fundamental concepts and prerequisites", "4-6 Weeks"),
    ("Core Learning", "Dive deep into main concepts and practical applications", "6-8 Weeks"),
    ("Hands-on Practice", "Build projects and apply knowledge through practical exercises", "4-6 Weeks"),
    ("Advanced Topics", "Explore advanced concepts and specialized areas", "6-8 Weeks"),
    ("Real-world Application", "Work on real projects and case studies", "4-6 Weeks"),
    ("Mastery & Specialization", "Focus on specific areas and continuous learning", "Ongoing"),
];

/// Template for a topic without a hand-authored roadmap.
pub fn fallback_template(query: &str) -> RoadmapTemplate {
    RoadmapTemplate {
        title: format!("{query} Learning Roadmap"),
        description: format!("A comprehensive learning path for {query}"),
        steps: build_steps(&GENERIC_STEPS),
    }
}

/// The fixed frontend-career timeline behind the roadmap page's classic view.
pub fn classic_roadmap() -> RoadmapTemplate {
    CLASSIC.build()
}

static CLASSIC: TemplateSpec = TemplateSpec {
    title: "Your Frontend Developer Roadmap",
    description: "A step-by-step guide to landing your first frontend developer role.",
    steps: [
        ("Foundations of Web Development", "Master HTML, CSS, and JavaScript. Understand the core concepts that power the web.", "4 Weeks"),
        ("Learn a Frontend Framework", "Dive deep into React. Learn about components, state management, and hooks.", "6 Weeks"),
        ("Backend Development", "Explore Node.js and Express. Learn to build APIs and manage databases with MongoDB.", "6 Weeks"),
        ("Data Structures & Algorithms", "Strengthen your problem-solving skills. Focus on common patterns for technical interviews.", "5 Weeks"),
        ("Build & Deploy Projects", "Apply your knowledge by building full-stack applications and deploying them to the cloud.", "4 Weeks"),
        ("Interview Preparation", "Utilize our platform for mock interviews, resume feedback, and final preparations.", "2 Weeks"),
    ],
};

static MACHINE_LEARNING: TemplateSpec = TemplateSpec {
    title: "Machine Learning Roadmap",
    description: "A comprehensive guide to becoming a machine learning engineer",
    steps: [
        ("Mathematics & Statistics", "Master linear algebra, calculus, and statistics fundamentals", "6 Weeks"),
        ("Programming Foundation", "Learn Python, NumPy, Pandas, and data manipulation", "4 Weeks"),
        ("Machine Learning Basics", "Understand supervised/unsupervised learning, algorithms, and evaluation", "8 Weeks"),
        ("Deep Learning", "Neural networks, TensorFlow/PyTorch, and advanced architectures", "10 Weeks"),
        ("MLOps & Deployment", "Model deployment, monitoring, and production systems", "6 Weeks"),
        ("Specialization", "Choose focus area: NLP, Computer Vision, or Reinforcement Learning", "8 Weeks"),
    ],
};

static WEB_DEVELOPMENT: TemplateSpec = TemplateSpec {
    title: "Web Development Roadmap",
    description: "Complete guide to becoming a full-stack web developer",
    steps: [
        ("HTML & CSS Fundamentals", "Master semantic HTML, CSS Grid, Flexbox, and responsive design", "4 Weeks"),
        ("JavaScript & ES6+", "Learn modern JavaScript, DOM manipulation, and async programming", "6 Weeks"),
        ("Frontend Framework", "Choose React, Vue, or Angular and build dynamic applications", "8 Weeks"),
        ("Backend Development", "Node.js, Express, databases (SQL/NoSQL), and API design", "10 Weeks"),
        ("DevOps & Deployment", "Git, Docker, cloud platforms, and CI/CD pipelines", "6 Weeks"),
        ("Advanced Topics", "Performance optimization, security, testing, and architecture", "8 Weeks"),
    ],
};

static DATA_SCIENCE: TemplateSpec = TemplateSpec {
    title: "Data Science Roadmap",
    description: "Path to becoming a data scientist",
    steps: [
        ("Statistics & Probability", "Descriptive statistics, inferential statistics, and probability theory", "6 Weeks"),
        ("Python Programming", "Python basics, data structures, and object-oriented programming", "4 Weeks"),
        ("Data Manipulation", "Pandas, NumPy, data cleaning, and exploratory data analysis", "6 Weeks"),
        ("Machine Learning", "Scikit-learn, model selection, and evaluation metrics", "8 Weeks"),
        ("Data Visualization", "Matplotlib, Seaborn, Plotly, and storytelling with data", "4 Weeks"),
        ("Big Data & Tools", "SQL, cloud platforms, and big data technologies", "8 Weeks"),
    ],
};

static DIGITAL_MARKETING: TemplateSpec = TemplateSpec {
    title: "Digital Marketing Roadmap",
    description: "Complete digital marketing career path",
    steps: [
        ("Marketing Fundamentals", "Marketing principles, consumer behavior, and market research", "4 Weeks"),
        ("Content Marketing", "Content strategy, creation, SEO, and content distribution", "6 Weeks"),
        ("Social Media Marketing", "Platform strategies, community management, and social advertising", "6 Weeks"),
        ("Paid Advertising", "Google Ads, Facebook Ads, and programmatic advertising", "8 Weeks"),
        ("Analytics & Data", "Google Analytics, data interpretation, and ROI measurement", "6 Weeks"),
        ("Marketing Automation", "Email marketing, CRM systems, and marketing technology", "6 Weeks"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(template: &RoadmapTemplate) {
        assert_eq!(template.steps.len(), STEP_COUNT, "{}", template.title);
        for (index, step) in template.steps.iter().enumerate() {
            assert_eq!(step.id as usize, index + 1, "{}", template.title);
        }
    }

    #[test]
    fn test_every_static_template_has_six_ordered_steps() {
        for topic in Topic::ALL {
            assert_well_formed(&topic.template());
        }
    }

    #[test]
    fn test_fallback_has_six_ordered_steps() {
        let template = fallback_template("Rust");
        assert_well_formed(&template);
        assert_eq!(template.title, "Rust Learning Roadmap");
        assert_eq!(template.description, "A comprehensive learning path for Rust");
        assert_eq!(template.steps[5].duration, "Ongoing");
    }

    #[test]
    fn test_classic_roadmap_has_six_ordered_steps() {
        let template = classic_roadmap();
        assert_well_formed(&template);
        assert_eq!(template.title, "Your Frontend Developer Roadmap");
        assert_eq!(template.steps[0].title, "Foundations of Web Development");
        assert_eq!(template.steps[3].duration, "5 Weeks");
        assert_eq!(template.steps[5].title, "Interview Preparation");
        assert_ne!(template, Topic::WebDevelopment.template());
    }

    #[test]
    fn test_topic_keys_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_key(topic.key()), Some(topic));
        }
        assert_eq!(Topic::from_key("Machine Learning"), None);
    }

    #[test]
    fn test_machine_learning_content() {
        let template = Topic::MachineLearning.template();
        assert_eq!(template.title, "Machine Learning Roadmap");
        assert_eq!(template.steps[2].title, "Machine Learning Basics");
        assert_eq!(template.steps[2].duration, "8 Weeks");
    }
}
