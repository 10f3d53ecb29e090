//! Client routes and what each one renders for a given session.
//!
//! Gated pages (`/interviews`, `/resume`, `/progress`) show a login prompt
//! when nobody is signed in, and a loading placeholder until the session's
//! startup read has settled.

pub mod handlers;

use serde::Serialize;

use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Features,
    Roadmap,
    Interviews,
    Resume,
    Aptitude,
    Progress,
    Contact,
    Login,
    NotFound,
}

impl Page {
    /// Routes with a dedicated page; anything else is `NotFound`.
    pub const ROUTED: [Page; 9] = [
        Page::Home,
        Page::Features,
        Page::Roadmap,
        Page::Interviews,
        Page::Resume,
        Page::Aptitude,
        Page::Progress,
        Page::Contact,
        Page::Login,
    ];

    pub fn path(self) -> Option<&'static str> {
        match self {
            Page::Home => Some("/"),
            Page::Features => Some("/features"),
            Page::Roadmap => Some("/roadmap"),
            Page::Interviews => Some("/interviews"),
            Page::Resume => Some("/resume"),
            Page::Aptitude => Some("/aptitude"),
            Page::Progress => Some("/progress"),
            Page::Contact => Some("/contact"),
            Page::Login => Some("/login"),
            Page::NotFound => None,
        }
    }

    /// Exact path match, tolerating a trailing slash.
    pub fn from_path(path: &str) -> Page {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ROUTED
            .into_iter()
            .find(|p| p.path() == Some(path))
            .unwrap_or(Page::NotFound)
    }

    pub fn is_gated(self) -> bool {
        matches!(self, Page::Interviews | Page::Resume | Page::Progress)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// Cards under "Everything you need to succeed" on the home page.
static HOME_FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "AI Mock Interviews",
        description: "Practice interviews with an AI that gives real-time feedback.",
    },
    FeatureCard {
        title: "Resume Analyzer",
        description: "Get instant feedback on your resume to pass ATS scans.",
    },
    FeatureCard {
        title: "Personalized Roadmaps",
        description: "Customized learning paths to achieve your career goals.",
    },
    FeatureCard {
        title: "Coding Challenges",
        description: "Sharpen your skills with a curated list of coding problems.",
    },
];

static PLATFORM_FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        title: "AI-Powered Mock Interviews",
        description: "Our advanced AI conducts realistic interviews, providing instant, actionable feedback on your answers, communication skills, and body language. Prepare for any scenario and walk into your real interview with confidence.",
    },
    FeatureCard {
        title: "Intelligent Resume Feedback",
        description: "Upload your resume and get a comprehensive analysis in seconds. We check for keywords, formatting, and common mistakes to ensure your resume gets past automated screening systems and catches the eye of recruiters.",
    },
    FeatureCard {
        title: "Aptitude & Coding Practice",
        description: "Access a vast library of aptitude questions and coding challenges curated from top tech companies. Hone your problem-solving skills, track your performance, and benchmark yourself against peers.",
    },
    FeatureCard {
        title: "Dynamic Progress Tracking",
        description: "Visualize your growth with our interactive dashboard. Track your scores, identify areas for improvement, and see how you stack up. Our data-driven insights help you focus your efforts where they matter most.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    Loading {
        page: Page,
    },
    LoginPrompt {
        page: Page,
        heading: &'static str,
        message: &'static str,
        action: Link,
    },
    Content {
        page: Page,
        heading: String,
        summary: &'static str,
        action: Option<Link>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        features: Vec<FeatureCard>,
    },
}

pub fn render(page: Page, session: &SessionState) -> PageView {
    if page.is_gated() {
        if session.loading {
            return PageView::Loading { page };
        }
        if session.user.is_none() {
            return login_prompt(page);
        }
    }
    content(page, session)
}

fn login_prompt(page: Page) -> PageView {
    let (heading, message, label) = match page {
        Page::Interviews => (
            "Practice Makes Perfect",
            "Log in to start your personalized mock interview session with our AI.",
            "Login to Start",
        ),
        Page::Resume => (
            "Get Expert Resume Feedback",
            "Log in to upload your resume and receive instant, AI-driven suggestions.",
            "Login to Start",
        ),
        _ => (
            "Track Your Growth",
            "Log in to view your personalized progress dashboard and stay motivated.",
            "Login to View Progress",
        ),
    };
    PageView::LoginPrompt {
        page,
        heading,
        message,
        action: Link {
            label,
            path: "/login",
        },
    }
}

fn content(page: Page, session: &SessionState) -> PageView {
    let signed_in = session.is_signed_in();
    let (heading, summary, action) = match page {
        Page::Home => (
            "Your Career Journey Starts Here".to_string(),
            "AI-powered tools and personalized guidance to help you land your dream tech job. Stop guessing, start preparing.",
            Some(if signed_in {
                Link { label: "Go to Dashboard", path: "/progress" }
            } else {
                Link { label: "Get Started for Free", path: "/login" }
            }),
        ),
        Page::Features => (
            "Platform Features".to_string(),
            "Discover the tools that will shape your career.",
            None,
        ),
        Page::Roadmap => (
            "Dynamic Learning Roadmap Generator".to_string(),
            "Search for any topic and get a personalized learning roadmap",
            None,
        ),
        Page::Interviews => (
            "Mock Interview".to_string(),
            "Practice with our AI interviewer.",
            None,
        ),
        Page::Resume => (
            "Resume Feedback".to_string(),
            "Upload your resume to get instant AI analysis.",
            None,
        ),
        Page::Aptitude => (
            "Aptitude & Coding".to_string(),
            "Test your knowledge and sharpen your skills.",
            None,
        ),
        Page::Progress => (
            format!("Welcome back, {}!", first_name(session)),
            "Here's a snapshot of your progress. Keep up the great work!",
            None,
        ),
        Page::Contact => (
            "Get In Touch".to_string(),
            "We'd love to hear from you. Send us a message!",
            None,
        ),
        Page::Login => (
            "Login".to_string(),
            "Sign in to unlock mock interviews, resume feedback, and progress tracking.",
            (!signed_in).then_some(Link { label: "Sign in", path: "/api/v1/session/sign-in" }),
        ),
        Page::NotFound => (
            "Page Not Found".to_string(),
            "Oops! The page you're looking for doesn't exist. It might have been moved or deleted.",
            Some(Link { label: "Go Home", path: "/" }),
        ),
    };
    let features = match page {
        Page::Home => HOME_FEATURES.to_vec(),
        Page::Features => PLATFORM_FEATURES.to_vec(),
        _ => Vec::new(),
    };
    PageView::Content {
        page,
        heading,
        summary,
        action,
        features,
    }
}

fn first_name(session: &SessionState) -> &str {
    session
        .user
        .as_ref()
        .and_then(|u| u.display_name.as_deref())
        .and_then(|name| name.split_whitespace().next())
        .unwrap_or("there")
}
