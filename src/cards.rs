//! What each card shows: a summary heading, zero or more detail rows, and a
//! call-to-action. Rendering lives in `app::cards`; this is the data side.

use crate::actions::Placement;
use crate::content::{AchievementItem, CertificateItem, EducationItem, ProjectItem};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub primary: &'static str,
    pub secondary: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub placement: Placement,
}

pub trait CardContent {
    fn summary(&self) -> &'static str;
    /// Text shown under the summary whether or not the card is expanded.
    fn blurb(&self) -> Option<&'static str> {
        None
    }
    fn detail_rows(&self) -> Vec<DetailRow>;
    fn call_to_action(&self) -> CallToAction;
}

impl CardContent for ProjectItem {
    fn summary(&self) -> &'static str {
        self.title
    }

    fn blurb(&self) -> Option<&'static str> {
        Some(self.description)
    }

    fn detail_rows(&self) -> Vec<DetailRow> {
        vec![DetailRow {
            primary: self.details,
            secondary: None,
        }]
    }

    fn call_to_action(&self) -> CallToAction {
        CallToAction {
            label: "View Source",
            href: self.source_url,
            placement: Placement::NewContext,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EducationList(pub &'static [EducationItem]);

#[derive(Debug, Clone, Copy)]
pub struct AchievementList(pub &'static [AchievementItem]);

#[derive(Debug, Clone, Copy)]
pub struct CertificateList(pub &'static [CertificateItem]);

impl CardContent for EducationList {
    fn summary(&self) -> &'static str {
        "View Education Details"
    }

    fn detail_rows(&self) -> Vec<DetailRow> {
        self.0
            .iter()
            .map(|item| DetailRow {
                primary: item.institution,
                secondary: Some(item.degree),
            })
            .collect()
    }

    fn call_to_action(&self) -> CallToAction {
        CallToAction {
            label: "Go to Education Page",
            href: "/education",
            placement: Placement::CurrentContext,
        }
    }
}

impl CardContent for AchievementList {
    fn summary(&self) -> &'static str {
        "View Achievements"
    }

    fn detail_rows(&self) -> Vec<DetailRow> {
        self.0
            .iter()
            .map(|item| DetailRow {
                primary: item.title,
                secondary: Some(item.event),
            })
            .collect()
    }

    fn call_to_action(&self) -> CallToAction {
        CallToAction {
            label: "Go to Achievements Page",
            href: "/achievements",
            placement: Placement::CurrentContext,
        }
    }
}

impl CardContent for CertificateList {
    fn summary(&self) -> &'static str {
        "View Certificates"
    }

    fn detail_rows(&self) -> Vec<DetailRow> {
        self.0
            .iter()
            .map(|item| DetailRow {
                primary: item.title,
                secondary: Some(item.organization),
            })
            .collect()
    }

    fn call_to_action(&self) -> CallToAction {
        CallToAction {
            label: "Go to Certificates Page",
            href: "/certificates",
            placement: Placement::CurrentContext,
        }
    }
}
