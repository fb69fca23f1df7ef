use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::content::{
    AchievementItem, CertificateItem, EducationItem, ACHIEVEMENTS, CERTIFICATES, EDUCATION,
};

const ENTRY_CLASS: &str = "rounded-lg border border-border bg-card p-6";

#[component]
fn ListPage(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <Title text=title />
        <div class="w-full max-w-4xl mx-auto px-4 md:px-6 py-16">
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-3xl font-bold">{title}</h1>
                <A href="/" attr:class="text-sm text-muted-foreground hover:text-foreground">
                    "← Back"
                </A>
            </div>
            <div class="flex flex-col gap-6">{children()}</div>
        </div>
    }
}

#[component]
pub fn EducationPage() -> impl IntoView {
    view! {
        <ListPage title="Education">
            <EducationEntries items=&EDUCATION />
        </ListPage>
    }
}

#[component]
fn EducationEntries(items: &'static [EducationItem]) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! {
                <div class=ENTRY_CLASS>
                    <h2 class="text-xl font-semibold">{item.institution}</h2>
                    <p class="text-muted-foreground">{item.degree}</p>
                    <p class="text-sm text-muted-foreground mt-2">{item.duration}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn AchievementsPage() -> impl IntoView {
    view! {
        <ListPage title="Achievements">
            <AchievementEntries items=&ACHIEVEMENTS />
        </ListPage>
    }
}

#[component]
fn AchievementEntries(items: &'static [AchievementItem]) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! {
                <div class=ENTRY_CLASS>
                    <h2 class="text-xl font-semibold">{item.title}</h2>
                    <p class="text-muted-foreground">{item.event}</p>
                    <p class="text-sm text-muted-foreground mt-2">{item.date}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn CertificatesPage() -> impl IntoView {
    view! {
        <ListPage title="Certificates">
            <CertificateEntries items=&CERTIFICATES />
        </ListPage>
    }
}

// Optional fields that are absent are simply not rendered.
#[component]
fn CertificateEntries(items: &'static [CertificateItem]) -> impl IntoView {
    items
        .iter()
        .map(|item| {
            view! {
                <div class=format!("{ENTRY_CLASS} flex flex-col md:flex-row gap-6")>
                    {item
                        .image
                        .map(|src| {
                            view! {
                                <img
                                    src=src
                                    alt=item.title
                                    class="w-full md:w-48 rounded-md object-cover"
                                />
                            }
                        })}
                    <div>
                        <h2 class="text-xl font-semibold">{item.title}</h2>
                        <p class="text-muted-foreground">{item.organization}</p>
                        {item
                            .date
                            .map(|date| {
                                view! { <p class="text-sm text-muted-foreground mt-2">{date}</p> }
                            })}
                        {item.details.map(|details| view! { <p class="mt-2">{details}</p> })}
                        {item
                            .link
                            .map(|link| {
                                view! {
                                    <a
                                        href=link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-block mt-2 text-primary hover:underline"
                                    >
                                        {link}
                                    </a>
                                }
                            })}
                    </div>
                </div>
            }
        })
        .collect_view()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    static SPARSE: [CertificateItem; 1] = [CertificateItem {
        title: "Rust Basics",
        organization: "Somewhere",
        date: None,
        details: None,
        link: None,
        image: None,
    }];

    #[test]
    fn test_certificate_entries_omit_missing_fields() {
        let html = Owner::new().with(|| view! { <CertificateEntries items=&SPARSE /> }.to_html());
        assert!(html.contains("Rust Basics"));
        assert!(html.contains("Somewhere"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<a"));
    }

    #[test]
    fn test_certificate_entries_render_all_fields() {
        let html =
            Owner::new().with(|| view! { <CertificateEntries items=&CERTIFICATES /> }.to_html());
        for cert in CERTIFICATES.iter() {
            assert!(html.contains(cert.title));
            assert!(html.contains(cert.link.unwrap_or_default()));
        }
        assert_eq!(html.matches("<img").count(), CERTIFICATES.len());
    }

    #[test]
    fn test_empty_entries() {
        let html = Owner::new().with(|| view! { <AchievementEntries items=&[] /> }.to_html());
        assert!(!html.contains("<h2"));
    }
}
