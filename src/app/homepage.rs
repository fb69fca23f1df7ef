use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::use_element_visibility;

use super::cards::{AchievementCard, CertificateCard, EducationCard, ProjectCard};
use super::contact::{FloatingButtons, MailLink, ProfileLinks, ResumeButtons};
use crate::content::{ACHIEVEMENTS, CERTIFICATES, EDUCATION, PROFILE, PROJECTS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground">
            <Hero />
            <About />
            <Projects />
            <Certificates />
            <EducationAndAchievements />
            <Footer />
            <FloatingButtons />
        </div>
    }
}

/// Fades its children in once they scroll into the viewport.
#[component]
fn Reveal(children: Children) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);

    view! {
        <div
            node_ref=el
            class=move || {
                if visible.get() {
                    "w-full max-w-7xl mx-auto px-4 md:px-6 transition-opacity duration-700 opacity-100"
                } else {
                    "w-full max-w-7xl mx-auto px-4 md:px-6 transition-opacity duration-700 opacity-0"
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden px-4">
            <div class="absolute inset-0 z-0 bg-gradient-to-b from-background to-background/50" />
            <div class="w-full max-w-7xl mx-auto relative z-10 text-center px-4 md:px-6 animate-fade-up">
                <h1 class="text-3xl md:text-4xl lg:text-6xl font-bold mb-4">
                    {PROFILE.display_name}
                </h1>
                <h2 class="text-lg md:text-xl lg:text-2xl text-muted-foreground mb-8">
                    {PROFILE.headline}
                </h2>
                <ProfileLinks />
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="py-16 md:py-20 bg-muted/30">
            <Reveal>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-start lg:items-center max-w-6xl mx-auto">
                    <div class="text-center lg:text-left">
                        <h2 class="text-3xl font-bold mb-8">"About Me"</h2>
                        <p class="text-lg text-muted-foreground mb-12 leading-relaxed max-w-2xl mx-auto lg:mx-0">
                            {PROFILE.about}
                        </p>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                            <div class="rounded-lg border border-border bg-card pt-8 px-6 pb-6">
                                <h3 class="text-xl font-semibold mb-4">"Contact Information"</h3>
                                <div class="space-y-4">
                                    <div class="flex items-center gap-2">
                                        <span class="text-muted-foreground" aria-hidden="true">
                                            "📞"
                                        </span>
                                        <span>{PROFILE.phone}</span>
                                    </div>
                                    <div class="flex items-center gap-2">
                                        <span class="text-muted-foreground" aria-hidden="true">
                                            "✉"
                                        </span>
                                        <MailLink />
                                    </div>
                                    <div class="flex items-center gap-2">
                                        <span class="text-muted-foreground" aria-hidden="true">
                                            "📍"
                                        </span>
                                        <span>{PROFILE.location}</span>
                                    </div>
                                </div>
                            </div>
                            <div class="rounded-lg border border-border bg-card pt-8 px-6 pb-6">
                                <h3 class="text-xl font-semibold mb-4">"Skills"</h3>
                                <div class="flex flex-wrap gap-2">
                                    {PROFILE
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <span class="rounded-full px-2.5 py-0.5 text-xs font-semibold bg-primary text-primary-foreground">
                                                    {*skill}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                        <ResumeButtons />
                    </div>
                    <div class="relative aspect-square w-full max-w-md mx-auto lg:mx-0">
                        <div class="absolute inset-0 rounded-xl overflow-hidden">
                            <img
                                src=PROFILE.photo_url
                                alt=PROFILE.photo_alt
                                class="h-full w-full object-cover"
                            />
                        </div>
                        <div class="absolute inset-0 bg-gradient-to-t from-background/80 to-background/0 rounded-xl" />
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section class="py-16 md:py-20">
            <Reveal>
                <h2 class="text-3xl font-bold mb-8 text-center">"Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 max-w-6xl mx-auto">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Certificates() -> impl IntoView {
    view! {
        <section class="py-16 md:py-20">
            <Reveal>
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold mb-8 text-center lg:text-left">"Certificates"</h2>
                    <CertificateCard items=&CERTIFICATES />
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn EducationAndAchievements() -> impl IntoView {
    view! {
        <section class="py-16 md:py-20 bg-muted/30">
            <Reveal>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <div>
                        <h2 class="text-3xl font-bold mb-8 text-center md:text-left">"Education"</h2>
                        <EducationCard items=&EDUCATION />
                    </div>
                    <div>
                        <h2 class="text-3xl font-bold mb-8 text-center md:text-left">
                            "Achievements"
                        </h2>
                        <AchievementCard items=&ACHIEVEMENTS />
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 bg-muted/50">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <p class="text-sm text-muted-foreground mb-4 md:mb-0">{PROFILE.copyright()}</p>
                    <p class="text-sm text-muted-foreground">
                        "Developed and maintained by "
                        <span class="font-semibold">{PROFILE.author_handle}</span>
                        " using "
                        <a
                            href=PROFILE.builder_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-primary hover:underline"
                        >
                            {PROFILE.builder_name}
                        </a>
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos_meta::provide_meta_context;
    use leptos_router::{components::Router, location::RequestUrl};

    use super::*;
    use crate::actions::Social;

    fn render_home() -> String {
        Owner::new().with(|| {
            provide_context(RequestUrl::new("/"));
            provide_meta_context();
            view! {
                <Router>
                    <HomePage />
                </Router>
            }
            .to_html()
        })
    }

    #[test]
    fn test_sections_in_order() {
        let html = render_home();
        let positions = [
            PROFILE.display_name,
            "About Me",
            "Projects</h2>",
            "Certificates</h2>",
            "Education</h2>",
            "Achievements</h2>",
            "All rights reserved",
            "Contact on WhatsApp",
        ]
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("missing {needle:?} in rendered page"))
        });
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "sections out of order: {positions:?}"
        );
    }

    #[test]
    fn test_floating_buttons_present() {
        let html = render_home();
        for label in [
            Social::Discord.label(),
            Social::Instagram.label(),
            "Contact on WhatsApp",
        ] {
            assert!(html.contains(&format!("aria-label=\"{label}\"")), "{label}");
        }
    }

    #[test]
    fn test_all_projects_rendered() {
        let html = render_home();
        for project in PROJECTS.iter() {
            assert!(html.contains(project.title));
            assert!(html.contains(project.source_url));
        }
        assert!(html.contains("href=\"/education\""));
        assert!(html.contains("href=\"/achievements\""));
    }
}
