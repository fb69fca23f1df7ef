use leptos::{either::Either, prelude::*};
use leptos_router::components::*;

use crate::cards::{AchievementList, CardContent, CertificateList, DetailRow, EducationList};
use crate::content::{AchievementItem, CertificateItem, EducationItem, ProjectItem};
use crate::disclosure::Disclosure;

const CARD_CLASS: &str = "relative overflow-hidden rounded-lg border border-border bg-card text-card-foreground shadow-sm transition-all duration-300 ease-in-out";
const PRIMARY_BUTTON: &str = "block w-full text-center px-4 py-2 rounded-md font-medium bg-primary text-primary-foreground hover:bg-primary/90 transition-colors duration-200";
const OUTLINE_BUTTON: &str = "block w-full text-center px-4 py-2 rounded-md font-medium border border-border bg-background text-foreground hover:bg-secondary transition-colors duration-200";

#[component]
pub fn ProjectCard(project: ProjectItem) -> impl IntoView {
    view! { <DisclosureCard content=project /> }
}

#[component]
pub fn EducationCard(items: &'static [EducationItem]) -> impl IntoView {
    view! { <DisclosureCard content=EducationList(items) /> }
}

#[component]
pub fn AchievementCard(items: &'static [AchievementItem]) -> impl IntoView {
    view! { <DisclosureCard content=AchievementList(items) /> }
}

#[component]
pub fn CertificateCard(items: &'static [CertificateItem]) -> impl IntoView {
    view! { <DisclosureCard content=CertificateList(items) /> }
}

/// Summary is always shown; detail rows open while the pointer is over the
/// card. External calls-to-action slide in with the detail, in-site links
/// stay visible.
#[component]
fn DisclosureCard<C>(content: C) -> impl IntoView
where
    C: CardContent + Send + Sync + 'static,
{
    let (state, set_state) = signal(Disclosure::default());

    let rows = content
        .detail_rows()
        .into_iter()
        .map(|DetailRow { primary, secondary }| {
            view! {
                <div class="mb-3">
                    {match secondary {
                        Some(secondary) => {
                            Either::Left(
                                view! {
                                    <p class="font-semibold">{primary}</p>
                                    <p class="text-sm text-muted-foreground">{secondary}</p>
                                },
                            )
                        }
                        None => {
                            Either::Right(
                                view! { <p class="text-sm text-muted-foreground">{primary}</p> },
                            )
                        }
                    }}
                </div>
            }
        })
        .collect_view();

    let cta = content.call_to_action();
    let cta = match cta.placement.target() {
        Some(target) => Either::Left(view! {
            <div class=move || state.get().reveal_class()>
                <a
                    href=cta.href
                    target=target
                    rel="noopener noreferrer"
                    class=OUTLINE_BUTTON
                >
                    {cta.label}
                </a>
            </div>
        }),
        None => Either::Right(view! {
            <A href=cta.href attr:class=PRIMARY_BUTTON>
                {cta.label}
            </A>
        }),
    };

    view! {
        <div
            class=CARD_CLASS
            on:mouseenter=move |_| set_state.update(|s| *s = s.enter())
            on:mouseleave=move |_| set_state.update(|s| *s = s.leave())
        >
            <div class="pt-8 px-6 pb-6">
                <h3 class="text-xl font-semibold mb-3">{content.summary()}</h3>
                {content
                    .blurb()
                    .map(|blurb| view! { <p class="text-muted-foreground mb-4">{blurb}</p> })}
                <div
                    class=move || state.get().detail_class()
                    aria-hidden=move || state.get().aria_hidden()
                >
                    {rows}
                </div>
                {cta}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos_router::location::RequestUrl;

    use super::*;
    use crate::content::PROJECTS;

    fn render<F, V>(f: F) -> String
    where
        F: FnOnce() -> V,
        V: RenderHtml,
    {
        Owner::new().with(|| f().to_html())
    }

    #[test]
    fn test_project_card_renders_collapsed() {
        let project = PROJECTS[0];
        let html = render(|| view! { <ProjectCard project /> });
        assert!(html.contains(project.title));
        assert!(html.contains(project.description));
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(html.contains("max-h-0"));
        assert!(html.contains(project.source_url));
        assert!(html.contains("target=\"_blank\""));
    }

    fn render_routed<F, V>(f: F) -> String
    where
        F: FnOnce() -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Owner::new().with(|| {
            provide_context(RequestUrl::new("/"));
            view! { <Router>{f()}</Router> }.to_html()
        })
    }

    #[test]
    fn test_empty_list_card_keeps_heading_and_link() {
        let html = render_routed(|| view! { <AchievementCard items=&[] /> });
        assert!(html.contains("View Achievements"));
        assert!(html.contains("href=\"/achievements\""));
        assert!(html.contains("Go to Achievements Page"));
        assert!(!html.contains("class=\"mb-3\""));
    }

    #[test]
    fn test_list_cards_render_rows_collapsed() {
        let html = render_routed(|| view! { <EducationCard items=&crate::content::EDUCATION /> });
        assert!(html.contains("View Education Details"));
        assert!(html.contains("href=\"/education\""));
        assert!(html.contains("M.I.E.T. Engineering College"));
        assert!(html.contains("aria-hidden=\"true\""));

        let html =
            render_routed(|| view! { <CertificateCard items=&crate::content::CERTIFICATES /> });
        assert!(html.contains("href=\"/certificates\""));
        assert!(html.contains("Ameya Cloud"));
    }
}
