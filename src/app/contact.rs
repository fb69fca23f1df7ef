use leptos::prelude::*;

use crate::actions::{
    download_resume, open_mail, open_social, open_whatsapp, platform_device, platform_navigator,
    Social,
};
use crate::content::{Resume, PROFILE};

const ICON_BUTTON: &str = "inline-flex items-center justify-center h-10 w-10 rounded-md border border-border bg-background hover:bg-secondary transition-colors duration-200";

#[component]
pub fn ProfileLinks() -> impl IntoView {
    view! {
        <div class="flex justify-center gap-4">
            <a href=PROFILE.github_url target="_blank" class=ICON_BUTTON aria-label="GitHub Profile">
                <i class="devicon-github-original text-xl"></i>
            </a>
            <a
                href=PROFILE.linkedin_url
                target="_blank"
                class=ICON_BUTTON
                aria-label="LinkedIn Profile"
            >
                <i class="devicon-linkedin-plain text-xl"></i>
            </a>
            <button
                class=ICON_BUTTON
                on:click=move |_| open_mail(&platform_navigator())
                aria-label="Send email"
            >
                "✉"
            </button>
        </div>
    }
}

#[component]
pub fn MailLink() -> impl IntoView {
    view! {
        <button
            class="p-0 h-auto font-normal underline-offset-4 hover:underline"
            on:click=move |_| open_mail(&platform_navigator())
        >
            {PROFILE.email}
        </button>
    }
}

#[component]
pub fn ResumeButtons() -> impl IntoView {
    view! {
        <div class="mt-8 flex justify-center lg:justify-start gap-4">
            {Resume::ALL
                .into_iter()
                .map(|resume| {
                    let class = match resume {
                        Resume::Ats => {
                            "flex items-center gap-2 px-4 py-2 rounded-md font-medium bg-primary text-primary-foreground hover:bg-primary/90"
                        }
                        Resume::Creative => {
                            "flex items-center gap-2 px-4 py-2 rounded-md font-medium border border-border bg-background hover:bg-secondary"
                        }
                    };
                    view! {
                        <button
                            class=class
                            on:click=move |_| download_resume(&platform_navigator(), resume)
                        >
                            <span aria-hidden="true">"⬇"</span>
                            {resume.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn FloatingButtons() -> impl IntoView {
    view! {
        <div class="fixed bottom-4 right-4 flex flex-col gap-4">
            <button
                class="rounded-full p-4 bg-[#5865F2] text-white hover:opacity-90 transition-opacity duration-200 shadow-lg"
                on:click=move |_| open_social(&platform_navigator(), Social::Discord)
                aria-label=Social::Discord.label()
            >
                <i class="devicon-discordjs-plain text-2xl"></i>
            </button>
            <button
                class="rounded-full p-4 bg-gradient-to-tr from-yellow-500 via-pink-500 to-purple-500 text-white hover:opacity-90 transition-opacity duration-200 shadow-lg"
                on:click=move |_| open_social(&platform_navigator(), Social::Instagram)
                aria-label=Social::Instagram.label()
            >
                <i class="devicon-instagram-plain text-2xl"></i>
            </button>
            <button
                class="rounded-full p-4 bg-green-500 text-white hover:bg-green-600 transition-colors duration-200 shadow-lg"
                on:click=move |_| open_whatsapp(&platform_navigator(), &platform_device())
                aria-label="Contact on WhatsApp"
            >
                <span class="text-2xl">"💬"</span>
            </button>
        </div>
    }
}
