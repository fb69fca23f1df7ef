//! One-shot navigation side effects triggered by buttons on the page.
//!
//! Handlers never navigate directly. They build a URI and hand it to a
//! [`Navigator`], and any environment-dependent decision goes through a
//! [`DeviceProbe`]. In the browser both are backed by `web-sys`; everywhere
//! else (server render, tests) they are plain values.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::content::{Resume, PROFILE};

pub const WHATSAPP_GREETING: &str = "Hi, I'd like to connect with you!";

static MOBILE_UA: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new("iPhone|iPad|iPod|Android")
        .case_insensitive(true)
        .build()
        .expect("mobile user agent pattern should compile")
});

/// Where a navigation target should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    CurrentContext,
    NewContext,
    Download { file_name: &'static str },
}

impl Placement {
    /// Value for an anchor's `target` attribute.
    pub fn target(self) -> Option<&'static str> {
        match self {
            Placement::NewContext => Some("_blank"),
            Placement::CurrentContext | Placement::Download { .. } => None,
        }
    }
}

pub trait Navigator {
    fn open(&self, uri: &str, placement: Placement);
}

pub trait DeviceProbe {
    fn is_mobile(&self) -> bool;
}

/// Device identity as reported by the client. An empty or spoofed string is
/// taken at face value and ends up on the desktop branch.
#[derive(Debug, Clone, Copy)]
pub struct UserAgent<'a>(pub &'a str);

impl DeviceProbe for UserAgent<'_> {
    fn is_mobile(&self) -> bool {
        MOBILE_UA.is_match(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    Discord,
    Instagram,
}

impl Social {
    pub fn url(self) -> &'static str {
        match self {
            Social::Discord => PROFILE.discord_url,
            Social::Instagram => PROFILE.instagram_url,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Social::Discord => "Join Discord Server",
            Social::Instagram => "Follow on Instagram",
        }
    }
}

pub fn mailto_uri() -> String {
    format!("mailto:{}", PROFILE.email)
}

pub fn open_mail(nav: &impl Navigator) {
    nav.open(&mailto_uri(), Placement::CurrentContext);
}

pub fn download_resume(nav: &impl Navigator, resume: Resume) {
    nav.open(
        resume.path(),
        Placement::Download {
            file_name: resume.file_name(),
        },
    );
}

pub fn whatsapp_url(device: &impl DeviceProbe) -> String {
    let base = if device.is_mobile() {
        "whatsapp://send"
    } else {
        "https://web.whatsapp.com/send"
    };
    format!(
        "{base}?phone={}&text={}",
        PROFILE.whatsapp_phone,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

pub fn open_whatsapp(nav: &impl Navigator, device: &impl DeviceProbe) {
    nav.open(&whatsapp_url(device), Placement::NewContext);
}

pub fn open_social(nav: &impl Navigator, social: Social) {
    nav.open(social.url(), Placement::NewContext);
}

/// Navigator used outside the browser. Handlers are never invoked during a
/// server render, so this only records the request in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn open(&self, uri: &str, placement: Placement) {
        log::debug!("navigation requested outside the browser: {uri} ({placement:?})");
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlAnchorElement, Window};

    use super::{DeviceProbe, Navigator, Placement, UserAgent};

    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserNavigator;

    impl Navigator for BrowserNavigator {
        fn open(&self, uri: &str, placement: Placement) {
            let Some(window) = web_sys::window() else {
                log::warn!("no window to open {uri}");
                return;
            };
            log::debug!("opening {uri} ({placement:?})");
            match placement {
                Placement::CurrentContext => {
                    if let Err(e) = window.location().set_href(uri) {
                        log::warn!("couldn't navigate to {uri}: {e:?}");
                    }
                }
                Placement::NewContext => {
                    if let Err(e) = window.open_with_url_and_target(uri, "_blank") {
                        log::warn!("couldn't open {uri}: {e:?}");
                    }
                }
                Placement::Download { file_name } => download(&window, uri, file_name),
            }
        }
    }

    // Transient anchor: created, clicked, removed.
    fn download(window: &Window, href: &str, file_name: &str) {
        let Some(document) = window.document() else {
            log::warn!("no document to download {href}");
            return;
        };
        let Some(body) = document.body() else {
            log::warn!("no document body to download {href}");
            return;
        };
        let anchor = match document
            .create_element("a")
            .map(|el| el.dyn_into::<HtmlAnchorElement>())
        {
            Ok(Ok(anchor)) => anchor,
            _ => {
                log::warn!("couldn't create download link for {href}");
                return;
            }
        };
        anchor.set_href(href);
        anchor.set_download(file_name);
        if body.append_child(&anchor).is_err() {
            log::warn!("couldn't attach download link for {href}");
            return;
        }
        anchor.click();
        if let Err(e) = body.remove_child(&anchor) {
            log::warn!("couldn't remove download link for {href}: {e:?}");
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserDevice;

    impl DeviceProbe for BrowserDevice {
        fn is_mobile(&self) -> bool {
            let ua = web_sys::window()
                .and_then(|w| w.navigator().user_agent().ok())
                .unwrap_or_default();
            UserAgent(&ua).is_mobile()
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn platform_navigator() -> impl Navigator {
    browser::BrowserNavigator
}

#[cfg(not(feature = "hydrate"))]
pub fn platform_navigator() -> impl Navigator {
    LogNavigator
}

#[cfg(feature = "hydrate")]
pub fn platform_device() -> impl DeviceProbe {
    browser::BrowserDevice
}

#[cfg(not(feature = "hydrate"))]
pub fn platform_device() -> impl DeviceProbe {
    UserAgent("")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: RefCell<Vec<(String, Placement)>>,
    }

    impl Navigator for RecordingNavigator {
        fn open(&self, uri: &str, placement: Placement) {
            self.opened.borrow_mut().push((uri.to_string(), placement));
        }
    }

    struct Fixed(bool);

    impl DeviceProbe for Fixed {
        fn is_mobile(&self) -> bool {
            self.0
        }
    }

    const ENCODED_GREETING: &str = "Hi%2C%20I%27d%20like%20to%20connect%20with%20you%21";

    #[test]
    fn test_user_agent_detection() {
        assert!(UserAgent("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)").is_mobile());
        assert!(UserAgent("Mozilla/5.0 (Linux; Android 14; Pixel 8)").is_mobile());
        assert!(UserAgent("mozilla/5.0 (ipad; cpu os 16_0)").is_mobile());
        assert!(UserAgent("IPOD touch").is_mobile());
        assert!(!UserAgent("Mozilla/5.0 (Windows NT 10.0)").is_mobile());
        assert!(!UserAgent("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)").is_mobile());
    }

    #[test]
    fn test_empty_user_agent_is_desktop() {
        assert!(!UserAgent("").is_mobile());
        assert!(whatsapp_url(&UserAgent("")).starts_with("https://web.whatsapp.com/send?"));
    }

    #[test]
    fn test_whatsapp_url_mobile() {
        let url = whatsapp_url(&UserAgent("Mozilla/5.0 (iPhone)"));
        assert!(url.starts_with("whatsapp://send?phone=917373675313&text="));
        assert!(url.ends_with(ENCODED_GREETING));
    }

    #[test]
    fn test_whatsapp_url_desktop() {
        let url = whatsapp_url(&UserAgent("Mozilla/5.0 (Windows NT 10.0)"));
        assert!(url.starts_with("https://web.whatsapp.com/send?phone=917373675313&text="));
        assert!(url.ends_with(ENCODED_GREETING));
        assert!(!url.contains('\''));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_open_whatsapp_uses_new_context() {
        let nav = RecordingNavigator::default();
        open_whatsapp(&nav, &Fixed(true));
        open_whatsapp(&nav, &Fixed(false));
        let opened = nav.opened.borrow();
        assert_eq!(opened.len(), 2);
        assert!(opened[0].0.starts_with("whatsapp://"));
        assert!(opened[1].0.starts_with("https://web.whatsapp.com/"));
        assert!(opened.iter().all(|(_, p)| *p == Placement::NewContext));
    }

    #[test]
    fn test_open_mail() {
        let nav = RecordingNavigator::default();
        open_mail(&nav);
        assert_eq!(
            nav.opened.borrow().as_slice(),
            &[(
                "mailto:fahadguy8@gmail.com".to_string(),
                Placement::CurrentContext
            )]
        );
    }

    #[test]
    fn test_download_resume() {
        let nav = RecordingNavigator::default();
        download_resume(&nav, Resume::Ats);
        download_resume(&nav, Resume::Creative);
        let opened = nav.opened.borrow();
        assert_eq!(
            opened[0],
            (
                "/Shaik_Mohamed_Fahad_Resume_ATS.pdf".to_string(),
                Placement::Download {
                    file_name: "Shaik_Mohamed_Fahad_Resume_ATS.pdf"
                }
            )
        );
        assert_eq!(opened[1].0, "/Shaik_Mohamed_Fahad_Resume.pdf");
    }

    #[test]
    fn test_repeated_triggers_repeat_side_effect() {
        let nav = RecordingNavigator::default();
        open_social(&nav, Social::Discord);
        open_social(&nav, Social::Discord);
        open_social(&nav, Social::Instagram);
        let opened = nav.opened.borrow();
        assert_eq!(opened.len(), 3);
        assert_eq!(opened[0], opened[1]);
        assert_eq!(opened[2].0, "https://www.instagram.com/i_am_smf_/");
    }

    #[test]
    fn test_placement_target() {
        assert_eq!(Placement::NewContext.target(), Some("_blank"));
        assert_eq!(Placement::CurrentContext.target(), None);
    }
}
