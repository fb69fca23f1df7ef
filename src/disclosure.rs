/// Expand/collapse state owned by a single card instance.
///
/// Starts collapsed on mount, expands when the pointer enters the card and
/// collapses when it leaves. Transitions are idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

const DETAIL_BASE: &str = "overflow-hidden transition-all duration-300 ease-in-out mb-4";
const REVEAL_BASE: &str = "transition-all duration-300 ease-in-out mt-6";

impl Disclosure {
    pub fn enter(self) -> Self {
        Disclosure::Expanded
    }

    pub fn leave(self) -> Self {
        Disclosure::Collapsed
    }

    pub fn is_expanded(self) -> bool {
        matches!(self, Disclosure::Expanded)
    }

    /// Classes for the detail region: fades and grows in over 300ms.
    pub fn detail_class(self) -> String {
        if self.is_expanded() {
            format!("{DETAIL_BASE} opacity-100 max-h-[60rem]")
        } else {
            format!("{DETAIL_BASE} opacity-0 max-h-0")
        }
    }

    /// Classes for content that slides up into view alongside the detail.
    pub fn reveal_class(self) -> String {
        if self.is_expanded() {
            format!("{REVEAL_BASE} opacity-100 translate-y-0")
        } else {
            format!("{REVEAL_BASE} opacity-0 translate-y-5 pointer-events-none")
        }
    }

    pub fn aria_hidden(self) -> &'static str {
        if self.is_expanded() {
            "false"
        } else {
            "true"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let state = Disclosure::default();
        assert!(!state.is_expanded());
        assert_eq!(state.aria_hidden(), "true");
        assert!(state.detail_class().contains("max-h-0"));
    }

    #[test]
    fn test_enter_leave() {
        let state = Disclosure::default().enter();
        assert!(state.is_expanded());
        assert_eq!(state.aria_hidden(), "false");
        assert!(state.detail_class().contains("opacity-100"));

        let state = state.leave();
        assert_eq!(state, Disclosure::Collapsed);
    }

    #[test]
    fn test_repeated_events_are_idempotent() {
        let state = Disclosure::default().enter().enter();
        assert_eq!(state, Disclosure::Expanded);
        let state = state.leave().leave();
        assert_eq!(state, Disclosure::Collapsed);
    }

    #[test]
    fn test_transition_is_300ms() {
        for state in [Disclosure::Collapsed, Disclosure::Expanded] {
            assert!(state.detail_class().contains("duration-300"));
            assert!(state.reveal_class().contains("duration-300"));
        }
    }
}
