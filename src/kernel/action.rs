/// Everything that can change `AppState`.
///
/// Actions are `Copy` so widgets can bind them to hit-test nodes as
/// zero-argument "callbacks".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the card with this id and show it in the overlay.
    Activate { id: &'static str },
    ActivateFocused,
    /// Clear the selection (hides the overlay).
    Dismiss,
    FocusMove { delta: isize, wrap: bool },
    FocusSet { index: Option<usize> },
    PageScroll { delta: isize, max: u16 },
    PageScrollTo { offset: u16, max: u16 },
    /// Scroll the page just enough to show content rows `[top, bottom)`.
    PageReveal { top: u16, bottom: u16, view_height: u16 },
    OverlayScroll { delta: isize, max: u16 },
}
