use crate::element::CandidateElement;

/// Returns `true` if the element is rendered and not hidden.
///
/// Requires display other than `none`, visibility other than `hidden`, no
/// `aria-hidden` marker and a rendered height strictly above zero. Missing
/// style information counts as not visible; so does a NaN height.
pub fn is_visible<E: CandidateElement + ?Sized>(element: &E) -> bool {
    let Some(style) = element.style() else {
        return false;
    };
    !style.display.trim().eq_ignore_ascii_case("none")
        && !style.visibility.trim().eq_ignore_ascii_case("hidden")
        && !style.aria_hidden
        && style.height > 0.0
}
