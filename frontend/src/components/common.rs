use yew::prelude::*;

pub(crate) fn section_header(title: &'static str, blurb: &'static str) -> Html {
    html! {
        <div class="section-header">
            <h2>{title}</h2>
            <div class="rule"></div>
            <p>{blurb}</p>
        </div>
    }
}

/// Entry-animation classes for an element inside a tracked section.
pub(crate) fn reveal(visible: bool, extra: Option<&'static str>) -> Classes {
    classes!("reveal", extra, visible.then_some("revealed"))
}

/// Inline style delaying the `index`-th card's entry transition.
pub(crate) fn stagger(index: usize, step_ms: usize) -> String {
    format!("transition-delay: {}ms;", index * step_ms)
}
