use yew::prelude::*;

use crate::components::common::{reveal, section_header, stagger};
use crate::content::{Section, FEATURES};
use crate::utils::dom;
use crate::utils::visibility::{use_in_view, VisibilityOptions};

const FEATURES_CSS: &str = r#"
    .features-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
    }
    .feature-card {
        background: #fff;
        border-radius: 0.75rem;
        padding: 1.5rem;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
    }
    .feature-card .icon {
        display: inline-block;
        padding: 0.75rem;
        margin-bottom: 1rem;
        background: #eef2ff;
        border-radius: 0.5rem;
        color: #4f46e5;
        font-size: 2rem;
    }
    .feature-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .feature-card p {
        color: #4b5563;
    }
    .features-cta {
        margin-top: 4rem;
        padding: 3rem;
        border-radius: 1rem;
        background: linear-gradient(to right, #4f46e5, #7e22ce);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1.5rem;
    }
    .features-cta h3 {
        color: #fff;
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
    }
    .features-cta p {
        color: #e0e7ff;
    }
    .features-cta button {
        background: #fff;
        color: #4338ca;
        padding: 0.75rem 2rem;
        border-radius: 9999px;
        font-weight: 500;
        white-space: nowrap;
        transition: all 0.3s ease;
    }
    .features-cta button:hover {
        background: #f3f4f6;
        transform: translateY(-2px);
    }
    @media (max-width: 1024px) {
        .features-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .features-grid {
            grid-template-columns: 1fr;
        }
        .features-cta {
            flex-direction: column;
            text-align: center;
            padding: 3rem 1.5rem;
        }
    }
"#;

#[function_component(Features)]
pub fn features() -> Html {
    let (node, is_visible) = use_in_view(VisibilityOptions::default());

    html! {
        <section id={Section::Features.id()} ref={node} class="section muted">
            <style>{FEATURES_CSS}</style>
            <div class="container">
                {section_header(
                    "Why Choose Us?",
                    "Here's what sets us apart from the competition and why our clients continue to choose us for their printing and design needs.",
                )}
                <div class="features-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div key={feature.id} class={classes!("feature-card", reveal(is_visible, None))} style={stagger(index, 100)}>
                                <div class="icon"><i class={feature.icon}></i></div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class={classes!("features-cta", reveal(is_visible, Some("slow")))}>
                    <div>
                        <h3>{"Ready to start your project?"}</h3>
                        <p>{"Contact us today for a free consultation and quote!"}</p>
                    </div>
                    <button onclick={Callback::from(|_: MouseEvent| dom::scroll_to_or_log(Section::Contact))}>
                        {"Get Started Now"}
                    </button>
                </div>
            </div>
        </section>
    }
}
