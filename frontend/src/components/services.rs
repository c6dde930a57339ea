use yew::prelude::*;

use crate::components::common::{reveal, section_header, stagger};
use crate::content::{Section, SERVICES};
use crate::utils::dom;
use crate::utils::visibility::{use_in_view, VisibilityOptions};

const SERVICES_CSS: &str = r#"
    .services-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .service-card {
        background: #fff;
        border-radius: 0.75rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        overflow: hidden;
        display: flex;
        flex-direction: column;
    }
    .service-card .image {
        height: 12rem;
        overflow: hidden;
    }
    .service-card .image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.5s ease;
    }
    .service-card .image img:hover {
        transform: scale(1.1);
    }
    .service-card .body {
        padding: 1.5rem;
        flex: 1;
    }
    .service-card .body > i {
        color: #4f46e5;
        font-size: 2.5rem;
        margin-bottom: 1rem;
    }
    .service-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }
    .service-card p {
        color: #4b5563;
        margin-bottom: 1rem;
    }
    .service-card h4 {
        font-weight: 500;
        color: #1f2937;
        margin-bottom: 0.5rem;
    }
    .service-card ul {
        list-style: none;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.5rem;
    }
    .service-card li {
        display: flex;
        align-items: center;
        color: #4b5563;
    }
    .service-card li::before {
        content: "";
        width: 0.5rem;
        height: 0.5rem;
        border-radius: 9999px;
        background: #4f46e5;
        margin-right: 0.5rem;
    }
    .service-card .footer {
        padding: 1rem 1.5rem;
        background: #f9fafb;
    }
    .service-card .footer button {
        color: #4f46e5;
        font-weight: 500;
    }
    .service-card .footer button:hover {
        color: #3730a3;
    }
    @media (max-width: 768px) {
        .services-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[function_component(Services)]
pub fn services() -> Html {
    let (node, is_visible) = use_in_view(VisibilityOptions::default());
    let learn_more = Callback::from(|_: MouseEvent| dom::scroll_to_or_log(Section::Contact));

    html! {
        <section id={Section::Services.id()} ref={node} class="section">
            <style>{SERVICES_CSS}</style>
            <div class="container">
                {section_header(
                    "Our Services",
                    "From custom clothing to logo design and visual advertising, we offer comprehensive solutions to bring your brand to life.",
                )}
                <div class="services-grid">
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <div key={service.id} class={classes!("service-card", reveal(is_visible, None))} style={stagger(index, 150)}>
                                <div class="image">
                                    <img src={service.image} alt={service.title} />
                                </div>
                                <div class="body">
                                    <i class={service.icon}></i>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <h4>{"What we offer:"}</h4>
                                    <ul>
                                        { for service.examples.iter().map(|example| html! { <li>{*example}</li> }) }
                                    </ul>
                                </div>
                                <div class="footer">
                                    <button onclick={learn_more.clone()}>{"Learn more →"}</button>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
