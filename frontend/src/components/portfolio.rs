use yew::prelude::*;

use crate::components::common::{reveal, section_header, stagger};
use crate::content::{PortfolioItem, Section, PORTFOLIO};
use crate::models::portfolio::CategoryFilter;
use crate::utils::dom;
use crate::utils::visibility::{use_in_view, VisibilityOptions};

const PORTFOLIO_CSS: &str = r#"
    .portfolio-tabs {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 0.5rem 1rem;
        margin-bottom: 2.5rem;
    }
    .portfolio-tabs button {
        padding: 0.5rem 1.5rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 500;
        background: #f3f4f6;
        color: #374151;
        transition: all 0.3s ease;
    }
    .portfolio-tabs button:hover {
        background: #e5e7eb;
    }
    .portfolio-tabs button.active {
        background: #4f46e5;
        color: #fff;
        box-shadow: 0 4px 6px rgba(79, 70, 229, 0.3);
    }
    .portfolio-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }
    .portfolio-card {
        border-radius: 0.75rem;
        overflow: hidden;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
        cursor: pointer;
    }
    .portfolio-card .image {
        position: relative;
        height: 16rem;
        overflow: hidden;
    }
    .portfolio-card .image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.5s ease;
    }
    .portfolio-card:hover .image img {
        transform: scale(1.1);
    }
    .portfolio-card .overlay {
        position: absolute;
        inset: 0;
        display: flex;
        flex-direction: column;
        justify-content: flex-end;
        padding: 1.5rem;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
        color: #fff;
        opacity: 0;
        transition: opacity 0.3s ease;
    }
    .portfolio-card:hover .overlay {
        opacity: 1;
    }
    .portfolio-card .caption {
        padding: 1rem;
    }
    .portfolio-card .caption h3 {
        font-weight: 700;
    }
    .portfolio-category {
        color: #4f46e5;
        font-size: 0.875rem;
        margin-top: 0.25rem;
    }
    .portfolio-empty {
        text-align: center;
        padding: 3rem 0;
        color: #6b7280;
    }
    .portfolio-modal {
        position: fixed;
        inset: 0;
        z-index: 60;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(0, 0, 0, 0.7);
    }
    .portfolio-modal .panel {
        background: #fff;
        border-radius: 0.5rem;
        max-width: 48rem;
        width: 100%;
        max-height: 90vh;
        overflow: auto;
    }
    .portfolio-modal .hero-shot {
        position: relative;
        height: 50vh;
    }
    .portfolio-modal .hero-shot img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .portfolio-modal .close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: rgba(0, 0, 0, 0.5);
        color: #fff;
        font-size: 1.5rem;
    }
    .portfolio-modal .details {
        padding: 1.5rem;
    }
    .portfolio-modal .details h2 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
    }
    .portfolio-modal .details > p:last-of-type {
        color: #374151;
    }
    .portfolio-modal .actions {
        margin-top: 1.5rem;
        text-align: right;
    }
    @media (max-width: 1024px) {
        .portfolio-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }
    @media (max-width: 768px) {
        .portfolio-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    item: &'static PortfolioItem,
    on_close: Callback<()>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let request_similar = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            dom::scroll_to_or_log(Section::Contact);
        })
    };
    // Clicks inside the panel must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let item = props.item;

    html! {
        <div class="portfolio-modal" onclick={close.clone()}>
            <div class="panel" onclick={keep_open}>
                <div class="hero-shot">
                    <img src={item.image} alt={item.title} />
                    <button class="close" onclick={close} aria-label="Close">{"×"}</button>
                </div>
                <div class="details">
                    <h2>{item.title}</h2>
                    <p class="portfolio-category">{item.category.label()}</p>
                    <p>{item.description}</p>
                    <div class="actions">
                        <button class="btn-primary" onclick={request_similar}>{"Request Similar Project"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let filter = use_state(CategoryFilter::default);
    let selected = use_state(|| None::<&'static PortfolioItem>);
    let (node, is_visible) = use_in_view(VisibilityOptions::default());

    let shown = (*filter).apply(PORTFOLIO);

    let tabs = CategoryFilter::TABS
        .iter()
        .map(|tab| {
            let tab = *tab;
            let onclick = {
                let filter = filter.clone();
                Callback::from(move |_: MouseEvent| filter.set(tab))
            };
            html! {
                <button key={tab.tag()} class={classes!((*filter == tab).then_some("active"))} {onclick}>
                    {tab.label()}
                </button>
            }
        })
        .collect::<Html>();

    let cards = shown
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item: &'static PortfolioItem = *item;
            let onclick = {
                let selected = selected.clone();
                Callback::from(move |_: MouseEvent| selected.set(Some(item)))
            };
            html! {
                <div key={item.id} class={classes!("portfolio-card", reveal(is_visible, None))} style={stagger(index, 100)} {onclick}>
                    <div class="image">
                        <img src={item.image} alt={item.title} />
                        <div class="overlay">
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </div>
                    </div>
                    <div class="caption">
                        <h3>{item.title}</h3>
                        <p class="portfolio-category">{item.category.label()}</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id={Section::Portfolio.id()} ref={node} class="section">
            <style>{PORTFOLIO_CSS}</style>
            <div class="container">
                {section_header(
                    "Our Portfolio",
                    "Explore our recent projects and see how we've helped businesses bring their visions to life.",
                )}
                <div class="portfolio-tabs">{tabs}</div>
                <div class="portfolio-grid">{cards}</div>
                {
                    if shown.is_empty() {
                        html! { <div class="portfolio-empty"><p>{"No projects found in this category."}</p></div> }
                    } else {
                        html! {}
                    }
                }
                {
                    match *selected {
                        Some(item) => html! { <ProjectModal {item} {on_close} /> },
                        None => html! {},
                    }
                }
            </div>
        </section>
    }
}
