use yew::prelude::*;

use crate::components::common::{reveal, section_header};
use crate::config;
use crate::content::{Section, TESTIMONIALS};
use crate::models::carousel::{Carousel, CarouselAction};
use crate::utils::timer::{Autoplay, BrowserScheduler};
use crate::utils::visibility::{use_in_view, VisibilityOptions};

const TESTIMONIALS_CSS: &str = r#"
    .testimonial-slider {
        max-width: 56rem;
        margin: 0 auto;
    }
    .testimonial-card {
        background: #fff;
        border-radius: 1rem;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
        padding: 3rem;
        display: flex;
        gap: 2rem;
    }
    .testimonial-client {
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        min-width: 10rem;
    }
    .testimonial-client img {
        width: 6rem;
        height: 6rem;
        border-radius: 9999px;
        object-fit: cover;
        margin-bottom: 1rem;
    }
    .testimonial-client h3 {
        font-size: 1.125rem;
        font-weight: 700;
    }
    .testimonial-client .role {
        color: #4b5563;
        font-size: 0.875rem;
    }
    .testimonial-client .company {
        color: #4f46e5;
        font-size: 0.875rem;
        font-weight: 500;
    }
    .testimonial-stars {
        display: flex;
        gap: 0.125rem;
        margin-top: 0.5rem;
        color: #d1d5db;
    }
    .testimonial-stars .filled {
        color: #facc15;
    }
    .testimonial-quote {
        flex: 1;
    }
    .testimonial-quote .mark {
        color: #4f46e5;
        font-size: 3.75rem;
        font-family: Georgia, serif;
        line-height: 1;
    }
    .testimonial-quote .mark.closing {
        text-align: right;
    }
    .testimonial-quote p {
        color: #374151;
        font-style: italic;
        font-size: 1.125rem;
        margin: 1rem 0;
    }
    .testimonial-controls {
        margin-top: 2rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .testimonial-controls .arrow {
        background: #fff;
        color: #4f46e5;
        width: 3rem;
        height: 3rem;
        border-radius: 9999px;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
        transition: all 0.3s ease;
    }
    .testimonial-controls .arrow:hover {
        background: #4f46e5;
        color: #fff;
    }
    .testimonial-dots {
        display: flex;
        gap: 0.5rem;
    }
    .testimonial-dots button {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 9999px;
        background: #d1d5db;
        transition: all 0.3s ease;
    }
    .testimonial-dots button.active {
        width: 1.5rem;
        background: #4f46e5;
    }
    @media (max-width: 768px) {
        .testimonial-card {
            flex-direction: column;
            padding: 2rem;
        }
        .testimonial-client {
            align-items: center;
            text-align: center;
        }
    }
"#;

fn stars(rating: u8) -> Html {
    (0..5u8)
        .map(|i| {
            html! {
                <i key={i} class={classes!("fas", "fa-star", (i < rating).then_some("filled"))}></i>
            }
        })
        .collect::<Html>()
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));
    let (node, is_visible) = use_in_view(VisibilityOptions::default());
    let autoplay = use_mut_ref(|| Autoplay::new(BrowserScheduler, config::autoplay_interval_ms()));

    // Advance while on screen; leaving the viewport or unmounting stops the timer
    {
        let carousel = carousel.clone();
        let autoplay = autoplay.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                if *visible {
                    autoplay
                        .borrow_mut()
                        .resume(move || carousel.dispatch(CarouselAction::Next));
                }
                move || {
                    let mut autoplay = autoplay.borrow_mut();
                    if autoplay.is_running() {
                        log::debug!("Pausing testimonial autoplay");
                        autoplay.pause();
                    }
                }
            },
            is_visible,
        );
    }

    let go_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let go_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let current = carousel.index();
    let testimonial = &TESTIMONIALS[current];

    let dots = TESTIMONIALS
        .iter()
        .enumerate()
        .map(|(index, t)| {
            let onclick = {
                let carousel = carousel.clone();
                Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(index)))
            };
            html! {
                <button
                    key={t.id}
                    class={classes!((index == current).then_some("active"))}
                    aria-label={format!("Go to testimonial {}", index + 1)}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section id={Section::Testimonials.id()} ref={node} class="section muted">
            <style>{TESTIMONIALS_CSS}</style>
            <div class="container">
                {section_header(
                    "What Our Clients Say",
                    "Don't just take our word for it. Hear from our satisfied clients about their experiences working with us.",
                )}
                <div class={classes!("testimonial-slider", reveal(is_visible, Some("slow")))}>
                    <div class="testimonial-card">
                        <div class="testimonial-client">
                            <img src={testimonial.image} alt={testimonial.name} />
                            <h3>{testimonial.name}</h3>
                            <p class="role">{testimonial.role}</p>
                            <p class="company">{testimonial.company}</p>
                            <div class="testimonial-stars">{stars(testimonial.rating)}</div>
                        </div>
                        <div class="testimonial-quote">
                            <div class="mark">{"\u{201C}"}</div>
                            <p>{testimonial.content}</p>
                            <div class="mark closing">{"\u{201D}"}</div>
                        </div>
                    </div>
                    <div class="testimonial-controls">
                        <button class="arrow" onclick={go_prev} aria-label="Previous testimonial">
                            <i class="fas fa-chevron-left"></i>
                        </button>
                        <div class="testimonial-dots">{dots}</div>
                        <button class="arrow" onclick={go_next} aria-label="Next testimonial">
                            <i class="fas fa-chevron-right"></i>
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
