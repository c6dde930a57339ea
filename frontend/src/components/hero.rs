use yew::prelude::*;

use crate::components::common::reveal;
use crate::content::Section;
use crate::utils::dom;

const HERO_IMAGE: &str = "https://img.freepik.com/free-photo/young-girl-with-pink-hairs-sending-positive-vibe_114579-22003.jpg?w=1380";
const HERO_PATTERN: &str = "https://images.pexels.com/photos/3888151/pexels-photo-3888151.jpeg?auto=compress&cs=tinysrgb&w=1600";

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        overflow: hidden;
        background: linear-gradient(to right, #4f46e5, #7e22ce);
    }
    .hero-pattern {
        position: absolute;
        inset: 0;
        opacity: 0.1;
        background-size: cover;
        background-position: center;
        mix-blend-mode: overlay;
    }
    .hero-grid {
        position: relative;
        z-index: 10;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
        padding: 5rem 1rem;
    }
    .hero-copy {
        color: #fff;
    }
    .hero-copy h1 {
        font-size: 3.75rem;
        font-weight: 700;
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }
    .hero-copy h1 span {
        color: #fde047;
    }
    .hero-copy p {
        font-size: 1.5rem;
        color: #f3f4f6;
        max-width: 32rem;
        margin-bottom: 2rem;
    }
    .hero-actions {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
    }
    .hero-actions button {
        padding: 0.75rem 2rem;
        border-radius: 9999px;
        font-weight: 500;
        transition: all 0.3s ease;
    }
    .hero-quote {
        background: #fff;
        color: #4338ca;
    }
    .hero-quote:hover {
        background: #f3f4f6;
        transform: translateY(-2px);
    }
    .hero-work {
        border: 2px solid #fff;
        color: #fff;
    }
    .hero-work:hover {
        background: #fff;
        color: #4338ca;
    }
    .hero-image {
        padding: 1rem;
        border-radius: 0.5rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
        transition-delay: 300ms;
    }
    .hero-image img {
        width: 100%;
        border-radius: 0.375rem;
    }
    .hero-wave {
        position: absolute;
        bottom: 0;
        left: 0;
        width: 100%;
        line-height: 0;
    }
    @media (max-width: 1024px) {
        .hero-grid {
            grid-template-columns: 1fr;
        }
        .hero-copy h1 {
            font-size: 2.5rem;
        }
        .hero-copy p {
            font-size: 1.25rem;
        }
    }
"#;

#[function_component(Hero)]
pub fn hero() -> Html {
    // Above the fold, so it animates in on mount rather than on intersection
    let is_visible = use_state(|| false);
    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                is_visible.set(true);
                || ()
            },
            (),
        );
    }
    html! {
        <section id={Section::Home.id()} class="hero">
            <style>{HERO_CSS}</style>
            <div class="hero-pattern" style={format!("background-image: url('{}');", HERO_PATTERN)}></div>
            <div class="container hero-grid">
                <div class={classes!("hero-copy", "slow", reveal(*is_visible, None))}>
                    <h1>{"Make Your Brand "}<span>{"Speak!"}</span></h1>
                    <p>{"Custom printing, branding & advertising solutions that turn your ideas into reality."}</p>
                    <div class="hero-actions">
                        <button class="hero-quote" onclick={Callback::from(|_: MouseEvent| dom::scroll_to_or_log(Section::Contact))}>
                            {"Get a Free Quote "}<i class="fas fa-arrow-right"></i>
                        </button>
                        <button class="hero-work" onclick={Callback::from(|_: MouseEvent| dom::scroll_to_or_log(Section::Portfolio))}>
                            {"See Our Work"}
                        </button>
                    </div>
                </div>
                <div class={classes!("hero-image", "slow", reveal(*is_visible, Some("from-right")))}>
                    <img src={HERO_IMAGE} alt="Custom printed t-shirts and apparel" />
                </div>
            </div>
            <div class="hero-wave">
                <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1440 320">
                    <path fill="#ffffff" d="M0,192L48,186.7C96,181,192,171,288,160C384,149,480,139,576,160C672,181,768,235,864,240C960,245,1056,203,1152,186.7C1248,171,1344,181,1392,186.7L1440,192L1440,320L0,320Z"></path>
                </svg>
            </div>
        </section>
    }
}
