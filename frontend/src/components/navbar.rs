use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::content::{Section, BRAND_NAME, NAV_LINKS};
use crate::utils::dom;

pub fn past_threshold(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLL_THRESHOLD
}

const NAVBAR_CSS: &str = r#"
    .navbar {
        position: fixed;
        width: 100%;
        z-index: 50;
        padding: 1rem 0;
        background: transparent;
        transition: all 0.3s ease;
    }
    .navbar.scrolled {
        background: #fff;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
        padding: 0.5rem 0;
    }
    .navbar-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .navbar-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        text-decoration: none;
        font-weight: 700;
        font-size: 1.25rem;
        color: #fff;
    }
    .navbar-logo i {
        color: #4f46e5;
        font-size: 1.75rem;
    }
    .navbar.scrolled .navbar-logo {
        color: #1f2937;
    }
    .navbar-links {
        display: flex;
        gap: 2rem;
    }
    .navbar-links button {
        color: #fff;
        font-weight: 500;
        transition: color 0.2s ease;
    }
    .navbar.scrolled .navbar-links button {
        color: #374151;
    }
    .navbar-links button:hover {
        color: #4f46e5;
    }
    .navbar-toggle {
        display: none;
        color: #fff;
        font-size: 1.5rem;
    }
    .navbar.scrolled .navbar-toggle {
        color: #1f2937;
    }
    .mobile-menu {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        margin-top: 0.5rem;
        padding: 1rem;
        background: #fff;
        border-radius: 0.5rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .mobile-menu button {
        text-align: left;
        color: #374151;
        padding: 0.5rem 0.75rem;
        border-radius: 0.375rem;
        font-weight: 500;
    }
    .mobile-menu button:hover {
        background: #f3f4f6;
    }
    .mobile-menu .btn-primary {
        color: #fff;
        border-radius: 0.375rem;
        text-align: center;
    }
    @media (max-width: 768px) {
        .navbar-links,
        .navbar-cta {
            display: none;
        }
        .navbar-toggle {
            display: block;
        }
    }
    @media (min-width: 769px) {
        .mobile-menu {
            display: none;
        }
    }
"#;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    // Track scroll position for the solid navbar style
    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match dom::window() {
                    Ok(window) => {
                        let callback = Closure::<dyn Fn()>::new({
                            let is_scrolled = is_scrolled.clone();
                            move || {
                                if let Ok(scroll_y) = dom::scroll_y() {
                                    is_scrolled.set(past_threshold(scroll_y));
                                }
                            }
                        });
                        if let Err(e) = window
                            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        {
                            log::warn!("Failed to attach scroll listener: {:?}", e);
                        }
                        // Page may load already scrolled
                        if let Ok(scroll_y) = dom::scroll_y() {
                            is_scrolled.set(past_threshold(scroll_y));
                        }
                        Box::new(move || {
                            if let Err(e) = window.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            ) {
                                log::warn!("Failed to detach scroll listener: {:?}", e);
                            }
                        })
                    }
                    Err(e) => {
                        log::warn!("Navbar scroll tracking disabled: {}", e);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    let go_to = {
        let is_open = is_open.clone();
        move |section: Section| {
            let is_open = is_open.clone();
            Callback::from(move |_: MouseEvent| {
                dom::scroll_to_or_log(section);
                is_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then_some("scrolled"))}>
            <style>{NAVBAR_CSS}</style>
            <div class="container">
                <div class="navbar-row">
                    <a href={Section::Home.anchor()} class="navbar-logo">
                        <i class="fas fa-print"></i>
                        <span>{BRAND_NAME}</span>
                    </a>
                    <div class="navbar-links">
                        {
                            NAV_LINKS.iter().map(|link| html! {
                                <button key={link.name} onclick={go_to(link.target)}>{link.name}</button>
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="navbar-cta">
                        <button class="btn-primary" onclick={go_to(Section::Contact)}>{"Get a Quote"}</button>
                    </div>
                    <button class="navbar-toggle" onclick={toggle_menu} aria-label="Toggle menu">
                        <i class={if *is_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                    </button>
                </div>
                {
                    if *is_open {
                        html! {
                            <div class="mobile-menu">
                                {
                                    NAV_LINKS.iter().map(|link| html! {
                                        <button key={link.name} onclick={go_to(link.target)}>{link.name}</button>
                                    }).collect::<Html>()
                                }
                                <button class="btn-primary" onclick={go_to(Section::Contact)}>{"Get a Quote"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_solid_just_past_threshold() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(60.0));
        assert!(past_threshold(60.5));
        assert!(past_threshold(2_000.0));
    }
}
