use chrono::Datelike;
use yew::prelude::*;

use crate::content::{BRAND_NAME, NAV_LINKS, SERVICES};
use crate::utils::dom;

const FOOTER_CSS: &str = r#"
    .footer {
        background: #111827;
        color: #d1d5db;
        padding: 3rem 0 1.5rem;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 2rem;
    }
    .footer-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        color: #fff;
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .footer-brand i {
        color: #818cf8;
    }
    .footer h4 {
        color: #fff;
        font-weight: 600;
        margin-bottom: 1rem;
    }
    .footer ul {
        list-style: none;
    }
    .footer li {
        margin-bottom: 0.5rem;
    }
    .footer li button {
        color: #9ca3af;
    }
    .footer li button:hover {
        color: #fff;
    }
    .footer-bottom {
        margin-top: 2rem;
        padding-top: 1.5rem;
        border-top: 1px solid #374151;
        text-align: center;
        font-size: 0.875rem;
        color: #6b7280;
    }
    @media (max-width: 768px) {
        .footer-grid {
            grid-template-columns: 1fr;
        }
    }
"#;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="footer">
            <style>{FOOTER_CSS}</style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <i class="fas fa-print"></i>
                            <span>{BRAND_NAME}</span>
                        </div>
                        <p>{"Custom printing, branding & advertising solutions that turn your ideas into reality."}</p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            {
                                NAV_LINKS.iter().map(|link| {
                                    let target = link.target;
                                    html! {
                                        <li key={link.name}>
                                            <button onclick={Callback::from(move |_: MouseEvent| dom::scroll_to_or_log(target))}>
                                                {link.name}
                                            </button>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        <ul>
                            { for SERVICES.iter().map(|service| html! { <li key={service.id}>{service.title}</li> }) }
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    {format!("© {} {}. All rights reserved.", year, BRAND_NAME)}
                </div>
            </div>
        </footer>
    }
}
