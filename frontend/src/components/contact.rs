use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::common::{reveal, section_header};
use crate::content::{Section, CONTACT_DETAILS, SOCIAL_LINKS};
use crate::models::contact_form::{
    schedule_delivery, ContactAction, ContactForm, ContactState, FieldId, FieldKind, SubmitPhase,
    FIELD_SPECS,
};
use crate::models::portfolio::Category;
use crate::utils::timer::BrowserScheduler;
use crate::utils::visibility::{use_in_view, VisibilityOptions};

const CONTACT_CSS: &str = r#"
    .contact-grid {
        display: grid;
        grid-template-columns: 2fr 3fr;
        gap: 3rem;
    }
    .contact-info {
        height: 100%;
        padding: 2rem;
        border-radius: 1rem;
        color: #fff;
        background: linear-gradient(to bottom right, #4f46e5, #7e22ce);
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
    }
    .contact-info h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .contact-info > p {
        color: #e0e7ff;
        margin-bottom: 2rem;
    }
    .contact-detail {
        display: flex;
        align-items: flex-start;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .contact-detail .icon,
    .contact-social a {
        background: rgba(255, 255, 255, 0.2);
        padding: 0.75rem;
        border-radius: 0.5rem;
        color: #fff;
    }
    .contact-detail .title {
        font-weight: 500;
    }
    .contact-detail .line {
        color: #e0e7ff;
    }
    .contact-social {
        margin-top: 3rem;
    }
    .contact-social h4 {
        font-weight: 500;
        margin-bottom: 1rem;
    }
    .contact-social .links {
        display: flex;
        gap: 1rem;
    }
    .contact-social a {
        border-radius: 9999px;
        width: 2.75rem;
        height: 2.75rem;
        display: inline-flex;
        align-items: center;
        justify-content: center;
    }
    .contact-social a:hover {
        background: rgba(255, 255, 255, 0.3);
    }
    .contact-form-card {
        background: #fff;
        border-radius: 1rem;
        padding: 2rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    .contact-form-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .contact-status {
        margin-bottom: 1.5rem;
        padding: 1rem;
        border-radius: 0.5rem;
        background: #f0fdf4;
        color: #166534;
    }
    .contact-status.error {
        background: #fef2f2;
        color: #991b1b;
    }
    .contact-fields {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.5rem;
        margin-bottom: 1.5rem;
    }
    .contact-field.wide {
        grid-column: 1 / -1;
    }
    .contact-field label {
        display: block;
        font-size: 0.875rem;
        font-weight: 500;
        color: #374151;
        margin-bottom: 0.25rem;
    }
    .contact-field label .required {
        color: #ef4444;
    }
    .contact-field input,
    .contact-field select,
    .contact-field textarea {
        width: 100%;
        padding: 0.5rem 1rem;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        font: inherit;
        transition: border-color 0.2s ease;
    }
    .contact-field input:focus,
    .contact-field select:focus,
    .contact-field textarea:focus {
        outline: 2px solid #6366f1;
        border-color: #6366f1;
    }
    .contact-field.invalid input,
    .contact-field.invalid select,
    .contact-field.invalid textarea {
        border-color: #ef4444;
    }
    .contact-field .error {
        margin-top: 0.25rem;
        font-size: 0.875rem;
        color: #dc2626;
    }
    .contact-submit {
        width: 100%;
        padding: 0.75rem 1.5rem;
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
    }
    @media (max-width: 1024px) {
        .contact-grid {
            grid-template-columns: 1fr;
        }
    }
    @media (max-width: 768px) {
        .contact-fields {
            grid-template-columns: 1fr;
        }
    }
"#;

fn service_options(current: &str) -> Html {
    let mut options: Vec<(&'static str, &'static str)> = Category::ALL
        .iter()
        .map(|category| (category.tag(), category.service_name()))
        .collect();
    options.push(("other", "Other"));
    html! {
        <>
            <option value="" selected={current.is_empty()}>{FieldId::Service.spec().placeholder}</option>
            {
                options.into_iter().map(|(value, label)| html! {
                    <option key={value} {value} selected={current == value}>{label}</option>
                }).collect::<Html>()
            }
        </>
    }
}

fn field_view(id: FieldId, form: &ContactForm, on_edit: &Callback<(FieldId, String)>) -> Html {
    let spec = id.spec();
    let value = form.value(id).to_string();
    let error = form.error(id);
    let control = match spec.kind {
        FieldKind::Select => {
            let on_edit = on_edit.clone();
            let onchange = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_edit.emit((id, select.value()));
            });
            html! {
                <select id={id.dom_id()} {onchange}>
                    {service_options(&value)}
                </select>
            }
        }
        FieldKind::TextArea => {
            let on_edit = on_edit.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let area: HtmlTextAreaElement = e.target_unchecked_into();
                on_edit.emit((id, area.value()));
            });
            html! {
                <textarea
                    id={id.dom_id()}
                    rows="5"
                    placeholder={spec.placeholder}
                    value={value.clone()}
                    {oninput}
                />
            }
        }
        FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
            let on_edit = on_edit.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_edit.emit((id, input.value()));
            });
            html! {
                <input
                    type={spec.kind.input_type()}
                    id={id.dom_id()}
                    placeholder={spec.placeholder}
                    value={value.clone()}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div key={id.dom_id()} class={classes!(
            "contact-field",
            (spec.kind == FieldKind::TextArea).then_some("wide"),
            error.is_some().then_some("invalid"),
        )}>
            <label for={id.dom_id()}>
                {spec.label}
                {
                    if spec.required {
                        html! { <>{" "}<span class="required">{"*"}</span></> }
                    } else {
                        html! {}
                    }
                }
            </label>
            {control}
            {
                match error {
                    Some(error) => html! { <p class="error">{error}</p> },
                    None => html! {},
                }
            }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let (node, is_visible) = use_in_view(VisibilityOptions::default());
    let state = use_reducer(ContactState::default);

    // Accepted submissions "send" for a moment, then reset the form
    {
        let phase = state.phase;
        let state = state.clone();
        use_effect_with_deps(
            move |phase: &SubmitPhase| {
                let delivery = (*phase == SubmitPhase::Submitting).then(|| {
                    match serde_json::to_string(&state.form.to_request()) {
                        Ok(payload) => log::info!("Sending contact request: {}", payload),
                        Err(e) => log::warn!("Failed to serialize contact request: {}", e),
                    }
                    let state = state.clone();
                    schedule_delivery(&BrowserScheduler, move || {
                        gloo_console::log!("Contact request delivered");
                        state.dispatch(ContactAction::Delivered);
                    })
                });
                move || drop(delivery)
            },
            phase,
        );
    }

    let on_edit = {
        let state = state.clone();
        Callback::from(move |(id, value): (FieldId, String)| {
            state.dispatch(ContactAction::Edit(id, value));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ContactAction::Submit);
        })
    };

    let is_submitting = state.is_submitting();

    html! {
        <section id={Section::Contact.id()} ref={node} class="section">
            <style>{CONTACT_CSS}</style>
            <div class="container">
                {section_header(
                    "Get In Touch",
                    "Have a project in mind? Let's discuss how we can bring your ideas to life!",
                )}
                <div class="contact-grid">
                    <div class={reveal(is_visible, Some("from-left"))}>
                        <div class="contact-info">
                            <h3>{"Contact Information"}</h3>
                            <p>{"Fill out the form or reach out to us directly using the information below."}</p>
                            {
                                CONTACT_DETAILS.iter().map(|detail| html! {
                                    <div key={detail.title} class="contact-detail">
                                        <div class="icon"><i class={detail.icon}></i></div>
                                        <div>
                                            <p class="title">{detail.title}</p>
                                            { for detail.lines.iter().map(|line| html! { <p class="line">{*line}</p> }) }
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                            <div class="contact-social">
                                <h4>{"Follow Us"}</h4>
                                <div class="links">
                                    {
                                        SOCIAL_LINKS.iter().map(|(name, icon)| html! {
                                            <a key={*name} href="#" aria-label={*name}><i class={*icon}></i></a>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class={reveal(is_visible, Some("from-right"))}>
                        <div class="contact-form-card">
                            <h3>{"Send Us a Message"}</h3>
                            {
                                match &state.status {
                                    Some(status) => html! {
                                        <div class={classes!("contact-status", status.is_error.then_some("error"))}>
                                            {status.message.clone()}
                                        </div>
                                    },
                                    None => html! {},
                                }
                            }
                            <form {onsubmit} novalidate={true}>
                                <div class="contact-fields">
                                    {
                                        FIELD_SPECS
                                            .iter()
                                            .map(|spec| field_view(spec.id, &state.form, &on_edit))
                                            .collect::<Html>()
                                    }
                                </div>
                                <button type="submit" class="btn-primary contact-submit" disabled={is_submitting}>
                                    {
                                        if is_submitting {
                                            html! { <><i class="fas fa-spinner fa-spin"></i>{"Sending..."}</> }
                                        } else {
                                            html! { <><i class="fas fa-paper-plane"></i>{"Send Message"}</> }
                                        }
                                    }
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
