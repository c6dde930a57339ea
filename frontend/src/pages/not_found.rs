use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="section" style="min-height: 100vh; display: flex; align-items: center;">
            <div class="container section-header">
                <h2>{"Page not found"}</h2>
                <div class="rule"></div>
                <p>{"The page you are looking for doesn't exist."}</p>
                <p style="margin-top: 2rem;">
                    <Link<Route> to={Route::Home} classes="btn-primary">{"Back to home"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
