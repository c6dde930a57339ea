use yew::prelude::*;

use crate::components::contact::Contact;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::portfolio::Portfolio;
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;

/// The whole site: every section in page order. Holds no state itself.
#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Navbar />
            <main>
                <Hero />
                <Services />
                <Features />
                <Portfolio />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
