// Agency landing page: Leptos 0.8, client-side rendered

mod logging;
mod sections;
mod state;

use agency::HttpApi;
use leptos::prelude::*;
use sections::*;

fn main() {
    logging::init();
    let api = HttpApi::new(state::site_config());
    leptos::mount::mount_to_body(move || view! { <App api=api /> });
}

#[component]
fn App(api: HttpApi) -> impl IntoView {
    view! {
        <div class="page">
            <Hero />
            <Services />
            <CaseStudies api=api.clone() />
            <Contact api=api />
            <Footer />
        </div>
    }
}
