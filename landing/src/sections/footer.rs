use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="muted">{format!("© {year} Your Agency. All rights reserved.")}</div>
                <div class="footer-links">
                    <a href="#services" class="footer-link">"Services"</a>
                    <a href="#contact" class="footer-link">"Contact"</a>
                </div>
            </div>
        </footer>
    }
}
