use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("5.2x", "Avg. ROAS"),
    ("$25M+", "Ad Spend Managed"),
    ("120+", "Brands Scaled"),
    ("34%", "Avg. CAC Down"),
];

const OFFERINGS: [(&str, &str); 4] = [
    (
        "Paid Social & Search",
        "Full-funnel acquisition across Meta, TikTok, Google & YouTube",
    ),
    (
        "CRO & Landing Pages",
        "Rapid testing, UX improvements, and conversion lifts",
    ),
    (
        "Creative Production",
        "UGC, motion graphics, and ad iterations that scale",
    ),
    (
        "Lifecycle & CRM",
        "Email, SMS, and retention programs that compound",
    ),
];

fn scroll_to_contact() {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("contact"))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div>
                        <div class="hero-badge">"Performance marketing for ambitious brands"</div>
                        <h1>"Grow faster with a revenue-first marketing partner"</h1>
                        <p>
                            "We plan, launch, and scale campaigns that turn attention into predictable revenue "
                            "across paid social, search, and lifecycle."
                        </p>
                        <div class="hero-actions">
                            <button class="btn btn-light" on:click=move |_| scroll_to_contact()>
                                "Book a strategy call →"
                            </button>
                            <a href="#services" class="btn btn-outline">"Explore services"</a>
                        </div>
                        <div class="stat-grid">
                            {STATS
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="stat">
                                            <div class="stat-value">{value}</div>
                                            <div class="stat-label">{label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <WhatWeDo />
                </div>
            </div>
        </section>
    }
}

#[component]
fn WhatWeDo() -> impl IntoView {
    view! {
        <div class="hero-panel">
            <h3>"What we do"</h3>
            <ul>
                {OFFERINGS
                    .into_iter()
                    .map(|(title, desc)| {
                        view! {
                            <li>
                                <div class="offering-title">{title}</div>
                                <div class="offering-desc">{desc}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
