use leptos::prelude::*;

struct ServiceCard {
    title: &'static str,
    features: [&'static str; 3],
}

const SERVICES: [ServiceCard; 4] = [
    ServiceCard {
        title: "Acquisition: Paid Social & Search",
        features: [
            "Meta, TikTok, YouTube, Google",
            "Full-funnel strategy & creative",
            "Daily optimization & scaling",
        ],
    },
    ServiceCard {
        title: "Creative Studio",
        features: [
            "UGC + motion design",
            "Ad iteration frameworks",
            "Landing pages & CRO",
        ],
    },
    ServiceCard {
        title: "Analytics & CRO",
        features: [
            "North-star KPI tracking",
            "Testing roadmap",
            "Attribution & LTV insights",
        ],
    },
    ServiceCard {
        title: "Lifecycle & Retention",
        features: ["Email/SMS flows", "CRM segmentation", "Referral & loyalty"],
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="section">
            <div class="container">
                <div class="section-header">
                    <h2>"Services that compound growth"</h2>
                    <p class="muted">"Everything you need to acquire, convert, and retain customers."</p>
                </div>
                <div class="services-grid">
                    {SERVICES
                        .iter()
                        .map(|service| {
                            view! {
                                <div class="card">
                                    <h3>{service.title}</h3>
                                    <ul class="feature-list">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| view! { <li>"✓ "{*feature}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
