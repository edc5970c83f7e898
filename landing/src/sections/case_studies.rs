use agency::view::{CaseStudiesView, CaseStudyCard};
use agency::{CaseStudyLoadState, CaseStudyLoader, HttpApi};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::SignalCell;

#[component]
pub fn CaseStudies(api: HttpApi) -> impl IntoView {
    let studies = SignalCell(RwSignal::new(CaseStudyLoadState::Loading));

    // One fetch per mount
    let load = CaseStudyLoader::new(api).load_into(&studies);
    spawn_local(async move {
        load.await;
    });

    let rendered = move || match studies.0.with(|s| CaseStudiesView::from(s)) {
        CaseStudiesView::Cards(cards) => view! {
            <div class="case-grid">
                {cards.into_iter().map(|card| view! { <CaseCard card /> }).collect_view()}
            </div>
        }
        .into_any(),
        marker => view! { <div class="section-header muted">{marker.message()}</div> }.into_any(),
    };

    view! {
        <section class="section">
            <div class="container">
                <div class="section-header">
                    <h2>"Proven results"</h2>
                    <p class="muted">"Real outcomes we’ve driven for high-growth brands."</p>
                </div>
                {rendered}
            </div>
        </section>
    }
}

#[component]
fn CaseCard(card: CaseStudyCard) -> impl IntoView {
    let CaseStudyCard {
        industry,
        title,
        summary,
        impact,
        image,
        ..
    } = card;

    view! {
        <div class="card case-card">
            {image.map(|img| view! { <img src=img.src alt=img.alt /> })}
            <div class="muted">{industry}</div>
            <h3>{title}</h3>
            <p class="muted">{summary}</p>
            {impact.map(|impact| view! { <div class="impact">{impact}</div> })}
        </div>
    }
}
