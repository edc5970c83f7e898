use agency::view::{NoticeKind, StatusNotice, SubmitButton, budget_choices, service_chips};
use agency::{ContactState, HttpApi, LeadField, LeadForm, LeadSubmitter, ValidationError};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::SignalCell;

#[component]
pub fn Contact(api: HttpApi) -> impl IntoView {
    let contact = SignalCell(RwSignal::new(ContactState::new()));
    let invalid = RwSignal::new(None::<ValidationError>);
    let submitter = LeadSubmitter::new(api);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = contact.0.with_untracked(|s| s.form().validate()) {
            tracing::debug!(error = %err, "lead form rejected before submission");
            invalid.set(Some(err));
            return;
        }
        invalid.set(None);

        // Sending is applied before this returns
        let pending = submitter.submit(&contact);
        spawn_local(async move {
            pending.await;
        });
    };

    let button = move || contact.0.with(|s| SubmitButton::for_status(s.status()));

    let notice = move || {
        contact
            .0
            .with(|s| StatusNotice::for_status(s.status()))
            .map(|notice| {
                let class = match notice.kind {
                    NoticeKind::Success => "notice-success",
                    NoticeKind::Error => "notice-error",
                };
                view! { <div class=class>{notice.text}</div> }
            })
    };

    view! {
        <section id="contact" class="section">
            <div class="container narrow">
                <div class="card">
                    <h2>"Book a strategy call"</h2>
                    <p class="muted">"Tell us about your growth goals. We’ll come prepared with opportunities."</p>
                    <form class="lead-form" on:submit=on_submit>
                        <div class="form-grid">
                            <TextInput contact field=LeadField::Name placeholder="Full name" required=true />
                            <TextInput contact field=LeadField::Email placeholder="Email" input_type="email" required=true />
                            <TextInput contact field=LeadField::Company placeholder="Company" />
                            <TextInput contact field=LeadField::Website placeholder="Website" />
                        </div>

                        <ServiceChips contact />

                        <div class="form-grid">
                            <BudgetSelect contact />
                            <TextInput contact field=LeadField::Phone placeholder="Phone (optional)" />
                        </div>

                        <textarea
                            placeholder="Tell us about your goals"
                            prop:value=move || contact.0.with(|s| s.form().message.clone())
                            on:input=move |ev| set_field(contact, LeadField::Message, event_target_value(&ev))
                        ></textarea>

                        <button
                            type="submit"
                            class="btn btn-primary"
                            aria-busy=move || button().busy.to_string()
                        >
                            {move || button().label}
                            " →"
                        </button>

                        {move || invalid.get().map(|err| view! { <div class="notice-error">{err.to_string()}</div> })}
                        {notice}
                    </form>

                    <div class="contact-details muted">
                        <div>"✉ hello@youragency.com"</div>
                        <div>"☎ +1 (555) 123-4567"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn set_field(contact: SignalCell<ContactState>, field: LeadField, value: String) {
    contact.0.update(|s| s.set_field(field, value));
}

fn field_value(form: &LeadForm, field: LeadField) -> String {
    match field {
        LeadField::Name => form.name.clone(),
        LeadField::Email => form.email.clone(),
        LeadField::Company => form.company.clone(),
        LeadField::Website => form.website.clone(),
        LeadField::Phone => form.phone.clone(),
        LeadField::Message => form.message.clone(),
        LeadField::Budget => form.budget.map(|b| b.label().to_string()).unwrap_or_default(),
    }
}

#[component]
fn TextInput(
    contact: SignalCell<ContactState>,
    field: LeadField,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            placeholder=placeholder
            required=required
            prop:value=move || contact.0.with(|s| field_value(s.form(), field))
            on:input=move |ev| set_field(contact, field, event_target_value(&ev))
        />
    }
}

#[component]
fn ServiceChips(contact: SignalCell<ContactState>) -> impl IntoView {
    let chips = move || {
        contact
            .0
            .with(|s| service_chips(s.form()))
            .into_iter()
            .map(|chip| {
                let label = chip.option.label();
                view! {
                    <button
                        type="button"
                        class="chip"
                        class:selected=chip.selected
                        on:click=move |_| contact.0.update(|s| s.toggle_service(label))
                    >
                        {label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="services-picker">
            <div class="field-label">"What do you need help with?"</div>
            <div class="chip-row">{chips}</div>
        </div>
    }
}

#[component]
fn BudgetSelect(contact: SignalCell<ContactState>) -> impl IntoView {
    let options = move || {
        contact
            .0
            .with(|s| budget_choices(s.form()))
            .into_iter()
            .map(|choice| {
                view! {
                    <option value=choice.value selected=choice.selected>
                        {choice.label}
                    </option>
                }
            })
            .collect_view()
    };

    view! {
        <select
            prop:value=move || contact.0.with(|s| field_value(s.form(), LeadField::Budget))
            on:change=move |ev| set_field(contact, LeadField::Budget, event_target_value(&ev))
        >
            {options}
        </select>
    }
}
