use super::api;
use crate::shared::number_format::{format_amount_opt, gross_profit, parse_amount};
use contracts::usecases::u101_extract_financials::{ExtractRequest, ExtractResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn ExtractWidget() -> impl IntoView {
    let (selected_file_name, set_selected_file_name) = signal(Option::<String>::None);
    let (period_end_date, set_period_end_date) = signal(String::new());
    let (is_extracting, set_is_extracting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (result, set_result) = signal(Option::<ExtractResponse>::None);

    // web_sys::File is not Send, so the handle lives outside the signal graph
    let selected_file = StoredValue::new_local(Option::<web_sys::File>::None);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                set_selected_file_name.set(Some(file.name()));
                selected_file.set_value(Some(file));
                // A fresh selection resets the error state so a retry starts clean
                set_error_msg.set(None);
            }
        }
    };

    let on_submit = move |_| {
        if is_extracting.get() {
            return;
        }
        let Some(file) = selected_file.get_value() else {
            set_error_msg.set(Some("Please select a PDF file".to_string()));
            return;
        };

        set_error_msg.set(None);
        set_result.set(None);
        set_is_extracting.set(true);

        let request = ExtractRequest::new(period_end_date.get());
        spawn_local(async move {
            match api::extract(&file, &request).await {
                Ok(response) => {
                    set_result.set(Some(response));
                }
                Err(e) => {
                    log::error!("Extraction request failed: {}", e);
                    set_error_msg.set(Some(e));
                }
            }
            // Busy flag drops exactly once, whichever way the call settled
            set_is_extracting.set(false);
        });
    };

    let submit_disabled =
        Signal::derive(move || selected_file_name.get().is_none() || is_extracting.get());

    view! {
        <div class="card">
            <div class="card__body">
                <div class="form__group">
                    <label class="form__label" for="pdf-file-input">"Upload PDF File:"</label>
                    <input
                        id="pdf-file-input"
                        type="file"
                        accept=".pdf"
                        class="form__input"
                        on:change=handle_file_select
                    />
                    {move || selected_file_name.get().map(|name| view! {
                        <p class="form__hint">"Selected: " {name}</p>
                    })}
                </div>

                <div class="form__group">
                    <label class="form__label" for="date-input">"Period End Date (optional):"</label>
                    <input
                        id="date-input"
                        type="date"
                        class="form__input form__input--date"
                        prop:value=move || period_end_date.get()
                        on:change=move |ev| {
                            set_period_end_date.set(event_target_value(&ev));
                        }
                    />
                </div>

                <Space gap=SpaceGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=submit_disabled
                    >
                        {move || if is_extracting.get() { "Processing..." } else { "Process File" }}
                    </Button>
                    <Show when=move || is_extracting.get()>
                        <Space gap=SpaceGap::Small>
                            <Spinner />
                            <span class="extract__busy">"Extracting..."</span>
                        </Space>
                    </Show>
                </Space>

                {move || error_msg.get().map(|e| {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    }
                })}
            </div>
        </div>

        {move || result.get().map(|response| {
            let revenue = parse_amount(&response.results.revenue);
            let cost_of_sales = parse_amount(&response.results.cos);
            let profit = gross_profit(revenue, cost_of_sales);

            view! {
                <div class="card">
                    <div class="card__body">
                        <h3 class="section-title">"Extraction Results"</h3>
                        <div class="results__note">"Amounts in millions"</div>
                        <div class="results__grid">
                            <div class="results__label">"Period End Date:"</div>
                            <div class="results__value">{response.period_end_date.clone()}</div>

                            <div class="results__label">"Revenue:"</div>
                            <div class="results__value">{format_amount_opt(revenue)}</div>

                            <div class="results__label">"Cost of Sales:"</div>
                            <div class="results__value">{format_amount_opt(cost_of_sales)}</div>

                            <div class="results__label">"Gross Profit:"</div>
                            <div class="results__value results__value--derived">
                                {format_amount_opt(profit)}
                            </div>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
