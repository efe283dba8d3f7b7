//! Addition calculator backed by the local `/api/add` route.

use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

/// Number input contents as an operand; anything unparsable counts as zero
pub fn parse_operand(input: &str) -> f64 {
    input.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0)
}

#[component]
pub fn CalculatorView() -> impl IntoView {
    let (a, set_a) = signal(0.0f64);
    let (b, set_b) = signal(0.0f64);
    let (result, set_result) = signal(0.0f64);
    let (failed, set_failed) = signal(false);

    let add = move |_| {
        let (a, b) = (a.get_untracked(), b.get_untracked());
        spawn_local(async move {
            match api::add_numbers(a, b).await {
                Ok(sum) => {
                    set_failed.set(false);
                    set_result.set(sum);
                }
                Err(e) => {
                    error!("[CALC] {}", e);
                    set_failed.set(true);
                }
            }
        });
    };

    view! {
        <div class="page calculator">
            <h1>"Addition Calculator"</h1>
            <div class="calculator-inputs">
                <input
                    type="number"
                    prop:value=move || a.get().to_string()
                    on:input=move |ev| set_a.set(parse_operand(&event_target_value(&ev)))
                />
                <span class="operator">"+"</span>
                <input
                    type="number"
                    prop:value=move || b.get().to_string()
                    on:input=move |ev| set_b.set(parse_operand(&event_target_value(&ev)))
                />
            </div>
            <button class="primary-btn" on:click=add>"Add"</button>
            <div class="calculator-result">"Result: " {move || result.get()}</div>
            <Show when=move || failed.get()>
                <p class="error-text">"Could not reach the calculator"</p>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("2"), 2.0);
        assert_eq!(parse_operand(" -1.5 "), -1.5);
        assert_eq!(parse_operand(""), 0.0);
        assert_eq!(parse_operand("abc"), 0.0);
        assert_eq!(parse_operand("inf"), 0.0);
    }
}
