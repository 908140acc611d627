use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="text-sm font-medium">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().and_then(|e| {
                    if e.code != "VALIDATION_ERROR" {
                        return None;
                    }
                    let fields = e.details?.get("fields")?.as_array()?.clone();
                    Some(view! {
                        <ul class="list-disc list-inside text-xs">
                            {fields.iter().map(|field| {
                                view! { <li>{field.as_str().unwrap_or_default().to_string()}</li> }
                            }).collect_view()}
                        </ul>
                    })
                })}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_lists_missing_fields() {
        let html = render_to_string(move || {
            let mut error = ApiError::validation("Please fill in all fields");
            error.details = Some(json!({ "fields": ["email", "password"] }));
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Please fill in all fields"));
        assert!(html.contains("email"));
        assert!(html.contains("password"));
    }

    #[test]
    fn inline_error_hidden_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("bg-red-50"));
    }
}
