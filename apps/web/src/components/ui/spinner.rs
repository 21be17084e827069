use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading".to_string());

    view! {
        <div class="flex items-center justify-center gap-3 text-sm text-gray-500 dark:text-gray-400">
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                role="status"
                aria-live="polite"
                aria-label=label.clone()
            ></div>
            <span>{label}</span>
        </div>
    }
}
