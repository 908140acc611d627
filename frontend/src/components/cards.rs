use leptos::*;

/// Dashboard navigation tile.
#[component]
pub fn MenuCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] href: String,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="block bg-white overflow-hidden shadow rounded-lg hover:shadow-md transition-shadow"
        >
            <div class="px-4 py-5 sm:p-6">
                <h3 class="text-lg leading-6 font-medium text-gray-900">{title}</h3>
                <p class="mt-2 text-sm text-gray-600">{description}</p>
            </div>
        </a>
    }
}
