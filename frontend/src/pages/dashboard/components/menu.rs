use crate::{components::cards::MenuCard, pages::dashboard::utils::MENU_ITEMS};
use leptos::*;

#[component]
pub fn MenuSection() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            {MENU_ITEMS
                .iter()
                .map(|item| {
                    view! {
                        <MenuCard
                            title=item.title
                            description=item.description
                            href=item.href
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
