use crate::{
    api::User,
    pages::profile::utils::photo_src,
    utils::time::display_long_date_time,
};
use leptos::*;

#[component]
fn Field(#[prop(into)] label: String, value: Signal<String>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <p class="bg-gray-50 border border-gray-300 rounded-md px-3 py-2 min-h-[2.5rem]">
                {move || value.get()}
            </p>
        </div>
    }
}

#[component]
pub fn ProfileDetails(user: Signal<Option<User>>) -> impl IntoView {
    let text = move |pick: fn(&User) -> Option<String>| {
        Signal::derive(move || user.with(|u| u.as_ref().and_then(pick).unwrap_or_default()))
    };

    view! {
        <div class="bg-white rounded-lg shadow p-8">
            <div class="text-center mb-8">
                <div class="w-24 h-24 mx-auto mb-4 rounded-full overflow-hidden border-4 border-gray-200">
                    <img
                        src=move || user.with(|u| photo_src(u.as_ref()))
                        alt="Profile"
                        class="w-full h-full object-cover"
                    />
                </div>
                <h1 class="text-2xl font-bold text-gray-900">
                    {move || user.with(|u| u.as_ref().and_then(|u| u.fullname.clone()).unwrap_or_default())}
                </h1>
                <p class="text-gray-600">
                    {move || user.with(|u| u.as_ref().and_then(|u| u.position.clone()).unwrap_or_default())}
                </p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <Field label="Email" value=text(|u| u.email.clone()) />
                <Field label="Phone Number" value=text(|u| u.phone_number.clone()) />
                <Field label="Position" value=text(|u| u.position.clone()) />
                <Field label="Employee ID" value=text(|u| Some(u.id.clone())) />
                <Field
                    label="Created At"
                    value=text(|u| Some(display_long_date_time(u.created_at.as_ref())))
                />
                <Field
                    label="Updated At"
                    value=text(|u| Some(display_long_date_time(u.updated_at.as_ref())))
                />
            </div>
        </div>
    }
}
