use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let form = vm.form;

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    view! {
        <LoginForm
            email=form.email.read_only()
            password=form.password.read_only()
            error=vm.error.read_only().into()
            pending=pending.into()
            on_email_input=Callback::new(move |value: String| form.email.set(value))
            on_password_input=Callback::new(move |value: String| form.password.set(value))
            on_submit=handle_submit
        />
    }
}
