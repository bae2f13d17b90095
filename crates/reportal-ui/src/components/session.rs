use crate::components::alert::{ErrorAlert, error_message};
use crate::core::errors::OperationError;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[hook]
fn use_bundle() -> TranslationBundle {
    use_context::<TranslationBundle>().unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE))
}

#[function_component(CheckingSession)]
pub(crate) fn checking_session() -> Html {
    let bundle = use_bundle();
    let label = bundle.text("session.checking", "Checking your session…");
    html! {
        <div class="flex flex-col items-center gap-4 py-16">
            <span class="loading loading-spinner loading-lg" role="status" aria-label={label.clone()} />
            <p class="opacity-70">{label}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SessionUnavailableProps {
    pub(crate) error: OperationError,
    pub(crate) on_reload: Callback<()>,
}

/// Probe failed without resolving the session. Retrying is left to the user.
#[function_component(SessionUnavailable)]
pub(crate) fn session_unavailable(props: &SessionUnavailableProps) -> Html {
    let bundle = use_bundle();
    let on_reload = {
        let on_reload = props.on_reload.clone();
        Callback::from(move |_| on_reload.emit(()))
    };
    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body">
                <h2 class="card-title">{bundle.text("session.unavailable_title", "Service unavailable")}</h2>
                <p>{error_message(&bundle, &props.error)}</p>
                <div class="card-actions justify-end">
                    <button class="btn btn-primary" onclick={on_reload}>
                        {bundle.text("session.reload", "Reload page")}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SignedOutProps {
    pub(crate) error: Option<OperationError>,
    pub(crate) on_login: Callback<()>,
}

#[function_component(SignedOut)]
pub(crate) fn signed_out(props: &SignedOutProps) -> Html {
    let bundle = use_bundle();
    let on_login = {
        let on_login = props.on_login.clone();
        Callback::from(move |_| on_login.emit(()))
    };
    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body gap-4">
                <h2 class="card-title">{bundle.text("session.signed_out_title", "Sign in to continue")}</h2>
                <p class="opacity-70">{bundle.text("session.signed_out_body", "")}</p>
                {props.error.clone().map(|error| html! { <ErrorAlert {error} /> }).unwrap_or_default()}
                <div class="card-actions justify-end">
                    <button class="btn btn-primary" onclick={on_login}>
                        {bundle.text("session.login", "Sign in")}
                    </button>
                </div>
            </div>
        </div>
    }
}
