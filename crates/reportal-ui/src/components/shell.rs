use crate::core::session::Identity;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) identity: Option<Rc<Identity>>,
    pub(crate) busy: bool,
    pub(crate) on_logout: Callback<()>,
}

/// Page frame: title bar with the signed-in identity and the logout control.
#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| bundle.text(key, default);

    let account = props.identity.as_ref().map_or_else(Html::default, |identity| {
        let on_logout = {
            let on_logout = props.on_logout.clone();
            Callback::from(move |_| on_logout.emit(()))
        };
        html! {
            <>
                <div class="flex flex-col items-end text-sm">
                    <span class="opacity-70">{t("session.signed_in_as", "Signed in as")}</span>
                    <strong title={identity.email().to_string()}>{identity.display_name()}</strong>
                </div>
                <button class="btn btn-outline btn-sm" disabled={props.busy} onclick={on_logout}>
                    {t("session.logout", "Sign out")}
                </button>
            </>
        }
    });

    html! {
        <div class="min-h-screen bg-base-100">
            <div class="navbar bg-base-200">
                <div class="navbar-start">
                    <strong class="text-lg">{t("app.title", "Prosthesis Reports")}</strong>
                </div>
                <div class="navbar-end gap-2">{account}</div>
            </div>
            <main class="container mx-auto max-w-2xl p-6">
                { for props.children.iter() }
            </main>
        </div>
    }
}
