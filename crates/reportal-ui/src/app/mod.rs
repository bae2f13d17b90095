use crate::app::api::PortalCtx;
use crate::components::report::ReportPanel;
use crate::components::session::{CheckingSession, SessionUnavailable, SignedOut};
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::report::format_size;
use crate::core::store::{AppStore, dismiss_toast, push_toast};
use crate::core::view::{PortalView, select_view};
use crate::i18n::TranslationBundle;
use crate::services::report::DownloadOutcome;
use preferences::{clear_legacy_auth_markers, load_config, load_locale};
use reportal_telemetry::{LoggingConfig, init_logging};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod api;
mod preferences;

#[function_component(ReportalApp)]
pub(crate) fn reportal_app() -> Html {
    let locale = use_state(load_locale);
    let ctx = use_memo(|_| PortalCtx::new(load_config()), ());
    let view = use_selector(|store: &AppStore| select_view(store));
    let toasts = use_selector(|store: &AppStore| store.notices.toasts.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };

    {
        let ctx = (*ctx).clone();
        use_effect_with_deps(
            move |_| {
                yew::platform::spawn_local(async move {
                    ctx.session.probe_session().await;
                });
                || ()
            },
            (),
        );
    }

    let on_login = {
        let ctx = (*ctx).clone();
        Callback::from(move |()| ctx.session.begin_login())
    };
    let on_reload = {
        let ctx = (*ctx).clone();
        Callback::from(move |()| ctx.session.reload())
    };
    let on_logout = {
        let ctx = (*ctx).clone();
        Callback::from(move |()| {
            let ctx = ctx.clone();
            yew::platform::spawn_local(async move {
                ctx.session.logout().await;
            });
        })
    };
    let on_download = {
        let ctx = (*ctx).clone();
        let dispatch = dispatch.clone();
        let bundle = (*bundle).clone();
        Callback::from(move |()| {
            let ctx = ctx.clone();
            let dispatch = dispatch.clone();
            let bundle = bundle.clone();
            yew::platform::spawn_local(async move {
                if let DownloadOutcome::Saved(saved) = ctx.reports.download().await {
                    let size = format_size(saved.bytes);
                    let message = bundle.format(
                        "report.saved",
                        "Saved {filename} ({size})",
                        &[("filename", &saved.filename), ("size", &size)],
                    );
                    dispatch.reduce_mut(|store| {
                        push_toast(store, message);
                    });
                }
            });
        })
    };
    let on_dismiss = Callback::from(move |id: u64| {
        dispatch.reduce_mut(|store| dismiss_toast(store, id));
    });

    let identity = match &*view {
        PortalView::LoggedIn { identity, .. } => Some(identity.clone()),
        _ => None,
    };
    let logout_busy = matches!(&*view, PortalView::LoggedIn { busy: true, .. });

    let body = match (*view).clone() {
        PortalView::CheckingSession => html! { <CheckingSession /> },
        PortalView::SessionUnavailable { error } => {
            html! { <SessionUnavailable {error} on_reload={on_reload} /> }
        }
        PortalView::LoggedOut { error } => html! { <SignedOut {error} on_login={on_login} /> },
        PortalView::LoggedIn { busy, error, .. } => {
            html! { <ReportPanel {busy} {error} on_download={on_download} /> }
        }
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <AppShell {identity} busy={logout_busy} on_logout={on_logout}>
                {body}
            </AppShell>
            <ToastHost toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
        </ContextProvider<TranslationBundle>>
    }
}

/// Entrypoint invoked by the wasm binary.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = init_logging(&LoggingConfig::default()) {
        gloo::console::error!("logging initialisation failed", err.to_string());
    }
    clear_legacy_auth_markers();
    tracing::info!(build = reportal_telemetry::build_id(), "reportal starting");
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ReportalApp>::with_root(root).render();
    } else {
        yew::Renderer::<ReportalApp>::new().render();
    }
}
