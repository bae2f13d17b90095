use crate::components::alert::ErrorAlert;
use crate::core::errors::OperationError;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ReportPanelProps {
    pub(crate) busy: bool,
    pub(crate) error: Option<OperationError>,
    pub(crate) on_download: Callback<()>,
}

/// Download control for the signed-in user.
#[function_component(ReportPanel)]
pub(crate) fn report_panel(props: &ReportPanelProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let on_click = {
        let on_download = props.on_download.clone();
        Callback::from(move |_| on_download.emit(()))
    };
    let label = if props.busy {
        html! {
            <>
                <span class="loading loading-spinner loading-sm" />
                {bundle.text("report.downloading", "Downloading…")}
            </>
        }
    } else {
        html! { {bundle.text("report.download", "Download report")} }
    };

    html! {
        <div class="card bg-base-200 shadow">
            <div class="card-body gap-4">
                <h2 class="card-title">{bundle.text("report.title", "Your report")}</h2>
                <p class="opacity-70">{bundle.text("report.body", "")}</p>
                {props.error.clone().map(|error| html! { <ErrorAlert {error} /> }).unwrap_or_default()}
                <div class="card-actions justify-end">
                    <button class="btn btn-primary" disabled={props.busy} onclick={on_click}>
                        {label}
                    </button>
                </div>
            </div>
        </div>
    }
}
