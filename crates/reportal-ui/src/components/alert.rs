use crate::core::errors::OperationError;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorAlertProps {
    pub(crate) error: OperationError,
}

/// Operation feedback; `NoDataYet` renders as information, everything else as an error.
#[function_component(ErrorAlert)]
pub(crate) fn error_alert(props: &ErrorAlertProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let tone = if props.error.is_informational() {
        "alert-info"
    } else {
        "alert-error"
    };
    html! {
        <div class={classes!("alert", tone)} role="alert">
            <span>{error_message(&bundle, &props.error)}</span>
        </div>
    }
}

pub(crate) fn error_message(bundle: &TranslationBundle, error: &OperationError) -> String {
    let status = error.status().map(|status| status.to_string()).unwrap_or_default();
    bundle.format(
        error.kind.message_key(),
        &error.message,
        &[("status", status.as_str())],
    )
}
