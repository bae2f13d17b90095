pub(crate) mod alert;
pub(crate) mod report;
pub(crate) mod session;
pub(crate) mod shell;
pub(crate) mod toast;
