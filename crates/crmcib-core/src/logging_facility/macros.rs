//! Operation boundary macros
//!
//! Every session-level CIB operation is bracketed by a start event and
//! either an end or an end_error event carrying the elapsed time.

/// Log the start of an operation
///
/// ```
/// # use crmcib_core::log_op_start;
/// log_op_start!("stop_resource");
/// log_op_start!("stop_resource", resource = "p_web");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = crmcib_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = crmcib_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use crmcib_core::log_op_end;
/// log_op_end!("stop_resource", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = crmcib_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = crmcib_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Takes the `CibError` by value or by reference. The event carries the
/// stable kind and code of its `ExError` classification, the entity the
/// error is about (empty if none) and the error's display text.
///
/// ```
/// # use crmcib_core::{log_op_error, errors::CibError};
/// let err = CibError::NodeNotFound { uname: "li0".to_string() };
/// log_op_error!("standby_node", &err, duration_ms = 3);
/// log_op_error!("standby_node", err, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err = $crate::errors::ExError::from($err);
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = crmcib_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            entity_id = ex_err.entity_id().unwrap_or_default(),
            err_message = ex_err.message(),
            $($field)*
        );
    }};
}
