//! Operation boundary macros
//!
//! Every engine command emits one `start` event, then exactly one of `end`
//! or `end_error`. Field names come from `cafe_core::schema` so the capture
//! helpers and the JSON output agree on them. Extra `key = value` fields are
//! passed through to `tracing` unchanged.

/// Shared body of the three boundary macros
#[doc(hidden)]
#[macro_export]
macro_rules! __op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            { $crate::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::schema::FIELD_OP } = $op,
            { $crate::schema::FIELD_EVENT } = $event
            $(, $($field)*)?
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use cafe_core::log_op_start;
/// log_op_start!("add_order", dish_id = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(info, $op, $crate::schema::EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation; `duration_ms` is required
///
/// ```
/// # use cafe_core::log_op_end;
/// log_op_end!("fast_orders", duration_ms = 3, result_len = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            { $crate::schema::FIELD_DURATION_MS } = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a failed operation with the error's kind and stable code
///
/// `$err` is anything convertible into `ExError`, so both `CafeError` and
/// the store's errors can be passed.
///
/// ```
/// # use cafe_core::{log_op_error, errors::CafeError};
/// log_op_error!("add_review", CafeError::OrderNotFound { order_id: 9 }, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__op_event!(
            error,
            $op,
            $crate::schema::EVENT_END_ERROR,
            { $crate::schema::FIELD_DURATION_MS } = $duration,
            { $crate::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::schema::FIELD_ERR_CODE } = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
