//! Compile-time events for requests, embeds and rejected predicates.
//!
//! With the `tracing` feature off every macro expands to nothing.

/// Emit a debug-level tracing event for a compiled request.
///
/// ```ignore
/// pgrest_trace_compile!(request.method, &request.path, request.query.len());
/// ```
#[macro_export]
macro_rules! pgrest_trace_compile {
    ($method:expr, $path:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            method = %$method,
            path = %$path,
            params = $param_count,
            "pgrest.compile"
        );
    };
}

/// Emit a trace-level event after resource embeds were resolved for a table.
///
/// ```ignore
/// pgrest_trace_embed!(schema.table_name, embeds.fragments.len());
/// ```
#[macro_export]
macro_rules! pgrest_trace_embed {
    ($table:expr, $fragment_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(table = %$table, fragments = $fragment_count, "pgrest.embed");
    };
}

/// Emit a debug-level event when a predicate is rejected during compilation.
///
/// ```ignore
/// pgrest_trace_reject!(&err);
/// ```
#[macro_export]
macro_rules! pgrest_trace_reject {
    ($err:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %$err, "pgrest.reject");
    };
}
