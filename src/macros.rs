/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.wifi_passkey, passkey)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.error_message, None;
///     model.success_message, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{
    build_url, extract_error_message, handle_request_error, is_response_success, map_http_error,
    parse_json_response, BASE_URL,
};

/// Macro for GET requests against the controller API expecting a JSON response.
/// Does not set loading state. Requires domain parameters for event wrapping.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// api_get!(Network, NetworkEvent, "/api/netsettings", StateResponse, NetworkSettingsResponse)
/// ```
#[macro_export]
macro_rules! api_get {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $response_type:ty) => {
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::get($crate::build_url($endpoint))
                .build()
                .then_send(|result| {
                    let event_result: Result<$response_type, String> = match result {
                        Ok(mut response) => $crate::parse_json_response(
                            stringify!($response_event),
                            &mut response,
                        ),
                        Err(e) => Err($crate::map_http_error(stringify!($response_event), e)),
                    };
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
        ])
    };
}

/// Macro for POST requests against the controller API with a JSON body
/// expecting a JSON response, with standard loading and error handling.
/// Requires domain parameters for event wrapping.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
/// The UI shell strips this prefix before sending requests.
///
/// # Example
/// ```ignore
/// api_post!(Network, NetworkEvent, model, "/api/needsWifiChange", NeedsChangeResponse, "Check wifi change",
///     body_json: &edit,
///     expect_json: NeedsWifiChangeResponse
/// )
/// ```
#[macro_export]
macro_rules! api_post {
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $action:expr, body_json: $body:expr, expect_json: $response_type:ty) => {{
        $model.start_loading();
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result: Result<$response_type, String> = match result {
                        Ok(mut response) => $crate::parse_json_response($action, &mut response),
                        Err(e) => Err($crate::map_http_error($action, e)),
                    };
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
            ]),
            Err(e) => $crate::handle_request_error($model, $action, e),
        }
    }};
}

/// Macro for handling JSON response events whose request set no loading state
/// (the `api_get!` requests). Clears any prior error, hands the value to the
/// success handler or stores the error message, then renders.
///
/// # Example
/// ```ignore
/// handle_response!(model, result, {
///     on_success: |m, value| {
///         m.some_field = value;
///     },
/// })
/// ```
#[macro_export]
macro_rules! handle_response {
    ($model:expr, $result:expr, {
        on_success: |$success_model:ident, $value:tt| $success_body:block $(,)?
    }) => {{
        $model.clear_error();
        match $result {
            Ok($value) => {
                #[allow(clippy::redundant_locals)]
                let $success_model = $model;
                $success_body
            }
            Err(e) => {
                $model.error_message = Some(e);
            }
        }
        crux_core::render::render()
    }};
}
